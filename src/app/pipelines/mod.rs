pub mod apparel;
pub mod jewelry;
