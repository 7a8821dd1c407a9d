// Domain layer: record models, ports, and the pure extraction rules.

pub mod model;
pub mod ports;

pub mod services;
