use crate::domain::model::RawRecord;

/// Ordered candidate columns for one output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChain(pub &'static [&'static str]);

impl FieldChain {
    /// First non-empty value, left to right.
    pub fn resolve(&self, raw: &RawRecord) -> String {
        self.0
            .iter()
            .map(|column| raw.get(column))
            .find(|value| !value.is_empty())
            .unwrap_or("")
            .to_string()
    }
}

const COLOR_LABEL: &str = "Color: ";

/// Drops the "Color: " label and surrounding whitespace.
pub fn clean_color(color: &str) -> String {
    color.replace(COLOR_LABEL, "").trim().to_string()
}

/// Keeps the first of several newline-separated image URLs.
pub fn first_image(images: &str) -> String {
    images.split('\n').next().unwrap_or("").trim().to_string()
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
