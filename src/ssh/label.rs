/// Sanitize a raw string into a valid SSH key label.
///
/// Cloud Platform only accepts letters, digits, and underscores in key
/// labels; everything else is replaced with an underscore.
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
