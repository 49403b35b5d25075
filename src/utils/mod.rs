//! Utility functions for presenting computed statistics

/// Format an integer with thousands separators
///
/// # Arguments
/// * `value` - The number to format
///
/// # Returns
/// The number grouped in threes, e.g. `1234567` becomes `"1,234,567"`
#[must_use]
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        formatted.push('-');
    }
    let lead = digits.len() % 3;
    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (index + 3 - lead) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
