//! Required-field checks for submitted forms

/// Returns the names of the fields whose values are blank
///
/// ```rust
/// use core_kernel::validation::missing_fields;
///
/// let missing = missing_fields(&[("pet_name", "Max"), ("owner_name", "  ")]);
/// assert_eq!(missing, vec!["owner_name".to_string()]);
/// ```
pub fn missing_fields(fields: &[(&str, &str)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Same as [`missing_fields`] for optional values, where `None` is blank
pub fn missing_optional(fields: &[(&str, Option<&str>)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name.to_string())
        .collect()
}
