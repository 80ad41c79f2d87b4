use crate::MAX_MACHINE_NAME_LEN;

/// Ensure a machine name is lower snake case, starts with a letter, and
/// fits the maximum length.
pub(crate) fn validate_machine_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("machine name is empty".to_string());
    }
    if name.len() > MAX_MACHINE_NAME_LEN {
        return Err(format!(
            "machine name '{name}' exceeds max length {MAX_MACHINE_NAME_LEN}"
        ));
    }
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(format!("machine name '{name}' must start with a lowercase letter"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(format!("machine name '{name}' contains invalid character '{c}'"));
    }

    Ok(())
}
