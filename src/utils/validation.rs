use crate::utils::error::{GuideError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 只檢查格式：一個 '@'，兩側都不能是空的
pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    validate_non_empty_string(field_name, email)?;

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: email.to_string(),
            reason: "Email must look like name@domain".to_string(),
        }),
    }
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            return Err(GuideError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate staff ID".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_not_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(GuideError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}
