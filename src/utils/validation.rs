use crate::utils::error::{ReadingError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReadingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReadingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReadingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ReadingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 名字至少需要 `min_chars` 個字元（以 char 計算，不是 byte）
pub fn validate_min_chars(field_name: &str, value: &str, min_chars: usize) -> Result<()> {
    if value.trim().chars().count() < min_chars {
        return Err(ReadingError::ValidationError {
            field: field_name.to_string(),
            message: format!("Must be at least {} characters", min_chars),
        });
    }
    Ok(())
}

/// 檢查月/日是否為真實日期；沒有年份時以閏年判斷，2 月 29 日視為合法
pub fn validate_calendar_date(
    field_name: &str,
    year: Option<i32>,
    month: u32,
    day: u32,
) -> Result<()> {
    let probe_year = year.unwrap_or(2000);
    if NaiveDate::from_ymd_opt(probe_year, month, day).is_none() {
        return Err(ReadingError::ValidationError {
            field: field_name.to_string(),
            message: format!("{:02}-{:02} is not a calendar date", month, day),
        });
    }
    Ok(())
}
