//! Input validation helpers
//!
//! Text length limits and the "missing" rule shared by every request schema:
//! a field is missing when it is absent, `null`, or blank after trimming.

use crate::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Names: food, customer, rider, lodge
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, size, zone, free-text times, ids
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Addresses and streets
pub const MAX_ADDRESS_LEN: usize = 500;

/// Notes (doorstep additional info)
pub const MAX_NOTE_LEN: usize = 500;

/// Add-ins per food item
pub const MAX_ADDINS: usize = 50;

/// Maximum allowed price per item
pub const MAX_PRICE: f64 = 100_000_000.0;

/// Keep the value only if it carries non-blank text
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate that a text value is within the length limit.
pub fn check_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueTooLong,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Required text: `<field> is required` when missing, length-checked otherwise.
pub fn require_text(value: Option<String>, field: &str, max_len: usize) -> AppResult<String> {
    let value = present(value).ok_or_else(|| AppError::required_field(field))?;
    check_len(&value, field, max_len)?;
    Ok(value)
}

/// Optional text: length-checked if present. Blank text is kept as supplied.
pub fn optional_text(
    value: Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<Option<String>> {
    if let Some(v) = &value {
        check_len(v, field, max_len)?;
    }
    Ok(value)
}

/// Prices must be finite, non-negative and below [`MAX_PRICE`].
pub fn check_price(price: f64, field: &str) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a non-negative amount not above {MAX_PRICE}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

pub fn check_addins(addins: &[String], field: &str) -> AppResult<()> {
    if addins.len() > MAX_ADDINS {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} has too many entries (max {MAX_ADDINS})"),
        )
        .with_detail("field", field));
    }
    for addin in addins {
        check_len(addin, field, MAX_NAME_LEN)?;
    }
    Ok(())
}
