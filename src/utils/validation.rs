// ============================================================================
// VALIDATION - client-side checks run before any request
// ============================================================================

use regex::Regex;

use crate::errors::ValidationError;
use crate::utils::constants::PHONE_PATTERN;

lazy_static::lazy_static! {
    static ref PHONE_RE: Option<Regex> = Regex::new(PHONE_PATTERN).ok();
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.as_ref().map_or(false, |re| re.is_match(phone))
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Labels of the fields left blank, in form order
pub fn missing_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
}

/// Blank is zero, anything else must parse
pub fn parse_number_or_zero<N>(value: &str, label: &'static str) -> Result<N, ValidationError>
where
    N: std::str::FromStr + Default,
{
    let value = value.trim();
    if value.is_empty() {
        return Ok(N::default());
    }
    value
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(label))
}
