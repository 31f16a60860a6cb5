pub mod pricing;
pub mod reentrancy;
pub mod validation;
pub mod window;

use anchor_lang::prelude::*;

use crate::errors::MatchdayError;

pub fn string_to_bytes(input: &str, max_len: usize) -> Result<Vec<u8>> {
    require!(input.len() <= max_len, MatchdayError::InvalidCharacters);

    let mut bytes = input.as_bytes().to_vec();
    bytes.resize(max_len, 0);
    Ok(bytes)
}

pub fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec())
        .unwrap_or_default()
        .trim_end_matches('\0')
        .to_string()
}

pub fn validate_string(input: &str) -> Result<()> {
    require!(
        input.chars().all(|c| c.is_ascii_graphic() || c == ' '),
        MatchdayError::InvalidCharacters
    );
    Ok(())
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(MatchdayError::MathOverflow.into())
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(MatchdayError::MathOverflow.into())
}

pub fn safe_mul(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(MatchdayError::MathOverflow.into())
}

pub fn safe_div(a: u64, b: u64) -> Result<u64> {
    if b == 0 {
        return Err(MatchdayError::MathOverflow.into());
    }
    a.checked_div(b).ok_or(MatchdayError::MathOverflow.into())
}
