//! Fixed-format field validators. Each is a full-string match; no trimming or
//! case folding happens here.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Five letters, four digits, one letter (Indian Permanent Account Number).
static PAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

static AADHAAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn is_valid_pan(pan: &str) -> bool {
    PAN.is_match(pan)
}

/// Twelve digits. The Verhoeff checksum is not verified.
pub fn is_valid_aadhaar(aadhaar: &str) -> bool {
    AADHAAR.is_match(aadhaar)
}
