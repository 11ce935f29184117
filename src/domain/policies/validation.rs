//! Input validation policy
//!
//! Syntax checks for the domain name and admin email. A rejected value ends
//! the run; callers must not retry in a loop.

use std::sync::OnceLock;

use regex::Regex;

/// One to three dotted labels (1-63 chars, no leading/trailing hyphen)
/// followed by a 2-6 letter top-level label.
const DOMAIN_PATTERN: &str =
    r"^([A-Za-z0-9]\.|[A-Za-z0-9][A-Za-z0-9-]{0,61}[A-Za-z0-9]\.){1,3}[A-Za-z]{2,6}$";

/// Lowercase character classes only; mixed-case addresses are rejected.
const EMAIL_PATTERN: &str = r"^[a-z0-9!#$%&'*+/=?^_`{|}~\-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~\-]+)*@(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?$";

fn domain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DOMAIN_PATTERN).expect("domain pattern is valid"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

pub fn validate_domain(domain: &str) -> bool {
    !domain.is_empty() && domain_regex().is_match(domain)
}

pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email_regex().is_match(email)
}
