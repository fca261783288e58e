use crate::errors::EmailValidatorError;
use crate::validation::EmailValidator;
use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;
use tracing::debug;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Printable specials allowed in an unquoted local part (RFC 5322 `atext`).
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Reason an address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxViolation {
    #[error("address is longer than 254 bytes")]
    TooLong,
    #[error("address has no unquoted '@' separator")]
    MissingSeparator,
    #[error("local part is empty")]
    EmptyLocalPart,
    #[error("local part is longer than 64 bytes")]
    LocalPartTooLong,
    #[error("local part is neither a dot-atom nor a quoted string")]
    MalformedLocalPart,
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain contains an invalid label")]
    MalformedDomain,
    #[error("domain literal is not an IPv4 or tagged IPv6 address")]
    MalformedDomainLiteral,
}

/// Checks `email` against RFC 5322 syntax with RFC 6531 (UTF-8) extensions.
///
/// Lengths are measured in bytes, as SMTP does.
pub fn check_syntax(email: &str) -> Result<(), SyntaxViolation> {
    if email.len() > MAX_ADDRESS_LEN {
        return Err(SyntaxViolation::TooLong);
    }

    let (local, domain) = split_address(email)?;
    check_local_part(local)?;
    check_domain(domain)
}

/// Splits at the first `@` that is not inside a quoted string.
fn split_address(email: &str) -> Result<(&str, &str), SyntaxViolation> {
    let mut quoted = false;
    let mut escaped = false;

    for (i, c) in email.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            '@' if !quoted => return Ok((&email[..i], &email[i + 1..])),
            _ => {}
        }
    }

    Err(SyntaxViolation::MissingSeparator)
}

fn check_local_part(local: &str) -> Result<(), SyntaxViolation> {
    if local.is_empty() {
        return Err(SyntaxViolation::EmptyLocalPart);
    }
    if local.len() > MAX_LOCAL_LEN {
        return Err(SyntaxViolation::LocalPartTooLong);
    }

    let well_formed = match local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(content) => is_quoted_content(content),
        None => is_dot_atom(local),
    };

    if well_formed {
        Ok(())
    } else {
        Err(SyntaxViolation::MalformedLocalPart)
    }
}

/// Inside quotes anything goes except a bare `"`; only `\\` and `\"` escape.
fn is_quoted_content(content: &str) -> bool {
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') | Some('"') => {}
                _ => return false,
            },
            '"' => return false,
            _ => {}
        }
    }
    true
}

fn is_dot_atom(local: &str) -> bool {
    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_alphanumeric() || ATEXT_SPECIALS.contains(c))
    })
}

fn check_domain(domain: &str) -> Result<(), SyntaxViolation> {
    if domain.is_empty() {
        return Err(SyntaxViolation::EmptyDomain);
    }

    if let Some(literal) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        return if is_address_literal(literal) {
            Ok(())
        } else {
            Err(SyntaxViolation::MalformedDomainLiteral)
        };
    }

    if domain.split('.').all(is_domain_label) {
        Ok(())
    } else {
        Err(SyntaxViolation::MalformedDomain)
    }
}

fn is_address_literal(literal: &str) -> bool {
    match literal.strip_prefix("IPv6:") {
        Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
        None => literal.parse::<Ipv4Addr>().is_ok(),
    }
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// Production validator backed by [`check_syntax`]. Never faults.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxEmailValidator;

impl EmailValidator for SyntaxEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        match check_syntax(email) {
            Ok(()) => Ok(true),
            Err(violation) => {
                debug!(%violation, "email rejected by syntax check");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert_eq!(check_syntax("simple@example.com"), Ok(()));
        assert_eq!(check_syntax("very.common@example.com"), Ok(()));
        assert_eq!(check_syntax("user.name+tag@example.com"), Ok(()));
        assert_eq!(check_syntax("x@localhost"), Ok(()));
    }

    #[test]
    fn test_accepts_quoted_local_parts() {
        assert_eq!(check_syntax("\"with space\"@example.com"), Ok(()));
        assert_eq!(check_syntax("\"quoted@local\"@example.com"), Ok(()));
        assert_eq!(check_syntax("\"escaped\\\"quote\"@example.com"), Ok(()));
    }

    #[test]
    fn test_accepts_address_literals() {
        assert_eq!(check_syntax("user@[192.168.0.1]"), Ok(()));
        assert_eq!(check_syntax("user@[IPv6:2001:db8::1]"), Ok(()));
    }

    #[test]
    fn test_accepts_internationalized_addresses() {
        assert_eq!(check_syntax("Pelé@exämple.中国"), Ok(()));
        assert_eq!(check_syntax("用户@例子.中国"), Ok(()));
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert_eq!(
            check_syntax("plainaddress"),
            Err(SyntaxViolation::MissingSeparator)
        );
        assert_eq!(check_syntax(""), Err(SyntaxViolation::MissingSeparator));
        // The only '@' sits inside an unterminated quote.
        assert_eq!(
            check_syntax("\"unclosed@example.com"),
            Err(SyntaxViolation::MissingSeparator)
        );
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert_eq!(
            check_syntax("@example.com"),
            Err(SyntaxViolation::EmptyLocalPart)
        );
        assert_eq!(check_syntax("user@"), Err(SyntaxViolation::EmptyDomain));
    }

    #[test]
    fn test_rejects_bad_dot_atoms() {
        for email in [
            "no..dots@example.com",
            ".leading@example.com",
            "trailing.@example.com",
            "spaces unquoted@example.com",
            "\"invalid\\escape\"@example.com",
        ] {
            assert_eq!(
                check_syntax(email),
                Err(SyntaxViolation::MalformedLocalPart),
                "{email}"
            );
        }
    }

    #[test]
    fn test_rejects_bad_domains() {
        for email in [
            "user@-hyphenstart.com",
            "user@hyphenend-.com",
            "user@double..dot.com",
            "user@ex_mple.com",
            "user@[missing.bracket",
        ] {
            assert_eq!(
                check_syntax(email),
                Err(SyntaxViolation::MalformedDomain),
                "{email}"
            );
        }
    }

    #[test]
    fn test_rejects_bad_literals() {
        assert_eq!(
            check_syntax("user@[192.168.0.256]"),
            Err(SyntaxViolation::MalformedDomainLiteral)
        );
        assert_eq!(
            check_syntax("user@[IPv6:2001:db8:::1]"),
            Err(SyntaxViolation::MalformedDomainLiteral)
        );
        assert_eq!(
            check_syntax("user@[2001:db8::1]"),
            Err(SyntaxViolation::MalformedDomainLiteral)
        );
    }

    #[test]
    fn test_enforces_length_limits() {
        let local = "a".repeat(MAX_LOCAL_LEN);
        assert_eq!(check_syntax(&format!("{local}@example.com")), Ok(()));

        let long_local = "a".repeat(MAX_LOCAL_LEN + 1);
        assert_eq!(
            check_syntax(&format!("{long_local}@example.com")),
            Err(SyntaxViolation::LocalPartTooLong)
        );

        let label = "b".repeat(MAX_LABEL_LEN);
        let domain = format!("{label}.{label}.{}", "c".repeat(61));
        let longest = format!("{local}@{domain}");
        assert_eq!(longest.len(), MAX_ADDRESS_LEN);
        assert_eq!(check_syntax(&longest), Ok(()));

        assert_eq!(
            check_syntax(&format!("{longest}x")),
            Err(SyntaxViolation::TooLong)
        );
    }

    #[test]
    fn test_validator_maps_violations_to_false() {
        let validator = SyntaxEmailValidator;
        assert!(validator.is_valid("user@example.com").unwrap());
        assert!(!validator.is_valid("user@@example.com").unwrap());
        assert!(!validator.is_valid("   ").unwrap());
    }
}
