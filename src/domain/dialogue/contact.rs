//! Extraction of a name and phone number from a free-text reply.
//!
//! Policy:
//! 1. All ASCII digits of the reply are joined into one digit string.
//! 2. A leading Brazilian country code `55` is dropped when the string has
//!    12 or 13 digits.
//! 3. A remaining length of 8 to 11 digits is taken as the phone.
//! 4. With a phone, the name is the reply minus every digit, with runs of
//!    `- ( ) +` and whitespace collapsed to one space, trimmed.
//! 5. Without a phone, the whole trimmed reply is the name.

use serde::Serialize;

const COUNTRY_PREFIX: &str = "55";
const PREFIXED_LENGTHS: [usize; 2] = [12, 13];
const PHONE_LENGTHS: std::ops::RangeInclusive<usize> = 8..=11;

/// Contact details parsed from a reply. Either part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl ContactDetails {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

/// Parses `reply` into optional name and phone.
pub fn extract_contact(reply: &str) -> ContactDetails {
    let phone = phone_digits(reply);

    let name = match phone {
        Some(_) => strip_phone_residue(reply),
        None => reply.trim().to_string(),
    };

    ContactDetails {
        name: Some(name).filter(|n| !n.is_empty()),
        phone,
    }
}

fn phone_digits(reply: &str) -> Option<String> {
    let digits: String = reply.chars().filter(|c| c.is_ascii_digit()).collect();

    let national = if digits.starts_with(COUNTRY_PREFIX) && PREFIXED_LENGTHS.contains(&digits.len()) {
        &digits[COUNTRY_PREFIX.len()..]
    } else {
        digits.as_str()
    };

    PHONE_LENGTHS
        .contains(&national.len())
        .then(|| national.to_string())
}

fn strip_phone_residue(reply: &str) -> String {
    let mut out = String::with_capacity(reply.len());
    let mut pending_gap = false;

    for c in reply.chars() {
        if c.is_ascii_digit() {
            continue;
        }
        if c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+') {
            pending_gap = true;
            continue;
        }
        if pending_gap && !out.is_empty() {
            out.push(' ');
        }
        pending_gap = false;
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(reply: &str) -> (Option<String>, Option<String>) {
        let c = extract_contact(reply);
        (c.name, c.phone)
    }

    #[test]
    fn name_followed_by_mobile_number() {
        assert_eq!(
            extract("Maria 11999998888"),
            (Some("Maria".into()), Some("11999998888".into()))
        );
    }

    #[test]
    fn formatted_number_with_country_code() {
        assert_eq!(
            extract("+55 (11) 99999-8888 João Silva"),
            (Some("João Silva".into()), Some("11999998888".into()))
        );
    }

    #[test]
    fn twelve_digit_prefixed_landline() {
        assert_eq!(
            extract("Pedro, 55 11 3333-4444"),
            (Some("Pedro,".into()), Some("1133334444".into()))
        );
    }

    #[test]
    fn eight_digit_local_number() {
        assert_eq!(extract("Ana 3333-4444"), (Some("Ana".into()), Some("33334444".into())));
    }

    #[test]
    fn number_only_reply_has_no_name() {
        assert_eq!(extract("(11) 98888-7777"), (None, Some("11988887777".into())));
    }

    #[test]
    fn name_only_reply_has_no_phone() {
        assert_eq!(extract("  Maria Clara  "), (Some("Maria Clara".into()), None));
    }

    #[test]
    fn short_digit_run_stays_part_of_the_name() {
        assert_eq!(extract("Carlos 123"), (Some("Carlos 123".into()), None));
    }

    #[test]
    fn too_many_digits_is_not_a_phone() {
        assert_eq!(
            extract("José 119999988887777"),
            (Some("José 119999988887777".into()), None)
        );
    }

    #[test]
    fn thirteen_digits_without_prefix_is_not_a_phone() {
        assert_eq!(extract("1199999888877"), (Some("1199999888877".into()), None));
    }

    #[test]
    fn hyphenated_name_collapses_to_spaces_when_phone_present() {
        assert_eq!(
            extract("Ana-Paula 11999998888"),
            (Some("Ana Paula".into()), Some("11999998888".into()))
        );
    }

    #[test]
    fn digits_inside_the_name_join_the_phone() {
        assert_eq!(
            extract("Apto 5 Maria 3333-4444"),
            (Some("Apto Maria".into()), Some("533334444".into()))
        );
    }

    #[test]
    fn blank_reply_yields_nothing() {
        assert!(extract_contact("   ").is_empty());
    }
}
