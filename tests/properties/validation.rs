//! Property tests for domain and email validation.

use proptest::prelude::*;

use odkx_init::domain::policies::{validate_domain, validate_email};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?").unwrap()
}

fn tld() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{2,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One to three well-formed labels plus a TLD is a valid domain.
    #[test]
    fn property_well_formed_domains_are_accepted(
        labels in proptest::collection::vec(label(), 1..=3),
        tld in tld(),
    ) {
        let domain = format!("{}.{}", labels.join("."), tld);
        prop_assert!(validate_domain(&domain), "rejected {}", domain);
    }

    /// PROPERTY: A label starting or ending with '-' is rejected.
    #[test]
    fn property_hyphen_edges_are_rejected(label in label(), tld in tld()) {
        let leading = format!("-{}.{}", label, tld);
        let trailing = format!("{}-.{}", label, tld);
        prop_assert!(!validate_domain(&leading), "accepted {}", leading);
        prop_assert!(!validate_domain(&trailing), "accepted {}", trailing);
    }

    /// PROPERTY: Validators never panic, and whitespace is never valid.
    #[test]
    fn property_validators_never_panic(input in ".{0,80}") {
        let domain_ok = validate_domain(&input);
        let email_ok = validate_email(&input);
        if input.chars().any(char::is_whitespace) {
            prop_assert!(!domain_ok);
            prop_assert!(!email_ok);
        }
    }

    /// PROPERTY: Every accepted email has exactly one '@'.
    #[test]
    fn property_accepted_email_has_one_at(local in "[a-z0-9._%+-]{1,12}", domain in label(), tld in tld()) {
        let email = format!("{}@{}.{}", local, domain, tld);
        if validate_email(&email) {
            prop_assert_eq!(email.matches('@').count(), 1);
        }
    }
}
