use std::sync::Arc;

use axiom_analysis::HeuristicAnalyzer;
use axiom_core::config::PrivacyConfig;
use axiom_privacy::RedactionEngine;
use proptest::prelude::*;

fn engine() -> RedactionEngine {
    RedactionEngine::new(Arc::new(HeuristicAnalyzer::new()), &PrivacyConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn scrubbed_output_never_contains_raw_email(
        user in "[a-z][a-z0-9.]{2,10}",
        domain in "[a-z]{3,10}",
        tld in "(com|org|fi|io)"
    ) {
        let email = format!("{user}@{domain}.{tld}");
        let input = format!("please write to {email} about the delivery schedule");
        let result = engine().scrub(&input).unwrap();
        prop_assert!(
            !result.text.contains(&email),
            "raw email survived: {}",
            result.text
        );
    }

    #[test]
    fn scrubbed_output_never_contains_plausible_phone(
        digits in "[0-9]{10,14}"
    ) {
        let input = format!("the emergency number is +{digits} at all hours");
        let result = engine().scrub(&input).unwrap();
        prop_assert!(
            !result.text.contains(&digits),
            "raw phone survived: {}",
            result.text
        );
    }

    #[test]
    fn scrub_is_idempotent_on_arbitrary_prose(
        words in proptest::collection::vec("[a-zA-Z]{1,12}", 3..30)
    ) {
        let input = words.join(" ");
        let e = engine();
        let once = e.scrub(&input).unwrap();
        let twice = e.scrub(&once.text).unwrap();
        prop_assert_eq!(once.text, twice.text);
    }

    #[test]
    fn scrub_never_panics_on_unicode(input in "\\PC{0,200}") {
        let _ = engine().scrub(&input);
    }
}
