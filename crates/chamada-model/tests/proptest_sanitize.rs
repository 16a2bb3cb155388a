use chamada_model::sanitize_activity;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, ' ' | '_' | '-' | '@')
        || "áéíóúãõàèùçÁÉÍÓÚÀÈÙÇ".contains(c)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn sanitize_output_is_allow_listed(raw in "\\PC{0,40}") {
        let clean = sanitize_activity(&raw);
        prop_assert!(clean.chars().all(is_allowed));
    }

    #[test]
    fn sanitize_is_idempotent(raw in "\\PC{0,40}") {
        let once = sanitize_activity(&raw);
        prop_assert_eq!(sanitize_activity(&once), once);
    }

    #[test]
    fn sanitize_preserves_char_count(raw in "\\PC{0,40}") {
        prop_assert_eq!(sanitize_activity(&raw).chars().count(), raw.chars().count());
    }
}
