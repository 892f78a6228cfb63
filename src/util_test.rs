use super::*;

mod normalize_lower {
    use super::*;

    #[test]
    fn should_return_ascii_lowercase_when_input_ascii_then_use_fast_path() {
        let result = normalize_lower("HeAdEr");

        assert_eq!(result, "header");
    }

    #[test]
    fn should_return_unicode_lowercase_when_input_unicode_then_preserve_characters() {
        let result = normalize_lower("TÉST");

        assert_eq!(result, "tést");
    }
}

mod equals_ignore_case {
    use super::*;

    #[test]
    fn should_return_true_when_ascii_values_match_case_insensitively_then_detect_equality() {
        assert!(equals_ignore_case("HTTPS://A.COM", "https://a.com"));
    }

    #[test]
    fn should_return_false_when_ascii_values_differ_then_detect_inequality() {
        assert!(!equals_ignore_case("https://a.com", "https://a.co"));
    }

    #[test]
    fn should_compare_unicode_values_case_insensitively() {
        assert!(equals_ignore_case("https://DÉJÀ.fr", "https://déjà.fr"));
    }
}

mod join_header_values {
    use super::*;

    #[test]
    fn should_return_empty_string_when_no_values() {
        let values: [&str; 0] = [];

        assert_eq!(join_header_values(values), "");
    }

    #[test]
    fn should_return_single_value_without_separator() {
        assert_eq!(join_header_values(["X-A"]), "X-A");
    }

    #[test]
    fn should_join_values_in_order_without_whitespace() {
        assert_eq!(join_header_values(["X-A", "X-B"]), "X-A,X-B");
    }
}

mod split_list {
    use super::*;

    #[test]
    fn should_split_on_comma_and_optional_single_space() {
        assert_eq!(split_list("GET, POST,PUT"), vec!["GET", "POST", "PUT"]);
    }

    #[test]
    fn should_keep_additional_whitespace() {
        assert_eq!(split_list("a,  b"), vec!["a", " b"]);
    }

    #[test]
    fn should_yield_single_empty_entry_for_empty_input() {
        assert_eq!(split_list(""), vec![""]);
    }

    #[test]
    fn should_keep_empty_entries_between_separators() {
        assert_eq!(split_list("X-A,,X-B"), vec!["X-A", "", "X-B"]);
    }
}
