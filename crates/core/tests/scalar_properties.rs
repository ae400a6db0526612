//! Property tests for scalar construction and literal codecs.

use proptest::prelude::*;
use tristate_core::{Int64, Nullable, Status, Text};

proptest! {
    #[test]
    fn test_constructor_forms_agree(v in any::<i64>(), assigned in any::<bool>(), null in any::<bool>()) {
        let full = Int64::new_with(v, assigned, null);
        prop_assert_eq!(&full, &Int64::with_status(v, Status::new(assigned, null)));
        prop_assert!(!(full.is_null() && !full.is_assigned()));
        if !null {
            prop_assert_eq!(&full, &Int64::new_assigned(v, assigned));
        }
        if assigned && !null {
            prop_assert_eq!(&full, &Int64::new(v));
        }
    }

    #[test]
    fn test_int64_literal_round_trip(v in any::<i64>()) {
        let encoded = Int64::new(v).encode_literal().unwrap();
        prop_assert_eq!(Int64::decode_literal(encoded.as_bytes()).unwrap(), Int64::new(v));
    }

    #[test]
    fn test_text_literal_round_trip(s in any::<String>()) {
        let encoded = Text::new(s.clone()).encode_literal().unwrap();
        let decoded: Nullable<String> = Text::decode_literal(encoded.as_bytes()).unwrap();
        prop_assert_eq!(decoded.as_str(), s.as_str());
    }

    #[test]
    fn test_text_serde_matches_literal_codec(s in "[a-z<>&\"]{0,16}") {
        let v = Text::new(s);
        prop_assert_eq!(serde_json::to_string(&v).unwrap(), v.encode_literal().unwrap());
    }
}
