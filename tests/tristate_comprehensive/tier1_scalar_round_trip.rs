//! decode(encode(v)) == v for present values.

use chrono::{NaiveDate, Timelike};
use proptest::prelude::*;
use tristate::types::{Bool, Bytes, Date, Float64, Int64, Text, Timestamp};

#[test]
fn test_text_round_trip() {
    for s in ["", "plain", "quote \" and \\ slash", "<html> & </html>", "tab\tnew\nline"] {
        let v = Text::new(s.to_string());
        let back = Text::decode_literal(v.encode_literal().unwrap().as_bytes()).unwrap();
        assert_eq!(back, v);
    }
}

#[test]
fn test_bool_round_trip() {
    for b in [true, false] {
        let v = Bool::new(b);
        assert_eq!(Bool::decode_literal(v.encode_literal().unwrap().as_bytes()).unwrap(), v);
    }
}

#[test]
fn test_float_round_trip() {
    for f in [0.0, -0.5, 1e21, 1.5e-7, 123456.789, f64::MAX, f64::MIN_POSITIVE] {
        let v = Float64::new(f);
        let back = Float64::decode_literal(v.encode_literal().unwrap().as_bytes()).unwrap();
        assert_eq!(back, v, "{}", f);
    }
}

#[test]
fn test_date_round_trip() {
    let v = Date::new(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    assert_eq!(Date::decode_literal(v.encode_literal().unwrap().as_bytes()).unwrap(), v);
}

#[test]
fn test_timestamp_round_trip_normalizes() {
    let v = Timestamp::decode_literal(br#""Thu, 02 Jan 2020 03:04:05 +0800""#).unwrap();
    let encoded = v.encode_literal().unwrap();
    assert_eq!(encoded, r#""2020-01-02T03:04:05+08:00""#);
    let back = Timestamp::decode_literal(encoded.as_bytes()).unwrap();
    assert_eq!(back.value(), v.value());
    assert_eq!(back.value().nanosecond(), 0);
}

#[test]
fn test_bytes_decode_encode_asymmetry() {
    // Decoding keeps the literal verbatim, encoding quotes it again.
    let v = Bytes::decode_literal(br#""ab""#).unwrap();
    assert_eq!(v.as_bytes(), br#""ab""#);
    let plain = Bytes::new(b"ab".to_vec());
    assert_eq!(plain.encode_literal().unwrap(), r#""ab""#);
}

proptest! {
    #[test]
    fn test_int64_round_trip_prop(i in any::<i64>()) {
        let v = Int64::new(i);
        prop_assert_eq!(Int64::decode_literal(v.encode_literal().unwrap().as_bytes()).unwrap(), v);
    }

    #[test]
    fn test_float_round_trip_prop(f in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let v = Float64::new(f);
        prop_assert_eq!(Float64::decode_literal(v.encode_literal().unwrap().as_bytes()).unwrap(), v);
    }
}
