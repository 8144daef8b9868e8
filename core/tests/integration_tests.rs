use chrono::{FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use xsd_lexical_core::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn offset(hours: i32, minutes: i32) -> Zone {
    let seconds = hours.signum() * (hours.abs() * 3600 + minutes * 60);
    Zone::fixed(FixedOffset::east_opt(seconds).unwrap()).unwrap()
}

fn round_trip<T>(value: &T) -> T
where
    T: XsdEncode + XsdDecode,
{
    let text = value.encode().unwrap();
    T::decode(&text).unwrap()
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn test_calendar_round_trip_in_utc() {
    let dates = [
        Date::new(2020, 6, 22, Zone::Utc).unwrap(),
        Date::new(-2020, 6, 22, Zone::Utc).unwrap(),
        Date::new(2000, 2, 29, Zone::Utc).unwrap(),
        Date::new(1, 1, 1, Zone::Utc).unwrap(),
    ];
    for date in dates {
        let back = round_trip(&date);
        assert_eq!(back, date);
        assert!(back.zone().is_utc());
    }

    let stamps = [
        DateTime::new(2020, 6, 22, 12, 0, 0, Zone::Utc).unwrap(),
        DateTime::new(-2020, 6, 22, 12, 0, 0, Zone::Utc).unwrap(),
        DateTime::new(1999, 12, 31, 23, 59, 59, Zone::Utc)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap(),
        DateTime::new(2001, 10, 26, 21, 32, 52, Zone::Utc)
            .unwrap()
            .with_nanosecond(126_790_000)
            .unwrap(),
    ];
    for stamp in stamps {
        let back = round_trip(&stamp);
        assert_eq!(back, stamp);
        assert!(back.zone().is_utc());
    }

    for year in [-9999, -1, 0, 1, 2024, 99999] {
        let g = GYear::new(year, Zone::Utc).unwrap();
        assert_eq!(round_trip(&g), g);
    }
}

#[test]
fn test_calendar_round_trip_keeps_zone_classification() {
    let zones = [Zone::Local, Zone::Utc, offset(0, 0), offset(2, 0), offset(-9, 30)];
    for zone in zones {
        let date = Date::new(2001, 10, 26, zone).unwrap();
        assert_eq!(round_trip(&date).zone(), zone);

        let stamp = DateTime::new(2001, 10, 26, 21, 32, 52, zone).unwrap();
        assert_eq!(round_trip(&stamp).zone(), zone);
    }
}

#[test]
fn test_out_of_range_zone_never_reaches_a_constructor() {
    for seconds in [15 * 3600, -(14 * 3600 + 60), 90] {
        let offset = FixedOffset::east_opt(seconds).unwrap();
        let err = Zone::fixed(offset)
            .and_then(|zone| Date::new(2001, 10, 26, zone))
            .unwrap_err();
        assert!(err.is_out_of_range(), "offset {seconds}s");
    }

    for seconds in [14 * 3600, -14 * 3600, -(9 * 3600 + 30 * 60), 0] {
        let zone = Zone::fixed(FixedOffset::east_opt(seconds).unwrap()).unwrap();
        let date = Date::new(2001, 10, 26, zone).unwrap();
        let text = date.encode().unwrap();
        assert_eq!(Date::decode(&text).unwrap(), date, "{text}");
        match zone {
            Zone::Offset(offset) => assert_eq!(offset.seconds(), seconds),
            other => panic!("expected an offset zone, got {other:?}"),
        }
    }
}

#[test]
fn test_base64_round_trip() {
    let samples: [&[u8]; 5] = [b"", b"a", b"qwertyuiop", &[0, 255, 128, 7], &[0xfb; 64]];
    for bytes in samples {
        let value = Base64Binary::from(bytes);
        assert_eq!(round_trip(&value).binary(), bytes);
    }
}

// ---------------------------------------------------------------------------
// Scalar decode contracts
// ---------------------------------------------------------------------------

#[test]
fn test_boolean_contract() {
    assert_eq!(Boolean::decode("true").unwrap(), Boolean(true));
    assert_eq!(Boolean::decode("false").unwrap(), Boolean(false));
    assert_eq!(Boolean::decode("1").unwrap(), Boolean(true));
    assert_eq!(Boolean::decode("0").unwrap(), Boolean(false));
    assert!(matches!(
        Boolean::decode("ok"),
        Err(XsdError::InvalidFormat { type_name: "boolean", .. })
    ));
}

#[test]
fn test_byte_contract() {
    assert_eq!(Byte::decode("-128").unwrap().as_i8(), -128);
    assert_eq!(Byte::decode("127").unwrap().as_i8(), 127);
    assert!(matches!(
        Byte::decode("1524"),
        Err(XsdError::OutOfRange { type_name: "byte", .. })
    ));
    assert!(Byte::decode("0A").unwrap_err().is_invalid_format());
    assert!(Byte::decode("INF").unwrap_err().is_invalid_format());
}

#[test]
fn test_decimal_rejects_before_parsing() {
    for text in ["1e3", "0x10", "1_000", "١٢", "+-1", "1.", "-.5"] {
        let result = Decimal::decode(text);
        match text {
            "1." | "-.5" => assert!(result.is_ok(), "{text:?} should be accepted"),
            _ => assert!(result.unwrap_err().is_invalid_format(), "{text:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Calendar decode contracts
// ---------------------------------------------------------------------------

#[test]
fn test_date_contract() {
    let local = Date::decode("2001-10-26").unwrap();
    assert_eq!(
        (local.time().year(), local.time().month(), local.time().day()),
        (2001, 10, 26)
    );
    assert!(local.zone().is_local());

    let utc = Date::decode("2001-10-26Z").unwrap();
    assert_eq!(utc.date(), local.date());
    assert!(utc.zone().is_utc());

    let shifted = Date::decode("2001-10-26+02:00").unwrap();
    assert_eq!(shifted.date(), local.date());
    assert_eq!(shifted.zone(), offset(2, 0));

    for text in ["2001-10", "2001-10-32", "2001-13-26+02:00", "01-10-26"] {
        assert!(Date::decode(text).unwrap_err().is_invalid_format(), "{text:?}");
    }
}

#[test]
fn test_date_time_contract() {
    let dt = DateTime::decode("2001-10-26T21:32:52.12679").unwrap();
    assert_eq!(dt.time().second(), 52);
    assert_eq!(dt.time().nanosecond(), 126_790_000);

    assert!(
        DateTime::decode("2001-10-26T25:32:52+02:00")
            .unwrap_err()
            .is_invalid_format()
    );
}

#[test]
fn test_offset_values_resolve_to_the_same_instant() {
    let east = DateTime::decode("2001-10-26T21:32:52+02:00").unwrap();
    let utc = DateTime::decode("2001-10-26T19:32:52Z").unwrap();
    assert_ne!(east, utc);
    assert_eq!(east.time().to_fixed(), utc.time().to_fixed());
}

// ---------------------------------------------------------------------------
// Encode-only types
// ---------------------------------------------------------------------------

#[test]
fn test_encode_only_scenarios() {
    assert_eq!(AnyUri::new(" 123 ").encode().unwrap(), "123");
    assert_eq!(
        Duration::from(TimeDelta::hours(1) + TimeDelta::seconds(30))
            .encode()
            .unwrap(),
        "PT1H30S"
    );
    assert_eq!(
        GYearMonth::new(2001, 10, offset(-5, 0)).unwrap().encode().unwrap(),
        "2001-10-05:00"
    );
    assert_eq!(GMonth::new(10, Zone::Utc).unwrap().encode().unwrap(), "--10Z");
    assert_eq!(GMonthDay::new(10, 26, Zone::Local).unwrap().encode().unwrap(), "--10-26");
    assert_eq!(GDay::new(26, Zone::Utc).unwrap().encode().unwrap(), "---26Z");
}

// ---------------------------------------------------------------------------
// Serde integration
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Person {
    name: Token,
    born: Date,
    last_seen: DateTime,
    photo: Base64Binary,
    available: Boolean,
    age: UnsignedByte,
    homepage: AnyUri,
}

#[test]
fn test_serde_uses_lexical_forms() {
    let person = Person {
        name: Token::new(" John Doe\n"),
        born: Date::new(2020, 6, 22, Zone::Utc).unwrap(),
        last_seen: DateTime::new(2024, 1, 15, 10, 30, 0, offset(1, 0)).unwrap(),
        photo: Base64Binary::from("qwertyuiop"),
        available: Boolean(true),
        age: UnsignedByte(3),
        homepage: AnyUri::new(" https://example.com "),
    };

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "John Doe",
            "born": "2020-06-22Z",
            "last_seen": "2024-01-15T10:30:00+01:00",
            "photo": "cXdlcnR5dWlvcA==",
            "available": "true",
            "age": "3",
            "homepage": "https://example.com",
        })
    );

    let back: Person = serde_json::from_value(json).unwrap();
    assert_eq!(back.born, person.born);
    assert_eq!(back.last_seen, person.last_seen);
    assert_eq!(back.photo, person.photo);
    assert_eq!(back.name.as_str(), "John Doe");
}

#[test]
fn test_serde_reports_decode_errors() {
    let raw = serde_json::json!({
        "name": "x",
        "born": "2001-13-26",
        "last_seen": "2024-01-15T10:30:00Z",
        "photo": "",
        "available": "1",
        "age": "0",
        "homepage": "",
    });
    let err = serde_json::from_value::<Person>(raw).unwrap_err();
    assert!(err.to_string().contains("invalid date lexical form"), "{err}");
}

#[test]
fn test_encode_only_types_serialize() {
    let spans = vec![
        Duration::from(TimeDelta::minutes(90)),
        Duration::from(TimeDelta::zero()),
    ];
    assert_eq!(
        serde_json::to_string(&spans).unwrap(),
        r#"["PT1H30M","PT0S"]"#
    );

    let entities: Entities = vec![Entity::new("a"), Entity::new(" b ")].into();
    assert_eq!(serde_json::to_string(&entities).unwrap(), r#""a b""#);
}

#[test]
fn test_from_str_matches_decode() {
    let parsed: DateTime = "2001-10-26T21:32:52Z".parse().unwrap();
    assert_eq!(parsed, DateTime::decode("2001-10-26T21:32:52Z").unwrap());
    assert!("nope".parse::<GYear>().is_err());
}
