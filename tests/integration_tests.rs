use serde::{Deserialize, Serialize};
use xsd_literal::{
    parse, validate, Boolean, Datatype, DatatypeRegistry, Date, DateTime, Decimal, Double,
    Duration, Error, ErrorKind, Float, Integer, LexicalOptions, WhiteSpace, XsdType, XsdValue,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Measurement {
    amount: Decimal,
    reading: Double,
    taken_at: DateTime,
    valid: Boolean,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Contract {
    id: Integer,
    signed: Date,
    term: Duration,
}

#[test]
fn test_struct_fields_serialize_as_canonical_literals() {
    let measurement = Measurement {
        amount: "010.50".parse().unwrap(),
        reading: "-1e-2".parse().unwrap(),
        taken_at: "2020-06-01T08:30:00+02:00".parse().unwrap(),
        valid: "1".parse().unwrap(),
    };

    let json = serde_json::to_string(&measurement).unwrap();
    assert_eq!(
        json,
        r#"{"amount":"10.5","reading":"-1.0E-2","taken_at":"2020-06-01T06:30:00Z","valid":"true"}"#
    );

    let back: Measurement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, measurement);
}

#[test]
fn test_struct_fields_deserialize_from_any_valid_spelling() {
    let contract: Contract = serde_json::from_str(
        r#"{"id":"+0042","signed":"2021-03-04-00:00","term":"P18M"}"#,
    )
    .unwrap();
    assert_eq!(contract.id, Integer::from(42i64));
    assert_eq!(contract.signed.to_string(), "2021-03-04Z");
    assert_eq!(contract.term.to_string(), "P1Y6M");
}

#[test]
fn test_deserialize_rejects_invalid_literal() {
    let err = serde_json::from_str::<Contract>(r#"{"id":"4.2","signed":"2021-03-04","term":"P1D"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid integer literal"));
}

#[test]
fn test_whitespace_collapse() {
    let collapse = LexicalOptions::new().with_whitespace(WhiteSpace::Collapse);

    assert!(!Decimal::validate(" +007.100"));
    assert!(Decimal::validate_with(" +007.100", &collapse));
    assert_eq!(
        Decimal::parse_with("\t+007.100\n", &collapse).unwrap().to_string(),
        "7.1"
    );

    let mut literal = String::from(" +007.100");
    assert!(Decimal::canonicalize_with(&mut literal, &collapse).unwrap());
    assert_eq!(literal, "7.1");

    // Collapsing never makes inner whitespace legal.
    assert!(!Double::validate_with("1 e3", &collapse));
}

#[test]
fn test_lenient_mode_reports_no_rewrite() {
    let lenient = LexicalOptions::lenient();
    for datatype in Datatype::ALL {
        let mut literal = String::from("\u{0}not a literal");
        assert_eq!(datatype.canonicalize_with(&mut literal, &lenient), Ok(false));
        assert_eq!(literal, "\u{0}not a literal");
    }
}

#[test]
fn test_validate_distinguishes_syntax_from_value() {
    assert!(Datatype::Date.matches("2023-02-29"));
    assert!(!validate(Datatype::Date, "2023-02-29"));
    assert!(Datatype::Time.matches("24:00:01"));
    assert!(!validate(Datatype::Time, "24:00:01"));
    assert!(!Datatype::Date.matches("2023-2-28"));
}

#[test]
fn test_decimal_value_semantics() {
    let a: Decimal = "1.50".parse().unwrap();
    let b: Decimal = "+01.5".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.integer_digits(), "1");
    assert_eq!(b.integer_digits(), "01");

    let mut values: Vec<Decimal> = ["10", "-2.5", "0.001", "-0", "3"]
        .iter()
        .map(|literal| literal.parse().unwrap())
        .collect();
    values.sort();
    let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["-2.5", "0", "0.001", "3", "10"]);
}

#[test]
fn test_decimal_to_f64_out_of_range() {
    let huge = format!("1{}", "0".repeat(400));
    let value: Decimal = huge.parse().unwrap();
    assert_eq!(value.to_f64().unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_double_and_float_specials() {
    assert_eq!(Double::parse("NaN").unwrap(), Double::NotANumber);
    assert_ne!(Double::parse("INF").unwrap(), Double::parse("-INF").unwrap());
    assert_eq!(Double::parse("-0").unwrap(), Double::parse("0").unwrap());
    assert_eq!(Float::parse("1e39").unwrap(), Float::PositiveInfinity);

    let narrowed = Double::parse("1e39").unwrap().to_float();
    assert!(matches!(narrowed, Err(Error::OutOfRange { .. })));
    assert_eq!(
        Double::parse("-INF").unwrap().to_float().unwrap(),
        Float::NegativeInfinity
    );
}

#[test]
fn test_bounded_integer() {
    assert_eq!(Integer::parse_bounded("255", 0, 255), Ok(255));
    assert_eq!(Integer::parse_bounded("-0", 0, 255), Ok(0));
    assert_eq!(
        Integer::parse_bounded("256", 0, 255).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
    assert_eq!(
        Integer::parse_bounded("2.5", 0, 255).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_dynamic_values() {
    let registry = DatatypeRegistry::standard();
    let datatype = registry.get("xsd:decimal").unwrap();
    let value = parse(datatype, "-3.250").unwrap();
    assert!(matches!(value, XsdValue::Decimal(_)));
    assert_eq!(value.as_f64(), Some(-3.25));
    assert_eq!(value.to_string(), "-3.25");

    let value = parse(Datatype::Boolean, "0").unwrap();
    assert_eq!(bool::try_from(value), Ok(false));
}

#[test]
fn test_error_codes() {
    assert_eq!(ErrorKind::InvalidArgument.code(), 22);
    assert_eq!(ErrorKind::OutOfRange.code(), 34);
    assert_eq!(ErrorKind::OutOfMemory.code(), 12);

    let err = Double::parse("-NaN").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().starts_with("invalid double literal \"-NaN\""));
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let literal = format!("{i}.{i}0");
                let mut rewritten = literal.clone();
                Decimal::canonicalize(&mut rewritten).unwrap();
                rewritten
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i == 0 {
            "0".to_string()
        } else {
            format!("{i}.{i}")
        };
        assert_eq!(handle.join().unwrap(), expected);
    }
}
