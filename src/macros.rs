// Pattern fragments shared by the calendar datatypes.

macro_rules! year_pattern {
    () => {
        r"(?P<year>-?(?:[1-9][0-9]{3,}|0[0-9]{3}))"
    };
}

macro_rules! date_pattern {
    () => {
        concat!(year_pattern!(), r"-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})")
    };
}

macro_rules! time_pattern {
    () => {
        r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})(?:\.(?P<fraction>[0-9]+))?"
    };
}

macro_rules! timezone_pattern {
    () => {
        r"(?P<timezone>Z|[+-][0-9]{2}:[0-9]{2})?"
    };
}

/// Implements `Display`, `FromStr`, `Serialize` and `Deserialize` for a datatype model in
/// terms of its canonical literal and its parser.
macro_rules! impl_literal_traits {
    ($($model:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $model {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::XsdType::canonical_literal(self))
                }
            }

            impl std::str::FromStr for $model {
                type Err = $crate::Error;

                fn from_str(literal: &str) -> $crate::Result<Self> {
                    <$model as $crate::XsdType>::parse(literal)
                }
            }

            impl serde::Serialize for $model {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(&$crate::XsdType::canonical_literal(self))
                }
            }

            impl<'de> serde::Deserialize<'de> for $model {
                fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let literal = <String as serde::Deserialize>::deserialize(deserializer)?;
                    <$model as $crate::XsdType>::parse(&literal).map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}
