//! Lexical and canonical forms
//!
//! This module documents the lexical grammar and canonical form of every datatype as
//! implemented by this library. It contains no code.
//!
//! # Overview
//!
//! A *literal* is the text spelling of a value. Each datatype has a lexical space (the set
//! of literals it accepts) and a canonical form (one distinguished literal per value).
//! Checking a literal takes two steps:
//!
//! 1. **Match**: the literal is matched against the datatype's anchored pattern, see
//!    [`Datatype::pattern`](crate::Datatype::pattern). This step is purely syntactic.
//! 2. **Parse**: the captured groups are assembled into a value. Literals that match
//!    but name no value (`2023-02-30`, `24:00:01`) are rejected here.
//!
//! The empty literal is rejected by every datatype, `string` included.
//!
//! # Numeric datatypes
//!
//! ## decimal
//!
//! ```text
//! decimal ::= sign? ( digits ( '.' digits? )? | '.' digits )
//! sign    ::= '+' | '-'
//! ```
//!
//! Digits are kept as written, so arbitrarily long literals are exact.
//!
//! | Literal | Canonical | Rule |
//! |---------|-----------|------|
//! | `+007.100` | `7.1` | no `+`, leading and trailing zeros removed |
//! | `-0.0` | `0` | zero is unsigned |
//! | `.5` | `0.5` | integer part is at least `0` |
//! | `3.` | `3` | the point goes with an empty fraction |
//!
//! ## double and float
//!
//! ```text
//! floating ::= sign? 'INF' | 'NaN' | mantissa ( [eE] sign? digits )?
//! mantissa ::= digits ( '.' digits? )? | '.' digits
//! ```
//!
//! `NaN` takes no sign. Literals beyond the native range become `INF`/`-INF`; literals
//! below the smallest subnormal become zero. The canonical form of a finite value has one
//! non-zero digit before the point, at least one after it and an explicit exponent. Its
//! digits are the shortest that read back as the same native value.
//!
//! | Literal | `double` | `float` |
//! |---------|----------|---------|
//! | `100` | `1.0E2` | `1.0E2` |
//! | `0.1` | `1.0E-1` | `1.0E-1` |
//! | `-0.0` | `0.0E0` | `0.0E0` |
//! | `+INF` | `INF` | `INF` |
//! | `1e39` | `1.0E39` | `INF` |
//!
//! ## integer
//!
//! ```text
//! integer ::= sign? digits
//! ```
//!
//! Canonical: no `+`, no leading zeros, and `-0` is `0`.
//!
//! # Other datatypes
//!
//! | Datatype | Lexical space | Canonical form |
//! |----------|---------------|----------------|
//! | `boolean` | `true`, `false`, `1`, `0` | `true`, `false` |
//! | `string` | one or more XML `Char`s | the literal |
//! | `base64Binary` | groups of four from `A-Za-z0-9+/`, `=` padding, single spaces between characters | standard encoding without spaces |
//!
//! # Calendar datatypes
//!
//! ```text
//! date     ::= year '-' MM '-' DD tz?
//! dateTime ::= date-part 'T' hh ':' mm ':' ss ( '.' digits )? tz?
//! time     ::= hh ':' mm ':' ss ( '.' digits )? tz?
//! year     ::= '-'? ( [1-9] digit{3,} | '0' digit{3} )
//! tz       ::= 'Z' | sign hh ':' mm
//! ```
//!
//! **Rules**:
//! - Years use astronomical numbering: `0000` is 1 BCE.
//! - The day must exist in its month and year.
//! - `24:00:00` (fraction all zeros, if any) is the end of the day.
//! - A timezone offset is at most `14:00` in either direction.
//!
//! **Canonical forms**:
//! - `date` keeps its timezone; a zero offset is written `Z`.
//! - `dateTime` and `time` with a timezone are converted to UTC and written with `Z`.
//!   `time` wraps around midnight.
//! - `24:00:00` becomes `00:00:00` of the following day.
//! - Trailing zeros of the fractional seconds are removed, with the point when nothing
//!   remains.
//!
//! # duration
//!
//! ```text
//! duration ::= '-'? 'P' ( n 'Y' )? ( n 'M' )? ( n 'D' )?
//!              ( 'T' ( n 'H' )? ( n 'M' )? ( n ( '.' digits )? 'S' )? )?
//! ```
//!
//! At least one component must be present, and a `T` must be followed by one.
//!
//! The canonical form folds months into years and months and seconds into days, hours,
//! minutes and seconds, dropping zero components. The zero duration is `PT0S` and is never
//! negative.
//!
//! | Literal | Canonical |
//! |---------|-----------|
//! | `P0Y` | `PT0S` |
//! | `P14M` | `P1Y2M` |
//! | `PT25H` | `P1DT1H` |
//!
//! # Whitespace
//!
//! Literals are matched as given by default. With
//! [`WhiteSpace::Collapse`](crate::WhiteSpace::Collapse) leading and trailing XML
//! whitespace is removed and inner runs are replaced by one space before matching, as an
//! XML Schema processor does for `whiteSpace="collapse"`.
