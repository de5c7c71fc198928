//! Scalar conversion primitives.
//!
//! Everything here returns a typed [`ConversionError`] instead of panicking
//! or unwinding; the binding engine consults the field's [`SkipPolicy`]
//! before deciding whether a failed conversion propagates or leaves the
//! field unset.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Default pattern used for [`chrono::NaiveDate`] fields without a format.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Default pattern used for [`chrono::NaiveDateTime`] fields without a format.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Classifies a failed scalar conversion by target type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConversionErrorKind {
    /// Target was a 32-bit integer.
    Int,
    /// Target was a 64-bit integer.
    Long,
    /// Target was a 32-bit float.
    Float,
    /// Target was a 64-bit float.
    Double,
    /// Target was a boolean.
    Bool,
    /// Target was a calendar date.
    Date,
    /// Target was a date-time.
    DateTime,
    /// Target was an arbitrary-precision decimal.
    Decimal,
}

impl ConversionErrorKind {
    fn target_name(self) -> &'static str {
        match self {
            ConversionErrorKind::Int => "a 32-bit integer",
            ConversionErrorKind::Long => "a 64-bit integer",
            ConversionErrorKind::Float => "a 32-bit float",
            ConversionErrorKind::Double => "a 64-bit float",
            ConversionErrorKind::Bool => "a boolean",
            ConversionErrorKind::Date => "a date",
            ConversionErrorKind::DateTime => "a date-time",
            ConversionErrorKind::Decimal => "a decimal",
        }
    }
}

/// A scalar value could not be parsed into its target type.
#[derive(Clone, Debug)]
pub struct ConversionError {
    kind: ConversionErrorKind,
    value: String,
    format: Option<String>,
    locale: Option<String>,
}

impl ConversionError {
    pub(crate) fn new(kind: ConversionErrorKind, value: &str) -> Self {
        ConversionError {
            kind,
            value: value.to_owned(),
            format: None,
            locale: None,
        }
    }

    pub(crate) fn with_format(mut self, format: Option<&str>) -> Self {
        self.format = format.map(str::to_owned);
        self
    }

    pub(crate) fn with_locale(mut self, locale: Option<&str>) -> Self {
        self.locale = locale.map(str::to_owned);
        self
    }

    /// The kind of conversion that failed.
    pub fn kind(&self) -> ConversionErrorKind {
        self.kind
    }

    /// The raw text that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot parse '{}' as {}",
            self.value,
            self.kind.target_name()
        )?;
        if let Some(format) = &self.format {
            write!(f, " with format '{format}'")?;
        }
        if let Some(locale) = &self.locale {
            write!(f, " under locale '{locale}'")?;
        }
        Ok(())
    }
}

impl StdError for ConversionError {}

/// Which conversion failures a field swallows instead of propagating.
///
/// A swallowed failure leaves the field unset; binding continues with the
/// next field. The default policy swallows nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkipPolicy {
    any: bool,
    kinds: Vec<ConversionErrorKind>,
}

impl SkipPolicy {
    /// Swallow nothing; every conversion failure propagates.
    pub const fn none() -> Self {
        SkipPolicy {
            any: false,
            kinds: Vec::new(),
        }
    }

    /// Swallow every conversion failure for this field.
    pub fn any() -> Self {
        SkipPolicy {
            any: true,
            kinds: Vec::new(),
        }
    }

    /// Swallow exactly the listed failure kinds.
    pub fn on(kinds: impl IntoIterator<Item = ConversionErrorKind>) -> Self {
        SkipPolicy {
            any: false,
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Whether a failure of `kind` is swallowed under this policy.
    pub fn covers(&self, kind: ConversionErrorKind) -> bool {
        self.any || self.kinds.contains(&kind)
    }
}

/// Decimal and grouping separators for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NumberSymbols {
    pub decimal: char,
    pub group: Option<char>,
}

impl NumberSymbols {
    /// Pattern-driven symbols: `,` groups, `.` separates, as in the
    /// pattern syntax itself.
    pub(crate) const INVARIANT: NumberSymbols = NumberSymbols {
        decimal: '.',
        group: Some(','),
    };
}

/// Number symbols for a BCP 47 language tag. Only the primary subtag is
/// consulted; unknown languages fall back to dot-decimal, comma-grouping.
pub(crate) fn number_symbols(tag: Option<&str>) -> NumberSymbols {
    let Some(tag) = tag else {
        return NumberSymbols::INVARIANT;
    };
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match primary.as_str() {
        // comma decimal, space grouping
        "pl" | "fr" | "ru" | "uk" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "hu" | "lv"
        | "lt" | "et" => NumberSymbols {
            decimal: ',',
            group: Some(' '),
        },
        // comma decimal, dot grouping
        "de" | "it" | "es" | "pt" | "nl" | "da" | "tr" | "el" | "ro" | "id" | "vi" | "hr"
        | "sl" | "sr" | "bg" => NumberSymbols {
            decimal: ',',
            group: Some('.'),
        },
        _ => NumberSymbols::INVARIANT,
    }
}

/// Strips grouping separators and rewrites the decimal separator to `.`,
/// producing text `FromStr` implementations understand.
pub(crate) fn normalize_number(raw: &str, symbols: NumberSymbols) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        if let Some(group) = symbols.group {
            // Space grouping accepts the non-breaking variants documents
            // actually contain.
            let is_group = c == group
                || (group == ' ' && matches!(c, '\u{00A0}' | '\u{202F}'));
            if is_group {
                continue;
            }
        }
        if c == symbols.decimal {
            out.push('.');
        } else {
            out.push(c);
        }
    }
    out
}

/// Collapses runs of whitespace to single spaces and trims, matching the
/// document engine's notion of element text.
pub(crate) fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

pub(crate) fn parse_int(raw: &str) -> Result<i32, ConversionError> {
    raw.trim()
        .parse()
        .map_err(|_| ConversionError::new(ConversionErrorKind::Int, raw))
}

pub(crate) fn parse_long(raw: &str) -> Result<i64, ConversionError> {
    raw.trim()
        .parse()
        .map_err(|_| ConversionError::new(ConversionErrorKind::Long, raw))
}

pub(crate) fn parse_bool(raw: &str) -> Result<bool, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConversionError::new(ConversionErrorKind::Bool, raw))
    }
}

pub(crate) fn parse_float(raw: &str, locale: Option<&str>) -> Result<f32, ConversionError> {
    let normalized = normalize_number(raw, number_symbols(locale));
    normalized.parse().map_err(|_| {
        ConversionError::new(ConversionErrorKind::Float, raw).with_locale(locale)
    })
}

pub(crate) fn parse_double(raw: &str, locale: Option<&str>) -> Result<f64, ConversionError> {
    let normalized = normalize_number(raw, number_symbols(locale));
    normalized.parse().map_err(|_| {
        ConversionError::new(ConversionErrorKind::Double, raw).with_locale(locale)
    })
}

pub(crate) fn parse_date(raw: &str, format: Option<&str>) -> Result<NaiveDate, ConversionError> {
    let pattern = format.unwrap_or(DEFAULT_DATE_FORMAT);
    NaiveDate::parse_from_str(raw.trim(), pattern).map_err(|_| {
        ConversionError::new(ConversionErrorKind::Date, raw).with_format(Some(pattern))
    })
}

pub(crate) fn parse_datetime(
    raw: &str,
    format: Option<&str>,
) -> Result<NaiveDateTime, ConversionError> {
    let pattern = format.unwrap_or(DEFAULT_DATETIME_FORMAT);
    NaiveDateTime::parse_from_str(raw.trim(), pattern).map_err(|_| {
        ConversionError::new(ConversionErrorKind::DateTime, raw).with_format(Some(pattern))
    })
}

pub(crate) fn parse_decimal(
    raw: &str,
    format: Option<&str>,
    locale: Option<&str>,
) -> Result<Decimal, ConversionError> {
    // An explicit pattern fixes the separators to the pattern convention;
    // otherwise the locale's symbols drive normalization.
    let symbols = if format.is_some() {
        NumberSymbols::INVARIANT
    } else {
        number_symbols(locale)
    };
    let normalized = normalize_number(raw, symbols);
    Decimal::from_str(&normalized).map_err(|_| {
        ConversionError::new(ConversionErrorKind::Decimal, raw)
            .with_format(format)
            .with_locale(locale)
    })
}
