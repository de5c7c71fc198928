//! Field selector declarations and their canonical form.
//!
//! [`Select`] is the raw declaration a shape author writes: it still
//! carries both declaration generations (the deprecated combined
//! format/locale attributes next to the current dedicated ones).
//! [`SelectorSpec`] is the canonical, immutable spec the engine actually
//! binds with, produced once per field by [`SelectorSpec::normalize`]
//! when the adapter is built.

use crate::convert::{ConversionErrorKind, SkipPolicy};
use crate::descriptor::TypeDescriptor;

/// Sentinel literal meaning "no value declared", normalized to an absent
/// default. Kept for parity with declarations migrated from the legacy
/// annotation form.
pub const NO_VALUE: &str = "NO_VALUE";

/// Where a field's raw text comes from within the matched element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttributeTarget {
    /// The element's text content, whitespace-normalized.
    Text,
    /// The element's inner markup.
    InnerHtml,
    /// The element's markup including the element itself.
    OuterHtml,
    /// A named attribute of the element. An `abs:` prefix resolves the
    /// value against the session base URL.
    Attribute(String),
}

impl AttributeTarget {
    fn from_raw(attr: Option<&str>) -> Self {
        match attr {
            None | Some("") | Some("text") => AttributeTarget::Text,
            Some("html") | Some("innerHtml") => AttributeTarget::InnerHtml,
            Some("outerHtml") => AttributeTarget::OuterHtml,
            Some(name) => AttributeTarget::Attribute(name.to_owned()),
        }
    }
}

/// A field selector declaration.
///
/// Built with [`Select::css`] and chained setters:
///
/// ```
/// use strainer::Select;
///
/// let select = Select::css("span.price")
///     .attr("data-amount")
///     .index(1)
///     .default_value("0");
/// ```
#[derive(Clone, Debug)]
pub struct Select {
    query: String,
    attr: Option<String>,
    index: usize,
    def_value: Option<String>,
    format: Option<String>,
    locale: Option<String>,
    regex: Option<String>,
    legacy_format: Option<String>,
    legacy_locale: Option<String>,
    skip: SkipPolicy,
}

impl Select {
    /// A declaration selecting elements by CSS query. The query is
    /// validated when the owning shape's adapter is built.
    pub fn css(query: impl Into<String>) -> Self {
        Select {
            query: query.into(),
            attr: None,
            index: 0,
            def_value: None,
            format: None,
            locale: None,
            regex: None,
            legacy_format: None,
            legacy_locale: None,
            skip: SkipPolicy::none(),
        }
    }

    /// Reads a named attribute (or `"html"`/`"innerHtml"`, `"outerHtml"`,
    /// `"text"`) instead of the element's text content. An `abs:` prefix
    /// on an attribute name resolves the value against the session base
    /// URL.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attr = Some(attr.into());
        self
    }

    /// Zero-based occurrence index among the query's matches. Only
    /// consulted by scalar, nested-shape and converter bindings; sequence
    /// bindings always take every match.
    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Literal assigned when the query matches nothing. Extracted text
    /// equal to this literal keeps whatever value the instance already
    /// holds. The [`NO_VALUE`] sentinel is normalized to "no default".
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.def_value = Some(value.into());
        self
    }

    /// Format pattern for date, date-time and decimal fields (chrono
    /// strftime patterns for the temporal kinds). Takes precedence over
    /// the deprecated combined [`format_legacy`](Select::format_legacy)
    /// attribute; blank values are ignored.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// BCP 47 language tag driving number-symbol handling. Takes
    /// precedence over the deprecated
    /// [`locale_legacy`](Select::locale_legacy) attribute; blank values
    /// are ignored.
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    /// Regex applied to the extracted text before conversion; capture
    /// group 1 of the first match is kept. Always overrides a regex
    /// derived from the deprecated combined format attribute.
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = Some(pattern.into());
        self
    }

    /// The legacy combined attribute: a format pattern when the field's
    /// element type is a date, date-time or decimal, a regex otherwise.
    #[deprecated(note = "use `format` or `regex`")]
    pub fn format_legacy(mut self, value: impl Into<String>) -> Self {
        self.legacy_format = Some(value.into());
        self
    }

    /// The legacy locale attribute.
    #[deprecated(note = "use `locale`")]
    pub fn locale_legacy(mut self, tag: impl Into<String>) -> Self {
        self.legacy_locale = Some(tag.into());
        self
    }

    /// Swallow the listed conversion-failure kinds for this field,
    /// leaving it unset instead of aborting the bind call.
    pub fn skip_on(mut self, kinds: impl IntoIterator<Item = ConversionErrorKind>) -> Self {
        self.skip = SkipPolicy::on(kinds);
        self
    }

    /// Swallow every conversion failure for this field.
    pub fn skip_on_any(mut self) -> Self {
        self.skip = SkipPolicy::any();
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != NO_VALUE)
}

/// Canonical, immutable binding metadata for one field.
#[derive(Clone, Debug)]
pub struct SelectorSpec {
    query: String,
    target: AttributeTarget,
    index: usize,
    default_value: Option<String>,
    format: Option<String>,
    locale: Option<String>,
    regex: Option<String>,
    skip: SkipPolicy,
}

impl SelectorSpec {
    /// Collapses a raw declaration into canonical form for a field of the
    /// given resolved type.
    ///
    /// Precedence: the dedicated format/locale attributes win over the
    /// deprecated combined ones; the combined format attribute is read as
    /// a format pattern for temporal/decimal element types and as a regex
    /// otherwise; a dedicated non-blank regex overrides whatever the
    /// legacy path produced; the [`NO_VALUE`] default sentinel becomes an
    /// absent default.
    pub(crate) fn normalize(raw: Select, descriptor: &TypeDescriptor) -> SelectorSpec {
        let format_sensitive = descriptor
            .element_type()
            .scalar_kind()
            .is_some_and(|kind| kind.is_format_sensitive());

        let mut format = None;
        let mut regex = None;
        let mut locale = non_blank(raw.legacy_locale);

        if let Some(legacy) = non_blank(raw.legacy_format) {
            if format_sensitive {
                format = Some(legacy);
            } else {
                regex = Some(legacy);
            }
        }
        if let Some(modern) = non_blank(raw.regex) {
            regex = Some(modern);
        }
        if let Some(modern) = non_blank(raw.format) {
            format = Some(modern);
        }
        if let Some(modern) = non_blank(raw.locale) {
            locale = Some(modern);
        }

        SelectorSpec {
            query: raw.query,
            target: AttributeTarget::from_raw(raw.attr.as_deref()),
            index: raw.index,
            default_value: raw.def_value.filter(|v| v != NO_VALUE),
            format,
            locale,
            regex,
            skip: raw.skip,
        }
    }

    /// The CSS query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Where raw text is read from within a matched element.
    pub fn target(&self) -> &AttributeTarget {
        &self.target
    }

    /// Zero-based occurrence index for scalar-like bindings.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The declared default literal, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The canonical format pattern, if any.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// The canonical locale tag, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// The canonical regex pattern, if any.
    pub fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    /// The field's skip-on-error policy.
    pub fn skip(&self) -> &SkipPolicy {
        &self.skip
    }
}
