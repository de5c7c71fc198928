#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use std::any::TypeId;
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io::Read;
use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use scraper::Selector;
use url::Url;

mod convert;
mod descriptor;
mod select;

pub use convert::{
    ConversionError, ConversionErrorKind, DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT, SkipPolicy,
};
pub use descriptor::{ScalarKind, ScalarValue, Sequence, SequenceFlavor, TypeDescriptor, TypeKind};
pub use select::{AttributeTarget, NO_VALUE, Select, SelectorSpec};

// Re-export the document-engine types that appear in the public API.
pub use scraper::{ElementRef, Html};

/// Boxed error type custom converters may return.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Error type for shape declaration and binding failures.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Returns a reference to the error kind for detailed inspection.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = &self.kind;
        write!(f, "{kind}")
    }
}

impl StdError for Error {}

impl<K: Into<ErrorKind>> From<K> for Error {
    fn from(value: K) -> Self {
        let kind = value.into();
        Error { kind }
    }
}

/// Detailed classification of declaration and binding errors.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    // Declaration errors, raised when an adapter is built.
    /// The shape registered no bindable fields.
    NoBindableFields {
        /// The shape's type name.
        shape: &'static str,
    },
    /// The shape registered the same field name twice.
    DuplicateField {
        /// The shape's type name.
        shape: &'static str,
        /// The duplicated field name.
        field: &'static str,
    },
    /// A field's CSS query failed to parse.
    Selector {
        /// The shape's type name.
        shape: &'static str,
        /// The field the query belongs to.
        field: &'static str,
        /// The rejected query.
        query: String,
        /// The parser's message.
        message: String,
    },
    /// A field's regex failed to compile.
    Regex {
        /// The shape's type name.
        shape: &'static str,
        /// The field the pattern belongs to.
        field: &'static str,
        /// The rejected pattern.
        pattern: String,
        /// The compiler's message.
        message: String,
    },

    // Binding errors, raised per bind call.
    /// Extracted text could not be converted to the field's scalar type
    /// and the field's skip policy did not cover the failure.
    Conversion {
        /// The field being bound.
        field: &'static str,
        /// The underlying conversion failure.
        source: ConversionError,
    },
    /// A custom converter failed. Converter errors always propagate.
    Converter {
        /// The field being bound.
        field: &'static str,
        /// The converter's error.
        source: BoxError,
    },
    /// IO error while reading a document.
    Io(String),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NoBindableFields { shape } => {
                write!(f, "shape {shape} declares no bindable fields")
            }
            ErrorKind::DuplicateField { shape, field } => {
                write!(f, "shape {shape} registers field '{field}' more than once")
            }
            ErrorKind::Selector {
                shape,
                field,
                query,
                message,
            } => {
                write!(
                    f,
                    "invalid selector '{query}' on field '{field}' of {shape}: {message}"
                )
            }
            ErrorKind::Regex {
                shape,
                field,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "invalid regex '{pattern}' on field '{field}' of {shape}: {message}"
                )
            }
            ErrorKind::Conversion { field, source } => {
                write!(f, "field '{field}': {source}")
            }
            ErrorKind::Converter { field, source } => {
                write!(f, "converter for field '{field}' failed: {source}")
            }
            ErrorKind::Io(message) => write!(f, "IO error: {message}"),
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

/// A shape that can be populated from an HTML element.
///
/// Implementations register their bindable fields once; the session
/// compiles the registration into a cached [`ShapeAdapter`] on first use.
pub trait Bindable: Default + Send + Sized + 'static {
    /// Registers this shape's field bindings.
    fn fields(fields: &mut FieldSet<Self>);

    /// Shape-level selector, inherited by fields of this shape's type
    /// registered through the `*_auto` methods of [`FieldSet`].
    fn selector() -> Option<Select> {
        None
    }

    /// Resolved generic type arguments for generic shapes; empty
    /// otherwise.
    fn type_args() -> Vec<TypeDescriptor> {
        Vec::new()
    }

    /// The shape's name as used in diagnostics.
    fn shape_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Converts a matched element into a field value, bypassing the built-in
/// conversion pipeline for that field.
pub trait ElementConverter: Send + Sync + 'static {
    /// The produced value type.
    type Out;

    /// Converts the element matched at the field's configured index.
    /// Errors always propagate; they are never covered by skip policies.
    fn convert(
        &self,
        element: ElementRef<'_>,
        spec: &SelectorSpec,
    ) -> std::result::Result<Self::Out, BoxError>;
}

/// The strategy a field binding executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindingKind {
    /// Custom [`ElementConverter`].
    Converter,
    /// Array- or collection-typed field.
    SequenceLike,
    /// Nested shape.
    NestedShape,
    /// Leaf scalar.
    Simple,
}

/// Dispatch for a field's binding strategy; first match wins.
fn binding_kind(has_converter: bool, descriptor: &TypeDescriptor) -> BindingKind {
    if has_converter {
        BindingKind::Converter
    } else if descriptor.is_sequence_like() {
        BindingKind::SequenceLike
    } else if !descriptor.element_type().is_leaf_scalar() {
        BindingKind::NestedShape
    } else {
        BindingKind::Simple
    }
}

/// Compiled per-field artifacts shared by every bind call.
struct CompiledField {
    name: &'static str,
    spec: SelectorSpec,
    selector: Selector,
    regex: Option<Regex>,
    kind: BindingKind,
}

type ApplyFn<S> =
    Box<dyn Fn(&mut S, &Strainer, ElementRef<'_>, &CompiledField) -> Result<()> + Send + Sync>;

/// Where a declaration's [`Select`] comes from.
enum SelectSource {
    Explicit(Select),
    /// Fall back to the element shape's [`Bindable::selector`]; the field
    /// is silently left unbound when the shape declares none.
    ElementShape(fn() -> Option<Select>),
}

struct FieldDecl<S> {
    name: &'static str,
    source: SelectSource,
    descriptor: TypeDescriptor,
    has_converter: bool,
    apply: ApplyFn<S>,
}

/// Collects a shape's field registrations.
///
/// Passed to [`Bindable::fields`]; each method pairs a field name and a
/// [`Select`] declaration with a typed setter.
pub struct FieldSet<S: Bindable> {
    decls: Vec<FieldDecl<S>>,
}

impl<S: Bindable> FieldSet<S> {
    fn new() -> Self {
        FieldSet { decls: Vec::new() }
    }

    /// Binds a leaf scalar field: the element at the declaration's index
    /// is extracted, run through the regex/default pipeline, and parsed
    /// to `V`.
    pub fn select<V: ScalarValue>(
        &mut self,
        name: &'static str,
        select: Select,
        set: fn(&mut S, V),
    ) {
        let apply: ApplyFn<S> = Box::new(move |instance, session, root, field| {
            if let Some(value) = simple_value::<V>(session, root, field)? {
                set(instance, value);
            }
            Ok(())
        });
        self.decls.push(FieldDecl {
            name,
            source: SelectSource::Explicit(select),
            descriptor: TypeDescriptor::scalar::<V>(),
            has_converter: false,
            apply,
        });
    }

    /// Binds a sequence of leaf scalars: every matched element is
    /// extracted and parsed, in document order. An empty match set
    /// assigns an empty sequence.
    pub fn select_seq<C>(&mut self, name: &'static str, select: Select, set: fn(&mut S, C))
    where
        C: Sequence,
        C::Elem: ScalarValue,
    {
        let apply: ApplyFn<S> = Box::new(move |instance, session, root, field| {
            let mut items: Vec<C::Elem> = Vec::new();
            for element in root.select(&field.selector) {
                let raw = extract(element, field.spec.target(), session.base_url());
                let raw = match apply_regex(raw, field) {
                    RegexOutcome::Text(text) => text,
                    RegexOutcome::EmptyCapture => {
                        field.spec.default_value().unwrap_or_default().to_owned()
                    }
                };
                match C::Elem::parse(&raw, &field.spec) {
                    Ok(item) => items.push(item),
                    Err(source) if field.spec.skip().covers(source.kind()) => {
                        log::debug!(
                            "skipping field '{}' after covered conversion failure: {source}",
                            field.name
                        );
                        return Ok(());
                    }
                    Err(source) => {
                        return Err(ErrorKind::Conversion {
                            field: field.name,
                            source,
                        }
                        .into());
                    }
                }
            }
            set(instance, C::from_elements(items));
            Ok(())
        });
        self.decls.push(FieldDecl {
            name,
            source: SelectSource::Explicit(select),
            descriptor: TypeDescriptor::sequence::<C>(TypeDescriptor::scalar::<C::Elem>()),
            has_converter: false,
            apply,
        });
    }

    /// Binds a nested shape from the element at the declaration's index;
    /// the field is left untouched when nothing matches.
    pub fn nested<N: Bindable>(&mut self, name: &'static str, select: Select, set: fn(&mut S, N)) {
        self.nested_decl(name, SelectSource::Explicit(select), set);
    }

    /// Like [`nested`](FieldSet::nested), but the query is inherited from
    /// the element shape's [`Bindable::selector`]. Shapes without one
    /// leave the field unbound.
    pub fn nested_auto<N: Bindable>(&mut self, name: &'static str, set: fn(&mut S, N)) {
        self.nested_decl(name, SelectSource::ElementShape(N::selector), set);
    }

    fn nested_decl<N: Bindable>(
        &mut self,
        name: &'static str,
        source: SelectSource,
        set: fn(&mut S, N),
    ) {
        let apply: ApplyFn<S> = Box::new(move |instance, session, root, field| {
            if let Some(element) = root.select(&field.selector).nth(field.spec.index()) {
                let adapter = session.adapter::<N>()?;
                set(instance, adapter.bind(session, element)?);
            }
            Ok(())
        });
        self.decls.push(FieldDecl {
            name,
            source,
            descriptor: TypeDescriptor::shape::<N>(),
            has_converter: false,
            apply,
        });
    }

    /// Binds a sequence of nested shapes, one element instance per
    /// matched element, in document order. An empty match set assigns an
    /// empty sequence.
    pub fn nested_seq<C>(&mut self, name: &'static str, select: Select, set: fn(&mut S, C))
    where
        C: Sequence,
        C::Elem: Bindable,
    {
        self.nested_seq_decl(name, SelectSource::Explicit(select), set);
    }

    /// Like [`nested_seq`](FieldSet::nested_seq), but the query is
    /// inherited from the element shape's [`Bindable::selector`]. Shapes
    /// without one leave the field unbound.
    pub fn nested_seq_auto<C>(&mut self, name: &'static str, set: fn(&mut S, C))
    where
        C: Sequence,
        C::Elem: Bindable,
    {
        self.nested_seq_decl(
            name,
            SelectSource::ElementShape(<C::Elem as Bindable>::selector),
            set,
        );
    }

    fn nested_seq_decl<C>(&mut self, name: &'static str, source: SelectSource, set: fn(&mut S, C))
    where
        C: Sequence,
        C::Elem: Bindable,
    {
        let apply: ApplyFn<S> = Box::new(move |instance, session, root, field| {
            let adapter = session.adapter::<C::Elem>()?;
            let mut items: Vec<C::Elem> = Vec::new();
            for element in root.select(&field.selector) {
                items.push(adapter.bind(session, element)?);
            }
            set(instance, C::from_elements(items));
            Ok(())
        });
        self.decls.push(FieldDecl {
            name,
            source,
            descriptor: TypeDescriptor::sequence::<C>(TypeDescriptor::shape::<C::Elem>()),
            has_converter: false,
            apply,
        });
    }

    /// Binds a field through a custom [`ElementConverter`], overriding
    /// the type-driven strategies. The converter sees the element matched
    /// at the declaration's index; the field is left untouched when
    /// nothing matches.
    pub fn converted<C>(
        &mut self,
        name: &'static str,
        select: Select,
        converter: C,
        set: fn(&mut S, C::Out),
    ) where
        C: ElementConverter,
    {
        let apply: ApplyFn<S> = Box::new(move |instance, _session, root, field| {
            if let Some(element) = root.select(&field.selector).nth(field.spec.index()) {
                let value =
                    converter
                        .convert(element, &field.spec)
                        .map_err(|source| ErrorKind::Converter {
                            field: field.name,
                            source,
                        })?;
                set(instance, value);
            }
            Ok(())
        });
        self.decls.push(FieldDecl {
            name,
            source: SelectSource::Explicit(select),
            // converters bypass type-driven dispatch; the placeholder only
            // feeds spec normalization
            descriptor: TypeDescriptor::scalar::<String>(),
            has_converter: true,
            apply,
        });
    }
}

/// Reads a field's raw text from a matched element.
fn extract(element: ElementRef<'_>, target: &AttributeTarget, base_url: Option<&Url>) -> String {
    match target {
        AttributeTarget::Text => convert::normalize_text(&element.text().collect::<String>()),
        AttributeTarget::InnerHtml => element.inner_html(),
        AttributeTarget::OuterHtml => element.html(),
        AttributeTarget::Attribute(name) => {
            if let Some(attr) = name.strip_prefix("abs:") {
                let value = element.attr(attr).unwrap_or_default();
                if value.is_empty() {
                    return String::new();
                }
                match base_url {
                    Some(base) => base
                        .join(value)
                        .map(|resolved| resolved.to_string())
                        .unwrap_or_else(|_| value.to_owned()),
                    None => value.to_owned(),
                }
            } else {
                element.attr(name).unwrap_or_default().to_owned()
            }
        }
    }
}

/// Result of running a field's regex over extracted text.
enum RegexOutcome {
    /// The text to convert: the capture, or the input when no regex is
    /// configured or the pattern did not match.
    Text(String),
    /// The pattern matched but captured nothing.
    EmptyCapture,
}

/// Applies the field's regex, keeping capture group 1 of the first match.
/// A non-matching pattern leaves the text unchanged.
fn apply_regex(raw: String, field: &CompiledField) -> RegexOutcome {
    let Some(regex) = &field.regex else {
        return RegexOutcome::Text(raw);
    };
    let captured = regex.captures(&raw).map(|captures| {
        captures
            .get(1)
            .map(|m| m.as_str().to_owned())
            .unwrap_or_default()
    });
    match captured {
        Some(text) if text.is_empty() => RegexOutcome::EmptyCapture,
        Some(text) => RegexOutcome::Text(text),
        None => RegexOutcome::Text(raw),
    }
}

/// The simple-scalar pipeline: select, extract, regex, default handling,
/// parse. `Ok(None)` means "leave the field untouched".
fn simple_value<V: ScalarValue>(
    session: &Strainer,
    root: ElementRef<'_>,
    field: &CompiledField,
) -> Result<Option<V>> {
    let spec = &field.spec;
    // `from_default` marks text sourced from the declared default (missing
    // node, or a matching regex that captured nothing); that text is
    // converted and assigned, bypassing the default-literal short-circuit.
    let (raw, from_default) = match root.select(&field.selector).nth(spec.index()) {
        Some(element) => {
            match apply_regex(extract(element, spec.target(), session.base_url()), field) {
                RegexOutcome::Text(raw) => (raw, false),
                RegexOutcome::EmptyCapture => match spec.default_value() {
                    Some(default) => (default.to_owned(), true),
                    None => (String::new(), false),
                },
            }
        }
        None => match spec.default_value() {
            Some(default) => (default.to_owned(), true),
            None => return Ok(None),
        },
    };

    // Extracted text equal to the default literal means the document had
    // nothing real for this field; keep whatever the instance holds.
    if !from_default && spec.default_value().is_some_and(|default| default == raw) {
        log::trace!(
            "field '{}' extracted its default literal, keeping the current value",
            field.name
        );
        return Ok(None);
    }

    match V::parse(&raw, spec) {
        Ok(value) => Ok(Some(value)),
        Err(source) if spec.skip().covers(source.kind()) => {
            log::debug!(
                "skipping field '{}' after covered conversion failure: {source}",
                field.name
            );
            Ok(None)
        }
        Err(source) => Err(ErrorKind::Conversion {
            field: field.name,
            source,
        }
        .into()),
    }
}

struct FieldBinding<S> {
    compiled: CompiledField,
    apply: ApplyFn<S>,
}

/// The compiled, cached binding table for one shape.
///
/// Built once per shape per session, on first use; reused for every
/// document afterwards.
pub struct ShapeAdapter<T: Bindable> {
    shape: &'static str,
    bindings: Vec<FieldBinding<T>>,
}

impl<T: Bindable> std::fmt::Debug for ShapeAdapter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeAdapter")
            .field("shape", &self.shape)
            .field("fields", &self.bindings.len())
            .finish()
    }
}

impl<T: Bindable> ShapeAdapter<T> {
    fn build() -> Result<Self> {
        let shape = T::shape_name();
        log::trace!("building adapter for shape {shape}");

        let mut fields = FieldSet::new();
        T::fields(&mut fields);

        let mut bindings: Vec<FieldBinding<T>> = Vec::new();
        for decl in fields.decls {
            if bindings.iter().any(|b| b.compiled.name == decl.name) {
                return Err(ErrorKind::DuplicateField {
                    shape,
                    field: decl.name,
                }
                .into());
            }

            let select = match decl.source {
                SelectSource::Explicit(select) => select,
                SelectSource::ElementShape(inherited) => match inherited() {
                    Some(select) => select,
                    None => {
                        log::debug!(
                            "field '{}' of {shape} has no selector of its own and its \
                             element shape declares none; leaving it unbound",
                            decl.name
                        );
                        continue;
                    }
                },
            };

            let kind = binding_kind(decl.has_converter, &decl.descriptor);
            let spec = SelectorSpec::normalize(select, &decl.descriptor);
            let selector =
                Selector::parse(spec.query()).map_err(|parse_error| ErrorKind::Selector {
                    shape,
                    field: decl.name,
                    query: spec.query().to_owned(),
                    message: parse_error.to_string(),
                })?;

            // Regexes only participate in the extraction pipeline, and
            // never for pattern-parsed targets.
            let format_sensitive = decl
                .descriptor
                .element_type()
                .scalar_kind()
                .is_some_and(|k| k.is_format_sensitive());
            let regex = match spec.regex() {
                Some(pattern)
                    if !format_sensitive
                        && matches!(kind, BindingKind::Simple | BindingKind::SequenceLike) =>
                {
                    Some(
                        Regex::new(pattern).map_err(|compile_error| ErrorKind::Regex {
                            shape,
                            field: decl.name,
                            pattern: pattern.to_owned(),
                            message: compile_error.to_string(),
                        })?,
                    )
                }
                _ => None,
            };

            log::trace!("field '{}' of {shape} binds as {kind:?}", decl.name);
            bindings.push(FieldBinding {
                compiled: CompiledField {
                    name: decl.name,
                    spec,
                    selector,
                    regex,
                    kind,
                },
                apply: decl.apply,
            });
        }

        if bindings.is_empty() {
            return Err(ErrorKind::NoBindableFields { shape }.into());
        }

        log::trace!(
            "adapter for shape {shape} built with {} bindings",
            bindings.len()
        );
        Ok(ShapeAdapter { shape, bindings })
    }

    /// The shape's name as used in diagnostics.
    pub fn shape_name(&self) -> &'static str {
        self.shape
    }

    /// The bound field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.iter().map(|binding| binding.compiled.name)
    }

    /// Binds a fresh instance from an element subtree.
    pub fn bind(&self, session: &Strainer, element: ElementRef<'_>) -> Result<T> {
        let mut instance = T::default();
        self.bind_into(session, element, &mut instance)?;
        Ok(instance)
    }

    /// Populates a caller-supplied instance in place. Only the fields
    /// declared on this adapter's shape are touched; a binding error
    /// leaves earlier fields as they were written.
    pub fn bind_into(
        &self,
        session: &Strainer,
        element: ElementRef<'_>,
        target: &mut T,
    ) -> Result<()> {
        log::trace!("binding shape {}", self.shape);
        for binding in &self.bindings {
            log::trace!(
                "applying {:?} binding for field '{}'",
                binding.compiled.kind,
                binding.compiled.name
            );
            (binding.apply)(target, session, element, &binding.compiled)?;
        }
        Ok(())
    }

    /// Parses an HTML document and binds a fresh instance from its root.
    pub fn from_html(&self, session: &Strainer, html: &str) -> Result<T> {
        let document = Html::parse_document(html);
        self.bind(session, document.root_element())
    }

    /// Parses an HTML document and populates a caller-supplied instance
    /// from its root.
    pub fn from_html_into(&self, session: &Strainer, html: &str, target: &mut T) -> Result<()> {
        let document = Html::parse_document(html);
        self.bind_into(session, document.root_element(), target)
    }
}

/// A binding session: owns the adapter registry and session-wide
/// configuration, and coordinates binding HTML documents to shapes.
///
/// Sessions are cheap to share across threads (`&Strainer` is enough);
/// adapters are compiled lazily, once per shape, and reused for every
/// subsequent document.
///
/// # Example
/// ```
/// use strainer::{Bindable, FieldSet, Select, Strainer};
///
/// #[derive(Default, Debug)]
/// struct Heading {
///     text: String,
/// }
///
/// impl Bindable for Heading {
///     fn fields(fields: &mut FieldSet<Self>) {
///         fields.select("text", Select::css("h1"), |heading, v: String| heading.text = v);
///     }
/// }
///
/// # fn main() -> Result<(), strainer::Error> {
/// let heading: Heading = Strainer::new().from_html("<h1>Hello</h1>")?;
/// assert_eq!(heading.text, "Hello");
/// # Ok(())
/// # }
/// ```
pub struct Strainer {
    adapters: DashMap<TypeId, Arc<dyn std::any::Any + Send + Sync>>,
    base_url: Option<Url>,
}

impl Strainer {
    /// A session with no base URL.
    pub fn new() -> Self {
        Strainer {
            adapters: DashMap::new(),
            base_url: None,
        }
    }

    /// A session resolving `abs:`-prefixed attribute extractions against
    /// the given base URL.
    pub fn with_base_url(base_url: Url) -> Self {
        Strainer {
            adapters: DashMap::new(),
            base_url: Some(base_url),
        }
    }

    /// The session base URL, if one is configured.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Returns the adapter for `T`, building it on first use.
    ///
    /// The build runs outside the registry's locks, so two callers may
    /// race to build the same shape's adapter; the first insert wins and
    /// every caller observes that one adapter from then on.
    pub fn adapter<T: Bindable>(&self) -> Result<Arc<ShapeAdapter<T>>> {
        let key = TypeId::of::<T>();
        if let Some(existing) = self.adapters.get(&key) {
            return Ok(Self::downcast::<T>(existing.value().clone()));
        }

        let built: Arc<dyn std::any::Any + Send + Sync> = Arc::new(ShapeAdapter::<T>::build()?);
        let entry = self.adapters.entry(key).or_insert(built);
        Ok(Self::downcast::<T>(entry.value().clone()))
    }

    fn downcast<T: Bindable>(
        adapter: Arc<dyn std::any::Any + Send + Sync>,
    ) -> Arc<ShapeAdapter<T>> {
        adapter
            .downcast::<ShapeAdapter<T>>()
            .expect("registry entries are keyed by shape type")
    }

    /// Parses an HTML document and binds a fresh `T` from its root.
    pub fn from_html<T: Bindable>(&self, html: &str) -> Result<T> {
        self.adapter::<T>()?.from_html(self, html)
    }

    /// Parses an HTML document and populates a caller-supplied instance
    /// from its root. Only fields declared on `T` itself are touched.
    pub fn from_html_into<T: Bindable>(&self, html: &str, target: &mut T) -> Result<()> {
        self.adapter::<T>()?.from_html_into(self, html, target)
    }

    /// Reads an entire UTF-8 document from `reader` and binds a fresh
    /// `T`. Invalid UTF-8 sequences are replaced, not rejected.
    pub fn from_reader<T: Bindable>(&self, mut reader: impl Read) -> Result<T> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|io_error| ErrorKind::Io(io_error.to_string()))?;
        self.from_html(&String::from_utf8_lossy(&bytes))
    }
}

impl Default for Strainer {
    fn default() -> Self {
        Strainer::new()
    }
}
