//! Field type resolution.
//!
//! Every registered field carries a [`TypeDescriptor`] describing its
//! concrete element type: a leaf scalar, a sequence (with its resolved
//! element descriptor), or a nested shape (with its resolved generic
//! type arguments). The binding engine dispatches on this descriptor when
//! it compiles a field binding, and the selector-spec normalization
//! consults it to disambiguate the legacy combined format attribute.
//!
//! Monomorphization substitutes generic parameters before registration
//! code runs, so a `Page<Foo>` instantiation registers descriptors that
//! already name `Foo`; the descriptor records that resolved argument list
//! rather than an erased placeholder.

use std::any::TypeId;
use std::collections::{BTreeSet, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexSet;
use rust_decimal::Decimal;

use crate::Bindable;
use crate::convert::{self, ConversionError};
use crate::select::SelectorSpec;

/// The leaf scalar types a field (or sequence element) can bind to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScalarKind {
    /// `String`, the text type; also the extraction intermediate for
    /// every other scalar.
    Text,
    /// `bool`.
    Bool,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// `chrono::NaiveDate`.
    Date,
    /// `chrono::NaiveDateTime`.
    DateTime,
    /// `rust_decimal::Decimal`.
    Decimal,
}

impl ScalarKind {
    /// True for the kinds whose legacy combined `format` attribute is a
    /// format pattern rather than a regex.
    pub fn is_format_sensitive(self) -> bool {
        matches!(
            self,
            ScalarKind::Date | ScalarKind::DateTime | ScalarKind::Decimal
        )
    }
}

/// How a sequence-like field stores its elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SequenceFlavor {
    /// An insertion-ordered growable sequence (`Vec`).
    List,
    /// A fixed-size sequence assembled from an intermediate list
    /// (`Box<[T]>`).
    Slice,
    /// A unique-elements container (`IndexSet`, `BTreeSet`, `HashSet`).
    Set,
}

/// Structural classification of a field's type.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum TypeKind {
    /// A leaf scalar.
    Scalar(ScalarKind),
    /// A sequence of a resolved element type.
    Sequence {
        /// The container family.
        flavor: SequenceFlavor,
        /// The resolved element descriptor.
        element: Box<TypeDescriptor>,
    },
    /// A nested shape.
    Shape {
        /// The shape's resolved generic type arguments, in declaration
        /// order; empty for non-generic shapes.
        type_args: Vec<TypeDescriptor>,
    },
}

/// A field's resolved type: identity plus structural classification.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    kind: TypeKind,
}

impl TypeDescriptor {
    /// Descriptor for a leaf scalar type.
    pub fn scalar<V: ScalarValue>() -> Self {
        TypeDescriptor {
            type_id: TypeId::of::<V>(),
            type_name: std::any::type_name::<V>(),
            kind: TypeKind::Scalar(V::KIND),
        }
    }

    /// Descriptor for a shape type, carrying its resolved type arguments.
    pub fn shape<N: Bindable>() -> Self {
        TypeDescriptor {
            type_id: TypeId::of::<N>(),
            type_name: std::any::type_name::<N>(),
            kind: TypeKind::Shape {
                type_args: N::type_args(),
            },
        }
    }

    /// Descriptor for a sequence container with the given element
    /// descriptor.
    pub fn sequence<C: Sequence>(element: TypeDescriptor) -> Self {
        TypeDescriptor {
            type_id: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            kind: TypeKind::Sequence {
                flavor: C::FLAVOR,
                element: Box::new(element),
            },
        }
    }

    /// The identity of the described type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The described type's name, as the compiler spells it.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Structural classification.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// True for array- and collection-typed fields.
    pub fn is_sequence_like(&self) -> bool {
        matches!(self.kind, TypeKind::Sequence { .. })
    }

    /// The element descriptor of a sequence-like type.
    pub fn sequence_element(&self) -> Option<&TypeDescriptor> {
        match &self.kind {
            TypeKind::Sequence { element, .. } => Some(element),
            _ => None,
        }
    }

    /// The type conversion ultimately targets: a sequence's element
    /// descriptor, or the descriptor itself for everything else.
    pub fn element_type(&self) -> &TypeDescriptor {
        self.sequence_element().unwrap_or(self)
    }

    /// True when the described type has no bindable sub-fields.
    pub fn is_leaf_scalar(&self) -> bool {
        matches!(self.kind, TypeKind::Scalar(_))
    }

    /// The scalar kind, when this descriptor is a leaf scalar.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.kind {
            TypeKind::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    /// Resolved generic type arguments of a shape descriptor; empty for
    /// scalars, sequences, and non-generic shapes.
    pub fn type_args(&self) -> &[TypeDescriptor] {
        match &self.kind {
            TypeKind::Shape { type_args } => type_args,
            _ => &[],
        }
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// A leaf scalar a field can bind to: parses itself from extracted text
/// under the field's canonical spec.
pub trait ScalarValue: Sized + Send + 'static {
    /// Classification used for dispatch and format disambiguation.
    const KIND: ScalarKind;

    /// Parses the extracted raw text, honoring the spec's format and
    /// locale where the target type cares about them.
    fn parse(raw: &str, spec: &SelectorSpec) -> Result<Self, ConversionError>;
}

impl ScalarValue for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn parse(raw: &str, _spec: &SelectorSpec) -> Result<Self, ConversionError> {
        Ok(raw.to_owned())
    }
}

impl ScalarValue for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn parse(raw: &str, _spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_bool(raw)
    }
}

impl ScalarValue for i32 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn parse(raw: &str, _spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_int(raw)
    }
}

impl ScalarValue for i64 {
    const KIND: ScalarKind = ScalarKind::Long;

    fn parse(raw: &str, _spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_long(raw)
    }
}

impl ScalarValue for f32 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn parse(raw: &str, spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_float(raw, spec.locale())
    }
}

impl ScalarValue for f64 {
    const KIND: ScalarKind = ScalarKind::Double;

    fn parse(raw: &str, spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_double(raw, spec.locale())
    }
}

impl ScalarValue for NaiveDate {
    const KIND: ScalarKind = ScalarKind::Date;

    fn parse(raw: &str, spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_date(raw, spec.format())
    }
}

impl ScalarValue for NaiveDateTime {
    const KIND: ScalarKind = ScalarKind::DateTime;

    fn parse(raw: &str, spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_datetime(raw, spec.format())
    }
}

impl ScalarValue for Decimal {
    const KIND: ScalarKind = ScalarKind::Decimal;

    fn parse(raw: &str, spec: &SelectorSpec) -> Result<Self, ConversionError> {
        convert::parse_decimal(raw, spec.format(), spec.locale())
    }
}

/// A sequence-like container a field can bind to. Elements are always
/// collected into an intermediate ordered list first, then handed over in
/// document order.
pub trait Sequence: Send + 'static {
    /// The element type.
    type Elem: Send + 'static;

    /// The container family, recorded in the descriptor.
    const FLAVOR: SequenceFlavor;

    /// Builds the container from elements in document order.
    fn from_elements(elements: Vec<Self::Elem>) -> Self;
}

impl<T: Send + 'static> Sequence for Vec<T> {
    type Elem = T;
    const FLAVOR: SequenceFlavor = SequenceFlavor::List;

    fn from_elements(elements: Vec<T>) -> Self {
        elements
    }
}

impl<T: Send + 'static> Sequence for Box<[T]> {
    type Elem = T;
    const FLAVOR: SequenceFlavor = SequenceFlavor::Slice;

    fn from_elements(elements: Vec<T>) -> Self {
        elements.into_boxed_slice()
    }
}

impl<T: Hash + Eq + Send + 'static> Sequence for IndexSet<T> {
    type Elem = T;
    const FLAVOR: SequenceFlavor = SequenceFlavor::Set;

    fn from_elements(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Ord + Send + 'static> Sequence for BTreeSet<T> {
    type Elem = T;
    const FLAVOR: SequenceFlavor = SequenceFlavor::Set;

    fn from_elements(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq + Send + 'static> Sequence for HashSet<T> {
    type Elem = T;
    const FLAVOR: SequenceFlavor = SequenceFlavor::Set;

    fn from_elements(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}
