//! Intermediate representation of one annotated navigation target.
//!
//! This is the read-only contract between the introspection layer (the
//! attribute parser in paramflow-macros, or any other front end) and the
//! generators. One [`ParsedTarget`] is produced per annotated item,
//! consumed once, and discarded.

use syn::{Ident, Type};

/// How a declared field's value type is containered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerKind {
    /// The bare value type `T`
    #[default]
    Scalar,
    /// A boxed slice `Box<[T]>`
    Array,
    /// An ordered sequence `Vec<T>`
    List,
    /// A `HashSet<T>`
    Set,
}

/// One declared parameter of a target.
#[derive(Debug, Clone)]
pub struct FieldData {
    /// Field name; unique within one target's field list
    pub name: Ident,

    /// The semantic value type (before container wrapping)
    pub ty: Type,

    /// Container shape wrapped around the value type
    pub container: ContainerKind,

    /// Optional default literal, in the value type's lexical form
    pub default: Option<String>,

    /// Documentation copied verbatim onto the generated members
    pub doc: Option<String>,
}

impl FieldData {
    /// Create a scalar field with no default and no documentation
    pub fn new(name: Ident, ty: Type) -> Self {
        Self {
            name,
            ty,
            container: ContainerKind::default(),
            default: None,
            doc: None,
        }
    }

    /// Set the container shape
    pub fn with_container(mut self, container: ContainerKind) -> Self {
        self.container = container;
        self
    }

    /// Set the default literal
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the documentation string
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// The declared role of a target, which picks the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRole {
    /// Launched for result by another active component
    Screen,
    /// Attached to a host and configured via an argument bag
    Subview,
}

impl TargetRole {
    /// The fixed suffix appended to the target name to form the
    /// generated artifact's name.
    pub fn suffix(self) -> &'static str {
        match self {
            TargetRole::Screen => "Dispatcher",
            TargetRole::Subview => "Builder",
        }
    }
}

/// The identity and own field list of a target's annotated parent.
#[derive(Debug, Clone)]
pub struct ParentTarget {
    /// The parent target's name; its generated artifact carries the same
    /// role suffix as the child's
    pub name: Ident,

    /// The parent's own declared fields
    pub fields: Vec<FieldData>,
}

/// Introspection result for one annotated target.
#[derive(Debug, Clone)]
pub struct ParsedTarget {
    /// The target's simple name
    pub name: Ident,

    /// Declared role
    pub role: TargetRole,

    /// Own declared fields, in declaration order
    pub fields: Vec<FieldData>,

    /// Annotated parent, if any
    pub parent: Option<ParentTarget>,

    /// Whether the target cannot be instantiated (suppresses the build
    /// method for subview targets)
    pub is_abstract: bool,
}

impl ParsedTarget {
    /// Create a target with no fields, no parent, not abstract
    pub fn new(name: Ident, role: TargetRole) -> Self {
        Self {
            name,
            role,
            fields: Vec::new(),
            parent: None,
            is_abstract: false,
        }
    }

    /// True if the target declares no fields of its own
    pub fn has_no_own_fields(&self) -> bool {
        self.fields.is_empty()
    }
}
