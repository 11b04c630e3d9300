//! Attribute grammar for the target annotations.
//!
//! A macro expansion only sees the item it sits on, so everything the
//! generator needs is restated inside the attribute: the declared fields,
//! and (for inheriting targets) the parent's name and fields.

use darling::{Error, FromMeta};
use paramflow_codegen::{ContainerKind, FieldData, ParentTarget, ParsedTarget, TargetRole};
use syn::Ident;

/// `kind = "..."` values accepted on a field declaration
#[derive(Debug, Clone, Copy, FromMeta)]
enum ContainerKindOpt {
    Scalar,
    Array,
    List,
    Set,
}

impl From<ContainerKindOpt> for ContainerKind {
    fn from(kind: ContainerKindOpt) -> Self {
        match kind {
            ContainerKindOpt::Scalar => ContainerKind::Scalar,
            ContainerKindOpt::Array => ContainerKind::Array,
            ContainerKindOpt::List => ContainerKind::List,
            ContainerKindOpt::Set => ContainerKind::Set,
        }
    }
}

/// One `field(...)` declaration
#[derive(Debug, FromMeta)]
pub struct FieldOpts {
    name: String,
    ty: String,
    #[darling(default)]
    kind: Option<ContainerKindOpt>,
    #[darling(default)]
    default: Option<String>,
    #[darling(default)]
    doc: Option<String>,
}

impl FieldOpts {
    fn into_field(self) -> Result<FieldData, Error> {
        let name: Ident = syn::parse_str(&self.name)
            .map_err(|_| Error::custom(format!("`{}` is not a valid field name", self.name)))?;
        let ty: syn::Type = syn::parse_str(&self.ty).map_err(|_| {
            Error::custom(format!(
                "`{}` is not a valid type for field `{name}`",
                self.ty
            ))
        })?;

        let mut field = FieldData::new(name, ty);
        if let Some(kind) = self.kind {
            field = field.with_container(kind.into());
        }
        if let Some(default) = self.default {
            field = field.with_default(default);
        }
        if let Some(doc) = self.doc {
            field = field.with_doc(doc);
        }
        Ok(field)
    }
}

/// The `parent(...)` declaration: the parent target's name plus a
/// restatement of its fields, so inherited setters can be generated
/// without cross-item visibility.
#[derive(Debug, FromMeta)]
pub struct ParentOpts {
    name: String,
    #[darling(default, multiple, rename = "field")]
    fields: Vec<FieldOpts>,
}

/// Arguments of `#[screen_params(...)]`
#[derive(Debug, FromMeta)]
pub struct ScreenOpts {
    #[darling(default, multiple, rename = "field")]
    fields: Vec<FieldOpts>,
    #[darling(default)]
    parent: Option<ParentOpts>,
}

/// Arguments of `#[subview_params(...)]`
#[derive(Debug, FromMeta)]
pub struct SubviewOpts {
    #[darling(default, multiple, rename = "field")]
    fields: Vec<FieldOpts>,
    #[darling(default)]
    parent: Option<ParentOpts>,
    /// Marks a target that cannot be instantiated; `build` is skipped.
    #[darling(default)]
    abstract_base: darling::util::Flag,
}

/// Resolve screen-attribute arguments against the annotated struct's name.
pub fn screen_target(name: Ident, opts: ScreenOpts) -> Result<ParsedTarget, Error> {
    build_target(name, TargetRole::Screen, opts.fields, opts.parent, false)
}

/// Resolve subview-attribute arguments against the annotated struct's name.
pub fn subview_target(name: Ident, opts: SubviewOpts) -> Result<ParsedTarget, Error> {
    build_target(
        name,
        TargetRole::Subview,
        opts.fields,
        opts.parent,
        opts.abstract_base.is_present(),
    )
}

fn build_target(
    name: Ident,
    role: TargetRole,
    field_opts: Vec<FieldOpts>,
    parent: Option<ParentOpts>,
    is_abstract: bool,
) -> Result<ParsedTarget, Error> {
    let mut target = ParsedTarget::new(name, role);
    target.fields = collect_fields(field_opts)?;
    target.is_abstract = is_abstract;

    if let Some(parent) = parent {
        let parent_name: Ident = syn::parse_str(&parent.name).map_err(|_| {
            Error::custom(format!("`{}` is not a valid parent name", parent.name))
        })?;
        if parent_name == target.name {
            return Err(Error::custom(format!(
                "target `{parent_name}` cannot declare itself as its parent"
            )));
        }
        target.parent = Some(ParentTarget {
            name: parent_name,
            fields: collect_fields(parent.fields)?,
        });
    }

    Ok(target)
}

fn collect_fields(opts: Vec<FieldOpts>) -> Result<Vec<FieldData>, Error> {
    let mut fields: Vec<FieldData> = Vec::with_capacity(opts.len());
    for opt in opts {
        let field = opt.into_field()?;
        if fields.iter().any(|seen| seen.name == field.name) {
            return Err(Error::custom(format!(
                "field `{}` is declared more than once",
                field.name
            )));
        }
        fields.push(field);
    }
    Ok(fields)
}
