//! Shared synthesis used by both role generators.
//!
//! Everything here is role-agnostic: payload container synthesis, the
//! default-literal formatting policy, the private-constructor/factory
//! pair, and the fluent setter chain with parent delegation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type};

use crate::error::{GenerateError, GenerateResult};
use crate::model::{ContainerKind, FieldData, ParsedTarget};

/// Suffix appended to the target name to form the payload type's name
pub const PAYLOAD_SUFFIX: &str = "Payload";

/// How a default literal should be formatted, keyed by value-type
/// category rather than by type-name comparison chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralCategory {
    /// Scalar text values; the literal is quoted and owned
    Text,
    /// Everything else; the literal is spliced verbatim as an expression
    Verbatim,
}

fn literal_category(field: &FieldData) -> LiteralCategory {
    if field.container != ContainerKind::Scalar {
        return LiteralCategory::Verbatim;
    }
    // Classified by the final path segment so qualified spellings like
    // `std::string::String` land in the same category as `String`.
    match &field.ty {
        Type::Path(path) => match path.path.segments.last() {
            Some(segment) if segment.ident == "String" && segment.arguments.is_none() => {
                LiteralCategory::Text
            }
            _ => LiteralCategory::Verbatim,
        },
        _ => LiteralCategory::Verbatim,
    }
}

/// The resolved field type: the value type wrapped in its container shape.
pub fn resolved_ty(field: &FieldData) -> TokenStream {
    let ty = &field.ty;
    match field.container {
        ContainerKind::Scalar => quote!(#ty),
        ContainerKind::Array => quote!(::std::boxed::Box<[#ty]>),
        ContainerKind::List => quote!(::std::vec::Vec<#ty>),
        ContainerKind::Set => quote!(::std::collections::HashSet<#ty>),
    }
}

/// The initializer expression for a field in the payload's `Default` impl.
pub fn default_initializer(field: &FieldData) -> GenerateResult<TokenStream> {
    let Some(literal) = &field.default else {
        return Ok(quote!(::core::default::Default::default()));
    };
    match literal_category(field) {
        LiteralCategory::Text => Ok(quote!(::std::string::String::from(#literal))),
        LiteralCategory::Verbatim => {
            let expr: syn::Expr =
                syn::parse_str(literal).map_err(|source| GenerateError::InvalidDefault {
                    field: field.name.to_string(),
                    literal: literal.clone(),
                    source,
                })?;
            Ok(quote!(#expr))
        }
    }
}

fn doc_attr(doc: &Option<String>) -> TokenStream {
    match doc {
        Some(doc) => quote!(#[doc = #doc]),
        None => TokenStream::new(),
    }
}

fn setter_ident(field: &FieldData) -> Ident {
    format_ident!("set_{}", field.name)
}

/// Role-agnostic synthesis state for one target.
///
/// The role generators own one of these and layer their role-specific
/// members around the shared ones.
pub struct BaseGenerator<'a> {
    target: &'a ParsedTarget,
    artifact: Ident,
    payload: Ident,
    parent_artifact: Option<Ident>,
}

impl<'a> BaseGenerator<'a> {
    /// Resolve the generated type names for `target` under its role suffix.
    pub fn new(target: &'a ParsedTarget) -> Self {
        let suffix = target.role.suffix();
        let artifact = format_ident!("{}{}", target.name, suffix);
        let payload = format_ident!("{}{}", target.name, PAYLOAD_SUFFIX);
        let parent_artifact = target
            .parent
            .as_ref()
            .map(|parent| format_ident!("{}{}", parent.name, suffix));
        Self {
            target,
            artifact,
            payload,
            parent_artifact,
        }
    }

    /// The target this generator works on
    pub fn target(&self) -> &ParsedTarget {
        self.target
    }

    /// Name of the generated artifact type
    pub fn artifact(&self) -> &Ident {
        &self.artifact
    }

    /// Name of the generated payload type
    pub fn payload(&self) -> &Ident {
        &self.payload
    }

    /// Name of the parent's artifact type, if a parent is declared
    pub fn parent_artifact(&self) -> Option<&Ident> {
        self.parent_artifact.as_ref()
    }

    /// The deterministic tag constant, derived from the expansion-site
    /// module path plus the target's simple name.
    pub fn tag_const(&self) -> TokenStream {
        let target_name = self.target.name.to_string();
        quote! {
            /// Tag under which this target's payload travels.
            pub const TAG: &'static str = concat!(module_path!(), "::", #target_name);
        }
    }

    /// The payload container type: one private field, one getter, and one
    /// payload-chaining setter per declared field, plus a `Default` impl
    /// honoring declared default literals.
    pub fn payload_struct(&self) -> GenerateResult<TokenStream> {
        let payload = &self.payload;
        let mut fields = Vec::new();
        let mut defaults = Vec::new();
        let mut accessors = Vec::new();

        for field in &self.target.fields {
            let name = &field.name;
            let ty = resolved_ty(field);
            let doc = doc_attr(&field.doc);
            let setter = setter_ident(field);
            let init = default_initializer(field)?;

            fields.push(quote! {
                #doc
                #name: #ty,
            });
            defaults.push(quote! {
                #name: #init,
            });
            accessors.push(quote! {
                #doc
                pub fn #name(&self) -> &#ty {
                    &self.#name
                }

                #doc
                pub fn #setter(&mut self, #name: #ty) -> &mut Self {
                    self.#name = #name;
                    self
                }
            });
        }

        let doc = format!(
            "Serializable container for the declared fields of `{}`.",
            self.target.name
        );
        Ok(quote! {
            #[doc = #doc]
            #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            pub struct #payload {
                #(#fields)*
            }

            impl ::core::default::Default for #payload {
                fn default() -> Self {
                    Self {
                        #(#defaults)*
                    }
                }
            }

            impl #payload {
                #(#accessors)*
            }
        })
    }

    /// The non-public constructor. The payload field is initialized when
    /// the caller's layout carries one, role-specific fields come in
    /// through `extra_inits`, and a declared parent is materialized
    /// eagerly through its own factory.
    pub fn private_constructor(&self, with_payload: bool, extra_inits: TokenStream) -> TokenStream {
        let payload = &self.payload;
        let payload_init = with_payload.then(|| {
            quote! {
                payload: <#payload as ::core::default::Default>::default(),
            }
        });
        let parent_init = self.parent_artifact.as_ref().map(|parent| {
            quote! {
                parent: #parent::create(),
            }
        });
        quote! {
            fn new() -> Self {
                Self {
                    #payload_init
                    #extra_inits
                    #parent_init
                }
            }
        }
    }

    /// The static factory, the only public construction path.
    pub fn create_method(&self) -> TokenStream {
        quote! {
            /// Create an artifact with a freshly initialized payload chain.
            pub fn create() -> Self {
                Self::new()
            }
        }
    }

    /// Fluent setters on the artifact: own fields delegate into the local
    /// payload, inherited fields delegate into the parent artifact. An
    /// own field and an inherited field with the same name collide in the
    /// generated method namespace; the own setter wins and the inherited
    /// one is skipped (child shadows parent).
    pub fn set_methods(&self) -> TokenStream {
        let mut methods = Vec::new();

        for field in &self.target.fields {
            let name = &field.name;
            let ty = resolved_ty(field);
            let setter = setter_ident(field);
            let doc = doc_attr(&field.doc);
            methods.push(quote! {
                #doc
                pub fn #setter(mut self, #name: #ty) -> Self {
                    self.payload.#setter(#name);
                    self
                }
            });
        }

        if let Some(parent) = &self.target.parent {
            for field in &parent.fields {
                if self.target.fields.iter().any(|own| own.name == field.name) {
                    continue;
                }
                let name = &field.name;
                let ty = resolved_ty(field);
                let setter = setter_ident(field);
                let doc = doc_attr(&field.doc);
                methods.push(quote! {
                    #doc
                    pub fn #setter(mut self, #name: #ty) -> Self {
                        self.parent = self.parent.#setter(#name);
                        self
                    }
                });
            }
        }

        quote! { #(#methods)* }
    }
}

#[cfg(test)]
#[path = "base/base_tests.rs"]
mod base_tests;
