//! Generator for subview targets (attached and configured via arguments).

use proc_macro2::TokenStream;
use quote::quote;

use crate::base::BaseGenerator;
use crate::error::GenerateResult;
use crate::model::ParsedTarget;

/// Synthesizes the `<Target>Builder` artifact for a subview target.
///
/// Unlike screens, subviews optimize away the payload type, the payload
/// field, and `get_data` when the target declares no own fields, and only
/// emit `build` when the target can actually be instantiated.
pub struct SubviewGenerator<'a> {
    base: BaseGenerator<'a>,
}

impl<'a> SubviewGenerator<'a> {
    /// Create a generator for `target`
    pub fn new(target: &'a ParsedTarget) -> Self {
        Self {
            base: BaseGenerator::new(target),
        }
    }

    /// Emit the complete builder artifact.
    pub fn generate_code(&self) -> GenerateResult<TokenStream> {
        let artifact = self.base.artifact();
        let has_fields = !self.base.target().has_no_own_fields();

        let payload_struct = if has_fields {
            Some(self.base.payload_struct()?)
        } else {
            None
        };
        let get_data = has_fields.then(|| self.get_data_method());
        let struct_fields = self.struct_fields(has_fields);
        let tag = self.base.tag_const();
        let constructor = self.base.private_constructor(has_fields, TokenStream::new());
        let create_args = self.create_args_method(has_fields);
        let create = self.base.create_method();
        let setters = self.base.set_methods();
        let build = (!self.base.target().is_abstract).then(|| self.build_method());

        let doc = format!(
            "Builder for `{}`, generated by `#[subview_params]`.",
            self.base.target().name
        );
        Ok(quote! {
            #[doc = #doc]
            pub struct #artifact {
                #struct_fields
            }

            #payload_struct

            impl #artifact {
                #tag
                #get_data
                #constructor
                #create_args
                #create
                #setters
                #build
            }
        })
    }

    fn struct_fields(&self, has_fields: bool) -> TokenStream {
        let payload = self.base.payload();
        let payload_field = has_fields.then(|| {
            quote! {
                /// Container for the target's own declared fields.
                payload: #payload,
            }
        });
        let parent_field = self.base.parent_artifact().map(|parent| {
            quote! {
                /// Eagerly materialized parent artifact.
                parent: #parent,
            }
        });
        quote! {
            #payload_field
            #parent_field
        }
    }

    fn create_args_method(&self, has_fields: bool) -> TokenStream {
        let parent_merge = self.base.parent_artifact().is_some().then(|| {
            quote! {
                args.merge(&self.parent.create_args());
            }
        });
        let own_put = has_fields.then(|| {
            quote! {
                args.put(Self::TAG, &self.payload);
            }
        });

        // Field-less targets with no parent hand back an empty bag
        // without the pointless round trip through a local binding.
        let body = if parent_merge.is_none() && own_put.is_none() {
            quote! {
                ::paramflow_core::Extras::new()
            }
        } else {
            quote! {
                let mut args = ::paramflow_core::Extras::new();
                #parent_merge
                #own_put
                args
            }
        };

        quote! {
            /// Build the argument bag for this target.
            ///
            /// Ancestor entries are layered in first, then the local
            /// payload is attached under [`Self::TAG`] (skipped entirely
            /// when the target declares no fields of its own).
            pub fn create_args(&self) -> ::paramflow_core::Extras {
                #body
            }
        }
    }

    fn build_method(&self) -> TokenStream {
        let target = &self.base.target().name;
        let doc = format!("Build a configured `{target}` with the argument bag attached.");
        quote! {
            #[doc = #doc]
            pub fn build(self) -> #target {
                let mut instance = <#target as ::core::default::Default>::default();
                let args = self.create_args();
                ::paramflow_core::ViewComponent::attach_args(&mut instance, args);
                instance
            }
        }
    }

    fn get_data_method(&self) -> TokenStream {
        let target = &self.base.target().name;
        let payload = self.base.payload();
        // Abstract targets are never instantiated themselves, so the
        // accessor accepts any attached component generically instead of
        // demanding `ViewComponent` of the abstract marker type.
        let (generics, param) = if self.base.target().is_abstract {
            (
                quote! { <C: ::paramflow_core::ViewComponent> },
                quote! { target: &C },
            )
        } else {
            (TokenStream::new(), quote! { target: &#target })
        };
        quote! {
            /// Read this target's payload from an attached component.
            ///
            /// Unlike screens, a subview's arguments are expected to be
            /// present once attached; a component without arguments or
            /// without the tagged entry is an error at the point of use.
            pub fn get_data #generics (
                #param,
            ) -> ::paramflow_core::ExtrasResult<#payload> {
                let args = ::paramflow_core::ViewComponent::args(target)
                    .ok_or(::paramflow_core::ExtrasError::MissingArgs)?;
                args.try_get::<#payload>(Self::TAG)
            }
        }
    }
}
