//! Generator for screen targets (launched for result).

use proc_macro2::TokenStream;
use quote::quote;

use crate::base::BaseGenerator;
use crate::error::GenerateResult;
use crate::model::ParsedTarget;

/// Synthesizes the `<Target>Dispatcher` artifact for a screen target.
///
/// Screens keep a uniform surface regardless of field count: the payload
/// type, the payload field, and `get_data`/`create_intent` are always
/// emitted so callers never special-case field-less targets.
pub struct ScreenGenerator<'a> {
    base: BaseGenerator<'a>,
}

impl<'a> ScreenGenerator<'a> {
    /// Create a generator for `target`
    pub fn new(target: &'a ParsedTarget) -> Self {
        Self {
            base: BaseGenerator::new(target),
        }
    }

    /// Emit the complete dispatcher artifact.
    pub fn generate_code(&self) -> GenerateResult<TokenStream> {
        let artifact = self.base.artifact();
        let struct_fields = self.struct_fields();
        let payload_struct = self.base.payload_struct()?;
        let tag = self.base.tag_const();
        let constructor = self.base.private_constructor(
            true,
            quote! {
                request_code: ::paramflow_core::UNDEFINED_REQUEST_CODE,
            },
        );
        let create = self.base.create_method();
        let setters = self.base.set_methods();
        let request_code = self.request_code_method();
        let create_intent = self.create_intent_method();
        let starts = self.start_methods();
        let get_data = self.get_data_method();

        let doc = format!(
            "Dispatcher for `{}`, generated by `#[screen_params]`.",
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
                #constructor
                #create
                #setters
                #request_code
                #create_intent
                #starts
                #get_data
            }
        })
    }

    fn struct_fields(&self) -> TokenStream {
        let payload = self.base.payload();
        let parent_field = self.base.parent_artifact().map(|parent| {
            quote! {
                /// Eagerly materialized parent artifact.
                parent: #parent,
            }
        });
        quote! {
            /// Container for the target's own declared fields.
            payload: #payload,
            /// For-result request code; stays at the sentinel until set.
            request_code: i32,
            #parent_field
        }
    }

    fn request_code_method(&self) -> TokenStream {
        quote! {
            /// Set the for-result request code; -1 means "not defined".
            pub fn request_code(mut self, request_code: i32) -> Self {
                self.request_code = request_code;
                self
            }
        }
    }

    fn create_intent_method(&self) -> TokenStream {
        let parent_merge = self.base.parent_artifact().is_some().then(|| {
            quote! {
                let parent_intent = self.parent.create_intent(ctx);
                intent.merge_extras(&parent_intent);
            }
        });
        quote! {
            /// Build the transport addressed to this target.
            ///
            /// Ancestor payloads are layered in first, then the local
            /// payload is attached under [`Self::TAG`], so the local
            /// entry wins if a tag ever collides.
            pub fn create_intent(
                &self,
                ctx: &::paramflow_core::Context,
            ) -> ::paramflow_core::Intent {
                let mut intent = ctx.new_intent(Self::TAG);
                #parent_merge
                intent.extras_mut().put(Self::TAG, &self.payload);
                intent
            }
        }
    }

    fn start_methods(&self) -> TokenStream {
        quote! {
            /// Launch this target for result from a full screen.
            ///
            /// Launching is not terminal; the artifact is returned and can
            /// be inspected or re-launched with the same payload.
            pub fn start(self, caller: &impl ::paramflow_core::Screen) -> Self {
                let ctx = ::paramflow_core::Screen::context(caller);
                let intent = self.create_intent(ctx);
                ctx.start_for_result(intent, self.request_code);
                self
            }

            /// Launch this target for result from a subview, routing
            /// through its enclosing screen.
            pub fn start_from_subview(self, caller: &impl ::paramflow_core::Subview) -> Self {
                let ctx = ::paramflow_core::Screen::context(
                    ::paramflow_core::Subview::screen(caller),
                );
                let intent = self.create_intent(ctx);
                ctx.start_for_result(intent, self.request_code);
                self
            }

            /// Launch this target for result from an overlay, routing
            /// through its anchoring screen.
            pub fn start_from_overlay(self, caller: &impl ::paramflow_core::Overlay) -> Self {
                let ctx = ::paramflow_core::Screen::context(
                    ::paramflow_core::Overlay::screen(caller),
                );
                let intent = self.create_intent(ctx);
                ctx.start_for_result(intent, self.request_code);
                self
            }
        }
    }

    fn get_data_method(&self) -> TokenStream {
        let payload = self.base.payload();
        quote! {
            /// Read this target's payload from an inbound intent.
            ///
            /// A missing intent or a missing tagged entry yields a default
            /// payload; the initial entry point of a program legitimately
            /// arrives with no transport, so callers never null-check.
            pub fn get_data(intent: ::core::option::Option<&::paramflow_core::Intent>) -> #payload {
                intent
                    .and_then(|intent| intent.extras().get::<#payload>(Self::TAG))
                    .unwrap_or_default()
            }
        }
    }
}
