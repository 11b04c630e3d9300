//! paramflow-macros - Attribute macros generating navigation artifacts
//!
//! This crate provides:
//! - `#[screen_params]` - Generate a `<Target>Dispatcher` for a screen
//!   target that is launched for result
//! - `#[subview_params]` - Generate a `<Target>Builder` for a subview
//!   target that is built with an argument bag attached
//!
//! Both macros leave the annotated struct untouched and append the
//! generated artifact next to it, so the payload travels under a tag
//! derived from the expansion site's module path.

use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

mod parse;

/// Attribute generating the dispatcher for a screen target
///
/// Declared fields become typed payload entries with fluent setters on
/// the dispatcher; a `parent(...)` clause chains an ancestor target's
/// dispatcher in, layering its payload under the local one.
///
/// # Example
///
/// ```ignore
/// use paramflow_macros::screen_params;
///
/// #[screen_params(
///     field(name = "user_id", ty = "u64"),
///     field(name = "tab", ty = "String", default = "overview"),
/// )]
/// struct ProfileScreen {
///     // screen state
/// }
///
/// // elsewhere:
/// ProfileScreenDispatcher::create()
///     .set_user_id(42)
///     .request_code(7)
///     .start(&caller);
/// ```
#[proc_macro_attribute]
pub fn screen_params(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemStruct);
    finish(expand_screen(&item, attr.into()), item)
}

/// Attribute generating the builder for a subview target
///
/// Like [`macro@screen_params`], but the artifact assembles an argument
/// bag instead of a transport, and `build` hands back a configured
/// instance. `abstract_base` suppresses `build` for targets that only
/// exist to be inherited from.
///
/// # Example
///
/// ```ignore
/// use paramflow_macros::subview_params;
///
/// #[subview_params(field(name = "avatar_url", ty = "String"))]
/// struct AvatarPane {
///     args: Option<paramflow_core::Extras>,
/// }
///
/// let pane = AvatarPaneBuilder::create()
///     .set_avatar_url("https://example.test/a.png".into())
///     .build();
/// ```
#[proc_macro_attribute]
pub fn subview_params(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemStruct);
    finish(expand_subview(&item, attr.into()), item)
}

fn expand_screen(
    item: &ItemStruct,
    attr: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream, darling::Error> {
    let metas = NestedMeta::parse_meta_list(attr)?;
    let opts = parse::ScreenOpts::from_list(&metas)?;
    let target = parse::screen_target(item.ident.clone(), opts)?;
    paramflow_codegen::generate(&target).map_err(|err| darling::Error::custom(err.to_string()))
}

fn expand_subview(
    item: &ItemStruct,
    attr: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream, darling::Error> {
    let metas = NestedMeta::parse_meta_list(attr)?;
    let opts = parse::SubviewOpts::from_list(&metas)?;
    let target = parse::subview_target(item.ident.clone(), opts)?;
    paramflow_codegen::generate(&target).map_err(|err| darling::Error::custom(err.to_string()))
}

// The annotated struct is always re-emitted, on failure alongside the
// rendered diagnostics, so downstream items keep resolving.
fn finish(
    generated: Result<proc_macro2::TokenStream, darling::Error>,
    item: ItemStruct,
) -> TokenStream {
    match generated {
        Ok(generated) => quote! {
            #item
            #generated
        }
        .into(),
        Err(err) => {
            let diagnostics = err.write_errors();
            quote! {
                #item
                #diagnostics
            }
            .into()
        }
    }
}
