//! paramflow-codegen - Synthesis engine for navigation-target artifacts
//!
//! Given a [`ParsedTarget`] (produced by the attribute parser in
//! paramflow-macros, or any other introspection front end), this crate
//! decides what members, methods, and structure the generated
//! dispatcher/builder carries and assembles it as a token stream:
//!
//! - [`ScreenGenerator`] - `<Target>Dispatcher` for launched-for-result
//!   screen targets
//! - [`SubviewGenerator`] - `<Target>Builder` for attached subview targets
//! - [`generate`] - role dispatch over the two
//! - [`emit`] - optional rendering of finished artifacts to source files
//!
//! Generation is single-shot, synchronous, and side-effect-free; only
//! [`emit::write_artifact`] touches the file system.

pub mod base;
pub mod emit;
pub mod model;
pub mod screen;
pub mod subview;

mod error;

pub use error::{GenerateError, GenerateResult};
pub use model::{ContainerKind, FieldData, ParentTarget, ParsedTarget, TargetRole};
pub use screen::ScreenGenerator;
pub use subview::SubviewGenerator;

use proc_macro2::TokenStream;

/// Generate the artifact for `target`, dispatching on its declared role.
pub fn generate(target: &ParsedTarget) -> GenerateResult<TokenStream> {
    match target.role {
        TargetRole::Screen => ScreenGenerator::new(target).generate_code(),
        TargetRole::Subview => SubviewGenerator::new(target).generate_code(),
    }
}
