//! # paramflow
//!
//! Generated, type-safe parameter passing between navigation targets.
//!
//! Instead of hand-writing string-keyed reads and writes around every
//! screen transition, a target declares its fields once in an attribute
//! and paramflow generates the rest:
//! - A fluent dispatcher (`<Target>Dispatcher`) for screen targets that
//!   are launched for result
//! - A fluent builder (`<Target>Builder`) for subview targets that are
//!   built with an argument bag attached
//! - A serializable payload type per target, with declared defaults and
//!   a deterministic tag to travel under
//!
//! ## Quick Start
//!
//! Generated artifacts refer to `paramflow_core` and `serde` by crate
//! path, so both sit next to the facade in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! paramflow = "0.3"
//! paramflow-core = "0.3"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ```ignore
//! use paramflow::prelude::*;
//!
//! #[screen_params(
//!     field(name = "user_id", ty = "u64"),
//!     field(name = "tab", ty = "String", default = "overview"),
//! )]
//! pub struct ProfileScreen {
//!     ctx: Context,
//! }
//!
//! impl Screen for ProfileScreen {
//!     fn context(&self) -> &Context {
//!         &self.ctx
//!     }
//! }
//!
//! // Launching:
//! ProfileScreenDispatcher::create()
//!     .set_user_id(42)
//!     .request_code(7)
//!     .start(&caller);
//!
//! // Receiving (a missing intent yields declared defaults):
//! let params = ProfileScreenDispatcher::get_data(inbound_intent);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`paramflow_core`] - The runtime surface generated code leans on
//!   (extras channel, intents, launch context, component traits)
//! - [`paramflow_macros`] - The `#[screen_params]` and
//!   `#[subview_params]` attribute macros

// Re-export core types
pub use paramflow_core::{
    Context, Extras, ExtrasError, ExtrasResult, Intent, LaunchRecord, Overlay, Screen, Subview,
    UNDEFINED_REQUEST_CODE, ViewComponent,
};

// Re-export macros
pub use paramflow_macros::{screen_params, subview_params};

// Re-export common dependencies that target authors need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use paramflow::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Component traits: `Screen`, `Subview`, `Overlay`, `ViewComponent`
/// - Runtime types: `Context`, `Extras`, `Intent`
/// - Macros: `screen_params`, `subview_params`
/// - Serde derives (payload fields often need them on nested types)
pub mod prelude {
    pub use crate::{
        Context, Extras, ExtrasError, ExtrasResult, Intent, Overlay, Screen, Subview,
        ViewComponent,
    };

    pub use paramflow_macros::{screen_params, subview_params};

    pub use serde::{Deserialize, Serialize};
}
