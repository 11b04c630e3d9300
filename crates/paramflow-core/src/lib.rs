//! paramflow-core - Runtime support for paramflow-generated dispatchers
//!
//! This crate provides the types the generated code runs on:
//! - [`Extras`] - the serializable tag/value channel payloads travel in
//! - [`Intent`] - the transport used to launch screen targets
//! - [`Context`] - the launch handle that records for-result starts
//! - [`Screen`], [`Subview`], [`Overlay`] - caller traits for launch methods
//! - [`ViewComponent`] - argument attachment for subview targets
//! - [`ExtrasError`] - error handling for payload access

mod component;
mod context;
mod error;
mod extras;
mod intent;

pub use component::{Overlay, Screen, Subview, ViewComponent};
pub use context::{Context, LaunchRecord};
pub use error::{ExtrasError, ExtrasResult};
pub use extras::Extras;
pub use intent::Intent;

/// Sentinel request code meaning "no request code was set".
pub const UNDEFINED_REQUEST_CODE: i32 = -1;
