//! Brook Plugin System
//!
//! The seam between the host pipeline and the functions it calls:
//! - `ScalarFunction` / `ScalarExecutor`: the setup-once, evaluate-many
//!   lifecycle
//! - `FunctionRegistry`: qualified-name lookup and registration setup
//! - `AppContext`: registration-time application context

mod context;
mod registry;
mod traits;

pub use context::AppContext;
pub use registry::FunctionRegistry;
pub use traits::{
    ArgDescriptor, ArgMeta, FunctionMeta,
    ScalarExecutor, ScalarFunction, StateSnapshot,
};

/// Re-export core types for function authors
pub mod prelude {
    pub use crate::{
        AppContext, ArgDescriptor, ArgMeta, FunctionMeta,
        FunctionRegistry, ScalarExecutor, ScalarFunction, StateSnapshot,
    };
    pub use brook_core::prelude::*;
}
