//! Core application primitives (run pipeline, scheduler)

pub mod runtime;
pub mod scheduler;

pub use runtime::*;
pub use scheduler::*;
