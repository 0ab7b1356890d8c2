//! Integration test suite for the runtime
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use builtins;
    pub use conformance;
    pub use core_types;
}
