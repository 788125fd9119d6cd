//! Question catalog
//!
//! Static sections of yes/no questions. Each question carries its own
//! optional gap description, so recommendations never depend on keeping
//! separate tables aligned by position.

pub mod builtin;
pub mod types;

pub use types::{Catalog, Question, Section};

impl Catalog {
    /// Shared handle to the built-in project maturity catalog
    pub fn builtin() -> std::sync::Arc<Catalog> {
        builtin::builtin()
    }
}
