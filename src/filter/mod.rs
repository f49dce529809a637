//! Client-side result filtering.
//!
//! Holds no state of its own: [`engine::apply`] is a pure function from the
//! full result collection and a [`FilterSpec`] to a filtered view. The caller
//! (see [`crate::review`]) owns the collection, the spec, and the current
//! view, and always re-applies against the full collection, so filters never
//! compound across successive applications.

pub mod engine;
pub mod spec;

pub use engine::{apply, clear_view};
pub use spec::FilterSpec;
