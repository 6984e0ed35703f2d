//! State engine of a problem editor: the question record, answer bookkeeping,
//! the settings engine and the controller that rewrites a problem when its
//! type changes.

pub mod bridge;
pub mod engine;
pub mod error;
pub mod problem;
pub mod settings;
pub mod state;

pub use error::{EditorError, EditorResult};
