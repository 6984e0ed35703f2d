//! The problem state engine.
//!
//! [`apply`] runs one command against a question and returns the next state.
//! [`change_type`] rewrites answers for a new problem type before committing it.

pub mod answers;
mod command;
mod feedback;
mod transition;

pub use command::{apply, dispatch, Command, FieldUpdate, TypeSelection};
pub use feedback::FeedbackVisibility;
pub use transition::{change_type, Transition};
