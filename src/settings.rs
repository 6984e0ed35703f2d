//! Settings engine: pure transforms from a field's input to a
//! [`SettingsPatch`](crate::problem::SettingsPatch), plus the summaries shown
//! on collapsed settings cards.

mod cards;
mod hints;
pub mod parse;
mod scoring;
mod show_answer;

pub use cards::{matlab_change, matlab_summary, reset_change, timer_change};
pub use hints::{add_hint, change_hint, delete_hint, hints_summary, next_hint_id};
pub use scoring::{attempt_display, attempt_display_on_change, max_attempt_change, unlimited_change, weight_change};
pub use show_answer::{attempts_change, requires_attempt_count, show_answer_change};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Nothing set.
    None,
    Hints { first: String, more: usize },
    Text(String),
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Summary::None => f.write_str("None"),
            Summary::Hints { first, more: 0 } => f.write_str(first),
            Summary::Hints { first, more } => write!(f, "{first} (+{more} more)"),
            Summary::Text(text) => f.write_str(text),
        }
    }
}
