use super::parse::count_or_zero;
use crate::problem::{SettingsPatch, ShowAnswer, ShowAnswerTrigger};

fn show_answer_patch(show_answer: ShowAnswer) -> SettingsPatch {
    SettingsPatch { show_answer: Some(show_answer), ..Default::default() }
}

/// Triggers that depend on how many attempts were made.
pub fn requires_attempt_count(on: ShowAnswerTrigger) -> bool {
    matches!(
        on,
        ShowAnswerTrigger::AfterSomeNumberOfAttempts
            | ShowAnswerTrigger::AfterAllAttempts
            | ShowAnswerTrigger::AfterAllAttemptsOrCorrect
    )
}

pub fn show_answer_change(show_answer: &ShowAnswer, on: ShowAnswerTrigger) -> SettingsPatch {
    show_answer_patch(ShowAnswer { on, ..*show_answer })
}

pub fn attempts_change(show_answer: &ShowAnswer, value: &str) -> SettingsPatch {
    show_answer_patch(ShowAnswer { after_attempts: count_or_zero(value), ..*show_answer })
}
