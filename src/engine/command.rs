use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers;
use crate::error::EditorResult;
use crate::problem::{AnswerPatch, Attempts, ProblemType, Question, SettingsPatch, ShowAnswerTrigger};

/// Top-level fields of the question record that can be set directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdate {
    pub problem_type: Option<Option<ProblemType>>,
    pub question: Option<String>,
}

impl FieldUpdate {
    pub fn problem_type(problem_type: Option<ProblemType>) -> Self {
        FieldUpdate { problem_type: Some(problem_type), ..Default::default() }
    }
}

/// Settings carried over when an advanced problem is handed back for type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSelection {
    pub max_attempts: Option<u32>,
    #[serde(rename = "showanswer")]
    pub show_answer: ShowAnswerTrigger,
    pub show_reset_button: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    UpdateQuestion(String),
    UpdateField(FieldUpdate),
    UpdateSettings(SettingsPatch),
    AddAnswer,
    AddAnswerRange,
    UpdateAnswer(AnswerPatch),
    DeleteAnswer { id: String, correct: bool },
    SetEnableTypeSelection(TypeSelection),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::UpdateQuestion(_) => "updateQuestion",
            Command::UpdateField(_) => "updateField",
            Command::UpdateSettings(_) => "updateSettings",
            Command::AddAnswer => "addAnswer",
            Command::AddAnswerRange => "addAnswerRange",
            Command::UpdateAnswer(_) => "updateAnswer",
            Command::DeleteAnswer { .. } => "deleteAnswer",
            Command::SetEnableTypeSelection(_) => "setEnableTypeSelection",
        }
    }
}

/// Produce the state that results from running `command` against `question`.
///
/// On error the input is untouched and no new state is produced.
pub fn apply(question: &Question, command: Command) -> EditorResult<Question> {
    debug!(command = command.name(), "applying command");
    let mut next = question.clone();
    match command {
        Command::UpdateQuestion(body) => next.question = body,
        Command::UpdateField(FieldUpdate { problem_type, question: body }) => {
            if let Some(body) = body {
                next.question = body;
            }
            if let Some(problem_type) = problem_type {
                if next.supports_rich_text() && !problem_type.is_some_and(ProblemType::supports_rich_text) {
                    answers::flatten_markup(&mut next);
                }
                next.problem_type = problem_type;
                answers::normalize(&mut next);
            }
        }
        Command::UpdateSettings(patch) => patch.apply_to(&mut next.settings),
        Command::AddAnswer => {
            answers::add_answer(&mut next);
        }
        Command::AddAnswerRange => {
            answers::add_answer_range(&mut next)?;
        }
        Command::UpdateAnswer(patch) => answers::update_answer(&mut next, &patch)?,
        Command::DeleteAnswer { id, .. } => answers::delete_answer(&mut next, &id)?,
        Command::SetEnableTypeSelection(selection) => {
            next.settings.scoring.attempts = match selection.max_attempts {
                Some(number) => Attempts::limited(number),
                None => Attempts::unlimited(),
            };
            next.settings.show_answer.on = selection.show_answer;
            next.settings.show_reset_button = selection.show_reset_button;
            if next.supports_rich_text() {
                answers::flatten_markup(&mut next);
            }
            next.problem_type = None;
        }
    }
    answers::recount(&mut next);
    Ok(next)
}

/// In-place form of [`apply`]; `question` is only modified when the command succeeds.
pub fn dispatch(question: &mut Question, command: Command) -> EditorResult<()> {
    *question = apply(question, command)?;
    Ok(())
}
