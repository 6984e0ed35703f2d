mod answer;
mod kind;
mod settings;

pub use answer::{answer_id, Answer, AnswerPatch};
pub use kind::ProblemType;
pub use settings::{Attempts, Hint, Scoring, Settings, SettingsPatch, ShowAnswer, ShowAnswerTrigger};

use serde::{Deserialize, Serialize};

/// The canonical record of the problem being edited.
///
/// Only the engine mutates a `Question`; `correct_answer_count` is derived from
/// `answers` and is recomputed after every answer mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub problem_type: Option<ProblemType>,
    pub question: String,
    pub answers: Vec<Answer>,
    pub settings: Settings,
    pub correct_answer_count: usize,
}

impl Question {
    pub fn new(problem_type: Option<ProblemType>) -> Self {
        Question {
            problem_type,
            ..Default::default()
        }
    }

    pub fn answer(&self, id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == id)
    }

    pub fn count_correct(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    pub fn has_answer_range(&self) -> bool {
        self.answers.iter().any(|a| a.is_answer_range)
    }

    pub fn supports_rich_text(&self) -> bool {
        self.problem_type.is_some_and(ProblemType::supports_rich_text)
    }

    pub fn is_single_answer(&self) -> bool {
        self.problem_type.is_some_and(ProblemType::is_single_answer)
    }
}
