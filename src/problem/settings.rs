use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EditorError;

/// `number` is blank (`None`) when attempts are unlimited; it serializes as `""`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempts {
    #[serde(with = "blank_number")]
    pub number: Option<u32>,
    pub unlimited: bool,
}

impl Attempts {
    pub fn unlimited() -> Self {
        Attempts { number: None, unlimited: true }
    }

    pub fn limited(number: u32) -> Self {
        Attempts { number: Some(number), unlimited: false }
    }
}

impl Default for Attempts {
    fn default() -> Self {
        Attempts::unlimited()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub attempts: Attempts,
    pub weight: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring { attempts: Attempts::default(), weight: 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub id: u32,
    pub value: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowAnswerTrigger {
    Always,
    Answered,
    Attempted,
    Closed,
    #[default]
    Finished,
    CorrectOrPastDue,
    PastDue,
    Never,
    #[serde(rename = "after_attempts")]
    AfterSomeNumberOfAttempts,
    AfterAllAttempts,
    AfterAllAttemptsOrCorrect,
    AttemptedNoPastDue,
}

impl ShowAnswerTrigger {
    pub const ALL: [ShowAnswerTrigger; 12] = [
        ShowAnswerTrigger::Always,
        ShowAnswerTrigger::Answered,
        ShowAnswerTrigger::Attempted,
        ShowAnswerTrigger::Closed,
        ShowAnswerTrigger::Finished,
        ShowAnswerTrigger::CorrectOrPastDue,
        ShowAnswerTrigger::PastDue,
        ShowAnswerTrigger::Never,
        ShowAnswerTrigger::AfterSomeNumberOfAttempts,
        ShowAnswerTrigger::AfterAllAttempts,
        ShowAnswerTrigger::AfterAllAttemptsOrCorrect,
        ShowAnswerTrigger::AttemptedNoPastDue,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ShowAnswerTrigger::Always => "always",
            ShowAnswerTrigger::Answered => "answered",
            ShowAnswerTrigger::Attempted => "attempted",
            ShowAnswerTrigger::Closed => "closed",
            ShowAnswerTrigger::Finished => "finished",
            ShowAnswerTrigger::CorrectOrPastDue => "correct_or_past_due",
            ShowAnswerTrigger::PastDue => "past_due",
            ShowAnswerTrigger::Never => "never",
            ShowAnswerTrigger::AfterSomeNumberOfAttempts => "after_attempts",
            ShowAnswerTrigger::AfterAllAttempts => "after_all_attempts",
            ShowAnswerTrigger::AfterAllAttemptsOrCorrect => "after_all_attempts_or_correct",
            ShowAnswerTrigger::AttemptedNoPastDue => "attempted_no_past_due",
        }
    }
}

impl FromStr for ShowAnswerTrigger {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShowAnswerTrigger::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| EditorError::UnknownShowAnswer(s.to_string()))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowAnswer {
    pub on: ShowAnswerTrigger,
    pub after_attempts: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub scoring: Scoring,
    pub hints: Vec<Hint>,
    pub show_answer: ShowAnswer,
    pub time_between: u32,
    pub mat_lab_api_key: String,
    pub show_reset_button: bool,
}

/// Settings areas to overwrite; `None` leaves an area as it is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsPatch {
    pub scoring: Option<Scoring>,
    pub hints: Option<Vec<Hint>>,
    pub show_answer: Option<ShowAnswer>,
    pub time_between: Option<u32>,
    pub mat_lab_api_key: Option<String>,
    pub show_reset_button: Option<bool>,
}

impl SettingsPatch {
    pub fn apply_to(self, settings: &mut Settings) {
        if let Some(scoring) = self.scoring {
            settings.scoring = scoring;
        }
        if let Some(hints) = self.hints {
            settings.hints = hints;
        }
        if let Some(show_answer) = self.show_answer {
            settings.show_answer = show_answer;
        }
        if let Some(time) = self.time_between {
            settings.time_between = time;
        }
        if let Some(key) = self.mat_lab_api_key {
            settings.mat_lab_api_key = key;
        }
        if let Some(show) = self.show_reset_button {
            settings.show_reset_button = show;
        }
    }
}

mod blank_number {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    pub fn serialize<S: Serializer>(number: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        match number {
            Some(n) => serializer.serialize_u32(*n),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Some(n),
            Raw::Text(s) => s.trim().parse().ok(),
        })
    }
}
