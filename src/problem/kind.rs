use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EditorError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemType {
    #[serde(rename = "multiplechoiceresponse")]
    SingleSelect,
    #[serde(rename = "choiceresponse")]
    MultiSelect,
    #[serde(rename = "optionresponse")]
    Dropdown,
    #[serde(rename = "numericalresponse")]
    Numeric,
    #[serde(rename = "stringresponse")]
    TextInput,
    #[serde(rename = "advanced")]
    Advanced,
}

impl ProblemType {
    pub const ALL: [ProblemType; 6] = [
        ProblemType::SingleSelect,
        ProblemType::MultiSelect,
        ProblemType::Dropdown,
        ProblemType::Numeric,
        ProblemType::TextInput,
        ProblemType::Advanced,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProblemType::SingleSelect => "multiplechoiceresponse",
            ProblemType::MultiSelect => "choiceresponse",
            ProblemType::Dropdown => "optionresponse",
            ProblemType::Numeric => "numericalresponse",
            ProblemType::TextInput => "stringresponse",
            ProblemType::Advanced => "advanced",
        }
    }

    /// Title a new block of this type gets until the author renames it.
    pub fn default_title(self) -> &'static str {
        match self {
            ProblemType::SingleSelect => "Single select",
            ProblemType::MultiSelect => "Multi-select",
            ProblemType::Dropdown => "Dropdown",
            ProblemType::Numeric => "Numerical input",
            ProblemType::TextInput => "Text input",
            ProblemType::Advanced => "Advanced problem",
        }
    }

    pub fn supports_rich_text(self) -> bool {
        matches!(self, ProblemType::SingleSelect | ProblemType::MultiSelect)
    }

    pub fn is_single_answer(self) -> bool {
        self == ProblemType::Dropdown
    }
}

impl FromStr for ProblemType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| EditorError::UnknownProblemType(s.to_string()))
    }
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(self.default_title())
    }
}
