use thiserror::Error;

use crate::problem::ProblemType;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No answer with id {0:?}")]
    UnknownAnswer(String),
    #[error("No hint with id {0}")]
    UnknownHint(u32),
    #[error("Answer ranges are only allowed for numerical input problems (current type: {})", display_type(.0))]
    RangeNotAllowed(Option<ProblemType>),
    #[error("A numerical input problem can only have one answer range")]
    DuplicateRange,
    #[error("Unknown problem type: {0}")]
    UnknownProblemType(String),
    #[error("Unknown show answer option: {0}")]
    UnknownShowAnswer(String),
    #[error("Editor session is closed")]
    SessionClosed,
}

fn display_type(problem_type: &Option<ProblemType>) -> &'static str {
    problem_type.map(|t| t.key()).unwrap_or("none")
}

pub type EditorResult<T> = Result<T, EditorError>;
