use serde::{Deserialize, Serialize};

/// Positional answer id: `A`..`Z`, then `AA`, `AB`, ...
pub fn answer_id(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answer {
    pub id: String,
    pub title: String,
    pub correct: bool,
    pub selected_feedback: String,
    pub unselected_feedback: String,
    pub is_answer_range: bool,
}

impl Answer {
    pub fn blank(id: String) -> Self {
        Answer {
            id,
            ..Default::default()
        }
    }

    pub fn has_feedback(&self) -> bool {
        !self.selected_feedback.is_empty() || !self.unselected_feedback.is_empty()
    }
}

/// A partial answer: only the fields that are `Some` are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerPatch {
    pub id: String,
    pub title: Option<String>,
    pub correct: Option<bool>,
    pub selected_feedback: Option<String>,
    pub unselected_feedback: Option<String>,
    pub is_answer_range: Option<bool>,
    /// Marking this answer correct clears every other answer.
    pub has_single_answer: bool,
}

impl AnswerPatch {
    pub fn new(id: impl Into<String>) -> Self {
        AnswerPatch {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn correct(mut self, correct: bool) -> Self {
        self.correct = Some(correct);
        self
    }

    pub fn selected_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.selected_feedback = Some(feedback.into());
        self
    }

    pub fn unselected_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.unselected_feedback = Some(feedback.into());
        self
    }

    pub fn single_answer(mut self, single: bool) -> Self {
        self.has_single_answer = single;
        self
    }

    pub fn merge_into(&self, answer: &mut Answer) {
        if let Some(title) = &self.title {
            answer.title = title.clone();
        }
        if let Some(correct) = self.correct {
            answer.correct = correct;
        }
        if let Some(feedback) = &self.selected_feedback {
            answer.selected_feedback = feedback.clone();
        }
        if let Some(feedback) = &self.unselected_feedback {
            answer.unselected_feedback = feedback.clone();
        }
        if let Some(range) = self.is_answer_range {
            answer.is_answer_range = range;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_spreadsheet_letters() {
        assert_eq!(answer_id(0), "A");
        assert_eq!(answer_id(1), "B");
        assert_eq!(answer_id(25), "Z");
        assert_eq!(answer_id(26), "AA");
        assert_eq!(answer_id(27), "AB");
        assert_eq!(answer_id(701), "ZZ");
        assert_eq!(answer_id(702), "AAA");
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut answer = Answer {
            id: "A".into(),
            title: "<p>two</p>".into(),
            correct: true,
            selected_feedback: "yes".into(),
            ..Default::default()
        };
        AnswerPatch::new("A").title("2").merge_into(&mut answer);
        assert_eq!(answer.title, "2");
        assert!(answer.correct);
        assert_eq!(answer.selected_feedback, "yes");
    }

    #[test]
    fn answer_json_uses_camel_case() {
        let json = serde_json::to_value(Answer::blank("A".into())).unwrap();
        assert_eq!(json["isAnswerRange"], false);
        assert_eq!(json["selectedFeedback"], "");
    }
}
