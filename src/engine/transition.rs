use tracing::{info, warn};

use super::answers;
use super::command::{dispatch, Command, FieldUpdate};
use crate::bridge::{strip_markup, ContentBridge, ContentFormat, EditorContent};
use crate::error::EditorResult;
use crate::problem::{Answer, AnswerPatch, ProblemType, Question};

/// Result of switching a problem to another type.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub question: Question,
    pub block_title: String,
}

/// Switch `question` to `type_key`.
///
/// Answers are rewritten for the target type before the type itself is
/// committed: rich text is flattened when the target cannot render it, a
/// dropdown keeps no more than one correct answer and every numeric answer is
/// correct. The block title only follows the type while it still is the
/// default title of the previous type.
pub fn change_type<B: ContentBridge>(
    question: &Question,
    type_key: ProblemType,
    block_title: &str,
    bridge: &B,
) -> EditorResult<Transition> {
    info!(from = ?question.problem_type, to = type_key.key(), "changing problem type");
    let mut next = question.clone();

    let flatten = question.supports_rich_text() && !type_key.supports_rich_text();
    let snapshot = if flatten {
        let snapshot = bridge.fetch_content(ContentFormat::Text);
        if snapshot.is_none() {
            warn!("no editor content available, flattening stored answers");
        }
        snapshot
    } else {
        None
    };

    // Answers are patched under the target type's rules.
    next.problem_type = Some(type_key);
    let clear_correct = type_key == ProblemType::Dropdown && question.correct_answer_count > 1;
    for answer in &question.answers {
        let mut patch = AnswerPatch::new(answer.id.clone());
        if flatten {
            flatten_answer(&mut patch, answer, snapshot.as_ref());
        }
        if clear_correct && answer.correct {
            patch.correct = Some(false);
        } else if type_key == ProblemType::Numeric {
            patch.correct = Some(true);
        }
        answers::update_answer(&mut next, &patch)?;
    }

    dispatch(&mut next, Command::UpdateField(FieldUpdate::problem_type(Some(type_key))))?;

    Ok(Transition {
        question: next,
        block_title: follow_title(question.problem_type, type_key, block_title),
    })
}

fn flatten_answer(patch: &mut AnswerPatch, answer: &Answer, snapshot: Option<&EditorContent>) {
    let pick = |live: Option<&String>, stored: &str| match live {
        Some(text) => text.clone(),
        None => strip_markup(stored),
    };
    let id = &answer.id;
    patch.title = Some(pick(snapshot.and_then(|s| s.titles.get(id)), &answer.title));
    patch.selected_feedback = Some(pick(
        snapshot.and_then(|s| s.selected_feedback.get(id)),
        &answer.selected_feedback,
    ));
    patch.unselected_feedback = Some(pick(
        snapshot.and_then(|s| s.unselected_feedback.get(id)),
        &answer.unselected_feedback,
    ));
}

fn follow_title(from: Option<ProblemType>, to: ProblemType, block_title: &str) -> String {
    let is_default = match from {
        Some(from) => block_title == from.default_title(),
        None => block_title.is_empty(),
    };
    if is_default {
        to.default_title().to_string()
    } else {
        block_title.to_string()
    }
}
