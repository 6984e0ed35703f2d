use tracing::warn;

use crate::bridge::strip_markup;
use crate::error::{EditorError, EditorResult};
use crate::problem::{answer_id, Answer, AnswerPatch, ProblemType, Question};

/// Recompute `correct_answer_count` from the answer list.
pub fn recount(question: &mut Question) {
    question.correct_answer_count = question.count_correct();
}

pub fn add_answer(question: &mut Question) -> &Answer {
    let mut answer = Answer::blank(answer_id(question.answers.len()));
    answer.correct = question.problem_type == Some(ProblemType::Numeric);
    question.answers.push(answer);
    recount(question);
    let index = question.answers.len() - 1;
    &question.answers[index]
}

pub fn add_answer_range(question: &mut Question) -> EditorResult<&Answer> {
    if question.problem_type != Some(ProblemType::Numeric) {
        return Err(EditorError::RangeNotAllowed(question.problem_type));
    }
    if question.has_answer_range() {
        return Err(EditorError::DuplicateRange);
    }
    let mut answer = Answer::blank(answer_id(question.answers.len()));
    answer.correct = true;
    answer.is_answer_range = true;
    question.answers.push(answer);
    recount(question);
    let index = question.answers.len() - 1;
    Ok(&question.answers[index])
}

/// Merge `patch` into its answer. A dropdown only takes single-answer
/// updates and every edited numeric answer stays correct.
pub fn update_answer(question: &mut Question, patch: &AnswerPatch) -> EditorResult<()> {
    let index = position(question, &patch.id)?;
    if patch.is_answer_range == Some(true) && !question.answers[index].is_answer_range {
        if question.problem_type != Some(ProblemType::Numeric) {
            return Err(EditorError::RangeNotAllowed(question.problem_type));
        }
        if question.has_answer_range() {
            return Err(EditorError::DuplicateRange);
        }
    }

    let numeric = question.problem_type == Some(ProblemType::Numeric);
    let single = patch.has_single_answer || question.is_single_answer();
    let clear_others = single && patch.correct == Some(true);
    for (i, answer) in question.answers.iter_mut().enumerate() {
        if i == index {
            patch.merge_into(answer);
            answer.correct |= numeric;
        } else if clear_others {
            answer.correct = false;
        }
    }
    recount(question);
    Ok(())
}

/// Remove an answer. An answer range is swapped for a blank answer in the same
/// slot; otherwise the answers after it shift up and take over their new
/// positional ids.
pub fn delete_answer(question: &mut Question, id: &str) -> EditorResult<()> {
    let index = position(question, id)?;
    if question.answers[index].is_answer_range {
        question.answers[index] = Answer::blank(id.to_string());
    } else {
        question.answers.remove(index);
        for (i, answer) in question.answers.iter_mut().enumerate().skip(index) {
            answer.id = answer_id(i);
        }
    }
    recount(question);
    Ok(())
}

/// The `(old, new)` id pairs `delete_answer` would produce, in position order.
pub fn moved_ids(answers: &[Answer], removed: &str) -> Vec<(String, String)> {
    match answers.iter().position(|a| a.id == removed) {
        Some(index) if !answers[index].is_answer_range => answers[index + 1..]
            .iter()
            .enumerate()
            .map(|(offset, answer)| (answer.id.clone(), answer_id(index + offset)))
            .filter(|(from, to)| from != to)
            .collect(),
        _ => Vec::new(),
    }
}

/// Give every answer its positional id. Returns the `(old, new)` pairs of the
/// answers that were renamed.
pub fn reletter(question: &mut Question) -> Vec<(String, String)> {
    let mut moves = Vec::new();
    for (i, answer) in question.answers.iter_mut().enumerate() {
        let id = answer_id(i);
        if answer.id != id {
            moves.push((std::mem::replace(&mut answer.id, id.clone()), id));
        }
    }
    moves
}

/// Replace rich titles and feedback by their plain text.
pub fn flatten_markup(question: &mut Question) {
    for answer in question.answers.iter_mut() {
        answer.title = strip_markup(&answer.title);
        answer.selected_feedback = strip_markup(&answer.selected_feedback);
        answer.unselected_feedback = strip_markup(&answer.unselected_feedback);
    }
}

/// Force the answer list into the shape the current type allows.
pub fn normalize(question: &mut Question) {
    match question.problem_type {
        Some(ProblemType::Dropdown) => {
            let mut seen = false;
            for answer in question.answers.iter_mut().filter(|a| a.correct) {
                answer.correct = !seen;
                seen = true;
            }
        }
        Some(ProblemType::Numeric) => {
            for answer in question.answers.iter_mut() {
                answer.correct = true;
            }
        }
        _ => (),
    }
    recount(question);
}

fn position(question: &Question, id: &str) -> EditorResult<usize> {
    question.answers.iter().position(|a| a.id == id).ok_or_else(|| {
        warn!(id, "answer not found");
        EditorError::UnknownAnswer(id.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: &str, correct: bool) -> Answer {
        Answer { id: id.into(), correct, ..Default::default() }
    }

    fn question(problem_type: ProblemType, answers: Vec<Answer>) -> Question {
        let mut question = Question::new(Some(problem_type));
        question.answers = answers;
        recount(&mut question);
        question
    }

    #[test]
    fn add_answer_to_multi_select() {
        let mut q = Question::new(Some(ProblemType::MultiSelect));
        add_answer(&mut q);
        assert_eq!(q.answers, vec![Answer::blank("A".into())]);
        assert_eq!(q.correct_answer_count, 0);
    }

    #[test]
    fn add_answer_to_numeric_is_correct() {
        let mut q = Question::new(Some(ProblemType::Numeric));
        let added = add_answer(&mut q).clone();
        assert!(added.correct);
        assert_eq!(q.correct_answer_count, 1);
    }

    #[test]
    fn answer_range_requires_numeric() {
        let mut q = Question::new(Some(ProblemType::TextInput));
        assert!(matches!(add_answer_range(&mut q), Err(EditorError::RangeNotAllowed(_))));
        assert!(q.answers.is_empty());

        let mut q = Question::new(Some(ProblemType::Numeric));
        let range = add_answer_range(&mut q).unwrap().clone();
        assert_eq!(range.id, "A");
        assert!(range.correct && range.is_answer_range);
        assert_eq!(q.correct_answer_count, 1);
        assert!(matches!(add_answer_range(&mut q), Err(EditorError::DuplicateRange)));
    }

    #[test]
    fn update_recounts() {
        let mut q = question(ProblemType::MultiSelect, vec![answer("A", false), answer("B", false)]);
        update_answer(&mut q, &AnswerPatch::new("A").correct(true)).unwrap();
        update_answer(&mut q, &AnswerPatch::new("B").correct(true)).unwrap();
        assert_eq!(q.correct_answer_count, 2);
        update_answer(&mut q, &AnswerPatch::new("B").correct(false)).unwrap();
        assert_eq!(q.correct_answer_count, 1);
    }

    #[test]
    fn single_answer_update_clears_the_rest() {
        let mut q = question(ProblemType::MultiSelect, vec![answer("A", true), answer("B", true), answer("C", false)]);
        update_answer(&mut q, &AnswerPatch::new("C").correct(true).single_answer(true)).unwrap();
        let correct: Vec<_> = q.answers.iter().map(|a| a.correct).collect();
        assert_eq!(correct, vec![false, false, true]);
        assert_eq!(q.correct_answer_count, 1);
    }

    #[test]
    fn unknown_id_leaves_state_alone() {
        let mut q = question(ProblemType::MultiSelect, vec![answer("A", true)]);
        let before = q.clone();
        assert!(matches!(
            update_answer(&mut q, &AnswerPatch::new("Z").correct(false)),
            Err(EditorError::UnknownAnswer(id)) if id == "Z"
        ));
        assert!(delete_answer(&mut q, "Z").is_err());
        assert_eq!(q, before);
    }

    #[test]
    fn delete_shifts_later_answers() {
        let mut q = question(ProblemType::MultiSelect, vec![answer("A", false), answer("B", true)]);
        delete_answer(&mut q, "A").unwrap();
        assert_eq!(q.answers, vec![answer("A", true)]);
        assert_eq!(q.correct_answer_count, 1);
    }

    #[test]
    fn delete_in_the_middle() {
        let mut q = question(
            ProblemType::MultiSelect,
            vec![answer("A", true), answer("B", true), answer("C", false), answer("D", true)],
        );
        assert_eq!(
            moved_ids(&q.answers, "B"),
            vec![("C".to_string(), "B".to_string()), ("D".to_string(), "C".to_string())]
        );
        delete_answer(&mut q, "B").unwrap();
        let ids: Vec<_> = q.answers.iter().map(|a| (a.id.as_str(), a.correct)).collect();
        assert_eq!(ids, vec![("A", true), ("B", false), ("C", true)]);
        assert_eq!(q.correct_answer_count, 2);
    }

    #[test]
    fn deleting_a_range_leaves_a_blank_answer() {
        let mut q = Question::new(Some(ProblemType::Numeric));
        add_answer(&mut q);
        add_answer_range(&mut q).unwrap();
        assert!(moved_ids(&q.answers, "B").is_empty());

        delete_answer(&mut q, "B").unwrap();
        assert_eq!(q.answers.len(), 2);
        assert_eq!(q.answers[1], Answer::blank("B".into()));
        assert_eq!(q.correct_answer_count, 1);
    }

    #[test]
    fn numeric_answers_stay_correct() {
        let mut q = Question::new(Some(ProblemType::Numeric));
        add_answer(&mut q);
        update_answer(&mut q, &AnswerPatch::new("A").correct(false)).unwrap();
        assert!(q.answers[0].correct);
        assert_eq!(q.correct_answer_count, 1);

        add_answer_range(&mut q).unwrap();
        delete_answer(&mut q, "B").unwrap();
        assert!(!q.answers[1].correct);
        update_answer(&mut q, &AnswerPatch::new("B").title("[1, 2]")).unwrap();
        assert!(q.answers[1].correct);
        assert_eq!(q.correct_answer_count, 2);
    }

    #[test]
    fn dropdown_update_is_single_answer_without_flag() {
        let mut q = question(ProblemType::Dropdown, vec![answer("A", true), answer("B", false)]);
        update_answer(&mut q, &AnswerPatch::new("B").correct(true)).unwrap();
        let correct: Vec<_> = q.answers.iter().map(|a| a.correct).collect();
        assert_eq!(correct, vec![false, true]);
    }

    #[test]
    fn update_cannot_add_a_second_range() {
        let mut q = Question::new(Some(ProblemType::Numeric));
        add_answer(&mut q);
        add_answer_range(&mut q).unwrap();
        let before = q.clone();

        let mut patch = AnswerPatch::new("A");
        patch.is_answer_range = Some(true);
        assert!(matches!(update_answer(&mut q, &patch), Err(EditorError::DuplicateRange)));
        assert_eq!(q, before);

        patch.id = "B".into();
        update_answer(&mut q, &patch).unwrap();
        assert_eq!(q.answers.iter().filter(|a| a.is_answer_range).count(), 1);
    }

    #[test]
    fn update_cannot_add_a_range_outside_numeric() {
        let mut q = question(ProblemType::MultiSelect, vec![answer("A", false)]);
        let mut patch = AnswerPatch::new("A");
        patch.is_answer_range = Some(true);
        assert!(matches!(
            update_answer(&mut q, &patch),
            Err(EditorError::RangeNotAllowed(Some(ProblemType::MultiSelect)))
        ));
        assert!(!q.answers[0].is_answer_range);
    }

    #[test]
    fn reletter_reports_renames() {
        let mut q = question(ProblemType::MultiSelect, vec![answer("A", false), answer("C", true), answer("E", false)]);
        let moves = reletter(&mut q);
        assert_eq!(
            moves,
            vec![("C".to_string(), "B".to_string()), ("E".to_string(), "C".to_string())]
        );
        let ids: Vec<_> = q.answers.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn normalize_dropdown_keeps_first_correct() {
        let mut q = question(ProblemType::Dropdown, vec![answer("A", false), answer("B", true), answer("C", true)]);
        normalize(&mut q);
        let correct: Vec<_> = q.answers.iter().map(|a| a.correct).collect();
        assert_eq!(correct, vec![false, true, false]);
        assert_eq!(q.correct_answer_count, 1);
    }
}
