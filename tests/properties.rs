use std::collections::HashSet;

use proptest::prelude::*;

use problem_editor::bridge::NoContent;
use problem_editor::engine::{apply, change_type, Command, FieldUpdate};
use problem_editor::problem::{answer_id, Answer, AnswerPatch, Hint, ProblemType, Question};
use problem_editor::settings::{add_hint, delete_hint};

#[derive(Debug, Clone)]
enum Op {
    Add,
    AddRange,
    Update { index: usize, correct: Option<bool>, single: bool },
    Delete { index: usize },
    MakeRange { index: usize },
    ChangeType(ProblemType),
    SetType(ProblemType),
}

fn problem_type() -> impl Strategy<Value = ProblemType> {
    prop::sample::select(ProblemType::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        1 => Just(Op::AddRange),
        4 => (0..8usize, prop::option::of(any::<bool>()), any::<bool>())
            .prop_map(|(index, correct, single)| Op::Update { index, correct, single }),
        2 => (0..8usize).prop_map(|index| Op::Delete { index }),
        1 => (0..8usize).prop_map(|index| Op::MakeRange { index }),
        1 => problem_type().prop_map(Op::ChangeType),
        1 => problem_type().prop_map(Op::SetType),
    ]
}

fn id_at(question: &Question, index: usize) -> String {
    question
        .answers
        .get(index)
        .map(|a| a.id.clone())
        .unwrap_or_else(|| answer_id(index))
}

fn run(question: &Question, op: &Op) -> Question {
    let result = match op {
        Op::Add => apply(question, Command::AddAnswer),
        Op::AddRange => apply(question, Command::AddAnswerRange),
        Op::Update { index, correct, single } => {
            let mut patch = AnswerPatch::new(id_at(question, *index)).single_answer(*single);
            patch.correct = *correct;
            apply(question, Command::UpdateAnswer(patch))
        }
        Op::Delete { index } => {
            let id = id_at(question, *index);
            apply(question, Command::DeleteAnswer { id, correct: false })
        }
        Op::MakeRange { index } => {
            let mut patch = AnswerPatch::new(id_at(question, *index));
            patch.is_answer_range = Some(true);
            apply(question, Command::UpdateAnswer(patch))
        }
        Op::ChangeType(t) => change_type(question, *t, "", &NoContent).map(|t| t.question),
        Op::SetType(t) => apply(question, Command::UpdateField(FieldUpdate::problem_type(Some(*t)))),
    };
    result.unwrap_or_else(|_| question.clone())
}

proptest! {
    #[test]
    fn answer_bookkeeping_holds(start in problem_type(), ops in prop::collection::vec(op(), 0..40)) {
        let mut question = Question::new(Some(start));
        for op in &ops {
            question = run(&question, op);

            let correct = question.answers.iter().filter(|a| a.correct).count();
            prop_assert_eq!(question.correct_answer_count, correct);

            let ids: HashSet<_> = question.answers.iter().map(|a| a.id.as_str()).collect();
            prop_assert_eq!(ids.len(), question.answers.len());
            for (i, answer) in question.answers.iter().enumerate() {
                prop_assert_eq!(&answer.id, &answer_id(i));
            }

            if question.problem_type == Some(ProblemType::Dropdown) {
                prop_assert!(correct <= 1, "dropdown with {} correct answers after {:?}", correct, op);
            }
            prop_assert!(question.answers.iter().filter(|a| a.is_answer_range).count() <= 1);

            if question.problem_type == Some(ProblemType::Numeric) {
                // Only the blank left behind by a deleted range may be incorrect.
                for answer in question.answers.iter().filter(|a| !a.correct) {
                    prop_assert_eq!(answer, &Answer::blank(answer.id.clone()), "after {:?}", op);
                }
            }
        }
    }

    #[test]
    fn dropdown_transition_leaves_one_correct_at_most(
        source in problem_type(),
        correct in prop::collection::vec(any::<bool>(), 0..10),
    ) {
        let mut question = Question::new(Some(ProblemType::MultiSelect));
        for flag in &correct {
            question = apply(&question, Command::AddAnswer).unwrap();
            let id = question.answers.last().unwrap().id.clone();
            question = apply(&question, Command::UpdateAnswer(AnswerPatch::new(id).correct(*flag))).unwrap();
        }
        question.problem_type = Some(source);

        let t = change_type(&question, ProblemType::Dropdown, "", &NoContent).unwrap();
        prop_assert!(t.question.answers.iter().filter(|a| a.correct).count() <= 1);
        prop_assert_eq!(t.question.problem_type, Some(ProblemType::Dropdown));
    }

    #[test]
    fn numeric_transition_marks_all_correct(
        source in problem_type(),
        correct in prop::collection::vec(any::<bool>(), 0..10),
    ) {
        let mut question = Question::new(Some(ProblemType::MultiSelect));
        for flag in &correct {
            question = apply(&question, Command::AddAnswer).unwrap();
            let id = question.answers.last().unwrap().id.clone();
            question = apply(&question, Command::UpdateAnswer(AnswerPatch::new(id).correct(*flag))).unwrap();
        }
        question.problem_type = Some(source);

        let t = change_type(&question, ProblemType::Numeric, "", &NoContent).unwrap();
        prop_assert!(t.question.answers.iter().filter(|a| !a.is_answer_range).all(|a| a.correct));
        prop_assert_eq!(t.question.correct_answer_count, correct.len());
    }

    #[test]
    fn hint_ids_stay_unique(deletes in prop::collection::vec(prop::option::of(0..12u32), 0..30)) {
        let mut hints: Vec<Hint> = Vec::new();
        for delete in deletes {
            match delete {
                Some(id) if hints.iter().any(|h| h.id == id) => {
                    hints = delete_hint(&hints, id).unwrap().hints.unwrap();
                }
                _ => {
                    let expected = hints.iter().map(|h| h.id + 1).max().unwrap_or(0);
                    hints = add_hint(&hints).hints.unwrap();
                    prop_assert_eq!(hints.last().map(|h| h.id), Some(expected));
                }
            }
            let ids: HashSet<_> = hints.iter().map(|h| h.id).collect();
            prop_assert_eq!(ids.len(), hints.len());
        }
    }
}

#[test]
fn deleting_a_numeric_range_keeps_its_slot() {
    let mut question = Question::new(Some(ProblemType::Numeric));
    question = apply(&question, Command::AddAnswer).unwrap();
    question = apply(&question, Command::AddAnswerRange).unwrap();
    question = apply(&question, Command::AddAnswer).unwrap();

    let question = apply(&question, Command::DeleteAnswer { id: "B".into(), correct: true }).unwrap();
    let b = question.answer("B").unwrap();
    assert!(!b.is_answer_range);
    assert!(!b.correct);
    assert_eq!(question.answers.len(), 3);
    assert_eq!(question.correct_answer_count, 2);
}
