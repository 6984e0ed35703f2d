use tabular::{Row, Table};

use problem_editor::bridge::ContentField;
use problem_editor::engine::{Command, TypeSelection};
use problem_editor::problem::{AnswerPatch, ProblemType, Question, SettingsPatch, ShowAnswerTrigger};
use problem_editor::settings;
use problem_editor::state::EditorStateService;
use problem_editor::EditorResult;

fn type_label(problem_type: Option<ProblemType>) -> String {
    match problem_type {
        Some(t) => format!("{} ({})", t, t.key()),
        None => "not selected".to_string(),
    }
}

fn one_line(text: &str) -> String {
    text.replace('\n', " ")
}

pub async fn show(state: EditorStateService) -> EditorResult<()> {
    let question = state.question().await?;
    println!("title: {}", state.block_title().await?);
    println!("type: {}", type_label(question.problem_type));
    println!("question: {}", one_line(&question.question));
    answers(state).await
}

pub async fn answers(state: EditorStateService) -> EditorResult<()> {
    let question = state.question().await?;
    let mut table = Table::new("\t{:<} {:<} {:^} {:<} {:<}")
        .with_row(Row::new()
            .with_cell("")
            .with_cell("Answer")
            .with_cell("Correct")
            .with_cell("Feedback")
            .with_cell(""));
    for answer in &question.answers {
        let feedback = if state.feedback_visible(&answer.id).await? {
            format!("{} / {}", one_line(&answer.selected_feedback), one_line(&answer.unselected_feedback))
        } else {
            "hidden".to_string()
        };
        table.add_row(Row::new()
            .with_cell(&answer.id)
            .with_cell(one_line(&answer.title))
            .with_cell(if answer.correct { "yes" } else { "no" })
            .with_cell(feedback)
            .with_cell(if answer.is_answer_range { "range" } else { "" }));
    }
    println!("{}", table);
    println!("correct answers: {}", question.correct_answer_count);
    Ok(())
}

pub async fn settings(state: EditorStateService) -> EditorResult<()> {
    let question = state.question().await?;
    let default_attempts = state.default_max_attempts().await?;
    let s = &question.settings;

    let attempts = if s.scoring.attempts.unlimited {
        "unlimited".to_string()
    } else {
        settings::attempt_display(&s.scoring.attempts, default_attempts)
    };
    let show_answer = if settings::requires_attempt_count(s.show_answer.on) {
        format!("{} after {} attempts", s.show_answer.on.key(), s.show_answer.after_attempts)
    } else {
        s.show_answer.on.key().to_string()
    };

    let table = Table::new("\t{:<}: {:<}")
        .with_row(Row::new().with_cell("Scoring").with_cell(format!("{} attempts, weight {}", attempts, s.scoring.weight)))
        .with_row(Row::new().with_cell("Hints").with_cell(settings::hints_summary(&s.hints)))
        .with_row(Row::new().with_cell("Show answer").with_cell(show_answer))
        .with_row(Row::new().with_cell("Time between attempts").with_cell(format!("{} seconds", s.time_between)))
        .with_row(Row::new().with_cell("MATLAB api key").with_cell(settings::matlab_summary(&s.mat_lab_api_key)))
        .with_row(Row::new().with_cell("Reset button").with_cell(if s.show_reset_button { "shown" } else { "hidden" }));
    println!("{}", table);
    Ok(())
}

pub async fn types(state: EditorStateService) -> EditorResult<()> {
    let current = state.question().await?.problem_type;
    let mut table = Table::new("\t{:<} {:<} {:<}");
    for t in ProblemType::ALL {
        table.add_row(Row::new()
            .with_cell(t.key())
            .with_cell(t)
            .with_cell(if Some(t) == current { "*" } else { "" }));
    }
    println!("{}", table);
    Ok(())
}

pub async fn question(state: EditorStateService, text: String) -> EditorResult<()> {
    state.dispatch(Command::UpdateQuestion(text)).await
}

pub async fn rename(state: EditorStateService, title: String) -> EditorResult<()> {
    state.set_block_title(&title).await
}

pub async fn add_answer(state: EditorStateService) -> EditorResult<()> {
    state.dispatch(Command::AddAnswer).await?;
    answers(state).await
}

pub async fn add_range(state: EditorStateService) -> EditorResult<()> {
    state.dispatch(Command::AddAnswerRange).await?;
    answers(state).await
}

pub async fn delete_answer(state: EditorStateService, id: String) -> EditorResult<()> {
    let correct = state.question().await?.answer(&id).is_some_and(|a| a.correct);
    state.dispatch(Command::DeleteAnswer { id, correct }).await?;
    answers(state).await
}

pub async fn set_correct(state: EditorStateService, id: String, correct: bool) -> EditorResult<()> {
    state.dispatch(Command::UpdateAnswer(AnswerPatch::new(id).correct(correct))).await?;
    answers(state).await
}

pub async fn edit_text(state: EditorStateService, id: String, field: ContentField, text: String) -> EditorResult<()> {
    state.edit_content(&id, field, &text).await?;
    if state.question().await?.supports_rich_text() {
        println!("Saved in the editor, use `commit` to write it into the answer.");
    }
    Ok(())
}

pub async fn commit(state: EditorStateService) -> EditorResult<()> {
    state.commit_content().await?;
    answers(state).await
}

pub async fn toggle_feedback(state: EditorStateService, id: String, open: bool) -> EditorResult<()> {
    let visible = state.toggle_feedback(&id, open).await?;
    if !open && visible {
        println!("Feedback of answer {} is not empty and stays visible.", id);
    }
    Ok(())
}

pub async fn change_type(state: EditorStateService, key: &str) -> EditorResult<()> {
    let type_key = key.parse::<ProblemType>()?;
    let title = state.change_type(type_key).await?;
    println!("type: {}\ntitle: {}", type_label(Some(type_key)), title);
    answers(state).await
}

async fn update_settings(
    state: &EditorStateService,
    change: impl FnOnce(&Question, u32) -> EditorResult<SettingsPatch>,
) -> EditorResult<()> {
    let question = state.question().await?;
    let default_attempts = state.default_max_attempts().await?;
    let patch = change(&question, default_attempts)?;
    state.dispatch(Command::UpdateSettings(patch)).await
}

pub async fn attempts(state: EditorStateService, value: String) -> EditorResult<()> {
    update_settings(&state, |q, default| {
        Ok(settings::max_attempt_change(&q.settings.scoring, &value, default))
    }).await?;
    settings(state).await
}

pub async fn unlimited(state: EditorStateService, on: bool) -> EditorResult<()> {
    update_settings(&state, |q, default| Ok(settings::unlimited_change(&q.settings.scoring, on, default))).await?;
    settings(state).await
}

pub async fn weight(state: EditorStateService, value: String) -> EditorResult<()> {
    update_settings(&state, |q, _| Ok(settings::weight_change(&q.settings.scoring, &value))).await?;
    settings(state).await
}

pub async fn add_hint(state: EditorStateService) -> EditorResult<()> {
    update_settings(&state, |q, _| Ok(settings::add_hint(&q.settings.hints))).await?;
    hints(state).await
}

pub async fn change_hint(state: EditorStateService, id: u32, text: String) -> EditorResult<()> {
    update_settings(&state, |q, _| settings::change_hint(&q.settings.hints, id, &text)).await?;
    hints(state).await
}

pub async fn delete_hint(state: EditorStateService, id: u32) -> EditorResult<()> {
    update_settings(&state, |q, _| settings::delete_hint(&q.settings.hints, id)).await?;
    hints(state).await
}

async fn hints(state: EditorStateService) -> EditorResult<()> {
    let question = state.question().await?;
    let mut table = Table::new("\t{:>}: {:<}");
    table.add_heading("\tHints:");
    for hint in &question.settings.hints {
        table.add_row(Row::new().with_cell(hint.id).with_cell(one_line(&hint.value)));
    }
    println!("{}", table);
    Ok(())
}

pub async fn show_answer(state: EditorStateService, trigger: &str) -> EditorResult<()> {
    let on = trigger.parse::<ShowAnswerTrigger>()?;
    update_settings(&state, |q, _| Ok(settings::show_answer_change(&q.settings.show_answer, on))).await?;
    if settings::requires_attempt_count(on) {
        println!("Use `after <attempts>` to set the number of attempts.");
    }
    Ok(())
}

pub async fn show_answer_attempts(state: EditorStateService, value: String) -> EditorResult<()> {
    update_settings(&state, |q, _| Ok(settings::attempts_change(&q.settings.show_answer, &value))).await?;
    settings(state).await
}

pub async fn timer(state: EditorStateService, value: String) -> EditorResult<()> {
    update_settings(&state, |_, _| Ok(settings::timer_change(&value))).await?;
    settings(state).await
}

pub async fn matlab(state: EditorStateService, key: String) -> EditorResult<()> {
    update_settings(&state, |_, _| Ok(settings::matlab_change(&key))).await?;
    settings(state).await
}

pub async fn reset(state: EditorStateService, on: bool) -> EditorResult<()> {
    update_settings(&state, |_, _| Ok(settings::reset_change(on))).await?;
    settings(state).await
}

pub async fn select_type(state: EditorStateService, max_attempts: &str, trigger: &str, reset: bool) -> EditorResult<()> {
    let max_attempts = match max_attempts {
        "-" => None,
        value => Some(settings::parse::count_or_zero(value)),
    };
    let selection = TypeSelection {
        max_attempts,
        show_answer: trigger.parse()?,
        show_reset_button: reset,
    };
    state.dispatch(Command::SetEnableTypeSelection(selection)).await?;
    show(state).await
}
