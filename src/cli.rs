#[macro_use]
mod print;
mod command;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tokio::io::{self, AsyncBufReadExt, BufReader};

use problem_editor::bridge::ContentField;
use problem_editor::state::EditorStateService;
use problem_editor::EditorResult;

#[derive(Parser, Debug)]
#[command(
    name = "Problem command>",
    no_binary_name = true,
    disable_version_flag = true,
    infer_subcommands = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
struct CommandLine {
    #[command(subcommand)]
    command: EditorCommand,
}

#[derive(Subcommand, Debug)]
enum EditorCommand {
    /// Closes the editor.
    Exit,
    /// Prints the block title, problem type, question and answers.
    Show,
    /// Prints the list of answers.
    Answers,
    /// Prints a summary of every settings card.
    Settings,
    /// Prints the problem types that can be selected.
    Types,
    /// Sets the question text.
    Question { text: Vec<String> },
    /// Renames the block.
    Rename { title: Vec<String> },
    /// Adds an answer.
    Add,
    /// Adds an answer range. (numerical input only)
    Range,
    /// Deletes an answer. Later answers move up and take over its letter.
    Delete { id: String },
    /// Marks an answer as correct (true) or incorrect (false).
    Correct {
        id: String,
        #[arg(action = ArgAction::Set)]
        correct: bool,
    },
    /// Edits the title or feedback of an answer.
    Text { id: String, field: FieldArg, text: Vec<String> },
    /// Saves the rich-text editor content into the answers.
    Commit,
    /// Shows or hides the feedback fields of an answer.
    Feedback { id: String, state: Toggle },
    /// Switches the problem type. Give a type key, see `types`.
    Type { key: String },
    /// Sets the maximum number of attempts.
    Attempts {
        #[arg(allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Allows unlimited attempts (true) or goes back to the default (false).
    Unlimited {
        #[arg(action = ArgAction::Set)]
        on: bool,
    },
    /// Sets the problem weight.
    Weight {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Adds, changes or deletes hints.
    Hint {
        #[command(subcommand)]
        action: HintAction,
    },
    /// Sets when the answer is shown.
    Showanswer { trigger: String },
    /// Sets the number of attempts after which the answer is shown.
    After {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Sets the time between attempts in seconds.
    Timer {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Sets the MATLAB api key. Leave out the key to remove it.
    Matlab { key: Option<String> },
    /// Shows (true) or hides (false) the reset button.
    Reset {
        #[arg(action = ArgAction::Set)]
        on: bool,
    },
    /// Hands the problem back for type selection. Use `-` for unlimited attempts.
    SelectType {
        max_attempts: String,
        trigger: String,
        #[arg(action = ArgAction::Set)]
        reset: bool,
    },
}

#[derive(Subcommand, Debug)]
enum HintAction {
    /// Adds an empty hint.
    Add,
    /// Changes the text of a hint.
    Set { id: u32, text: Vec<String> },
    /// Deletes a hint.
    Del { id: u32 },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FieldArg {
    Title,
    Selected,
    Unselected,
}

impl From<FieldArg> for ContentField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Title => ContentField::Title,
            FieldArg::Selected => ContentField::SelectedFeedback,
            FieldArg::Unselected => ContentField::UnselectedFeedback,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Toggle {
    On,
    Off,
}

pub async fn start(state: EditorStateService) {
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        editor_command_prefix!();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        match CommandLine::try_parse_from(line.split_whitespace()) {
            Ok(CommandLine { command: EditorCommand::Exit }) => break,
            Ok(CommandLine { command }) => {
                if let Err(e) = run(state.clone(), command).await {
                    editor_print!("{}", e);
                }
            },
            Err(e) => println!("{}", e),
        }
    }
    println!("Closing editor...");
}

async fn run(state: EditorStateService, command: EditorCommand) -> EditorResult<()> {
    match command {
        EditorCommand::Exit => Ok(()),
        EditorCommand::Show => command::show(state).await,
        EditorCommand::Answers => command::answers(state).await,
        EditorCommand::Settings => command::settings(state).await,
        EditorCommand::Types => command::types(state).await,
        EditorCommand::Question { text } => command::question(state, text.join(" ")).await,
        EditorCommand::Rename { title } => command::rename(state, title.join(" ")).await,
        EditorCommand::Add => command::add_answer(state).await,
        EditorCommand::Range => command::add_range(state).await,
        EditorCommand::Delete { id } => command::delete_answer(state, id).await,
        EditorCommand::Correct { id, correct } => command::set_correct(state, id, correct).await,
        EditorCommand::Text { id, field, text } => command::edit_text(state, id, field.into(), text.join(" ")).await,
        EditorCommand::Commit => command::commit(state).await,
        EditorCommand::Feedback { id, state: toggle } => {
            command::toggle_feedback(state, id, matches!(toggle, Toggle::On)).await
        },
        EditorCommand::Type { key } => command::change_type(state, &key).await,
        EditorCommand::Attempts { value } => command::attempts(state, value.join(" ")).await,
        EditorCommand::Unlimited { on } => command::unlimited(state, on).await,
        EditorCommand::Weight { value } => command::weight(state, value).await,
        EditorCommand::Hint { action: HintAction::Add } => command::add_hint(state).await,
        EditorCommand::Hint { action: HintAction::Set { id, text } } => command::change_hint(state, id, text.join(" ")).await,
        EditorCommand::Hint { action: HintAction::Del { id } } => command::delete_hint(state, id).await,
        EditorCommand::Showanswer { trigger } => command::show_answer(state, &trigger).await,
        EditorCommand::After { value } => command::show_answer_attempts(state, value).await,
        EditorCommand::Timer { value } => command::timer(state, value).await,
        EditorCommand::Matlab { key } => command::matlab(state, key.unwrap_or_default()).await,
        EditorCommand::Reset { on } => command::reset(state, on).await,
        EditorCommand::SelectType { max_attempts, trigger, reset } => {
            command::select_type(state, &max_attempts, &trigger, reset).await
        },
    }
}
