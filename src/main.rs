#[macro_use]
mod cli;

use clap::Parser;
use problem_editor::state;
use tracing_subscriber::EnvFilter;


/// A terminal editor for assessment problems
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct AppArgs {
    /// The root of the problem, a problem.config (json) file should be located here.
    /// Without it an empty problem is edited.
    #[arg(name = "ROOT")]
    root: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init() -> Result<state::Config, String> {
    let args = AppArgs::parse();
    match args.root {
        Some(root) => {
            let (root, config) = state::get_config(&root)?;
            println!("Editing problem in: {:?}", root);
            Ok(config)
        },
        None => Ok(state::Config::default()),
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    match init() {
        Ok(config) => {
            let state = state::create_editor_state(config);
            cli::start(state).await;
        },
        Err(e) => {
            println!("{}", e);
        }
    };
}
