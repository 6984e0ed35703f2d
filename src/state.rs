mod config;
mod owner;
mod service;

pub use config::{get_config, Config, CONFIG_FILE, DEFAULT_MAX_ATTEMPTS};
pub use service::EditorStateService;

use tokio::sync::mpsc::channel;

/// Start the task owning an editing session. Must be called inside a tokio runtime.
pub fn create_editor_state(config: Config) -> EditorStateService {
    let (job_sender, job_receiver) = channel(1000);

    owner::create_editor_state(config, job_receiver);

    EditorStateService::new(job_sender)
}
