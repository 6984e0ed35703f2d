use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Sender as Return};

use crate::bridge::ContentField;
use crate::engine::Command;
use crate::error::{EditorError, EditorResult};
use crate::problem::{ProblemType, Question};

pub enum EditorStateJob {
    Question(Return<Question>),
    BlockTitle(Return<String>),
    SetBlockTitle(String),
    DefaultMaxAttempts(Return<u32>),
    Dispatch(Command, Return<EditorResult<()>>),
    ChangeType(ProblemType, Return<EditorResult<String>>),
    EditContent(String, ContentField, String, Return<EditorResult<()>>),
    CommitContent(Return<EditorResult<()>>),
    FeedbackVisible(String, Return<EditorResult<bool>>),
    ToggleFeedback(String, bool, Return<EditorResult<bool>>),
}

/// Cloneable handle to an editing session; every call is queued behind the
/// ones issued before it.
#[derive(Debug, Clone)]
pub struct EditorStateService {
    job_channel: Sender<EditorStateJob>,
}

impl EditorStateService {
    pub(super) fn new(job_channel: Sender<EditorStateJob>) -> Self {
        EditorStateService { job_channel }
    }

    async fn send(&self, job: EditorStateJob) -> EditorResult<()> {
        self.job_channel.send(job).await.map_err(|_| EditorError::SessionClosed)
    }

    async fn request<T>(&self, job: impl FnOnce(Return<T>) -> EditorStateJob) -> EditorResult<T> {
        let (send, recv) = oneshot::channel();
        self.send(job(send)).await?;
        recv.await.map_err(|_| EditorError::SessionClosed)
    }

    pub async fn question(&self) -> EditorResult<Question> {
        self.request(EditorStateJob::Question).await
    }

    pub async fn block_title(&self) -> EditorResult<String> {
        self.request(EditorStateJob::BlockTitle).await
    }

    pub async fn set_block_title(&self, title: &str) -> EditorResult<()> {
        self.send(EditorStateJob::SetBlockTitle(title.to_string())).await
    }

    pub async fn default_max_attempts(&self) -> EditorResult<u32> {
        self.request(EditorStateJob::DefaultMaxAttempts).await
    }

    pub async fn dispatch(&self, command: Command) -> EditorResult<()> {
        self.request(|send| EditorStateJob::Dispatch(command, send)).await?
    }

    /// Switch the problem type; returns the block title after the switch.
    pub async fn change_type(&self, type_key: ProblemType) -> EditorResult<String> {
        self.request(|send| EditorStateJob::ChangeType(type_key, send)).await?
    }

    pub async fn edit_content(&self, id: &str, field: ContentField, text: &str) -> EditorResult<()> {
        let (id, text) = (id.to_string(), text.to_string());
        self.request(|send| EditorStateJob::EditContent(id, field, text, send)).await?
    }

    pub async fn commit_content(&self) -> EditorResult<()> {
        self.request(EditorStateJob::CommitContent).await?
    }

    pub async fn feedback_visible(&self, id: &str) -> EditorResult<bool> {
        let id = id.to_string();
        self.request(|send| EditorStateJob::FeedbackVisible(id, send)).await?
    }

    pub async fn toggle_feedback(&self, id: &str, open: bool) -> EditorResult<bool> {
        let id = id.to_string();
        self.request(|send| EditorStateJob::ToggleFeedback(id, open, send)).await?
    }
}
