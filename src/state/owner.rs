use std::collections::HashMap;

use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

use super::service::EditorStateJob;
use super::Config;
use crate::bridge::{ContentBridge, ContentField, ContentFormat, StoredContent};
use crate::engine::{self, answers, Command, FeedbackVisibility};
use crate::error::{EditorError, EditorResult};
use crate::problem::{AnswerPatch, ProblemType, Question};

pub(super) fn create_editor_state(config: Config, job_receiver: Receiver<EditorStateJob>) {
    let (question, block_title, content, default_max_attempts) = config.into_parts();
    tokio::task::spawn(async move {
        let owner = EditorStateOwner {
            question,
            block_title,
            content,
            feedback: HashMap::new(),
            default_max_attempts,
        };

        owner.handle_jobs(job_receiver).await
    });
}

/// Sole holder of one editing session. Jobs are handled one at a time, so
/// every command sees the state the previous one left behind.
#[derive(Debug)]
struct EditorStateOwner {
    question: Question,
    block_title: String,
    content: StoredContent,
    feedback: HashMap<String, FeedbackVisibility>,
    default_max_attempts: u32,
}

impl EditorStateOwner {
    async fn handle_jobs(mut self, mut job_receiver: Receiver<EditorStateJob>) {
        while let Some(job) = job_receiver.recv().await {
            match job {
                EditorStateJob::Question(sender)                      => { let _ = sender.send(self.question.clone()); },
                EditorStateJob::BlockTitle(sender)                    => { let _ = sender.send(self.block_title.clone()); },
                EditorStateJob::SetBlockTitle(title)                  => self.block_title = title,
                EditorStateJob::DefaultMaxAttempts(sender)            => { let _ = sender.send(self.default_max_attempts); },
                EditorStateJob::Dispatch(command, sender)             => { let _ = sender.send(self.dispatch(command)); },
                EditorStateJob::ChangeType(type_key, sender)          => { let _ = sender.send(self.change_type(type_key)); },
                EditorStateJob::EditContent(id, field, html, sender)  => { let _ = sender.send(self.edit_content(&id, field, html)); },
                EditorStateJob::CommitContent(sender)                 => { let _ = sender.send(self.commit_content()); },
                EditorStateJob::FeedbackVisible(id, sender)           => { let _ = sender.send(self.feedback_visible(&id)); },
                EditorStateJob::ToggleFeedback(id, open, sender)      => { let _ = sender.send(self.toggle_feedback(&id, open)); },
            }
        }
        debug!("editor session closed");
    }

    fn dispatch(&mut self, command: Command) -> EditorResult<()> {
        let removed = match &command {
            Command::DeleteAnswer { id, .. } => Some((id.clone(), answers::moved_ids(&self.question.answers, id))),
            _ => None,
        };
        let was_rich = self.question.supports_rich_text();
        engine::dispatch(&mut self.question, command)?;

        if was_rich && !self.question.supports_rich_text() {
            self.content.clear();
        }
        if let Some((id, moves)) = removed {
            self.content.rekey(&id, &moves);
            self.feedback.remove(&id);
            for (from, to) in &moves {
                if let Some(visibility) = self.feedback.remove(from) {
                    self.feedback.insert(to.clone(), visibility);
                }
            }
        }
        Ok(())
    }

    fn change_type(&mut self, type_key: ProblemType) -> EditorResult<String> {
        let leaves_rich_text = self.question.supports_rich_text() && !type_key.supports_rich_text();
        let transition = engine::change_type(&self.question, type_key, &self.block_title, &self.content)?;
        self.question = transition.question;
        self.block_title = transition.block_title;
        if leaves_rich_text {
            self.content.clear();
        }
        info!(problem_type = type_key.key(), block_title = %self.block_title, "problem type changed");
        Ok(self.block_title.clone())
    }

    /// Rich-text problems keep edits in the editor content until committed;
    /// other types take plain text straight into the answer.
    fn edit_content(&mut self, id: &str, field: ContentField, html: String) -> EditorResult<()> {
        if self.question.answer(id).is_none() {
            warn!(id, "edit for unknown answer");
            return Err(EditorError::UnknownAnswer(id.to_string()));
        }
        if self.question.supports_rich_text() {
            self.content.set(field, id, html);
            return Ok(());
        }
        let patch = AnswerPatch::new(id);
        let patch = match field {
            ContentField::Title => patch.title(html),
            ContentField::SelectedFeedback => patch.selected_feedback(html),
            ContentField::UnselectedFeedback => patch.unselected_feedback(html),
        };
        self.dispatch(Command::UpdateAnswer(patch))
    }

    /// Write the rich-text editor content into the answers.
    fn commit_content(&mut self) -> EditorResult<()> {
        let Some(html) = self.content.fetch_content(ContentFormat::Html) else {
            return Ok(());
        };
        let mut next = self.question.clone();
        for answer in &self.question.answers {
            let id = &answer.id;
            let patch = AnswerPatch {
                id: id.clone(),
                title: html.titles.get(id).cloned(),
                selected_feedback: html.selected_feedback.get(id).cloned(),
                unselected_feedback: html.unselected_feedback.get(id).cloned(),
                ..Default::default()
            };
            engine::dispatch(&mut next, Command::UpdateAnswer(patch))?;
        }
        self.question = next;
        Ok(())
    }

    fn visibility(&mut self, id: &str) -> EditorResult<&mut FeedbackVisibility> {
        let answer = self.question.answer(id).ok_or_else(|| EditorError::UnknownAnswer(id.to_string()))?;
        let initial = FeedbackVisibility::for_answer(answer);
        Ok(self.feedback.entry(id.to_string()).or_insert(initial))
    }

    fn feedback_visible(&mut self, id: &str) -> EditorResult<bool> {
        Ok(self.visibility(id)?.is_visible())
    }

    fn toggle_feedback(&mut self, id: &str, open: bool) -> EditorResult<bool> {
        let answer = self.question.answer(id).cloned().ok_or_else(|| EditorError::UnknownAnswer(id.to_string()))?;
        let visibility = self
            .feedback
            .entry(id.to_string())
            .or_insert_with(|| FeedbackVisibility::for_answer(&answer));
        Ok(visibility.toggle(open, &answer, &self.content))
    }
}
