use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bridge::StoredContent;
use crate::engine::answers;
use crate::error::EditorResult;
use crate::problem::Question;

pub const CONFIG_FILE: &str = "problem.config";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

/// Seed of one editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    block_title: String,
    #[serde(default = "default_max_attempts")]
    default_max_attempts: u32,
    #[serde(default)]
    question: Question,
    #[serde(default)]
    content: StoredContent,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Question::default(), "")
    }
}

impl Config {
    pub fn new(question: Question, block_title: &str) -> Self {
        Config {
            block_title: block_title.to_string(),
            default_max_attempts: DEFAULT_MAX_ATTEMPTS,
            question,
            content: StoredContent::default(),
        }
    }

    pub fn with_default_max_attempts(mut self, attempts: u32) -> Self {
        self.default_max_attempts = attempts;
        self
    }

    pub fn with_content(mut self, content: StoredContent) -> Self {
        self.content = content;
        self
    }

    pub fn from(root: &Path) -> EditorResult<Self> {
        let path = root.join(CONFIG_FILE);
        let data = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.reconcile();
        info!(
            answers = config.question.answers.len(),
            problem_type = ?config.question.problem_type,
            "loaded problem config"
        );
        Ok(config)
    }

    pub fn block_title(&self) -> &str {
        &self.block_title
    }

    pub fn default_max_attempts(&self) -> u32 {
        self.default_max_attempts
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Bring a seed written by hand or by an older editor in line with the
    /// engine: positional ids, type constraints and a fresh count.
    fn reconcile(&mut self) {
        let moves = answers::reletter(&mut self.question);
        if !moves.is_empty() {
            warn!(renamed = moves.len(), "answer ids in seed are not positional");
            self.content.rename(&moves);
        }
        answers::normalize(&mut self.question);
    }

    pub(super) fn into_parts(mut self) -> (Question, String, StoredContent, u32) {
        self.reconcile();
        (self.question, self.block_title, self.content, self.default_max_attempts)
    }
}

pub fn get_config(root: &str) -> Result<(PathBuf, Config), String> {
    let path = root.to_string();
    std::fs::canonicalize(&path)
        .map_err(|_| format!("Could not find problem root: {}\n", path))
        .and_then(|root| {
            Config::from(&root)
                .map_err(|e| format!("Could not import {} file: {}\n", CONFIG_FILE, e))
                .map(|config| (root, config))
        })
}
