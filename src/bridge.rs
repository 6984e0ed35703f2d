//! Access to rich-text content that is edited outside the engine.
//!
//! Answer titles and feedback of single/multi-select problems live in rich-text
//! editors. Their unsaved values are pulled synchronously through a
//! [`ContentBridge`] whenever a conversion needs them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContentFormat {
    Text,
    Html,
}

/// The per-answer fields edited as rich text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContentField {
    Title,
    SelectedFeedback,
    UnselectedFeedback,
}

/// Live editor values keyed by answer id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorContent {
    pub titles: HashMap<String, String>,
    pub selected_feedback: HashMap<String, String>,
    pub unselected_feedback: HashMap<String, String>,
}

impl EditorContent {
    pub fn title(&self, id: &str) -> Option<&str> {
        self.titles.get(id).map(String::as_str)
    }

    pub fn has_feedback(&self, id: &str) -> bool {
        let non_empty = |map: &HashMap<String, String>| map.get(id).is_some_and(|f| !f.is_empty());
        non_empty(&self.selected_feedback) || non_empty(&self.unselected_feedback)
    }

    fn map(&self, f: impl Fn(&str) -> String) -> EditorContent {
        let convert = |map: &HashMap<String, String>| {
            map.iter().map(|(id, value)| (id.clone(), f(value.as_str()))).collect()
        };
        EditorContent {
            titles: convert(&self.titles),
            selected_feedback: convert(&self.selected_feedback),
            unselected_feedback: convert(&self.unselected_feedback),
        }
    }
}

pub trait ContentBridge {
    /// Current unsaved content, or `None` when no editor can supply it.
    fn fetch_content(&self, format: ContentFormat) -> Option<EditorContent>;
}

/// A bridge with no editors mounted.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoContent;

impl ContentBridge for NoContent {
    fn fetch_content(&self, _format: ContentFormat) -> Option<EditorContent> {
        None
    }
}

/// Editor content held in memory as HTML; the text format strips markup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredContent {
    html: EditorContent,
}

impl StoredContent {
    pub fn new(html: EditorContent) -> Self {
        StoredContent { html }
    }

    pub fn set_title(&mut self, id: &str, html: impl Into<String>) {
        self.html.titles.insert(id.to_string(), html.into());
    }

    pub fn set_selected_feedback(&mut self, id: &str, html: impl Into<String>) {
        self.html.selected_feedback.insert(id.to_string(), html.into());
    }

    pub fn set_unselected_feedback(&mut self, id: &str, html: impl Into<String>) {
        self.html.unselected_feedback.insert(id.to_string(), html.into());
    }

    pub fn set(&mut self, field: ContentField, id: &str, html: impl Into<String>) {
        match field {
            ContentField::Title => self.set_title(id, html),
            ContentField::SelectedFeedback => self.set_selected_feedback(id, html),
            ContentField::UnselectedFeedback => self.set_unselected_feedback(id, html),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.html == EditorContent::default()
    }

    pub fn clear(&mut self) {
        self.html = EditorContent::default();
    }

    /// Follow answers that were re-lettered after `removed` was deleted.
    pub fn rekey(&mut self, removed: &str, moves: &[(String, String)]) {
        for map in self.maps() {
            map.remove(removed);
        }
        self.rename(moves);
    }

    /// Move content from old to new ids. All moves happen at once, so a new id
    /// may be the old id of another move.
    pub fn rename(&mut self, moves: &[(String, String)]) {
        for map in self.maps() {
            let moved: Vec<_> = moves
                .iter()
                .filter_map(|(from, to)| map.remove(from).map(|value| (to.clone(), value)))
                .collect();
            map.extend(moved);
        }
    }

    fn maps(&mut self) -> [&mut HashMap<String, String>; 3] {
        [
            &mut self.html.titles,
            &mut self.html.selected_feedback,
            &mut self.html.unselected_feedback,
        ]
    }
}

impl ContentBridge for StoredContent {
    fn fetch_content(&self, format: ContentFormat) -> Option<EditorContent> {
        Some(match format {
            ContentFormat::Html => self.html.clone(),
            ContentFormat::Text => self.html.map(strip_markup),
        })
    }
}

impl<B: ContentBridge + ?Sized> ContentBridge for &B {
    fn fetch_content(&self, format: ContentFormat) -> Option<EditorContent> {
        (**self).fetch_content(format)
    }
}

/// Drop tags and decode the handful of entities rich-text editors emit.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => (),
        }
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
