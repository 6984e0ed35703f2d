use tracing::warn;

use super::Summary;
use crate::error::{EditorError, EditorResult};
use crate::problem::{Hint, SettingsPatch};

fn hints_patch(hints: Vec<Hint>) -> SettingsPatch {
    SettingsPatch { hints: Some(hints), ..Default::default() }
}

fn ensure_exists(hints: &[Hint], id: u32) -> EditorResult<()> {
    if hints.iter().any(|h| h.id == id) {
        Ok(())
    } else {
        warn!(id, "hint not found");
        Err(EditorError::UnknownHint(id))
    }
}

pub fn next_hint_id(hints: &[Hint]) -> u32 {
    hints.iter().map(|h| h.id.saturating_add(1)).max().unwrap_or(0)
}

/// Append an empty hint.
pub fn add_hint(hints: &[Hint]) -> SettingsPatch {
    let mut modified = hints.to_vec();
    modified.push(Hint { id: next_hint_id(hints), value: String::new() });
    hints_patch(modified)
}

pub fn change_hint(hints: &[Hint], id: u32, value: &str) -> EditorResult<SettingsPatch> {
    ensure_exists(hints, id)?;
    let modified = hints
        .iter()
        .map(|h| if h.id == id { Hint { id, value: value.to_string() } } else { h.clone() })
        .collect();
    Ok(hints_patch(modified))
}

pub fn delete_hint(hints: &[Hint], id: u32) -> EditorResult<SettingsPatch> {
    ensure_exists(hints, id)?;
    Ok(hints_patch(hints.iter().filter(|h| h.id != id).cloned().collect()))
}

pub fn hints_summary(hints: &[Hint]) -> Summary {
    match hints.split_first() {
        None => Summary::None,
        Some((first, rest)) => Summary::Hints { first: first.value.clone(), more: rest.len() },
    }
}
