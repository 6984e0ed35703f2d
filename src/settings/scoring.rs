use super::parse::{clamp_count, parse_float, parse_int};
use crate::problem::{Attempts, Scoring, SettingsPatch};

const DEFAULT_SUFFIX: &str = " (Default)";

fn scoring_patch(scoring: Scoring) -> SettingsPatch {
    SettingsPatch { scoring: Some(scoring), ..Default::default() }
}

/// The "unlimited attempts" checkbox.
pub fn unlimited_change(scoring: &Scoring, unlimited: bool, default_value: u32) -> SettingsPatch {
    let attempts = if unlimited { Attempts::unlimited() } else { Attempts::limited(default_value) };
    scoring_patch(Scoring { attempts, ..*scoring })
}

/// Commit what was typed into the attempts field.
pub fn max_attempt_change(scoring: &Scoring, value: &str, default_value: u32) -> SettingsPatch {
    let attempts = match parse_int(value) {
        None if value.is_empty() => Attempts::limited(default_value),
        None => Attempts::unlimited(),
        Some(n) if n <= 0 => Attempts::limited(0),
        Some(n) if n == i64::from(default_value) => {
            let stripped = value.replace(DEFAULT_SUFFIX, "");
            Attempts::limited(parse_int(&stripped).map(clamp_count).unwrap_or(default_value))
        }
        Some(n) => Attempts::limited(clamp_count(n)),
    };
    scoring_patch(Scoring { attempts, ..*scoring })
}

pub fn weight_change(scoring: &Scoring, value: &str) -> SettingsPatch {
    let weight = parse_float(value).filter(|w| w.is_finite()).unwrap_or(0.0);
    scoring_patch(Scoring { weight, ..*scoring })
}

/// What the attempts field shows for stored attempts.
pub fn attempt_display(attempts: &Attempts, default_value: u32) -> String {
    match attempts.number {
        Some(n) if n == default_value => format!("{n}{DEFAULT_SUFFIX}"),
        Some(n) => n.to_string(),
        None => String::new(),
    }
}

/// What the attempts field shows while the author is typing.
pub fn attempt_display_on_change(value: &str, default_value: u32) -> String {
    match parse_int(value) {
        Some(n) if n == i64::from(default_value) => format!("{n}{DEFAULT_SUFFIX}"),
        Some(n) if n < 0 => "0".to_string(),
        Some(n) => n.to_string(),
        None => String::new(),
    }
}
