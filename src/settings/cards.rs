use super::parse::count_or_zero;
use super::Summary;
use crate::problem::SettingsPatch;

pub fn timer_change(value: &str) -> SettingsPatch {
    SettingsPatch { time_between: Some(count_or_zero(value)), ..Default::default() }
}

pub fn matlab_change(key: &str) -> SettingsPatch {
    SettingsPatch { mat_lab_api_key: Some(key.to_string()), ..Default::default() }
}

pub fn matlab_summary(key: &str) -> Summary {
    if key.is_empty() {
        Summary::None
    } else {
        Summary::Text(key.to_string())
    }
}

pub fn reset_change(show: bool) -> SettingsPatch {
    SettingsPatch { show_reset_button: Some(show), ..Default::default() }
}
