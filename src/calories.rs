use crate::models::CaloriesEstimate;
use regex::Regex;
use std::sync::OnceLock;

fn digits() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("static pattern"))
}

/// Best-effort calorie figure from generated text: the first run of digits,
/// or the text itself when there is nothing usable.
pub fn extract(text: &str) -> CaloriesEstimate {
    digits()
        .find(text)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map(CaloriesEstimate::Number)
        .unwrap_or_else(|| CaloriesEstimate::Text(text.to_string()))
}

pub fn estimation_prompt(activity: &str, duration: &str) -> String {
    format!(
        "Estimate the number of calories burned for this workout: {activity}, duration: {duration} minutes. Respond with only the number."
    )
}
