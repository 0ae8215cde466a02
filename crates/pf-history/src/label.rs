//! Short labels for listing history.

use chrono::{DateTime, Utc};

/// Prompts longer than this many chars are cut in listings.
pub const PROMPT_LABEL_WIDTH: usize = 30;

/// Relative age of `then` as seen at `now`.
///
/// Under a minute is `now`, then `Nm ago`, `Nh ago` and `Nd ago`. From
/// seven days on the plain date is shown. Timestamps in the future count
/// as `now`.
#[must_use]
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if mins < 1 {
        "now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

/// `prompt` cut to [`PROMPT_LABEL_WIDTH`] chars with `...` appended.
#[must_use]
pub fn truncate_prompt(prompt: &str) -> String {
    match prompt.char_indices().nth(PROMPT_LABEL_WIDTH) {
        Some((cut, _)) => format!("{}...", &prompt[..cut]),
        None => prompt.to_string(),
    }
}
