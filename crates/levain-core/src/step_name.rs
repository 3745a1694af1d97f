//! The `"group. title"` naming convention for steps.
//!
//! A step named `"Day1. Autolyse"` belongs to group `Day1` and displays as
//! `Autolyse`. The group id is a run of ASCII word characters
//! (`[A-Za-z0-9_]`) directly followed by a dot; whitespace after the dot is
//! dropped and a non-empty title must follow. The title ends at the first
//! line break. Anything else is a plain title with no group.

use serde::{Deserialize, Serialize};

const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// A step name split into its optional group id and its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStepName {
    pub group_id: Option<String>,
    pub title: String,
}

/// Split a step name into group id and title.
///
/// ```
/// use levain_core::step_name::parse_step_name;
///
/// let parsed = parse_step_name("ff. blah blah");
/// assert_eq!(parsed.group_id.as_deref(), Some("ff"));
/// assert_eq!(parsed.title, "blah blah");
///
/// assert_eq!(parse_step_name("a.").group_id, None);
/// ```
pub fn parse_step_name(name: &str) -> ParsedStepName {
    let bytes = name.as_bytes();
    let word_len = bytes.iter().take_while(|b| is_word_byte(**b)).count();

    if word_len > 0 {
        if let Some(rest) = name[word_len..].strip_prefix('.') {
            let title = rest
                .trim_start()
                .split(LINE_BREAKS)
                .next()
                .unwrap_or_default();
            if !title.is_empty() {
                return ParsedStepName {
                    group_id: Some(name[..word_len].to_string()),
                    title: title.to_string(),
                };
            }
        }
    }

    ParsedStepName {
        group_id: None,
        title: name.to_string(),
    }
}

/// Join a group id and title into a step name.
///
/// The group id is trimmed; a missing or blank group id yields the title
/// unchanged.
pub fn format_step_name(group_id: Option<&str>, title: &str) -> String {
    match group_id.map(str::trim) {
        Some(group) if !group.is_empty() => format!("{group}. {title}"),
        _ => title.to_string(),
    }
}

/// The group id of a step name, if any.
pub fn step_group_id(name: &str) -> Option<String> {
    parse_step_name(name).group_id
}

/// The display title of a step name.
pub fn step_title(name: &str) -> String {
    parse_step_name(name).title
}

/// Whether `group_id` can be read back by [`parse_step_name`] once
/// formatted: one or more ASCII word characters.
pub fn is_valid_group_id(group_id: &str) -> bool {
    !group_id.is_empty() && group_id.bytes().all(is_word_byte)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
