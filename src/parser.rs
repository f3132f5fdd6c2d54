//! Tolerant parsing of raw LLM completions into a move result.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The `{move, explanation}` pair returned to the caller.
///
/// `move` is either a column digit `"0"`..`"6"` or the sentinel `"Error"`;
/// `explanation` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Chosen column as a digit string, or `"Error"`.
    #[serde(rename = "move")]
    pub column: String,
    /// The model's taunt, or a fixed error message.
    pub explanation: String,
}

impl MoveResult {
    /// Result for a completion with no digit in it.
    pub fn format_error() -> Self {
        Self {
            column: "Error".to_string(),
            explanation: "Invalid response format.".to_string(),
        }
    }

    /// Result for a completion whose digit is outside the column range.
    pub fn range_error() -> Self {
        Self {
            column: "Error".to_string(),
            explanation: "Invalid column number.".to_string(),
        }
    }

    /// Result for a failed provider call.
    pub fn transport_error() -> Self {
        Self {
            column: "Error".to_string(),
            explanation: "Error communicating with LLM.".to_string(),
        }
    }
}

/// Extracts a move and explanation from raw completion text.
///
/// A small state machine rather than one regex: skip an optional leading
/// `<think>...</think>` block, find the first digit, capture the rest of that
/// line as the explanation. Every input resolves to a well-formed
/// [`MoveResult`]; malformed completions degrade to the `"Error"` sentinel
/// instead of surfacing as request failures.
#[instrument(skip(raw), fields(raw_length = raw.len()))]
pub fn parse_response(raw: &str) -> MoveResult {
    let text = skip_think_block(raw);

    let Some(digit_pos) = text.find(|c: char| c.is_ascii_digit()) else {
        warn!("No digit found in completion");
        return MoveResult::format_error();
    };

    // First digit is ASCII, so byte arithmetic is safe here.
    let digit = text.as_bytes()[digit_pos] - b'0';
    if digit > 6 {
        warn!(digit, "Column digit out of range");
        return MoveResult::range_error();
    }

    let explanation = rest_of_line(&text[digit_pos + 1..]);
    debug!(column = digit, "Parsed completion");
    MoveResult {
        column: digit.to_string(),
        explanation: explanation.to_string(),
    }
}

/// Skips a reasoning block at the start of the text, if present.
///
/// Only a block that opens at the very start and actually closes is skipped;
/// an unclosed `<think>` leaves the text untouched. Whitespace after the
/// closing marker is consumed too.
fn skip_think_block(raw: &str) -> &str {
    const OPEN: &str = "<think>";
    const CLOSE: &str = "</think>";

    let Some(after_open) = raw.strip_prefix(OPEN) else {
        return raw;
    };
    let Some(close_pos) = after_open.find(CLOSE) else {
        return raw;
    };
    after_open[close_pos + CLOSE.len()..].trim_start()
}

/// Captures the text run after the move digit, up to the next newline.
fn rest_of_line(after_digit: &str) -> &str {
    let text = after_digit.trim_start();
    match text.find('\n') {
        Some(pos) => text[..pos].trim_end(),
        None => text.trim_end(),
    }
}
