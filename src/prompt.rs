//! Prompt construction for the LLM opponent.

use crate::board::Board;
use tracing::{debug, instrument};

/// Builds the instruction prompt for one turn.
///
/// Pure function of `(user_move, board)`: the persona directive, the strict
/// two-line output format, and the example responses are fixed text, with the
/// opponent's move and the board interpolated literally. The board renders as
/// its JSON array-of-arrays form so identical inputs always produce an
/// identical prompt.
///
/// The template asks the model not to repeat phrasing from previous
/// responses, but no response history is kept across requests, so the model
/// sees each turn cold. Unenforceable on our side.
#[instrument(skip(board), fields(user_move))]
pub fn build_prompt(user_move: i64, board: &Board) -> String {
    debug!("Building move prompt");
    format!(
        "You are an arrogant and conceited Connect 4 player. You constantly belittle \
your opponent (the User) and are confident of your victory.\n\
\n\
Your opponent just played move: {user_move}. You are playing as LLM. The User's tokens \
are represented by 🔴, and your tokens are represented by 🟡.\n\
\n\
Here's the current board:\n\
\n\
{board}\n\
\n\
Answer each turn in the following format ONLY:\n\
\n\
Line 1: [Column Number (0-6)]\n\
Line 2: [A UNIQUE, arrogant, and dismissive explanation of why you chose that column \
(maximum 20 words). **Do NOT repeat phrases from previous responses**. Avoid starting \
with the same words multiple times. Use sarcasm, insults, and mockery with more variety.]\n\
\n\
Example Responses:\n\
3\n\
Oh, how cute! You really think that was a smart move? This is why I always win.\n\
\n\
2\n\
A toddler could have seen that coming. Try again, but this time, use your brain.\n\
\n\
5\n\
Ah, a desperate move. I'll enjoy crushing your hopes in a few turns.\n\
\n\
1\n\
That was adorable. But strategy isn't your strong suit, is it?\n\
\n\
AGAIN, ONLY the column number on line 1 and the explanation on line 2. NO other text!",
        board = board.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COLS, ROWS};
    use serde_json::{Value, json};

    fn sample_board() -> Board {
        let mut rows = vec![vec![Value::Null; COLS]; ROWS];
        rows[5][3] = json!("🔴");
        Board::new(rows)
    }

    #[test]
    fn prompt_is_deterministic() {
        let board = sample_board();
        assert_eq!(build_prompt(3, &board), build_prompt(3, &board));
    }

    #[test]
    fn prompt_interpolates_move_and_board() {
        let prompt = build_prompt(4, &sample_board());
        assert!(prompt.contains("just played move: 4"));
        assert!(prompt.contains(&sample_board().render()));
    }

    #[test]
    fn prompt_carries_format_instructions() {
        let prompt = build_prompt(0, &sample_board());
        assert!(prompt.contains("Column Number (0-6)"));
        assert!(prompt.contains("maximum 20 words"));
        assert!(prompt.contains("Example Responses:"));
    }

    #[test]
    fn different_moves_yield_different_prompts() {
        let board = sample_board();
        assert_ne!(build_prompt(1, &board), build_prompt(2, &board));
    }
}
