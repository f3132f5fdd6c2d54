//! Board shape validation for inbound requests.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Number of rows in a Connect 4 board.
pub const ROWS: usize = 6;

/// Number of columns in a Connect 4 board.
pub const COLS: usize = 7;

/// A Connect 4 board as sent by the client.
///
/// Cell contents are opaque to the server (the client sends token emoji or
/// nulls); only the 6x7 shape is checked. Serializes transparently as a JSON
/// array of rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(Vec<Vec<Value>>);

impl Board {
    /// Creates a board from raw rows.
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Self(rows)
    }

    /// Confirms the board is exactly 6 rows of 7 cells each.
    ///
    /// Cell values, move range, and game-rule legality are deliberately not
    /// checked here.
    #[instrument(skip(self))]
    pub fn check_shape(&self) -> Result<(), BoardShapeError> {
        if self.0.len() != ROWS {
            warn!(rows = self.0.len(), "Board has wrong row count");
            return Err(BoardShapeError::new(format!(
                "expected {} rows, got {}",
                ROWS,
                self.0.len()
            )));
        }

        for (i, row) in self.0.iter().enumerate() {
            if row.len() != COLS {
                warn!(row = i, cells = row.len(), "Board row has wrong length");
                return Err(BoardShapeError::new(format!(
                    "expected {} cells in row {}, got {}",
                    COLS,
                    i,
                    row.len()
                )));
            }
        }

        debug!("Board shape valid");
        Ok(())
    }

    /// Renders the board as its JSON array-of-arrays form.
    ///
    /// Used when interpolating the board into the LLM prompt; serialization
    /// of already-decoded JSON values cannot fail.
    pub fn render(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Board shape violation.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid board shape: {} at {}:{}", message, file, line)]
pub struct BoardShapeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardShapeError {
    /// Creates a new board shape error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_board() -> Board {
        Board::new(vec![vec![Value::Null; COLS]; ROWS])
    }

    #[test]
    fn well_formed_board_passes() {
        assert!(empty_board().check_shape().is_ok());
    }

    #[test]
    fn wrong_row_count_fails() {
        let board = Board::new(vec![vec![Value::Null; COLS]; 5]);
        assert!(board.check_shape().is_err());

        let board = Board::new(vec![vec![Value::Null; COLS]; 7]);
        assert!(board.check_shape().is_err());
    }

    #[test]
    fn wrong_row_length_fails() {
        let mut rows = vec![vec![Value::Null; COLS]; ROWS];
        rows[3].pop();
        assert!(Board::new(rows).check_shape().is_err());
    }

    #[test]
    fn empty_board_fails() {
        assert!(Board::new(vec![]).check_shape().is_err());
    }

    #[test]
    fn cell_values_are_opaque() {
        let mut rows = vec![vec![Value::Null; COLS]; ROWS];
        rows[5][0] = json!("🔴");
        rows[5][1] = json!("🟡");
        rows[4][2] = json!(42);
        assert!(Board::new(rows).check_shape().is_ok());
    }

    #[test]
    fn render_is_json_rows() {
        let rendered = empty_board().render();
        assert!(rendered.starts_with("[["));
        assert_eq!(rendered.matches("null").count(), ROWS * COLS);
    }
}
