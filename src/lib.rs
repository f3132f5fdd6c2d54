//! Gloat4 library - Connect 4 opponent backend delegated to an LLM
//!
//! A single-endpoint backend: given a Connect 4 board and the opponent's
//! last move, it asks an LLM to pick a column and produce a one-line taunt,
//! then returns a parsed `{move, explanation}` pair. There is no game engine
//! and no persistent state; the intelligence lives behind one network call.
//!
//! # Architecture
//!
//! - **Board**: shape validation for inbound boards (6 rows x 7 cells)
//! - **Prompt**: deterministic prompt construction for the LLM opponent
//! - **Client**: completion clients for Groq, OpenAI, and Anthropic
//! - **Parser**: tolerant extraction of `{move, explanation}` from raw text
//! - **Server**: the `POST /api/llm-move` axum boundary
//!
//! # Example
//!
//! ```no_run
//! use gloat4::{LlmClient, ServerConfig, router};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let client = LlmClient::new(config.create_llm_config()?);
//! let app = router(Arc::new(client));
//!
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 5000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod llm_client;
mod parser;
mod prompt;
mod server;

// Crate-level exports - Board validation
pub use board::{Board, BoardShapeError, COLS, ROWS};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - LLM client
pub use llm_client::{Completion, LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Response parsing
pub use parser::{MoveResult, parse_response};

// Crate-level exports - Prompt construction
pub use prompt::build_prompt;

// Crate-level exports - HTTP server
pub use server::{AppState, MoveRequest, ValidationErrorBody, router};
