//! Command-line interface for gloat4.

use clap::Parser;

/// Gloat4 - Connect 4 opponent backend powered by an LLM
#[derive(Parser, Debug)]
#[command(name = "gloat4")]
#[command(about = "Connect 4 move server that lets an LLM pick columns and talk trash", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Path to server configuration file (optional; defaults apply if absent)
    #[arg(short, long, default_value = "gloat4.toml")]
    pub config: std::path::PathBuf,
}
