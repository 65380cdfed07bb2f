use std::path::PathBuf;

use clap::Parser;

/// QuizCraft study server
#[derive(Debug, Parser)]
#[command(name = "quizcraft", about = "Turn study notes into flashcards with an LLM")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "quizcraft.toml", env = "QUIZCRAFT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "QUIZCRAFT_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
