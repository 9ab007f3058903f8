use super::Parser;

/// Resolve a user through the configured object user provider.
#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    /// Identifier (username) to look up.
    #[arg(long)]
    pub lookup: String,
}
