use crate::config::RawOptions;
use crate::constants::HELP_TEXT;
use crate::error::AppError;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "linkup-mcp",
    version,
    about = "Linkup web search MCP server",
    disable_help_flag = true
)]
pub struct Cli {
    /// Your Linkup API key (required unless LINKUP_API_KEY env is set)
    #[arg(long, value_name = "key")]
    pub api_key: Option<String>,
    /// Custom API base URL (default: https://api.linkup.so/v1)
    #[arg(long, value_name = "url")]
    pub base_url: Option<String>,
    /// Show this help text
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}

impl From<Cli> for RawOptions {
    fn from(cli: Cli) -> Self {
        Self {
            api_key: cli.api_key,
            base_url: cli.base_url,
        }
    }
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Serve(RawOptions),
}

/// Parses process arguments (including the program name in first position).
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) if error.kind() == clap::error::ErrorKind::DisplayVersion => {
            return Ok(Invocation::Version);
        }
        Err(error) => return Err(error.into()),
    };

    if cli.help {
        return Ok(Invocation::Help);
    }
    Ok(Invocation::Serve(cli.into()))
}

#[must_use]
pub fn help_text() -> &'static str {
    HELP_TEXT
}

#[must_use]
pub fn version_text() -> String {
    format!("linkup-mcp {}", env!("CARGO_PKG_VERSION"))
}
