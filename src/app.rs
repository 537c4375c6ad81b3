use crate::cli::{Invocation, help_text, parse_invocation, version_text};
use crate::client::LinkupClient;
use crate::config::{EnvironmentView, resolve};
use crate::constants::TOP_LEVEL_ERROR_PREFIX;
use crate::error::AppError;
use crate::gateway::SearchGateway;
use crate::mcp_server::LinkupMcpServer;
use mcpkit::ServerBuilder;
use mcpkit::transport::stdio::StdioTransport;
use std::ffi::OsString;

/// Outcome of the startup steps that run before any stdio traffic.
#[derive(Debug)]
pub enum Startup {
    Help,
    Version,
    Serve(LinkupMcpServer),
}

/// Parses flags, resolves configuration and builds the server. Help and
/// version requests return before configuration is touched.
pub fn bootstrap<I, T>(args: I, env: &EnvironmentView) -> Result<Startup, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw = match parse_invocation(args)? {
        Invocation::Help => return Ok(Startup::Help),
        Invocation::Version => return Ok(Startup::Version),
        Invocation::Serve(raw) => raw,
    };

    let config = resolve(&raw, env)?;
    let client = LinkupClient::new(config)?;
    let gateway = SearchGateway::new(client);
    Ok(Startup::Serve(LinkupMcpServer::new(gateway)))
}

/// Serves the tool over stdin/stdout until the host closes the channel.
pub async fn serve(server: LinkupMcpServer) -> Result<(), AppError> {
    tracing::info!(
        version = LinkupMcpServer::server_version(),
        base_url = %server.gateway().client().config().base_url,
        "serving search-web over stdio"
    );

    let handle = ServerBuilder::new(server.clone())
        .with_tools(server)
        .build();
    handle
        .serve(StdioTransport::new())
        .await
        .map_err(|error| AppError::Internal(format!("MCP server failed: {error}")))
}

pub async fn run<I, T>(args: I, env: &EnvironmentView) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match bootstrap(args, env)? {
        Startup::Help => {
            println!("{}", help_text());
            Ok(())
        }
        Startup::Version => {
            println!("{}", version_text());
            Ok(())
        }
        Startup::Serve(server) => serve(server).await,
    }
}

#[must_use]
pub fn top_level_error_line(error: &AppError) -> String {
    format!("{TOP_LEVEL_ERROR_PREFIX}{}", error.message())
}
