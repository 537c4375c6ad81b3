//! MCP server exposing Linkup web search as a single `search-web` tool.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod mcp_server;
pub mod parsing;
pub mod types;
