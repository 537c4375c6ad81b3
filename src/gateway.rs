use crate::client::LinkupClient;
use crate::error::AppError;
use crate::types::SearchRequest;
use mcpkit::types::content::Content;
use mcpkit::types::tool::CallToolResult;

/// Adapts [`LinkupClient`] searches into MCP tool results.
#[derive(Debug)]
pub struct SearchGateway {
    client: LinkupClient,
}

impl SearchGateway {
    #[must_use]
    pub fn new(client: LinkupClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &LinkupClient {
        &self.client
    }

    /// Forwards the request once and wraps the serialized `results` in a single
    /// text item. Failures are returned as-is.
    pub async fn search(&self, request: SearchRequest) -> Result<CallToolResult, AppError> {
        let results = self.client.search(&request.query, request.depth).await?;

        let text = serde_json::to_string(&results).map_err(|error| {
            AppError::Internal(format!("Failed to serialize search results: {error}"))
        })?;

        Ok(CallToolResult {
            content: vec![Content::text(text)],
            is_error: None,
        })
    }
}
