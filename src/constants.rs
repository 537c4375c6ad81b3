pub const SERVER_NAME: &str = "linkup-mcp";

pub const TOOL_SEARCH_WEB: &str = "search-web";

pub const TOOL_SEARCH_WEB_DESCRIPTION: &str = "Performs a search for user input query using Linkup sdk then returns a string of the top search results. Should be used to search real-time data.";
pub const QUERY_FIELD_DESCRIPTION: &str = "The search query to perform.";
pub const DEPTH_FIELD_DESCRIPTION: &str =
    "The depth of the search. Deep search is time consuming and expensive, use it wisely.";

pub const DEFAULT_API_BASE_URL: &str = "https://api.linkup.so/v1";
pub const SEARCH_PATH: &str = "search";
pub const OUTPUT_TYPE_SEARCH_RESULTS: &str = "searchResults";

pub const ENV_LINKUP_API_KEY: &str = "LINKUP_API_KEY";
pub const ENV_LINKUP_API_BASE_URL: &str = "LINKUP_API_BASE_URL";
pub const ENV_LOG: &str = "LINKUP_MCP_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn,linkup_mcp=info";

pub const MISSING_API_KEY_MESSAGE: &str = "Linkup API key not provided. Please either pass it as an argument --api-key=$KEY or set the LINKUP_API_KEY environment variable.";
pub const INVALID_BASE_URL_MESSAGE: &str = "Base url must be a valid url.";

pub const ERROR_MISSING_API_KEY: &str = "missing-api-key";
pub const ERROR_INVALID_BASE_URL: &str = "invalid-base-url";

pub const TOP_LEVEL_ERROR_PREFIX: &str = "An error occurred: ";

pub const HELP_TEXT: &str = "
  Usage: npx -y linkup-mcp [options]

  Options:
    --api-key         Your Linkup API key (required unless LINKUP_API_KEY env is set)
    --base-url        Custom API base URL (default: https://api.linkup.so/v1)
    --help, -h        Show this help text
  ";
