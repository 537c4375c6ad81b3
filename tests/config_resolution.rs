use linkup_mcp::config::{EnvironmentView, RawOptions, ResolvedConfig, resolve};
use linkup_mcp::constants::DEFAULT_API_BASE_URL;
use linkup_mcp::error::ConfigError;
use serial_test::serial;

const API_KEY: &str = "77086fdf-94e4-43f3-b5bf-9246b584a50e";
const BASE_URL: &str = "https://fake-api.linkup.so/v1";

fn options(api_key: Option<&str>, base_url: Option<&str>) -> RawOptions {
    RawOptions {
        api_key: api_key.map(str::to_string),
        base_url: base_url.map(str::to_string),
    }
}

fn env_with_key(key: &str) -> EnvironmentView {
    [("LINKUP_API_KEY", key)].into_iter().collect()
}

#[test]
fn explicit_options_are_returned_unchanged() {
    let resolved = resolve(
        &options(Some(API_KEY), Some(BASE_URL)),
        &EnvironmentView::empty(),
    )
    .expect("valid options");

    assert_eq!(
        resolved,
        ResolvedConfig {
            api_key: API_KEY.to_string(),
            base_url: BASE_URL.to_string(),
        }
    );
}

#[test]
fn api_key_falls_back_to_environment() {
    let resolved = resolve(&options(None, Some(BASE_URL)), &env_with_key(API_KEY))
        .expect("env key should be used");

    assert_eq!(resolved.api_key, API_KEY);
    assert_eq!(resolved.base_url, BASE_URL);
}

#[test]
fn explicit_api_key_wins_over_environment() {
    let resolved = resolve(
        &options(Some(API_KEY), Some(BASE_URL)),
        &env_with_key("env-key-that-should-lose"),
    )
    .expect("valid options");

    assert_eq!(resolved.api_key, API_KEY);
}

#[test]
fn empty_api_key_argument_falls_back_to_environment() {
    let resolved = resolve(&options(Some(""), None), &env_with_key(API_KEY))
        .expect("env key should be used");
    assert_eq!(resolved.api_key, API_KEY);
}

#[test]
fn whitespace_api_key_is_kept_verbatim() {
    let resolved = resolve(
        &options(Some("   "), Some(BASE_URL)),
        &EnvironmentView::empty(),
    )
    .expect("whitespace key is non-empty");
    assert_eq!(
        resolved,
        ResolvedConfig {
            api_key: "   ".to_string(),
            base_url: BASE_URL.to_string(),
        }
    );

    let resolved = resolve(&options(Some(" "), None), &env_with_key(API_KEY))
        .expect("argument wins over environment");
    assert_eq!(resolved.api_key, " ");
}

#[test]
fn unrecognized_keys_are_ignored() {
    let raw: RawOptions = serde_json::from_value(serde_json::json!({
        "apiKey": API_KEY,
        "baseUrl": BASE_URL,
        "uselessField": "useless-value",
    }))
    .expect("extra keys should not fail deserialization");

    let resolved = resolve(&raw, &EnvironmentView::empty()).expect("valid options");
    assert_eq!(
        resolved,
        ResolvedConfig {
            api_key: API_KEY.to_string(),
            base_url: BASE_URL.to_string(),
        }
    );
}

#[test]
fn missing_api_key_reports_exact_message() {
    let error = resolve(
        &options(None, Some("https://api.linkup.so/v1")),
        &EnvironmentView::empty(),
    )
    .expect_err("no key source");

    assert_eq!(error, ConfigError::MissingApiKey);
    assert_eq!(error.code(), "missing-api-key");
    assert_eq!(
        error.to_string(),
        "Linkup API key not provided. Please either pass it as an argument --api-key=$KEY or set the LINKUP_API_KEY environment variable."
    );
}

#[test]
fn invalid_base_url_reports_exact_message() {
    let error = resolve(
        &options(Some("242e0933-214d-4791-ac87-43bc99f9cc76"), Some("wrong-url")),
        &EnvironmentView::empty(),
    )
    .expect_err("invalid url");

    assert_eq!(error.code(), "invalid-base-url");
    assert_eq!(error.to_string(), "Base url must be a valid url.");
}

#[test]
fn missing_api_key_is_reported_before_invalid_base_url() {
    let error = resolve(&options(None, Some("wrong-url")), &EnvironmentView::empty())
        .expect_err("both fields invalid");

    assert_eq!(error, ConfigError::MissingApiKey);
}

#[test]
fn base_url_defaults_when_unset() {
    let resolved =
        resolve(&options(Some(API_KEY), None), &EnvironmentView::empty()).expect("valid");
    assert_eq!(resolved.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_falls_back_to_environment_before_default() {
    let env: EnvironmentView = [("LINKUP_API_BASE_URL", "http://localhost:4010/v1")]
        .into_iter()
        .collect();
    let resolved = resolve(&options(Some(API_KEY), None), &env).expect("valid");
    assert_eq!(resolved.base_url, "http://localhost:4010/v1");

    let resolved = resolve(&options(Some(API_KEY), Some(BASE_URL)), &env).expect("valid");
    assert_eq!(resolved.base_url, BASE_URL);
}

#[test]
fn invalid_base_url_from_environment_is_rejected() {
    let env: EnvironmentView = [("LINKUP_API_BASE_URL", "not a url")].into_iter().collect();
    let error = resolve(&options(Some(API_KEY), None), &env).expect_err("invalid env url");
    assert!(matches!(error, ConfigError::InvalidBaseUrl { ref value } if value == "not a url"));
}

#[test]
fn empty_explicit_base_url_is_rejected() {
    let error = resolve(&options(Some(API_KEY), Some("")), &EnvironmentView::empty())
        .expect_err("empty url");
    assert_eq!(error.to_string(), "Base url must be a valid url.");
}

#[test]
#[serial]
fn process_environment_snapshot_feeds_resolution() {
    temp_env::with_vars(
        [
            ("LINKUP_API_KEY", Some(API_KEY)),
            ("LINKUP_API_BASE_URL", None::<&str>),
        ],
        || {
            let env = EnvironmentView::from_process();
            let resolved = resolve(&RawOptions::default(), &env).expect("env key present");
            assert_eq!(resolved.api_key, API_KEY);
            assert_eq!(resolved.base_url, DEFAULT_API_BASE_URL);
        },
    );
}

#[test]
#[serial]
fn snapshot_is_not_affected_by_later_changes() {
    let env = temp_env::with_var("LINKUP_API_KEY", None::<&str>, EnvironmentView::from_process);

    temp_env::with_var("LINKUP_API_KEY", Some(API_KEY), || {
        assert_eq!(
            resolve(&RawOptions::default(), &env),
            Err(ConfigError::MissingApiKey)
        );
    });
}

#[test]
fn resolved_config_debug_redacts_api_key() {
    let resolved = resolve(
        &options(Some(API_KEY), Some(BASE_URL)),
        &EnvironmentView::empty(),
    )
    .expect("valid");
    let debug = format!("{resolved:?}");
    assert!(!debug.contains(API_KEY));
    assert!(debug.contains(BASE_URL));
}
