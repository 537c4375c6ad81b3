#![no_main]

use libfuzzer_sys::fuzz_target;
use linkup_mcp::config::{EnvironmentView, RawOptions, resolve};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = text.splitn(3, '\n');
    let api_key = parts.next().map(str::to_string);
    let base_url = parts.next().map(str::to_string);
    let env_key = parts.next().unwrap_or_default();

    let raw = RawOptions { api_key, base_url };
    let env: EnvironmentView = [("LINKUP_API_KEY", env_key)].into_iter().collect();

    if let Ok(resolved) = resolve(&raw, &env) {
        assert!(!resolved.api_key.is_empty());
        assert!(url::Url::parse(&resolved.base_url).is_ok());
    }
});
