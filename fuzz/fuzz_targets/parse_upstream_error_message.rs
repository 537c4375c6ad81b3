#![no_main]

use libfuzzer_sys::fuzz_target;
use linkup_mcp::parsing::parse_upstream_error_message;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_upstream_error_message(text, "fallback");
    }
});
