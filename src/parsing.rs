use serde_json::Value;

const MAX_ERROR_DETAIL_LENGTH: usize = 500;

fn truncate_error_detail(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_DETAIL_LENGTH {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_ERROR_DETAIL_LENGTH).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Extracts a readable message from a Linkup error body such as
/// `{"statusCode":400,"error":{"code":"...","message":"...","details":[...]}}`.
#[must_use]
pub fn parse_upstream_error_message(payload_text: &str, fallback: &str) -> String {
    let Ok(payload) = serde_json::from_str::<Value>(payload_text) else {
        return fallback.to_string();
    };

    let error = payload.get("error");

    if let Some(message) = error
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
    {
        let mut text = truncate_error_detail(message);
        if let Some(code) = error
            .and_then(|error| error.get("code"))
            .and_then(Value::as_str)
        {
            text = format!("{code}: {text}");
        }

        let details = error
            .and_then(|error| error.get("details"))
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let message = entry.get("message").and_then(Value::as_str)?;
                        Some(match entry.get("field").and_then(Value::as_str) {
                            Some(field) => format!("{field}: {message}"),
                            None => message.to_string(),
                        })
                    })
                    .collect::<Vec<String>>()
                    .join("; ")
            })
            .unwrap_or_default();
        if !details.is_empty() {
            text.push_str(" (");
            text.push_str(&truncate_error_detail(&details));
            text.push(')');
        }
        return text;
    }

    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return truncate_error_detail(message);
    }

    if let Some(message) = error.and_then(Value::as_str) {
        return truncate_error_detail(message);
    }

    fallback.to_string()
}
