use serde::Serialize;

/// Runs `log_action` with `value` rendered as pretty JSON, only when DEBUG is enabled.
pub(crate) fn debug_json<T, F>(value: &T, log_action: F)
where
    T: Serialize,
    F: FnOnce(&str),
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let rendered = serde_json::to_string_pretty(value)
        .unwrap_or_else(|error| format!("<serialize failed: {error}>"));
    log_action(rendered.as_str());
}
