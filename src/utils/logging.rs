use serde::Serialize;

/// Hands a pretty-printed JSON rendering of `value` to `emit`, only when
/// debug events are enabled.
pub(crate) fn debug_pretty_json<T>(value: &T, emit: impl FnOnce(&str))
where
    T: Serialize + ?Sized,
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    match serde_json::to_string_pretty(value) {
        Ok(pretty) => emit(&pretty),
        Err(error) => emit(&format!("<unprintable payload: {error}>")),
    }
}
