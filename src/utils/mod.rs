pub mod u8_keys;

/// Emits a `tracing` trace event when the `tracing` feature is enabled, and nothing otherwise.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_event;

/// Renders a key or prefix as space separated hex bytes, e.g. `[61 62 63]`.
pub fn key_str_rep(k: &[u8]) -> String {
    let s = k
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", s)
}
