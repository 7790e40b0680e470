//! Assignment tracing.
//!
//! Set `SAPL_ASSIGN_DEBUG=1` to print one line per assignment step on stderr.
//! Tracing is compiled into debug builds only.

/// Environment variable that enables assignment tracing.
pub const DEBUG_ENV_VAR: &str = "SAPL_ASSIGN_DEBUG";

/// Check if assignment debug logging is enabled via `SAPL_ASSIGN_DEBUG`.
#[cfg(debug_assertions)]
pub fn assign_debug_enabled() -> bool {
    use std::sync::OnceLock;
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var(DEBUG_ENV_VAR).is_ok())
}

#[cfg(not(debug_assertions))]
pub fn assign_debug_enabled() -> bool {
    false
}

/// Emit an assignment debug line without relying on `eprintln!`.
pub fn assign_debug_log(args: std::fmt::Arguments<'_>) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "[assign] {args}");
}

/// Trace an assignment step when `SAPL_ASSIGN_DEBUG` is set.
#[macro_export]
macro_rules! assign_trace {
    ($($arg:tt)*) => {
        if $crate::debug::assign_debug_enabled() {
            $crate::debug::assign_debug_log(format_args!($($arg)*));
        }
    };
}
