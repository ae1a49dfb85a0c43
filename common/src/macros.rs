#[doc(hidden)]
pub use tracing as __tracing;

/// Logs a successful outcome.
///
/// Rendered with its own symbol by the CLI formatter, otherwise identical to `tracing::info!`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::macros::__tracing::info!(target: "gwfailover::success", $($arg)+)
    };
}
