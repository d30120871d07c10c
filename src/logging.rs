//! Thin logging facade used at this crate's I/O boundaries.
//!
//! The cores log through the [`log`] crate's macros only; they never
//! install a logger implementation (no `env_logger`/`tracing-subscriber`
//! dependency). Initializing a logger is a host concern — call
//! [`log::set_logger`] or a crate like `env_logger` from the binary that
//! links this crate, before exercising anything in [`crate::kamea`].
//!
//! Pure computation (ternary codec conversions, transition algebra,
//! figurate coordinate generation) stays un-instrumented; only grid
//! loading, aspect-table batch writes, and saved-visualization load/save
//! emit log records, at `debug` for routine operation and `warn` for
//! recoverable anomalies such as a zero-row aspect query.

/// Re-exported so host binaries can depend on this crate alone for the
/// logging macros used at its boundaries, without an explicit direct
/// dependency on `log`.
pub use log::{debug, info, trace, warn};
