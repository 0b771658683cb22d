//! Crate-internal logging macros.
//!
//! With the `tracing` feature these forward to the `tracing` crate under the
//! `rule_rail` target; without it they expand to nothing.

macro_rules! rail_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "rule_rail", $($arg)*);
        }
    };
}

macro_rules! rail_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(target: "rule_rail", $($arg)*);
        }
    };
}

pub(crate) use rail_debug;
pub(crate) use rail_trace;
