//! Relocation events, compiled out unless the `tracing` feature is enabled.
//!
//! Only the tiers that move memory are reported. Errors are returned to the
//! caller and never logged here.

macro_rules! relocation {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "stagebuf", $($arg)*);
    };
}

pub(crate) use relocation;
