//! Shared pipeline plumbing
//!
//! Stage observers and the tracing span helper used by both extractors.

pub mod observer;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

pub(crate) use trace_stage;
