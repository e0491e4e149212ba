use thiserror::Error;

/// Fatal conditions of a packing run. None of them is recovered from inside
/// the packer; the first one aborts the whole run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid cloud configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("invalid measurement for {text:?}: {width}x{height}")]
    InvalidMeasurement { text: String, width: f32, height: f32 },

    #[error(
        "cannot place {text:?} ({width}x{height}): none of {candidates} candidate points is free"
    )]
    PlacementExhausted {
        text: String,
        width: f32,
        height: f32,
        candidates: usize,
    },
}

impl LayoutError {
    pub(super) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
