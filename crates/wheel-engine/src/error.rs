use thiserror::Error;

/// Errors surfaced by the engine's fallible operations.
///
/// Spin refusals (too few segments, already spinning) are deliberately NOT
/// errors — `start_spin` is a guarded no-op. Errors are reserved for calls
/// that would otherwise corrupt state (mutating mid-spin) or for rejecting
/// malformed segment data at the boundary.
#[derive(Debug, Error)]
pub enum WheelError {
    /// Segment mutation or reset requested while a spin is in flight.
    #[error("wheel is mid-spin; segments are locked until it settles")]
    SpinInFlight,

    /// A segment arrived with an empty id.
    #[error("segment id must not be empty")]
    EmptyId,

    /// Two segments share an id.
    #[error("duplicate segment id `{0}`")]
    DuplicateId(String),

    /// A segment weight is zero, negative, or not finite.
    #[error("segment `{id}` has invalid weight {weight} (must be positive and finite)")]
    InvalidWeight { id: String, weight: f32 },

    /// A shareable wheel record needs at least two segments.
    #[error("a wheel needs at least 2 segments, got {0}")]
    TooFewSegments(usize),

    /// A shareable wheel record needs a title.
    #[error("wheel title must not be empty")]
    EmptyTitle,

    /// Malformed JSON at the bridge boundary.
    #[error("malformed wheel JSON: {0}")]
    Json(#[from] serde_json::Error),
}
