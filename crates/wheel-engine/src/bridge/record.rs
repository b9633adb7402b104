use serde::{Deserialize, Serialize};

use crate::core::segments::{Segment, SegmentSet};
use crate::error::WheelError;

/// The serialized form of a wheel: what sharing, persistence, and the
/// community gallery consume. The CRUD itself lives outside the engine; this
/// is the one shape that crosses that boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelRecord {
    pub title: String,
    pub segments: Vec<Segment>,
}

impl WheelRecord {
    pub fn new(title: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            title: title.into(),
            segments,
        }
    }

    /// Parse a record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, WheelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether this record may be shared: a non-empty title, at least two
    /// segments, and a segment list the engine would accept.
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.title.trim().is_empty() {
            return Err(WheelError::EmptyTitle);
        }
        if self.segments.len() < SegmentSet::MIN_FOR_SPIN {
            return Err(WheelError::TooFewSegments(self.segments.len()));
        }
        SegmentSet::from_segments(self.segments.clone())?;
        Ok(())
    }
}

/// Parse a bare segment list (the `SetSegments` bridge payload).
pub fn segments_from_json(json: &str) -> Result<Vec<Segment>, WheelError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a bare segment list for editors and winner reporting.
pub fn segments_to_json(segments: &[Segment]) -> Result<String, WheelError> {
    Ok(serde_json::to_string(segments)?)
}

/// Serialize one segment (the settled-winner bridge payload).
pub fn segment_to_json(segment: &Segment) -> Result<String, WheelError> {
    Ok(serde_json::to_string(segment)?)
}
