use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// One selectable option on the wheel.
///
/// `color` is opaque to the engine (a CSS hex string like `"#EF4444"`); only
/// the render buffer interprets it. A missing `weight` means the segment
/// participates with weight 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable unique identifier within one wheel.
    pub id: String,
    /// Display label.
    pub text: String,
    /// Display color, passed through to the renderer.
    pub color: String,
    /// Optional selection weight (positive). Absent = 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl Segment {
    pub fn new(id: impl Into<String>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color: color.into(),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Weight used for selection; segments without an explicit weight count as 1.
    pub fn effective_weight(&self) -> f32 {
        self.weight.unwrap_or(1.0)
    }
}

/// Ordered segment storage.
///
/// Order determines each segment's angular slot: segment `i` of `n` owns
/// `[i·360/n, (i+1)·360/n)` degrees, measured clockwise from the top pointer.
/// Validation happens on construction/replacement, so a `SegmentSet` always
/// holds unique non-empty ids and positive finite weights.
#[derive(Debug, Clone, Default)]
pub struct SegmentSet {
    segments: Vec<Segment>,
}

impl SegmentSet {
    /// Minimum segment count for a spin to be permitted.
    pub const MIN_FOR_SPIN: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a segment list, validating ids and weights.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, WheelError> {
        Self::validate(&segments)?;
        Ok(Self { segments })
    }

    /// Replace the entire segment list. The set is untouched on error.
    pub fn replace(&mut self, segments: Vec<Segment>) -> Result<(), WheelError> {
        Self::validate(&segments)?;
        self.segments = segments;
        Ok(())
    }

    fn validate(segments: &[Segment]) -> Result<(), WheelError> {
        let mut seen = HashSet::with_capacity(segments.len());
        for segment in segments {
            if segment.id.is_empty() {
                return Err(WheelError::EmptyId);
            }
            if !seen.insert(segment.id.as_str()) {
                return Err(WheelError::DuplicateId(segment.id.clone()));
            }
            if let Some(weight) = segment.weight {
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(WheelError::InvalidWeight {
                        id: segment.id.clone(),
                        weight,
                    });
                }
            }
        }
        Ok(())
    }

    /// Remove a segment by id. Returns the removed segment if found.
    /// Preserves the order of the remaining segments (slots re-flow).
    pub fn remove(&mut self, id: &str) -> Option<Segment> {
        let idx = self.segments.iter().position(|s| s.id == id)?;
        Some(self.segments.remove(idx))
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Find a segment by id.
    pub fn find(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether a spin is permitted on this set.
    pub fn can_spin(&self) -> bool {
        self.segments.len() >= Self::MIN_FOR_SPIN
    }

    // ── Slot geometry (degrees, clockwise from the top pointer) ─────────────

    /// Angular width of one slot. The set must be non-empty.
    pub fn slot_angle(&self) -> f64 {
        360.0 / self.segments.len() as f64
    }

    /// Half-open angular range `[start, end)` owned by segment `index`.
    pub fn slot_of(&self, index: usize) -> (f64, f64) {
        let slot = self.slot_angle();
        (index as f64 * slot, (index + 1) as f64 * slot)
    }

    /// Midpoint angle of segment `index`'s slot.
    pub fn center_of(&self, index: usize) -> f64 {
        let slot = self.slot_angle();
        index as f64 * slot + slot * 0.5
    }
}
