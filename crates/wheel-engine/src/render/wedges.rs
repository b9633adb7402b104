use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::core::segments::SegmentSet;

/// Per-segment wedge data written to a flat f32 buffer for the JS renderer.
/// Must match the TypeScript reader: 12 floats = 48 bytes stride.
///
/// Angles are degrees clockwise from the top pointer; endpoints are unit
/// circle points in screen space (origin at the wheel center, +y down), so
/// the page scales them by its own radius when building SVG paths.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct WedgeInstance {
    /// Slot start angle in degrees.
    pub slot_start: f32,
    /// Slot end angle in degrees.
    pub slot_end: f32,
    /// Slot midpoint angle — the label anchor.
    pub mid_angle: f32,
    /// 1.0 when the slot spans more than 180 degrees (SVG large-arc flag).
    pub large_arc: f32,
    /// Unit-circle point at the slot start.
    pub start_x: f32,
    pub start_y: f32,
    /// Unit-circle point at the slot end.
    pub end_x: f32,
    pub end_y: f32,
    /// Fill color, straight RGBA in [0, 1].
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl WedgeInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Point on the unit circle at `angle` degrees clockwise from the top,
/// in screen space (+y down).
pub fn unit_point(angle_deg: f64) -> Vec2 {
    let rad = (angle_deg - 90.0).to_radians();
    Vec2::new(rad.cos() as f32, rad.sin() as f32)
}

/// Parse a `#RRGGBB` (or `#RRGGBBAA`) color into straight RGBA.
/// Unparseable colors fall back to white so a bad record never blanks the wheel.
fn parse_color(color: &str) -> [f32; 4] {
    fn channel(hex: &str) -> Option<f32> {
        u8::from_str_radix(hex, 16).map(|v| v as f32 / 255.0).ok()
    }

    let trimmed = color.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let parsed = match hex.len() {
        _ if !hex.is_ascii() => None,
        6 => Some([
            channel(&hex[0..2]),
            channel(&hex[2..4]),
            channel(&hex[4..6]),
            Some(1.0),
        ]),
        8 => Some([
            channel(&hex[0..2]),
            channel(&hex[2..4]),
            channel(&hex[4..6]),
            channel(&hex[6..8]),
        ]),
        _ => None,
    };

    match parsed {
        Some([Some(r), Some(g), Some(b), Some(a)]) => [r, g, b, a],
        _ => {
            log::warn!("unparseable segment color `{color}`, using white");
            [1.0, 1.0, 1.0, 1.0]
        }
    }
}

/// Wedge buffer read by JS out of wasm memory.
pub struct WedgeBuffer {
    wedges: Vec<WedgeInstance>,
}

impl WedgeBuffer {
    pub fn new() -> Self {
        Self {
            wedges: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.wedges.clear();
    }

    pub fn push(&mut self, wedge: WedgeInstance) {
        self.wedges.push(wedge);
    }

    pub fn wedges(&self) -> &[WedgeInstance] {
        &self.wedges
    }

    pub fn wedge_count(&self) -> u32 {
        self.wedges.len() as u32
    }

    /// Raw pointer to wedge data for reads from wasm memory.
    pub fn wedges_ptr(&self) -> *const f32 {
        self.wedges.as_ptr() as *const f32
    }
}

impl Default for WedgeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild the wedge buffer from the current segment set.
/// Call after any segment mutation (the runner just does it every frame).
pub fn build_wedges(segments: &SegmentSet, buffer: &mut WedgeBuffer) {
    buffer.clear();
    if segments.is_empty() {
        return;
    }

    for (index, segment) in segments.iter().enumerate() {
        let (start, end) = segments.slot_of(index);
        let start_point = unit_point(start);
        let end_point = unit_point(end);
        let [r, g, b, a] = parse_color(&segment.color);

        buffer.push(WedgeInstance {
            slot_start: start as f32,
            slot_end: end as f32,
            mid_angle: segments.center_of(index) as f32,
            large_arc: if end - start > 180.0 { 1.0 } else { 0.0 },
            start_x: start_point.x,
            start_y: start_point.y,
            end_x: end_point.x,
            end_y: end_point.y,
            r,
            g,
            b,
            a,
        });
    }
}
