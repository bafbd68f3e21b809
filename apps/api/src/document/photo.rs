//! Photo framing: the drag gesture that moves the vertical crop offset.
//!
//! Shared by every template: layouts only choose how the photo is masked,
//! never how the offset is computed.

use serde::{Deserialize, Serialize};

pub const MIN_OFFSET: f64 = 0.0;
pub const MAX_OFFSET: f64 = 100.0;

pub fn clamp_offset(value: f64) -> f64 {
    if value.is_nan() {
        return super::model::DEFAULT_PHOTO_OFFSET;
    }
    value.clamp(MIN_OFFSET, MAX_OFFSET)
}

/// An in-progress pointer drag. Captured on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub start_offset: f64,
    pub start_y: f64,
}

impl DragGesture {
    pub fn begin(start_offset: f64, start_y: f64) -> Self {
        Self {
            start_offset: clamp_offset(start_offset),
            start_y,
        }
    }

    /// Offset for a pointer at `current_y` inside a container `container_height` tall.
    /// A zero or negative height is treated as 1 so the result stays finite.
    pub fn offset_at(&self, current_y: f64, container_height: f64) -> f64 {
        let height = if container_height > 0.0 {
            container_height
        } else {
            1.0
        };
        clamp_offset(self.start_offset + (current_y - self.start_y) / height * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_moves_proportionally() {
        let drag = DragGesture::begin(50.0, 100.0);
        assert_eq!(drag.offset_at(120.0, 200.0), 60.0);
        assert_eq!(drag.offset_at(80.0, 200.0), 40.0);
    }

    #[test]
    fn test_drag_result_is_always_clamped() {
        let drag = DragGesture::begin(50.0, 0.0);
        for delta in [-1e9, -500.0, -51.0, 0.0, 49.9, 51.0, 1e9] {
            let offset = drag.offset_at(delta, 100.0);
            assert!((MIN_OFFSET..=MAX_OFFSET).contains(&offset), "{delta} -> {offset}");
        }
        assert_eq!(drag.offset_at(-1e9, 100.0), 0.0);
        assert_eq!(drag.offset_at(1e9, 100.0), 100.0);
    }

    #[test]
    fn test_zero_height_container_does_not_divide_by_zero() {
        let drag = DragGesture::begin(10.0, 0.0);
        assert_eq!(drag.offset_at(0.5, 0.0), 60.0);
    }

    #[test]
    fn test_nan_offsets_reset_to_default() {
        assert_eq!(clamp_offset(f64::NAN), 50.0);
        assert_eq!(clamp_offset(150.0), 100.0);
    }
}
