// Horizontal wheel slider: vertical wheel motion over the strip becomes a
// horizontal smooth scroll. Shift-held wheel events pass through so normal
// scrolling still works (the host must not preventDefault then).

use crate::types::UiCommand;

/// Wheel-to-horizontal-scroll mapping for the overflow strip.
pub struct WheelSlider;

impl WheelSlider {
    pub fn new() -> Self {
        WheelSlider
    }

    pub fn on_wheel(&self, delta_y: f32, shift_key: bool, out: &mut Vec<UiCommand>) {
        if shift_key {
            return;
        }
        out.push(UiCommand::ScrollSliderBy { delta_x: delta_y });
    }
}

impl Default for WheelSlider {
    fn default() -> Self {
        Self::new()
    }
}
