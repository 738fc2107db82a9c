// Scroll-triggered text reveal. The host observes each `.texts` span and
// forwards intersection reports; the `visible` class toggles both ways so
// text hides again when scrolled out. A geometry fallback covers hosts
// without IntersectionObserver.

use crate::types::{RevealSettings, UiCommand};

/// Maps viewport reports to `visible` toggles on text targets.
pub struct RevealTracker {
    settings: RevealSettings,
}

impl RevealTracker {
    pub fn new(settings: RevealSettings) -> Self {
        RevealTracker { settings }
    }

    /// Observer path: the bottom margin is baked into the host's observer
    /// rootMargin, so the report is authoritative as-is.
    pub fn on_intersection(&self, target: u32, intersecting: bool, out: &mut Vec<UiCommand>) {
        out.push(UiCommand::SetRevealVisible {
            target,
            visible: intersecting,
        });
    }

    /// Fallback path: visible once the target's top edge clears the bottom
    /// margin of the viewport.
    pub fn on_geometry(
        &self,
        target: u32,
        top_px: f32,
        viewport_height_px: f32,
        out: &mut Vec<UiCommand>,
    ) {
        let visible = top_px < viewport_height_px - self.settings.bottom_margin_px;
        out.push(UiCommand::SetRevealVisible { target, visible });
    }
}
