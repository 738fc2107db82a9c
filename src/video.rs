// Visibility-gated video playback, one gate per slide with a bound video.
// Desktop: play iff the container covers the threshold and the slide is the
// carousel's current one; anything else pauses and rewinds. Mobile adds a
// tap gate: intersection alone never starts playback, and losing
// visibility or active status re-arms the overlay.

use crate::types::{SlideIndex, UiCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateMode {
    Desktop { playing: bool },
    Mobile { phase: MobilePhase },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MobilePhase {
    /// Overlay shown; waiting for a tap.
    AwaitingTap,
    /// Overlay hidden; playback started by a tap.
    Playing,
}

/// Playback gate for one slide's video. Reads carousel state on every
/// intersection report; never writes it back.
pub struct VideoGate {
    slide: SlideIndex,
    threshold: f32,
    mode: GateMode,
}

impl VideoGate {
    /// Device class is fixed at construction; the gate does not react to
    /// viewport resizing.
    pub fn new(slide: SlideIndex, is_mobile: bool, threshold: f32) -> Self {
        let mode = if is_mobile {
            GateMode::Mobile {
                phase: MobilePhase::AwaitingTap,
            }
        } else {
            GateMode::Desktop { playing: false }
        };
        VideoGate {
            slide,
            threshold,
            mode,
        }
    }

    pub fn slide(&self) -> SlideIndex {
        self.slide
    }

    pub fn is_playing(&self) -> bool {
        match self.mode {
            GateMode::Desktop { playing } => playing,
            GateMode::Mobile { phase } => phase == MobilePhase::Playing,
        }
    }

    /// Bootstrap commands: mobile slides get their tap overlay ensured
    /// (the host reuses an existing overlay rather than duplicating it).
    pub fn start(&self, out: &mut Vec<UiCommand>) {
        if matches!(self.mode, GateMode::Mobile { .. }) {
            out.push(UiCommand::EnsureTapOverlay { slide: self.slide });
        }
    }

    /// Overlay tap: hide the overlay and start playback. One tap buys one
    /// playback attempt. No-op on desktop (there is no overlay).
    pub fn on_overlay_tap(&mut self, out: &mut Vec<UiCommand>) {
        if let GateMode::Mobile { phase } = &mut self.mode {
            *phase = MobilePhase::Playing;
            out.push(UiCommand::HideTapOverlay { slide: self.slide });
            out.push(UiCommand::PlayVideo { slide: self.slide });
        }
    }

    /// Evaluate an intersection report against the carousel's current slide.
    pub fn on_intersection(&mut self, ratio: f32, active: SlideIndex, out: &mut Vec<UiCommand>) {
        let in_view = ratio >= self.threshold;
        let is_active = self.slide == active;

        match &mut self.mode {
            GateMode::Desktop { playing } => {
                if in_view && is_active {
                    if !*playing {
                        *playing = true;
                        out.push(UiCommand::PlayVideo { slide: self.slide });
                    }
                } else if *playing {
                    *playing = false;
                    out.push(UiCommand::ResetVideo { slide: self.slide });
                }
            }
            GateMode::Mobile { phase } => {
                // Intersecting and active: leave whatever the tap decided.
                if in_view && is_active {
                    return;
                }
                if *phase == MobilePhase::Playing {
                    *phase = MobilePhase::AwaitingTap;
                    out.push(UiCommand::ResetVideo { slide: self.slide });
                    out.push(UiCommand::ShowTapOverlay { slide: self.slide });
                }
            }
        }
    }
}

/// Builds the gates for the slides that actually carry a video; slides
/// without a binding are skipped entirely.
pub fn build_gates(
    video_slides: &[u32],
    slide_count: u32,
    is_mobile: bool,
    threshold: f32,
) -> Vec<VideoGate> {
    video_slides
        .iter()
        .filter(|&&s| s < slide_count)
        .map(|&s| VideoGate::new(SlideIndex::new(s), is_mobile, threshold))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.6;

    fn slide(n: u32) -> SlideIndex {
        SlideIndex::new(n)
    }

    #[test]
    fn desktop_plays_when_visible_and_active() {
        let mut gate = VideoGate::new(slide(1), false, THRESHOLD);
        let mut out = Vec::new();
        gate.on_intersection(0.8, slide(1), &mut out);
        assert_eq!(out, vec![UiCommand::PlayVideo { slide: slide(1) }]);
        assert!(gate.is_playing());
    }

    #[test]
    fn desktop_resets_when_dropping_below_threshold() {
        let mut gate = VideoGate::new(slide(1), false, THRESHOLD);
        let mut out = Vec::new();
        gate.on_intersection(0.8, slide(1), &mut out);

        let mut out = Vec::new();
        gate.on_intersection(0.1, slide(1), &mut out);
        assert_eq!(out, vec![UiCommand::ResetVideo { slide: slide(1) }]);
        assert!(!gate.is_playing());
    }

    #[test]
    fn desktop_resets_when_slide_loses_active_status() {
        let mut gate = VideoGate::new(slide(1), false, THRESHOLD);
        let mut out = Vec::new();
        gate.on_intersection(0.9, slide(1), &mut out);

        // Still fully visible, but the carousel moved on.
        let mut out = Vec::new();
        gate.on_intersection(0.9, slide(2), &mut out);
        assert_eq!(out, vec![UiCommand::ResetVideo { slide: slide(1) }]);
    }

    #[test]
    fn desktop_does_not_play_inactive_slide() {
        let mut gate = VideoGate::new(slide(1), false, THRESHOLD);
        let mut out = Vec::new();
        gate.on_intersection(0.9, slide(0), &mut out);
        assert!(out.is_empty());
        assert!(!gate.is_playing());
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut gate = VideoGate::new(slide(0), false, THRESHOLD);
        let mut out = Vec::new();
        gate.on_intersection(0.6, slide(0), &mut out);
        assert!(gate.is_playing());
    }

    #[test]
    fn mobile_requires_tap_before_playing() {
        let mut gate = VideoGate::new(slide(0), true, THRESHOLD);
        let mut out = Vec::new();
        gate.on_intersection(1.0, slide(0), &mut out);
        assert!(out.is_empty());
        assert!(!gate.is_playing());

        gate.on_overlay_tap(&mut out);
        assert_eq!(
            out,
            vec![
                UiCommand::HideTapOverlay { slide: slide(0) },
                UiCommand::PlayVideo { slide: slide(0) },
            ]
        );
        assert!(gate.is_playing());
    }

    #[test]
    fn mobile_rearm_on_leaving_view() {
        let mut gate = VideoGate::new(slide(0), true, THRESHOLD);
        let mut out = Vec::new();
        gate.on_overlay_tap(&mut out);

        let mut out = Vec::new();
        gate.on_intersection(0.2, slide(0), &mut out);
        assert_eq!(
            out,
            vec![
                UiCommand::ResetVideo { slide: slide(0) },
                UiCommand::ShowTapOverlay { slide: slide(0) },
            ]
        );
        assert!(!gate.is_playing());

        // Back in view: still needs a fresh tap.
        let mut out = Vec::new();
        gate.on_intersection(1.0, slide(0), &mut out);
        assert!(out.is_empty());
        assert!(!gate.is_playing());
    }

    #[test]
    fn mobile_rearm_when_slide_changes() {
        let mut gate = VideoGate::new(slide(1), true, THRESHOLD);
        let mut out = Vec::new();
        gate.on_overlay_tap(&mut out);

        let mut out = Vec::new();
        gate.on_intersection(0.9, slide(2), &mut out);
        assert!(out.contains(&UiCommand::ShowTapOverlay { slide: slide(1) }));
        assert!(!gate.is_playing());
    }

    #[test]
    fn mobile_bootstrap_ensures_overlay() {
        let gate = VideoGate::new(slide(0), true, THRESHOLD);
        let mut out = Vec::new();
        gate.start(&mut out);
        assert_eq!(out, vec![UiCommand::EnsureTapOverlay { slide: slide(0) }]);

        let desktop = VideoGate::new(slide(0), false, THRESHOLD);
        let mut out = Vec::new();
        desktop.start(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn gates_skip_slides_without_video_or_out_of_range() {
        let gates = build_gates(&[0, 2, 9], 3, false, THRESHOLD);
        let bound: Vec<_> = gates.iter().map(|g| g.slide().as_u32()).collect();
        assert_eq!(bound, vec![0, 2]);
    }
}
