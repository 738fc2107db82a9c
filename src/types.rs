// Strong typing over strings. Newtypes for timestamps and slide ordinals,
// tagged enums for the host event/command wire format.

use serde::{Deserialize, Serialize};

/// Timestamp in milliseconds since page load. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_millis(ms: u64) -> Self {
        Timestamp(ms)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn saturating_add(&self, ms: u64) -> Self {
        Timestamp(self.0.saturating_add(ms))
    }
}

/// Slide ordinal, 0-based and stable for the page lifetime. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct SlideIndex(u32);

impl SlideIndex {
    pub fn new(index: u32) -> Self {
        SlideIndex(index)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

/// Engine configuration passed from JS at construction.
/// Counts and the device class are read from the markup once; the engine
/// never re-derives them (viewport class is intentionally not resize-reactive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of portfolio cards found in the markup.
    pub slide_count: u32,
    /// Number of indicator buttons already present in the markup.
    /// Missing indicators are synthesized at startup.
    #[serde(default)]
    pub indicator_count: u32,
    /// Ordinals of slides that carry a video container + video element.
    /// Slides not listed here are skipped by the video gate.
    #[serde(default)]
    pub video_slides: Vec<u32>,
    /// True when the host matched a narrow viewport at load time.
    #[serde(default)]
    pub is_mobile_viewport: bool,
    #[serde(default)]
    pub carousel: CarouselSettings,
    #[serde(default)]
    pub video: VideoSettings,
    #[serde(default)]
    pub reveal: RevealSettings,
}

/// Carousel timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselSettings {
    /// Auto-advance interval (milliseconds).
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Progress-fill tick cadence (milliseconds).
    #[serde(default = "default_progress_tick_ms")]
    pub progress_tick_ms: u64,
    /// How long the outgoing slide keeps its transient "leaving" marker.
    #[serde(default = "default_leave_grace_ms")]
    pub leave_grace_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        CarouselSettings {
            auto_advance_ms: default_auto_advance_ms(),
            progress_tick_ms: default_progress_tick_ms(),
            leave_grace_ms: default_leave_grace_ms(),
        }
    }
}

fn default_auto_advance_ms() -> u64 {
    9000
}

fn default_progress_tick_ms() -> u64 {
    100
}

fn default_leave_grace_ms() -> u64 {
    600
}

/// Video gate settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSettings {
    /// Minimum viewport coverage ratio to treat a container as "in view".
    #[serde(default = "default_intersection_threshold")]
    pub intersection_threshold: f32,
}

impl Default for VideoSettings {
    fn default() -> Self {
        VideoSettings {
            intersection_threshold: default_intersection_threshold(),
        }
    }
}

fn default_intersection_threshold() -> f32 {
    0.6
}

/// Text-reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealSettings {
    /// Bottom margin in pixels: a target counts as visible only once its top
    /// edge clears this distance from the viewport bottom.
    #[serde(default = "default_reveal_margin_px")]
    pub bottom_margin_px: f32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        RevealSettings {
            bottom_margin_px: default_reveal_margin_px(),
        }
    }
}

fn default_reveal_margin_px() -> f32 {
    140.0
}

/// Batch of host events (minimizes JS↔WASM crossings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<UiEvent>,
}

/// Single host event with the time it was observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEvent {
    pub timestamp: Timestamp,
    pub event: UiEventKind,
}

/// Type of host event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEventKind {
    /// Periodic heartbeat; drives the engine's timers. No payload.
    Tick,
    /// Next-arrow clicked.
    NextClicked,
    /// Prev-arrow clicked.
    PrevClicked,
    /// An indicator button clicked.
    IndicatorClicked { index: SlideIndex },
    /// Learn-more or close-details button clicked on a slide.
    DetailsToggled { slide: SlideIndex },
    /// Pointer entered the carousel container.
    PointerEntered,
    /// Pointer left the carousel container.
    PointerLeft,
    /// Tap-to-play overlay tapped (mobile only).
    OverlayTapped { slide: SlideIndex },
    /// IntersectionObserver report for a slide's video container.
    VideoIntersection { slide: SlideIndex, ratio: f32 },
    /// IntersectionObserver report for a text-reveal target.
    RevealIntersection { target: u32, intersecting: bool },
    /// Scroll-position report for a text-reveal target (observer fallback).
    RevealGeometry {
        target: u32,
        top_px: f32,
        viewport_height_px: f32,
    },
    /// Hamburger toggle clicked.
    MenuOpenClicked,
    /// Close button inside the drawer clicked.
    MenuCloseClicked,
    /// A link inside the drawer clicked.
    MenuLinkClicked,
    /// Wheel event over the horizontal slider.
    WheelScrolled { delta_y: f32, shift_key: bool },
}

/// DOM effect for the host to apply. The engine owns all state; these are
/// the only way it touches the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiCommand {
    /// Append an indicator button (class `indicator`, `data-index`,
    /// `data-testid="indicator-N"`, the given aria-label).
    CreateIndicator { index: SlideIndex, label: String },
    /// Add the `active` class to a slide.
    SetSlideActive { slide: SlideIndex },
    /// Remove the `active` class from a slide.
    ClearSlideActive { slide: SlideIndex },
    /// Add the transient `prev` class to the outgoing slide.
    MarkSlideLeaving { slide: SlideIndex },
    /// Remove the transient `prev` class.
    ClearSlideLeaving { slide: SlideIndex },
    /// Add the `active` class to an indicator.
    SetIndicatorActive { index: SlideIndex },
    /// Remove the `active` class from an indicator.
    ClearIndicatorActive { index: SlideIndex },
    /// Add the `expanded` class to a slide's detail panel.
    ExpandDetails { slide: SlideIndex },
    /// Remove the `expanded` class from a slide's detail panel.
    CollapseDetails { slide: SlideIndex },
    /// Set the progress-fill width, in percent of the interval elapsed.
    SetProgressWidth { percent: f32 },
    /// Start playback of a slide's video.
    PlayVideo { slide: SlideIndex },
    /// Pause a slide's video and rewind it to time zero.
    ResetVideo { slide: SlideIndex },
    /// Create the tap-to-play overlay if the container doesn't already have
    /// one (idempotent on the host side; an existing overlay is reused).
    EnsureTapOverlay { slide: SlideIndex },
    /// Show the tap-to-play overlay.
    ShowTapOverlay { slide: SlideIndex },
    /// Hide the tap-to-play overlay.
    HideTapOverlay { slide: SlideIndex },
    /// Toggle the `visible` class on a text-reveal target.
    SetRevealVisible { target: u32, visible: bool },
    /// Open or close the mobile drawer. The host maps this to the `open`
    /// class, `aria-expanded` on the toggle, `aria-hidden` on the menu, and
    /// the body scroll lock, all together.
    SetMenuOpen { open: bool },
    /// Scroll the horizontal slider by the given x delta (smooth).
    ScrollSliderBy { delta_x: f32 },
}

/// Complete result of one event batch, returned to JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandBatch {
    pub commands: Vec<UiCommand>,
}
