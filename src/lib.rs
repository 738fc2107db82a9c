// portfolio_engine: Rust/WASM engine for the SLANDS landing page.
// All interaction state lives here; JS is plumbing. The host forwards DOM
// events in batches and applies the returned DOM commands, nothing more.

mod carousel;
mod error;
mod nav;
mod reveal;
mod slider;
mod timer;
mod types;
mod video;

use wasm_bindgen::prelude::*;

pub use carousel::CarouselController;
pub use error::EngineError;
pub use nav::MobileMenu;
pub use reveal::RevealTracker;
pub use slider::WheelSlider;
pub use timer::{TimerId, TimerQueue};
pub use types::*;
pub use video::{build_gates, VideoGate};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine interface exposed to JavaScript.
/// Batch interface to minimize JS↔WASM crossings: the host delivers
/// timestamped events and applies the returned command list to the DOM.
#[wasm_bindgen]
pub struct PortfolioEngine {
    carousel: CarouselController,
    gates: Vec<VideoGate>,
    reveal: RevealTracker,
    menu: MobileMenu,
    slider: WheelSlider,
}

#[wasm_bindgen]
impl PortfolioEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<PortfolioEngine, JsValue> {
        let config: EngineConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let threshold = config.video.intersection_threshold.clamp(0.0, 1.0);
        Ok(PortfolioEngine {
            carousel: CarouselController::new(
                config.slide_count,
                config.indicator_count,
                config.carousel.clone(),
            ),
            gates: build_gates(
                &config.video_slides,
                config.slide_count,
                config.is_mobile_viewport,
                threshold,
            ),
            reveal: RevealTracker::new(config.reveal.clone()),
            menu: MobileMenu::new(),
            slider: WheelSlider::new(),
        })
    }

    /// Bootstrap: synthesize missing indicators, ensure tap overlays, and
    /// start auto-advance. Call once after construction with the current
    /// page time.
    pub fn start(&mut self, now_ms: u64) -> Result<String, JsValue> {
        let mut commands = Vec::new();
        self.carousel
            .start(Timestamp::from_millis(now_ms), &mut commands);
        for gate in &self.gates {
            gate.start(&mut commands);
        }
        to_batch_json(commands)
    }

    /// Process a batch of host events and return the DOM commands to apply.
    /// This is the main entry point, designed as a batch call to reduce
    /// JS↔WASM overhead. Events referencing unknown slides are dropped
    /// silently; only malformed JSON is an error.
    pub fn process_events(&mut self, events_json: &str) -> Result<String, JsValue> {
        let batch: EventBatch = serde_json::from_str(events_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid events: {}", e)))?;

        let mut commands = Vec::new();
        for event in &batch.events {
            self.dispatch(event, &mut commands);
        }
        to_batch_json(commands)
    }
}

impl PortfolioEngine {
    fn dispatch(&mut self, event: &UiEvent, out: &mut Vec<UiCommand>) {
        let now = event.timestamp;
        // Timers fire before the event itself so deadlines that elapsed
        // strictly earlier are observed first.
        self.carousel.tick(now, out);

        match &event.event {
            UiEventKind::Tick => {}
            UiEventKind::NextClicked => self.carousel.go_to_next(now, out),
            UiEventKind::PrevClicked => self.carousel.go_to_previous(now, out),
            UiEventKind::IndicatorClicked { index } => {
                if index.as_u32() < self.carousel.slide_count() {
                    self.carousel.go_to_slide(*index, now, out);
                }
            }
            UiEventKind::DetailsToggled { slide } => {
                self.carousel.toggle_details(*slide, now, out)
            }
            UiEventKind::PointerEntered => self.carousel.on_pointer_enter(),
            UiEventKind::PointerLeft => self.carousel.on_pointer_leave(now, out),
            UiEventKind::OverlayTapped { slide } => {
                if let Some(gate) = self.gates.iter_mut().find(|g| g.slide() == *slide) {
                    gate.on_overlay_tap(out);
                }
            }
            UiEventKind::VideoIntersection { slide, ratio } => {
                let active = self.carousel.current();
                if let Some(gate) = self.gates.iter_mut().find(|g| g.slide() == *slide) {
                    gate.on_intersection(*ratio, active, out);
                }
            }
            UiEventKind::RevealIntersection {
                target,
                intersecting,
            } => self.reveal.on_intersection(*target, *intersecting, out),
            UiEventKind::RevealGeometry {
                target,
                top_px,
                viewport_height_px,
            } => self
                .reveal
                .on_geometry(*target, *top_px, *viewport_height_px, out),
            UiEventKind::MenuOpenClicked => self.menu.open(out),
            UiEventKind::MenuCloseClicked | UiEventKind::MenuLinkClicked => self.menu.close(out),
            UiEventKind::WheelScrolled { delta_y, shift_key } => {
                self.slider.on_wheel(*delta_y, *shift_key, out)
            }
        }
    }
}

fn to_batch_json(commands: Vec<UiCommand>) -> Result<String, JsValue> {
    serde_json::to_string(&CommandBatch { commands })
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
