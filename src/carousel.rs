// Portfolio carousel: active-slide state, indicator sync, details toggling,
// and the auto-advance/progress timer pair.
// Rule: sticky pause (details open) outlives hover pause; hover never
// overrides an open panel.

use crate::timer::{TimerId, TimerQueue};
use crate::types::{CarouselSettings, SlideIndex, Timestamp, UiCommand};

/// Tasks owned by the controller's timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    /// Repeating: advance to the next slide.
    AutoAdvance,
    /// Repeating: bump the progress fill.
    ProgressTick,
    /// One-shot: drop the outgoing slide's transient "prev" marker.
    /// Independent of navigation; in-flight markers simply complete.
    ClearLeaving(SlideIndex),
}

/// Carousel controller: the single source of truth for which slide is active.
/// Collaborators (the video gate) read `current()`; nothing writes back.
pub struct CarouselController {
    slide_count: u32,
    indicator_count: u32,
    settings: CarouselSettings,
    current: SlideIndex,
    is_paused: bool,
    expanded: Vec<bool>,
    progress_ticks: u64,
    progress: f32,
    timers: TimerQueue<TimerTask>,
    auto_timer: Option<TimerId>,
    progress_timer: Option<TimerId>,
}

impl CarouselController {
    pub fn new(slide_count: u32, indicator_count: u32, settings: CarouselSettings) -> Self {
        CarouselController {
            slide_count,
            indicator_count,
            settings,
            current: SlideIndex::new(0),
            is_paused: false,
            expanded: vec![false; slide_count as usize],
            progress_ticks: 0,
            progress: 0.0,
            timers: TimerQueue::new(),
            auto_timer: None,
            progress_timer: None,
        }
    }

    /// Synthesize any missing indicators and start auto-advance.
    /// With zero slides the controller stays inert and this emits nothing.
    pub fn start(&mut self, now: Timestamp, out: &mut Vec<UiCommand>) {
        if self.is_inert() {
            return;
        }
        for i in self.indicator_count..self.slide_count {
            out.push(UiCommand::CreateIndicator {
                index: SlideIndex::new(i),
                label: format!("Go to slide {}", i + 1),
            });
        }
        self.indicator_count = self.slide_count;
        self.start_auto_advance(now, out);
    }

    pub fn current(&self) -> SlideIndex {
        self.current
    }

    pub fn slide_count(&self) -> u32 {
        self.slide_count
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_expanded(&self, slide: SlideIndex) -> bool {
        self.expanded.get(slide.as_usize()).copied().unwrap_or(false)
    }

    fn is_inert(&self) -> bool {
        self.slide_count == 0
    }

    /// Navigate directly to `index`. Callers normalize the index first; this
    /// only guards the inert (zero-slide) case.
    pub fn go_to_slide(&mut self, index: SlideIndex, now: Timestamp, out: &mut Vec<UiCommand>) {
        if self.is_inert() {
            return;
        }
        debug_assert!(index.as_u32() < self.slide_count);

        // Changing slides closes every open detail panel.
        for i in 0..self.slide_count {
            let slide = SlideIndex::new(i);
            if self.expanded[slide.as_usize()] {
                self.expanded[slide.as_usize()] = false;
                out.push(UiCommand::CollapseDetails { slide });
            }
        }

        let outgoing = self.current;
        out.push(UiCommand::ClearSlideActive { slide: outgoing });
        out.push(UiCommand::MarkSlideLeaving { slide: outgoing });
        self.timers.schedule(
            now,
            self.settings.leave_grace_ms,
            TimerTask::ClearLeaving(outgoing),
        );

        self.current = index;
        out.push(UiCommand::SetSlideActive { slide: index });

        for i in 0..self.indicator_count {
            out.push(UiCommand::ClearIndicatorActive {
                index: SlideIndex::new(i),
            });
        }
        out.push(UiCommand::SetIndicatorActive { index });

        self.reset_progress(out);
        self.resume_auto_advance(now, out);
    }

    pub fn go_to_next(&mut self, now: Timestamp, out: &mut Vec<UiCommand>) {
        if self.is_inert() {
            return;
        }
        let next = (self.current.as_u32() + 1) % self.slide_count;
        self.go_to_slide(SlideIndex::new(next), now, out);
    }

    pub fn go_to_previous(&mut self, now: Timestamp, out: &mut Vec<UiCommand>) {
        if self.is_inert() {
            return;
        }
        let prev = (self.current.as_u32() + self.slide_count - 1) % self.slide_count;
        self.go_to_slide(SlideIndex::new(prev), now, out);
    }

    /// Flip one slide's detail panel. Expanding latches the sticky pause;
    /// collapsing releases the latch and restarts the timers from zero.
    pub fn toggle_details(&mut self, slide: SlideIndex, now: Timestamp, out: &mut Vec<UiCommand>) {
        if slide.as_u32() >= self.slide_count {
            return;
        }
        let idx = slide.as_usize();
        if self.expanded[idx] {
            self.expanded[idx] = false;
            out.push(UiCommand::CollapseDetails { slide });
            self.is_paused = false;
            self.resume_auto_advance(now, out);
        } else {
            self.expanded[idx] = true;
            out.push(UiCommand::ExpandDetails { slide });
            self.pause_auto_advance();
        }
    }

    /// Hover intent: pause while the pointer is over the carousel, unless the
    /// active slide's details are open (the sticky pause already governs).
    pub fn on_pointer_enter(&mut self) {
        if self.is_inert() || self.is_expanded(self.current) {
            return;
        }
        self.temp_pause_auto_advance();
    }

    pub fn on_pointer_leave(&mut self, now: Timestamp, out: &mut Vec<UiCommand>) {
        if self.is_inert() || self.is_expanded(self.current) {
            return;
        }
        self.resume_auto_advance(now, out);
    }

    /// Restart both timers from zero. At most one live auto-advance timer and
    /// one live progress timer exist at any time: old handles are cancelled
    /// before replacements are scheduled.
    pub fn start_auto_advance(&mut self, now: Timestamp, out: &mut Vec<UiCommand>) {
        if self.is_inert() {
            return;
        }
        self.reset_progress(out);
        self.progress_timer = Some(self.timers.schedule_repeating(
            now,
            self.settings.progress_tick_ms,
            TimerTask::ProgressTick,
        ));
        self.cancel_auto_timer();
        self.auto_timer = Some(self.timers.schedule_repeating(
            now,
            self.settings.auto_advance_ms,
            TimerTask::AutoAdvance,
        ));
    }

    /// Sticky pause: stops both timers and latches until resumed.
    pub fn pause_auto_advance(&mut self) {
        self.is_paused = true;
        self.cancel_auto_timer();
        self.cancel_progress_timer();
    }

    /// Hover pause: stops both timers without latching, so a later
    /// `resume_auto_advance` restarts them.
    pub fn temp_pause_auto_advance(&mut self) {
        self.cancel_auto_timer();
        self.cancel_progress_timer();
    }

    /// Restart both timers unless sticky-paused; a sticky pause is only
    /// cleared here, and the next resume restarts.
    pub fn resume_auto_advance(&mut self, now: Timestamp, out: &mut Vec<UiCommand>) {
        if !self.is_paused {
            self.temp_pause_auto_advance();
            self.start_auto_advance(now, out);
        }
        self.is_paused = false;
    }

    /// Stop the progress timer and snap the fill back to zero.
    pub fn reset_progress(&mut self, out: &mut Vec<UiCommand>) {
        self.cancel_progress_timer();
        self.progress_ticks = 0;
        self.progress = 0.0;
        out.push(UiCommand::SetProgressWidth { percent: 0.0 });
    }

    /// Drain timers due at or before `now`. Fires serialize in deadline
    /// order; an auto-advance fire restarts both timers, so anything it
    /// cancelled no longer fires in the same drain.
    pub fn tick(&mut self, now: Timestamp, out: &mut Vec<UiCommand>) {
        while let Some(task) = self.timers.poll_one(now) {
            match task {
                TimerTask::AutoAdvance => self.go_to_next(now, out),
                TimerTask::ProgressTick => self.on_progress_tick(out),
                TimerTask::ClearLeaving(slide) => {
                    out.push(UiCommand::ClearSlideLeaving { slide });
                }
            }
        }
    }

    fn on_progress_tick(&mut self, out: &mut Vec<UiCommand>) {
        self.progress_ticks += 1;
        // Integer elapsed-time math keeps the final tick at exactly 100.
        let elapsed_ms = self.progress_ticks * self.settings.progress_tick_ms;
        let percent = (elapsed_ms as f64 * 100.0 / self.settings.auto_advance_ms as f64).min(100.0);
        self.progress = percent as f32;
        out.push(UiCommand::SetProgressWidth {
            percent: self.progress,
        });
    }

    fn cancel_auto_timer(&mut self) {
        if let Some(id) = self.auto_timer.take() {
            self.timers.cancel(id);
        }
    }

    fn cancel_progress_timer(&mut self) {
        if let Some(id) = self.progress_timer.take() {
            self.timers.cancel(id);
        }
    }
}
