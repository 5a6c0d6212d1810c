//! Section-activation tracking for anchor navigation.
//!
//! Tracks which content section currently dominates the viewport so the
//! navigation UI can highlight it. Strategy (trigger-line nearest-above): on
//! every recomputation pass, measure the top offset of each registered
//! section. The active section is the one whose top edge is closest to — but
//! still above — a trigger line 40% from the top of the viewport. This means:
//!
//! - Short sections activate as soon as their heading crosses the trigger.
//! - Tall sections (Smoke Points, Sugar Stages, etc.) stay active the whole
//!   time they fill the screen.
//! - No false positives from intersection-ratio clipping at section seams.
//!
//! Scroll and resize events are coalesced: [`ScrollSpy::on_scroll`] and
//! [`ScrollSpy::on_resize`] only mark a pass as pending, and the host drives
//! [`ScrollSpy::run_frame`] once per animation frame. [`ScrollSpy::attach`]
//! runs an initial pass immediately, so a page loaded already scrolled (deep
//! link) reports the right section before any scroll event fires.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::debug;

/// Sticky header height subtracted from every measured section top.
pub const HEADER_OFFSET: f64 = 80.0;

/// Trigger line position as a fraction of viewport height.
pub const TRIGGER_RATIO: f64 = 0.4;

/// Host-side geometry queries the tracker needs.
///
/// The UI layer implements this over whatever document model it has. A
/// section that is not currently mounted returns `None` from
/// [`Viewport::section_top`] and is silently skipped.
pub trait Viewport {
    /// Current viewport height.
    fn height(&self) -> f64;

    /// Top offset of the section relative to the viewport, or `None` if no
    /// element with this identifier exists in the document.
    fn section_top(&self, id: &str) -> Option<f64>;
}

type ActiveCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Handle returned by [`ScrollSpy::on_active_changed`].
///
/// Dropping the handle unregisters the callback; [`CallbackHandle::unregister`]
/// does the same explicitly.
pub struct CallbackHandle {
    id: u64,
    callbacks: Weak<RwLock<BTreeMap<u64, ActiveCallback>>>,
}

impl CallbackHandle {
    /// Get the callback ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Unregister this callback.
    pub fn unregister(self) {
        // Drop does the work.
    }
}

impl Drop for CallbackHandle {
    fn drop(&mut self) {
        if let Some(callbacks) = self.callbacks.upgrade() {
            callbacks.write().remove(&self.id);
        }
    }
}

/// Internal tracker state.
struct SpyState {
    /// Currently active section id, unset until a section first qualifies.
    active: Option<String>,
    /// A scroll/resize event arrived since the last frame.
    pending: bool,
    /// Whether the tracker is attached to a live viewport.
    attached: bool,
}

/// Tracks the active section across an ordered list of section identifiers.
pub struct ScrollSpy {
    /// Registered section ids in navigation order.
    sections: Vec<String>,
    state: RwLock<SpyState>,
    /// Change callbacks keyed by their monotonically increasing id, so
    /// iteration delivers in registration order.
    callbacks: Arc<RwLock<BTreeMap<u64, ActiveCallback>>>,
    callback_counter: AtomicU64,
}

impl ScrollSpy {
    /// Create a tracker for the given section ids, in navigation order.
    pub fn new<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: section_ids.into_iter().map(Into::into).collect(),
            state: RwLock::new(SpyState {
                active: None,
                pending: false,
                attached: false,
            }),
            callbacks: Arc::new(RwLock::new(BTreeMap::new())),
            callback_counter: AtomicU64::new(0),
        }
    }

    /// Attach to a viewport and run the initial pass.
    ///
    /// The initial pass covers pages that load already scrolled to an anchor:
    /// the right section is active before the first scroll event.
    pub fn attach(&self, viewport: &dyn Viewport) {
        {
            let mut state = self.state.write();
            state.attached = true;
            state.pending = false;
        }
        debug!(sections = self.sections.len(), "scroll spy attached");
        self.recompute(viewport);
    }

    /// Detach from the viewport. No further updates are delivered, even if
    /// scroll events keep arriving. Symmetric with [`ScrollSpy::attach`].
    pub fn detach(&self) {
        let mut state = self.state.write();
        state.attached = false;
        state.pending = false;
        debug!("scroll spy detached");
    }

    /// Record a scroll event. Cheap; the actual pass runs at the next frame.
    pub fn on_scroll(&self) {
        let mut state = self.state.write();
        if state.attached {
            state.pending = true;
        }
    }

    /// Record a resize event. Treated exactly like a scroll event.
    pub fn on_resize(&self) {
        self.on_scroll();
    }

    /// Run at most one pending recomputation. The host calls this once per
    /// animation frame; any number of scroll/resize events since the last
    /// frame collapse into a single pass.
    pub fn run_frame(&self, viewport: &dyn Viewport) {
        {
            let mut state = self.state.write();
            if !state.attached || !state.pending {
                return;
            }
            state.pending = false;
        }
        self.recompute(viewport);
    }

    /// The currently active section id, if any section has qualified yet.
    pub fn active_id(&self) -> Option<String> {
        self.state.read().active.clone()
    }

    /// Register a callback invoked whenever the active section changes.
    ///
    /// Delivery is synchronous, on the thread driving [`ScrollSpy::run_frame`],
    /// in registration order.
    pub fn on_active_changed<F>(&self, callback: F) -> CallbackHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.callback_counter.fetch_add(1, Ordering::SeqCst);
        self.callbacks.write().insert(id, Box::new(callback));
        CallbackHandle {
            id,
            callbacks: Arc::downgrade(&self.callbacks),
        }
    }

    /// One full measurement pass over the registered sections.
    fn recompute(&self, viewport: &dyn Viewport) {
        // Trigger line: 40% from top of viewport (below the header area).
        let trigger = viewport.height() * TRIGGER_RATIO;

        let mut best: Option<(&str, f64)> = None;

        for id in &self.sections {
            // Unmounted sections are skipped, not an error.
            let Some(top) = viewport.section_top(id) else {
                continue;
            };
            let adjusted_top = top - HEADER_OFFSET;

            // delta = how far the section top is ABOVE the trigger line.
            // The winner is the section whose top crossed the trigger most
            // recently (smallest non-negative delta).
            let delta = trigger - adjusted_top;
            if delta >= 0.0 && best.map_or(true, |(_, d)| delta < d) {
                best = Some((id.as_str(), delta));
            }
        }

        // Above the first trigger nothing qualifies; the active id is left
        // as it was (unset before the first activation).
        let Some((best_id, _)) = best else {
            return;
        };

        let changed = {
            let mut state = self.state.write();
            if state.active.as_deref() == Some(best_id) {
                false
            } else {
                state.active = Some(best_id.to_string());
                true
            }
        };

        if changed {
            debug!(active = best_id, "active section changed");
            for callback in self.callbacks.read().values() {
                callback(best_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Three sections stacked vertically with a movable scroll offset.
    struct MockViewport {
        height: f64,
        /// Document-space top of each section.
        tops: Vec<(&'static str, f64)>,
        scroll_y: RwLock<f64>,
        measurements: AtomicUsize,
    }

    impl MockViewport {
        fn new(height: f64, tops: Vec<(&'static str, f64)>) -> Self {
            Self {
                height,
                tops,
                scroll_y: RwLock::new(0.0),
                measurements: AtomicUsize::new(0),
            }
        }

        fn scroll_to(&self, y: f64) {
            *self.scroll_y.write() = y;
        }

        fn passes(&self) -> usize {
            self.measurements.load(Ordering::SeqCst)
        }
    }

    impl Viewport for MockViewport {
        fn height(&self) -> f64 {
            self.measurements.fetch_add(1, Ordering::SeqCst);
            self.height
        }

        fn section_top(&self, id: &str) -> Option<f64> {
            let top = self.tops.iter().find(|(s, _)| *s == id)?.1;
            Some(top - *self.scroll_y.read())
        }
    }

    fn three_sections() -> MockViewport {
        // Viewport 1000 high => trigger line at 400. With the 80 header
        // offset, a section qualifies once its document top scrolls to 480.
        MockViewport::new(
            1000.0,
            vec![("meat", 100.0), ("oven", 900.0), ("oils", 1700.0)],
        )
    }

    fn spy() -> ScrollSpy {
        ScrollSpy::new(["meat", "oven", "oils"])
    }

    #[test]
    fn test_initial_pass_activates_without_scroll_event() {
        let viewport = three_sections();
        let spy = spy();

        // Section 1's top (100) is already past the trigger at page load.
        spy.attach(&viewport);
        assert_eq!(spy.active_id().as_deref(), Some("meat"));
    }

    #[test]
    fn test_nothing_active_above_first_trigger() {
        let viewport = MockViewport::new(1000.0, vec![("meat", 600.0), ("oven", 1400.0)]);
        let spy = ScrollSpy::new(["meat", "oven"]);

        spy.attach(&viewport);
        assert_eq!(spy.active_id(), None);
    }

    #[test]
    fn test_crossing_trigger_switches_sections() {
        let viewport = three_sections();
        let spy = spy();
        spy.attach(&viewport);

        // Scroll so section 2's top (900) crosses the 480 qualifying line.
        viewport.scroll_to(500.0);
        spy.on_scroll();
        spy.run_frame(&viewport);
        assert_eq!(spy.active_id().as_deref(), Some("oven"));

        // Scroll back above it: section 1 re-activates.
        viewport.scroll_to(0.0);
        spy.on_scroll();
        spy.run_frame(&viewport);
        assert_eq!(spy.active_id().as_deref(), Some("meat"));
    }

    #[test]
    fn test_tall_section_stays_active_past_short_peek() {
        // A peek of the next section at the bottom of the screen must not
        // steal the highlight while the current section still owns the
        // trigger line.
        let viewport = three_sections();
        let spy = spy();
        spy.attach(&viewport);

        // oils (1700) visible at the bottom edge, oven (900) owns the trigger.
        viewport.scroll_to(800.0);
        spy.on_scroll();
        spy.run_frame(&viewport);
        assert_eq!(spy.active_id().as_deref(), Some("oven"));
    }

    #[test]
    fn test_scroll_events_coalesce_to_one_pass_per_frame() {
        let viewport = three_sections();
        let spy = spy();
        spy.attach(&viewport);
        let after_attach = viewport.passes();

        for _ in 0..25 {
            spy.on_scroll();
        }
        spy.run_frame(&viewport);
        assert_eq!(viewport.passes(), after_attach + 1);

        // No pending event: the next frame is free.
        spy.run_frame(&viewport);
        assert_eq!(viewport.passes(), after_attach + 1);
    }

    #[test]
    fn test_detach_stops_updates() {
        let viewport = three_sections();
        let spy = spy();
        spy.attach(&viewport);
        assert_eq!(spy.active_id().as_deref(), Some("meat"));

        spy.detach();
        viewport.scroll_to(500.0);
        spy.on_scroll();
        spy.run_frame(&viewport);

        // Still the last value from before detach.
        assert_eq!(spy.active_id().as_deref(), Some("meat"));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let viewport = MockViewport::new(1000.0, vec![("oven", 100.0)]);
        // "meat" and "oils" have no elements; registering them is fine.
        let spy = spy();

        spy.attach(&viewport);
        assert_eq!(spy.active_id().as_deref(), Some("oven"));
    }

    #[test]
    fn test_callbacks_deliver_in_registration_order() {
        let viewport = three_sections();
        let spy = spy();

        let order = Arc::new(RwLock::new(Vec::<usize>::new()));
        let handles: Vec<_> = (0..12)
            .map(|i| {
                let sink = order.clone();
                spy.on_active_changed(move |_| sink.write().push(i))
            })
            .collect();

        // One activation: every callback fires exactly once, in the order
        // it was registered.
        spy.attach(&viewport);
        assert_eq!(*order.read(), (0..12).collect::<Vec<_>>());
        drop(handles);
    }

    #[test]
    fn test_change_callbacks_fire_once_per_transition() {
        let viewport = three_sections();
        let spy = spy();

        let seen = Arc::new(RwLock::new(Vec::<String>::new()));
        let sink = seen.clone();
        let handle = spy.on_active_changed(move |id| sink.write().push(id.to_string()));

        spy.attach(&viewport);
        viewport.scroll_to(500.0);
        spy.on_scroll();
        spy.run_frame(&viewport);

        // Same position again: active unchanged, no extra delivery.
        spy.on_scroll();
        spy.run_frame(&viewport);

        assert_eq!(*seen.read(), vec!["meat".to_string(), "oven".to_string()]);
        drop(handle);

        // Unregistered callback no longer fires.
        viewport.scroll_to(0.0);
        spy.on_scroll();
        spy.run_frame(&viewport);
        assert_eq!(seen.read().len(), 2);
    }
}
