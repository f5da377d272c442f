use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Targets start revealing when their top edge reaches 80% of the viewport height.
pub const DEFAULT_START: f64 = 0.8;

static SCROLL_TRIGGER: Lazy<Arc<ScrollTrigger>> = Lazy::new(|| {
    tracing::debug!(start = DEFAULT_START, "Registering the scroll trigger");
    Arc::new(ScrollTrigger::new(DEFAULT_START))
});

/// Process-wide scroll trigger. Registration happens on first use;
/// later calls hand back the same instance.
pub fn register_scroll_trigger() -> Arc<ScrollTrigger> {
    Arc::clone(&SCROLL_TRIGGER)
}

#[derive(Debug)]
pub struct ScrollTrigger {
    start: f64,
    active: AtomicUsize,
}

impl ScrollTrigger {
    pub fn new(start: f64) -> Self {
        Self {
            start,
            active: AtomicUsize::new(0),
        }
    }

    /// Number of observers currently mounted.
    pub fn active_observers(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Acquire an observer. It is released when dropped.
    pub fn observer(self: &Arc<Self>) -> RevealObserver {
        self.active.fetch_add(1, Ordering::SeqCst);
        RevealObserver {
            trigger: Arc::clone(self),
            targets: Vec::new(),
        }
    }
}

/// What happens once a revealed target scrolls back above its start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleActions {
    /// Stays visible.
    PlayOnce,
    /// Hides again and replays on the next pass.
    PlayReverse,
}

impl ToggleActions {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleActions::PlayOnce => "once",
            ToggleActions::PlayReverse => "reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealChange {
    Revealed(String),
    Hidden(String),
}

#[derive(Debug)]
struct Target {
    id: String,
    top: f64,
    toggle: ToggleActions,
    revealed: bool,
}

/// Reveal state for the marked elements of one mounted page.
#[derive(Debug)]
pub struct RevealObserver {
    trigger: Arc<ScrollTrigger>,
    targets: Vec<Target>,
}

impl RevealObserver {
    /// Mark an element. `top` is its offset from the top of the document.
    pub fn observe(&mut self, id: impl Into<String>, top: f64, toggle: ToggleActions) {
        self.targets.push(Target {
            id: id.into(),
            top,
            toggle,
            revealed: false,
        });
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.targets
            .iter()
            .any(|target| target.id == id && target.revealed)
    }

    pub fn on_scroll(&mut self, viewport: Viewport) -> Vec<RevealChange> {
        let start_line = viewport.scroll_y + self.trigger.start * viewport.height;
        let mut changes = Vec::new();
        for target in &mut self.targets {
            let past_start = target.top <= start_line;
            if past_start && !target.revealed {
                target.revealed = true;
                changes.push(RevealChange::Revealed(target.id.clone()));
            } else if !past_start
                && target.revealed
                && target.toggle == ToggleActions::PlayReverse
            {
                target.revealed = false;
                changes.push(RevealChange::Hidden(target.id.clone()));
            }
        }
        changes
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.trigger.active.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!(targets = self.targets.len(), "Released a reveal observer");
    }
}
