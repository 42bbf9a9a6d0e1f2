//! Callbacks into the host shell.

use std::fmt;

/// What the host shell is told while a run animates
pub trait Host {
    /// Highlight the statement currently being replayed.
    fn highlight_block(&mut self, id: &str);

    /// Remove whatever highlight was set last.
    fn unhighlight_last_block(&mut self);

    /// The run is over (completed or cancelled).
    fn finish_execution(&mut self);

    /// Scroll the viewport so the turtle's start stays in view on the grown
    /// canvas. Sent once per run, right after the dry-run.
    fn scroll_to(&mut self, x: f64, y: f64);
}

impl<T: Host + ?Sized> Host for &mut T {
    fn highlight_block(&mut self, id: &str) {
        (**self).highlight_block(id)
    }

    fn unhighlight_last_block(&mut self) {
        (**self).unhighlight_last_block()
    }

    fn finish_execution(&mut self) {
        (**self).finish_execution()
    }

    fn scroll_to(&mut self, x: f64, y: f64) {
        (**self).scroll_to(x, y)
    }
}

/// One callback, as recorded by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Highlight(String),
    Unhighlight,
    Finish,
    ScrollTo { x: f64, y: f64 },
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Highlight(id) => write!(f, "highlight {}", id),
            HostEvent::Unhighlight => write!(f, "unhighlight"),
            HostEvent::Finish => write!(f, "finish"),
            HostEvent::ScrollTo { x, y } => write!(f, "scroll {} {}", x, y),
        }
    }
}

/// A host that just remembers what it was told
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Ids highlighted so far, in order
    pub fn highlighted(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Highlight(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn finished(&self) -> bool {
        self.events.contains(&HostEvent::Finish)
    }

    /// One event per line
    pub fn transcript(&self) -> String {
        self.events
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Host for RecordingHost {
    fn highlight_block(&mut self, id: &str) {
        self.events.push(HostEvent::Highlight(id.to_string()));
    }

    fn unhighlight_last_block(&mut self) {
        self.events.push(HostEvent::Unhighlight);
    }

    fn finish_execution(&mut self) {
        self.events.push(HostEvent::Finish);
    }

    fn scroll_to(&mut self, x: f64, y: f64) {
        self.events.push(HostEvent::ScrollTo { x, y });
    }
}
