// Foreground-window bookkeeping for the "switch between the radio app and
// wherever you were" gesture. One instance is owned by the plugin lifecycle
// manager: constructed on load, dropped on unload, updated from the host's
// app-switch notifications. No globals, no interior mutability.

/// How the host classifies a window that just came to the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForegroundKind {
    /// The radio-automation application itself.
    RadioApp,
    /// Any other real window the user could want to return to.
    Other,
    /// Windows that must not be remembered, e.g. the desktop shell, which
    /// would make "switch back" land on dead space.
    Ignored,
}

/// Remembers the radio app's window and the last ordinary window, so a
/// single gesture can jump between them.
#[derive(Debug, Clone)]
pub struct WindowTracker<W: Copy + PartialEq> {
    radio_window: Option<W>,
    last_other_window: Option<W>,
}

impl<W: Copy + PartialEq> Default for WindowTracker<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Copy + PartialEq> WindowTracker<W> {
    pub fn new() -> Self {
        Self {
            radio_window: None,
            last_other_window: None,
        }
    }

    /// Record a foreground change.
    pub fn note_foreground(&mut self, window: W, kind: ForegroundKind) {
        match kind {
            ForegroundKind::RadioApp => self.radio_window = Some(window),
            ForegroundKind::Other => self.last_other_window = Some(window),
            ForegroundKind::Ignored => {}
        }
    }

    /// Where a switch gesture should land: back to the previous window when
    /// the radio app is in front, to the radio app otherwise. `None` when
    /// the destination was never seen.
    pub fn switch_target(&self, currently_in_radio: bool) -> Option<W> {
        if currently_in_radio {
            self.last_other_window
        } else {
            self.radio_window
        }
    }

    /// Forget a window that no longer exists, e.g. after the host reports it
    /// closed, so the gesture fails over to "destination unknown" instead of
    /// activating a dead handle.
    pub fn forget(&mut self, window: W) {
        if self.radio_window == Some(window) {
            self.radio_window = None;
        }
        if self.last_other_window == Some(window) {
            self.last_other_window = None;
        }
    }
}
