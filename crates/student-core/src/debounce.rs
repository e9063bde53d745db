//! Search Debounce
//!
//! Bookkeeping for the search box timer. Every keystroke arms a new
//! generation; a timer that fires with an older token is stale and does
//! nothing, so only the last keystroke in a burst reaches the table.

/// Generation handed to the timer armed for one keystroke
pub type SearchToken = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchDebounce {
    /// Search box contents as typed
    typed: String,
    latest: SearchToken,
    armed: bool,
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }

    /// Record a keystroke and return the token its timer must fire with
    pub fn arm(&mut self, text: impl Into<String>) -> SearchToken {
        self.typed = text.into();
        self.latest += 1;
        self.armed = true;
        self.latest
    }

    /// Timer callback. Returns the text to apply, or None for a stale token
    /// or a generation that already fired.
    pub fn fire(&mut self, token: SearchToken) -> Option<String> {
        if !self.armed || token != self.latest {
            return None;
        }
        self.armed = false;
        Some(self.typed.clone())
    }
}
