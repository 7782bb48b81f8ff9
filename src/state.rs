//! Application state machine
//!
//! The viewer has exactly two useful end states: "scene ready" or "loading
//! failed". A failed load is terminal; there is no automatic recovery, the
//! user reloads the application.

/// The current application state
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Resources are loading; carries the aggregate fraction
    Loading { fraction: f32 },
    /// Scene attached and the tour is live
    Ready,
    /// Loading failed; persistent, non-recovering
    Failed { message: String },
}

impl Default for AppState {
    fn default() -> Self {
        Self::Loading { fraction: 0.0 }
    }
}

impl AppState {
    /// Update the loading fraction. Ignored outside `Loading`.
    pub fn set_progress(&mut self, fraction: f32) {
        if let Self::Loading { fraction: f } = self {
            *f = fraction;
        }
    }

    /// Loading finished; the tour is live. Ignored once `Failed`.
    pub fn mark_ready(&mut self) {
        if !self.is_failed() {
            *self = Self::Ready;
        }
    }

    /// Loading failed. Terminal: later transitions are ignored.
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        if !self.is_failed() {
            *self = Self::Failed {
                message: message.into(),
            };
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Short status line for the overlay/log.
    pub fn describe(&self) -> String {
        match self {
            Self::Loading { fraction } => format!("loading {:.0}%", fraction * 100.0),
            Self::Ready => "ready".to_string(),
            Self::Failed { message } => format!("failed to load, reload to retry: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_updates_only_while_loading() {
        let mut state = AppState::default();
        state.set_progress(0.5);
        assert_eq!(state, AppState::Loading { fraction: 0.5 });

        state.mark_ready();
        state.set_progress(0.9);
        assert!(state.is_ready());
    }

    #[test]
    fn failed_is_terminal() {
        let mut state = AppState::default();
        state.mark_failed("transport failed for 'hall'");
        assert!(state.is_failed());

        state.mark_ready();
        assert!(state.is_failed());

        state.mark_failed("second failure");
        assert!(state.describe().contains("hall"));
    }
}
