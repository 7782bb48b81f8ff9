//! Aggregate load progress across one batch

/// Snapshot of a batch load's progress, recomputed after every item
/// completion. `total` is fixed for the duration of one `load_all` call.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadProgress {
    /// Items completed so far
    pub loaded: usize,
    /// Batch size for this call
    pub total: usize,
    /// `loaded / total` (0.0 for an empty batch)
    pub fraction: f32,
    /// Name of the most recently completed item
    pub last_completed: Option<String>,
}

impl LoadProgress {
    pub(crate) fn start(total: usize) -> Self {
        Self {
            loaded: 0,
            total,
            fraction: 0.0,
            last_completed: None,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::start(0)
    }

    /// Record one item completion and recompute the fraction.
    pub(crate) fn complete(&mut self, name: &str) {
        self.loaded += 1;
        self.fraction = self.loaded as f32 / self.total as f32;
        self.last_completed = Some(name.to_string());
    }

    /// Whether every item in the batch has completed.
    pub fn is_done(&self) -> bool {
        self.loaded == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_tracks_completions() {
        let mut progress = LoadProgress::start(4);
        assert_eq!(progress.fraction, 0.0);
        assert!(!progress.is_done());

        progress.complete("a");
        assert_eq!(progress.fraction, 0.25);
        assert_eq!(progress.last_completed.as_deref(), Some("a"));

        progress.complete("b");
        progress.complete("c");
        progress.complete("d");
        assert_eq!(progress.fraction, 1.0);
        assert!(progress.is_done());
    }
}
