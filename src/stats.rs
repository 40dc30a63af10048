// File: src/stats.rs
use crate::core::session::{KeyInput, KeystrokeOutcome};
use std::time::{Duration, Instant};

/// Running counters for the current session. Nothing is kept once the
/// process exits.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    keystrokes: u64,
    backspaces: u64,
    words_completed: u64,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

/// A snapshot of typing speed, taken from the first keystroke onwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub elapsed: Duration,
    pub keystrokes: u64,
    pub backspaces: u64,
    pub words_completed: u64,
    pub words_per_minute: f64,
    pub keys_per_minute: f64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a keystroke that the session actually consumed.
    pub fn record(&mut self, key: KeyInput, outcome: KeystrokeOutcome, now: Instant) {
        if matches!(
            outcome,
            KeystrokeOutcome::Ignored | KeystrokeOutcome::Rejected
        ) {
            return;
        }

        self.started_at.get_or_insert(now);
        self.keystrokes += 1;
        if key == KeyInput::Backspace {
            self.backspaces += 1;
        }

        match outcome {
            KeystrokeOutcome::WordCompleted { .. } => self.words_completed += 1,
            KeystrokeOutcome::Finished => {
                self.words_completed += 1;
                self.finished_at = Some(now);
            }
            _ => {}
        }
    }

    pub fn keystrokes(&self) -> u64 {
        self.keystrokes
    }

    pub fn words_completed(&self) -> u64 {
        self.words_completed
    }

    /// Elapsed time stops counting once the session has finished.
    pub fn summary(&self, now: Instant) -> StatsSummary {
        let elapsed = match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => now.saturating_duration_since(start),
            (None, _) => Duration::ZERO,
        };
        let minutes = elapsed.as_secs_f64() / 60.0;
        let per_minute = |count: u64| {
            if minutes > 0.0 {
                count as f64 / minutes
            } else {
                0.0
            }
        };

        StatsSummary {
            elapsed,
            keystrokes: self.keystrokes,
            backspaces: self.backspaces,
            words_completed: self.words_completed,
            words_per_minute: per_minute(self.words_completed),
            keys_per_minute: per_minute(self.keystrokes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let stats = SessionStats::new();
        let summary = stats.summary(Instant::now());
        assert_eq!(summary.elapsed, Duration::ZERO);
        assert_eq!(summary.words_per_minute, 0.0);
        assert_eq!(summary.keys_per_minute, 0.0);
    }

    #[test]
    fn test_rates_per_minute() {
        let start = Instant::now();
        let mut stats = SessionStats::new();
        let updated = KeystrokeOutcome::Updated { cursor: Some(0) };

        stats.record(KeyInput::Char('n'), updated, start);
        stats.record(KeyInput::Backspace, updated, start + Duration::from_secs(5));
        stats.record(KeyInput::Char('n'), updated, start + Duration::from_secs(10));
        stats.record(
            KeyInput::Char('e'),
            KeystrokeOutcome::Finished,
            start + Duration::from_secs(30),
        );

        let summary = stats.summary(start + Duration::from_secs(90));
        assert_eq!(summary.elapsed, Duration::from_secs(30));
        assert_eq!(summary.keystrokes, 4);
        assert_eq!(summary.backspaces, 1);
        assert_eq!(summary.words_completed, 1);
        assert!((summary.words_per_minute - 2.0).abs() < 1e-9);
        assert!((summary.keys_per_minute - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_ignored_keys_are_not_counted() {
        let mut stats = SessionStats::new();
        let now = Instant::now();
        stats.record(KeyInput::Other, KeystrokeOutcome::Ignored, now);
        stats.record(KeyInput::Char('a'), KeystrokeOutcome::Rejected, now);
        assert_eq!(stats.keystrokes(), 0);
        assert_eq!(stats.summary(now).elapsed, Duration::ZERO);
    }
}
