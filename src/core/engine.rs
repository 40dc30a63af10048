use crate::core::converter::RomanizationEngine;
use crate::core::session::{KeyInput, KeystrokeOutcome, Session};
use crate::stats::{SessionStats, StatsSummary};
use crate::view::{self, Frame};
use log::{debug, info, warn};
use std::time::Instant;

// The trainer engine composes the session with the converter and the
// statistics; it is the only thing that mutates the session during play.
pub struct TrainerEngine {
    session: Session,
    converter: RomanizationEngine,
    stats: SessionStats,
}

impl TrainerEngine {
    pub fn new(session: Session, converter: RomanizationEngine) -> Self {
        Self {
            session,
            converter,
            stats: SessionStats::new(),
        }
    }

    pub fn apply_keystroke(&mut self, key: KeyInput) -> KeystrokeOutcome {
        self.apply_keystroke_at(key, Instant::now())
    }

    /// Same as `apply_keystroke`, with the timestamp used for statistics.
    pub fn apply_keystroke_at(&mut self, key: KeyInput, now: Instant) -> KeystrokeOutcome {
        let active_index = self.session.active_index();
        let outcome = self.session.apply_keystroke(key, &self.converter);
        self.stats.record(key, outcome, now);

        match outcome {
            KeystrokeOutcome::Overtyped { excess } => warn!(
                "input {:?} overtyped word {} by {} character(s)",
                self.session.input_buffer(),
                active_index,
                excess
            ),
            KeystrokeOutcome::WordCompleted { index } => {
                info!("completed word {} of {}", index + 1, self.session.words().len())
            }
            KeystrokeOutcome::Finished => info!(
                "session finished: {} words, {} keystrokes",
                self.stats.words_completed(),
                self.stats.keystrokes()
            ),
            _ => debug!("{:?} -> {:?}", key, outcome),
        }
        outcome
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn converter(&self) -> &RomanizationEngine {
        &self.converter
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn frame(&self) -> Frame {
        view::project(&self.session, &self.converter)
    }

    pub fn take_redraw(&mut self) -> bool {
        self.session.take_redraw()
    }

    pub fn summary(&self) -> StatsSummary {
        self.stats.summary(Instant::now())
    }
}
