use crate::core::converter::RomanizationEngine;
use crate::core::matcher::recompute_states;
use crate::core::types::Word;
use crate::error::{Result, TrainerError};
use log::debug;
use rand::Rng;

/// A keystroke as seen by the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable romaji character, appended to the input buffer.
    Char(char),
    /// Removes the last buffered character.
    Backspace,
    /// Any other control key. The state machine ignores these.
    Other,
}

/// What a keystroke did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeystrokeOutcome {
    /// Nothing changed: a control key, or backspace on an empty buffer.
    Ignored,
    /// The active word's states were recomputed.
    Updated { cursor: Option<usize> },
    /// The transliteration ran past the end of the active word; the extra
    /// characters were ignored.
    Overtyped { excess: usize },
    /// The word at `index` was completed and the next one is now active.
    WordCompleted { index: usize },
    /// The last word was completed. The session accepts no further input.
    Finished,
    /// The session had already finished.
    Rejected,
}

/// One practice run: a fixed list of words typed in order.
#[derive(Debug, Clone)]
pub struct Session {
    word_bank: Vec<String>,
    words: Vec<Word>,
    active_index: usize,
    input_buffer: String,
    needs_redraw: bool,
}

impl Session {
    /// Samples `count` words with replacement from `word_bank` and activates
    /// the first one.
    pub fn generate<R: Rng>(
        mut word_bank: Vec<String>,
        count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        word_bank.retain(|word| !word.is_empty());
        if word_bank.is_empty() {
            return Err(TrainerError::EmptyWordBank);
        }
        if count == 0 {
            return Err(TrainerError::InvalidSessionLength);
        }

        let words: Vec<Word> = (0..count)
            .map(|_| Word::new(&word_bank[rng.gen_range(0..word_bank.len())]))
            .collect();
        debug!(
            "generated session of {} words from a bank of {}",
            words.len(),
            word_bank.len()
        );

        let mut session = Self {
            word_bank,
            words,
            active_index: 0,
            input_buffer: String::new(),
            needs_redraw: true,
        };
        if let Some(first) = session.words.first_mut() {
            first.activate();
        }
        Ok(session)
    }

    /// Feeds one keystroke through the match state machine.
    pub fn apply_keystroke(
        &mut self,
        key: KeyInput,
        converter: &RomanizationEngine,
    ) -> KeystrokeOutcome {
        if self.is_finished() {
            return KeystrokeOutcome::Rejected;
        }

        match key {
            KeyInput::Char(c) => self.input_buffer.push(c),
            KeyInput::Backspace => {
                if self.input_buffer.pop().is_none() {
                    return KeystrokeOutcome::Ignored;
                }
            }
            KeyInput::Other => return KeystrokeOutcome::Ignored,
        }

        let transliterated = converter.transliterate(&self.input_buffer);
        let index = self.active_index;
        let word = &mut self.words[index];

        if transliterated == word.text() {
            word.complete();
            self.input_buffer.clear();
            self.active_index += 1;
            self.needs_redraw = true;

            return match self.words.get_mut(self.active_index) {
                Some(next) => {
                    next.activate();
                    KeystrokeOutcome::WordCompleted { index }
                }
                None => KeystrokeOutcome::Finished,
            };
        }

        let before = word.states();
        let scan = recompute_states(word, &transliterated);
        if word.states() != before {
            self.needs_redraw = true;
        }

        if scan.excess > 0 {
            KeystrokeOutcome::Overtyped {
                excess: scan.excess,
            }
        } else {
            KeystrokeOutcome::Updated {
                cursor: scan.cursor,
            }
        }
    }

    pub fn word_bank(&self) -> &[String] {
        &self.word_bank
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Index of the active word, equal to `words().len()` once finished.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_word(&self) -> Option<&Word> {
        self.words.get(self.active_index)
    }

    /// Raw romaji typed so far for the active word.
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn is_finished(&self) -> bool {
        self.active_index >= self.words.len()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns the redraw flag and clears it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
