// src/core/types.rs

/// Verdict on a single target character. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterState {
    /// Not yet reachable by the match cursor.
    Inactive,
    /// The match cursor: the first character without a verdict.
    Active,
    /// Matched by the transliterated input so far.
    Confirmed,
    /// The transliterated input has a different, concrete kana here.
    Incorrect,
}

/// One kana of a target word together with its current verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCharacter {
    pub script_char: char,
    pub state: CharacterState,
}

/// A target word in a session.
///
/// The character sequence is fixed at creation; only the per-character states
/// and the two flags change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    characters: Vec<TargetCharacter>,
    is_active: bool,
    is_complete: bool,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Self {
            characters: text
                .chars()
                .map(|script_char| TargetCharacter {
                    script_char,
                    state: CharacterState::Inactive,
                })
                .collect(),
            is_active: false,
            is_complete: false,
        }
    }

    pub fn characters(&self) -> &[TargetCharacter] {
        &self.characters
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The full target string.
    pub fn text(&self) -> String {
        self.characters.iter().map(|c| c.script_char).collect()
    }

    pub fn states(&self) -> Vec<CharacterState> {
        self.characters.iter().map(|c| c.state).collect()
    }

    /// Index of the character holding the match cursor, if any.
    pub fn cursor(&self) -> Option<usize> {
        self.characters
            .iter()
            .position(|c| c.state == CharacterState::Active)
    }

    pub(crate) fn characters_mut(&mut self) -> &mut [TargetCharacter] {
        &mut self.characters
    }

    pub(crate) fn activate(&mut self) {
        self.is_active = true;
        if let Some(first) = self.characters.first_mut() {
            first.state = CharacterState::Active;
        }
    }

    pub(crate) fn complete(&mut self) {
        for c in &mut self.characters {
            c.state = CharacterState::Confirmed;
        }
        self.is_active = false;
        self.is_complete = true;
    }
}
