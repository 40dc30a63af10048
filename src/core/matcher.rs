//! Per-character verdicts for the active word.

use crate::core::converter::is_kana;
use crate::core::types::{CharacterState, Word};

/// Result of re-deriving a word's character states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScan {
    /// Position of the match cursor, `None` when every character is confirmed
    /// or the scan stopped on an incorrect one.
    pub cursor: Option<usize>,
    /// Number of transliterated characters beyond the end of the target.
    pub excess: usize,
}

/// Recompute every character state of `word` from `transliterated`.
///
/// States are always rebuilt from index 0, so the outcome depends only on the
/// target and the current transliteration, never on earlier keystrokes.
pub fn recompute_states(word: &mut Word, transliterated: &str) -> MatchScan {
    let typed: Vec<char> = transliterated.chars().collect();
    let excess = typed.len().saturating_sub(word.len());
    let characters = word.characters_mut();

    for c in characters.iter_mut() {
        c.state = CharacterState::Inactive;
    }
    if let Some(first) = characters.first_mut() {
        first.state = CharacterState::Active;
    }

    for (i, &produced) in typed.iter().enumerate() {
        let Some(target) = characters.get_mut(i) else {
            break;
        };

        if target.script_char == produced {
            target.state = CharacterState::Confirmed;
            if let Some(next) = characters.get_mut(i + 1) {
                next.state = CharacterState::Active;
            }
        } else if is_kana(produced) {
            target.state = CharacterState::Incorrect;
            break;
        } else {
            // still romaji, no verdict yet
            target.state = CharacterState::Active;
            break;
        }
    }

    MatchScan {
        cursor: word.cursor(),
        excess,
    }
}
