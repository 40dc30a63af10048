//! Pure projection of a session into what the terminal shows.
//!
//! Nothing here mutates the session or caches between calls, so projecting the
//! same snapshot twice yields the same frame.

use crate::core::converter::RomanizationEngine;
use crate::core::session::Session;
use crate::core::types::{CharacterState, Word};
use crossterm::style::Stylize;

const INPUT_PROMPT: &str = "...入力：";
const FINISHED_PROMPT: &str = "...完了";

/// Display class of a single character in the active word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Plain,
    Cursor,
    Tentative,
    Incorrect,
}

/// Display class of a whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStyle {
    Untouched,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: char,
    pub style: StyleTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordView {
    pub style: WordStyle,
    pub segments: Vec<Segment>,
}

/// Everything needed to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub words: Vec<WordView>,
    /// Live transliteration of the input buffer.
    pub input: String,
    pub finished: bool,
}

pub fn style_for(state: CharacterState) -> StyleTag {
    match state {
        CharacterState::Inactive => StyleTag::Plain,
        CharacterState::Active => StyleTag::Cursor,
        CharacterState::Confirmed => StyleTag::Tentative,
        CharacterState::Incorrect => StyleTag::Incorrect,
    }
}

pub fn project(session: &Session, converter: &RomanizationEngine) -> Frame {
    Frame {
        words: session.words().iter().map(project_word).collect(),
        input: converter.transliterate(session.input_buffer()),
        finished: session.is_finished(),
    }
}

fn project_word(word: &Word) -> WordView {
    let style = if word.is_complete() {
        WordStyle::Complete
    } else if word.is_active() {
        WordStyle::InProgress
    } else {
        WordStyle::Untouched
    };

    let segments = word
        .characters()
        .iter()
        .map(|c| Segment {
            text: c.script_char,
            style: match style {
                WordStyle::InProgress => style_for(c.state),
                WordStyle::Untouched | WordStyle::Complete => StyleTag::Plain,
            },
        })
        .collect();

    WordView { style, segments }
}

impl WordView {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text).collect()
    }

    fn render(&self) -> String {
        match self.style {
            WordStyle::Complete => self.text().green().to_string(),
            WordStyle::Untouched => self.text(),
            WordStyle::InProgress => self.segments.iter().map(paint).collect(),
        }
    }
}

fn paint(segment: &Segment) -> String {
    let text = segment.text.to_string().bold();
    match segment.style {
        StyleTag::Plain => text.to_string(),
        StyleTag::Cursor => text.magenta().to_string(),
        StyleTag::Tentative => text.yellow().to_string(),
        StyleTag::Incorrect => text.red().to_string(),
    }
}

impl Frame {
    /// All session words on one line, styled with ANSI escapes.
    pub fn words_line(&self) -> String {
        self.words
            .iter()
            .map(|word| format!("  {}", word.render()))
            .collect()
    }

    /// The live input, or the completion marker once every word is typed.
    pub fn input_line(&self) -> String {
        if self.finished {
            FINISHED_PROMPT.green().to_string()
        } else {
            format!("{}{}", INPUT_PROMPT, self.input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::Script;
    use crate::core::session::KeyInput;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(count: usize) -> Session {
        Session::generate(vec!["ねこ".to_string()], count, &mut StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn test_style_for() {
        assert_eq!(style_for(CharacterState::Inactive), StyleTag::Plain);
        assert_eq!(style_for(CharacterState::Active), StyleTag::Cursor);
        assert_eq!(style_for(CharacterState::Confirmed), StyleTag::Tentative);
        assert_eq!(style_for(CharacterState::Incorrect), StyleTag::Incorrect);
    }

    #[test]
    fn test_project_word_styles() {
        let converter = RomanizationEngine::new(Script::Hiragana);
        let mut session = session(3);
        for c in "nekone".chars() {
            session.apply_keystroke(KeyInput::Char(c), &converter);
        }

        let frame = project(&session, &converter);
        let styles: Vec<_> = frame.words.iter().map(|w| w.style).collect();
        assert_eq!(
            styles,
            vec![WordStyle::Complete, WordStyle::InProgress, WordStyle::Untouched]
        );
        assert_eq!(
            frame.words[1].segments,
            vec![
                Segment { text: 'ね', style: StyleTag::Tentative },
                Segment { text: 'こ', style: StyleTag::Cursor },
            ]
        );
        assert!(frame.words[0].segments.iter().all(|s| s.style == StyleTag::Plain));
        assert_eq!(frame.input, "ね");
        assert!(!frame.finished);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let converter = RomanizationEngine::new(Script::Hiragana);
        let mut session = session(2);
        for c in "nik".chars() {
            session.apply_keystroke(KeyInput::Char(c), &converter);
        }

        let first = project(&session, &converter);
        let second = project(&session, &converter);
        assert_eq!(first, second);
        assert_eq!(first.words_line(), second.words_line());
        assert_eq!(first.input_line(), second.input_line());
    }

    #[test]
    fn test_finished_frame_shows_completion() {
        let converter = RomanizationEngine::new(Script::Hiragana);
        let mut session = session(1);
        for c in "neko".chars() {
            session.apply_keystroke(KeyInput::Char(c), &converter);
        }

        let frame = project(&session, &converter);
        assert!(frame.finished);
        assert!(frame.input_line().contains("完了"));
        assert!(!frame.input_line().contains("入力"));
    }

    #[test]
    fn test_lines_contain_text() {
        let converter = RomanizationEngine::new(Script::Hiragana);
        let frame = project(&session(2), &converter);
        assert!(frame.words_line().contains('ね'));
        assert_eq!(frame.words[1].text(), "ねこ");
        assert_eq!(frame.input_line(), "...入力：");
    }
}
