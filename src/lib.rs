// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod stats;
pub mod tui;
pub mod view;
pub mod word_bank;

pub use crate::core::converter::{RomanizationEngine, Script};
pub use crate::core::engine::TrainerEngine;
pub use crate::core::session::{KeyInput, KeystrokeOutcome, Session};
pub use crate::core::types::{CharacterState, TargetCharacter, Word};
pub use crate::error::{Result, TrainerError};
