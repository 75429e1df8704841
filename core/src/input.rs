use crate::scene::Layout;
use crate::session::Phase;
use crate::types::{Difficulty, Direction};

/// A key the host forwards to the core. Anything else is dropped at the
/// host boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Direction(Direction),
    Escape,
}

/// What a raw input event means in the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    SelectDifficulty(Difficulty),
    Turn(Direction),
    Restart,
    BackToMenu,
    Close,
}

/// Maps a pointer-down at pixel coordinates to an intent. Clicks outside the
/// active regions, and any click during play, are ignored.
pub fn map_pointer_down(layout: &Layout, phase: &Phase, x: f32, y: f32) -> Option<Intent> {
    match phase {
        Phase::MenuSelecting => {
            if layout.menu_easy.contains(x, y) {
                Some(Intent::SelectDifficulty(Difficulty::Easy))
            } else if layout.menu_hard.contains(x, y) {
                Some(Intent::SelectDifficulty(Difficulty::Hard))
            } else {
                None
            }
        }
        Phase::Playing(_) => None,
        Phase::GameOver(_) => {
            if layout.restart.contains(x, y) {
                Some(Intent::Restart)
            } else if layout.close.contains(x, y) {
                Some(Intent::Close)
            } else {
                None
            }
        }
    }
}

/// Maps a key-down to an intent. Direction keys only steer during play;
/// Escape on the game-over screen is the full reset back to the menu.
pub fn map_key_down(phase: &Phase, key: KeyPress) -> Option<Intent> {
    match (phase, key) {
        (Phase::Playing(_), KeyPress::Direction(direction)) => Some(Intent::Turn(direction)),
        (Phase::GameOver(_), KeyPress::Escape) => Some(Intent::BackToMenu),
        _ => None,
    }
}
