pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod input;
pub mod logger;
pub mod rng;
pub mod scene;
pub mod scheduler;
pub mod session;
pub mod snake;
pub mod types;

pub use config::GameConfig;
pub use engine::{GameEngine, GameEvent, SideEffect, SoundCue};
pub use input::KeyPress;
pub use scene::{Overlay, Scene};
pub use types::{Cell, Difficulty, Direction};
