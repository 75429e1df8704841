use std::time::Instant;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::input::{self, Intent, KeyPress};
use crate::log;
use crate::rng::SessionRng;
use crate::scene::{Button, Layout, Overlay, Scene};
use crate::scheduler::TickScheduler;
use crate::session::{Phase, Session};
use crate::types::Difficulty;

/// An externally delivered event. The host queues these in arrival order;
/// the engine consumes them one at a time on a single thread.
#[derive(Clone, Copy, Debug)]
pub enum GameEvent {
    PointerDown { x: f32, y: f32 },
    KeyDown(KeyPress),
    Frame { now: Instant },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Eat,
    GameOver,
}

/// Fire-and-forget actions for the host. The core never waits on them and
/// keeps running if the host cannot honour one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideEffect {
    PlaySound(SoundCue),
    RequestClose,
}

/// Single-threaded dispatcher tying the pieces together: raw events go
/// through the input mapper, frame events through the tick scheduler, and
/// every handler returns the side effects it produced.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    layout: Layout,
    session: Session,
    scheduler: TickScheduler,
    rng: SessionRng,
}

impl GameEngine {
    pub fn new(config: GameConfig, rng: SessionRng, now: Instant) -> Self {
        log!("Session RNG seed: {}", rng.seed());
        // The Easy cadence is the default until a difficulty is selected; it
        // never gates anything while the menu is up.
        let scheduler = TickScheduler::new(config.tick_interval(Difficulty::Easy), now);
        Self {
            grid: config.grid(),
            layout: Layout::default(),
            session: Session::new(),
            scheduler,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        self.scheduler.interval()
    }

    #[cfg(test)]
    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn handle_event(&mut self, event: GameEvent) -> Vec<SideEffect> {
        match event {
            GameEvent::PointerDown { x, y } => {
                match input::map_pointer_down(&self.layout, self.session.phase(), x, y) {
                    Some(intent) => self.apply_intent(intent),
                    None => Vec::new(),
                }
            }
            GameEvent::KeyDown(key) => match input::map_key_down(self.session.phase(), key) {
                Some(intent) => self.apply_intent(intent),
                None => Vec::new(),
            },
            GameEvent::Frame { now } => {
                if self.scheduler.due(now) {
                    self.step()
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn apply_intent(&mut self, intent: Intent) -> Vec<SideEffect> {
        let mut effects = Vec::new();
        match intent {
            Intent::SelectDifficulty(difficulty) => {
                match self
                    .session
                    .select_difficulty(difficulty, &self.config, &mut self.rng)
                {
                    Ok(()) => self
                        .scheduler
                        .set_interval(self.config.tick_interval(difficulty)),
                    Err(e) => log!("{}", e),
                }
            }
            Intent::Turn(direction) => {
                if let Some(round) = self.session.playing_round_mut() {
                    round.snake.set_direction(direction);
                }
            }
            Intent::Restart => match self.session.restart(&self.config, &mut self.rng) {
                Ok(()) => {
                    if let Some(round) = self.session.round() {
                        self.scheduler
                            .set_interval(self.config.tick_interval(round.difficulty));
                    }
                }
                Err(e) => log!("{}", e),
            },
            Intent::BackToMenu => {
                if let Err(e) = self.session.reset_to_menu() {
                    log!("{}", e);
                }
            }
            Intent::Close => effects.push(SideEffect::RequestClose),
        }
        effects
    }

    /// One simulation step: move, then boundary test, then eat test, then
    /// self-collision test. Runs only while a round is being played.
    fn step(&mut self) -> Vec<SideEffect> {
        let mut effects = Vec::new();

        let head = match self.session.playing_round_mut() {
            Some(round) => {
                round.snake.advance();
                round.snake.head()
            }
            None => return effects,
        };

        if !self.grid.contains(head) {
            self.finish_round(&mut effects);
            return effects;
        }

        if self.session.round().is_some_and(|r| r.food.is_hit(head)) {
            match self.session.record_hit(&self.config, &mut self.rng) {
                Ok(()) => effects.push(SideEffect::PlaySound(SoundCue::Eat)),
                Err(e) => log!("{}", e),
            }
        }

        if self.session.round().is_some_and(|r| r.snake.hit_itself()) {
            self.finish_round(&mut effects);
        }

        effects
    }

    fn finish_round(&mut self, effects: &mut Vec<SideEffect>) {
        match self.session.end_game() {
            Ok(()) => effects.push(SideEffect::PlaySound(SoundCue::GameOver)),
            Err(e) => log!("{}", e),
        }
    }

    /// Renderable description of the current frame.
    pub fn scene(&self) -> Scene {
        let (snake, food, score) = match self.session.round() {
            Some(round) => (
                round.snake.cells().collect(),
                Some(round.food.position()),
                round.score,
            ),
            None => (Vec::new(), None, 0),
        };

        let overlay = match self.session.phase() {
            Phase::MenuSelecting => Some(Overlay::Menu {
                title: "Select Difficulty:",
                easy: Button {
                    rect: self.layout.menu_easy,
                    label: "Easy",
                },
                hard: Button {
                    rect: self.layout.menu_hard,
                    label: "Hard",
                },
            }),
            Phase::Playing(_) => None,
            Phase::GameOver(_) => Some(Overlay::GameOver {
                panel: self.layout.game_over_panel,
                restart: Button {
                    rect: self.layout.restart,
                    label: "Restart",
                },
                close: Button {
                    rect: self.layout.close,
                    label: "Close game",
                },
            }),
        };

        Scene {
            cell_size: self.config.cell_size,
            snake,
            food,
            score,
            record: self.session.record(),
            overlay,
        }
    }
}
