use crate::config::GameConfig;
use crate::food::Food;
use crate::log;
use crate::rng::SessionRng;
use crate::snake::Snake;
use crate::types::Difficulty;

/// High-level mode of the session. Per-round state lives inside the variant,
/// so a round can only exist while one is actually in progress;
/// `GameOver` keeps the final round for the overlay (frozen snake, score).
#[derive(Clone, Debug)]
pub enum Phase {
    MenuSelecting,
    Playing(Round),
    GameOver(Round),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::MenuSelecting => "MenuSelecting",
            Phase::Playing(_) => "Playing",
            Phase::GameOver(_) => "GameOver",
        }
    }
}

/// State recreated on every (re)start: the snake, the food, the score and
/// the difficulty chosen for this round.
#[derive(Clone, Debug)]
pub struct Round {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub difficulty: Difficulty,
}

impl Round {
    fn new(difficulty: Difficulty, config: &GameConfig, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(&config.initial_body, config.initial_direction);
        let food = Food::spawn(rng, &config.grid(), &snake.occupied_cells());
        Self {
            snake,
            food,
            score: 0,
            difficulty,
        }
    }
}

/// The session state machine. Lives for the whole process and owns the
/// record, which survives every round reset; everything else is recreated
/// per round.
///
/// Transitions called in the wrong phase are contract violations of the
/// core's own control flow: they return `Err` and leave the state untouched.
#[derive(Clone, Debug)]
pub struct Session {
    phase: Phase,
    record: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::MenuSelecting,
            record: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Highest score reached across all rounds of this process.
    pub fn record(&self) -> u32 {
        self.record
    }

    pub fn score(&self) -> u32 {
        match &self.phase {
            Phase::MenuSelecting => 0,
            Phase::Playing(round) | Phase::GameOver(round) => round.score,
        }
    }

    /// The round being played or shown on the game-over screen.
    pub fn round(&self) -> Option<&Round> {
        match &self.phase {
            Phase::MenuSelecting => None,
            Phase::Playing(round) | Phase::GameOver(round) => Some(round),
        }
    }

    /// Mutable access to the round, only while actually playing.
    pub fn playing_round_mut(&mut self) -> Option<&mut Round> {
        match &mut self.phase {
            Phase::Playing(round) => Some(round),
            _ => None,
        }
    }

    /// Menu choice: fixes the difficulty and starts a fresh round.
    pub fn select_difficulty(
        &mut self,
        difficulty: Difficulty,
        config: &GameConfig,
        rng: &mut SessionRng,
    ) -> Result<(), String> {
        match &self.phase {
            Phase::MenuSelecting => {
                log!("Starting round with difficulty {:?}", difficulty);
                self.phase = Phase::Playing(Round::new(difficulty, config, rng));
                Ok(())
            }
            other => Err(format!(
                "select_difficulty is only valid in MenuSelecting (phase: {})",
                other.name()
            )),
        }
    }

    /// The snake ate the food: bump the score, keep the record in step and
    /// respawn the food away from the (about to grow) body.
    pub fn record_hit(&mut self, config: &GameConfig, rng: &mut SessionRng) -> Result<(), String> {
        match &mut self.phase {
            Phase::Playing(round) => {
                round.score += 1;
                if round.score > self.record {
                    self.record = round.score;
                }
                round.snake.grow();
                let occupied = round.snake.occupied_cells();
                round.food.respawn(rng, &config.grid(), &occupied);
                log!("Score: {} (record: {})", round.score, self.record);
                Ok(())
            }
            other => Err(format!(
                "record_hit is only valid while Playing (phase: {})",
                other.name()
            )),
        }
    }

    /// Ends the round after a boundary or self collision. The snake stops
    /// permanently; the finished round stays visible behind the overlay.
    pub fn end_game(&mut self) -> Result<(), String> {
        match std::mem::replace(&mut self.phase, Phase::MenuSelecting) {
            Phase::Playing(mut round) => {
                round.snake.stop();
                log!(
                    "Game over with score {} (record: {})",
                    round.score,
                    self.record
                );
                self.phase = Phase::GameOver(round);
                Ok(())
            }
            other => {
                let name = other.name();
                self.phase = other;
                Err(format!(
                    "end_game is only valid while Playing (phase: {})",
                    name
                ))
            }
        }
    }

    /// Quick restart from the game-over screen: a fresh round with the same
    /// difficulty, exactly as if that difficulty had just been selected.
    pub fn restart(&mut self, config: &GameConfig, rng: &mut SessionRng) -> Result<(), String> {
        match &self.phase {
            Phase::GameOver(round) => {
                let difficulty = round.difficulty;
                log!("Restarting round with difficulty {:?}", difficulty);
                self.phase = Phase::Playing(Round::new(difficulty, config, rng));
                Ok(())
            }
            other => Err(format!(
                "restart is only valid in GameOver (phase: {})",
                other.name()
            )),
        }
    }

    /// Full reset variant: clears the chosen difficulty and returns to the
    /// menu. The record is deliberately kept.
    pub fn reset_to_menu(&mut self) -> Result<(), String> {
        match &self.phase {
            Phase::GameOver(_) => {
                log!("Returning to difficulty selection");
                self.phase = Phase::MenuSelecting;
                Ok(())
            }
            other => Err(format!(
                "reset_to_menu is only valid in GameOver (phase: {})",
                other.name()
            )),
        }
    }
}
