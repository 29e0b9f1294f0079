use crate::error::{Result, SandboxError};
use crate::history::History;
use crate::level::{builtin_levels, Level};
use quantum::{evolve::apply_gate, gates, goal::is_target_reached, Gate, QuantumError, StateVector};
use std::fmt;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where [`Game::next_level`] led.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Level(usize),
    Completed,
}

/// Puzzle controller: one level at a time, a move budget per level.
#[derive(Clone, Debug)]
pub struct Game {
    levels: Vec<Level>,
    index: usize,
    history: History,
    moves: usize,
    status: GameStatus,
}

impl Game {
    /// Start at the first of `levels`.
    pub fn new(levels: Vec<Level>) -> Result<Self> {
        if levels.is_empty() {
            return Err(SandboxError::EmptyLevelPack);
        }
        Ok(Self::start(levels))
    }

    pub fn builtin() -> Self {
        Self::start(builtin_levels())
    }

    fn start(levels: Vec<Level>) -> Self {
        let mut game = Self {
            levels,
            index: 0,
            history: History::new(),
            moves: 0,
            status: GameStatus::Playing,
        };
        game.evaluate();
        game
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.index]
    }

    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn moves_left(&self) -> usize {
        self.level().max_moves.saturating_sub(self.moves)
    }

    pub fn current(&self) -> &StateVector {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn apply(&mut self, name: &str) -> Result<GameStatus> {
        let gate = gates::lookup(name).ok_or_else(|| QuantumError::UnknownGate(name.to_string()))?;
        self.apply_gate(gate)
    }

    pub fn apply_gate(&mut self, gate: &'static Gate) -> Result<GameStatus> {
        if self.status != GameStatus::Playing {
            return Err(SandboxError::NotPlaying(self.status.as_str()));
        }
        let next = apply_gate(gate, self.history.current());
        self.history.push_gate(gate, next);
        self.moves += 1;
        self.evaluate();
        debug!(
            gate = gate.name,
            moves = self.moves,
            status = self.status.as_str(),
            "move"
        );
        Ok(self.status)
    }

    /// Restart the current level.
    pub fn reset(&mut self) {
        self.history.reset();
        self.moves = 0;
        self.evaluate();
    }

    /// Move on after a win. Past the last level the game is completed and
    /// stays on that level.
    pub fn next_level(&mut self) -> Result<Advance> {
        if self.status != GameStatus::Won {
            return Err(SandboxError::NotWon);
        }
        if self.index + 1 >= self.levels.len() {
            info!("all levels solved");
            return Ok(Advance::Completed);
        }
        self.index += 1;
        self.reset();
        info!(level = self.index, name = %self.level().name, "next level");
        Ok(Advance::Level(self.index))
    }

    /// Jump to a level directly, discarding progress on the current one.
    pub fn select_level(&mut self, index: usize) -> Result<()> {
        if index >= self.levels.len() {
            return Err(SandboxError::NoSuchLevel {
                index,
                count: self.levels.len(),
            });
        }
        self.index = index;
        self.reset();
        Ok(())
    }

    fn evaluate(&mut self) {
        let level = &self.levels[self.index];
        let reached = is_target_reached(self.history.current().as_slice(), level.target.as_slice());
        self.status = if reached {
            GameStatus::Won
        } else if self.moves >= level.max_moves {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
    }
}
