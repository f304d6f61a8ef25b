use std::collections::{HashSet, VecDeque};

use anyhow::{bail, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, FOOD_REWARD};
use crate::level::LevelPolicy;
use crate::snake::{Direction, Position, Snake};
use crate::util::PseudoRandom;

const DEFAULT_SNAKE_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// No obstacles, constant speed; the level is cosmetic.
    Classic,
    /// Level drives speed, obstacle count, and the background color.
    Leveled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub mode: GameMode,
    pub policy: LevelPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            mode: GameMode::Classic,
            policy: LevelPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.width <= 0 || self.height <= 0 {
            bail!("playfield must be positive, got {}x{}", self.width, self.height);
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            bail!(
                "cell size {} must evenly divide the {}x{} playfield",
                self.cell_size,
                self.width,
                self.height
            );
        }
        if self.columns() < 4 || self.rows() < 2 {
            bail!(
                "playfield of {}x{} cells is too small for the starting snake",
                self.columns(),
                self.rows()
            );
        }
        Ok(())
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }
}

/// Outcome of one step. Collisions are a normal terminal transition,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    Continued,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub snake: Snake,
    pub food: Position,
    pub obstacles: HashSet<Position>,
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub running: bool,

    #[serde(skip)]
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        // Head at the center cell, body trailing left, heading right.
        let cell = config.cell_size;
        let head = Position {
            x: config.columns() / 2 * cell,
            y: config.rows() / 2 * cell,
        };
        let body: VecDeque<Position> = (0..DEFAULT_SNAKE_LENGTH as i32)
            .map(|i| Position { x: head.x - i * cell, y: head.y })
            .collect();

        let level = config.policy.level_for(0);
        let speed = config.policy.speed_for(level);

        let mut state = GameState {
            snake: Snake {
                body,
                direction: Direction::Right,
            },
            food: head,
            obstacles: HashSet::new(),
            score: 0,
            level,
            speed,
            running: true,
            rng: PseudoRandom::new(seed),
            config,
        };

        if state.config.mode == GameMode::Leveled {
            state.regenerate_obstacles();
        }
        state.spawn_food();
        Ok(state)
    }

    /// Advance the simulation by one step. The requested direction is ignored
    /// when it reverses the current one; everything else about an invalid
    /// input is silently dropped. Once terminal, this is a no-op.
    pub fn step(&mut self, requested: Option<Direction>) -> StepResult {
        if !self.running {
            return StepResult::GameOver;
        }

        if let Some(direction) = requested {
            if direction != self.snake.direction.opposite() {
                self.snake.direction = direction;
            }
        }

        let level = self.config.policy.level_for(self.score);
        if level != self.level {
            self.level = level;
            if self.config.mode == GameMode::Leveled {
                self.speed = self.config.policy.speed_for(level);
                self.regenerate_obstacles();
                debug!("advanced to level {} at speed {}", self.level, self.speed);
            }
        }

        let new_head = self
            .snake
            .direction
            .next_position(self.snake.head(), self.config.cell_size);

        if !self.in_bounds(new_head) {
            debug!("hit the wall at {:?}", new_head);
            self.running = false;
            return StepResult::GameOver;
        }

        if self.config.mode == GameMode::Leveled && self.obstacles.contains(&new_head) {
            debug!("hit an obstacle at {:?}", new_head);
            self.running = false;
            return StepResult::GameOver;
        }

        // The tail cell vacates this step unless the snake grows into it.
        let grows = new_head == self.food;
        let occupied_after_move = self.snake.body.len() - usize::from(!grows);
        if self
            .snake
            .body
            .iter()
            .take(occupied_after_move)
            .any(|&p| p == new_head)
        {
            debug!("ran into itself at {:?}", new_head);
            self.running = false;
            return StepResult::GameOver;
        }

        self.snake.body.push_front(new_head);

        if grows {
            self.score += FOOD_REWARD;
            debug!("ate food at {:?}, score {}", new_head, self.score);
            self.spawn_food();
        } else {
            self.snake.body.pop_back();
        }

        StepResult::Continued
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.config.width && pos.y >= 0 && pos.y < self.config.height
    }

    /// Grid cells occupied by neither the snake nor the obstacles,
    /// optionally excluding one more position.
    fn free_cells(&self, exclude: Option<Position>) -> Vec<Position> {
        let cell = self.config.cell_size;
        let mut cells = Vec::new();
        for row in 0..self.config.rows() {
            for col in 0..self.config.columns() {
                let pos = Position { x: col * cell, y: row * cell };
                if self.snake.contains(pos) || self.obstacles.contains(&pos) {
                    continue;
                }
                if exclude == Some(pos) {
                    continue;
                }
                cells.push(pos);
            }
        }
        cells
    }

    /// Place the food uniformly on a free cell.
    fn spawn_food(&mut self) {
        let candidates = self.free_cells(None);
        if candidates.is_empty() {
            warn!("no free cell left to spawn food");
            return;
        }
        self.food = candidates[self.rng.next_index(candidates.len())];
        debug!("food spawned at {:?}", self.food);
    }

    /// Replace the obstacle set with the current level's count, drawn
    /// uniformly from cells not occupied by the snake or the food.
    fn regenerate_obstacles(&mut self) {
        self.obstacles.clear();
        let target = self.config.policy.obstacle_count_for(self.level);
        let mut candidates = self.free_cells(Some(self.food));
        for _ in 0..target {
            if candidates.is_empty() {
                warn!("ran out of free cells while placing obstacles");
                break;
            }
            let pos = candidates.swap_remove(self.rng.next_index(candidates.len()));
            self.obstacles.insert(pos);
        }
    }
}
