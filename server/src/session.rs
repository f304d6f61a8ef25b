use anyhow::Result;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use tracing::debug;

use engine::{Direction, GameConfig, GameState, StepResult};

use crate::render::frame::FrameRenderer;
use crate::render::standard_renderer::StandardRenderer;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Refresh to restart.";

/// Everything the page needs to display one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FramePayload {
    pub running: bool,
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub caption: String,
    pub message: Option<String>,
    /// Current frame as a base64-encoded PNG, ready for a data URI.
    pub image: String,
}

/// One game session: the engine state plus the renderer that turns it into
/// frames. The HTTP layer owns the session for the lifetime of the process.
pub struct GameSession {
    state: GameState,
    config: GameConfig,
    renderer: FrameRenderer<StandardRenderer>,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let state = GameState::new(config.clone(), seed)?;
        Ok(Self {
            state,
            config,
            renderer: FrameRenderer::new(StandardRenderer),
        })
    }

    /// Advance the simulation one step and produce the resulting frame.
    pub fn step(&mut self, direction: Option<Direction>) -> Result<FramePayload> {
        let result = self.state.step(direction);
        if result == StepResult::GameOver {
            debug!("session is terminal at score {}", self.state.score);
        }
        self.payload()
    }

    /// Reinitialize all state from scratch; the only way back from terminal.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        self.state = GameState::new(self.config.clone(), seed)?;
        Ok(())
    }

    pub fn payload(&self) -> Result<FramePayload> {
        let png = self.frame_png()?;
        Ok(FramePayload {
            running: self.state.running,
            score: self.state.score,
            level: self.state.level,
            speed: self.state.speed,
            caption: self.renderer.caption(&self.state),
            message: (!self.state.running).then(|| GAME_OVER_MESSAGE.to_string()),
            image: general_purpose::STANDARD.encode(&png),
        })
    }

    pub fn frame_png(&self) -> Result<Vec<u8>> {
        self.renderer.render(&self.state).to_png()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
