use engine::GameState;

use super::traits::GameObjectRenderer;
use super::types::PixelSurface;

pub struct FrameRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> FrameRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Paint one frame: background, food, obstacles, then the snake on top.
    pub fn render(&self, state: &GameState) -> PixelSurface {
        let mut surface =
            PixelSurface::new(state.config.width as u32, state.config.height as u32);
        let cell = state.config.cell_size as u32;

        surface.fill(self.renderer.background(state.config.mode, state.level));

        surface.fill_rect(state.food.x, state.food.y, cell, cell, self.renderer.food());

        for &obstacle in &state.obstacles {
            surface.fill_rect(obstacle.x, obstacle.y, cell, cell, self.renderer.obstacle());
        }

        for (i, &segment) in state.snake.body.iter().enumerate() {
            surface.fill_rect(
                segment.x,
                segment.y,
                cell,
                cell,
                self.renderer.snake_segment(i == 0),
            );
        }

        surface
    }

    pub fn caption(&self, state: &GameState) -> String {
        format!("Score: {} | Level: {}", state.score, state.level)
    }
}
