use engine::GameMode;

use super::types::Rgb;

pub trait GameObjectRenderer {
    fn background(&self, mode: GameMode, level: u32) -> Rgb;

    fn snake_segment(&self, is_head: bool) -> Rgb;

    fn food(&self) -> Rgb;

    fn obstacle(&self) -> Rgb;
}
