use engine::GameMode;

use super::traits::GameObjectRenderer;
use super::types::Rgb;

pub const BLACK: Rgb = [0, 0, 0];
pub const GREEN: Rgb = [0, 255, 0];
pub const DARK_GREEN: Rgb = [0, 200, 0];
pub const RED: Rgb = [255, 0, 0];
pub const BLUE: Rgb = [0, 0, 255];

/// Leveled-mode backgrounds, cycled by level.
pub const LEVEL_BACKGROUNDS: [Rgb; 4] = [
    BLACK,
    [0, 0, 60],
    [0, 50, 40],
    [60, 20, 20],
];

pub struct StandardRenderer;

impl GameObjectRenderer for StandardRenderer {
    fn background(&self, mode: GameMode, level: u32) -> Rgb {
        match mode {
            GameMode::Classic => BLACK,
            GameMode::Leveled => {
                let idx = level.saturating_sub(1) as usize % LEVEL_BACKGROUNDS.len();
                LEVEL_BACKGROUNDS[idx]
            }
        }
    }

    fn snake_segment(&self, is_head: bool) -> Rgb {
        // Bright head, darker body
        if is_head {
            GREEN
        } else {
            DARK_GREEN
        }
    }

    fn food(&self) -> Rgb {
        RED
    }

    fn obstacle(&self) -> Rgb {
        BLUE
    }
}
