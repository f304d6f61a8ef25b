mod constants;
mod game_state;
mod level;
mod snake;

pub mod util;

pub use constants::*;
pub use game_state::*;
pub use level::*;
pub use snake::*;
pub use util::PseudoRandom;
