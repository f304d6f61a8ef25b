pub mod frame;
pub mod standard_renderer;
pub mod traits;
pub mod types;
