mod color_mode;
mod error;
mod input_mode;

pub use color_mode::ColorMode;
pub use error::EngineError;
pub use input_mode::InputMode;
