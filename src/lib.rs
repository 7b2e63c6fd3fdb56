pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod style;
pub mod surface;

pub use controller::PositionController;
pub use error::StyleError;
pub use surface::{ElementStyle, PresentationSurface};
