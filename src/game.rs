use crate::config;
use crate::controller::PositionController;
use crate::error::StyleError;
use crate::input::{KeyEvents, direction_for_key, dispatch};
use crate::render::Renderer;
use crate::surface::{ElementStyle, PresentationSurface};
use log::{error, info};
use macroquad::prelude::{KeyCode, next_frame};

/// The Game struct hosts the dodger element and the controller that moves it
pub struct Game {
    pub controller: PositionController<ElementStyle>,
    pub moves: u64,
}

impl Game {
    /// Create a new game with the dodger placed `start_left` pixels from the left edge
    pub fn new(start_left: i32) -> Self {
        let dodger = ElementStyle::at(config::DODGER_ELEMENT_ID, start_left);
        info!(
            "Dodger '{}' placed at {} on a {}px track (max offset {}).",
            dodger.id,
            dodger.left(),
            config::TRACK_WIDTH,
            config::MAX_LEFT
        );

        Game {
            controller: PositionController::new(dodger),
            moves: 0,
        }
    }

    /// Dispatch one controller operation per bound key.
    ///
    /// Unbound keys are skipped. The first parse error stops processing and is returned.
    pub fn apply_keys<I>(&mut self, keys: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = KeyCode>,
    {
        for key in keys {
            if let Some(direction) = direction_for_key(key) {
                dispatch(&mut self.controller, direction)?;
                self.moves += 1;
            }
        }
        Ok(())
    }

    /// Run the main game loop using the provided renderer
    pub async fn run(&mut self, renderer: &mut Renderer) -> Result<(), StyleError> {
        info!("Starting main loop...");
        let mut key_events = KeyEvents::new();

        while !Renderer::window_should_close() {
            if let Err(e) = self.apply_keys(key_events.drain()) {
                error!(
                    "Dodger style '{}' could not be read: {}",
                    self.controller.surface().left(),
                    e
                );
                return Err(e);
            }

            renderer.draw_frame(self.controller.surface());
            next_frame().await;
        }

        info!(
            "Exiting after {} moves, dodger at {}.",
            self.moves,
            self.controller.surface().left()
        );
        Ok(())
    }
}
