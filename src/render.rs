use crate::config::{
    DODGER_HEIGHT, DODGER_WIDTH, FONT_SIZE, STATUS_BAR_HEIGHT, TRACK_HEIGHT, TRACK_WIDTH,
    WINDOW_WIDTH,
};
use crate::style::parse_pixels;
use crate::surface::PresentationSurface;
use macroquad::prelude::*;

const TRACK_COLOR: Color = Color::new(0.08, 0.08, 0.12, 1.0);
const DODGER_COLOR: Color = Color::new(1.0, 0.27, 0.27, 1.0);
const STATUS_COLOR: Color = LIGHTGRAY;
const ERROR_COLOR: Color = RED;

/// Window pixels per track pixel; the track is scaled to the window width
pub fn track_scale() -> f32 {
    WINDOW_WIDTH as f32 / TRACK_WIDTH as f32
}

/// Maps a track offset to a horizontal window position
pub fn track_to_screen(coordinate: i32) -> f32 {
    coordinate as f32 * track_scale()
}

// Draws the track and the dodger exactly where the surface style places it
pub struct Renderer {
    scale: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            scale: track_scale(),
        }
    }

    pub fn draw_frame<S: PresentationSurface>(&self, surface: &S) {
        clear_background(BLACK);

        let track_w = TRACK_WIDTH as f32 * self.scale;
        let track_h = TRACK_HEIGHT as f32 * self.scale;
        draw_rectangle(0.0, 0.0, track_w, track_h, TRACK_COLOR);

        let status_y = track_h + STATUS_BAR_HEIGHT as f32 * 0.6;
        match parse_pixels(surface.left()) {
            Ok(coordinate) => {
                let x = track_to_screen(coordinate);
                let y = (TRACK_HEIGHT - DODGER_HEIGHT) as f32 * self.scale;
                draw_rectangle(
                    x,
                    y,
                    DODGER_WIDTH as f32 * self.scale,
                    DODGER_HEIGHT as f32 * self.scale,
                    DODGER_COLOR,
                );
                draw_text(
                    &format!("left: {}", surface.left()),
                    10.0,
                    status_y,
                    FONT_SIZE,
                    STATUS_COLOR,
                );
            }
            Err(e) => {
                draw_text(&format!("error: {}", e), 10.0, status_y, FONT_SIZE, ERROR_COLOR);
            }
        }
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}
