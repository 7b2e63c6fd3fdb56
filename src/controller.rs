// Position controller: bounded unit-step movement of the dodger along the track

use crate::config;
use crate::error::StyleError;
use crate::style::{format_pixels, parse_pixels};
use crate::surface::PresentationSurface;

/// One step toward the left edge; no-op at 0
pub fn step_left(coordinate: i32) -> i32 {
    if coordinate > 0 {
        coordinate - config::STEP_PX
    } else {
        coordinate
    }
}

/// One step toward the right edge; no-op at `max`
pub fn step_right(coordinate: i32, max: i32) -> i32 {
    if coordinate < max {
        coordinate + config::STEP_PX
    } else {
        coordinate
    }
}

/// Moves the element held by an injected surface within `[0, max]`.
///
/// Both directions read and write the surface's single `left` offset, so
/// there is exactly one coordinate regardless of which key drove the change.
#[derive(Debug)]
pub struct PositionController<S: PresentationSurface> {
    surface: S,
    max: i32,
}

impl<S: PresentationSurface> PositionController<S> {
    /// Creates a controller bounded by the track's rightmost offset
    pub fn new(surface: S) -> Self {
        Self::with_max(surface, config::MAX_LEFT)
    }

    pub fn with_max(surface: S, max: i32) -> Self {
        PositionController { surface, max }
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Reads the current coordinate from the surface
    pub fn position(&self) -> Result<i32, StyleError> {
        parse_pixels(self.surface.left())
    }

    /// Moves one step left and returns the resulting coordinate
    pub fn move_left(&mut self) -> Result<i32, StyleError> {
        let current = self.position()?;
        let next = step_left(current);
        crate::debug_controller!("move_left: {} -> {}", current, next);
        self.write(next);
        Ok(next)
    }

    /// Moves one step right and returns the resulting coordinate
    pub fn move_right(&mut self) -> Result<i32, StyleError> {
        let current = self.position()?;
        let next = step_right(current, self.max);
        crate::debug_controller!("move_right: {} -> {} (max {})", current, next, self.max);
        self.write(next);
        Ok(next)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn write(&mut self, coordinate: i32) {
        self.surface.set_left(format_pixels(coordinate));
    }
}
