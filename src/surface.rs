// Presentation surface: the element whose style holds the dodger's offset

use crate::style::format_pixels;

/// An element exposing a writable horizontal offset in pixel style form.
///
/// The surface owns the coordinate. Controllers read it back on every call
/// and never keep their own copy.
pub trait PresentationSurface {
    /// Current `left` style value, e.g. `"120px"`
    fn left(&self) -> &str;

    /// Replaces the `left` style value
    fn set_left(&mut self, value: String);
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for &mut S {
    fn left(&self) -> &str {
        (**self).left()
    }

    fn set_left(&mut self, value: String) {
        (**self).set_left(value)
    }
}

/// In-memory element style, standing in for a page element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStyle {
    pub id: String,
    left: String,
}

impl ElementStyle {
    /// Creates an element with a raw `left` value, valid or not
    pub fn new(id: impl Into<String>, left: impl Into<String>) -> Self {
        ElementStyle {
            id: id.into(),
            left: left.into(),
        }
    }

    /// Creates an element positioned at `coordinate` pixels from the left edge
    pub fn at(id: impl Into<String>, coordinate: i32) -> Self {
        Self::new(id, format_pixels(coordinate))
    }
}

impl PresentationSurface for ElementStyle {
    fn left(&self) -> &str {
        &self.left
    }

    fn set_left(&mut self, value: String) {
        log::trace!(target: "surface", "#{} left: {} -> {}", self.id, self.left, value);
        self.left = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_style_at() {
        let element = ElementStyle::at("dodger", 180);
        assert_eq!(element.id, "dodger");
        assert_eq!(element.left(), "180px");
    }

    fn overwrite<S: PresentationSurface>(mut surface: S, value: &str) {
        surface.set_left(value.to_string());
    }

    #[test]
    fn test_borrowed_surface_writes_through() {
        let mut element = ElementStyle::new("dodger", "10px");
        overwrite(&mut element, "11px");
        assert_eq!(element.left(), "11px");
    }
}
