// Pixel style values: "<integer>px" encoding of the dodger's offset

use crate::config::PIXEL_UNIT;
use crate::error::StyleError;

/// Parses a style value such as `"120px"` into its integer offset.
///
/// Surrounding whitespace is ignored. The unit suffix is required and the
/// remainder must be a whole number; fractional or unitless values are rejected
/// instead of being coerced.
pub fn parse_pixels(value: &str) -> Result<i32, StyleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StyleError::Empty);
    }

    let digits = trimmed
        .strip_suffix(PIXEL_UNIT)
        .ok_or_else(|| StyleError::MissingUnit {
            value: value.to_string(),
        })?;

    digits
        .parse::<i32>()
        .map_err(|source| StyleError::InvalidInteger {
            value: value.to_string(),
            source,
        })
}

/// Serializes an offset back into style form
pub fn format_pixels(coordinate: i32) -> String {
    format!("{}{}", coordinate, PIXEL_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixels() {
        assert_eq!(parse_pixels("120px"), Ok(120));
        assert_eq!(parse_pixels("0px"), Ok(0));
        assert_eq!(parse_pixels(" 360px "), Ok(360));
        assert_eq!(parse_pixels("-4px"), Ok(-4));
    }

    #[test]
    fn test_parse_pixels_rejects_garbage() {
        assert_eq!(parse_pixels(""), Err(StyleError::Empty));
        assert_eq!(parse_pixels("   "), Err(StyleError::Empty));
        assert_eq!(
            parse_pixels("120"),
            Err(StyleError::MissingUnit {
                value: "120".to_string()
            })
        );
        assert!(matches!(
            parse_pixels("px"),
            Err(StyleError::InvalidInteger { .. })
        ));
        assert!(matches!(
            parse_pixels("12.5px"),
            Err(StyleError::InvalidInteger { .. })
        ));
        assert!(matches!(
            parse_pixels("NaNpx"),
            Err(StyleError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_format_pixels() {
        assert_eq!(format_pixels(119), "119px");
        assert_eq!(format_pixels(0), "0px");
        assert_eq!(parse_pixels(&format_pixels(360)), Ok(360));
    }
}
