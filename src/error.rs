// Style errors: failures reading a pixel offset back from the surface

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while decoding a pixel style value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Style value is empty")]
    Empty,
    #[error("Style value '{value}' is missing the px unit")]
    MissingUnit { value: String },
    #[error("Style value '{value}' is not an integer pixel offset")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
