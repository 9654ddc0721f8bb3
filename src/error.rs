use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failed to parse a hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorErr {
    /// Not exactly 6 hex digits after the optional '#'.
    Length(String),
    /// Some character is not a hex digit.
    Digit(String),
}

impl Display for ParseColorErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseColorErr::Length(s) => {
                write!(f, "malformed color {:?}: expected 6 hex digits", s)
            }
            ParseColorErr::Digit(s) => {
                write!(f, "malformed color {:?}: invalid hex digit", s)
            }
        }
    }
}

impl Error for ParseColorErr {}

#[derive(Debug)]
pub struct LoadPaletteErr(pub String);

impl Display for LoadPaletteErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "load palette failed: {}", self.0)
    }
}

impl Error for LoadPaletteErr {}
