//! Error types for body creation.

use std::fmt;

/// Reasons a body can not be created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// Mass is zero, negative or not a finite number.
    InvalidMass(f64),
    /// Density is zero, negative or not a finite number.
    InvalidDensity(f64),
    /// Position or velocity has a NaN or infinite component.
    NonFinite,
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::InvalidMass(m) => write!(f, "Invalid body mass {}, must be finite and positive", m),
            BodyError::InvalidDensity(d) => write!(f, "Invalid body density {}, must be finite and positive", d),
            BodyError::NonFinite => write!(f, "Body position and velocity must be finite"),
        }
    }
}

impl std::error::Error for BodyError {}
