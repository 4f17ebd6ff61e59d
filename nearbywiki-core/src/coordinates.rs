use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why user-supplied coordinate text was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("{axis} is empty")]
    Empty { axis: Axis },

    #[error("{axis} '{input}' is not a number")]
    NotANumber { axis: Axis, input: String },

    #[error("{axis} {value} is outside {min}..={max}")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Longitude => write!(f, "Longitude"),
        }
    }
}

impl Coordinate {
    /// Parse latitude and longitude from the two free-text inputs
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        let latitude = parse_axis(latitude, Axis::Latitude, 90.0)?;
        let longitude = parse_axis(longitude, Axis::Longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Value for the `gscoord` query parameter, e.g. "17.385|78.4867"
    pub fn as_query_param(&self) -> String {
        format!("{}|{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

fn parse_axis(input: &str, axis: Axis, limit: f64) -> Result<f64, CoordinateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoordinateError::Empty { axis });
    }

    // f64::from_str accepts "inf" and "NaN", neither of which is a position
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoordinateError::NotANumber {
            axis,
            input: trimmed.to_string(),
        })?;

    if !(-limit..=limit).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            axis,
            value,
            min: -limit,
            max: limit,
        });
    }

    Ok(value)
}
