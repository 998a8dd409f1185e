use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Device position shown next to the scanner. Display only, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Parse `LAT,LON` (whitespace around either part is ignored).
    pub fn parse(s: &str) -> AppResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinate(s.to_string()))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinate(s.to_string()));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
