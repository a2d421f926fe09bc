use crate::constants::METERS_PER_MILE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// Distance in statute miles
/// Prevents mixing up units and provides type safety
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceMiles(pub f64);

impl DistanceMiles {
    pub fn new(miles: f64) -> Result<Self, String> {
        if miles < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        if !miles.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        Ok(DistanceMiles(miles))
    }

    /// Convert to meters
    pub fn to_meters(self) -> DistanceMeters {
        DistanceMeters(self.0 * METERS_PER_MILE)
    }

    /// Get the raw miles value
    pub fn as_miles(self) -> f64 {
        self.0
    }

    /// Create from raw value without validation (use carefully)
    pub fn from_raw(miles: f64) -> Self {
        DistanceMiles(miles)
    }

    /// Absolute difference, always non-negative
    pub fn abs_diff(self, other: Self) -> Self {
        DistanceMiles((self.0 - other.0).abs())
    }

    /// Sentinel for "no distance seen yet" comparisons
    pub const INFINITY: DistanceMiles = DistanceMiles(f64::INFINITY);
}

impl fmt::Display for DistanceMiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}mi", self.0)
    }
}

impl From<DistanceMeters> for DistanceMiles {
    fn from(meters: DistanceMeters) -> Self {
        DistanceMiles(meters.0 / METERS_PER_MILE)
    }
}

impl Add for DistanceMiles {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceMiles(self.0 + other.0)
    }
}

impl Sub for DistanceMiles {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        DistanceMiles(self.0 - other.0)
    }
}

impl Mul<f64> for DistanceMiles {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        DistanceMiles(self.0 * scalar)
    }
}

impl Div<f64> for DistanceMiles {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        DistanceMiles(self.0 / scalar)
    }
}

impl Sum for DistanceMiles {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DistanceMiles(0.0), Add::add)
    }
}

/// Distance in meters
/// The unit directions providers report leg distances in
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceMeters(pub f64);

impl DistanceMeters {
    pub fn new(meters: f64) -> Result<Self, String> {
        if meters < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        if !meters.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        Ok(DistanceMeters(meters))
    }

    /// Convert to miles
    pub fn to_miles(self) -> DistanceMiles {
        DistanceMiles(self.0 / METERS_PER_MILE)
    }

    /// Get the raw meters value
    pub fn as_meters(self) -> f64 {
        self.0
    }

    /// Create from raw value without validation (use carefully)
    pub fn from_raw(meters: f64) -> Self {
        DistanceMeters(meters)
    }
}

impl fmt::Display for DistanceMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}m", self.0)
    }
}

impl From<DistanceMiles> for DistanceMeters {
    fn from(miles: DistanceMiles) -> Self {
        DistanceMeters(miles.0 * METERS_PER_MILE)
    }
}

impl Add for DistanceMeters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceMeters(self.0 + other.0)
    }
}

impl Sub for DistanceMeters {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        DistanceMeters(self.0 - other.0)
    }
}
