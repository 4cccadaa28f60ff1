//! Rolling parameters.
//!
//! This module provides [`RollParams`] along with the [`Axis`] and
//! [`RollDirection`] selectors used to pick the rolling axis from a transform.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RollError, RollResult};

/// A local basis axis of a transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Basis row 0.
    #[default]
    X,
    /// Basis row 1.
    Y,
    /// Basis row 2.
    Z,
}

impl Axis {
    /// All axes in basis order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Row index of this axis in a row-vector transform.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Canonical unit vector for this axis.
    #[must_use]
    pub fn unit_vector(self) -> Vector3<f64> {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }
}

/// Direction of travel along the rolling axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RollDirection {
    /// Roll with the axis as extracted from the transform.
    #[default]
    Forward,
    /// Roll with the axis negated.
    Backward,
}

impl RollDirection {
    /// Sign applied to the axis vector: `1.0` forward, `-1.0` backward.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Parameters for a rolling rotation.
///
/// Defaults match a unit wheel at rest: distance 0, radius 1, speed 1,
/// rolling about X, forward.
///
/// # Example
///
/// ```
/// use rig_roll::{Axis, RollDirection, RollParams};
///
/// let params = RollParams::with_radius(0.35)
///     .distance(12.0)
///     .speed(2.0)
///     .axis(Axis::Z)
///     .direction(RollDirection::Backward);
///
/// assert!(params.validate().is_ok());
/// assert!((params.circumference() - 2.0 * std::f64::consts::PI * 0.35).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RollParams {
    /// Distance travelled, in scene units. Must be `>= 0`.
    pub distance: f64,
    /// Wheel radius, in scene units. Must be `> 0`.
    pub radius: f64,
    /// Rate multiplier on the resulting angle. Must be `>= 0`.
    pub speed: f64,
    /// Basis axis the wheel rolls about.
    pub axis: Axis,
    /// Whether the axis is negated.
    pub direction: RollDirection,
}

impl Default for RollParams {
    fn default() -> Self {
        Self {
            distance: 0.0,
            radius: 1.0,
            speed: 1.0,
            axis: Axis::X,
            direction: RollDirection::Forward,
        }
    }
}

impl RollParams {
    /// Create params for a wheel of the given radius, everything else default.
    #[must_use]
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// Set the travelled distance.
    #[must_use]
    pub const fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Set the radius.
    #[must_use]
    pub const fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the speed multiplier.
    #[must_use]
    pub const fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the rolling axis.
    #[must_use]
    pub const fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the direction of travel.
    #[must_use]
    pub const fn direction(mut self, direction: RollDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Circumference of the wheel.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }

    /// Check every scalar against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidParameter`] if the radius is not strictly
    /// positive, if distance or speed is negative, or if any of them is not
    /// finite.
    pub fn validate(&self) -> RollResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(RollError::invalid_parameter(
                "radius",
                self.radius,
                "must be finite and > 0",
            ));
        }
        if !(self.distance.is_finite() && self.distance >= 0.0) {
            return Err(RollError::invalid_parameter(
                "distance",
                self.distance,
                "must be finite and >= 0",
            ));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(RollError::invalid_parameter(
                "speed",
                self.speed,
                "must be finite and >= 0",
            ));
        }
        Ok(())
    }
}
