//! Checks the data model does not enforce by itself.
//!
//! Nothing here runs implicitly: a [`crate::Scene`] calls these when its
//! configuration asks for it, other callers may use them directly.

use crate::model::Animatable;
use crate::model::Coord;
use crate::model::Location;
use crate::model::PathSegment;
use crate::model::Shape;

use core::fmt;

use vek::num_traits::real::Real;

use ValidationError::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ValidationError {
    /// negative (or, if disallowed, zero) shape dimension
    InvalidDimension,
    NonFinite,
    EndBeforeBegin,
    /// segment at this index begins before its predecessor
    OutOfOrder(usize),
    /// segment at this index does not begin where its predecessor ends
    Discontinuous(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDimension => write!(f, "invalid shape dimension"),
            NonFinite => write!(f, "non-finite coordinate or orientation"),
            EndBeforeBegin => write!(f, "segment ends before it begins"),
            OutOfOrder(i) => write!(f, "path segment {} begins before its predecessor", i),
            Discontinuous(i) => write!(f, "path segment {} does not continue its predecessor", i),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValidationConfig {
    /// accept zero radius / width / height
    pub allow_degenerate_shapes: bool,
    pub require_contiguous_paths: bool,
    /// maximum distance per axis between two locations considered equal
    pub tolerance: Coord,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_degenerate_shapes: true,
            require_contiguous_paths: false,
            tolerance: 1e-3,
        }
    }
}

fn check_dimension(value: Coord, config: &ValidationConfig) -> ValidationResult<()> {
    if !value.is_finite() {
        Err(NonFinite)
    } else if value < 0.0 || (value == 0.0 && !config.allow_degenerate_shapes) {
        Err(InvalidDimension)
    } else {
        Ok(())
    }
}

fn check_location(location: Location) -> ValidationResult<()> {
    match location.x.is_finite() && location.y.is_finite() {
        true => Ok(()),
        false => Err(NonFinite),
    }
}

fn close_to(a: Location, b: Location, tolerance: Coord) -> bool {
    Real::abs(a.x - b.x) <= tolerance && Real::abs(a.y - b.y) <= tolerance
}

impl Shape {
    pub fn validate(&self, config: &ValidationConfig) -> ValidationResult<()> {
        match *self {
            Shape::Circle(radius) => check_dimension(radius, config),
            Shape::Rectangle(width, height) => {
                check_dimension(width, config)?;
                check_dimension(height, config)
            }
        }
    }
}

impl PathSegment {
    pub fn validate(&self) -> ValidationResult<()> {
        check_location(self.begin_location)?;
        if let Some(end) = self.end_location {
            check_location(end)?;
        }

        if !self.begin_orientation.is_finite() {
            return Err(NonFinite);
        }
        if let Some(end) = self.end_orientation {
            if !end.is_finite() {
                return Err(NonFinite);
            }
        }

        match self.end_time {
            Some(end) if end < self.begin_time => Err(EndBeforeBegin),
            _ => Ok(()),
        }
    }

    /// Location this segment rests at once it is over.
    pub fn final_location(&self) -> Location {
        self.end_location.unwrap_or(self.begin_location)
    }
}

pub fn validate_path(path: &[PathSegment], config: &ValidationConfig) -> ValidationResult<()> {
    for segment in path {
        segment.validate()?;
    }

    for (i, pair) in path.windows(2).enumerate() {
        let (previous, next) = (&pair[0], &pair[1]);
        let index = i + 1;

        if next.begin_time < previous.begin_time {
            return Err(OutOfOrder(index));
        }

        if config.require_contiguous_paths {
            let location_ok = close_to(previous.final_location(), next.begin_location, config.tolerance);
            let time_ok = previous.end_time.map_or(true, |end| end == next.begin_time);
            if !(location_ok && time_ok) {
                return Err(Discontinuous(index));
            }
        }
    }

    Ok(())
}

impl Animatable {
    pub fn validate(&self, config: &ValidationConfig) -> ValidationResult<()> {
        self.shape.validate(config)?;
        validate_path(&self.path, config)
    }
}
