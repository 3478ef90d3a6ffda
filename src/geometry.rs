use crate::model::Coord;
use crate::model::Location;
use crate::model::Shape;

/// Axis-aligned rectangle; `min` is the corner with the smallest coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Location,
    pub max: Location,
}

impl Bounds {
    pub fn from_corners(a: Location, b: Location) -> Self {
        Self {
            min: Location::new(a.x.min(b.x), a.y.min(b.y)),
            max: Location::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> Coord {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> Coord {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Location {
        Location::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn contains_point(&self, point: Location) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Touching edges count as an intersection.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    pub fn intersects_circle(&self, center: Location, radius: Coord) -> bool {
        let closest = Location::new(
            center.x.max(self.min.x).min(self.max.x),
            center.y.max(self.min.y).min(self.max.y),
        );
        center.distance_squared(closest) < radius * radius
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PositionedShape {
    Circle { center: Location, radius: Coord },
    Rectangle(Bounds),
}

impl Shape {
    /// Centers the shape on `center`.
    pub fn positioned(&self, center: Location) -> PositionedShape {
        match *self {
            Shape::Circle(radius) => PositionedShape::Circle { center, radius },
            Shape::Rectangle(w, h) => {
                let half = Location::new(w / 2.0, h / 2.0);
                PositionedShape::Rectangle(Bounds::from_corners(center - half, center + half))
            }
        }
    }
}

impl PositionedShape {
    pub fn center(&self) -> Location {
        match self {
            PositionedShape::Circle { center, .. } => *center,
            PositionedShape::Rectangle(bounds) => bounds.center(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            PositionedShape::Circle { center, radius } => {
                let r = Location::new(*radius, *radius);
                Bounds::from_corners(*center - r, *center + r)
            }
            PositionedShape::Rectangle(bounds) => *bounds,
        }
    }

    pub fn contains_point(&self, point: Location) -> bool {
        match self {
            PositionedShape::Circle { center, radius } => {
                center.distance_squared(point) < radius * radius
            }
            PositionedShape::Rectangle(bounds) => bounds.contains_point(point),
        }
    }

    pub fn intersects(&self, other: &PositionedShape) -> bool {
        use PositionedShape::*;

        match (self, other) {
            (Circle { center: c1, radius: r1 }, Circle { center: c2, radius: r2 }) => {
                let radius_sum = r1 + r2;
                c1.distance_squared(*c2) < radius_sum * radius_sum
            }
            (Circle { center, radius }, Rectangle(bounds)) => bounds.intersects_circle(*center, *radius),
            (Rectangle(bounds), Circle { center, radius }) => bounds.intersects_circle(*center, *radius),
            (Rectangle(a), Rectangle(b)) => a.intersects(b),
        }
    }
}
