#![no_std]
extern crate alloc;

pub mod model;
pub mod motion;
pub mod geometry;
pub mod validation;
pub mod scene;


#[doc(inline)]
pub use {
    model::Shape,
    model::PathSegment,
    model::Animatable,
    model::Message,
    model::MessageKind,
    model::Location,
    model::Color,
    model::Id,
    model::TimeStamp,
    motion::OrientedPoint,
    motion::place_for,
    geometry::Bounds,
    geometry::PositionedShape,
    validation::ValidationConfig,
    validation::ValidationError,
    validation::validate_path,
    scene::Scene,
    scene::SceneConfig,
    scene::SceneError,
    scene::Change,
    scene::Placement,
};
