use crate::geometry::PositionedShape;
use crate::model::Animatable;
use crate::model::Color;
use crate::model::Id;
use crate::model::Location;
use crate::model::Message;
use crate::model::Orientation;
use crate::model::PathSegment;
use crate::model::Shape;
use crate::model::TimeStamp;
use crate::validation::validate_path;
use crate::validation::ValidationConfig;
use crate::validation::ValidationError;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use SceneError::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SceneError {
    /// a message other than `Begin` arrived first
    NotBegun,
    ClockRegression { epoch: TimeStamp, timestamp: TimeStamp },
    DuplicateId(Id),
    UnknownId(Id),
    Invalid(ValidationError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotBegun => write!(f, "no Begin message received yet"),
            ClockRegression { epoch, timestamp } => {
                write!(f, "Begin({}) is earlier than the current epoch {}", timestamp, epoch)
            }
            DuplicateId(id) => write!(f, "animatable {} is already shown", id),
            UnknownId(id) => write!(f, "animatable {} is not shown", id),
            Invalid(e) => write!(f, "invalid animatable: {}", e),
        }
    }
}

impl From<ValidationError> for SceneError {
    fn from(e: ValidationError) -> Self {
        Invalid(e)
    }
}

pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneConfig {
    pub require_begin: bool,
    /// a second `Show` for a shown id replaces it instead of failing
    pub replace_on_show: bool,
    /// `Update` / `Hide` for unknown ids are dropped instead of failing
    pub ignore_unknown_ids: bool,
    pub reject_clock_regression: bool,
    pub validate: bool,
    pub validation: ValidationConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            require_begin: true,
            replace_on_show: false,
            ignore_unknown_ids: false,
            reject_clock_regression: true,
            validate: true,
            validation: ValidationConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Accepts any sequence of messages.
    pub fn lenient() -> Self {
        Self {
            require_begin: false,
            replace_on_show: true,
            ignore_unknown_ids: true,
            reject_clock_regression: false,
            validate: false,
            validation: ValidationConfig::default(),
        }
    }
}

/// What a successfully applied message did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Change {
    Began(TimeStamp),
    Shown(Id),
    Replaced(Id),
    Updated(Id),
    Hidden(Id),
    Ignored(Id),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub id: Id,
    pub shape: PositionedShape,
    pub orientation: Orientation,
    pub fill: bool,
    pub color: Color,
}

/// The set of shown animatables, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    config: SceneConfig,
    epoch: Option<TimeStamp>,
    animatables: BTreeMap<Id, Animatable>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            epoch: None,
            animatables: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Timestamp of the latest `Begin`.
    pub fn epoch(&self) -> Option<TimeStamp> {
        self.epoch
    }

    pub fn get(&self, id: Id) -> Option<&Animatable> {
        self.animatables.get(&id)
    }

    pub fn len(&self) -> usize {
        self.animatables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animatables.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.animatables.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animatable> {
        self.animatables.values()
    }

    /// Forgets the epoch and every animatable.
    pub fn clear(&mut self) {
        self.epoch = None;
        self.animatables.clear();
    }

    /// Applies one message. On error the scene is left untouched.
    pub fn apply(&mut self, message: Message) -> SceneResult<Change> {
        let kind = message.kind().as_text();
        let target = message.id();
        let result = self.dispatch(message);

        match &result {
            Ok(Change::Ignored(id)) => log::trace!("ignoring {} for unknown animatable {}", kind, id),
            Ok(change) => log::debug!("applied {}: {:?}", kind, change),
            Err(e) => log::warn!("rejected {} (target {:?}): {}", kind, target, e),
        }

        result
    }

    /// Applies messages in order, stopping at the first failure.
    ///
    /// The error carries the index of the failing message; messages before
    /// it stay applied.
    pub fn apply_all<I>(&mut self, messages: I) -> Result<Vec<Change>, (usize, SceneError)>
    where
        I: IntoIterator<Item = Message>,
    {
        let mut changes = Vec::new();
        for (i, message) in messages.into_iter().enumerate() {
            changes.push(self.apply(message).map_err(|e| (i, e))?);
        }
        Ok(changes)
    }

    fn dispatch(&mut self, message: Message) -> SceneResult<Change> {
        match message {
            Message::Begin(timestamp) => self.begin(timestamp),
            Message::Show(animatable) => self.show(animatable),
            Message::Update(id, segments) => self.update(id, segments),
            Message::Hide(id) => self.hide(id),
        }
    }

    fn check_begun(&self) -> SceneResult<()> {
        match self.config.require_begin && self.epoch.is_none() {
            true => Err(NotBegun),
            false => Ok(()),
        }
    }

    fn begin(&mut self, timestamp: TimeStamp) -> SceneResult<Change> {
        if let Some(epoch) = self.epoch {
            if self.config.reject_clock_regression && timestamp < epoch {
                return Err(ClockRegression { epoch, timestamp });
            }
        }

        self.epoch = Some(timestamp);
        Ok(Change::Began(timestamp))
    }

    fn show(&mut self, animatable: Animatable) -> SceneResult<Change> {
        self.check_begun()?;

        if self.config.validate {
            animatable.validate(&self.config.validation)?;
        }

        let id = animatable.id;
        let exists = self.animatables.contains_key(&id);
        if exists && !self.config.replace_on_show {
            return Err(DuplicateId(id));
        }

        self.animatables.insert(id, animatable);
        Ok(match exists {
            true => Change::Replaced(id),
            false => Change::Shown(id),
        })
    }

    fn update(&mut self, id: Id, segments: Vec<PathSegment>) -> SceneResult<Change> {
        self.check_begun()?;

        if !self.animatables.contains_key(&id) {
            return match self.config.ignore_unknown_ids {
                true => Ok(Change::Ignored(id)),
                false => Err(UnknownId(id)),
            };
        }

        if self.config.validate {
            validate_path(&segments, &self.config.validation)?;
        }

        if let Some(animatable) = self.animatables.get_mut(&id) {
            animatable.path = segments;
        }
        Ok(Change::Updated(id))
    }

    fn hide(&mut self, id: Id) -> SceneResult<Change> {
        self.check_begun()?;

        match self.animatables.remove(&id) {
            Some(_) => Ok(Change::Hidden(id)),
            None if self.config.ignore_unknown_ids => Ok(Change::Ignored(id)),
            None => Err(UnknownId(id)),
        }
    }

    /// Every animatable with a non-empty path, placed at `time`, by id.
    pub fn snapshot(&self, time: TimeStamp) -> Vec<Placement> {
        self.animatables
            .values()
            .filter_map(|animatable| {
                let place = animatable.place_at(time)?;
                Some(Placement {
                    id: animatable.id,
                    shape: animatable.shape.positioned(place.location),
                    orientation: place.orientation,
                    fill: animatable.fill,
                    color: animatable.color,
                })
            })
            .collect()
    }

    /// The highest id whose shape covers `location` at `time`.
    pub fn hit_test(&self, location: Location, time: TimeStamp) -> Option<Id> {
        self.snapshot(time)
            .iter()
            .rev()
            .find(|placement| placement.shape.contains_point(location))
            .map(|placement| placement.id)
    }

    /// Pairs of ids `(a, b)`, `a < b`, whose shapes overlap at `time`.
    pub fn overlapping(&self, time: TimeStamp) -> Vec<(Id, Id)> {
        let placements = self.snapshot(time);
        let mut pairs = Vec::new();

        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                if a.shape.intersects(&b.shape) {
                    pairs.push((a.id, b.id));
                }
            }
        }

        pairs
    }

    pub fn log_scene(&self) {
        log::info!("epoch: {:?}", self.epoch);
        log::info!(    "|   ID   |   SHAPE   |  W/R  |   H   | FILL |  COLOR  | SEGMENTS |");

        for animatable in self.animatables.values() {
            let (name, a, b) = match animatable.shape {
                Shape::Circle(r) => ("Circle", r, 0.0),
                Shape::Rectangle(w, h) => ("Rectangle", w, h),
            };
            let c = animatable.color;
            log::info!(
                "| {:^6} | {:^9} | {:^5} | {:^5} | {:^4} | {:02x}{:02x}{:02x}  | {:^8} |",
                animatable.id,
                name,
                a,
                b,
                animatable.fill,
                c.r,
                c.g,
                c.b,
                animatable.path.len(),
            );
        }
    }
}
