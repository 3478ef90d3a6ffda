use alloc::vec::Vec;

pub type Coord = f32;
pub type TimeStamp = u64;
pub type Id = u64;
/// Radians
pub type Orientation = f32;
pub type Location = vek::vec::repr_c::vec2::Vec2<Coord>;
pub type Color = rgb::RGB8;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Circle(Coord),             // radius
    Rectangle(Coord, Coord),   // width, height
}

impl Shape {
    pub fn circle(radius: Coord) -> Self {
        Shape::Circle(radius)
    }

    pub fn rectangle(width: Coord, height: Coord) -> Self {
        Shape::Rectangle(width, height)
    }
}

/// One interval of motion.
///
/// Only the beginning is mandatory. A segment without an end location
/// stays where it begins; a segment without an end time jumps to its end
/// values at `begin_time`. See [`PathSegment::place_at`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathSegment {
    pub begin_location: Location,
    pub end_location: Option<Location>,
    pub begin_time: TimeStamp,
    pub end_time: Option<TimeStamp>,
    pub begin_orientation: Orientation,
    pub end_orientation: Option<Orientation>,
}

impl PathSegment {
    pub fn new(location: Location, time: TimeStamp, orientation: Orientation) -> Self {
        Self {
            begin_location: location,
            end_location: None,
            begin_time: time,
            end_time: None,
            begin_orientation: orientation,
            end_orientation: None,
        }
    }

    pub fn ending_at(self, location: Location, time: TimeStamp, orientation: Orientation) -> Self {
        Self {
            end_location: Some(location),
            end_time: Some(time),
            end_orientation: Some(orientation),
            ..self
        }
    }

    pub fn with_end_location(self, location: Location) -> Self {
        Self {
            end_location: Some(location),
            ..self
        }
    }

    pub fn with_end_time(self, time: TimeStamp) -> Self {
        Self {
            end_time: Some(time),
            ..self
        }
    }

    pub fn with_end_orientation(self, orientation: Orientation) -> Self {
        Self {
            end_orientation: Some(orientation),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animatable {
    pub id: Id,
    pub shape: Shape,
    pub fill: bool,
    pub color: Color,
    pub path: Vec<PathSegment>,
}

impl Animatable {
    pub fn new(id: Id, shape: Shape) -> Self {
        Self {
            id,
            shape,
            fill: false,
            color: Color::default(),
            path: Vec::new(),
        }
    }

    pub fn filled(self, fill: bool) -> Self {
        Self { fill, ..self }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_path(self, path: Vec<PathSegment>) -> Self {
        Self { path, ..self }
    }

    pub fn push_segment(&mut self, segment: PathSegment) {
        self.path.push(segment);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Begin(TimeStamp),
    Show(Animatable),
    Update(Id, Vec<PathSegment>),
    Hide(Id),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Begin,
    Show,
    Update,
    Hide,
}

impl MessageKind {
    pub fn as_text(self) -> &'static str {
        match self {
            MessageKind::Begin => "Begin",
            MessageKind::Show => "Show",
            MessageKind::Update => "Update",
            MessageKind::Hide => "Hide",
        }
    }
}

impl Message {
    pub fn begin(timestamp: TimeStamp) -> Self {
        Message::Begin(timestamp)
    }

    pub fn show(animatable: Animatable) -> Self {
        Message::Show(animatable)
    }

    pub fn update(id: Id, segments: Vec<PathSegment>) -> Self {
        Message::Update(id, segments)
    }

    pub fn hide(id: Id) -> Self {
        Message::Hide(id)
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Begin(_) => MessageKind::Begin,
            Message::Show(_) => MessageKind::Show,
            Message::Update(..) => MessageKind::Update,
            Message::Hide(_) => MessageKind::Hide,
        }
    }

    /// Id of the animatable this message targets; `None` for `Begin`.
    pub fn id(&self) -> Option<Id> {
        match self {
            Message::Begin(_) => None,
            Message::Show(animatable) => Some(animatable.id),
            Message::Update(id, _) => Some(*id),
            Message::Hide(id) => Some(*id),
        }
    }
}
