use crate::model::Animatable;
use crate::model::Coord;
use crate::model::Location;
use crate::model::Orientation;
use crate::model::PathSegment;
use crate::model::TimeStamp;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrientedPoint {
    pub location: Location,
    pub orientation: Orientation,
}

fn lerp(begin: Coord, end: Coord, progress: Coord) -> Coord {
    begin + (end - begin) * progress
}

impl PathSegment {
    pub fn duration(&self) -> Option<TimeStamp> {
        self.end_time.map(|end| end.saturating_sub(self.begin_time))
    }

    pub fn is_instantaneous(&self) -> bool {
        self.duration().map_or(true, |d| d == 0)
    }

    /// 0.0 = begin values, 1.0 = end values
    fn progress(&self, time: TimeStamp) -> Coord {
        let begin = self.begin_time;
        match self.end_time {
            Some(end) if end > begin => {
                if time <= begin {
                    0.0
                } else if time >= end {
                    1.0
                } else {
                    ((time - begin) as f64 / (end - begin) as f64) as Coord
                }
            }
            // instantaneous: switch at the later of the two timestamps
            Some(end) => match time >= end.max(begin) {
                true => 1.0,
                false => 0.0,
            },
            None => match time >= begin {
                true => 1.0,
                false => 0.0,
            },
        }
    }

    pub fn place_at(&self, time: TimeStamp) -> OrientedPoint {
        let progress = self.progress(time);

        let location = match (self.end_location, progress) {
            (None, _) => self.begin_location,
            (Some(_), p) if p <= 0.0 => self.begin_location,
            (Some(end), p) if p >= 1.0 => end,
            (Some(end), p) => Location::new(
                lerp(self.begin_location.x, end.x, p),
                lerp(self.begin_location.y, end.y, p),
            ),
        };

        let orientation = match (self.end_orientation, progress) {
            (None, _) => self.begin_orientation,
            (Some(_), p) if p <= 0.0 => self.begin_orientation,
            (Some(end), p) if p >= 1.0 => end,
            (Some(end), p) => lerp(self.begin_orientation, end, p),
        };

        OrientedPoint {
            location,
            orientation,
        }
    }
}

/// Where a path puts its animatable at `time`.
///
/// Segments must be sorted by `begin_time`. The last segment beginning at
/// or before `time` is evaluated; before the first segment the path rests
/// at that segment's beginning.
pub fn place_for(path: &[PathSegment], time: TimeStamp) -> Option<OrientedPoint> {
    let first = path.first()?;

    Some(match path.partition_point(|segment| segment.begin_time <= time) {
        0 => OrientedPoint {
            location: first.begin_location,
            orientation: first.begin_orientation,
        },
        i => path[i - 1].place_at(time),
    })
}

impl Animatable {
    pub fn place_at(&self, time: TimeStamp) -> Option<OrientedPoint> {
        place_for(&self.path, time)
    }
}
