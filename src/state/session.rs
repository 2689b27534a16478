// Pointer gesture data for one drag measurement.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasurementSession {
    pub active: bool,
    /// Pointer position at gesture start, in client pixels.
    pub origin: Point,
    /// Straight-line distance from `origin` to the latest pointer position.
    pub displacement: f64,
}

impl MeasurementSession {
    pub fn start(origin: Point) -> Self {
        Self {
            active: true,
            origin,
            displacement: 0.0,
        }
    }

    pub fn track(&mut self, position: Point) -> f64 {
        self.displacement = self.origin.distance_to(position);
        self.displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_euclidean() {
        let mut s = MeasurementSession::start(Point::new(100.0, 100.0));
        assert_eq!(s.displacement, 0.0);
        assert_eq!(s.track(Point::new(130.0, 140.0)), 50.0);
        // Moving back towards the origin shrinks it; it is not a path length.
        assert_eq!(s.track(Point::new(100.0, 90.0)), 10.0);
    }

    #[test]
    fn default_session_is_inactive() {
        assert!(!MeasurementSession::default().active);
    }
}
