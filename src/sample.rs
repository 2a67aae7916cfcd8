use crate::part::Part;
use crate::robot::{Count, Robot};

/// A robot assembled by hand, without any builder.
///
/// Handy for checking the renderer in isolation: it has a locomotion slot and
/// detection systems but no traversal modules.
pub fn sample_robot() -> Robot {
    Robot {
        legs: Some(Part::Legs),
        count: Count::Number(2),
        detection: vec![Part::InfraredDetector, Part::CameraDetector],
        ..Robot::new()
    }
}
