use crate::builder::RobotBuilder;
use crate::robot::Robot;
use tracing::debug;

/// Drives a builder through the construction steps in a fixed order.
///
/// The director holds no state; it works the same for every archetype.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    /// Build traversal, then detection, then hand back a copy of the product.
    pub fn make_robot<B: RobotBuilder + ?Sized>(builder: &mut B) -> Robot {
        debug!(archetype = builder.name(), "building robot");
        builder.build_traversal();
        builder.build_detection_system();
        let robot = builder.get_product();
        debug!(
            archetype = builder.name(),
            traversal = robot.traversal.len(),
            detection = robot.detection.len(),
            "robot finished"
        );
        robot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{AndroidBuilder, AutonomousCarBuilder, QuadCopterBuilder};

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{:?} not found in {:?}", needle, haystack))
    }

    #[test]
    fn test_android_rendering_order() {
        let s = Director::make_robot(&mut AndroidBuilder::default()).render();

        let two = position(&s, "TWO");
        let legs = position(&s, "LEGS");
        let arms = position(&s, "ARMS");
        let cameras = position(&s, "CAMERAS");
        assert!(two < legs && legs < arms && arms < cameras);
        assert!(s.contains("Traversal modules installed:"));
        assert!(s.contains("Detection systems installed:"));
    }

    #[test]
    fn test_autonomous_car_detects_infrared_first() {
        let s = Director::make_robot(&mut AutonomousCarBuilder::default()).render();
        let detection = &s[position(&s, "Detection systems installed:")..];
        assert!(position(detection, "INFRARED") < position(detection, "CAMERAS"));
    }

    #[test]
    fn test_quadcopter_repeated_runs_do_not_duplicate() {
        let mut builder = QuadCopterBuilder::default();
        builder.reset();
        let first = Director::make_robot(&mut builder).render();
        let second = Director::make_robot(&mut builder).render();

        assert!(second.starts_with("4 ROTORS"));
        assert!(second.contains("- ROTORS\n"));
        assert_eq!(second.matches("Traversal modules installed").count(), 1);
        assert_eq!(second.matches("CAMERAS").count(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_works_with_boxed_builders() {
        let mut builder: Box<dyn RobotBuilder> = Box::new(AndroidBuilder::default());
        let robot = Director::make_robot(builder.as_mut());
        assert_eq!(robot.traversal.len(), 2);
    }
}
