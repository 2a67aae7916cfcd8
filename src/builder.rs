use crate::part::Part;
use crate::robot::{Count, Robot};

/// Object-safe trait for anything that assembles a [`Robot`] step by step.
///
/// Each builder owns exactly one robot under construction. The two build steps
/// are archetype specific; [`reset`](RobotBuilder::reset) and
/// [`get_product`](RobotBuilder::get_product) are shared by every archetype.
pub trait RobotBuilder {
    /// Canonical archetype name, e.g. "android" or "quadcopter".
    fn name(&self) -> &'static str;

    /// The robot currently under construction.
    fn product(&self) -> &Robot;

    /// Mutable access to the robot currently under construction.
    fn product_mut(&mut self) -> &mut Robot;

    /// Install the locomotion slot, count and traversal modules.
    ///
    /// Both part lists are cleared first, so calling this again on the same
    /// product does not duplicate anything.
    fn build_traversal(&mut self);

    /// Append the archetype's detection systems.
    ///
    /// Repeated calls append again.
    fn build_detection_system(&mut self);

    /// Discard the current product and start over with an empty robot.
    fn reset(&mut self) {
        *self.product_mut() = Robot::new();
    }

    /// A copy of the current product. The builder keeps its own.
    fn get_product(&self) -> Robot {
        self.product().clone()
    }
}

fn install_traversal(robot: &mut Robot, count: Count, parts: &[Part]) {
    robot.count = count;
    robot.traversal.clear();
    robot.detection.clear();
    debug_assert!(parts.iter().all(|p| !p.is_detection()));
    robot.traversal.extend_from_slice(parts);
}

fn install_detection(robot: &mut Robot, parts: &[Part]) {
    debug_assert!(parts.iter().all(|p| p.is_detection()));
    robot.detection.extend_from_slice(parts);
}

/// Two legs, two arms and a camera.
#[derive(Debug, Default)]
pub struct AndroidBuilder {
    product: Robot,
}

impl RobotBuilder for AndroidBuilder {
    fn name(&self) -> &'static str {
        "android"
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        self.product.legs = Some(Part::Legs);
        self.product.upper_count = "TWO".to_string();
        install_traversal(&mut self.product, "TWO".into(), &[Part::Legs, Part::Arms]);
    }

    fn build_detection_system(&mut self) {
        install_detection(&mut self.product, &[Part::CameraDetector]);
    }
}

/// Four wheels with infrared and camera detection.
#[derive(Debug, Default)]
pub struct AutonomousCarBuilder {
    product: Robot,
}

impl RobotBuilder for AutonomousCarBuilder {
    fn name(&self) -> &'static str {
        "autonomous-car"
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        self.product.wheeled = Some(Part::Wheels);
        install_traversal(&mut self.product, "FOUR".into(), &[Part::Wheels]);
    }

    fn build_detection_system(&mut self) {
        install_detection(
            &mut self.product,
            &[Part::InfraredDetector, Part::CameraDetector],
        );
    }
}

/// Sixteen legs and infrared detection.
#[derive(Debug, Default)]
pub struct SpiderRobotBuilder {
    product: Robot,
}

impl RobotBuilder for SpiderRobotBuilder {
    fn name(&self) -> &'static str {
        "spider"
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        self.product.legs = Some(Part::Legs);
        install_traversal(&mut self.product, Count::Number(16), &[Part::Legs]);
    }

    fn build_detection_system(&mut self) {
        install_detection(&mut self.product, &[Part::InfraredDetector]);
    }
}

/// Two wings with infrared and camera detection.
#[derive(Debug, Default)]
pub struct UAVBuilder {
    product: Robot,
}

impl RobotBuilder for UAVBuilder {
    fn name(&self) -> &'static str {
        "uav"
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        self.product.flying = Some(Part::Wings);
        install_traversal(&mut self.product, "TWO".into(), &[Part::Wings]);
    }

    fn build_detection_system(&mut self) {
        install_detection(
            &mut self.product,
            &[Part::InfraredDetector, Part::CameraDetector],
        );
    }
}

/// Four rotors and a camera.
#[derive(Debug, Default)]
pub struct QuadCopterBuilder {
    product: Robot,
}

impl RobotBuilder for QuadCopterBuilder {
    fn name(&self) -> &'static str {
        "quadcopter"
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        self.product.rotors = Some(Part::Rotors);
        install_traversal(&mut self.product, Count::Number(4), &[Part::Rotors]);
    }

    fn build_detection_system(&mut self) {
        install_detection(&mut self.product, &[Part::CameraDetector]);
    }
}
