use crate::part::Part;
use std::fmt;

/// Human-readable magnitude shown at the start of a robot's description.
///
/// Some archetypes spell their count out ("TWO"), others use a plain number (16).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Count {
    Label(String),
    Number(u32),
}

impl Default for Count {
    fn default() -> Self {
        Count::Label(String::new())
    }
}

impl From<&str> for Count {
    fn from(label: &str) -> Self {
        Count::Label(label.to_string())
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Label(label) => f.write_str(label),
            Count::Number(n) => write!(f, "{}", n),
        }
    }
}

/// The product assembled by a [`RobotBuilder`](crate::builder::RobotBuilder).
///
/// Fields are public so the builders (and hand-written robots, see
/// [`sample_robot`](crate::sample_robot)) can fill them in directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Robot {
    /// Walking locomotion marker.
    pub legs: Option<Part>,
    /// Rolling locomotion marker.
    pub wheeled: Option<Part>,
    /// Winged flight marker.
    pub flying: Option<Part>,
    /// Rotor flight marker.
    pub rotors: Option<Part>,
    /// Number of locomotion components, e.g. "TWO" legs or 4 rotors.
    pub count: Count,
    /// Number of upper-body components, printed in front of each traversal module.
    pub upper_count: String,
    /// Installed traversal modules, in installation order.
    pub traversal: Vec<Part>,
    /// Installed detection systems, in installation order.
    pub detection: Vec<Part>,
}

impl Robot {
    /// An empty robot: no locomotion, blank counts, nothing installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the robot is still in the state [`Robot::new`] leaves it in.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Multi-line description of the robot.
    ///
    /// Section headers are emitted only for non-empty part lists.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn slot(part: Option<Part>) -> &'static str {
    part.map(Part::label).unwrap_or("")
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}{}{}{} ROBOT. ",
            self.count,
            slot(self.rotors),
            slot(self.legs),
            slot(self.wheeled),
            slot(self.flying)
        )?;
        if !self.traversal.is_empty() {
            writeln!(f, "Traversal modules installed:")?;
        }
        for module in &self.traversal {
            writeln!(f, "-{} {}", self.upper_count, module)?;
        }
        if !self.detection.is_empty() {
            writeln!(f, "Detection systems installed:")?;
        }
        for system in &self.detection {
            writeln!(f, "-{}", system)?;
        }
        Ok(())
    }
}
