use std::fmt;

/// A component that can be installed on a [`Robot`](crate::Robot).
///
/// Parts carry no state: two parts are the same part when they are the same
/// variant, and each one renders to a fixed upper-case label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Legs,
    Arms,
    Wings,
    Blades,
    Wheels,
    Rotors,
    CameraDetector,
    InfraredDetector,
}

impl Part {
    /// The fixed display label of this part, e.g. `"LEGS"` or `"CAMERAS"`.
    pub fn label(self) -> &'static str {
        match self {
            Part::Legs => "LEGS",
            Part::Arms => "ARMS",
            Part::Wings => "WINGS",
            Part::Blades => "BLADES",
            Part::Wheels => "WHEELS",
            Part::Rotors => "ROTORS",
            Part::CameraDetector => "CAMERAS",
            Part::InfraredDetector => "INFRARED",
        }
    }

    /// Whether this part belongs in a detection system rather than a traversal module.
    pub fn is_detection(self) -> bool {
        matches!(self, Part::CameraDetector | Part::InfraredDetector)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
