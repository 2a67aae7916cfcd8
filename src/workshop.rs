use crate::builder::{
    AndroidBuilder, AutonomousCarBuilder, QuadCopterBuilder, RobotBuilder, SpiderRobotBuilder,
    UAVBuilder,
};
use crate::director::Director;
use crate::robot::Robot;
use crate::sample::sample_robot;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use tracing::{debug, warn};

/// Factory that tries to create a builder from an archetype name.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait BuilderFactory {
    /// Archetype name this factory answers to.
    fn name(&self) -> &'static str;

    /// Attempt to create a fresh builder for the provided archetype name.
    fn try_create(&self, name: &str) -> Option<Box<dyn RobotBuilder>>;
}

/// Creates builders of type `T` on demand.
pub struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: RobotBuilder + Default + 'static> BuilderFactory for Factory<T> {
    fn name(&self) -> &'static str {
        T::default().name()
    }

    fn try_create(&self, name: &str) -> Option<Box<dyn RobotBuilder>> {
        let builder = T::default();
        if builder.name() == name {
            Some(Box::new(builder))
        } else {
            None
        }
    }
}

const HELP: &str = "\
commands:
  <archetype>  build and print one robot (see `list`)
  all          build and print every archetype
  sample       print a hand-assembled robot
  list         show archetype names
  help         show this message
  exit, quit   leave the workshop
";

/// A registry of robot builders addressable by archetype name.
///
/// Every robot is produced by handing a fresh builder to the [`Director`].
///
/// Example
/// ```
/// use robot_builder::Workshop;
/// let robot = Workshop::default().build("quadcopter").unwrap();
/// assert!(robot.render().starts_with("4 ROTORS"));
/// ```
pub struct Workshop {
    builders: Vec<Box<dyn BuilderFactory>>,
}

impl Workshop {
    /// Create a workshop with a custom set of builder factories.
    pub fn new(builders: Vec<Box<dyn BuilderFactory>>) -> Self {
        Self { builders }
    }

    /// Archetype names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.builders.iter().map(|f| f.name()).collect()
    }

    /// Build one robot of the named archetype.
    pub fn build(&self, name: &str) -> Result<Robot> {
        for factory in &self.builders {
            if let Some(mut builder) = factory.try_create(name) {
                return Ok(Director::make_robot(builder.as_mut()));
            }
        }
        Err(anyhow::anyhow!("unknown archetype: {}", name))
    }

    /// Build the named robot and write its description followed by a blank line.
    pub fn run(&self, name: &str, stdout: &mut dyn Write) -> Result<()> {
        let robot = self.build(name)?;
        writeln!(stdout, "{}", robot)?;
        Ok(())
    }

    /// [`run`](Workshop::run) every registered archetype in order.
    pub fn run_all(&self, stdout: &mut dyn Write) -> Result<()> {
        for name in self.names() {
            self.run(name, stdout)?;
        }
        Ok(())
    }

    /// Handle one line of interactive input.
    ///
    /// Returns `Ok(false)` when the user asked to leave.
    pub fn execute_line(&self, line: &str, stdout: &mut dyn Write) -> Result<bool> {
        let command = line.trim().to_ascii_lowercase();
        debug!(command = %command, "workshop command");
        match command.as_str() {
            "" => {}
            "exit" | "quit" => return Ok(false),
            "help" => write!(stdout, "{}", HELP)?,
            "list" => writeln!(stdout, "{}", self.names().join(" "))?,
            "all" => self.run_all(stdout)?,
            "sample" => writeln!(stdout, "{}", sample_robot())?,
            name => self.run(name, stdout)?,
        }
        Ok(true)
    }

    /// Read-eval-print loop over archetype names.
    pub fn repl(&self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();

        loop {
            match rl.readline("robot> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    match self.execute_line(&line, &mut stdout) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => {
                            warn!(error = %e, "command failed");
                            println!("{}", e);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Workshop {
    /// Create a workshop with every archetype, in presentation order:
    /// android, autonomous car, spider, UAV, quadcopter.
    fn default() -> Self {
        Self::new(vec![
            Box::new(Factory::<AndroidBuilder>::default()),
            Box::new(Factory::<AutonomousCarBuilder>::default()),
            Box::new(Factory::<SpiderRobotBuilder>::default()),
            Box::new(Factory::<UAVBuilder>::default()),
            Box::new(Factory::<QuadCopterBuilder>::default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_default_order() {
        assert_eq!(
            Workshop::default().names(),
            vec!["android", "autonomous-car", "spider", "uav", "quadcopter"]
        );
    }

    #[test]
    fn test_unknown_archetype() {
        let err = Workshop::default().build("tank").unwrap_err();
        assert_eq!(err.to_string(), "unknown archetype: tank");
    }

    #[test]
    fn test_run_adds_trailing_newline() {
        let ws = Workshop::default();
        let s = output_of(|out| ws.run("spider", out));
        assert_eq!(
            s,
            "16 LEGS ROBOT. \n\
             Traversal modules installed:\n\
             - LEGS\n\
             Detection systems installed:\n\
             -INFRARED\n\n"
        );
    }

    #[test]
    fn test_run_all_prints_every_archetype_in_order() {
        let ws = Workshop::default();
        let s = output_of(|out| ws.run_all(out));

        let headers: Vec<&str> = s.lines().filter(|l| l.ends_with("ROBOT. ")).collect();
        assert_eq!(
            headers,
            vec![
                "TWO LEGS ROBOT. ",
                "FOUR WHEELS ROBOT. ",
                "16 LEGS ROBOT. ",
                "TWO WINGS ROBOT. ",
                "4 ROTORS ROBOT. ",
            ]
        );
    }

    #[test]
    fn test_custom_registry() {
        let ws = Workshop::new(vec![Box::new(Factory::<UAVBuilder>::default())]);
        assert_eq!(ws.names(), vec!["uav"]);
        assert!(ws.build("android").is_err());
        assert_eq!(ws.build("uav").unwrap().traversal.len(), 1);
    }

    #[test]
    fn test_execute_line() {
        let ws = Workshop::default();

        let mut out = Vec::new();
        assert!(ws.execute_line("  QuadCopter ", &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().starts_with("4 ROTORS ROBOT."));

        let mut out = Vec::new();
        assert!(ws.execute_line("list", &mut out).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "android autonomous-car spider uav quadcopter\n"
        );

        let mut out = Vec::new();
        assert!(ws.execute_line("", &mut out).unwrap());
        assert!(out.is_empty());

        let mut out = Vec::new();
        assert!(ws.execute_line("sample", &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().starts_with("2 LEGS ROBOT."));

        let mut out = Vec::new();
        assert!(ws.execute_line("help", &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), HELP);

        let mut out = Vec::new();
        assert!(ws.execute_line("ALL", &mut out).unwrap());
        let all = String::from_utf8(out).unwrap();
        let mut expected: Vec<u8> = Vec::new();
        ws.run_all(&mut expected).unwrap();
        assert_eq!(all, String::from_utf8(expected).unwrap());
        assert_eq!(all.matches("ROBOT. ").count(), 5);

        let mut out = Vec::new();
        assert!(!ws.execute_line("exit", &mut out).unwrap());
        assert!(!ws.execute_line("quit", &mut out).unwrap());
        assert!(ws.execute_line("tank", &mut out).is_err());
    }
}
