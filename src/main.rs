use anyhow::{Context, Result};
use argh::FromArgs;
use robot_builder::{Workshop, sample_robot};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Assemble robots with the builder pattern and print their descriptions.
/// Without options, every archetype is built and printed in turn.
struct Args {
    #[argh(option)]
    /// archetype to build; may be repeated. Defaults to every archetype.
    only: Vec<String>,

    #[argh(switch)]
    /// print a robot assembled by hand instead of by a builder.
    sample: bool,

    #[argh(switch, short = 'i')]
    /// start an interactive session.
    interactive: bool,

    #[argh(switch, short = 'v')]
    /// log each build step to stderr.
    verbose: bool,
}

/// Filter directives for the log subscriber. A non-empty `RUST_LOG` always wins.
fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "robot_builder=debug".to_string(),
        _ => "warn".to_string(),
    }
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let directives = log_directives(args.verbose, std::env::var("RUST_LOG").ok());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let workshop = Workshop::default();
    let mut stdout = std::io::stdout();

    if args.interactive {
        return workshop.repl().context("interactive session failed");
    }

    if args.sample {
        println!("{}", sample_robot());
        return Ok(());
    }

    if args.only.is_empty() {
        workshop.run_all(&mut stdout)
    } else {
        for name in &args.only {
            workshop.run(name, &mut stdout)?;
        }
        Ok(())
    }
}
