//! A small showcase of the Builder pattern applied to robots.
//!
//! A [`Robot`] is assembled step by step by one of the concrete builders in
//! [`builder`]. The [`Director`] drives any builder through the same fixed
//! sequence of steps, so the calling code never needs to know which archetype
//! it is producing. The [`Workshop`] keeps a registry of builders addressable
//! by name and powers both the command-line demo and the interactive loop.

pub mod builder;
mod director;
pub mod part;
pub mod robot;
mod sample;
mod workshop;

pub use director::Director;
pub use part::Part;
pub use robot::{Count, Robot};
pub use sample::sample_robot;

/// Convenient re-export of the named builder registry.
///
/// See [`Workshop`] for the high-level API.
pub use workshop::{BuilderFactory, Factory, Workshop};
