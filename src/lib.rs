pub mod config;
pub mod elevator;
pub mod logging;
pub mod manifest;
pub mod queue;
pub mod reporter;
pub mod services;
pub mod strategies;
pub mod types;

pub use elevator::Elevator;
pub use reporter::{ConsoleReporter, Recorder, Reporter, TracingReporter};
pub use strategies::look::Stop;
pub use types::direction::Direction;
pub use types::request::Request;
