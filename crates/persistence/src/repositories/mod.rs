//! Repository implementations for the metrics counting queries.
//!
//! Each repository is an independent, side-effect-free set of read queries.
//! None of them assumes an execution order relative to the others; callers
//! may fan them out concurrently.

pub mod aquarium;
pub mod measurement;
pub mod task;
pub mod user;

pub use aquarium::AquariumRepository;
pub use measurement::MeasurementRepository;
pub use task::TaskRepository;
pub use user::UserRepository;
