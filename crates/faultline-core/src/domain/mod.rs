//! Domain model (IDs, errors, reports, entities).

pub mod errors;
pub mod ids;
pub mod report;
pub mod user;

pub use errors::{ApiFailure, FaultError};
pub use ids::TaskId;
pub use report::{SimOutcome, SimulationReport};
pub use user::{NewUser, User, UserUpdate};
