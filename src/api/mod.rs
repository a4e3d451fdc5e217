//! API handlers for part identification

pub mod identify;
pub mod routes;

pub use identify::IdentifyState;
pub use routes::build_router;
