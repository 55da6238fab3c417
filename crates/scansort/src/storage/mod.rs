pub mod filesystem;

pub use filesystem::{FilingDecision, FilingEngine, MAX_COLLISION_PROBES};
