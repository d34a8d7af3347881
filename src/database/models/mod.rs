pub mod mapping;
pub mod matches;
pub mod team;

// Re-export all models for easy importing
pub use mapping::*;
pub use matches::*;
pub use team::*;
