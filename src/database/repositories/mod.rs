pub mod mapping;
pub mod matches;
pub mod team;

// Re-export all repositories for easy importing
pub use mapping::MappingRepository;
pub use matches::MatchRepository;
pub use team::TeamRepository;
