pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod imports;

pub use config::Config;
pub use error::AppError;
pub use imports::ScheduleImporter;
