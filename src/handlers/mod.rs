pub mod imports;
pub mod mappings;
pub mod matches;
pub mod shared;
pub mod teams;
