pub mod dump;
pub mod summary;
