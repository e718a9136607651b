pub mod cli;
pub mod file;
pub mod logger;
