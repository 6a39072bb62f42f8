pub mod config;
pub mod notes;
pub mod settings;
pub mod task;
pub mod timer;
pub mod today;
