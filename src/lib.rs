//! todo library - ordered now/soon/later/maybe task lists and their storage

pub mod cli;
pub mod display;
pub mod tasks;
