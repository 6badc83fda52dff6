//! CLI subcommand implementations.

pub mod calendar;
pub mod history;
pub mod indexes;
pub mod indicators;
pub mod institutional;
pub mod markets;
pub mod quotes;
pub mod senate;
