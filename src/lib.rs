pub mod cli;
pub mod commands;
pub mod error;
pub mod fs_utils;
pub mod ini;
pub mod key_value;
pub mod locate;
pub mod paths;
pub mod rewrite;
pub mod section;
pub mod store;
pub mod telemetry;
pub mod ui;
pub mod writer;

#[cfg(test)]
pub mod test_utils;
