//! Campus route CLI library.
//!
//! This crate provides the interactive session loop and output formatting
//! used by the `campus-route` binary.

pub mod output;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;
