//! Workflows behind the command line
//!
//! - `orchestration` - the bump workflow
//! - `setup` - installing the CI workflow and the version file

pub mod orchestration;
pub mod setup;
