//! Domain logic - pure versioning rules independent of files and git

pub mod commit;
pub mod version;

pub use commit::CommitMessage;
pub use version::{Marker, Version};
