//! General purpose commands that are not tied to a lookup.

/// Submodule defining the `/start` command.
pub(crate) mod start;
