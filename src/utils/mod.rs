//! This module aggregates various utility submodules used throughout the application.

/// Client for the YouTube Data API and the channel lookup built on it.
pub mod youtube;
