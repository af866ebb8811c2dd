//! This module aggregates all the command modules for the bot.

/// General purpose commands (e.g., start).
pub mod general;
/// YouTube lookup commands (song search, channel information).
pub mod youtube;
