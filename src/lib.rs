//! songscout: a Discord bot that finds music videos and YouTube channel
//! information through the YouTube Data API.

pub mod commands;
pub mod config;
pub mod events;
pub mod utils;

use commands::{
    general::start::*,
    youtube::{find_channel::*, find_song::*},
};
use utils::youtube::YoutubeClient;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// User data, which is stored and accessible in all command invocations.
pub struct Data {
    /// Shared API client; all commands reuse its connection pool.
    pub youtube: YoutubeClient,
}

const HELP_FOOTER: &str = "Use /find_song to search for a music video by artist and /find_channel to get information about a YouTube channel. For example, /find_song Linkin Park or /find_channel A4.";

#[poise::command(slash_command, prefix_command, category = "General")]
async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> CommandResult {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            extra_text_at_bottom: HELP_FOOTER,
            show_context_menu_commands: true,
            ..Default::default()
        },
    )
    .await
    .map_err(|e| e.into())
}

#[poise::command(prefix_command, owners_only, hide_in_help)]
async fn register(ctx: Context<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx)
        .await
        .map_err(|e| e.into())
}

/// Every command the bot registers.
pub fn all_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        // Default commands
        register(),
        help(),
        // General commands
        start(),
        // YouTube commands
        find_song(),
        find_channel(),
    ]
}
