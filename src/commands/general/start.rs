use poise::CreateReply;
use ::serenity::all::CreateEmbed;

use crate::{CommandResult, Context};

pub const GREETING: &str = "Hi! I can find music videos and YouTube channel information for you.";

/// Say hello and list what the bot can do
#[poise::command(slash_command, prefix_command, category = "General")]
pub async fn start(ctx: Context<'_>) -> CommandResult {
    let embed = CreateEmbed::new()
        .title("🎵 songscout")
        .description(GREETING)
        .field(
            "/find_song <artist>",
            "Finds a music video, e.g. `/find_song Linkin Park`",
            false,
        )
        .field(
            "/find_channel <name>",
            "Shows channel statistics and its most popular video, e.g. `/find_channel A4`",
            false,
        );

    let reply = CreateReply::default().embed(embed).ephemeral(false);

    ctx.send(reply).await?;

    Ok(())
}
