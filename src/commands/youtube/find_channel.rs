use tracing::info;

use super::*;
use crate::{CommandResult, Context};

/// Show statistics and the most popular video of a YouTube channel
#[poise::command(slash_command, prefix_command, category = "YouTube")]
pub async fn find_channel(
    ctx: Context<'_>,
    #[description = "Channel name, e.g. A4"]
    #[rest]
    name: Option<String>,
) -> CommandResult {
    let Some(name) = normalize_argument(name.as_deref()) else {
        ctx.say(FIND_CHANNEL_USAGE).await?;
        return Ok(());
    };

    info!("Received find_channel command from {} for: {}", ctx.author().name, name);

    // Three API calls in a row; defer before the interaction token expires.
    ctx.defer().await?;

    let reply = channel_reply(&ctx.data().youtube, name).await;
    ctx.say(reply).await?;

    Ok(())
}
