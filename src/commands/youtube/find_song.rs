use tracing::info;

use super::*;
use crate::{CommandResult, Context};

/// Find a music video by artist
#[poise::command(slash_command, prefix_command, category = "YouTube")]
pub async fn find_song(
    ctx: Context<'_>,
    #[description = "Artist to search for, e.g. Linkin Park"]
    #[rest]
    artist: Option<String>,
) -> CommandResult {
    let Some(artist) = normalize_argument(artist.as_deref()) else {
        ctx.say(FIND_SONG_USAGE).await?;
        return Ok(());
    };

    info!("Received find_song command from {} for: {}", ctx.author().name, artist);

    // The search can take a while; keep the interaction alive.
    ctx.defer().await?;

    let reply = song_reply(&ctx.data().youtube, artist).await;
    ctx.say(reply).await?;

    Ok(())
}
