use poise::serenity_prelude as serenity;
use tracing::{debug, info};

use crate::commands::youtube::TextCommand;
use crate::{Data, Error};

/// Handles gateway events poise does not turn into commands.
///
/// Lookup commands typed as ordinary messages (`/find_song Linkin Park` sent
/// without picking the slash command) are answered here.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        if new_message.author.bot {
            return Ok(());
        }

        // With a "/" prefix poise already handles these as prefix commands.
        if framework.options.prefix_options.prefix.as_deref() == Some("/") {
            return Ok(());
        }

        let Some(command) = TextCommand::parse(&new_message.content) else {
            return Ok(());
        };

        info!(
            "Received text command {:?} from {}",
            command, new_message.author.name
        );

        if let Err(e) = new_message.channel_id.broadcast_typing(&ctx.http).await {
            debug!("Unable to send typing indicator: {}", e);
        }

        let reply = command.reply(&data.youtube).await;
        new_message.reply(&ctx.http, reply).await?;
    }

    Ok(())
}
