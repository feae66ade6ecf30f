use menukit::EmbedCreator;

use crate::prelude::*;

/// Interactively composes a message with embeds and sends it here.
#[poise::command(slash_command)]
pub async fn embed(ctx: AppContext<'_>) -> AppResult {
    let Some(output) = EmbedCreator::new().run(ctx).await? else {
        return Ok(());
    };

    let mut message = CreateMessage::new().embeds(output.build_embeds());
    if let Some(content) = output.content {
        message = message.content(content);
    }

    ctx.channel_id().send_message(ctx.http(), message).await?;
    Ok(())
}
