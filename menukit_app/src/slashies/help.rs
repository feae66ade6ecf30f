use menukit::send_help;

use crate::prelude::*;

/// Shows help for the bot, a category, or a single command.
#[poise::command(slash_command)]
pub async fn help(
    ctx: AppContext<'_>,
    #[description = "A command or category to get help for."] query: Option<String>,
) -> AppResult {
    send_help(ctx, query.as_deref(), ctx.data().help.clone()).await?;
    Ok(())
}
