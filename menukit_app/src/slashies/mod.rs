use crate::prelude::*;

mod confirm_demo;
mod embed;
mod guide;
mod help;

/// Gets all poise commands.
pub fn get_commands() -> Vec<poise::Command<AppData, AppError>> {
    vec![
        confirm_demo::confirm_demo(),
        embed::embed(),
        guide::guide(),
        help::help(),
    ]
}

/// Pre-command execution hook.
pub async fn pre_command(ctx: AppContext<'_>) {
    log::info!("{}: /{}", ctx.author().name, ctx.command().qualified_name);
}

/// Command execution error handler.
#[cold]
pub async fn error_handler(error: poise::FrameworkError<'_, AppData, AppError>) {
    match &error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            log::error!("Error in command: {error:?}");
            context_error(ctx, format!("Internal error: ```{error}```")).await;
        }
        poise::FrameworkError::ArgumentParse { error, input, ctx, .. } => {
            let feedback = format!(
                "Argument invalid: {}\nCaused by input: '{}'",
                error,
                input.as_deref().unwrap_or_default()
            );
            context_error(ctx, feedback).await;
        }
        _ => log::error!("Oh noes, we got an error: {error:?}"),
    }

    async fn context_error(ctx: &AppContext<'_>, feedback: String) {
        let embed = CreateEmbed::new()
            .description(feedback)
            .color(ERROR_EMBED_COLOR);

        let reply = ctx.create_ephemeral_reply().embed(embed);
        if let Err(err) = ctx.send(reply).await {
            log::error!("Error in error handler: {err:?}");
        }
    }
}
