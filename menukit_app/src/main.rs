use serenity::model::prelude::*;
use serenity::prelude::*;

mod config;
mod data;
mod prelude;
mod slashies;

use data::AppData;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    config::init_logging(&config.log);

    log::info!("Starting...");
    let start = std::time::Instant::now();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: slashies::get_commands(),
            pre_command: |ctx| Box::pin(slashies::pre_command(ctx)),
            on_error: |err| Box::pin(slashies::error_handler(err)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                log::info!("Logged in as: {} ({:.2?})", ready.user.name, start.elapsed());
                Ok(AppData::default())
            })
        })
        .build();

    let mut client = Client::builder(config.discord.token, GatewayIntents::empty())
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}
