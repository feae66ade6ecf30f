use menukit::ConfirmPrompt;

use crate::prelude::*;

/// Asks a yes/no question and reports the answer.
#[poise::command(slash_command, rename = "confirm-demo")]
pub async fn confirm_demo(
    ctx: AppContext<'_>,
    #[description = "The question to ask."] question: Option<String>,
) -> AppResult {
    let question = question.unwrap_or_else(|| "Are you sure?".to_owned());

    let reply = CreateReply::default().content(question);
    let choice = ConfirmPrompt::new().run(ctx, reply).await?;

    let feedback = match choice {
        Some(true) => "Confirmed.",
        Some(false) => "Declined.",
        None => "No answer in time.",
    };

    ctx.send(ctx.create_ephemeral_reply().content(feedback)).await?;
    Ok(())
}
