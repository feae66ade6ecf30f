//! One-shot prompt widgets that resolve with the user's choice.

use serenity::builder::CreateInteractionResponse;
use serenity::collector::ComponentInteractionCollector;
use serenity::model::prelude::*;

use crate::view::ViewOptions;

mod button;
mod modal;
mod select;

pub use button::ConfirmPrompt;
pub use modal::ModalPrompt;
pub use select::{
    ChannelSelectPrompt, MentionableSelectPrompt, RoleSelectPrompt, SelectPrompt, UserSelectPrompt,
};

/// Waits for the next component press on `message_id` by an allowed user.
///
/// Presses from anyone else are acknowledged without effect. [`None`] means
/// the view timed out.
pub(crate) async fn next_allowed_press<U: Send + Sync + 'static, E>(
    ctx: poise::Context<'_, U, E>,
    view: &ViewOptions,
    message_id: MessageId,
) -> Option<ComponentInteraction> {
    loop {
        let press = ComponentInteractionCollector::new(ctx.serenity_context())
            .message_id(message_id)
            .timeout(view.timeout)
            .await?;

        if view.allows(ctx.author().id, press.user.id) {
            return Some(press);
        }

        press
            .create_response(ctx.serenity_context(), CreateInteractionResponse::Acknowledge)
            .await
            .ok();
    }
}
