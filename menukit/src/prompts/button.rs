use poise::reply::CreateReply;
use serenity::builder::{CreateActionRow, CreateButton, CreateInteractionResponse};
use serenity::model::prelude::*;

use crate::view::{discard_message, ViewOptions};

/// A yes/no button prompt.
///
/// Sends the given reply with two buttons attached and resolves with the
/// author's choice. The prompt message is discarded after a press.
///
/// ```no_run
/// # async fn demo<U: Send + Sync + 'static, E>(ctx: poise::Context<'_, U, E>) -> Result<(), serenity::Error> {
/// use menukit::ConfirmPrompt;
/// use poise::reply::CreateReply;
///
/// let reply = CreateReply::default().content("Really delete everything?");
/// if let Some(true) = ConfirmPrompt::new().run(ctx, reply).await? {
///     // proceed
/// }
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    view: ViewOptions,
    yes_label: String,
    no_label: String,
    yes_style: ButtonStyle,
    no_style: ButtonStyle,
    yes_emoji: Option<ReactionType>,
    no_emoji: Option<ReactionType>,
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        ConfirmPrompt {
            view: ViewOptions::default(),
            yes_label: "Yes".to_owned(),
            no_label: "No".to_owned(),
            yes_style: ButtonStyle::Success,
            no_style: ButtonStyle::Danger,
            yes_emoji: None,
            no_emoji: None,
        }
    }
}

impl ConfirmPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(mut self, view: ViewOptions) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn labels(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes_label = yes.into();
        self.no_label = no.into();
        self
    }

    #[must_use]
    pub fn styles(mut self, yes: ButtonStyle, no: ButtonStyle) -> Self {
        self.yes_style = yes;
        self.no_style = no;
        self
    }

    #[must_use]
    pub fn emojis(mut self, yes: impl Into<ReactionType>, no: impl Into<ReactionType>) -> Self {
        self.yes_emoji = Some(yes.into());
        self.no_emoji = Some(no.into());
        self
    }

    /// Runs the prompt. Resolves with the choice, or [`None`] on timeout.
    pub async fn run<U: Send + Sync + 'static, E>(
        self,
        ctx: poise::Context<'_, U, E>,
        reply: CreateReply,
    ) -> Result<Option<bool>, serenity::Error> {
        let yes_id = format!("{}_confirm_yes", ctx.id());
        let no_id = format!("{}_confirm_no", ctx.id());

        let handle = ctx.send(reply.components(self.rows(false, &yes_id, &no_id))).await?;
        let mut msg = handle.into_message().await?;

        let Some(press) = super::next_allowed_press(ctx, &self.view, msg.id).await else {
            let rows = self.rows(true, &yes_id, &no_id);
            self.view.apply_timeout(ctx.serenity_context(), &mut msg, rows).await;
            return Ok(None);
        };

        press
            .create_response(ctx.serenity_context(), CreateInteractionResponse::Acknowledge)
            .await?;
        discard_message(ctx.serenity_context(), &msg).await;
        Ok(Some(press.data.custom_id == yes_id))
    }

    fn rows(&self, disabled: bool, yes_id: &str, no_id: &str) -> Vec<CreateActionRow> {
        let style = |style| if disabled { self.view.disable_style } else { style };

        let mut yes = CreateButton::new(yes_id)
            .label(&self.yes_label)
            .style(style(self.yes_style))
            .disabled(disabled);
        let mut no = CreateButton::new(no_id)
            .label(&self.no_label)
            .style(style(self.no_style))
            .disabled(disabled);

        if let Some(emoji) = &self.yes_emoji {
            yes = yes.emoji(emoji.clone());
        }
        if let Some(emoji) = &self.no_emoji {
            no = no.emoji(emoji.clone());
        }

        vec![CreateActionRow::Buttons(vec![yes, no])]
    }
}
