//! Button-driven pagination sessions.
//!
//! [`Paginator`] renders pages from a [`PageSource`] and attaches a nav row
//! (first/previous/next/last/stop). The index arithmetic is bounds-checked;
//! buttons that cannot move are disabled. Single-page sources are sent
//! without any buttons at all.

use poise::reply::CreateReply;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::collector::ComponentInteractionCollector;
use serenity::model::prelude::*;

use crate::view::{discard_message, TimeoutAction, ViewOptions};

mod source;

pub use source::{
    DescriptionPages, EmbedPages, FieldPages, PageSource, RenderedPage, TextPages,
};

/// Emojis and styles of the nav buttons.
#[derive(Debug, Clone)]
pub struct NavStyle {
    pub first_emoji: ReactionType,
    pub previous_emoji: ReactionType,
    pub next_emoji: ReactionType,
    pub last_emoji: ReactionType,
    pub stop_emoji: ReactionType,
    pub first_style: ButtonStyle,
    pub previous_style: ButtonStyle,
    pub next_style: ButtonStyle,
    pub last_style: ButtonStyle,
    pub stop_style: ButtonStyle,
}

impl Default for NavStyle {
    fn default() -> Self {
        let unicode = |s: &str| ReactionType::Unicode(s.to_owned());
        NavStyle {
            first_emoji: unicode("⏪"),
            previous_emoji: unicode("◀️"),
            next_emoji: unicode("▶️"),
            last_emoji: unicode("⏩"),
            stop_emoji: unicode("⏹️"),
            first_style: ButtonStyle::Secondary,
            previous_style: ButtonStyle::Primary,
            next_style: ButtonStyle::Primary,
            last_style: ButtonStyle::Secondary,
            stop_style: ButtonStyle::Danger,
        }
    }
}

/// A pagination session over a [`PageSource`].
#[derive(Debug, Clone)]
pub struct Paginator<S> {
    source: S,
    view: ViewOptions,
    nav: NavStyle,
    refusal: String,
}

struct NavIds {
    first: String,
    previous: String,
    next: String,
    last: String,
    stop: String,
}

impl NavIds {
    fn new(ctx_id: u64) -> Self {
        NavIds {
            first: format!("{ctx_id}_page_first"),
            previous: format!("{ctx_id}_page_prev"),
            next: format!("{ctx_id}_page_next"),
            last: format!("{ctx_id}_page_last"),
            stop: format!("{ctx_id}_page_stop"),
        }
    }
}

impl<S: PageSource> Paginator<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Paginator {
            source,
            view: ViewOptions::default().on_timeout(TimeoutAction::Disable),
            nav: NavStyle::default(),
            refusal: "This pagination menu cannot be controlled by you, sorry!".to_owned(),
        }
    }

    #[must_use]
    pub fn view(mut self, view: ViewOptions) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn nav(mut self, nav: NavStyle) -> Self {
        self.nav = nav;
        self
    }

    #[must_use]
    pub fn refusal(mut self, refusal: impl Into<String>) -> Self {
        self.refusal = refusal.into();
        self
    }

    /// Runs the session until stop, timeout, or an API error.
    ///
    /// The invoking author and the framework's configured owners may
    /// navigate; everyone else gets an ephemeral refusal.
    pub async fn run<U: Send + Sync + 'static, E>(
        self,
        ctx: poise::Context<'_, U, E>,
    ) -> Result<(), serenity::Error> {
        let pages = self.source.page_count();
        if pages == 0 {
            log::debug!("Paginator over an empty source, nothing sent");
            return Ok(());
        }

        let sctx = ctx.serenity_context();
        let ids = NavIds::new(ctx.id());
        let mut current = 0usize;

        let reply = page_reply(self.source.render_page(current))
            .components(self.rows(current, pages, &ids));
        let handle = ctx.send(reply).await?;

        if pages <= 1 {
            return Ok(());
        }
        let mut msg = handle.into_message().await?;

        loop {
            let press = ComponentInteractionCollector::new(sctx)
                .message_id(msg.id)
                .timeout(self.view.timeout)
                .await;

            let Some(press) = press else {
                // dropping the components ends the session visibly
                self.view.apply_timeout(sctx, &mut msg, Vec::new()).await;
                return Ok(());
            };

            let allowed = self.view.allows(ctx.author().id, press.user.id)
                || ctx.framework().options.owners.contains(&press.user.id);
            if !allowed {
                let refusal = CreateInteractionResponseMessage::new()
                    .content(&self.refusal)
                    .ephemeral(true);
                press
                    .create_response(sctx, CreateInteractionResponse::Message(refusal))
                    .await
                    .ok();
                continue;
            }

            if press.data.custom_id == ids.stop {
                press
                    .create_response(sctx, CreateInteractionResponse::Acknowledge)
                    .await?;
                discard_message(sctx, &msg).await;
                return Ok(());
            }

            let target = if press.data.custom_id == ids.first {
                Some(0)
            } else if press.data.custom_id == ids.previous {
                current.checked_sub(1)
            } else if press.data.custom_id == ids.next {
                (current + 1 < pages).then_some(current + 1)
            } else if press.data.custom_id == ids.last {
                Some(pages - 1)
            } else {
                None
            };

            // out-of-range requests are ignored, matching the disabled buttons
            let Some(target) = target else {
                press
                    .create_response(sctx, CreateInteractionResponse::Acknowledge)
                    .await
                    .ok();
                continue;
            };

            current = target;
            let page = self.source.render_page(current);
            let update = CreateInteractionResponseMessage::new()
                .content(page.content.unwrap_or_default())
                .embeds(page.embed.into_iter().collect())
                .components(self.rows(current, pages, &ids));
            press
                .create_response(sctx, CreateInteractionResponse::UpdateMessage(update))
                .await?;
        }
    }

    fn rows(&self, current: usize, pages: usize, ids: &NavIds) -> Vec<CreateActionRow> {
        if pages <= 1 {
            return Vec::new();
        }

        let at_start = current == 0;
        let at_end = current + 1 >= pages;
        let nav = &self.nav;

        let button = |id: &str, emoji: &ReactionType, style: ButtonStyle, disabled: bool| {
            let style = if disabled { self.view.disable_style } else { style };
            CreateButton::new(id)
                .emoji(emoji.clone())
                .style(style)
                .disabled(disabled)
        };

        vec![CreateActionRow::Buttons(vec![
            button(&ids.first, &nav.first_emoji, nav.first_style, at_start),
            button(&ids.previous, &nav.previous_emoji, nav.previous_style, at_start),
            button(&ids.next, &nav.next_emoji, nav.next_style, at_end),
            button(&ids.last, &nav.last_emoji, nav.last_style, at_end),
            button(&ids.stop, &nav.stop_emoji, nav.stop_style, false),
        ])]
    }
}

fn page_reply(page: RenderedPage) -> CreateReply {
    let mut reply = CreateReply::default();
    if let Some(content) = page.content {
        reply = reply.content(content);
    }
    if let Some(embed) = page.embed {
        reply = reply.embed(embed);
    }
    reply
}
