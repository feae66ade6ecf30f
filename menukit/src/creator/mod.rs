//! The menu-driven embed editor.
//!
//! [`EmbedCreator`] sends a builder message showing the work-in-progress
//! content and embeds, plus two select menus (section edits, embed
//! management) and Send/Cancel buttons. Section edits open a modal
//! pre-filled with the current values; field and embed management go
//! through short select prompts. The session resolves with the composed
//! message, leaving it to the caller to decide where to send it.

use poise::reply::CreateReply;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, EditMessage,
};
use serenity::builder::CreateEmbed;
use serenity::model::prelude::*;
use serenity::utils::QuickModalResponse;

use crate::prompts::{next_allowed_press, ModalPrompt};
use crate::view::{discard_message, ViewOptions};

mod config;
mod embed;

pub use config::{CreatorConfig, CreatorMessages, ModalText, OptionText};
pub use embed::{
    parse_color, EmbedData, EmbedField, ParseColorError, MAX_AUTHOR_NAME_LEN,
    MAX_DESCRIPTION_LEN, MAX_EMBEDS, MAX_FIELDS, MAX_FIELD_NAME_LEN, MAX_FIELD_VALUE_LEN,
    MAX_FOOTER_TEXT_LEN, MAX_TITLE_LEN, MAX_TOTAL_LEN,
};

use config::{action_keys, edit_keys};

/// Discord's cap on message content length.
const MAX_CONTENT_LEN: usize = 2000;

/// What the editor resolved with when the user pressed Send.
#[derive(Debug, Clone, Default)]
pub struct CreatorOutput {
    pub content: Option<String>,
    pub embeds: Vec<EmbedData>,
}

impl CreatorOutput {
    /// Renders the composed embeds into serenity builders.
    #[must_use]
    pub fn build_embeds(&self) -> Vec<CreateEmbed> {
        self.embeds.iter().map(EmbedData::build).collect()
    }
}

/// The embed editor session. See the module docs for the overall flow.
#[derive(Debug, Clone)]
pub struct EmbedCreator {
    view: ViewOptions,
    config: CreatorConfig,
    content: Option<String>,
    embeds: Vec<EmbedData>,
    current: usize,
}

/// Component custom IDs for one editor session.
struct Ids {
    edit: String,
    action: String,
    send: String,
    cancel: String,
    picker: String,
}

impl Ids {
    fn new(ctx_id: u64) -> Self {
        Ids {
            edit: format!("{ctx_id}_creator_edit"),
            action: format!("{ctx_id}_creator_action"),
            send: format!("{ctx_id}_creator_send"),
            cancel: format!("{ctx_id}_creator_cancel"),
            picker: format!("{ctx_id}_creator_pick"),
        }
    }
}

impl Default for EmbedCreator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedCreator {
    /// Creates an editor seeded with one placeholder embed.
    #[must_use]
    pub fn new() -> Self {
        let config = CreatorConfig::default();
        let seed = EmbedData {
            description: Some(config.messages.new_embed_description.clone()),
            ..Default::default()
        };

        EmbedCreator {
            view: ViewOptions::default(),
            config,
            content: None,
            embeds: vec![seed],
            current: 0,
        }
    }

    /// Creates an editor starting from an existing embed.
    #[must_use]
    pub fn with_embed(embed: EmbedData) -> Self {
        let mut creator = Self::new();
        creator.embeds = vec![embed];
        creator
    }

    #[must_use]
    pub fn view(mut self, view: ViewOptions) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn config(mut self, config: CreatorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Runs the editor session.
    ///
    /// Resolves with the composed message on Send, or [`None`] on Cancel
    /// and timeout.
    pub async fn run<U: Send + Sync + 'static, E>(
        mut self,
        ctx: poise::Context<'_, U, E>,
    ) -> Result<Option<CreatorOutput>, serenity::Error> {
        let ids = Ids::new(ctx.id());
        let sctx = ctx.serenity_context();

        let reply = CreateReply::default()
            .content(self.shown_content())
            .components(self.rows(false, &ids));
        let reply = self
            .build_embeds()
            .into_iter()
            .fold(reply, CreateReply::embed);
        let handle = ctx.send(reply).await?;
        let mut msg = handle.into_message().await?;

        loop {
            let Some(press) = next_allowed_press(ctx, &self.view, msg.id).await else {
                let rows = self.rows(true, &ids);
                self.view.apply_timeout(sctx, &mut msg, rows).await;
                return Ok(None);
            };

            if press.data.custom_id == ids.send {
                match self.try_finish(sctx, &press, &ids).await? {
                    Some(output) => return Ok(Some(output)),
                    None => continue,
                }
            }

            if press.data.custom_id == ids.cancel {
                press
                    .create_response(sctx, CreateInteractionResponse::Acknowledge)
                    .await?;
                discard_message(sctx, &msg).await;
                return Ok(None);
            }

            let key = match &press.data.kind {
                ComponentInteractionDataKind::StringSelect { values } => {
                    values.first().cloned().unwrap_or_default()
                }
                _ => String::new(),
            };

            if press.data.custom_id == ids.edit {
                self.handle_edit(ctx, &press, &key, &ids, &mut msg).await?;
            } else if press.data.custom_id == ids.action {
                self.handle_action(ctx, &press, &key, &ids, &mut msg).await?;
            } else {
                press
                    .create_response(sctx, CreateInteractionResponse::Acknowledge)
                    .await
                    .ok();
            }
        }
    }

    /// Validates the composed message; resolves it by disabling the menus.
    async fn try_finish(
        &mut self,
        ctx: &serenity::client::Context,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<Option<CreatorOutput>, serenity::Error> {
        let messages = &self.config.messages;
        if self.content.is_none() && self.embeds.iter().all(EmbedData::is_empty) {
            notice(ctx, press, &messages.nothing_to_send).await?;
            return Ok(None);
        }
        if self.embeds.iter().any(|e| e.text_len() > MAX_TOTAL_LEN) {
            notice(ctx, press, &messages.embed_too_long).await?;
            return Ok(None);
        }

        let done = CreateInteractionResponseMessage::new().components(self.rows(true, ids));
        press
            .create_response(ctx, CreateInteractionResponse::UpdateMessage(done))
            .await?;

        let embeds = std::mem::take(&mut self.embeds)
            .into_iter()
            .filter(|e| !e.is_empty())
            .collect();
        Ok(Some(CreatorOutput {
            content: self.content.take(),
            embeds,
        }))
    }

    async fn handle_edit<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        key: &str,
        ids: &Ids,
        msg: &mut Message,
    ) -> Result<(), serenity::Error> {
        match key {
            edit_keys::BODY => self.edit_body(ctx, press, ids).await,
            edit_keys::AUTHOR => self.edit_author(ctx, press, ids).await,
            edit_keys::FOOTER => self.edit_footer(ctx, press, ids).await,
            edit_keys::IMAGES => self.edit_images(ctx, press, ids).await,
            edit_keys::CONTENT => self.edit_content(ctx, press, ids).await,
            edit_keys::ADD_FIELD => self.add_field(ctx, press, ids).await,
            edit_keys::EDIT_FIELD => self.edit_field(ctx, press, ids, msg).await,
            edit_keys::REMOVE_FIELD => self.remove_field(ctx, press, ids, msg).await,
            _ => press
                .create_response(
                    ctx.serenity_context(),
                    CreateInteractionResponse::Acknowledge,
                )
                .await,
        }
    }

    async fn handle_action<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        key: &str,
        ids: &Ids,
        msg: &mut Message,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        match key {
            action_keys::ADD_EMBED => {
                if self.embeds.len() >= MAX_EMBEDS {
                    return notice(sctx, press, &self.config.messages.max_embeds).await;
                }

                self.embeds.push(EmbedData {
                    description: Some(self.config.messages.new_embed_description.clone()),
                    ..Default::default()
                });
                self.current = self.embeds.len() - 1;
                self.refresh_via_press(sctx, press, ids).await
            }
            action_keys::REMOVE_EMBED => {
                if self.embeds.len() <= 1 {
                    return notice(sctx, press, &self.config.messages.last_embed).await;
                }

                let options = self.embed_pick_options();
                let text = self.config.messages.pick_embed_remove.clone();
                let Some(picked) = self.pick(ctx, press, &text, options).await? else {
                    return Ok(());
                };
                picked.acknowledge_and_discard(sctx).await;

                if picked.index < self.embeds.len() {
                    self.embeds.remove(picked.index);
                }
                self.current = self.current.min(self.embeds.len() - 1);
                self.refresh_in_place(sctx, msg, ids).await
            }
            action_keys::SWITCH_EMBED => {
                if self.embeds.len() <= 1 {
                    return press
                        .create_response(sctx, CreateInteractionResponse::Acknowledge)
                        .await;
                }

                let options = self.embed_pick_options();
                let text = self.config.messages.pick_embed_switch.clone();
                let Some(picked) = self.pick(ctx, press, &text, options).await? else {
                    return Ok(());
                };
                picked.acknowledge_and_discard(sctx).await;

                self.current = picked.index.min(self.embeds.len() - 1);
                self.refresh_in_place(sctx, msg, ids).await
            }
            _ => press
                .create_response(sctx, CreateInteractionResponse::Acknowledge)
                .await,
        }
    }

    async fn edit_body<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        let modals = &self.config.modals;
        let embed = &self.embeds[self.current];
        let color = embed.color.map(|c| format!("#{:06x}", c.0));

        let prompt = ModalPrompt::new(&modals.body_title)
            .timeout(self.view.timeout)
            .prefilled(InputTextStyle::Short, &modals.body_title_label, embed.title.as_deref())
            .prefilled(
                InputTextStyle::Paragraph,
                &modals.body_description_label,
                embed.description.as_deref(),
            )
            .prefilled(InputTextStyle::Short, &modals.body_color_label, color.as_deref());
        let Some(submit) = prompt.execute(sctx, press).await? else {
            return Ok(());
        };

        let embed = &mut self.embeds[self.current];
        embed.title = text_value(submit.inputs.first(), MAX_TITLE_LEN);
        embed.description = text_value(submit.inputs.get(1), MAX_DESCRIPTION_LEN);

        let mut bad_color = false;
        match submit.inputs.get(2).map(|s| s.trim()) {
            None | Some("") => embed.color = None,
            Some(raw) => match parse_color(raw) {
                Ok(color) => embed.color = Some(color),
                // a bad string keeps the previous color
                Err(_) => bad_color = true,
            },
        }

        self.refresh_via_modal(sctx, &submit, ids).await?;
        if bad_color {
            let followup = CreateInteractionResponseFollowup::new()
                .content(&self.config.messages.color_convert_error)
                .ephemeral(true);
            submit.interaction.create_followup(sctx, followup).await?;
        }
        Ok(())
    }

    async fn edit_author<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        let modals = &self.config.modals;
        let embed = &self.embeds[self.current];

        let prompt = ModalPrompt::new(&modals.author_title)
            .timeout(self.view.timeout)
            .prefilled(InputTextStyle::Short, &modals.author_name_label, embed.author_name.as_deref())
            .prefilled(InputTextStyle::Short, &modals.author_icon_label, embed.author_icon_url.as_deref())
            .prefilled(InputTextStyle::Short, &modals.author_url_label, embed.author_url.as_deref());
        let Some(submit) = prompt.execute(sctx, press).await? else {
            return Ok(());
        };

        let embed = &mut self.embeds[self.current];
        embed.author_name = text_value(submit.inputs.first(), MAX_AUTHOR_NAME_LEN);
        embed.author_icon_url = url_value(submit.inputs.get(1));
        embed.author_url = url_value(submit.inputs.get(2));

        self.refresh_via_modal(sctx, &submit, ids).await
    }

    async fn edit_footer<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        let modals = &self.config.modals;
        let embed = &self.embeds[self.current];

        let prompt = ModalPrompt::new(&modals.footer_title)
            .timeout(self.view.timeout)
            .prefilled(InputTextStyle::Paragraph, &modals.footer_text_label, embed.footer_text.as_deref())
            .prefilled(InputTextStyle::Short, &modals.footer_icon_label, embed.footer_icon_url.as_deref());
        let Some(submit) = prompt.execute(sctx, press).await? else {
            return Ok(());
        };

        let embed = &mut self.embeds[self.current];
        embed.footer_text = text_value(submit.inputs.first(), MAX_FOOTER_TEXT_LEN);
        embed.footer_icon_url = url_value(submit.inputs.get(1));

        self.refresh_via_modal(sctx, &submit, ids).await
    }

    async fn edit_images<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        let modals = &self.config.modals;
        let embed = &self.embeds[self.current];

        let prompt = ModalPrompt::new(&modals.images_title)
            .timeout(self.view.timeout)
            .prefilled(InputTextStyle::Short, &modals.image_label, embed.image_url.as_deref())
            .prefilled(InputTextStyle::Short, &modals.thumbnail_label, embed.thumbnail_url.as_deref());
        let Some(submit) = prompt.execute(sctx, press).await? else {
            return Ok(());
        };

        let embed = &mut self.embeds[self.current];
        embed.image_url = url_value(submit.inputs.first());
        embed.thumbnail_url = url_value(submit.inputs.get(1));

        self.refresh_via_modal(sctx, &submit, ids).await
    }

    async fn edit_content<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        let modals = &self.config.modals;

        let prompt = ModalPrompt::new(&modals.content_title)
            .timeout(self.view.timeout)
            .prefilled(InputTextStyle::Paragraph, &modals.content_label, self.content.as_deref());
        let Some(submit) = prompt.execute(sctx, press).await? else {
            return Ok(());
        };

        self.content = text_value(submit.inputs.first(), MAX_CONTENT_LEN);
        self.refresh_via_modal(sctx, &submit, ids).await
    }

    async fn add_field<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        if self.embeds[self.current].fields.len() >= MAX_FIELDS {
            return notice(sctx, press, &self.config.messages.max_fields).await;
        }

        let modals = &self.config.modals;
        let prompt = ModalPrompt::new(&modals.add_field_title)
            .timeout(self.view.timeout)
            .input(required_input(InputTextStyle::Short, &modals.field_name_label, "name"))
            .input(required_input(InputTextStyle::Paragraph, &modals.field_value_label, "value"))
            .prefilled(InputTextStyle::Short, &modals.field_inline_label, Some("false"));
        let Some(submit) = prompt.execute(sctx, press).await? else {
            return Ok(());
        };

        let name = text_value(submit.inputs.first(), MAX_FIELD_NAME_LEN);
        let value = text_value(submit.inputs.get(1), MAX_FIELD_VALUE_LEN);
        if let (Some(name), Some(value)) = (name, value) {
            self.embeds[self.current].fields.push(EmbedField {
                name,
                value,
                inline: parse_inline(submit.inputs.get(2)),
            });
        }

        self.refresh_via_modal(sctx, &submit, ids).await
    }

    async fn remove_field<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
        msg: &mut Message,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        if self.embeds[self.current].fields.is_empty() {
            return notice(sctx, press, &self.config.messages.no_fields).await;
        }

        let options = self.field_pick_options();
        let text = self.config.messages.pick_field_remove.clone();
        let Some(picked) = self.pick(ctx, press, &text, options).await? else {
            return Ok(());
        };
        picked.acknowledge_and_discard(sctx).await;

        let fields = &mut self.embeds[self.current].fields;
        if picked.index < fields.len() {
            fields.remove(picked.index);
        }
        self.refresh_in_place(sctx, msg, ids).await
    }

    async fn edit_field<U: Send + Sync + 'static, E>(
        &mut self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        ids: &Ids,
        msg: &mut Message,
    ) -> Result<(), serenity::Error> {
        let sctx = ctx.serenity_context();
        if self.embeds[self.current].fields.is_empty() {
            return notice(sctx, press, &self.config.messages.no_fields).await;
        }

        let options = self.field_pick_options();
        let text = self.config.messages.pick_field_edit.clone();
        let Some(picked) = self.pick(ctx, press, &text, options).await? else {
            return Ok(());
        };

        let Some(field) = self.embeds[self.current].fields.get(picked.index) else {
            picked.acknowledge_and_discard(sctx).await;
            return Ok(());
        };

        let modals = &self.config.modals;
        let inline = if field.inline { "true" } else { "false" };
        let prompt = ModalPrompt::new(&modals.edit_field_title)
            .timeout(self.view.timeout)
            .prefilled(InputTextStyle::Short, &modals.field_name_label, Some(&field.name))
            .prefilled(InputTextStyle::Paragraph, &modals.field_value_label, Some(&field.value))
            .prefilled(InputTextStyle::Short, &modals.field_inline_label, Some(inline));

        // the modal is the response to the picker's interaction
        let submit = prompt.execute(sctx, &picked.interaction).await?;
        discard_message(sctx, &picked.message).await;
        let Some(submit) = submit else {
            return Ok(());
        };

        let field = &mut self.embeds[self.current].fields[picked.index];
        if let Some(name) = text_value(submit.inputs.first(), MAX_FIELD_NAME_LEN) {
            field.name = name;
        }
        if let Some(value) = text_value(submit.inputs.get(1), MAX_FIELD_VALUE_LEN) {
            field.value = value;
        }
        field.inline = parse_inline(submit.inputs.get(2));

        // the modal's own message is gone, so refresh the builder directly
        submit
            .interaction
            .create_response(sctx, CreateInteractionResponse::Acknowledge)
            .await
            .ok();
        self.refresh_in_place(sctx, msg, ids).await
    }

    /// Sends a short-lived select prompt and waits for the author's pick.
    ///
    /// The caller decides how to respond to the returned interaction; on
    /// timeout the prompt message is discarded and [`None`] returned.
    async fn pick<U: Send + Sync + 'static, E>(
        &self,
        ctx: poise::Context<'_, U, E>,
        press: &ComponentInteraction,
        text: &str,
        options: Vec<CreateSelectMenuOption>,
    ) -> Result<Option<Picked>, serenity::Error> {
        let sctx = ctx.serenity_context();
        press
            .create_response(sctx, CreateInteractionResponse::Acknowledge)
            .await?;

        let ids = Ids::new(ctx.id());
        let menu = CreateSelectMenu::new(&ids.picker, CreateSelectMenuKind::String { options });
        let reply = CreateReply::default()
            .content(text)
            .components(vec![CreateActionRow::SelectMenu(menu)]);

        let handle = ctx.send(reply).await?;
        let message = handle.into_message().await?;

        let Some(interaction) = next_allowed_press(ctx, &self.view, message.id).await else {
            discard_message(sctx, &message).await;
            return Ok(None);
        };

        let index = match &interaction.data.kind {
            ComponentInteractionDataKind::StringSelect { values } => {
                values.first().and_then(|v| v.parse().ok())
            }
            _ => None,
        };
        let Some(index) = index else {
            discard_message(sctx, &message).await;
            return Ok(None);
        };

        Ok(Some(Picked {
            index,
            interaction,
            message,
        }))
    }

    fn field_pick_options(&self) -> Vec<CreateSelectMenuOption> {
        self.embeds[self.current]
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                CreateSelectMenuOption::new(utils::text::truncate(&field.name, 100), i.to_string())
            })
            .collect()
    }

    fn embed_pick_options(&self) -> Vec<CreateSelectMenuOption> {
        self.embeds
            .iter()
            .enumerate()
            .map(|(i, embed)| {
                let label = match &embed.title {
                    Some(title) => utils::text::truncate(title, 100).into_owned(),
                    None => format!("Embed {}", i + 1),
                };
                CreateSelectMenuOption::new(label, i.to_string())
            })
            .collect()
    }

    /// The builder message content, with an embed cursor when several exist.
    fn shown_content(&self) -> String {
        let base = self
            .content
            .as_deref()
            .unwrap_or(&self.config.messages.start_content);
        if self.embeds.len() > 1 {
            format!(
                "{base}\n{} {}/{}",
                self.config.messages.editing_embed,
                self.current + 1,
                self.embeds.len()
            )
        } else {
            base.to_owned()
        }
    }

    fn build_embeds(&self) -> Vec<CreateEmbed> {
        self.embeds.iter().map(EmbedData::build).collect()
    }

    fn rows(&self, disabled: bool, ids: &Ids) -> Vec<CreateActionRow> {
        let edit = CreateSelectMenu::new(
            &ids.edit,
            CreateSelectMenuKind::String {
                options: self.config.edit_options(),
            },
        )
        .placeholder(&self.config.edit_placeholder)
        .disabled(disabled);

        let action = CreateSelectMenu::new(
            &ids.action,
            CreateSelectMenuKind::String {
                options: self.config.action_options(),
            },
        )
        .placeholder(&self.config.action_placeholder)
        .disabled(disabled);

        let style = |style| if disabled { self.view.disable_style } else { style };
        let send = CreateButton::new(&ids.send)
            .label(&self.config.send_label)
            .style(style(self.config.send_style))
            .disabled(disabled);
        let cancel = CreateButton::new(&ids.cancel)
            .label(&self.config.cancel_label)
            .style(style(self.config.cancel_style))
            .disabled(disabled);

        vec![
            CreateActionRow::SelectMenu(edit),
            CreateActionRow::SelectMenu(action),
            CreateActionRow::Buttons(vec![send, cancel]),
        ]
    }

    fn refresh_response(&self, ids: &Ids) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .content(self.shown_content())
            .embeds(self.build_embeds())
            .components(self.rows(false, ids))
    }

    /// Refreshes the builder message as the response to a menu press.
    async fn refresh_via_press(
        &self,
        ctx: &serenity::client::Context,
        press: &ComponentInteraction,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let response = CreateInteractionResponse::UpdateMessage(self.refresh_response(ids));
        press.create_response(ctx, response).await
    }

    /// Refreshes the builder message as the response to a modal submit.
    async fn refresh_via_modal(
        &self,
        ctx: &serenity::client::Context,
        submit: &QuickModalResponse,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let response = CreateInteractionResponse::UpdateMessage(self.refresh_response(ids));
        submit.interaction.create_response(ctx, response).await
    }

    /// Refreshes the builder message by editing it outright.
    async fn refresh_in_place(
        &self,
        ctx: &serenity::client::Context,
        msg: &mut Message,
        ids: &Ids,
    ) -> Result<(), serenity::Error> {
        let edit = EditMessage::new()
            .content(self.shown_content())
            .embeds(self.build_embeds())
            .components(self.rows(false, ids));
        msg.edit(ctx, edit).await
    }
}

/// A resolved picker prompt.
struct Picked {
    index: usize,
    interaction: ComponentInteraction,
    message: Message,
}

impl Picked {
    /// Consumes the pick with a plain acknowledgement and drops its message.
    async fn acknowledge_and_discard(&self, ctx: &serenity::client::Context) {
        self.interaction
            .create_response(ctx, CreateInteractionResponse::Acknowledge)
            .await
            .ok();
        discard_message(ctx, &self.message).await;
    }
}

/// Sends an ephemeral notice as the interaction response.
async fn notice(
    ctx: &serenity::client::Context,
    press: &ComponentInteraction,
    text: &str,
) -> Result<(), serenity::Error> {
    let message = CreateInteractionResponseMessage::new()
        .content(text)
        .ephemeral(true);
    press
        .create_response(ctx, CreateInteractionResponse::Message(message))
        .await
}

/// Normalizes a modal input: trims, maps empty to [`None`], clamps length.
fn text_value(value: Option<&String>, limit: usize) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    let mut value = value.to_owned();
    utils::text::truncate_in_place(&mut value, limit);
    Some(value)
}

/// Like [`text_value`], but for URLs, which are never truncated.
fn url_value(value: Option<&String>) -> Option<String> {
    let value = value?.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// The inline flag is the literal string `true`, case-insensitively.
fn parse_inline(value: Option<&String>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

fn required_input(style: InputTextStyle, label: &str, custom_id: &str) -> serenity::builder::CreateInputText {
    serenity::builder::CreateInputText::new(style, label, custom_id).required(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_value_trims_and_clears() {
        assert_eq!(text_value(Some(&"  hello  ".to_owned()), 10), Some("hello".to_owned()));
        assert_eq!(text_value(Some(&"   ".to_owned()), 10), None);
        assert_eq!(text_value(None, 10), None);
    }

    #[test]
    fn text_value_clamps_to_limit() {
        let long = "a".repeat(300);
        let clamped = text_value(Some(&long), MAX_TITLE_LEN).unwrap();
        assert_eq!(clamped.chars().count(), MAX_TITLE_LEN);
        assert!(clamped.ends_with('…'));
    }

    #[test]
    fn parse_inline_accepts_only_true() {
        assert!(parse_inline(Some(&"true".to_owned())));
        assert!(parse_inline(Some(&" TRUE ".to_owned())));
        assert!(!parse_inline(Some(&"yes".to_owned())));
        assert!(!parse_inline(Some(&String::new())));
        assert!(!parse_inline(None));
    }

    #[test]
    fn new_creator_seeds_one_embed() {
        let creator = EmbedCreator::new();
        assert_eq!(creator.embeds.len(), 1);
        assert!(!creator.embeds[0].is_empty());
        assert_eq!(creator.current, 0);
    }

    #[test]
    fn shown_content_tracks_embed_cursor() {
        let mut creator = EmbedCreator::new();
        assert!(!creator.shown_content().contains("1/1"));

        creator.embeds.push(EmbedData::default());
        assert!(creator.shown_content().contains("1/2"));
    }
}
