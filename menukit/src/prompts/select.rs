use poise::reply::CreateReply;
use serenity::builder::{
    CreateActionRow, CreateInteractionResponse, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::prelude::*;

use crate::view::{discard_message, ViewOptions};

/// A select-menu prompt over caller-supplied string options.
///
/// Resolves with the selected option values. The prompt message is
/// discarded after a selection.
#[derive(Debug, Clone)]
pub struct SelectPrompt {
    core: SelectCore,
    options: Vec<CreateSelectMenuOption>,
}

/// A select-menu prompt over the guild's channels.
#[derive(Debug, Clone)]
pub struct ChannelSelectPrompt {
    core: SelectCore,
    channel_types: Option<Vec<ChannelType>>,
}

/// A select-menu prompt over the guild's roles.
#[derive(Debug, Clone)]
pub struct RoleSelectPrompt {
    core: SelectCore,
}

/// A select-menu prompt over users.
#[derive(Debug, Clone)]
pub struct UserSelectPrompt {
    core: SelectCore,
}

/// A select-menu prompt over users and roles alike.
#[derive(Debug, Clone)]
pub struct MentionableSelectPrompt {
    core: SelectCore,
}

/// Settings shared by all the select prompt flavors.
#[derive(Debug, Clone)]
struct SelectCore {
    view: ViewOptions,
    placeholder: Option<String>,
    min_values: u8,
    max_values: u8,
}

impl Default for SelectCore {
    fn default() -> Self {
        SelectCore {
            view: ViewOptions::default(),
            placeholder: None,
            min_values: 1,
            max_values: 1,
        }
    }
}

impl SelectCore {
    /// Sends the reply with the menu attached and waits for a selection.
    ///
    /// Resolves with the raw interaction data, or [`None`] on timeout.
    async fn run<U: Send + Sync + 'static, E>(
        &self,
        ctx: poise::Context<'_, U, E>,
        reply: CreateReply,
        kind: CreateSelectMenuKind,
    ) -> Result<Option<ComponentInteractionDataKind>, serenity::Error> {
        let custom_id = format!("{}_select_prompt", ctx.id());
        let mut menu = CreateSelectMenu::new(custom_id, kind)
            .min_values(self.min_values)
            .max_values(self.max_values);
        if let Some(placeholder) = &self.placeholder {
            menu = menu.placeholder(placeholder);
        }

        let rows = vec![CreateActionRow::SelectMenu(menu.clone())];
        let handle = ctx.send(reply.components(rows)).await?;
        let mut msg = handle.into_message().await?;

        let Some(press) = super::next_allowed_press(ctx, &self.view, msg.id).await else {
            let rows = vec![CreateActionRow::SelectMenu(menu.disabled(true))];
            self.view.apply_timeout(ctx.serenity_context(), &mut msg, rows).await;
            return Ok(None);
        };

        press
            .create_response(ctx.serenity_context(), CreateInteractionResponse::Acknowledge)
            .await?;
        discard_message(ctx.serenity_context(), &msg).await;
        Ok(Some(press.data.kind.clone()))
    }
}

macro_rules! core_builders {
    () => {
        #[must_use]
        pub fn view(mut self, view: ViewOptions) -> Self {
            self.core.view = view;
            self
        }

        #[must_use]
        pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
            self.core.placeholder = Some(placeholder.into());
            self
        }

        /// Sets how many entries must and may be selected. Both are clamped
        /// to Discord's 1..=25 range by the API.
        #[must_use]
        pub fn values(mut self, min: u8, max: u8) -> Self {
            self.core.min_values = min;
            self.core.max_values = max;
            self
        }
    };
}

impl SelectPrompt {
    #[must_use]
    pub fn new(options: Vec<CreateSelectMenuOption>) -> Self {
        SelectPrompt {
            core: SelectCore::default(),
            options,
        }
    }

    core_builders!();

    /// Runs the prompt. Resolves with the selected option values, or
    /// [`None`] on timeout.
    pub async fn run<U: Send + Sync + 'static, E>(
        self,
        ctx: poise::Context<'_, U, E>,
        reply: CreateReply,
    ) -> Result<Option<Vec<String>>, serenity::Error> {
        let kind = CreateSelectMenuKind::String {
            options: self.options.clone(),
        };
        Ok(self.core.run(ctx, reply, kind).await?.map(|data| match data {
            ComponentInteractionDataKind::StringSelect { values } => values,
            _ => Vec::new(),
        }))
    }
}

impl ChannelSelectPrompt {
    #[must_use]
    pub fn new() -> Self {
        ChannelSelectPrompt {
            core: SelectCore::default(),
            channel_types: None,
        }
    }

    core_builders!();

    /// Restricts which channel types show up in the menu.
    #[must_use]
    pub fn channel_types(mut self, types: Vec<ChannelType>) -> Self {
        self.channel_types = Some(types);
        self
    }

    pub async fn run<U: Send + Sync + 'static, E>(
        self,
        ctx: poise::Context<'_, U, E>,
        reply: CreateReply,
    ) -> Result<Option<Vec<ChannelId>>, serenity::Error> {
        let kind = CreateSelectMenuKind::Channel {
            channel_types: self.channel_types.clone(),
            default_channels: None,
        };
        Ok(self.core.run(ctx, reply, kind).await?.map(|data| match data {
            ComponentInteractionDataKind::ChannelSelect { values } => values,
            _ => Vec::new(),
        }))
    }
}

impl RoleSelectPrompt {
    #[must_use]
    pub fn new() -> Self {
        RoleSelectPrompt {
            core: SelectCore::default(),
        }
    }

    core_builders!();

    pub async fn run<U: Send + Sync + 'static, E>(
        self,
        ctx: poise::Context<'_, U, E>,
        reply: CreateReply,
    ) -> Result<Option<Vec<RoleId>>, serenity::Error> {
        let kind = CreateSelectMenuKind::Role {
            default_roles: None,
        };
        Ok(self.core.run(ctx, reply, kind).await?.map(|data| match data {
            ComponentInteractionDataKind::RoleSelect { values } => values,
            _ => Vec::new(),
        }))
    }
}

impl UserSelectPrompt {
    #[must_use]
    pub fn new() -> Self {
        UserSelectPrompt {
            core: SelectCore::default(),
        }
    }

    core_builders!();

    pub async fn run<U: Send + Sync + 'static, E>(
        self,
        ctx: poise::Context<'_, U, E>,
        reply: CreateReply,
    ) -> Result<Option<Vec<UserId>>, serenity::Error> {
        let kind = CreateSelectMenuKind::User {
            default_users: None,
        };
        Ok(self.core.run(ctx, reply, kind).await?.map(|data| match data {
            ComponentInteractionDataKind::UserSelect { values } => values,
            _ => Vec::new(),
        }))
    }
}

impl MentionableSelectPrompt {
    #[must_use]
    pub fn new() -> Self {
        MentionableSelectPrompt {
            core: SelectCore::default(),
        }
    }

    core_builders!();

    pub async fn run<U: Send + Sync + 'static, E>(
        self,
        ctx: poise::Context<'_, U, E>,
        reply: CreateReply,
    ) -> Result<Option<Vec<GenericId>>, serenity::Error> {
        let kind = CreateSelectMenuKind::Mentionable {
            default_users: None,
            default_roles: None,
        };
        Ok(self.core.run(ctx, reply, kind).await?.map(|data| match data {
            ComponentInteractionDataKind::MentionableSelect { values } => values,
            _ => Vec::new(),
        }))
    }
}

impl Default for ChannelSelectPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RoleSelectPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for UserSelectPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for MentionableSelectPrompt {
    fn default() -> Self {
        Self::new()
    }
}
