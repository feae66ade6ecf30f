//! Shared behavior for interactive component sessions.

use std::time::Duration;

use serenity::builder::{CreateActionRow, EditMessage};
use serenity::model::prelude::*;

/// The default time a component session waits for input.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// What happens to a component's message when its session times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutAction {
    /// Leave the message as-is.
    #[default]
    Keep,
    /// Edit the message so its widgets can no longer be used.
    Disable,
    /// Delete the message.
    Delete,
}

/// Options shared by every interactive component.
///
/// Restricts who may drive the widgets and controls what happens when the
/// session times out.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// The only user allowed to use the widgets.
    /// When unset, components fall back to the invoking user.
    pub author: Option<UserId>,
    /// How long each wait for input lasts. Accepted interactions restart it.
    pub timeout: Duration,
    pub on_timeout: TimeoutAction,
    /// Style applied to buttons when [`TimeoutAction::Disable`] kicks in.
    pub disable_style: ButtonStyle,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            author: None,
            timeout: DEFAULT_TIMEOUT,
            on_timeout: TimeoutAction::Keep,
            disable_style: ButtonStyle::Secondary,
        }
    }
}

impl ViewOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn author(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn on_timeout(mut self, action: TimeoutAction) -> Self {
        self.on_timeout = action;
        self
    }

    #[must_use]
    pub fn disable_style(mut self, style: ButtonStyle) -> Self {
        self.disable_style = style;
        self
    }

    /// Whether `user` may drive the component, given the invoking user.
    #[must_use]
    pub(crate) fn allows(&self, invoker: UserId, user: UserId) -> bool {
        self.author.unwrap_or(invoker) == user
    }

    /// Applies the timeout action to the component's message.
    ///
    /// `disabled_rows` is the component's rendering with every widget
    /// disabled; pass an empty [`Vec`] to drop the widgets entirely.
    /// The message may already be gone, so failures are only logged.
    pub(crate) async fn apply_timeout(
        &self,
        ctx: &serenity::client::Context,
        msg: &mut Message,
        disabled_rows: Vec<CreateActionRow>,
    ) {
        let res = match self.on_timeout {
            TimeoutAction::Keep => return,
            TimeoutAction::Delete => msg.delete(ctx).await,
            TimeoutAction::Disable => {
                msg.edit(ctx, EditMessage::new().components(disabled_rows)).await
            }
        };

        if let Err(why) = res {
            log::debug!("Timeout cleanup for message {} failed: {why}", msg.id);
        }
    }
}

/// Deletes a component's message once its session resolved, ignoring
/// failures. Ephemeral messages and already-deleted ones both error here.
pub(crate) async fn discard_message(ctx: &serenity::client::Context, msg: &Message) {
    if let Err(why) = msg.delete(ctx).await {
        log::debug!("Could not discard message {}: {why}", msg.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_defaults_to_invoker() {
        let view = ViewOptions::new();
        assert!(view.allows(UserId::new(1), UserId::new(1)));
        assert!(!view.allows(UserId::new(1), UserId::new(2)));
    }

    #[test]
    fn allows_explicit_author_overrides_invoker() {
        let view = ViewOptions::new().author(UserId::new(7));
        assert!(view.allows(UserId::new(1), UserId::new(7)));
        assert!(!view.allows(UserId::new(1), UserId::new(1)));
    }
}
