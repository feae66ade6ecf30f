use std::time::Duration;

use serenity::builder::CreateInputText;
use serenity::model::prelude::*;
use serenity::utils::{CreateQuickModal, QuickModalResponse};

use crate::view::DEFAULT_TIMEOUT;

/// A modal form collecting short text inputs.
///
/// Modals can only open as the response to a component or command
/// interaction, so unlike the other prompts this one executes against an
/// interaction rather than a poise context. The resolved
/// [`QuickModalResponse`] carries the submitted strings in input order; its
/// interaction still needs a response (the embed creator uses that to
/// refresh its own message).
#[derive(Debug, Clone)]
pub struct ModalPrompt {
    title: String,
    timeout: Duration,
    inputs: Vec<CreateInputText>,
}

impl ModalPrompt {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        ModalPrompt {
            title: title.into(),
            timeout: DEFAULT_TIMEOUT,
            inputs: Vec::new(),
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a text input to the form. Discord allows at most 5.
    #[must_use]
    pub fn input(mut self, input: CreateInputText) -> Self {
        self.inputs.push(input);
        self
    }

    /// Adds an optional input pre-filled with `value`.
    #[must_use]
    pub fn prefilled(
        self,
        style: InputTextStyle,
        label: impl Into<String>,
        value: Option<&str>,
    ) -> Self {
        let label = label.into();
        let custom_id = format!("input_{}", self.inputs.len());
        self.input(
            CreateInputText::new(style, label, custom_id)
                .value(value.unwrap_or_default())
                .required(false),
        )
    }

    /// Opens the modal and waits for submission.
    ///
    /// Resolves with [`None`] if the user dismissed it or the wait timed
    /// out.
    pub async fn execute(
        self,
        ctx: &serenity::client::Context,
        interaction: &ComponentInteraction,
    ) -> Result<Option<QuickModalResponse>, serenity::Error> {
        let mut modal = CreateQuickModal::new(self.title).timeout(self.timeout);
        for input in self.inputs {
            modal = modal.field(input);
        }

        interaction.quick_modal(ctx, modal).await
    }
}
