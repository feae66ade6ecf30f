//! Reusable interactive UI components for serenity + poise bots.
//!
//! The building blocks here cover the common "send widgets, wait for the
//! user's click" patterns: one-shot prompts ([`prompts`]), a menu-driven
//! embed editor ([`creator`]), button pagination ([`paginator`]), and a
//! help command body fed by the framework's command list ([`help`]).
//!
//! Every component runs as a session inside the invoking command's future:
//! it sends a message, collects component interactions on it, and resolves
//! with the user's choice (or [`None`] on timeout).

pub mod creator;
pub mod help;
pub mod paginator;
pub mod prompts;
pub mod view;

pub use creator::{CreatorConfig, CreatorOutput, EmbedCreator, EmbedData, EmbedField};
pub use help::{send_help, HelpConfig};
pub use paginator::{
    DescriptionPages, EmbedPages, FieldPages, NavStyle, PageSource, Paginator, RenderedPage,
    TextPages,
};
pub use prompts::{
    ChannelSelectPrompt, ConfirmPrompt, MentionableSelectPrompt, ModalPrompt, RoleSelectPrompt,
    SelectPrompt, UserSelectPrompt,
};
pub use view::{TimeoutAction, ViewOptions};
