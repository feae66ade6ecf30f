//! Help command body fed by the framework's command list.
//!
//! [`send_help`] answers three shapes of query: no query (bot overview with
//! one field per category), a category name (paginated command list), and a
//! command name or alias (detail embed with usage and aliases). Commands
//! marked `hide_in_help` never show up.

use poise::reply::CreateReply;
use poise::Command;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::prelude::*;

use crate::paginator::{FieldPages, Paginator};

/// Category assigned to commands that declare none.
const UNCATEGORIZED: &str = "Uncategorized";

/// Appearance of the help output.
#[derive(Debug, Clone)]
pub struct HelpConfig {
    pub color: Colour,
    /// Whether category fields on the overview render inline.
    pub inline_fields: bool,
    /// Commands listed per page in category help.
    pub per_page: usize,
    /// Placeholder for commands without a description.
    pub no_description: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        HelpConfig {
            color: Colour::new(0x5865F2),
            inline_fields: false,
            per_page: 5,
            no_description: "No description".to_owned(),
        }
    }
}

/// Sends help for the bot, a category, or a single command.
///
/// `query` is matched against command names and aliases first, then
/// against category names, case-insensitively. An unmatched query gets an
/// ephemeral notice.
pub async fn send_help<U: Send + Sync + 'static, E>(
    ctx: poise::Context<'_, U, E>,
    query: Option<&str>,
    config: HelpConfig,
) -> Result<(), serenity::Error> {
    let commands = &ctx.framework().options.commands;

    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return send_bot_help(ctx, commands, &config).await;
    };

    if let Some(command) = find_command(commands, query) {
        return send_command_help(ctx, command, &config).await;
    }

    let groups = group_by_category(commands);
    if let Some((category, members)) = groups
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(query))
    {
        return send_category_help(ctx, category, members, &config).await;
    }

    let notice = CreateReply::default()
        .content(format!("No command or category named `{query}` was found."))
        .ephemeral(true);
    ctx.send(notice).await?;
    Ok(())
}

async fn send_bot_help<U: Send + Sync + 'static, E>(
    ctx: poise::Context<'_, U, E>,
    commands: &[Command<U, E>],
    config: &HelpConfig,
) -> Result<(), serenity::Error> {
    let bot_name = ctx.serenity_context().cache.current_user().name.clone();

    let groups = group_by_category(commands);
    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();

    let mut embed = CreateEmbed::new()
        .title(format!("{bot_name}'s help"))
        .description(format!(
            "{total} commands. Use `{}help <command>` for details on one.",
            ctx.prefix(),
        ))
        .color(config.color)
        .footer(
            CreateEmbedFooter::new(format!("Requested by {}", ctx.author().name))
                .icon_url(ctx.author().face()),
        );

    for (category, members) in &groups {
        let listing = members
            .iter()
            .map(|c| format!("`{}`", c.name))
            .collect::<Vec<_>>()
            .join(" ");
        embed = embed.field(category.as_str(), listing, config.inline_fields);
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

async fn send_category_help<U: Send + Sync + 'static, E>(
    ctx: poise::Context<'_, U, E>,
    category: &str,
    members: &[&Command<U, E>],
    config: &HelpConfig,
) -> Result<(), serenity::Error> {
    let entries = members
        .iter()
        .map(|c| {
            let description = c
                .description
                .as_deref()
                .unwrap_or(&config.no_description);
            (category_entry_name(ctx.prefix(), c), description.to_owned())
        })
        .collect();

    let mut source = FieldPages::new(entries)
        .per_page(config.per_page)
        .title(format!("{category} commands"))
        .color(config.color)
        .inline(config.inline_fields);
    if members.iter().any(|c| has_visible_subcommands(c)) {
        source = source.description("(*) has subcommands");
    }

    Paginator::new(source).run(ctx).await
}

async fn send_command_help<U: Send + Sync + 'static, E>(
    ctx: poise::Context<'_, U, E>,
    command: &Command<U, E>,
    config: &HelpConfig,
) -> Result<(), serenity::Error> {
    let description = command
        .help_text
        .as_deref()
        .or(command.description.as_deref())
        .unwrap_or(&config.no_description);

    let mut embed = CreateEmbed::new()
        .title(&command.qualified_name)
        .description(description)
        .color(config.color)
        .field("Usage", format!("`{}`", command_signature(command)), false);

    if !command.aliases.is_empty() {
        let aliases = command
            .aliases
            .iter()
            .map(|a| format!("`{a}`"))
            .collect::<Vec<_>>()
            .join(", ");
        embed = embed.field("Aliases", aliases, false);
    }

    let visible_subs: Vec<_> = command
        .subcommands
        .iter()
        .filter(|c| !c.hide_in_help)
        .collect();
    if !visible_subs.is_empty() {
        let listing = visible_subs
            .iter()
            .map(|c| format!("`{}`", c.name))
            .collect::<Vec<_>>()
            .join(" ");
        embed = embed.field("Subcommands", listing, false);
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Groups visible commands by category, preserving first-seen order.
fn group_by_category<'a, U, E>(
    commands: &'a [Command<U, E>],
) -> Vec<(String, Vec<&'a Command<U, E>>)> {
    let mut groups: Vec<(String, Vec<&Command<U, E>>)> = Vec::new();

    for command in commands.iter().filter(|c| !c.hide_in_help) {
        let category = command
            .category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_owned());

        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(command),
            None => groups.push((category, vec![command])),
        }
    }

    groups
}

fn has_visible_subcommands<U, E>(command: &Command<U, E>) -> bool {
    command.subcommands.iter().any(|s| !s.hide_in_help)
}

/// `prefix + name` listing entry for category help, with a `(*)` marker on
/// commands that group subcommands.
fn category_entry_name<U, E>(prefix: &str, command: &Command<U, E>) -> String {
    let mut name = format!("{prefix}{}", command.qualified_name);
    if has_visible_subcommands(command) {
        name.push_str(" (*)");
    }
    name
}

/// `name <required> [optional]` usage line for a command.
fn command_signature<U, E>(command: &Command<U, E>) -> String {
    let mut signature = command.qualified_name.clone();

    for parameter in &command.parameters {
        signature.push(' ');
        if parameter.required {
            signature.push('<');
            signature.push_str(&parameter.name);
            signature.push('>');
        } else {
            signature.push('[');
            signature.push_str(&parameter.name);
            signature.push(']');
        }
    }

    signature
}

/// Looks up a visible command by name or alias. Multi-word queries walk
/// into subcommands.
fn find_command<'a, U, E>(
    commands: &'a [Command<U, E>],
    query: &str,
) -> Option<&'a Command<U, E>> {
    let mut parts = query.split_whitespace();
    let first = parts.next()?;

    let mut current = commands
        .iter()
        .filter(|c| !c.hide_in_help)
        .find(|c| matches_name(c, first))?;

    for part in parts {
        current = current
            .subcommands
            .iter()
            .filter(|c| !c.hide_in_help)
            .find(|c| matches_name(c, part))?;
    }

    Some(current)
}

fn matches_name<U, E>(command: &Command<U, E>, name: &str) -> bool {
    command.name.eq_ignore_ascii_case(name)
        || command.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestContext<'a> = poise::Context<'a, (), serenity::Error>;
    type TestResult = Result<(), serenity::Error>;

    /// Pings the bot.
    #[poise::command(slash_command, category = "Utility", aliases("p"))]
    async fn ping(_ctx: TestContext<'_>) -> TestResult {
        Ok(())
    }

    /// Echoes the input.
    #[poise::command(slash_command, category = "Utility")]
    async fn echo(_ctx: TestContext<'_>, #[description = "Text."] text: String) -> TestResult {
        let _ = text;
        Ok(())
    }

    /// Bans a user.
    #[poise::command(slash_command, category = "Moderation")]
    async fn ban(
        _ctx: TestContext<'_>,
        #[description = "Who."] user: String,
        #[description = "Why."] reason: Option<String>,
    ) -> TestResult {
        let _ = (user, reason);
        Ok(())
    }

    /// Not listed anywhere.
    #[poise::command(slash_command, hide_in_help)]
    async fn secret(_ctx: TestContext<'_>) -> TestResult {
        Ok(())
    }

    /// Shows the config.
    #[poise::command(slash_command)]
    async fn show(_ctx: TestContext<'_>) -> TestResult {
        Ok(())
    }

    /// Manages the config.
    #[poise::command(slash_command, subcommands("show"))]
    async fn config(_ctx: TestContext<'_>) -> TestResult {
        Ok(())
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let commands = vec![ping(), ban(), echo()];

        let groups = group_by_category(&commands);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Utility");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Moderation");
    }

    #[test]
    fn grouping_skips_hidden_commands() {
        let commands = vec![config(), secret()];

        let groups = group_by_category(&commands);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, UNCATEGORIZED);
        assert_eq!(groups[0].1.len(), 1);
    }

    #[test]
    fn category_entries_carry_prefix_and_group_marker() {
        assert_eq!(category_entry_name("/", &ping()), "/ping");
        assert_eq!(category_entry_name("~", &config()), "~config (*)");
    }

    #[test]
    fn signature_marks_required_and_optional() {
        assert_eq!(command_signature(&ban()), "ban <user> [reason]");
        assert_eq!(command_signature(&ping()), "ping");
    }

    #[test]
    fn find_command_matches_aliases_case_insensitively() {
        let commands = vec![ping()];

        assert!(find_command(&commands, "PING").is_some());
        assert!(find_command(&commands, "p").is_some());
        assert!(find_command(&commands, "pong").is_none());
    }

    #[test]
    fn find_command_walks_subcommands() {
        let commands = vec![config()];

        let found = find_command(&commands, "config show").unwrap();
        assert_eq!(found.name, "show");
        assert!(find_command(&commands, "config missing").is_none());
    }

    #[test]
    fn find_command_never_returns_hidden() {
        let commands = vec![secret()];
        assert!(find_command(&commands, "secret").is_none());
    }
}
