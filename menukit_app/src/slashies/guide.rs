use menukit::{Paginator, TextPages};

use crate::prelude::*;

const GUIDE_TEXT: &str = "\
= Getting started =

Use /embed to interactively compose a message with up to 10 embeds.
The first select menu edits sections of the current embed, the second
one manages the embeds themselves. Send posts the result, Cancel
throws it away.

= Editing sections =

Edit Body opens a modal for the title, description and color. Colors
accept #rrggbb, 0x-prefixed hex, bare hex, and rgb(r, g, b). Leaving
an input empty clears that part of the embed.

Edit Author and Edit Footer work the same way for their sections,
Edit Images sets the large image and the thumbnail, and Edit Content
changes the plain text above the embeds.

= Fields =

Add Field appends a field; the inline input takes 'true' or 'false'.
Edit Field and Remove Field first ask which field to touch via a
short select prompt.

= Multiple embeds =

Add Embed appends another embed and switches to it. Switch Embed
changes which embed the section edits apply to, and Remove Embed
deletes one. The message always keeps at least one embed while
editing; embeds left untouched are dropped on Send.

= Help =

/help lists every command. /help <command> shows its usage and
aliases, /help <category> pages through the category's commands.";

/// Shows a paginated guide to this bot.
#[poise::command(slash_command)]
pub async fn guide(ctx: AppContext<'_>) -> AppResult {
    let pages = TextPages::with_options(GUIDE_TEXT, "```", "```", 1200);
    Paginator::new(pages).run(ctx).await?;
    Ok(())
}
