//! Owned embed state for the creator.
//!
//! Serenity's [`CreateEmbed`] is a write-only builder, so the editor keeps
//! its own readable model and renders it fresh after every mutation.

use serenity::builder::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};
use serenity::model::prelude::*;

/// Discord's per-message embed cap.
pub const MAX_EMBEDS: usize = 10;
/// Discord's per-embed field cap.
pub const MAX_FIELDS: usize = 25;

pub const MAX_TITLE_LEN: usize = 256;
pub const MAX_DESCRIPTION_LEN: usize = 4096;
pub const MAX_AUTHOR_NAME_LEN: usize = 256;
pub const MAX_FOOTER_TEXT_LEN: usize = 2048;
pub const MAX_FIELD_NAME_LEN: usize = 256;
pub const MAX_FIELD_VALUE_LEN: usize = 1024;

/// Discord's cap on the combined text length of a single embed.
pub const MAX_TOTAL_LEN: usize = 6000;

/// A single embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// An embed under construction.
///
/// Unset text attributes are [`None`]; the editor maps empty modal inputs
/// to [`None`] to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<Colour>,
    pub author_name: Option<String>,
    pub author_icon_url: Option<String>,
    pub author_url: Option<String>,
    pub footer_text: Option<String>,
    pub footer_icon_url: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub fields: Vec<EmbedField>,
}

impl EmbedData {
    /// Renders the state into serenity's builder.
    #[must_use]
    pub fn build(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new();

        if let Some(title) = &self.title {
            embed = embed.title(title);
        }
        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        if let Some(color) = self.color {
            embed = embed.color(color);
        }
        if let Some(name) = &self.author_name {
            let mut author = CreateEmbedAuthor::new(name);
            if let Some(icon_url) = &self.author_icon_url {
                author = author.icon_url(icon_url);
            }
            if let Some(url) = &self.author_url {
                author = author.url(url);
            }
            embed = embed.author(author);
        }
        if let Some(text) = &self.footer_text {
            let mut footer = CreateEmbedFooter::new(text);
            if let Some(icon_url) = &self.footer_icon_url {
                footer = footer.icon_url(icon_url);
            }
            embed = embed.footer(footer);
        }
        if let Some(url) = &self.image_url {
            embed = embed.image(url);
        }
        if let Some(url) = &self.thumbnail_url {
            embed = embed.thumbnail(url);
        }
        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        embed
    }

    /// The combined text length Discord counts against [`MAX_TOTAL_LEN`].
    #[must_use]
    pub fn text_len(&self) -> usize {
        let opt_len = |s: &Option<String>| s.as_ref().map_or(0, |s| s.chars().count());

        opt_len(&self.title)
            + opt_len(&self.description)
            + opt_len(&self.author_name)
            + opt_len(&self.footer_text)
            + self
                .fields
                .iter()
                .map(|f| f.name.chars().count() + f.value.chars().count())
                .sum::<usize>()
    }

    /// Whether the embed would render as nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.author_name.is_none()
            && self.footer_text.is_none()
            && self.image_url.is_none()
            && self.thumbnail_url.is_none()
            && self.fields.is_empty()
    }
}

/// Error for color strings [`parse_color`] does not understand.
#[derive(Debug, Clone)]
pub struct ParseColorError;

impl std::error::Error for ParseColorError {}

impl std::fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("the string could not be converted into a color")
    }
}

/// Parses a user-entered color string.
///
/// Accepts `#rrggbb`, `0x`-prefixed hex, bare 6-digit hex, and
/// `rgb(r, g, b)`.
pub fn parse_color(input: &str) -> Result<Colour, ParseColorError> {
    let input = input.trim();

    if let Some(rgb) = input
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
    {
        let mut parts = rgb.splitn(3, ',');
        let mut next = || -> Result<u8, ParseColorError> {
            parts
                .next()
                .and_then(|p| p.trim().parse::<u8>().ok())
                .ok_or(ParseColorError)
        };
        let (r, g, b) = (next()?, next()?, next()?);
        return Ok(Colour::from_rgb(r, g, b));
    }

    let hex = input
        .strip_prefix('#')
        .or_else(|| input.strip_prefix("0x"))
        .unwrap_or(input);

    if hex.len() != 6 {
        return Err(ParseColorError);
    }

    u32::from_str_radix(hex, 16)
        .map(Colour::new)
        .map_err(|_| ParseColorError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_hex_forms() {
        assert_eq!(parse_color("#dda0dd").unwrap(), Colour::new(0xDD_A0_DD));
        assert_eq!(parse_color("0xDDA0DD").unwrap(), Colour::new(0xDD_A0_DD));
        assert_eq!(parse_color("dda0dd").unwrap(), Colour::new(0xDD_A0_DD));
        assert_eq!(parse_color(" #dda0dd ").unwrap(), Colour::new(0xDD_A0_DD));
    }

    #[test]
    fn parse_color_rgb_form() {
        assert_eq!(parse_color("rgb(255, 0, 16)").unwrap(), Colour::from_rgb(255, 0, 16));
        assert_eq!(parse_color("rgb(0,0,0)").unwrap(), Colour::new(0));
    }

    #[test]
    fn parse_color_rejects_junk() {
        assert!(parse_color("").is_err());
        assert!(parse_color("#dda0d").is_err());
        assert!(parse_color("not a color").is_err());
        assert!(parse_color("rgb(256, 0, 0)").is_err());
        assert!(parse_color("rgb(1, 2)").is_err());
    }

    #[test]
    fn text_len_counts_all_text_parts() {
        let embed = EmbedData {
            title: Some("title".to_owned()),
            description: Some("desc".to_owned()),
            author_name: Some("author".to_owned()),
            footer_text: Some("footer".to_owned()),
            fields: vec![EmbedField {
                name: "name".to_owned(),
                value: "value".to_owned(),
                inline: false,
            }],
            ..Default::default()
        };

        assert_eq!(embed.text_len(), 5 + 4 + 6 + 6 + 4 + 5);
    }

    #[test]
    fn is_empty_ignores_color() {
        let mut embed = EmbedData::default();
        assert!(embed.is_empty());

        embed.color = Some(Colour::new(1));
        assert!(embed.is_empty());

        embed.description = Some("text".to_owned());
        assert!(!embed.is_empty());
    }
}
