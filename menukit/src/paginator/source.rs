//! Page sources: what the paginator shows on each page.

use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::prelude::*;

/// One rendered page of output.
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    pub content: Option<String>,
    pub embed: Option<CreateEmbed>,
}

impl RenderedPage {
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        RenderedPage {
            content: Some(content.into()),
            embed: None,
        }
    }

    #[must_use]
    pub fn embed(embed: CreateEmbed) -> Self {
        RenderedPage {
            content: None,
            embed: Some(embed),
        }
    }
}

/// A sequence of pages the paginator can flip through.
pub trait PageSource {
    /// How many pages there are.
    fn page_count(&self) -> usize;

    /// Renders the page at the given zero-based index.
    fn render_page(&self, index: usize) -> RenderedPage;
}

/// Pre-rendered embeds, one per page.
#[derive(Debug, Clone)]
pub struct EmbedPages {
    embeds: Vec<CreateEmbed>,
}

impl EmbedPages {
    #[must_use]
    pub fn new(embeds: Vec<CreateEmbed>) -> Self {
        EmbedPages { embeds }
    }
}

impl PageSource for EmbedPages {
    fn page_count(&self) -> usize {
        self.embeds.len()
    }

    fn render_page(&self, index: usize) -> RenderedPage {
        match self.embeds.get(index) {
            Some(embed) => RenderedPage::embed(embed.clone()),
            None => RenderedPage::default(),
        }
    }
}

/// `(name, value)` entries chunked into embed fields over a base embed.
#[derive(Debug, Clone)]
pub struct FieldPages {
    entries: Vec<(String, String)>,
    per_page: usize,
    inline: bool,
    title: Option<String>,
    description: Option<String>,
    color: Option<Colour>,
}

impl FieldPages {
    #[must_use]
    pub fn new(entries: Vec<(String, String)>) -> Self {
        FieldPages {
            entries,
            per_page: 12,
            inline: false,
            title: None,
            description: None,
            color: None,
        }
    }

    #[must_use]
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    #[must_use]
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: Colour) -> Self {
        self.color = Some(color);
        self
    }

    fn base_embed(&self) -> CreateEmbed {
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
        embed
    }
}

impl PageSource for FieldPages {
    fn page_count(&self) -> usize {
        total_pages(self.entries.len(), self.per_page)
    }

    fn render_page(&self, index: usize) -> RenderedPage {
        let window = page_window(self.entries.len(), self.per_page, index);
        let mut embed = self.base_embed();

        for (name, value) in &self.entries[window] {
            embed = embed.field(name.as_str(), value.as_str(), self.inline);
        }

        let pages = self.page_count();
        if pages > 1 {
            let footer = page_footer(index, pages, self.entries.len());
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }

        RenderedPage::embed(embed)
    }
}

/// Lines chunked into the embed description.
#[derive(Debug, Clone)]
pub struct DescriptionPages {
    lines: Vec<String>,
    per_page: usize,
    title: Option<String>,
    color: Option<Colour>,
}

impl DescriptionPages {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        DescriptionPages {
            lines,
            per_page: 12,
            title: None,
            color: None,
        }
    }

    #[must_use]
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: Colour) -> Self {
        self.color = Some(color);
        self
    }
}

impl PageSource for DescriptionPages {
    fn page_count(&self) -> usize {
        total_pages(self.lines.len(), self.per_page)
    }

    fn render_page(&self, index: usize) -> RenderedPage {
        let window = page_window(self.lines.len(), self.per_page, index);
        let mut embed = CreateEmbed::new().description(self.lines[window].join("\n"));

        if let Some(title) = &self.title {
            embed = embed.title(title);
        }
        if let Some(color) = self.color {
            embed = embed.color(color);
        }

        let pages = self.page_count();
        if pages > 1 {
            let footer = page_footer(index, pages, self.lines.len());
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }

        RenderedPage::embed(embed)
    }
}

/// Plain text split line-wise into size-bounded pages, each wrapped in a
/// prefix/suffix pair (code fences by default).
#[derive(Debug, Clone)]
pub struct TextPages {
    pages: Vec<String>,
}

impl TextPages {
    /// Splits `text` into code-fenced pages of at most 2000 characters.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_options(text, "```", "```", 2000)
    }

    /// Splits `text` into pages whose wrapped length stays below
    /// `max_size`, keeping headroom for the page counter line.
    #[must_use]
    pub fn with_options(text: &str, prefix: &str, suffix: &str, max_size: usize) -> Self {
        let budget = max_size
            .saturating_sub(prefix.len() + suffix.len() + 200)
            .max(1);

        let mut pages = Vec::new();
        let mut chunk = String::new();

        let mut push_chunk = |chunk: &mut String| {
            if !chunk.is_empty() {
                pages.push(format!("{prefix}\n{chunk}\n{suffix}"));
                chunk.clear();
            }
        };

        for line in text.split('\n') {
            // oversized lines get hard-split at char boundaries
            let mut line = line;
            while line.len() > budget {
                let at = match floor_char_boundary(line, budget) {
                    // a budget narrower than one character must still advance
                    0 => line.chars().next().map_or(line.len(), char::len_utf8),
                    at => at,
                };
                push_chunk(&mut chunk);
                chunk.push_str(&line[..at]);
                push_chunk(&mut chunk);
                line = &line[at..];
            }

            if !chunk.is_empty() && chunk.len() + 1 + line.len() > budget {
                push_chunk(&mut chunk);
            }
            if !chunk.is_empty() {
                chunk.push('\n');
            }
            chunk.push_str(line);
        }
        push_chunk(&mut chunk);

        if pages.is_empty() {
            pages.push(format!("{prefix}\n\n{suffix}"));
        }

        TextPages { pages }
    }
}

impl PageSource for TextPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn render_page(&self, index: usize) -> RenderedPage {
        let Some(page) = self.pages.get(index) else {
            return RenderedPage::default();
        };

        if self.pages.len() > 1 {
            RenderedPage::text(format!("{page}\nPage {}/{}", index + 1, self.pages.len()))
        } else {
            RenderedPage::text(page.clone())
        }
    }
}

/// Computes the number of pages needed for `items` at `per_page` each.
/// Zero items means zero pages; the paginator sends nothing in that case.
pub(crate) fn total_pages(items: usize, per_page: usize) -> usize {
    items.div_ceil(per_page.max(1))
}

/// The index range of the page at `index` (zero-based, clamped).
pub(crate) fn page_window(items: usize, per_page: usize, index: usize) -> std::ops::Range<usize> {
    let per_page = per_page.max(1);
    let start = index.saturating_mul(per_page).min(items);
    let end = start.saturating_add(per_page).min(items);
    start..end
}

fn page_footer(index: usize, pages: usize, entries: usize) -> String {
    format!("Page {}/{pages} ({entries} entries)", index + 1)
}

/// Largest byte index `<= at` that lies on a char boundary.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    let mut at = at.min(s.len());
    while at > 0 && !s.is_char_boundary(at) {
        at -= 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn empty_entry_sources_have_no_pages() {
        assert_eq!(FieldPages::new(Vec::new()).page_count(), 0);
        assert_eq!(DescriptionPages::new(Vec::new()).page_count(), 0);
    }

    #[test]
    fn total_pages_survives_zero_per_page() {
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn page_window_is_bounds_checked() {
        assert_eq!(page_window(11, 5, 0), 0..5);
        assert_eq!(page_window(11, 5, 2), 10..11);
        assert_eq!(page_window(11, 5, 99), 11..11);
        assert_eq!(page_window(0, 5, 0), 0..0);
    }

    #[test]
    fn page_footer_is_one_based() {
        assert_eq!(page_footer(0, 3, 11), "Page 1/3 (11 entries)");
    }

    #[test]
    fn field_pages_count_matches_entries() {
        let entries = (0..11)
            .map(|i| (format!("name {i}"), format!("value {i}")))
            .collect();
        let source = FieldPages::new(entries).per_page(5);
        assert_eq!(source.page_count(), 3);
    }

    #[test]
    fn text_pages_split_on_lines() {
        let text = ["x".repeat(300), "y".repeat(300), "z".repeat(300)].join("\n");
        let source = TextPages::with_options(&text, "```", "```", 600);

        assert!(source.page_count() > 1);
        for page in &source.pages {
            assert!(page.len() <= 600);
            assert!(page.starts_with("```"));
            assert!(page.ends_with("```"));
        }
    }

    #[test]
    fn text_pages_single_page_has_no_counter() {
        let source = TextPages::new("hello");
        assert_eq!(source.page_count(), 1);
        let page = source.render_page(0);
        assert_eq!(page.content.as_deref(), Some("```\nhello\n```"));
    }

    #[test]
    fn text_pages_hard_split_long_lines() {
        let text = "a".repeat(2000);
        let source = TextPages::with_options(&text, "", "", 500);
        assert!(source.page_count() >= 4);
    }

    #[test]
    fn text_pages_tiny_budget_advances_past_wide_chars() {
        // wrapper overhead leaves a 1-byte budget, below one é
        let source = TextPages::with_options("ééé", "", "", 201);
        assert_eq!(source.page_count(), 3);
        for page in &source.pages {
            assert!(page.contains('é'));
        }
    }

    #[test]
    fn empty_text_still_yields_a_page() {
        let source = TextPages::new("");
        assert_eq!(source.page_count(), 1);
    }
}
