//! User-facing text of the embed creator.
//!
//! Everything the editor ever shows — menu labels, modal titles, error
//! notices — lives here so hosts can re-word or translate it.

use serenity::builder::CreateSelectMenuOption;
use serenity::model::prelude::*;

/// Select menu option values for the edit menu.
pub(super) mod edit_keys {
    pub const BODY: &str = "body";
    pub const AUTHOR: &str = "author";
    pub const FOOTER: &str = "footer";
    pub const IMAGES: &str = "images";
    pub const CONTENT: &str = "content";
    pub const ADD_FIELD: &str = "add_field";
    pub const EDIT_FIELD: &str = "edit_field";
    pub const REMOVE_FIELD: &str = "remove_field";
}

/// Select menu option values for the action menu.
pub(super) mod action_keys {
    pub const ADD_EMBED: &str = "add_embed";
    pub const REMOVE_EMBED: &str = "remove_embed";
    pub const SWITCH_EMBED: &str = "switch_embed";
}

/// Label, description and emoji of one select menu entry.
#[derive(Debug, Clone)]
pub struct OptionText {
    pub label: String,
    pub description: String,
    pub emoji: Option<ReactionType>,
}

impl OptionText {
    fn new(label: &str, description: &str) -> Self {
        OptionText {
            label: label.to_owned(),
            description: description.to_owned(),
            emoji: Some(ReactionType::Unicode("🔸".to_owned())),
        }
    }

    fn to_option(&self, value: &str) -> CreateSelectMenuOption {
        let mut option = CreateSelectMenuOption::new(&self.label, value)
            .description(&self.description);
        if let Some(emoji) = &self.emoji {
            option = option.emoji(emoji.clone());
        }
        option
    }
}

/// Modal titles and input labels.
#[derive(Debug, Clone)]
pub struct ModalText {
    pub body_title: String,
    pub body_title_label: String,
    pub body_description_label: String,
    pub body_color_label: String,

    pub author_title: String,
    pub author_name_label: String,
    pub author_icon_label: String,
    pub author_url_label: String,

    pub footer_title: String,
    pub footer_text_label: String,
    pub footer_icon_label: String,

    pub images_title: String,
    pub image_label: String,
    pub thumbnail_label: String,

    pub content_title: String,
    pub content_label: String,

    pub add_field_title: String,
    pub edit_field_title: String,
    pub field_name_label: String,
    pub field_value_label: String,
    pub field_inline_label: String,
}

impl Default for ModalText {
    fn default() -> Self {
        ModalText {
            body_title: "Edit Embed Body".to_owned(),
            body_title_label: "Embed Title".to_owned(),
            body_description_label: "Embed Description".to_owned(),
            body_color_label: "Embed Color (example: #dda0dd)".to_owned(),

            author_title: "Edit Embed Author".to_owned(),
            author_name_label: "Author Name".to_owned(),
            author_icon_label: "Author Icon Url".to_owned(),
            author_url_label: "Author Url".to_owned(),

            footer_title: "Edit Embed Footer".to_owned(),
            footer_text_label: "Footer Text".to_owned(),
            footer_icon_label: "Footer Icon Url".to_owned(),

            images_title: "Edit Embed Images".to_owned(),
            image_label: "Image Url".to_owned(),
            thumbnail_label: "Thumbnail Url".to_owned(),

            content_title: "Edit Message Content".to_owned(),
            content_label: "Message Content".to_owned(),

            add_field_title: "Add Field".to_owned(),
            edit_field_title: "Edit Field".to_owned(),
            field_name_label: "Field Name".to_owned(),
            field_value_label: "Field Value".to_owned(),
            field_inline_label: "Inline (true/false)".to_owned(),
        }
    }
}

/// Notices and prompts the editor sends along the way.
#[derive(Debug, Clone)]
pub struct CreatorMessages {
    pub start_content: String,
    pub new_embed_description: String,
    pub editing_embed: String,
    pub max_embeds: String,
    pub last_embed: String,
    pub color_convert_error: String,
    pub no_fields: String,
    pub max_fields: String,
    pub nothing_to_send: String,
    pub embed_too_long: String,
    pub pick_field_remove: String,
    pub pick_field_edit: String,
    pub pick_embed_remove: String,
    pub pick_embed_switch: String,
}

impl Default for CreatorMessages {
    fn default() -> Self {
        CreatorMessages {
            start_content: "Interact with the menus to edit the embed.".to_owned(),
            new_embed_description: "Edit this embed.".to_owned(),
            editing_embed: "Editing embed".to_owned(),
            max_embeds: "You cannot add more than 10 embeds.".to_owned(),
            last_embed: "The message needs to keep at least one embed.".to_owned(),
            color_convert_error: "The string could not be converted into a color.".to_owned(),
            no_fields: "This embed has no fields yet.".to_owned(),
            max_fields: "An embed cannot have more than 25 fields.".to_owned(),
            nothing_to_send: "There is nothing to send yet.".to_owned(),
            embed_too_long: "The embed text exceeds 6000 characters.".to_owned(),
            pick_field_remove: "Choose the field to remove.".to_owned(),
            pick_field_edit: "Choose the field to edit.".to_owned(),
            pick_embed_remove: "Choose the embed to remove.".to_owned(),
            pick_embed_switch: "Choose the embed to edit.".to_owned(),
        }
    }
}

/// Full text configuration of the embed creator.
#[derive(Debug, Clone)]
pub struct CreatorConfig {
    pub edit_placeholder: String,
    pub action_placeholder: String,
    pub send_label: String,
    pub send_style: ButtonStyle,
    pub cancel_label: String,
    pub cancel_style: ButtonStyle,

    pub body: OptionText,
    pub author: OptionText,
    pub footer: OptionText,
    pub images: OptionText,
    pub content: OptionText,
    pub add_field: OptionText,
    pub edit_field: OptionText,
    pub remove_field: OptionText,

    pub add_embed: OptionText,
    pub remove_embed: OptionText,
    pub switch_embed: OptionText,

    pub modals: ModalText,
    pub messages: CreatorMessages,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        CreatorConfig {
            edit_placeholder: "Edit a section...".to_owned(),
            action_placeholder: "Manage the embeds...".to_owned(),
            send_label: "Send".to_owned(),
            send_style: ButtonStyle::Primary,
            cancel_label: "Cancel".to_owned(),
            cancel_style: ButtonStyle::Danger,

            body: OptionText::new("Edit Body", "Edits the embed title, description and color."),
            author: OptionText::new("Edit Author", "Edits the embed author name, icon and url."),
            footer: OptionText::new("Edit Footer", "Edits the embed footer text and icon."),
            images: OptionText::new("Edit Images", "Edits the embed image and thumbnail."),
            content: OptionText::new("Edit Content", "Edits the message content above the embeds."),
            add_field: OptionText::new("Add Field", "Adds a field to the embed."),
            edit_field: OptionText::new("Edit Field", "Edits a field of the embed."),
            remove_field: OptionText::new("Remove Field", "Removes a field from the embed."),

            add_embed: OptionText::new("Add Embed", "Appends another embed to the message."),
            remove_embed: OptionText::new("Remove Embed", "Removes one of the embeds."),
            switch_embed: OptionText::new("Switch Embed", "Changes which embed is being edited."),

            modals: ModalText::default(),
            messages: CreatorMessages::default(),
        }
    }
}

impl CreatorConfig {
    /// The edit menu entries, in display order.
    pub(super) fn edit_options(&self) -> Vec<CreateSelectMenuOption> {
        vec![
            self.body.to_option(edit_keys::BODY),
            self.author.to_option(edit_keys::AUTHOR),
            self.footer.to_option(edit_keys::FOOTER),
            self.images.to_option(edit_keys::IMAGES),
            self.content.to_option(edit_keys::CONTENT),
            self.add_field.to_option(edit_keys::ADD_FIELD),
            self.edit_field.to_option(edit_keys::EDIT_FIELD),
            self.remove_field.to_option(edit_keys::REMOVE_FIELD),
        ]
    }

    /// The action menu entries, in display order.
    pub(super) fn action_options(&self) -> Vec<CreateSelectMenuOption> {
        vec![
            self.add_embed.to_option(action_keys::ADD_EMBED),
            self.remove_embed.to_option(action_keys::REMOVE_EMBED),
            self.switch_embed.to_option(action_keys::SWITCH_EMBED),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menus_cover_every_key() {
        let config = CreatorConfig::default();
        assert_eq!(config.edit_options().len(), 8);
        assert_eq!(config.action_options().len(), 3);
    }
}
