use menukit::HelpConfig;
use poise::reply::CreateReply;
use serenity::all::Color;

/// A general color that can be used for various embeds.
pub const DEFAULT_EMBED_COLOR: Color = Color::new(0x58_65_F2);

/// A general color that can be used for embeds indicating errors.
pub const ERROR_EMBED_COLOR: Color = Color::new(0xCF_00_25);

/// The error type used for the poise context.
pub type AppError = anyhow::Error;
/// The full poise context type.
pub type AppContext<'a> = poise::Context<'a, AppData, AppError>;
/// The poise command result type.
pub type AppResult = Result<(), AppError>;

/// The global bot data. Only one instance exists per bot.
#[derive(Debug)]
pub struct AppData {
    pub help: HelpConfig,
}

impl Default for AppData {
    fn default() -> Self {
        AppData {
            help: HelpConfig {
                color: DEFAULT_EMBED_COLOR,
                ..HelpConfig::default()
            },
        }
    }
}

/// Extension trait for the poise context.
pub trait AppContextExtensions {
    /// Always creates an ephemeral reply.
    fn create_ephemeral_reply(&self) -> CreateReply;
}

impl AppContextExtensions for AppContext<'_> {
    fn create_ephemeral_reply(&self) -> CreateReply {
        CreateReply::default().ephemeral(true)
    }
}
