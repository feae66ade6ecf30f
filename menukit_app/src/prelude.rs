pub use poise::reply::CreateReply;
pub use serenity::builder::*;

pub use crate::data::*;
