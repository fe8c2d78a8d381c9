//! Discord side of the issue workflow.
//!
//! Users open a form with `!new-issue`, moderators review the submitted issues in the
//! issues channel through buttons, and `!issues` lists what is already on GitHub.
//! Every interaction is routed from its custom id (see `component`).
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Resolve guild roles for the moderator check
//! - `GUILD_MESSAGES` - Receive commands and upload messages
//! - `MESSAGE_CONTENT` - Read command text and attachments (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod component;
pub mod embed;
pub mod handler;
pub mod start;
