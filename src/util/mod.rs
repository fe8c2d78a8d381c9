pub mod discord;
pub mod parse;
