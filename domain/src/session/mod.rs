//! Conversation domain
//!
//! Chat messages and the typed interpretation of assistant replies.

pub mod entities;
pub mod response;

pub use entities::{Message, Role};
pub use response::AssistantTurn;
