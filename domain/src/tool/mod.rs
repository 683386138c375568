//! Tool domain
//!
//! The single assistant tool (`get_lyrics`) and its typed invocation.

pub mod entities;

pub use entities::{ToolDefinition, ToolInvocation, ToolParameter};
