//! Note domain module

mod entity;

pub use entity::{Group, GroupId, MentionContext, NoteAttrs};
