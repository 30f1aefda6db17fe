//! Notes attached to issue groups

use serde::{Deserialize, Serialize};

use crate::domain::actor::Actor;
use crate::domain::id::ProjectId;

pub use crate::domain::id::GroupId;

/// Issue group that a note is posted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub project_id: ProjectId,
}

impl Group {
    pub fn new(id: GroupId, project_id: ProjectId) -> Self {
        Self { id, project_id }
    }
}

/// Attributes of a note as submitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteAttrs {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Actor>>,
}

impl NoteAttrs {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mentions: None,
        }
    }

    pub fn with_mentions(mut self, mentions: Vec<Actor>) -> Self {
        self.mentions = Some(mentions);
        self
    }
}

/// Ambient context a note is validated in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MentionContext {
    pub group: Option<Group>,
}

impl MentionContext {
    pub fn for_group(group: Group) -> Self {
        Self { group: Some(group) }
    }

    /// Project mentions are checked against, if any
    pub fn project_id(&self) -> Option<ProjectId> {
        self.group.map(|group| group.project_id)
    }
}
