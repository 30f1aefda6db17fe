//! Validate command - checks a note's mentions against project membership

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use tracing::info;

use crate::domain::actor::Actor;
use crate::domain::id::{GroupId, ProjectId};
use crate::domain::note::{Group, MentionContext, NoteAttrs};

/// Arguments for the validate command
#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Project the note's group belongs to; without it nothing is checked
    #[arg(long)]
    pub project: Option<u64>,

    /// Group the note is posted on
    #[arg(long, requires = "project")]
    pub group: Option<u64>,

    /// Note text
    #[arg(long, default_value = "")]
    pub text: String,

    /// Mentioned actor (`user:<id>`, `team:<id>` or a bare user id)
    #[arg(long = "mention")]
    pub mentions: Vec<Actor>,
}

impl ValidateArgs {
    fn attrs(&self) -> NoteAttrs {
        let attrs = NoteAttrs::new(self.text.clone());

        if self.mentions.is_empty() {
            attrs
        } else {
            attrs.with_mentions(self.mentions.clone())
        }
    }

    fn context(&self) -> MentionContext {
        match self.project {
            Some(project) => MentionContext::for_group(Group::new(
                GroupId::new(self.group.unwrap_or_default()),
                ProjectId::new(project),
            )),
            None => MentionContext::default(),
        }
    }
}

/// Run the validate command
pub async fn run(args: ValidateArgs, fixture: Option<PathBuf>) -> anyhow::Result<()> {
    let directory = super::bootstrap(fixture)?;

    let context = args.context();
    if let Some(project_id) = context.project_id() {
        if directory.project_repository().get(&project_id).await?.is_none() {
            bail!("project '{}' not found", project_id);
        }
    }

    let service = directory.mention_service();
    let attrs = service.validate_mentions(args.attrs(), &context).await?;

    info!("Note accepted");
    println!("{}", serde_json::to_string_pretty(&attrs)?);
    Ok(())
}
