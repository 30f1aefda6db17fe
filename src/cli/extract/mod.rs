//! Extract command - prints the users reached by a set of mentions

use std::path::PathBuf;

use clap::Args;

use crate::domain::actor::Actor;
use crate::domain::id::OrganizationId;

/// Arguments for the extract command
#[derive(Args, Clone)]
pub struct ExtractArgs {
    /// Organization the mentioned teams belong to
    #[arg(long)]
    pub organization: u64,

    /// Mentioned actor (`user:<id>`, `team:<id>` or a bare user id)
    #[arg(long = "mention", required = true)]
    pub mentions: Vec<Actor>,
}

/// Run the extract command
pub async fn run(args: ExtractArgs, fixture: Option<PathBuf>) -> anyhow::Result<()> {
    let directory = super::bootstrap(fixture)?;
    let service = directory.mention_service();

    let mentioned = service
        .extract_user_ids_from_mentions(OrganizationId::new(args.organization), &args.mentions)
        .await?;

    println!("{}", serde_json::to_string_pretty(&mentioned)?);
    Ok(())
}
