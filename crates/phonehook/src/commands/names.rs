use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use phonehook_core::ReleaseNames;
use phonehook_models::ReleaseVersion;

use super::{Command, CommandContext};
use crate::Result;

/// Show the names derived from a release version, without any network call
#[derive(Parser)]
pub(crate) struct NamesCommand {
    /// Release version, e.g. 8.12.0
    version: String,
}

#[async_trait]
impl Command for NamesCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let names = ReleaseNames::new(&ctx.config, &ReleaseVersion::new(self.version));
        let mut writer = ctx.writer.write().await;

        writeln!(writer, "Version: {}", names.version)?;
        writeln!(writer, "Archive URL: {}", names.archive_url)?;
        writeln!(writer, "Branch: {}", names.branch)?;
        writeln!(writer, "Base branch: {}", names.base_branch)?;
        writeln!(writer, "Commit message: {}", names.commit_message)?;
        writeln!(writer, "Pull request title: {}", names.pull_request_title)?;
        writeln!(writer, "Pull request body: {}", names.pull_request_body)?;

        Ok(())
    }
}
