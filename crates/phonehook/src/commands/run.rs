use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use phonehook_server::process_reference;

use super::{Command, CommandContext};
use crate::Result;

/// Run the release update for a git reference, like a push event would
#[derive(Parser)]
pub(crate) struct RunCommand {
    /// Git reference, e.g. refs/tags/v8.12.0
    reference: String,
}

#[async_trait]
impl Command for RunCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let (context, writer) = ctx.into_app_context();
        let outcome = process_reference(&context, &self.reference).await?;
        writeln!(writer.write().await, "{}", outcome)?;

        Ok(())
    }
}
