use async_trait::async_trait;
use clap::Parser;
use phonehook_server::server::run_bot_server;

use super::{Command, CommandContext};
use crate::Result;

/// Start the webhook server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        tokio::task::spawn_local(async move {
            let (context, _) = ctx.into_app_context();
            run_bot_server(context).await
        })
        .await??;

        Ok(())
    }
}
