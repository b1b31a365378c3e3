//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use phonehook_config::Config;
use phonehook_core::CoreModule;
use phonehook_ghapi_interface::ApiService;
use phonehook_git_interface::GitService;
use phonehook_server::server::AppContext;
use phonehook_upstream_interface::UpstreamService;
use tokio::sync::RwLock;

use self::{names::NamesCommand, run::RunCommand, server::ServerCommand};
use crate::Result;

mod names;
mod run;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService>,
    pub git_service: Box<dyn GitService>,
    pub upstream_service: Box<dyn UpstreamService>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    /// Split the context into a server context and the output writer.
    pub fn into_app_context(self) -> (AppContext, Arc<RwLock<dyn Write + Send + Sync>>) {
        (
            AppContext::new_with_adapters(
                self.config,
                self.core_module,
                self.api_service,
                self.git_service,
                self.upstream_service,
            ),
            self.writer,
        )
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Run(RunCommand),
    Names(NamesCommand),
}

impl SubCommand {
    pub fn requires_valid_configuration(&self) -> bool {
        !matches!(self, Self::Names(_))
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Run(sub) => sub.execute(ctx).await,
            Self::Names(sub) => sub.execute(ctx).await,
        }
    }
}
