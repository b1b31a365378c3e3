use std::sync::Arc;

use clap::Parser;
use phonehook_config::Config;
use phonehook_core::CoreModule;
use phonehook_git_libgit2::Libgit2GitService;
use phonehook_sentry::with_sentry_configuration;
use phonehook_server::ghapi::MetricsApiService;
use phonehook_upstream_tarball::TarballUpstreamService;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// Open libphonenumber update pull requests from release tags.
#[derive(Parser)]
#[command(about, long_about = None, version)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    pub fn requires_valid_configuration(&self) -> bool {
        self.cmd.requires_valid_configuration()
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            if config.dry_run {
                warn!("Dry-run mode enabled, nothing will be pushed");
            }

            let ctx = CommandContext {
                config: config.clone(),
                core_module: CoreModule::builder().build(),
                api_service: Box::new(MetricsApiService::new(config.clone())),
                git_service: Box::new(Libgit2GitService::new()),
                upstream_service: Box::new(TarballUpstreamService::new(config.clone())),
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config, || async move {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(move || runtime).block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
