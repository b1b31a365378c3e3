use async_trait::async_trait;
use phonehook_models::ReleaseVersion;
use shaku::{Component, HasComponent, Interface};
use tracing::warn;

use super::UpdateReleaseInterface;
use crate::{CoreContext, PipelineOutcome, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPushEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, reference: &str) -> Result<PipelineOutcome>;
}

#[derive(Component)]
#[shaku(interface = ProcessPushEventInterface)]
pub(crate) struct ProcessPushEvent;

#[async_trait]
impl ProcessPushEventInterface for ProcessPushEvent {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, reference: &str) -> Result<PipelineOutcome> {
        let Some(version) = ReleaseVersion::from_reference(reference) else {
            warn!(reference = %reference, "Ignoring reference {reference}, not a tag");
            return Ok(PipelineOutcome::Skipped {
                reference: reference.into(),
            });
        };

        let update_release: &dyn UpdateReleaseInterface = ctx.core_module.resolve_ref();
        update_release.run(ctx, &version).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest, use_cases::releases::MockUpdateReleaseInterface,
        CoreModule,
    };

    #[tokio::test]
    async fn branch_reference_is_skipped() {
        let mut ctx = CoreContextTest::new();
        let mut update_release = MockUpdateReleaseInterface::new();
        update_release.expect_run().never();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn UpdateReleaseInterface>(Box::new(update_release))
            .build();

        // No expectation on services: any outbound call fails the test.
        let outcome = ProcessPushEvent
            .run(&ctx.as_context(), "refs/heads/master")
            .await
            .unwrap();

        assert_eq!(
            outcome,
            PipelineOutcome::Skipped {
                reference: "refs/heads/master".into()
            }
        );
    }

    #[tokio::test]
    async fn tag_reference_updates_release() {
        let mut ctx = CoreContextTest::new();
        let mut update_release = MockUpdateReleaseInterface::new();
        update_release
            .expect_run()
            .once()
            .withf(|_, version| version.as_str() == "8.12.0")
            .return_once(|_, version| {
                Ok(PipelineOutcome::Committed {
                    version: version.clone(),
                    branch: "support/update-libphonenumber-8-12-0".into(),
                    commit: "abcdef".into(),
                })
            });
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn UpdateReleaseInterface>(Box::new(update_release))
            .build();

        let outcome = ProcessPushEvent
            .run(&ctx.as_context(), "refs/tags/v8.12.0")
            .await
            .unwrap();

        assert_eq!(outcome.label(), "committed");
    }
}
