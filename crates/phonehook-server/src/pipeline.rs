//! Release update pipeline runner.

use phonehook_core::{use_cases::releases::ProcessPushEventInterface, PipelineOutcome};
use shaku::HasComponent;
use tracing::{error, info};

use crate::{metrics::PIPELINE_RUNS, server::AppContext, Result};

/// Outcome label counted when a run fails.
pub(crate) const FAILURE_LABEL: &str = "error";

/// Run the release update pipeline for a pushed reference.
///
/// Every outcome, including failures, is logged and counted.
#[tracing::instrument(skip(ctx))]
pub async fn process_reference(ctx: &AppContext, reference: &str) -> Result<PipelineOutcome> {
    let core_context = ctx.as_core_context();
    let process_push_event: &dyn ProcessPushEventInterface =
        core_context.core_module.resolve_ref();

    match process_push_event.run(&core_context, reference).await {
        Ok(outcome) => {
            PIPELINE_RUNS.with_label_values(&[outcome.label()]).inc();
            info!(outcome = outcome.label(), "{outcome}");
            Ok(outcome)
        }
        Err(e) => {
            PIPELINE_RUNS.with_label_values(&[FAILURE_LABEL]).inc();
            error!(error = %e, "Release update failed for reference {reference}");
            Err(e.into())
        }
    }
}
