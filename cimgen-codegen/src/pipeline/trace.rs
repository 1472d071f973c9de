//! Plugin that logs phase boundaries through `tracing`.

use std::sync::atomic::{AtomicUsize, Ordering};

use eyre::Result;

use super::{CompilationContext, Plugin, Severity};

/// Logs each phase and mirrors new diagnostics as log events.
#[derive(Debug, Default)]
pub struct TracingPlugin {
    reported: AtomicUsize,
}

impl TracingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        tracing::debug!(phase, "starting phase");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let start = self.reported.swap(ctx.diagnostics.len(), Ordering::SeqCst);
        for diag in ctx.diagnostics.iter().skip(start) {
            let location = diag.location.as_deref().unwrap_or("-");
            match diag.severity {
                Severity::Error => tracing::error!(phase, location, "{}", diag.message),
                Severity::Warning => tracing::warn!(phase, location, "{}", diag.message),
                Severity::Info => tracing::debug!(phase, location, "{}", diag.message),
            }
        }
        tracing::info!(
            phase,
            errors = ctx.error_count(),
            warnings = ctx.warning_count(),
            "finished phase"
        );
        Ok(())
    }
}
