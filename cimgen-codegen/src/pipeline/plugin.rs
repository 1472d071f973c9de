//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that hooks into the planning pipeline.
///
/// Plugins receive callbacks before and after each phase runs and may
/// inspect or modify the context. See [`TracingPlugin`](super::TracingPlugin)
/// for an implementation.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
