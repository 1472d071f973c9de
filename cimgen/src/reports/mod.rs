//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod output;
mod plan;
mod render;

pub use check::{CheckReport, PlanStats};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use plan::PlanReport;
pub use render::RenderReport;
