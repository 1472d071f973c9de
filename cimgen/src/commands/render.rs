use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only render this class
    #[arg(long = "class", value_name = "NAME")]
    pub class_name: Option<String>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let (raw, support) = self.project.open();
        let report = ops::render(raw, &support, self.class_name.as_deref())?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
