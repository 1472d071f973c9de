use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let (raw, support) = self.project.open();
        let report = ops::plan(raw, &support)?;

        if self.json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
