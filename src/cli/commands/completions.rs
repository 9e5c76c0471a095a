//! `est completions` command - shell completion generation

use clap::CommandFactory;
use clap_complete::Shell;
use miette::Result;

use crate::cli::args::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "est", &mut std::io::stdout());
    Ok(())
}
