use clap::Parser;
use miette::Result;

use est::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => est::cli::commands::init::run(args),
        Commands::Tree(args) => est::cli::commands::tree::run(args),
        Commands::Summary(args) => est::cli::commands::summary::run(args),
        Commands::Toggle(args) => est::cli::commands::toggle::run(args),
        Commands::Ratio(args) => est::cli::commands::ratio::run(args),
        Commands::Other(args) => est::cli::commands::other::run(args),
        Commands::Chart(args) => est::cli::commands::chart::run(args),
        Commands::Completions(args) => est::cli::commands::completions::run(args),
    }
}
