use clap::Parser;
use fabrika::cli::{Cli, Commands};
use miette::Result;

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
        Commands::Order(args) => fabrika::cli::commands::order::run(args, &cli.file),
        Commands::Produce(args) => fabrika::cli::commands::produce::run(args, &cli.file),
        Commands::Deliver(args) => fabrika::cli::commands::deliver::run(args, &cli.file),
        Commands::List(args) => fabrika::cli::commands::list::run(args, &cli.file),
        Commands::Repair(args) => fabrika::cli::commands::repair::run(args, &cli.file),
    }
}
