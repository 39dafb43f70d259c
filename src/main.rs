use clap::Parser;
use miette::Result;
use imgrid::cli::{Cli, Commands};
use imgrid::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.verbose);

    match cli.command {
        Commands::Convert(args) => imgrid::cli::convert::run(args, &printer)?,
        Commands::Inspect(args) => imgrid::cli::inspect::run(args, &printer)?,
        Commands::Init(args) => imgrid::cli::init::run(args, &printer)?,
        Commands::Completions(args) => imgrid::cli::completions::run(args)?,
    }

    Ok(())
}
