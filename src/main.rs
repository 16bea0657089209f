use clap::{Parser, Subcommand};

mod calc;
mod cmd;

#[derive(Parser, Debug)]
#[command(name = "salc", version, about = "Salary Calculator for flat-rate income tax (NDFL 13%)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single amount to net pay, tax or total
    Convert(cmd::convert::ConvertCommand),
    /// Show the salary form summary for one amount
    Summary(cmd::summary::SummaryCommand),
    /// Calculate many salaries from a CSV or JSON file
    Batch(cmd::batch::BatchCommand),
    /// List the pay bases
    Bases(cmd::bases::BasesCommand),
    /// Print the batch input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    match cli.command {
        Command::Convert(convert) => convert.exec(),
        Command::Summary(summary) => summary.exec(),
        Command::Batch(batch) => batch.exec(),
        Command::Bases(bases) => bases.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
