use anyhow::Result;
use clap::Parser;

mod args;
mod cmd;
mod output;

fn main() -> Result<()> {
    let cli = args::Cli::parse();
    storefront_observability::tracing::init(cli.log_format);

    cmd::dispatch(cli)
}
