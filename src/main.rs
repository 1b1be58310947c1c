use anyhow::Result;
use clap::Parser;

use fanyi_cli::cli::commands::{configure, translate};
use fanyi_cli::cli::{Args, Command};
use fanyi_cli::output::{self, OutputConfig};
use fanyi_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                to: args.to,
                provider: args.provider,
                side_by_side: args.side_by_side,
                output: args.output,
                no_cache: args.no_cache,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
