use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fanyi")]
#[command(about = "Paragraph-by-paragraph document translation CLI")]
#[command(version)]
pub struct Args {
    /// Document to translate (.txt/.md; reads from stdin if not provided)
    pub file: Option<String>,

    /// Target language code (e.g., zh-CN, en, ja)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation provider (google, baidu, youdao)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Print each source paragraph followed by its translation
    #[arg(short = 's', long)]
    pub side_by_side: bool,

    /// Write the translation to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Disable cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Suppress status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the provider and its credentials
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
}
