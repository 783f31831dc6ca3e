use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dirscrape_cli::commands::{self, replay::ReplayArgs, scrape::ScrapeArgs};
use dirscrape_cli::{OutputFormat, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dirscrape")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Scrape business and product listings from online directories",
    long_about = "dirscrape drives a real Chrome session through a directory site's search form \
                  and collects the listings on the first results page. Supported sites are \
                  Yellow Pages (businesses) and IndiaMART (products)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,

    /// File that receives the scrape and replay log (appended to)
    #[arg(
        long,
        global = true,
        env = "DIRSCRAPE_LOG_FILE",
        default_value = "scraper.log",
        value_name = "FILE"
    )]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a directory site in a headless Chrome session
    Scrape(ScrapeArgs),

    /// Run a site's extractor over saved HTML pages without a browser
    Replay(ReplayArgs),

    /// List the supported sites
    Sites,

    /// Generate shell completion scripts
    #[command(
        long_about = "Generate shell completion scripts for dirscrape.\n\n\
        SUPPORTED SHELLS:\n  \
        bash, zsh, fish, powershell, elvish\n\n\
        INSTALLATION:\n  \
        Bash:  dirscrape completion --shell bash > ~/.local/share/bash-completion/completions/dirscrape\n  \
        Zsh:   dirscrape completion --shell zsh > ~/.zfunc/_dirscrape\n  \
        Fish:  dirscrape completion --shell fish > ~/.config/fish/completions/dirscrape.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Only runs that scrape are recorded in the log file
    let log_file = match &cli.command {
        Commands::Scrape(_) | Commands::Replay(_) => Some(cli.log_file.as_path()),
        Commands::Sites | Commands::Completion { .. } => None,
    };
    let guard = logging::init(cli.verbose, log_file)?;

    let result = match cli.command {
        Commands::Scrape(args) => commands::scrape::execute(args, cli.format),
        Commands::Replay(args) => commands::replay::execute(args, cli.format),
        Commands::Sites => commands::sites::execute(cli.format).map(|_| ExitCode::SUCCESS),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd, &mut std::io::stdout())
                .map(|_| ExitCode::SUCCESS)
        }
    };

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }

    // Flush the file log before the process exits
    drop(guard);
    result
}
