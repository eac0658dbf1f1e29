//! BlockDNR CLI
//!
//! CLI tool for converting domain blocklists into browser rule sets and
//! scaffolding a minimal blocking extension.

mod logging;
mod prompt;
mod scaffold;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use bd_compiler::{convert_file, ConvertOptions};

use crate::prompt::PromptDefaults;
use crate::scaffold::{ScaffoldOptions, DEFAULT_EXTENSION_DIR};

#[derive(Parser)]
#[command(name = "bd-cli")]
#[command(about = "BlockDNR blocklist to declarativeNetRequest converter")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a domain list into a rule set JSON file
    Convert {
        /// Input domain list
        #[arg(short, long, env = "BD_INPUT")]
        input: PathBuf,

        /// Output rule set file (defaults to <input>_chromium_rules.json)
        #[arg(short, long, env = "BD_OUTPUT")]
        output: Option<PathBuf>,

        /// Also write an extension skeleton
        #[arg(long)]
        scaffold: bool,

        /// Directory for the extension skeleton
        #[arg(long, env = "BD_SCAFFOLD_DIR", default_value = DEFAULT_EXTENSION_DIR)]
        scaffold_dir: PathBuf,
    },

    /// Write an extension skeleton
    Scaffold {
        /// Target directory
        #[arg(short, long, env = "BD_SCAFFOLD_DIR", default_value = DEFAULT_EXTENSION_DIR)]
        dir: PathBuf,
    },

    /// Answer prompts on stdin instead of passing flags
    Interactive,
}

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            scaffold,
            scaffold_dir,
        } => cmd_convert(input, output, scaffold.then_some(scaffold_dir)),
        Commands::Scaffold { dir } => cmd_scaffold(&dir),
        Commands::Interactive => cmd_interactive(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_convert(input: PathBuf, output: Option<PathBuf>, scaffold_dir: Option<PathBuf>) -> Result<(), String> {
    let opts = ConvertOptions {
        input,
        output,
        generated_at: chrono::Local::now().naive_local(),
    };

    let outcome = convert_file(&opts).map_err(|e| e.to_string())?;
    println!("{}", outcome.summary());

    if let Some(dir) = scaffold_dir {
        cmd_scaffold(&dir)?;
    }

    Ok(())
}

fn cmd_scaffold(dir: &Path) -> Result<(), String> {
    let opts = ScaffoldOptions { dir: dir.to_path_buf() };
    scaffold::write_extension(&opts)?;

    println!("Chromium extension structure created in: {}", dir.display());
    println!();
    print!("{}", scaffold::load_instructions(dir));
    Ok(())
}

fn cmd_interactive() -> Result<(), String> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    prompt::run(
        stdin.lock(),
        stdout.lock(),
        &PromptDefaults::default(),
        chrono::Local::now().naive_local(),
    )
}
