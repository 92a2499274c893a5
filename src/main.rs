use clap::{Parser, Subcommand};
use dialoguer::Input;
use media_board::{build, config, output, scan};
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "media-board")]
#[command(about = "Turn a folder of PDFs, audio and images into one HTML board")]
#[command(long_about = "\
Turn a folder of PDFs, audio and images into one HTML board

Every file gets its own box on the page. Boxes can be dragged anywhere and
resized from their bottom-right corner.

Recognised files (extension = text after the first dot, case-sensitive):
  PDF:    .pdf                     → inline frame
  Audio:  .mp3                     → audio player with label
  Image:  .png .jpeg .jpg .webp    → image

The page is written to <name>.html in the output directory (default: the
current directory) and links to the files by name, so build from inside the
media folder or set scan.prefix_source in a config file.

Run 'media-board gen-config' to print a documented config file.")]
#[command(version = env!("BOARD_VERSION"))]
struct Cli {
    /// Config file overriding the stock extension mapping
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a folder and write the HTML board
    Build {
        /// Board name: page title, heading, and output file stem
        #[arg(long)]
        name: Option<String>,
        /// Folder to scan
        #[arg(long)]
        source: Option<PathBuf>,
        /// Directory to write <name>.html into
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
    /// List what a folder would put on a board
    Scan {
        /// Folder to scan
        #[arg(long)]
        source: PathBuf,
        /// Print the media set as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_board=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            name,
            source,
            output: out_dir,
        } => {
            let board_config = config::load_config(cli.config.as_deref())?;
            let name = match name {
                Some(name) => name,
                None => prompt("File name?")?,
            };
            let source = match source {
                Some(source) => source,
                None => PathBuf::from(prompt("Folder path?")?),
            };
            let outcome = build(&name, &source, &out_dir, &board_config)?;
            output::print_render_output(&outcome);
        }
        Command::Scan { source, json } => {
            let board_config = config::load_config(cli.config.as_deref())?;
            let media = scan::scan(&source, &board_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&media)?);
            } else {
                output::print_scan_output(&media, &source);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Ask for one line of input. The answer is used verbatim, empty included.
///
/// On a terminal this is an editable dialoguer prompt; with piped stdin one
/// line is read per question, so `printf 'notes\n.\n' | media-board build`
/// works.
fn prompt(question: &str) -> Result<String, Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        let answer = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        return Ok(answer);
    }

    eprintln!("{question}");
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Err(format!("no answer to {question:?} on stdin").into());
    }
    Ok(strip_line_ending(&line).to_string())
}

/// Drop one trailing `\n` or `\r\n`, keeping any other whitespace.
fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}
