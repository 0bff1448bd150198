use std::path::PathBuf;
use std::process;

use clap::Parser;

mod commands;
mod config;
mod content;
mod directory;
mod error;
mod listing;
mod models;
mod overview;
mod render;
mod schoolbook;
mod tui;

const HELP_TEXT: &str = r#"
  Usage
    $ sb [<options> ...]

    Options
      none               Launch the interactive browser
      --achievements, -a Display achievement folders (teacher|student|school)
      --content-dir      Define a custom content directory
      --copy, -y         Copy an item link (index in input)
      --documents, -d    Display official document folders
      --find, -f         Search a category (query in input)
      --folder           Open one folder of the displayed category
      --forms            Display form download folders
      --help, -h         Display help message
      --history          Display past administrators
      --info             Display the school profile
      --innovations      Display teaching innovations
      --news, -n         Display the news feed
      --page, -p         Select a page of the displayed view
      --people           Display personnel
      --stats            Display enrollment statistics
      --version, -v      Display installed version

    Examples
      $ sb
      $ sb --news --page 2
      $ sb --achievements student
      $ sb --achievements student --folder "Math Olympiad" --page 2
      $ sb --documents --folder Policy
      $ sb --find news budget
      $ sb --copy forms 3
      $ sb --info
"#;

#[derive(Parser)]
#[command(
    name = "sb",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse a school's public information from the command-line habitat",
    after_help = HELP_TEXT
)]
struct Cli {
    /// Input arguments (search terms, item index, etc.)
    #[arg(trailing_var_arg = true)]
    input: Vec<String>,

    /// Display achievement folders for a kind (teacher|student|school)
    #[arg(short = 'a', long, value_name = "KIND")]
    achievements: Option<String>,

    /// Define a custom content directory
    #[arg(long = "content-dir", value_name = "PATH")]
    content_dir: Option<PathBuf>,

    /// Copy an item link to the clipboard (1-based index in input)
    #[arg(short = 'y', long, value_name = "CATEGORY")]
    copy: Option<String>,

    /// Display official document folders
    #[arg(short = 'd', long)]
    documents: bool,

    /// Search a category (query in input)
    #[arg(short = 'f', long, value_name = "CATEGORY")]
    find: Option<String>,

    /// Open one folder of the displayed category
    #[arg(long, value_name = "NAME")]
    folder: Option<String>,

    /// Display form download folders
    #[arg(long)]
    forms: bool,

    /// Display past administrators
    #[arg(long)]
    history: bool,

    /// Display the school profile
    #[arg(long)]
    info: bool,

    /// Display teaching innovations
    #[arg(long)]
    innovations: bool,

    /// Display the news feed
    #[arg(short = 'n', long)]
    news: bool,

    /// Select a page of the displayed view
    #[arg(short = 'p', long, value_name = "N", default_value_t = 1)]
    page: usize,

    /// Display personnel
    #[arg(long)]
    people: bool,

    /// Display enrollment statistics
    #[arg(long)]
    stats: bool,

    /// Run in CLI mode (non-interactive)
    #[arg(long)]
    cli: bool,
}

fn main() {
    let cli = Cli::parse();

    // Determine if we should run TUI or CLI mode
    let has_action_flags = cli.news
        || cli.achievements.is_some()
        || cli.documents
        || cli.forms
        || cli.innovations
        || cli.people
        || cli.history
        || cli.stats
        || cli.info
        || cli.find.is_some()
        || cli.copy.is_some();

    // Run TUI if: no action flags, no CLI flag, and no input
    let run_tui = !cli.cli && !has_action_flags && cli.input.is_empty();

    if run_tui {
        // Run interactive TUI
        if let Err(e) = tui::run(cli.content_dir.as_deref()) {
            eprintln!("TUI error: {}", e);
            process::exit(1);
        }
    } else {
        // Run CLI mode
        let result = commands::run(
            cli.input,
            cli.news,
            cli.achievements,
            cli.documents,
            cli.forms,
            cli.innovations,
            cli.people,
            cli.history,
            cli.stats,
            cli.info,
            cli.find,
            cli.copy,
            cli.folder,
            cli.page,
            cli.content_dir,
        );

        if let Err(e) = result {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
