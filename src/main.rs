//! linelight - print a source file with syntax highlighting

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use crossterm::tty::IsTty;

use linelight::config::Config;
use linelight::render::{render_document, RenderOptions};
use linelight::{Document, Error, Highlighter, Result};

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    language: Option<String>,
    config: Option<PathBuf>,
    line_numbers: bool,
    no_color: bool,
    file: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut argv = env::args().skip(1);
    let mut args = Args::default();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--language" | "-l" => args.language = Some(value_for(&arg, argv.next())?),
            "--config" | "-c" => args.config = Some(PathBuf::from(value_for(&arg, argv.next())?)),
            "--line-numbers" | "-n" => args.line_numbers = true,
            "--no-color" => args.no_color = true,
            _ if arg.starts_with('-') => return Err(Error::Usage(format!("unknown option {}", arg))),
            _ => args.file = Some(PathBuf::from(arg)),
        }
    }

    let Some(path) = args.file else {
        return Err(Error::Usage("no file given, try --help".to_string()));
    };

    let config = match &args.config {
        Some(config_path) => Config::load_from(config_path)?,
        None => default_config(),
    };

    let doc = Document::from_file(&path)?;
    let language = match &args.language {
        Some(identifier) => identifier.clone(),
        None => config.file_types().detect(&path).name().to_string(),
    };

    let mut highlighter = Highlighter::default();
    highlighter.set_language(&language, &doc);

    let mut stdout = io::stdout().lock();
    let options = RenderOptions {
        color: config.enabled && !args.no_color && io::stdout().is_tty(),
        line_numbers: args.line_numbers || config.show_line_numbers,
        tab_width: config.tab_width,
    };
    render_document(&mut stdout, &doc, &highlighter, &config.theme(), &options)?;

    Ok(())
}

/// Settings from the home directory; a broken file is reported and skipped
fn default_config() -> Config {
    let Some(path) = Config::config_path() else {
        return Config::default();
    };
    Config::load_if_exists(&path).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring {}: {}", path.display(), e);
        Config::default()
    })
}

fn value_for(option: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::Usage(format!("{} needs a value", option)))
}

fn print_usage() {
    println!("linelight {} - syntax highlighted file viewer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: linelight [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --language ID    Highlight as cpp, python, java, javascript or html");
    println!("  -n, --line-numbers   Show line numbers");
    println!("  -c, --config PATH    Read settings from PATH instead of ~/.linelight.toml");
    println!("      --no-color       Print without styling");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Without --language the file suffix picks the language; unknown");
    println!("suffixes are highlighted as C/C++.");
}

fn print_version() {
    println!("linelight {}", env!("CARGO_PKG_VERSION"));
}
