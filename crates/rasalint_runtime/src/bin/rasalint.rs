//! rasalint CLI entry point.

use rasalint_engine::ProjectRoot;
use rasalint_runtime::render::{diagnostics_json, diagnostics_text, published_text, tree_text};
use rasalint_runtime::{ProjectWatcher, Repl, Session, logging, watch};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    Init,
    #[default]
    Check,
    Tree,
    Watch,
    Repl,
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    mode: Mode,
    dir: Option<PathBuf>,
    json: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut mode_seen = false;

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--json" => config.json = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            word if !mode_seen && config.dir.is_none() => {
                mode_seen = true;
                config.mode = match word {
                    "init" => Mode::Init,
                    "check" => Mode::Check,
                    "tree" => Mode::Tree,
                    "watch" => Mode::Watch,
                    "repl" => Mode::Repl,
                    dir => {
                        config.dir = Some(PathBuf::from(dir));
                        Mode::Check
                    }
                };
            }
            dir => {
                if config.dir.is_some() {
                    return Err(format!("unexpected argument: {dir}").into());
                }
                config.dir = Some(PathBuf::from(dir));
            }
        }
    }

    if config.json && config.mode != Mode::Check {
        return Err("--json only applies to `check`".into());
    }
    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("rasalint {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    logging::init(config.verbose)?;

    let dir = match config.dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    if config.mode == Mode::Init {
        let root = ProjectRoot::init(&dir)?;
        println!("Initialized rasalint project in {}", root.path().display());
        return Ok(ExitCode::SUCCESS);
    }

    let mut session = match Session::open(&dir) {
        Ok(session) => session,
        Err(e) if e.is_environment() => {
            eprintln!("\x1b[33m{e}\x1b[0m");
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e.into()),
    };
    let root = session.root().to_path_buf();

    match config.mode {
        Mode::Check => {
            if config.json {
                println!("{}", diagnostics_json(session.state(), &root)?);
            } else {
                print!("{}", diagnostics_text(session.state(), &root));
            }
            if session.state().diagnostics.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Mode::Tree => {
            println!("\x1b[1mDomain\x1b[0m");
            print!("{}", tree_text(session.domain_tree(), &root));
            println!("\x1b[1mTraining data\x1b[0m");
            print!("{}", tree_text(session.training_tree(), &root));
        }
        Mode::Watch => {
            print!("{}", diagnostics_text(session.state(), &root));
            let ignore = session.state().config.scan.ignore.clone();
            let watcher = ProjectWatcher::new(&root, ignore)?;
            eprintln!("\x1b[2mWatching {} (Ctrl+C to stop)\x1b[0m", root.display());
            watch::run(&mut session, &watcher, |published| {
                print!("{}", published_text(published, &root));
            })?;
        }
        Mode::Repl => {
            let mut repl = Repl::new(session)?;
            repl.run()?;
        }
        Mode::Init => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mrasalint\x1b[0m - Cross-reference checker for Rasa domain and training data

\x1b[1mUSAGE:\x1b[0m
    rasalint [COMMAND] [DIR] [OPTIONS]

\x1b[1mCOMMANDS:\x1b[0m
    init      Mark DIR as a rasalint project
    check     Print every diagnostic (default)
    tree      Print the domain and training data trees
    watch     Check, then recheck files as they change
    repl      Interactive session

\x1b[1mARGUMENTS:\x1b[0m
    [DIR]     Project directory (defaults to the current directory)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -v, --verbose      Log at debug level unless RASALINT_LOG is set
    --json             Print `check` results as JSON

\x1b[1mCONFIGURATION:\x1b[0m
    rasalint.toml in the project directory, for example:

        [warnings]
        showWarningsForUnusedIntents = false

        [scan]
        ignore = [\".git\", \"models\"]

\x1b[1mEXIT STATUS:\x1b[0m
    0    no errors
    1    error-severity diagnostics were found, or the command failed
    2    DIR is missing or not initialized"
    );
}
