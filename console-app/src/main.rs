use std::{
    fs,
    io::{self, BufRead, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use comscript::{Dictionary, Error, Interpreter};

mod app_config;

/// Stack-based script runner
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Script file, `-` for stdin. Starts a REPL when neither this nor
    /// `--eval` is given.
    script: Option<PathBuf>,

    /// Script text to run instead of a file
    #[arg(short, long, conflicts_with = "script")]
    eval: Option<String>,

    /// Settings file (.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data stack capacity
    #[arg(long)]
    capacity: Option<usize>,

    /// How deep quotations may invoke quotations
    #[arg(long)]
    max_nesting: Option<usize>,

    /// Print the data stack when the script ends
    #[arg(short = 's', long)]
    print_stack: bool,
}

fn to_quit(cmd: &str) -> bool {
    matches!(cmd, "quit" | "q" | "exit")
}

fn report(err: &Error) {
    eprintln!("error {}: {}", err.code().code(), err);
}

/// Runs stdin line by line on one interpreter. Every line stays in the
/// interpreter's source arena so its quotations outlive it; nothing is
/// released until [`Interpreter::reset`] runs.
fn repl(intr: &mut Interpreter) -> anyhow::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let input = line.trim();

        if to_quit(input) {
            println!("Bye!");
            return Ok(());
        }
        if let Err(e) = intr.run(input) {
            report(&e);
        }
        println!("=> {:?}", intr.stack());
        if intr.is_halted() {
            return Ok(());
        }
    }
    Ok(())
}

fn load_script(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut script = String::new();
        io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read stdin")?;
        return Ok(script);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to load {path:?}"))
}

fn main() -> anyhow::Result<ExitCode> {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut config = app_config::load(args.config.as_deref())?;
    if let Some(capacity) = args.capacity {
        config.stack_capacity = capacity;
    }
    if let Some(max_nesting) = args.max_nesting {
        config.max_nesting = max_nesting;
    }
    log::debug!("{config:?}");

    let mut intr = Interpreter::new(Dictionary::with_builtins(), config);

    let script = match (args.eval, args.script) {
        (Some(script), _) => script,
        (None, Some(path)) => load_script(&path)?,
        (None, None) => {
            repl(&mut intr)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let res = intr.run(&script);
    if args.print_stack {
        println!("{:?}", intr.stack());
    }
    match res {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            report(&e);
            Ok(ExitCode::from(e.code().code() as u8))
        }
    }
}
