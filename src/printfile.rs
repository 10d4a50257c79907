use anyhow::{Context, Result};
use std::env;

use cmdline_lessons::cli::PrintFileArgs;
use cmdline_lessons::content;

fn main() {
    env_logger::init();

    // Failures are reported on stderr only; the exit status stays 0.
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}

fn run() -> Result<()> {
    let args = PrintFileArgs::from_argv(env::args_os());

    if args.paths.len() != 1 {
        println!("{}", content::USAGE);
        return Ok(());
    }

    let path = &args.paths[0];
    let text = content::read_lines(path)
        .with_context(|| format!("could not print {}", path.display()))?;
    println!("{}", text);
    Ok(())
}
