use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use design_patterns::{catalog, logging, Example, RunnerConfig};

const USAGE: &str = "\
usage: patterns [--config <path>] <command>

commands:
  list              show every example
  run <name>...     run the named examples in order
  all               run every example (or those listed in the config)";

enum Command {
    List,
    Run(Vec<String>),
    All,
}

struct Args {
    config: Option<PathBuf>,
    command: Command,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut config = None;
    let mut rest = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => rest.push(arg),
        }
    }

    let mut rest = rest.into_iter();
    let command = match rest.next().as_deref() {
        Some("list") => Command::List,
        Some("all") => Command::All,
        Some("run") => {
            let names: Vec<String> = rest.collect();
            if names.is_empty() {
                bail!("`run` needs at least one example name\n\n{}", USAGE);
            }
            Command::Run(names)
        }
        Some(other) => bail!("unknown command `{}`\n\n{}", other, USAGE),
        None => bail!("missing command\n\n{}", USAGE),
    };

    Ok(Args { config, command })
}

fn list(out: &mut dyn Write) -> io::Result<()> {
    for example in catalog::EXAMPLES {
        writeln!(
            out,
            "{} — {}",
            format!("{}/{}", example.category, example.name).bold(),
            example.summary
        )?;
    }
    Ok(())
}

fn run_all(examples: &[&Example], config: &RunnerConfig, out: &mut dyn Write) -> Result<()> {
    for (i, example) in examples.iter().enumerate() {
        if config.headers {
            if i > 0 {
                writeln!(out)?;
            }
            let heading = format!("=== {}/{} ===", example.category, example.name);
            writeln!(out, "{}", heading.bold().cyan())?;
        }
        example
            .run(out)
            .with_context(|| format!("example `{}` failed", example.name))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init();

    let args = parse_args(env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    if !config.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::List => list(&mut out)?,
        Command::All => {
            let examples = config.selected()?;
            run_all(&examples, &config, &mut out)?;
        }
        Command::Run(names) => {
            let examples = names
                .iter()
                .map(|name| catalog::lookup(name))
                .collect::<design_patterns::Result<Vec<_>>>()?;
            run_all(&examples, &config, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
