use clap::Parser as ClapParser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use wildcard_tree::cli::{self, CliError, Repl, Step};

#[derive(ClapParser)]
#[command(name = "wildcard")]
#[command(about = "Tokenize or parse {{ }} placeholder expressions")]
#[command(version)]
struct Cli {
    /// Stage to run on each line
    #[arg(long, value_enum, ignore_case = true, default_value_t = Step::Parse)]
    step: Step,

    /// Run once on this text instead of reading lines from stdin
    #[arg(short, long)]
    input: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.input {
        Some(line) => run_once(cli.step, &line),
        None => {
            let stdin = io::stdin();
            let repl = Repl::new(cli.step).with_prompt(atty::is(atty::Stream::Stdin));
            repl.run(stdin.lock(), &mut io::stdout(), &mut io::stderr())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_once(step: Step, line: &str) -> Result<(), CliError> {
    let rendered = cli::execute_line(step, line)?;
    let mut stdout = io::stdout();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
