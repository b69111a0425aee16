use std::io::Read;

use clap::{Args, Parser, Subcommand};

use array_ops::handler::bench::{DEFAULT_ITERATIONS, DEFAULT_WARMUP, run_bench};
use array_ops::handler::{DEFAULT_SIZE, HandlerError, Request, decode_request, handle_request};
use array_ops::logging;
use array_ops::report::json::{ReportError, render_json};

#[derive(Parser, Debug)]
#[command(name = "array-ops", version)]
#[command(about = "Generate a synthetic item array and summarize it through a filter/score/sort/group pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Handle a single request and print the response JSON
    Run(RunArgs),
    /// Repeat requests with seeds 0..iterations and print duration statistics
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Number of items to generate
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_SIZE)]
    size: i64,

    /// Seed for reproducible generation
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Raw request event, e.g. '{"size":1000,"seed":42}'
    #[arg(long, conflicts_with_all = ["size", "seed", "stdin"])]
    event: Option<String>,

    /// Read the request event from stdin
    #[arg(long, conflicts_with_all = ["size", "seed"])]
    stdin: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Number of items generated per request
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_SIZE)]
    size: i64,

    /// Untimed requests run before measuring
    #[arg(long, default_value_t = DEFAULT_WARMUP)]
    warmup: u32,

    /// Timed requests, seeded 0..iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Handler(#[from] HandlerError),
    #[error(transparent)]
    Render(#[from] ReportError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),
}

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Run(args) => {
            let request = resolve_request(&args)?;
            let response = handle_request(request)?;
            Ok(render_json(&response, args.pretty)?)
        }
        Command::Bench(args) => {
            let summary = run_bench(args.size, args.warmup, args.iterations)?;
            Ok(render_json(&summary, args.pretty)?)
        }
    }
}

fn resolve_request(args: &RunArgs) -> Result<Request, CliError> {
    if let Some(event) = &args.event {
        return Ok(decode_request(event)?);
    }
    if args.stdin {
        let mut event = String::new();
        std::io::stdin().read_to_string(&mut event)?;
        return Ok(decode_request(&event)?);
    }
    Ok(Request {
        size: args.size,
        seed: args.seed,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
