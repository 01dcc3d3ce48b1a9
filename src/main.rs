use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use hindley::interpreter::{ENTRY, interpret_entry};
use hindley::{Builtins, Context, Environment, infer_program, parse_program, run_unchecked};

#[derive(Parser)]
#[command(name = "hindley", version, about = "Run a program with Hindley-Milner type inference")]
struct Cli {
    /// Source file to run
    file: PathBuf,

    /// Print the inferred scheme of every binding
    #[arg(long)]
    types: bool,

    /// Evaluate without type checking
    #[arg(long)]
    no_check: bool,

    /// Binding to start evaluation from
    #[arg(long, default_value = ENTRY)]
    entry: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let program = parse_program(&source)?;

    let env = Environment::new();
    let mut ctx = Context::empty();
    Builtins::standard().install(&env, &mut ctx);

    let value = if cli.no_check {
        run_unchecked(&program, &env, &cli.entry)?
    } else {
        let schemes = infer_program(&program, &mut ctx)?;
        if cli.types {
            for (name, scheme) in &schemes {
                println!("{} : {}", name, scheme);
            }
        }
        interpret_entry(&program, &env, &cli.entry)?
    };

    println!("{}", value);
    Ok(())
}
