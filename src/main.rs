use clap::{Parser as ClapParser, Subcommand};
use pupil::cli::{self, BatchOptions, CheckOptions, CliError};
use std::io::{self, Read};
use tracing::debug;

#[derive(ClapParser)]
#[command(name = "pupil")]
#[command(about = "Pupil - composable validation rules for values")]
#[command(version)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug detail to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single value against a rule
    Check {
        /// The rule, e.g. "required && min:3"
        rule: String,

        /// The value to validate (empty if omitted)
        #[arg(long, conflicts_with = "absent")]
        value: Option<String>,

        /// Validate an absent value
        #[arg(long)]
        absent: bool,
    },

    /// Validate a batch of fields given as JSON {"field": [value, rule]}
    Batch {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the tokens of a rule as JSON
    Tokens {
        rule: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the parsed tree of a rule
    Tree { rule: String },

    /// List registered checks
    Checks,

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'pupil docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let result = match cli.command {
        Commands::Check {
            rule,
            value,
            absent,
        } => run_check(rule, if absent { None } else { Some(value.unwrap_or_default()) }),
        Commands::Batch { input, pretty } => run_batch(input, pretty),
        Commands::Tokens { rule, pretty } => {
            cli::execute_tokens(&rule, pretty).map(|json| println!("{}", json))
        }
        Commands::Tree { rule } => cli::execute_tree(&rule).map(|tree| print!("{}", tree)),
        Commands::Checks => {
            for name in cli::list_checks() {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => {
            cli::get_doc_category(&category).map(|content| print!("{}", content))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing based on CLI flags. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

fn run_check(rule: String, value: Option<String>) -> Result<(), CliError> {
    let options = CheckOptions { rule, value };
    println!("{}", cli::execute_check(&options)?);
    Ok(())
}

fn run_batch(input: Option<String>, pretty: bool) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = BatchOptions { input, pretty };
    println!("{}", cli::execute_batch(&options)?);
    Ok(())
}
