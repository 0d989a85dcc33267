use std::time::Duration;

use anyhow::{Context, Result};
use bst_steps::{parse_values, pseudocode, Operation, Order, Palette, Session, SessionConfig, Trace};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bst-steps", about = "Step-by-step binary search tree traces")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tree and trace operations against it, in order.
    Run {
        /// Operations such as `search:37`, `insert:5`, `min`, `select:3`, `inorder`.
        #[arg(required = true)]
        ops: Vec<String>,
        /// Starting keys, comma or space separated (default: sample tree).
        #[arg(long)]
        values: Option<String>,
        /// Start from this many random keys instead.
        #[arg(long, conflicts_with = "values")]
        random: Option<usize>,
        /// Start from this many random keys inserted in ascending order (a right spine).
        #[arg(long, conflicts_with_all = ["values", "random"])]
        skewed: Option<usize>,
        /// Smallest key for random creation.
        #[arg(long, default_value_t = 1)]
        min_key: i64,
        /// Largest key for random creation.
        #[arg(long, default_value_t = 99)]
        max_key: i64,
        /// Seed for reproducible random trees.
        #[arg(long)]
        seed: Option<u64>,
        /// Step delay hint in milliseconds, passed through to JSON output.
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
        /// Renderer palette (e.g. lime-green, royal-blue); picked at random if omitted.
        #[arg(long)]
        palette: Option<Palette>,
        /// Emit traces as JSON (requires the `serde` feature).
        #[arg(long)]
        json: bool,
    },
    /// Print every pseudocode listing.
    Listings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            ops,
            values,
            random,
            skewed,
            min_key,
            max_key,
            seed,
            delay_ms,
            palette,
            json,
        } => {
            let mut config = SessionConfig::default()
                .with_random_range(min_key..=max_key)
                .with_step_delay(Duration::from_millis(delay_ms))
                .with_palette(palette.unwrap_or_else(|| Palette::random(&mut rand::thread_rng())));
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            // a zero count leaves the key range unchecked
            let start = match (random, skewed) {
                (Some(count), _) => Start::Random(count),
                (_, Some(count)) => Start::Skewed(count),
                _ => Start::Values,
            };
            config = config.with_random_count(start.count());
            if let Some(values) = values {
                let parsed = parse_values(&values)
                    .with_context(|| format!("invalid --values '{}'", values))?;
                config = config.with_values(parsed);
            }
            run_ops(config, start, &ops, json)?
        }
        Commands::Listings => print_listings(),
    }

    Ok(())
}

/// How the starting tree is built
#[derive(Debug, Clone, Copy)]
enum Start {
    Values,
    Random(usize),
    Skewed(usize),
}

impl Start {
    fn count(self) -> usize {
        match self {
            Start::Values => 0,
            Start::Random(count) | Start::Skewed(count) => count,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_ops(config: SessionConfig, start: Start, ops: &[String], json: bool) -> Result<()> {
    let ops = ops
        .iter()
        .map(|raw| {
            raw.parse::<Operation>()
                .with_context(|| format!("invalid operation '{}'", raw))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = Session::new(config).context("invalid session configuration")?;
    match start {
        Start::Values => {}
        Start::Random(_) => {
            session
                .create_random_default()
                .context("failed to create random tree")?;
        }
        Start::Skewed(_) => {
            session
                .create_skewed_default()
                .context("failed to create skewed tree")?;
        }
    }

    let traces: Vec<Trace> = ops.into_iter().map(|op| session.run(op)).collect();

    if json {
        print_json(&session, &traces)?;
    } else {
        for trace in &traces {
            print!("{}", trace);
            println!(
                "  => {}  tree: {:?}",
                trace.after,
                trace.after.values(Order::Inorder)
            );
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(session: &Session, traces: &[Trace]) -> Result<()> {
    let config = session.config();
    let document = serde_json::json!({
        "palette": config.palette,
        "accent": config.palette.hex(),
        "stepDelayMs": u64::try_from(config.step_delay.as_millis()).unwrap_or(u64::MAX),
        "traces": traces,
        "tree": session.tree().values(Order::Inorder),
    });
    let rendered =
        serde_json::to_string_pretty(&document).context("failed to serialize traces")?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_session: &Session, _traces: &[Trace]) -> Result<()> {
    anyhow::bail!("JSON output requires building with `--features serde`")
}

fn print_listings() {
    for (name, lines) in pseudocode::ALL {
        println!("{}", name);
        for (idx, line) in lines.iter().enumerate() {
            println!("  {:>2} | {}", idx, line);
        }
        println!();
    }
}
