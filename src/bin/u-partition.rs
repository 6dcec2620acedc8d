//! Command-line front end: solve an instance file or generate one.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use u_partition::problem::DEFAULT_SIZE;
use u_partition::random::create_rng;
use u_partition::repr::Representation;
use u_partition::solve::{solve, Algorithm, SolveConfig};
use u_partition::{Problem, Result, DEFAULT_MAX_ITERATIONS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Number partitioning heuristics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr.
    #[arg(global = true, short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one algorithm on an instance file and print the residue.
    Solve(SolveArgs),
    /// Write a random instance file.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Instance file, one integer per line.
    file: PathBuf,

    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Kk)]
    algorithm: AlgorithmArg,

    #[arg(short, long, value_enum, default_value_t = RepresentationArg::Sign)]
    representation: RepresentationArg,

    /// Numeric algorithm code (0, 1-3, 11-13); overrides --algorithm and
    /// --representation.
    #[arg(long)]
    code: Option<u32>,

    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    iterations: usize,

    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output path.
    file: PathBuf,

    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Kk,
    Rr,
    Hc,
    Sa,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Kk => Algorithm::KarmarkarKarp,
            AlgorithmArg::Rr => Algorithm::RepeatedRandom,
            AlgorithmArg::Hc => Algorithm::HillClimbing,
            AlgorithmArg::Sa => Algorithm::SimulatedAnnealing,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RepresentationArg {
    Sign,
    Prepartition,
}

impl From<RepresentationArg> for Representation {
    fn from(arg: RepresentationArg) -> Self {
        match arg {
            RepresentationArg::Sign => Representation::SignSequence,
            RepresentationArg::Prepartition => Representation::Prepartition,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_solve(args: &SolveArgs) -> Result<u64> {
    let problem = Problem::read_from_path(&args.file)?;
    let (algorithm, representation) = match args.code {
        Some(code) => Algorithm::from_code(code)?,
        None => (args.algorithm.into(), args.representation.into()),
    };

    let mut config = SolveConfig::default().with_max_iterations(args.iterations);
    config.seed = args.seed;

    let outcome = solve(&problem, algorithm, representation, &config)?;
    Ok(outcome.residue)
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let mut rng = create_rng(args.seed);
    let problem = Problem::random(args.size, &mut rng)?;
    problem.write_to_path(&args.file)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Solve(args) => run_solve(args).map(|residue| println!("{residue}")),
        Commands::Generate(args) => run_generate(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
