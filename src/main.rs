use std::{fs::File, io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use eqsolver::{
    PayoffGame,
    config::SolverConfig,
    equilibrium::{Equilibrium, EquilibriumError, SolverKind, solve_equilibrium_with},
    game::read_game,
    report::{self, SolveRecord, Status},
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with solver settings.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Linear solver. Overrides the one in the config file.
    #[arg(short, long, global = true, value_enum)]
    solver: Option<SolverKind>,

    /// Reject games where the players have a different number of actions.
    #[arg(long, global = true)]
    require_equal_actions: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solves a payoff file. Each line is a row of `(a,b)` cells separated by `;`.
    Solve {
        file: PathBuf,

        /// Prints the equilibrium as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Solves every `.txt` payoff file below a directory.
    Batch {
        dir: PathBuf,

        /// CSV file for the results. Defaults to standard output.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generates and solves a game with uniformly distributed payoffs.
    Random {
        #[arg(value_parser = clap::value_parser!(u16).range(1..))]
        n1: u16,

        #[arg(value_parser = clap::value_parser!(u16).range(1..))]
        n2: u16,

        /// Seed for the random number generator.
        #[arg(long)]
        seed: Option<u64>,

        /// Lower bound of the payoffs.
        #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
        low: f64,

        /// Upper bound (exclusive) of the payoffs.
        #[arg(long, default_value_t = 10., allow_negative_numbers = true)]
        high: f64,
    },
}

fn load_config(args: &Args) -> Result<SolverConfig, String> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_file(path).map_err(|e| e.to_string())?,
        None => SolverConfig::default(),
    };
    if let Some(solver) = args.solver {
        config.solver = solver;
    }
    config.require_equal_actions |= args.require_equal_actions;
    log::debug!("{config:?}");
    Ok(config)
}

fn print_equilibrium(game: &PayoffGame, eq: &Equilibrium, config: &SolverConfig) {
    println!("\nNash Equilibrium Weights");
    print!("{}", report::weights_table(eq));
    println!("\nEquilibrium payoff");
    println!("Player 1: {}, Player 2: {}", eq.v2, eq.v1);

    if eq.is_mixture(config.check_tolerance) {
        let regret = game.regret(&eq.strategy());
        println!("Regret: {:.3e} {:.3e}", regret.0, regret.1);
    } else {
        log::warn!("Some weights are negative: no equilibrium where every action is played.");
    }
}

fn solve(game: &PayoffGame, config: &SolverConfig, json: bool) -> Result<(), String> {
    config.check_game(game).map_err(|e| e.to_string())?;
    if !json {
        println!("\nPayoff Matrix");
        print!("{game}");
    }

    let eq = solve_equilibrium_with(game, config.linear_solver().as_ref()).map_err(
        |err| match err {
            EquilibriumError::SingularSystem { .. } => err.to_string(),
            EquilibriumError::InvalidSystem { .. } | EquilibriumError::IndexMismatch { .. } => {
                format!("Internal error: {err}")
            }
        },
    )?;

    if json {
        let s = serde_json::to_string_pretty(&eq).map_err(|e| e.to_string())?;
        println!("{s}");
    } else {
        print_equilibrium(game, &eq, config);
    }
    Ok(())
}

fn batch(dir: PathBuf, output: Option<PathBuf>, config: &SolverConfig) -> Result<(), String> {
    use std::time::Instant;

    let now = Instant::now();
    let files = report::game_files(&dir);
    log::info!("{} game files in {}", files.len(), dir.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{wide_bar:40.cyan/blue} {human_pos}/{human_len} {msg} ")
            .map_err(|e| e.to_string())?
            .progress_chars("##-"),
    );
    let mut records: Vec<SolveRecord> = Vec::with_capacity(files.len());
    for file in &files {
        records.push(report::solve_file(file, config));
        pb.inc(1);
        let solved = records.iter().filter(|r| r.status == Status::Solved).count();
        pb.set_message(format!("Solved: {solved}"));
    }
    pb.finish();

    let written = match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| format!("{}: {e}", path.display()))?;
            report::write_records(file, &records)
        }
        None => report::write_records(io::stdout().lock(), &records),
    };
    written.map_err(|e| e.to_string())?;

    log::info!("Elapsed: {:.2?}", now.elapsed());
    Ok(())
}

fn random(
    n: (u16, u16),
    seed: Option<u64>,
    range: (f64, f64),
    config: &SolverConfig,
) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = PayoffGame::random(n.0 as usize, n.1 as usize, range.0, range.1, &mut rng)
        .map_err(|e| e.to_string())?;
    solve(&game, config, false)
}

fn run(args: Args) -> Result<(), String> {
    let config = load_config(&args)?;
    match args.command {
        Command::Solve { file, json } => {
            let game = read_game(&file).map_err(|e| format!("{}: {e}", file.display()))?;
            solve(&game, &config, json)
        }
        Command::Batch { dir, output } => batch(dir, output, &config),
        Command::Random {
            n1,
            n2,
            seed,
            low,
            high,
        } => random((n1, n2), seed, (low, high), &config),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
