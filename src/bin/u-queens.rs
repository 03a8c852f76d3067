use anyhow::{anyhow, Result};
use clap::{arg, value_parser, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_queens::beam::BeamRunner;
use u_queens::board::{conflicting_rows, Board};
use u_queens::compare::{CompareRunner, ComparisonReport};
use u_queens::config::QueensConfig;
use u_queens::hill::HillRunner;
use u_queens::observer::{Algorithm, SearchObserver, Snapshot};
use u_queens::sa::SaRunner;

fn cli() -> Command {
    Command::new("u-queens")
        .about("Solves N-Queens with local search and compares the heuristics")
        .arg_required_else_help(true)
        .arg(
            arg!(--config <PATH> "Path to a TOML configuration file")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            arg!(--size <N> "Board size, overriding the configuration")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            arg!(--seed <SEED> "Random seed, overriding the configuration")
                .value_parser(value_parser!(u64))
                .global(true),
        )
        .subcommand(
            Command::new("solve")
                .about("Runs each named algorithm once and prints the final board")
                .arg(
                    arg!(<ALGORITHM>... "hill, anneal or beam")
                        .value_parser(value_parser!(String)),
                )
                .arg(arg!(--"show-steps" "Print the board after every accepted move")),
        )
        .subcommand(
            Command::new("compare")
                .about("Runs repeated trials of every algorithm and prints a summary")
                .arg(
                    arg!(--trials <N> "Trials per algorithm")
                        .value_parser(value_parser!(usize)),
                )
                .arg(arg!(--parallel "Run trials on all cores")),
        )
}

fn main() {
    if let Err(e) = init_logging().and_then(|_| run(cli().get_matches())) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive("u_queens=warn".parse()?)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn run(matches: ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("solve", sub_m)) => {
            let config = load_config(sub_m)?;
            let algorithms = sub_m
                .get_many::<String>("ALGORITHM")
                .into_iter()
                .flatten()
                .map(|s| s.parse::<Algorithm>())
                .collect::<Result<Vec<_>, _>>()?;
            solve(&config, &algorithms, sub_m.get_flag("show-steps"))
        }
        Some(("compare", sub_m)) => {
            let mut config = load_config(sub_m)?;
            if let Some(&n) = sub_m.get_one::<usize>("trials") {
                config.num_comparison_trials = n;
            }
            if sub_m.get_flag("parallel") {
                config.parallel = true;
            }
            config.validate()?;
            compare(&config)
        }
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

fn load_config(matches: &ArgMatches) -> Result<QueensConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => QueensConfig::load(path)?,
        None => QueensConfig::default(),
    };
    if let Some(&n) = matches.get_one::<usize>("size") {
        config.board_size = n;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

/// Prints search progress to stdout.
struct TextObserver {
    show_steps: bool,
}

impl SearchObserver for TextObserver {
    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        if !self.show_steps {
            return;
        }
        match snapshot.row {
            Some(row) => println!(
                "{}: moved row {}, conflicts {}",
                snapshot.algorithm, row, snapshot.cost
            ),
            None => println!("{}: start, conflicts {}", snapshot.algorithm, snapshot.cost),
        }
        println!("{}", snapshot.board);
    }

    fn on_trial_progress(&mut self, algorithm: Algorithm, trial: usize, total: usize) {
        println!("Testing {}: {}/{}", algorithm, trial, total);
    }

    fn on_comparison_complete(&mut self, report: &ComparisonReport) {
        println!();
        println!("Algorithm Comparison Results");
        print!("{}", report);
    }
}

fn solve(config: &QueensConfig, algorithms: &[Algorithm], show_steps: bool) -> Result<()> {
    let mut observer = TextObserver { show_steps };
    let mut history = Vec::with_capacity(algorithms.len());

    for &algorithm in algorithms {
        let (board, cost) = match algorithm {
            Algorithm::HillClimbing => {
                let r = HillRunner::run_with_observer(&config.hill(), &mut observer, None)?;
                (r.board, r.cost)
            }
            Algorithm::SimulatedAnnealing => {
                let r = SaRunner::run_with_observer(&config.annealing(), &mut observer, None)?;
                (r.board, r.cost)
            }
            Algorithm::LocalBeamSearch => {
                let r = BeamRunner::run_with_observer(&config.beam(), &mut observer, None)?;
                (r.board, r.cost)
            }
        };
        print_final_board(algorithm, &board, cost);
        history.push((algorithm, cost));
    }

    if history.len() > 1 {
        println!("Runs:");
        for (algorithm, cost) in &history {
            println!("  {}: {} conflicts", algorithm, cost);
        }
    }
    Ok(())
}

fn print_final_board(algorithm: Algorithm, board: &Board, cost: usize) {
    println!("Final Board - {}", algorithm);
    print!("{}", board);
    if cost == 0 {
        println!("SOLVED! - Conflicts: 0");
    } else {
        println!("Not Solved - Conflicts: {}", cost);
        println!("Attacked queens in rows: {:?}", conflicting_rows(board));
    }
    println!();
}

fn compare(config: &QueensConfig) -> Result<()> {
    println!("Running comparison...");
    let mut observer = TextObserver { show_steps: false };
    CompareRunner::run_with_observer(&config.compare(), &mut observer, None)?;
    Ok(())
}
