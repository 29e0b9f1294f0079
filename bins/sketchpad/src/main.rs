use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;

use quantum::{evolve::run_circuit, BasisState, StateVector};
use rng::{EntropyRng, OndRng, RandomSource};
use sandbox::{
    builtin_levels, frequencies, load_levels, output::write_counts_csv, sample_counts, Game,
    GameStatus, Level, Result, Session,
};
use tracing_subscriber::EnvFilter;

/// Two-qubit sketchpad: free simulator, puzzle levels, shot sampling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// free | puzzle | shots
    #[arg(long, value_enum, default_value_t = Mode::Free)]
    mode: Mode,

    /// Comma-separated gate sequence (H0, H1, X0, X1, CNOT)
    #[arg(long, value_delimiter = ',', default_value = "H0,CNOT")]
    gates: Vec<String>,

    /// Measure after the circuit (free mode)
    #[arg(long)]
    measure: bool,

    /// RNG seed; omit for OS entropy
    #[arg(long)]
    seed: Option<String>,

    /// Number of shots (shots mode)
    #[arg(long, default_value_t = 1000)]
    shots: usize,

    /// Independent RNG batches for parallel sampling
    #[arg(long, default_value_t = 16)]
    batches: usize,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// JSON level pack (puzzle mode); built-in levels otherwise
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Level index to play (puzzle mode)
    #[arg(long, default_value_t = 0)]
    level: usize,

    /// List levels and exit
    #[arg(long)]
    list_levels: bool,

    /// Output CSV path (shots mode)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Free,
    Puzzle,
    Shots,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.threads > 0 {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
        {
            eprintln!("ERROR: failed to build Rayon thread pool: {}", err);
            process::exit(1);
        }
    }

    if let Err(err) = run(&args) {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    if args.list_levels {
        list_levels(&level_pack(args.levels.as_deref())?);
        return Ok(());
    }

    match args.mode {
        Mode::Free => run_free(args),
        Mode::Puzzle => run_puzzle(args, level_pack(args.levels.as_deref())?),
        Mode::Shots => run_shots(args),
    }
}

/// Only puzzle mode and `--list-levels` read the pack.
fn level_pack(path: Option<&Path>) -> Result<Vec<Level>> {
    match path {
        Some(path) => load_levels(path),
        None => Ok(builtin_levels()),
    }
}

fn random_source(seed: Option<&str>) -> Box<dyn RandomSource> {
    match seed {
        Some(s) => Box::new(OndRng::new(s.as_bytes())),
        None => Box::new(EntropyRng::new()),
    }
}

fn run_free(args: &Args) -> Result<()> {
    let mut session = Session::new();
    for g in &args.gates {
        session.apply(g)?;
    }

    println!("Circuit: {}", circuit_label(session.history().circuit()));
    for (i, psi) in session.history().states().iter().enumerate() {
        println!("  step {:>2}: {}", i, psi);
    }

    if args.measure {
        let mut rng = random_source(args.seed.as_deref());
        let outcome = session.measure(rng.as_mut())?;
        println!("Measurement collapse: {}", outcome);
    }

    print_chart(session.current(), None);
    Ok(())
}

fn run_puzzle(args: &Args, levels: Vec<Level>) -> Result<()> {
    let mut game = Game::new(levels)?;
    game.select_level(args.level)?;

    let level = game.level().clone();
    println!("Level {}/{}: {}", game.level_index() + 1, game.level_count(), level.name);
    if !level.description.is_empty() {
        println!("  {}", level.description);
    }

    for g in &args.gates {
        let status = game.apply(g)?;
        println!(
            "  {:<5} -> {}  (moves {}/{})",
            g,
            game.current(),
            game.moves(),
            level.max_moves
        );
        if status != GameStatus::Playing {
            break;
        }
    }

    print_chart(game.current(), Some(&level.target));
    match game.status() {
        GameStatus::Won => println!("Status: PUZZLE SOLVED!"),
        GameStatus::Lost => println!("Status: FAILED (too many moves)"),
        GameStatus::Playing => println!("Status: playing, {} moves left", game.moves_left()),
    }
    Ok(())
}

fn run_shots(args: &Args) -> Result<()> {
    let history = run_circuit(args.gates.as_slice())?;
    let psi = history[history.len() - 1];
    let seed = match &args.seed {
        Some(s) => s.clone(),
        None => hex_seed(&mut EntropyRng::new()),
    };

    let counts = sample_counts(&psi, args.shots, &seed, args.batches);
    let freqs = frequencies(&counts);
    let probs = psi.probabilities();

    println!("State: {}  (shots = {}, seed = {})", psi, args.shots, seed);
    for b in BasisState::ALL {
        let i = b.index();
        println!(
            "  {}  amp = {:+.4}  count = {:>7}  freq = {:.4}  p = {:.4}",
            b, psi[b], counts[i], freqs[i], probs[i]
        );
    }

    if let Some(path) = &args.out {
        write_counts_csv(path, &counts)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn list_levels(levels: &[Level]) {
    for (i, l) in levels.iter().enumerate() {
        println!("{:>2}. {:<28} target = {}  max moves = {}", i, l.name, l.target, l.max_moves);
    }
}

fn circuit_label(circuit: &[&str]) -> String {
    if circuit.is_empty() {
        "(empty)".to_string()
    } else {
        circuit.join(" -> ")
    }
}

fn print_chart(psi: &StateVector, target: Option<&StateVector>) {
    const WIDTH: f64 = 40.0;
    let probs = psi.probabilities();
    let target_probs = target.map(|t| t.probabilities());
    for b in BasisState::ALL {
        let p = probs[b.index()];
        let bar = "#".repeat((p * WIDTH).round() as usize);
        let mark = match target_probs {
            Some(tp) if tp[b.index()] > 1e-9 => " *",
            _ => "",
        };
        println!("  {} {:>4.0}% |{}{}", b, p * 100.0, bar, mark);
    }
}

fn hex_seed<R: RandomSource>(rng: &mut R) -> String {
    let x = (rng.next_unit() * (1u64 << 53) as f64) as u64;
    format!("{:014x}", x)
}
