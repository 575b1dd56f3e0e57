use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use torus_solver::{solve, Board, Heuristic, SearchLimits};

const USAGE: &str = "usage: torus-solver <board-file> [--heuristic h1|h2|h3] [--max-nodes N]";

struct Options {
    board_path: String,
    heuristic: Heuristic,
    limits: SearchLimits,
}

fn parse_args() -> Result<Options> {
    let mut board_path = None;
    let mut heuristic = Heuristic::default();
    let mut limits = SearchLimits::unbounded();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--heuristic" {
            let value = args.next().context(USAGE)?;
            heuristic = match value.as_str() {
                "h1" => Heuristic::MisplacedQuarter,
                "h2" => Heuristic::ManhattanQuarter,
                "h3" => Heuristic::AxisMax,
                other => bail!("unknown heuristic {other:?} (expected h1, h2, or h3)"),
            };
        } else if arg == "--max-nodes" {
            let value = args.next().context(USAGE)?;
            let limit = value
                .parse()
                .with_context(|| format!("bad --max-nodes value {value:?}"))?;
            limits = SearchLimits::max_expanded(limit);
        } else if board_path.is_none() {
            board_path = Some(arg);
        } else {
            bail!("unexpected argument {arg:?}\n{USAGE}");
        }
    }

    Ok(Options {
        board_path: board_path.context(USAGE)?,
        heuristic,
        limits,
    })
}

fn run() -> Result<()> {
    let opts = parse_args()?;

    let text = fs::read_to_string(&opts.board_path)
        .with_context(|| format!("couldn't read board file {:?}", opts.board_path))?;
    let board: Board = text
        .parse()
        .with_context(|| format!("couldn't parse start state file {:?}", opts.board_path))?;

    println!("Start state:");
    print!("{board}");
    println!("Solving...");

    let started = Instant::now();
    let solution = solve(board, opts.heuristic, opts.limits)?;
    let elapsed = started.elapsed();

    println!(
        "Solution found in {} moves ({} nodes expanded, {:.3}s):",
        solution.moves.len(),
        solution.stats.expanded,
        elapsed.as_secs_f64()
    );
    println!("{}", solution.route());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
