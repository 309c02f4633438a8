// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Command-line front end: solve, score and annotate collections of boards.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use parking_escape::{
    BestFirstSolver, BlockingHeuristic, Board, BoardRecord, BreadthFirstSolver, Heuristic,
    NullHeuristic, SolveResult, Solution, Solver, difficulty, records_from_json,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

type Value = u8;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolverType {
    Bfs,
    Astar,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicType {
    Blocking,
    Null,
}

#[derive(Parser)]
#[command(name = "parking-escape")]
#[command(about = "Solver and difficulty scorer for Rush Hour style escape puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every board of a collection
    Solve {
        /// Path to the collection (a JSON array of board records)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Search strategy
        #[arg(short, long, value_enum, default_value = "astar")]
        solver: SolverType,

        /// Heuristic for the astar solver
        #[arg(short = 'H', long, value_enum, default_value = "blocking")]
        heuristic: HeuristicType,

        /// Maximum number of states to expand before giving up
        #[arg(short = 'n', long)]
        max_nodes: Option<usize>,

        /// Only solve this board (1-indexed)
        #[arg(short, long)]
        index: Option<usize>,

        /// Print the solution move by move
        #[arg(short, long)]
        print_solution: bool,
    },

    /// Print the difficulty score of every board of a collection
    Difficulty {
        /// Path to the collection (a JSON array of board records)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Record the shortest solution length and heuristic estimate of every board
    Annotate {
        /// Path to the collection (a JSON array of board records)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Where to write the annotated collection (stdout if omitted)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Maximum number of states to expand per board
        #[arg(short = 'n', long)]
        max_nodes: Option<usize>,
    },
}

struct BoardStats {
    solved: bool,
    steps: usize,
    states_explored: usize,
    elapsed_ms: u128,
}

fn load_records(path: &Path) -> Result<Vec<BoardRecord<Value>>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records = records_from_json(&json)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!("loaded {} boards from {}", records.len(), path.display());
    Ok(records)
}

fn load_boards(path: &Path) -> Result<Vec<Board<Value>>> {
    load_records(path)?
        .iter()
        .enumerate()
        .map(|(i, record)| {
            Board::from_record(record).with_context(|| format!("board {} is invalid", i + 1))
        })
        .collect()
}

fn print_solution(board: &Board<Value>, solution: &Solution) -> Result<()> {
    println!("\nStarting position:\n{board}");
    let mut board = board.clone();
    let runs = solution.runs();
    let total = runs.len();
    for (count, run) in runs.iter().enumerate() {
        let step = run.step();
        for _ in 0..run.count() {
            board.shift_vehicle(step.identity(), step.direction())?;
        }
        println!(
            "Move vehicle {} {} x{} ({}/{}):\n{}",
            step.identity(),
            step.direction(),
            run.count(),
            count + 1,
            total,
            board
        );
    }
    Ok(())
}

fn solve_board_helper<S: Solver>(
    board: &Board<Value>,
    board_num: usize,
    mut solver: S,
    print: bool,
) -> Result<BoardStats> {
    let start = Instant::now();
    let result = solver.search(board);
    let elapsed_ms = start.elapsed().as_millis();
    let stats = solver.stats();

    let (solved_char, steps, moves) = match &result {
        SolveResult::Solved(solution) => ('Y', solution.steps(), solution.runs().len()),
        SolveResult::Cutoff => ('N', 0, 0),
        SolveResult::Impossible => ('X', 0, 0),
    };

    println!(
        "board: {:<4}  solved: {}  steps: {:<4}  moves: {:<4}  states: {:<10}  elapsed: {} ms",
        board_num, solved_char, steps, moves, stats.nodes_explored, elapsed_ms
    );

    if print {
        if let SolveResult::Solved(solution) = &result {
            print_solution(board, solution)?;
        }
    }

    Ok(BoardStats {
        solved: solved_char == 'Y',
        steps,
        states_explored: stats.nodes_explored,
        elapsed_ms,
    })
}

fn best_first<H: Heuristic>(heuristic: H, max_nodes: Option<usize>) -> BestFirstSolver<H> {
    let solver = BestFirstSolver::with_heuristic(heuristic);
    match max_nodes {
        Some(max) => solver.with_max_nodes(max),
        None => solver,
    }
}

fn breadth_first(max_nodes: Option<usize>) -> BreadthFirstSolver {
    let solver = BreadthFirstSolver::new();
    match max_nodes {
        Some(max) => solver.with_max_nodes(max),
        None => solver,
    }
}

fn solve(
    file: &Path,
    solver: SolverType,
    heuristic: HeuristicType,
    max_nodes: Option<usize>,
    index: Option<usize>,
    print: bool,
) -> Result<()> {
    let boards = load_boards(file)?;
    let selected: Vec<_> = match index {
        Some(0) => bail!("board numbers start at 1"),
        Some(i) if i > boards.len() => bail!(
            "board {} not found ({} contains {} boards)",
            i,
            file.display(),
            boards.len()
        ),
        Some(i) => vec![(i, &boards[i - 1])],
        None => boards.iter().enumerate().map(|(i, b)| (i + 1, b)).collect(),
    };
    if print && selected.len() > 1 {
        bail!("solution printing only supported when solving a single board");
    }

    let mut total_solved = 0;
    let mut total_steps = 0;
    let mut total_states = 0;
    let mut total_time_ms = 0;

    for &(board_num, board) in &selected {
        let stats = match (solver, heuristic) {
            (SolverType::Bfs, _) => {
                solve_board_helper(board, board_num, breadth_first(max_nodes), print)?
            }
            (SolverType::Astar, HeuristicType::Blocking) => solve_board_helper(
                board,
                board_num,
                best_first(BlockingHeuristic, max_nodes),
                print,
            )?,
            (SolverType::Astar, HeuristicType::Null) => solve_board_helper(
                board,
                board_num,
                best_first(NullHeuristic, max_nodes),
                print,
            )?,
        };

        if stats.solved {
            total_solved += 1;
        }
        total_steps += stats.steps;
        total_states += stats.states_explored;
        total_time_ms += stats.elapsed_ms;
    }

    if selected.len() > 1 {
        println!("---");
        println!(
            "solved: {:>4}/{:<4}  steps: {:<6}  states: {:<10}  elapsed: {} ms",
            total_solved,
            selected.len(),
            total_steps,
            total_states,
            total_time_ms
        );
    }
    Ok(())
}

fn score(file: &Path) -> Result<()> {
    for (i, board) in load_boards(file)?.iter().enumerate() {
        match difficulty(board) {
            Some(score) => println!("board: {:<4}  difficulty: {}", i + 1, score),
            None => println!("board: {:<4}  difficulty: -  (no target vehicle)", i + 1),
        }
    }
    Ok(())
}

fn annotate(file: &Path, output: Option<&Path>, max_nodes: Option<usize>) -> Result<()> {
    let mut records = load_records(file)?;
    for (i, record) in records.iter_mut().enumerate() {
        let board =
            Board::from_record(record).with_context(|| format!("board {} is invalid", i + 1))?;
        let mut solver = breadth_first(max_nodes);
        record.min_steps = solver.solve(&board).map(|solution| solution.steps());
        record.heuristic = Some(BlockingHeuristic.estimate(&board));
        info!(
            "board {}: min_steps {:?}, heuristic {:?}",
            i + 1,
            record.min_steps,
            record.heuristic
        );
    }

    let json = serde_json::to_string_pretty(&records)?;
    match output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            solver,
            heuristic,
            max_nodes,
            index,
            print_solution,
        } => solve(&file, solver, heuristic, max_nodes, index, print_solution),
        Commands::Difficulty { file } => score(&file),
        Commands::Annotate {
            file,
            output,
            max_nodes,
        } => annotate(&file, output.as_deref(), max_nodes),
    }
}
