use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use mazegraph::graph::generators::chain_graph;
use mazegraph::{
    connected_components, critical_path, dijkstra, generate, kruskal, maze_to_graph, prim, resolve,
    with_solution, GenerationMethod, MazeConfig, MazeGrid, MazeStats, SolveAlgorithm,
    WeightedGraph,
};

#[derive(Parser)]
#[command(name = "mazegraph")]
#[command(about = "Generate, solve and analyze grid mazes", long_about = None)]
struct Cli {
    /// Log algorithm steps (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RngArgs {
    /// Seed for the random generator (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl RngArgs {
    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a maze and print or save it
    Generate {
        /// Method name or selector 1..=7
        #[arg(short, long, default_value = "backtracker")]
        method: GenerationMethod,

        /// JSON config file (rows, columns, probabilities)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Grid rows, overrides the config
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns, overrides the config
        #[arg(long)]
        columns: Option<usize>,

        /// Maze name
        #[arg(long)]
        name: Option<String>,

        /// Write the maze to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use JSON instead of the text format for --output
        #[arg(long, default_value_t = false)]
        json: bool,

        #[command(flatten)]
        rng: RngArgs,
    },
    /// Solve a saved maze
    Solve {
        /// Maze file in the text format
        path: PathBuf,

        /// `dijkstra` or `bfs`
        #[arg(short, long, default_value = "dijkstra")]
        algorithm: SolveAlgorithm,

        /// Store the updated solution flags back into the file
        #[arg(long, default_value_t = false)]
        write: bool,
    },
    /// Print statistics for a saved maze
    Analyze {
        /// Maze file in the text format
        path: PathBuf,

        /// Also compute the longest shortest path between any two cells
        #[arg(long, default_value_t = false)]
        critical_path: bool,
    },
    /// Run every generator and a small graph walkthrough
    Demo {
        #[command(flatten)]
        rng: RngArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            method,
            config,
            rows,
            columns,
            name,
            output,
            json,
            rng,
        } => {
            let mut config = match config {
                Some(path) => MazeConfig::from_json_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => MazeConfig::default(),
            };
            config.rows = rows.unwrap_or(config.rows);
            config.columns = columns.unwrap_or(config.columns);

            let mut maze = generate(method, &config, &mut rng.rng()).context("Invalid maze configuration")?;
            if let Some(name) = name {
                maze.name = name;
            }

            println!("{maze:#}");
            print_solution_summary(&maze);

            if let Some(path) = output {
                if json {
                    let text = maze.to_json()?;
                    std::fs::write(&path, text)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                } else {
                    maze.save(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                }
                println!("saved to {}", path.display());
            }
        }
        Commands::Solve {
            path,
            algorithm,
            write,
        } => {
            let mut maze = load(&path)?;
            match resolve(&mut maze, algorithm) {
                Some(solution) => {
                    println!("{:#}", with_solution(&maze, &solution));
                    println!("{algorithm}: {} steps", solution.steps);
                }
                None => {
                    println!("{maze:#}");
                    println!("{algorithm}: no path from entry to exit");
                }
            }
            if write {
                maze.save(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        Commands::Analyze {
            path,
            critical_path: with_critical_path,
        } => {
            let maze = load(&path)?;
            println!("{}", if maze.name.is_empty() { "(unnamed)" } else { maze.name.as_str() });
            println!("{}", MazeStats::of(&maze));

            let graph = maze_to_graph(&maze);
            let components = connected_components(&graph);
            let walls = maze.cell_count() - maze.open_count();
            println!(
                "open regions: {}",
                components.count().saturating_sub(walls)
            );
            if with_critical_path {
                match critical_path(&graph) {
                    Some(cp) => println!(
                        "critical path: {:?} -> {:?} ({} steps)",
                        maze.coord_of(cp.from),
                        maze.coord_of(cp.to),
                        cp.distance
                    ),
                    None => println!("critical path: none"),
                }
            }
        }
        Commands::Demo { rng } => demo(&mut rng.rng())?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "mazegraph=debug",
        _ => "mazegraph=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> Result<MazeGrid> {
    MazeGrid::load(path).with_context(|| format!("Failed to load maze {}", path.display()))
}

fn print_solution_summary(maze: &MazeGrid) {
    if maze.has_solution {
        println!("{}: solvable in {} steps", maze.name, maze.solution_steps);
    } else {
        println!("{}: no solution", maze.name);
    }
}

fn demo(rng: &mut StdRng) -> Result<()> {
    println!("== graph walkthrough ==");
    let graph = chain_graph(10, rng);
    println!("{graph}");
    let route = dijkstra(&graph, 0, 9);
    println!(
        "dijkstra 0 -> 9: distance {:?}, path {:?}",
        route.distance,
        route.path()
    );
    println!(
        "prim total {} / kruskal total {} over {} edges",
        prim(&graph).total_weight,
        kruskal(&graph).total_weight,
        graph.edge_count()
    );

    println!("\n== generators ==");
    let config = MazeConfig::default();
    for method in GenerationMethod::ALL {
        let maze = generate(method, &config, rng)?;
        println!("[{}] {method}", method.selector());
        println!("{maze:#}");
        println!("{}\n", MazeStats::of(&maze));
    }
    Ok(())
}
