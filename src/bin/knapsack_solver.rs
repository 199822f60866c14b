use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use knapsack_bb::{log::build_logger_for_verbosity, prelude::*};
use log::{LevelFilter, info};
use structopt::StructOpt;

#[derive(StructOpt, Default)]
pub enum Commands {
    /// Breadth-first branch and bound (default)
    #[default]
    BranchAndBound,

    /// Enumerate all assignments; only feasible for few items
    BruteForce,

    /// Run both solvers and fail if their objectives differ
    CrossCheck,
}

#[derive(StructOpt)]
#[structopt(about = "Exact 0/1 knapsack solver")]
struct Opts {
    /// Instance file in kp format; `-` reads from stdin. Solves a built-in sample if omitted.
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Solution file; defaults to stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Overrides the bound given in the instance
    #[structopt(short, long)]
    bound: Option<i64>,

    /// Write the solution as JSON
    #[structopt(long)]
    json: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,

    #[structopt(subcommand)]
    cmd: Option<Commands>,
}

fn load_instance(path: &Option<PathBuf>) -> anyhow::Result<Instance<i64>> {
    match path {
        None => {
            info!("No instance given; using the built-in sample");
            Ok(Instance::sample())
        }
        Some(path) if path.as_os_str() == "-" => {
            let stdin = std::io::stdin().lock();
            Ok(Instance::try_read_instance(stdin)?)
        }
        Some(path) => Ok(Instance::try_read_instance_file(path)?),
    }
}

fn write_solution(
    solution: &Solution<i64>,
    path: &Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let write = |writer: &mut dyn Write| {
        if json {
            solution.write_json(writer)
        } else {
            solution.write(writer)
        }
    };

    if let Some(path) = path {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()?;
    } else {
        let mut writer = std::io::stdout().lock();
        write(&mut writer)?;
    }

    Ok(())
}

fn solve_with_progress(instance: &Instance<i64>) -> Solution<i64> {
    const REPORT_INTERVAL: usize = 1 << 20;

    let mut algo = BranchAndBound::new(instance.items(), instance.bound());
    algo.run_while(|algo| {
        if algo.number_of_iterations() % REPORT_INTERVAL == 0 {
            info!(
                "Visited {:>10} nodes, {:>10} pending, best value {}",
                algo.number_of_iterations(),
                algo.number_of_pending_nodes(),
                algo.incumbent().best().value()
            );
        }
        true
    });
    algo.solve()
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let mut instance = load_instance(&opts.instance)?;
    if let Some(bound) = opts.bound {
        instance.set_bound(bound);
    }

    info!(
        "Instance with {} items and bound {}",
        instance.number_of_items(),
        instance.bound()
    );

    let solution = match opts.cmd.unwrap_or_default() {
        Commands::BranchAndBound => solve_with_progress(&instance),
        Commands::BruteForce => brute_force(instance.items(), instance.bound()),
        Commands::CrossCheck => {
            let bb = solve_with_progress(&instance);
            let bf = brute_force(instance.items(), instance.bound());
            anyhow::ensure!(
                bb.objective() == bf.objective(),
                "Solvers disagree: branch and bound found {:?}, brute force found {:?}",
                bb.objective(),
                bf.objective()
            );
            info!("Both solvers agree on value {} at cost {}", bb.value(), bb.cost());
            bb
        }
    };

    write_solution(&solution, &opts.output, opts.json)?;

    Ok(())
}
