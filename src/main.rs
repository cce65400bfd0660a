mod command_line_args;

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use command_line_args::{parse_args_or_exit, Arguments, Command};
use fim::benchmark::run_benchmark;
use fim::checker::compare_files;
use fim::format::write_results;
use fim::stats::{summarize_all, write_csv};
use fim::{mine, Algorithm, Error};

// Logs go to stderr; stdout is reserved for results.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn open_output(path: &Option<String>) -> Result<Box<dyn Write>, Error> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|err| Error::Open {
                path: PathBuf::from(path),
                source: err,
            })?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

fn mine_itemsets(args: &Arguments) -> Result<bool, Error> {
    let min_frequency = args.min_frequency.unwrap_or_default();
    let itemsets = mine(args.input_file_path(), min_frequency, args.algorithm)?;
    let mut output = open_output(&args.output_path)?;
    write_results(&mut output, &itemsets)?;
    output.flush()?;
    Ok(true)
}

fn check_results(args: &Arguments) -> Result<bool, Error> {
    let expected = args.expected_path.as_deref().unwrap_or_default();
    let comparison = compare_files(expected, args.input_file_path())?;
    let stdout = io::stdout();
    comparison.report(&mut stdout.lock())?;
    Ok(comparison.is_match())
}

fn dataset_stats(args: &Arguments) -> Result<bool, Error> {
    let paths: Vec<PathBuf> = args.input_file_paths.iter().map(PathBuf::from).collect();
    let summaries = summarize_all(&paths)?;
    write_csv(open_output(&args.csv_path)?, &summaries)?;
    Ok(true)
}

fn benchmark(args: &Arguments) -> Result<bool, Error> {
    // Each benchmarked call re-runs this executable in mine mode.
    let miner = env::current_exe()?;
    run_benchmark(
        &miner,
        Path::new(args.input_file_path()),
        &args.thresholds,
        &Algorithm::ALL,
        args.runs,
        Some(Duration::from_secs_f64(args.timeout_secs)),
        open_output(&args.csv_path)?,
    )?;
    Ok(true)
}

fn run(args: &Arguments) -> Result<bool, Error> {
    match args.command {
        Command::Mine => mine_itemsets(args),
        Command::Check => check_results(args),
        Command::Stats => dataset_stats(args),
        Command::Bench => benchmark(args),
    }
}

fn main() {
    init_logging();
    let arguments = parse_args_or_exit();

    match run(&arguments) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
