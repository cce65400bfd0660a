use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::{info, warn};
use wait_timeout::ChildExt;

use crate::error::{Error, Result};
use crate::miner::Algorithm;
use crate::support::check_min_frequency;

/// One timed mining call.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRow {
    pub run: usize,
    pub algorithm: Algorithm,
    pub threshold: f64,
    /// Wall-clock seconds, process start and dataset loading included. NaN
    /// when the call failed or ran past the time limit.
    pub time: f64,
}

/// Times `miner mine` on `dataset` for every threshold, algorithm and run, in
/// that nesting order. Each call is a separate process, killed once it runs
/// longer than `timeout`. A CSV row is written and flushed as soon as each
/// call finishes.
pub fn run_benchmark<W: Write>(
    miner: &Path,
    dataset: &Path,
    thresholds: &[f64],
    algorithms: &[Algorithm],
    runs: usize,
    timeout: Option<Duration>,
    output: W,
) -> Result<Vec<BenchmarkRow>> {
    for &threshold in thresholds {
        check_min_frequency(threshold)?;
    }

    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(&["run", "algorithm", "threshold", "time"])?;
    writer.flush()?;

    let mut rows = vec![];
    for &threshold in thresholds {
        for &algorithm in algorithms {
            for run in 1..=runs {
                let time = match time_mining_call(miner, dataset, threshold, algorithm, timeout)? {
                    Some(seconds) => round_micros(seconds),
                    None => f64::NAN,
                };
                info!(run, %algorithm, threshold, time, "benchmark run");
                let row = BenchmarkRow {
                    run,
                    algorithm,
                    threshold,
                    time,
                };
                writer.write_record(&[
                    row.run.to_string(),
                    row.algorithm.to_string(),
                    row.threshold.to_string(),
                    row.time.to_string(),
                ])?;
                writer.flush()?;
                rows.push(row);
            }
        }
    }
    Ok(rows)
}

// Seconds taken by one child mining process, or None if it failed or timed
// out. Only failing to start the process is an error.
fn time_mining_call(
    miner: &Path,
    dataset: &Path,
    threshold: f64,
    algorithm: Algorithm,
    timeout: Option<Duration>,
) -> Result<Option<f64>> {
    let timer = Instant::now();
    let mut child = Command::new(miner)
        .arg("mine")
        .arg("--input")
        .arg(dataset)
        .arg("--min-frequency")
        .arg(threshold.to_string())
        .arg("--algorithm")
        .arg(algorithm.name())
        .env("RUST_LOG", "off")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| Error::Spawn {
            program: miner.to_path_buf(),
            source,
        })?;

    let status = match timeout {
        Some(limit) => match child.wait_timeout(limit)? {
            Some(status) => status,
            None => {
                // Ignored: the child may have exited since the wait gave up.
                let _ = child.kill();
                child.wait()?;
                warn!(%algorithm, threshold, limit_secs = limit.as_secs_f64(), "mining timed out");
                return Ok(None);
            }
        },
        None => child.wait()?,
    };
    let seconds = timer.elapsed().as_secs_f64();

    if !status.success() {
        warn!(%algorithm, threshold, %status, "mining failed");
        return Ok(None);
    }
    Ok(Some(seconds))
}

fn round_micros(seconds: f64) -> f64 {
    (seconds * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{round_micros, run_benchmark};
    use crate::error::Error;
    use crate::miner::Algorithm;

    #[test]
    fn test_round_micros() {
        assert_eq!(round_micros(1.23456789), 1.234568);
        assert_eq!(round_micros(0.0), 0.0);
    }

    #[test]
    fn test_rejects_invalid_threshold_before_running() {
        let mut csv: Vec<u8> = vec![];
        let result = run_benchmark(
            Path::new("/nonexistent/fim"),
            Path::new("toy.dat"),
            &[0.5, 0.0],
            &Algorithm::ALL,
            1,
            None,
            &mut csv,
        );
        match result {
            Err(Error::InvalidMinFrequency(f)) => assert_eq!(f, 0.0),
            other => panic!("unexpected {:?}", other),
        }
        assert!(csv.is_empty());
    }

    #[test]
    fn test_missing_miner_is_an_error() {
        let mut csv: Vec<u8> = vec![];
        match run_benchmark(
            Path::new("/nonexistent/fim"),
            Path::new("toy.dat"),
            &[0.5],
            &[Algorithm::Eclat],
            1,
            None,
            &mut csv,
        ) {
            Err(Error::Spawn { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
