// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::io;
use std::process;
use std::str::FromStr;
use std::time::Duration;

use argparse::{ArgumentParser, Collect, Store, StoreOption};

use fim::Algorithm;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Mine,
    Check,
    Stats,
    Bench,
}

impl FromStr for Command {
    type Err = String;
    fn from_str(s: &str) -> Result<Command, String> {
        match s {
            "mine" => Ok(Command::Mine),
            "check" => Ok(Command::Check),
            "stats" => Ok(Command::Stats),
            "bench" => Ok(Command::Bench),
            _ => Err(format!("unknown command {:?}", s)),
        }
    }
}

pub struct Arguments {
    pub command: Command,
    pub input_file_paths: Vec<String>,
    pub output_path: Option<String>,
    pub expected_path: Option<String>,
    pub min_frequency: Option<f64>,
    pub algorithm: Algorithm,
    pub thresholds: Vec<f64>,
    pub runs: usize,
    pub timeout_secs: f64,
    pub csv_path: Option<String>,
}

impl Arguments {
    fn new() -> Arguments {
        Arguments {
            command: Command::Mine,
            input_file_paths: vec![],
            output_path: None,
            expected_path: None,
            min_frequency: None,
            algorithm: Algorithm::Eclat,
            thresholds: vec![],
            runs: 1,
            timeout_secs: 1000.0,
            csv_path: None,
        }
    }

    pub fn input_file_path(&self) -> &str {
        &self.input_file_paths[0]
    }

    // Checks that the options the command needs were given.
    pub fn validate(&self) -> Result<(), String> {
        match self.command {
            Command::Mine | Command::Check | Command::Bench if self.input_file_paths.len() != 1 => {
                return Err("Exactly one --input file is required".to_owned());
            }
            Command::Stats if self.input_file_paths.is_empty() => {
                return Err("At least one --input file is required".to_owned());
            }
            _ => {}
        }
        match self.command {
            Command::Mine if self.min_frequency.is_none() => {
                Err("--min-frequency is required when mining".to_owned())
            }
            Command::Check if self.expected_path.is_none() => {
                Err("--expected is required when checking".to_owned())
            }
            Command::Bench if self.thresholds.is_empty() => {
                Err("At least one --threshold is required when benchmarking".to_owned())
            }
            Command::Bench if self.runs == 0 => Err("--runs must be at least 1".to_owned()),
            Command::Bench
                if Duration::try_from_secs_f64(self.timeout_secs).map_or(true, |d| d.is_zero()) =>
            {
                Err("--timeout must be a positive number of seconds".to_owned())
            }
            _ => Ok(()),
        }
    }
}

/// Parses `args` (program name first). On failure returns the exit code
/// argparse asks for, after printing its own message.
pub fn parse_args(args: Vec<String>) -> Result<Arguments, i32> {
    let mut arguments = Arguments::new();
    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Frequent itemset mining with Apriori and Eclat.");

        parser.refer(&mut arguments.command).add_argument(
            "command",
            Store,
            "One of mine, check, stats, bench. Defaults to mine.",
        );

        parser
            .refer(&mut arguments.input_file_paths)
            .add_option(
                &["--input"],
                Collect,
                "Dataset of whitespace separated integer items, one transaction \
                 per line. For check, the result listing to verify. May be repeated \
                 for stats.",
            )
            .metavar("file_path");

        parser
            .refer(&mut arguments.min_frequency)
            .add_option(
                &["--min-frequency"],
                StoreOption,
                "Minimum itemset support, in range (0,1].",
            )
            .metavar("threshold");

        parser
            .refer(&mut arguments.algorithm)
            .add_option(
                &["--algorithm"],
                Store,
                "One of eclat, apriori, apriori-no-pruning. Defaults to eclat.",
            )
            .metavar("name");

        parser
            .refer(&mut arguments.output_path)
            .add_option(
                &["--output"],
                StoreOption,
                "File in which to store the itemsets. Defaults to stdout. \
                 Format: [item, item, ...] (support).",
            )
            .metavar("file_path");

        parser
            .refer(&mut arguments.expected_path)
            .add_option(
                &["--expected"],
                StoreOption,
                "Reference result listing to check --input against.",
            )
            .metavar("file_path");

        parser
            .refer(&mut arguments.thresholds)
            .add_option(
                &["--threshold"],
                Collect,
                "Minimum frequency to benchmark. May be repeated.",
            )
            .metavar("threshold");

        parser
            .refer(&mut arguments.runs)
            .add_option(&["--runs"], Store, "Runs per algorithm and threshold.")
            .metavar("count");

        parser
            .refer(&mut arguments.timeout_secs)
            .add_option(
                &["--timeout"],
                Store,
                "Seconds before a benchmarked mining call is killed and \
                 recorded as NaN. Defaults to 1000.",
            )
            .metavar("seconds");

        parser
            .refer(&mut arguments.csv_path)
            .add_option(
                &["--csv"],
                StoreOption,
                "File for stats or bench CSV rows. Defaults to stdout.",
            )
            .metavar("file_path");

        if args.len() == 1 {
            parser
                .print_help("Usage:", &mut io::stderr())
                .map_err(|_| 1)?;
            return Err(1);
        }

        parser.parse(args, &mut io::stdout(), &mut io::stderr())?;
    }
    Ok(arguments)
}

pub fn parse_args_or_exit() -> Arguments {
    let arguments = match parse_args(env::args().collect()) {
        Ok(arguments) => arguments,
        Err(code) => process::exit(code),
    };
    if let Err(message) = arguments.validate() {
        eprintln!("{}", message);
        process::exit(1);
    }
    arguments
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Command};
    use fim::Algorithm;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mine_arguments() {
        let arguments = parse_args(args(&[
            "fim",
            "--input",
            "toy.dat",
            "--min-frequency",
            "0.25",
            "--algorithm",
            "apriori",
        ]))
        .unwrap();
        assert_eq!(arguments.command, Command::Mine);
        assert_eq!(arguments.input_file_path(), "toy.dat");
        assert_eq!(arguments.min_frequency, Some(0.25));
        assert_eq!(arguments.algorithm, Algorithm::Apriori);
        assert!(arguments.validate().is_ok());
    }

    #[test]
    fn test_bench_arguments() {
        let arguments = parse_args(args(&[
            "fim",
            "bench",
            "--input",
            "toy.dat",
            "--threshold",
            "0.9",
            "--threshold",
            "0.5",
            "--runs",
            "3",
            "--timeout",
            "2.5",
        ]))
        .unwrap();
        assert_eq!(arguments.command, Command::Bench);
        assert_eq!(arguments.thresholds, vec![0.9, 0.5]);
        assert_eq!(arguments.runs, 3);
        assert_eq!(arguments.timeout_secs, 2.5);
        assert!(arguments.validate().is_ok());

        let no_time = parse_args(args(&[
            "fim", "bench", "--input", "toy.dat", "--threshold", "0.5", "--timeout", "0",
        ]))
        .unwrap();
        assert!(no_time.validate().is_err());
    }

    #[test]
    fn test_validate() {
        let missing_frequency = parse_args(args(&["fim", "mine", "--input", "a.dat"])).unwrap();
        assert!(missing_frequency.validate().is_err());

        let missing_expected = parse_args(args(&["fim", "check", "--input", "out.txt"])).unwrap();
        assert!(missing_expected.validate().is_err());

        let stats =
            parse_args(args(&["fim", "stats", "--input", "a.dat", "--input", "b.dat"])).unwrap();
        assert_eq!(stats.command, Command::Stats);
        assert_eq!(stats.input_file_paths.len(), 2);
        assert!(stats.validate().is_ok());
    }
}
