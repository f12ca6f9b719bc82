//! `u-cpusched` command-line front end.
//!
//! ```text
//! u-cpusched run <request.json> [--discipline fcfs|sjf|priority|rr] [--quantum N] [--json] [--verbose]
//! u-cpusched compare <request.json> [--quantum N] [--verbose]
//! u-cpusched generate [--count N] [--seed S] [--max-burst B] [--max-arrival A]
//! ```

use std::fmt;
use std::fs;
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};

use u_cpusched::disciplines::Discipline;
use u_cpusched::generator::BatchGenerator;
use u_cpusched::report::{ComparisonReport, Report};
use u_cpusched::scheduler::{ScheduleError, ScheduleRequest, Scheduler};

const USAGE: &str = "\
usage:
  u-cpusched run <request.json> [--discipline fcfs|sjf|priority|rr] [--quantum N] [--json] [--verbose]
  u-cpusched compare <request.json> [--quantum N] [--verbose]
  u-cpusched generate [--count N] [--seed S] [--max-burst B] [--max-arrival A]";

const DEFAULT_QUANTUM: i64 = 4;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

#[derive(Debug)]
enum CliError {
    Usage(String),
    Io { path: String, source: std::io::Error },
    Json(serde_json::Error),
    Schedule(ScheduleError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
            CliError::Io { path, source } => write!(f, "cannot read {path}: {source}"),
            CliError::Json(e) => write!(f, "malformed request: {e}"),
            CliError::Schedule(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage(_) => None,
            CliError::Io { source, .. } => Some(source),
            CliError::Json(e) => Some(e),
            CliError::Schedule(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<ScheduleError> for CliError {
    fn from(e: ScheduleError) -> Self {
        CliError::Schedule(e)
    }
}

#[derive(Debug, Default)]
struct Options {
    command: String,
    path: Option<String>,
    discipline: Option<String>,
    quantum: Option<i64>,
    json: bool,
    verbose: bool,
    count: Option<usize>,
    seed: Option<u64>,
    max_burst: Option<i64>,
    max_arrival: Option<i64>,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut args = args.into_iter();
        let mut opts = Options {
            command: args
                .next()
                .ok_or_else(|| CliError::Usage("missing command".into()))?,
            ..Options::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => opts.json = true,
                "-v" | "--verbose" => opts.verbose = true,
                "--discipline" => opts.discipline = Some(value(&arg, args.next())?),
                "--quantum" => opts.quantum = Some(number(&arg, args.next())?),
                "--count" => opts.count = Some(number(&arg, args.next())?),
                "--seed" => opts.seed = Some(number(&arg, args.next())?),
                "--max-burst" => opts.max_burst = Some(number(&arg, args.next())?),
                "--max-arrival" => opts.max_arrival = Some(number(&arg, args.next())?),
                flag if flag.starts_with('-') => {
                    return Err(CliError::Usage(format!("unknown option {flag}")))
                }
                _ if opts.path.is_none() => opts.path = Some(arg.clone()),
                _ => return Err(CliError::Usage(format!("unexpected argument {arg}"))),
            }
        }

        Ok(opts)
    }

    fn request(&self) -> Result<ScheduleRequest, CliError> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| CliError::Usage(format!("{} needs a request file", self.command)))?;
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Discipline from `--discipline`/`--quantum`, falling back to the file's.
    ///
    /// `--quantum` is a usage error unless the result is Round-Robin.
    fn discipline(&self, from_file: Discipline) -> Result<Discipline, CliError> {
        let file_quantum = match from_file {
            Discipline::RoundRobin { quantum } => Some(quantum),
            _ => None,
        };
        let quantum = self.quantum.or(file_quantum).unwrap_or(DEFAULT_QUANTUM);

        let discipline = match self.discipline.as_deref() {
            None if file_quantum.is_some() => Discipline::RoundRobin { quantum },
            None => from_file,
            Some("fcfs") => Discipline::Fcfs,
            Some("sjf") => Discipline::Sjf,
            Some("priority") => Discipline::Priority,
            Some("rr" | "round_robin") => Discipline::RoundRobin { quantum },
            Some(other) => return Err(CliError::Usage(format!("unknown discipline {other}"))),
        };

        if self.quantum.is_some() && !matches!(discipline, Discipline::RoundRobin { .. }) {
            return Err(CliError::Usage(format!(
                "--quantum only applies to round-robin, not {}",
                discipline.name()
            )));
        }
        Ok(discipline)
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, CliError> {
    next.ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, CliError> {
    let raw = value(flag, next)?;
    raw.parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a number, got {raw}")))
}

fn run(opts: &Options) -> Result<(), CliError> {
    match opts.command.as_str() {
        "run" => {
            let request = opts.request()?;
            let discipline = opts.discipline(request.discipline)?;
            let result = Scheduler::new().schedule(&request.processes, discipline)?;
            if opts.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", Report::new(&result));
            }
        }
        "compare" => {
            let request = opts.request()?;
            let file_quantum = match request.discipline {
                Discipline::RoundRobin { quantum } => Some(quantum),
                _ => None,
            };
            let quantum = opts.quantum.or(file_quantum).unwrap_or(DEFAULT_QUANTUM);
            let results = Scheduler::new().compare(&request.processes, quantum)?;
            print!("{}", ComparisonReport::new(&results));
        }
        "generate" => {
            let generator = BatchGenerator::new(opts.count.unwrap_or(5))
                .with_burst_range(1, opts.max_burst.unwrap_or(10))
                .with_arrival_range(0, opts.max_arrival.unwrap_or(0));
            let processes = generator.generate_seeded(opts.seed.unwrap_or(0));
            let discipline = opts.discipline(Discipline::default())?;
            let request = ScheduleRequest::new(processes).with_discipline(discipline);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        other => return Err(CliError::Usage(format!("unknown command {other}"))),
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if opts.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CliError::Usage(_)) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
