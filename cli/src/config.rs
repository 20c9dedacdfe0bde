use anyhow::Context;
use clap::{App, Arg, ArgMatches};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub workers: u64,
    pub jobs: u64,
    /// Every n-th job of a worker fails
    pub fail_every: u64,
    pub capacity: usize,
    pub json: bool,
}

pub fn app() -> App<'static, 'static> {
    App::new("errq")
        .about("Runs a pool of failing workers and collects their errors in a bounded queue")
        .arg(
            Arg::with_name("workers")
                .short("w")
                .long("workers")
                .value_name("WORKERS")
                .help("Number of worker threads to run")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("jobs")
                .short("j")
                .long("jobs")
                .value_name("JOBS")
                .help("Number of jobs each worker runs")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fail-every")
                .short("f")
                .long("fail-every")
                .value_name("N")
                .help("Every N-th job fails, 1 makes every job fail")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("capacity")
                .short("c")
                .long("capacity")
                .value_name("CAPACITY")
                .help("Maximum number of errors held in the queue")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print the collected errors as JSON lines"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches<'_>) -> anyhow::Result<Self> {
        let fail_every = parse_or(matches, "fail-every", 1)?;
        if fail_every == 0 {
            anyhow::bail!("--fail-every must be at least 1");
        }
        Ok(Self {
            workers: parse_or(matches, "workers", 4)?,
            jobs: parse_or(matches, "jobs", 100)?,
            fail_every,
            capacity: parse_or(matches, "capacity", 256)?,
            json: matches.is_present("json"),
        })
    }
}

fn parse_or<T>(matches: &ArgMatches<'_>, name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match matches.value_of(name) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid value for --{}: {:?}", name, value)),
        None => Ok(default),
    }
}
