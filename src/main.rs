//! boost command-line interface
//!
//! Thin front end over the library: unique sampling, lazy tree walks and
//! identifier generation, one value per output line.

use std::path::PathBuf;
use std::process;

use boost::codec::unique_ids;
use boost::file::filters::regex_filter;
use boost::{BoostConfig, Logger, RandomHelper, Result, WalkBuilder};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rand::Rng;
use tracing::{debug, error, info};

fn main() {
    let matches = build_cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| config.logging.level.clone());
    let mut logger = Logger::with_level(&level);
    logger.init();

    if let Err(e) = run(&matches, &config) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("boost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Unique sampling, lazy directory walks and identifiers")
        .subcommand_required(true)
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .global(true)
            .value_parser(value_parser!(PathBuf))
            .help("JSON or YAML configuration file"))
        .arg(Arg::new("log-level")
            .long("log-level")
            .value_name("LEVEL")
            .global(true)
            .value_parser(["trace", "debug", "info", "warn", "error"])
            .help("Logging verbosity (RUST_LOG overrides)"))

        .subcommand(Command::new("sample")
            .about("Print distinct random integers from [0, bound)")
            .arg(Arg::new("bound")
                .long("bound")
                .required(true)
                .value_parser(value_parser!(usize)))
            .arg(Arg::new("size")
                .long("size")
                .required(true)
                .value_parser(value_parser!(usize)))
            .arg(Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Fixed seed for reproducible output")))

        .subcommand(Command::new("walk")
            .about("Lazily list a directory tree in pre-order")
            .arg(Arg::new("root")
                .required(true)
                .value_parser(value_parser!(PathBuf)))
            .arg(Arg::new("dirs")
                .long("dirs")
                .action(ArgAction::SetTrue)
                .help("Also print directories before their contents"))
            .arg(Arg::new("ext")
                .long("ext")
                .value_name("EXT")
                .action(ArgAction::Append)
                .help("Only files with this extension (repeatable)"))
            .arg(Arg::new("pattern")
                .long("pattern")
                .value_name("REGEX")
                .help("Only files whose name matches"))
            .arg(Arg::new("no-recurse")
                .long("no-recurse")
                .action(ArgAction::SetTrue)
                .help("Stay at the top level"))
            .arg(Arg::new("skip-hidden")
                .long("skip-hidden")
                .action(ArgAction::SetTrue)
                .help("Ignore dot-entries")))

        .subcommand(Command::new("uuid")
            .about("Print a random identifier")
            .arg(Arg::new("format")
                .long("format")
                .value_parser(["36", "32", "26", "22"])
                .default_value("36")))
}

fn load_config(matches: &ArgMatches) -> Result<BoostConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => BoostConfig::load(path),
        None => Ok(BoostConfig::default()),
    }
}

fn run(matches: &ArgMatches, config: &BoostConfig) -> Result<()> {
    match matches.subcommand() {
        Some(("sample", sub)) => run_sample(sub, config),
        Some(("walk", sub)) => run_walk(sub, config),
        Some(("uuid", sub)) => {
            let id = match sub.get_one::<String>("format").map(String::as_str) {
                Some("32") => unique_ids::uuid_32(),
                Some("26") => unique_ids::uuid_26(),
                Some("22") => unique_ids::uuid_22(),
                _ => unique_ids::uuid(),
            };
            println!("{}", id);
            Ok(())
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn run_sample(matches: &ArgMatches, config: &BoostConfig) -> Result<()> {
    let bound = *matches.get_one::<usize>("bound").unwrap_or(&0);
    let size = *matches.get_one::<usize>("size").unwrap_or(&0);
    info!(bound, size, "sampling unique integers");

    match matches.get_one::<u64>("seed") {
        Some(seed) => print_sample(RandomHelper::seeded(*seed), bound, size),
        None => print_sample(RandomHelper::from_config(&config.random)?, bound, size),
    }
}

fn print_sample<R: Rng>(mut helper: RandomHelper<R>, bound: usize, size: usize) -> Result<()> {
    for value in helper.next_unique_ints(bound, size)? {
        println!("{}", value);
    }
    Ok(())
}

fn run_walk(matches: &ArgMatches, config: &BoostConfig) -> Result<()> {
    let mut walk = config.walk.clone();
    if matches.get_flag("dirs") {
        walk.include_directories = true;
    }
    if matches.get_flag("no-recurse") {
        walk.recurse = false;
    }
    if matches.get_flag("skip-hidden") {
        walk.skip_hidden = true;
    }
    if let Some(exts) = matches.get_many::<String>("ext") {
        walk.extensions = exts.cloned().collect();
    }

    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(?walk, root = %root.display(), "walk settings");

    let mut builder = WalkBuilder::from_config(root.clone(), &walk);
    if let Some(pattern) = matches.get_one::<String>("pattern") {
        builder = builder.and_file_filter(regex_filter(pattern)?);
    }

    let mut count = 0usize;
    for path in builder.build()? {
        println!("{}", path.display());
        count += 1;
    }
    info!(count, "walk finished");
    Ok(())
}
