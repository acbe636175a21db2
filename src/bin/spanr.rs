//! `spanr` command line.
//!
//! `spanr run <FILE>` solves every graph of a batch file.
//! `spanr generate` writes a random batch to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use rand::SeedableRng;
use rand::rngs::StdRng;

use spanr::batch::{
    GeneratorOptions, OutputFormat, SpanrConfig, generate_batch, read_batch, render_batch,
    render_json, render_text, run_batch,
};
use spanr::batch::config::DEFAULT_CONFIG_FILE;
use spanr::graph::MSTMethod;

fn make_parser() -> Command {
    let run = Command::new("run")
        .about("Compute spanning forests and redundant edges for a batch file")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Batch file: blocks of `n k` followed by `src dest weight` lines")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Engine to run; repeat for several")
                .action(ArgAction::Append)
                .value_parser(["kruskal", "prim", "prim-forest", "exhaustive"]),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Report format")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .help("Solve independent graphs in parallel")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("min-weight")
                .long("min-weight")
                .help("Reject graphs with a weight below this value")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("max-weight")
                .long("max-weight")
                .help("Reject graphs with a weight above this value")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
                .value_parser(value_parser!(PathBuf)),
        );

    let generate = Command::new("generate")
        .about("Write a random batch file to stdout")
        .arg(
            Arg::new("graphs")
                .short('g')
                .long("graphs")
                .default_value("1")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("nodes")
                .short('n')
                .long("nodes")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("edges")
                .short('e')
                .long("edges")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("min-weight")
                .long("min-weight")
                .default_value("1")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("max-weight")
                .long("max-weight")
                .default_value("100")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("k")
                .short('k')
                .long("redundant")
                .default_value("0")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for reproducible output")
                .value_parser(value_parser!(u64)),
        );

    Command::new("spanr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimum spanning forests with redundant edges")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(run)
        .subcommand(generate)
}

fn main() {
    let e = env_logger::Env::new()
        .filter("SPANR_LOG")
        .write_style("SPANR_LOG_STYLE");
    env_logger::init_from_env(e);

    let matches = make_parser().get_matches();
    let result = match matches.subcommand() {
        Some(("run", sub)) => cmd_run(sub),
        Some(("generate", sub)) => cmd_generate(sub),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Config file values, overridden by any flag given on the command line.
fn load_config(matches: &ArgMatches) -> Result<SpanrConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            if !path.exists() {
                bail!("config file {:?} does not exist", path);
            }
            SpanrConfig::load_from_file(path)?
        }
        None => SpanrConfig::load_from_file(DEFAULT_CONFIG_FILE)?,
    };

    if let Some(methods) = matches.get_many::<String>("algorithm") {
        config.methods = methods
            .map(|m| m.parse::<MSTMethod>().map_err(anyhow::Error::msg))
            .collect::<Result<_>>()?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?;
    }
    if matches.get_flag("parallel") {
        config.parallel = true;
    }
    if let Some(&min) = matches.get_one::<i64>("min-weight") {
        config.min_weight = Some(min);
    }
    if let Some(&max) = matches.get_one::<i64>("max-weight") {
        config.max_weight = Some(max);
    }

    log::debug!("spanr config: {:?}", config);
    Ok(config)
}

fn cmd_run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing input file")?;

    let parse_options = config.parse_options()?;
    let batch = read_batch(input, &parse_options)
        .with_context(|| format!("Failed to read batch file: {:?}", input))?;

    let runs = run_batch(&batch.graphs, &config.run_options());

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&runs, &batch.diagnostics)),
        OutputFormat::Json => println!("{}", render_json(&runs, &batch.diagnostics)?),
    }
    Ok(())
}

fn cmd_generate(matches: &ArgMatches) -> Result<()> {
    let options = GeneratorOptions {
        graphs: *matches.get_one::<usize>("graphs").context("missing --graphs")?,
        nodes: *matches.get_one::<usize>("nodes").context("missing --nodes")?,
        edges: *matches.get_one::<usize>("edges").context("missing --edges")?,
        min_weight: *matches.get_one::<i64>("min-weight").context("missing --min-weight")?,
        max_weight: *matches.get_one::<i64>("max-weight").context("missing --max-weight")?,
        k: *matches.get_one::<i64>("k").context("missing --redundant")?,
    };

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let graphs = generate_batch(&options, &mut rng)?;
    print!("{}", render_batch(&graphs));
    Ok(())
}
