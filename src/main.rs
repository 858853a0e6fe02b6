use std::{path::PathBuf, process};

use clap::Parser;
use log::debug;
use rust_multiplier::{utils::load_config, AdderKind, Config, Error, Multiplier};

#[derive(Debug, Parser)]
struct Args {
    #[clap(allow_hyphen_values = true)]
    a: i64,
    #[clap(allow_hyphen_values = true)]
    b: i64,
    #[clap(long)]
    config: Option<PathBuf>,
    #[clap(long, arg_enum)]
    adder: Option<AdderKind>,
}

fn run(args: Args) -> Result<i64, Error> {
    let config = match args.config {
        Some(ref path) => load_config(path)?,
        None => Config::default(),
    };
    Multiplier::new(config.adder_or(args.adder)).multiply(args.a, args.b)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(product) => println!("{}", product),
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("rust-multiplier: {}", e);
            process::exit(1);
        }
    }
}
