use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use domain_checker::{classify, open_input};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read the domain lists from a file instead of standard input
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = open_input(args.input.as_deref())
        .and_then(|input| classify(input, io::BufWriter::new(io::stdout().lock())));

    if let Err(e) = result {
        log::error!("{}", e);
        exit(1);
    }
}
