//! Print the tree in an NBT file. Reads from stdin if no file is given.
//! Gzip and zlib compressed input is detected and decompressed.
use std::io::{self, Read};

use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use nbtcodec::{from_reader_with_opts, to_display_string, DeOpts, Naming};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let mut data = vec![];
    match path {
        Some(path) => {
            std::fs::File::open(path)?.read_to_end(&mut data)?;
        }
        None => {
            io::stdin().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

fn run() -> Result<()> {
    let matches = App::new("nbt-dump")
        .about("Print the contents of an NBT file")
        .arg(Arg::with_name("file").takes_value(true).required(false))
        .arg(
            Arg::with_name("anon")
                .long("anon")
                .takes_value(false)
                .help("root tag has no name"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("print as JSON instead of the tree form"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .required(false),
        )
        .get_matches();

    let data = nbtcodec_tools::decompress(read_input(matches.value_of("file"))?)?;
    info!("{} bytes of nbt", data.len());

    let naming = if matches.is_present("anon") {
        Naming::Anon
    } else {
        Naming::Named
    };

    let mut opts = DeOpts::new();
    if let Some(depth) = matches.value_of("max-depth") {
        opts = opts.max_depth(depth.parse()?);
    }

    let tag = from_reader_with_opts(data.as_slice(), naming, opts)?;

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&tag)?);
    } else {
        println!("{}", to_display_string(&tag));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
