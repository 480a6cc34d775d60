//! This executable takes a path to a level.dat file for a world, and spits out
//! a new level.dat file in the current directory. The data is changed so that
//! the world spawn is set to 0,100,0.

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use nbtcodec::{from_reader, to_writer, Naming, Value};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let file = std::fs::File::open(&args[1]).unwrap();

    let mut leveldat = from_reader(GzDecoder::new(file), Naming::Named).unwrap();

    let level = leveldat.value.as_compound_mut().expect("root compound");
    let data = level
        .get_mut("Data")
        .unwrap()
        .value
        .as_compound_mut()
        .expect("Data compound");

    data.get_mut("SpawnX").unwrap().value = Value::Int(0);
    data.get_mut("SpawnY").unwrap().value = Value::Int(100);
    data.get_mut("SpawnZ").unwrap().value = Value::Int(0);

    let outfile = std::fs::File::create("level.dat").unwrap();
    let mut encoder = GzEncoder::new(outfile, Compression::fast());
    to_writer(&leveldat, &mut encoder, Naming::Named).unwrap();
    encoder.finish().unwrap();
}
