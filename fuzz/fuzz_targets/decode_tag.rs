#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_reader_with_opts, to_bytes, DeOpts, Naming};

fuzz_target!(|data: &[u8]| {
    let opts = DeOpts::new().max_seq_len(100).max_depth(64);
    if let Ok(tag) = from_reader_with_opts(data, Naming::Named, opts) {
        // Anything that decodes must encode to exactly the bytes consumed.
        // Comparing bytes rather than trees keeps NaN floats comparable.
        let bs = to_bytes(&tag).unwrap();
        assert_eq!(&data[..bs.len()], bs.as_slice());
    }
});
