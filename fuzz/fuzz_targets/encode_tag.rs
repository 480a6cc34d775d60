#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes, to_bytes, Compound, Tag};

fuzz_target!(|c: Compound| {
    let tag = Tag::new("", c);

    // Over-long names and strings, and over-deep trees, are rejected. Anything
    // else has to survive the trip.
    if let Ok(bs) = to_bytes(&tag) {
        let decoded = from_bytes(&bs).unwrap();
        assert_eq!(to_bytes(&decoded).unwrap(), bs);
    }
});
