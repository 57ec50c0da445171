#![no_main]

use libfuzzer_sys::fuzz_target;
use stree::{ArrayConfig, ArrayEdgeMap, ByteSuffixTree, HashEdgeMap, SuffixTree};

fuzz_target!(|data: &[u8]| {
    // Any byte string builds, and both strategies lay out the arena the
    // same way
    let array = ByteSuffixTree::from_bytes(data).expect("byte input always builds");
    let hashed = SuffixTree::<HashEdgeMap<u8>>::build(data.iter().copied(), ())
        .expect("byte input always builds");

    assert_eq!(array.node_count(), hashed.node_count());
    for (a, h) in array.nodes().iter().zip(hashed.nodes()) {
        assert_eq!(a.start(), h.start());
        assert_eq!(a.length(), h.length());
        assert_eq!(a.suffix_link(), h.suffix_link());
    }

    // Narrow alphabets reject high bytes instead of building
    let narrow = SuffixTree::<ArrayEdgeMap<u8>>::build(data.iter().copied(), ArrayConfig::ascii());
    assert_eq!(narrow.is_ok(), data.iter().all(|&b| b < 128));
});
