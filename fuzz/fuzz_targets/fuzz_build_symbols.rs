#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stree::{FxEdgeMap, SuffixTree};

#[derive(Arbitrary, Debug)]
struct Input {
    symbols: Vec<u16>,
    terminate: bool,
}

fuzz_target!(|input: Input| {
    let mut symbols: Vec<u32> = input.symbols.iter().map(|&s| s as u32).collect();
    if input.terminate {
        symbols.push(u32::MAX);
    }

    let tree = SuffixTree::<FxEdgeMap<u32>>::build(symbols.iter().copied(), ())
        .expect("hash strategy accepts any symbol");

    if input.terminate {
        assert_eq!(tree.leaf_count(), symbols.len());
    } else {
        assert!(tree.leaf_count() <= symbols.len());
    }
});
