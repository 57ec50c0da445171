//! Worked examples with known tree shapes.

mod fixtures;

use fixtures::{leaf_paths, node_paths, suffixes};
use stree::{ArrayConfig, ByteSuffixTree, HashSuffixTree, ROOT, TreeBuilder, TreeError};

#[test]
fn banana_with_terminator() -> anyhow::Result<()> {
    let tree = ByteSuffixTree::from_bytes(b"banana$")?;

    assert_eq!(tree.leaf_count(), 7);

    let mut keys: Vec<u8> = tree
        .get_children(ROOT)?
        .into_iter()
        .map(|child| tree.label(child).map(|label| label[0]))
        .collect::<Result<_, _>>()?;
    keys.sort_unstable();
    assert_eq!(keys, vec![b'$', b'a', b'b', b'n']);

    // "ana" occurs twice but is spelled by one shared path
    let paths = node_paths(&tree);
    let ana: Vec<_> = (0..tree.node_count())
        .filter(|&index| paths[index] == b"ana")
        .collect();
    assert_eq!(ana.len(), 1);
    assert!(!tree.is_leaf(ana[0])?);
    assert_eq!(tree.get_children(ana[0])?.len(), 2);

    let dollar = tree.get_child(ROOT, &b'$')?.expect("root has a '$' edge");
    assert!(tree.is_leaf(dollar)?);
    assert_eq!(tree.get_node(dollar)?.length(), 1);

    Ok(())
}

#[test]
fn repeated_symbol_chain() -> anyhow::Result<()> {
    let tree = ByteSuffixTree::from_bytes(b"aaaa$")?;
    assert_eq!(tree.leaf_count(), 5);

    // root -a-> "a" -a-> "aa" -a-> "aaa", each linking back one level
    let mut chain = Vec::new();
    let mut node = ROOT;
    while let Some(child) = tree.get_child(node, &b'a')? {
        if tree.is_leaf(child)? {
            break;
        }
        chain.push(child);
        node = child;
    }
    assert_eq!(chain.len(), 3);

    let paths = node_paths(&tree);
    for (depth, &node) in chain.iter().enumerate() {
        assert_eq!(paths[node].len(), depth + 1);
        let expected = if depth == 0 { ROOT } else { chain[depth - 1] };
        assert_eq!(tree.suffix_link(node)?, Some(expected));
    }

    let dollar = tree.get_child(ROOT, &b'$')?.expect("root has a '$' edge");
    assert!(tree.is_leaf(dollar)?);

    Ok(())
}

#[test]
fn empty_input() -> anyhow::Result<()> {
    let tree = ByteSuffixTree::from_bytes(b"")?;
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.leaf_count(), 0);
    assert_eq!(tree.get_children(ROOT)?, Vec::<usize>::new());

    let tree = HashSuffixTree::<u64>::build(Vec::new(), ())?;
    assert_eq!(tree.node_count(), 1);

    let tree = TreeBuilder::<stree::ArrayEdgeMap<u8>>::new(ArrayConfig::ascii())?.finish()?;
    assert_eq!(tree.node_count(), 1);
    Ok(())
}

#[test]
fn single_symbol() -> anyhow::Result<()> {
    let tree = ByteSuffixTree::from_bytes(b"x")?;
    assert_eq!(tree.node_count(), 2);

    let children = tree.get_children(ROOT)?;
    assert_eq!(children.len(), 1);
    assert!(tree.is_leaf(children[0])?);
    assert_eq!(tree.label(children[0])?, b"x");
    assert_eq!(tree.suffix_link(children[0])?, None);
    Ok(())
}

#[test]
fn mississippi_without_terminator() -> anyhow::Result<()> {
    let text = b"mississippi";
    let tree = ByteSuffixTree::from_bytes(text)?;

    // "i", "pi", "ppi"... only suffixes that are not prefixes of
    // another suffix get leaves
    let leaves = leaf_paths(&tree);
    assert!(leaves.len() < text.len());
    let all = suffixes(text);
    for leaf in &leaves {
        assert!(all.contains(leaf));
    }

    let i = tree.get_child(ROOT, &b'i')?.expect("root has an 'i' edge");
    assert!(!tree.is_leaf(i)?);
    Ok(())
}

#[test]
fn alphabet_too_small() {
    let err = ByteSuffixTree::build(b"hello\x80".iter().copied(), ArrayConfig::ascii())
        .unwrap_err();
    assert!(err.is_config_error());
    assert_eq!(
        err,
        TreeError::SymbolOutsideAlphabet {
            position: 5,
            rank: 0x80,
            alphabet_size: 128,
        }
    );

    let err = ByteSuffixTree::build(b"".iter().copied(), ArrayConfig::new(0)).unwrap_err();
    assert_eq!(err, TreeError::EmptyAlphabet);
}

#[test]
fn char_alphabet_bounds() -> anyhow::Result<()> {
    type CharTree = stree::SuffixTree<stree::ArrayEdgeMap<char>>;

    let tree = CharTree::build("añb$".chars(), ArrayConfig::bytes())?;
    assert_eq!(tree.leaf_count(), 4);

    let err = CharTree::build("a☃".chars(), ArrayConfig::bytes()).unwrap_err();
    assert!(matches!(err, TreeError::SymbolOutsideAlphabet { position: 1, .. }));
    Ok(())
}
