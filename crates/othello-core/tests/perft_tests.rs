use othello_core::perft::perft_root;

#[test]
fn test_perft() {
    let nodes = perft_root(9);
    assert_eq!(nodes, 8_900);
}

#[test]
fn test_perft_mid_depths() {
    assert_eq!(perft_root(5), 116);
    assert_eq!(perft_root(6), 296);
    assert_eq!(perft_root(7), 832);
    assert_eq!(perft_root(8), 2_636);
}
