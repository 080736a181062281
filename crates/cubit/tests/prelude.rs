use cubit::prelude::*;
use cubit_test_utils::{extent, pos, reference_catalog, reference_seed};

#[test]
fn prelude_covers_a_full_session() {
    let cfg = SpaceConfig::new(extent(3, 3, 3))
        .with_catalog(reference_catalog())
        .with_overwrite(OverwritePolicy::Allow);
    let mut space = CoordinateSpace::from_config(cfg, reference_seed()).unwrap();

    let candidates = space.neighbours_of(pos(2, 2, 2), 3).unwrap();
    let free: Vec<Position> = candidates
        .into_iter()
        .filter(|p| space.is_empty(p))
        .collect();
    assert_eq!(free.len(), 26 - 5);

    let report = space
        .place_with_report(free.iter().map(|p| (*p, 'a')), BatchPolicy::IgnoreInvalid)
        .unwrap();
    assert!(report.is_complete());
    assert_eq!(space.occupied_count(), 26);
    assert!(space.is_empty(&pos(2, 2, 2)));
}

#[test]
fn errors_chain_to_their_cause() {
    use std::error::Error;

    let err = CoordinateSpace::new(
        vec![((1.0, 2.5, 1.0), 'a')],
        None,
        extent(3, 3, 3),
        false,
    )
    .unwrap_err();
    let placement = err.source().expect("seed error has a source");
    let coordinate = placement.source().expect("placement error has a source");
    assert_eq!(coordinate.to_string(), "y component 2.5 is not an integer");
}
