use super::*;

#[test]
fn lookup_known_id() {
    let catalog = Catalog::from_pairs([(440, "Team Fortress 2"), (570, "Dota 2")]);
    assert_eq!(catalog.lookup(440), Some("Team Fortress 2"));
    assert_eq!(catalog.lookup(570), Some("Dota 2"));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn lookup_unknown_id_is_none() {
    let catalog = Catalog::from_pairs([(440, "Team Fortress 2")]);
    assert_eq!(catalog.lookup(441), None);
}

#[test]
fn duplicate_ids_last_one_wins() {
    let catalog = Catalog::from_pairs([
        (10, "Counter-Strike"),
        (20, "Team Fortress Classic"),
        (10, "Counter-Strike (Renamed)"),
    ]);
    assert_eq!(catalog.lookup(10), Some("Counter-Strike (Renamed)"));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn collect_from_owned_pairs() {
    let catalog: Catalog = vec![(220, "Half-Life 2".to_string())].into_iter().collect();
    assert_eq!(catalog.lookup(220), Some("Half-Life 2"));
}

#[test]
fn empty_catalog() {
    let catalog = Catalog::default();
    assert!(catalog.is_empty());
    assert_eq!(catalog.lookup(0), None);
}
