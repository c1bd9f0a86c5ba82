use super::*;

use crate::service::asset::resolver::resolve_containers;

/// Expect a container sitting directly at a station to resolve to that station
#[test]
fn resolves_container_at_station() {
    let snapshot = SnapshotBuilder::new()
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1000,
            STATION_CONTAINER,
            JITA_STATION_ID,
            LocationKind::Station,
            LocationFlag::Hangar,
        ))
        .build();

    let resolution = resolve_containers(&snapshot);

    assert_eq!(resolution.orphaned, 0);
    let resolved = resolution.get(1000).unwrap();
    assert_eq!(resolved.root_station_id, JITA_STATION_ID);
    assert_eq!(resolved.division_number, None);
}

/// Expect a container nested three levels deep to resolve to the outermost station
#[test]
fn resolves_deeply_nested_container() {
    let snapshot = SnapshotBuilder::new()
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1000,
            STATION_CONTAINER,
            JITA_STATION_ID,
            LocationKind::Station,
            LocationFlag::Hangar,
        ))
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1001,
            STATION_CONTAINER,
            1000,
            LocationKind::Item,
            LocationFlag::Unlocked,
        ))
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1002,
            STATION_CONTAINER,
            1001,
            LocationKind::Item,
            LocationFlag::Unlocked,
        ))
        .build();

    let resolution = resolve_containers(&snapshot);

    assert_eq!(resolution.orphaned, 0);
    assert_eq!(resolution.containers.len(), 3);
    assert_eq!(resolution.get(1002).unwrap().root_station_id, JITA_STATION_ID);
}

/// Expect the nearest division-flagged ancestor to supply the division number
#[test]
fn takes_division_from_nearest_ancestor() {
    let snapshot = SnapshotBuilder::new()
        .fact(singleton_fact(
            OwnerKind::Corporation,
            CORPORATION_ID,
            2000,
            STATION_CONTAINER,
            JITA_STATION_ID,
            LocationKind::Station,
            LocationFlag::CorpDivision(2),
        ))
        .fact(singleton_fact(
            OwnerKind::Corporation,
            CORPORATION_ID,
            2001,
            STATION_CONTAINER,
            2000,
            LocationKind::Item,
            LocationFlag::Unlocked,
        ))
        .build();

    let resolution = resolve_containers(&snapshot);

    assert_eq!(resolution.get(2000).unwrap().division_number, Some(2));
    // Inner container inherits the division from the outer one.
    assert_eq!(resolution.get(2001).unwrap().division_number, Some(2));
}

/// Expect a container's own division flag to win over a farther ancestor's
#[test]
fn own_division_flag_wins_over_ancestor() {
    let snapshot = SnapshotBuilder::new()
        .fact(singleton_fact(
            OwnerKind::Corporation,
            CORPORATION_ID,
            2000,
            STATION_CONTAINER,
            JITA_STATION_ID,
            LocationKind::Station,
            LocationFlag::CorpDivision(2),
        ))
        .fact(singleton_fact(
            OwnerKind::Corporation,
            CORPORATION_ID,
            2001,
            STATION_CONTAINER,
            2000,
            LocationKind::Item,
            LocationFlag::CorpDivision(5),
        ))
        .build();

    let resolution = resolve_containers(&snapshot);

    assert_eq!(resolution.get(2001).unwrap().division_number, Some(5));
}

/// Expect character-owned containers to never carry a division number
#[test]
fn character_containers_carry_no_division() {
    let snapshot = SnapshotBuilder::new()
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1000,
            STATION_CONTAINER,
            JITA_STATION_ID,
            LocationKind::Station,
            LocationFlag::CorpDivision(3),
        ))
        .build();

    let resolution = resolve_containers(&snapshot);

    assert_eq!(resolution.get(1000).unwrap().division_number, None);
}

/// Expect a cyclic parent chain to be counted as orphaned, not looped
#[test]
fn cyclic_chain_is_orphaned() {
    let snapshot = SnapshotBuilder::new()
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1000,
            STATION_CONTAINER,
            1001,
            LocationKind::Item,
            LocationFlag::Unlocked,
        ))
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1001,
            STATION_CONTAINER,
            1000,
            LocationKind::Item,
            LocationFlag::Unlocked,
        ))
        .build();

    let resolution = resolve_containers(&snapshot);

    assert_eq!(resolution.orphaned, 2);
    assert!(resolution.containers.is_empty());
}

/// Expect a chain pointing at a missing parent to be counted as orphaned
#[test]
fn chain_to_missing_parent_is_orphaned() {
    let snapshot = SnapshotBuilder::new()
        .fact(singleton_fact(
            OwnerKind::Character,
            CHARACTER_ID,
            1000,
            STATION_CONTAINER,
            999_999,
            LocationKind::Item,
            LocationFlag::Unlocked,
        ))
        .build();

    let resolution = resolve_containers(&snapshot);

    assert_eq!(resolution.orphaned, 1);
    assert!(resolution.get(1000).is_none());
}
