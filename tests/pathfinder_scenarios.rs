//! End-to-end scenarios over maps parsed from character art, covering the
//! fixtures this crate is expected to reproduce bit-for-bit: border
//! rejection, identity search, straight-line compression, single-bend
//! detours, and a walled serpentine requiring six waypoints.

mod common;

use common::parse_map;
use glam::IVec2;
use grid_pathfinding::Pathfinder;

#[test]
fn empty_1x1_map() {
    let (width, height, cost) = parse_map(&[" "]);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.find_path(&[IVec2::new(1, 1)], IVec2::new(1, 1)));
    assert!(!pf.find_path(&[IVec2::new(1, 1)], IVec2::new(0, 1)));
    assert!(!pf.find_path(&[IVec2::new(0, 1)], IVec2::new(1, 1)));
}

#[test]
fn short_corridor_compresses_to_two_waypoints() {
    let (width, height, cost) = parse_map(&["000"]);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.find_path(&[IVec2::new(1, 1)], IVec2::new(3, 1)));
    let mut path = Vec::new();
    assert!(pf.get_path(IVec2::new(3, 1), &mut path));
    assert_eq!(path, vec![IVec2::new(3, 1), IVec2::new(1, 1)]);
}

#[test]
fn short_corridor_with_a_costly_middle_cell_still_compresses() {
    let (width, height, cost) = parse_map(&["010"]);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.find_path(&[IVec2::new(1, 1)], IVec2::new(3, 1)));
    let mut path = Vec::new();
    assert!(pf.get_path(IVec2::new(3, 1), &mut path));
    assert_eq!(path, vec![IVec2::new(3, 1), IVec2::new(1, 1)]);
}

#[test]
fn open_field_straight_path() {
    let (width, height, cost) = parse_map(&["     ", "     ", "     ", "     ", "     "]);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.find_path(&[IVec2::new(1, 1)], IVec2::new(1, 5)));
    let mut path = Vec::new();
    assert!(pf.get_path(IVec2::new(1, 5), &mut path));
    assert_eq!(path, vec![IVec2::new(1, 5), IVec2::new(1, 1)]);
}

#[test]
fn open_field_opposite_diagonal() {
    let (width, height, cost) = parse_map(&["     ", "     ", "     ", "     ", "     "]);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.find_path(&[IVec2::new(1, 1)], IVec2::new(5, 5)));
    let mut path = Vec::new();
    assert!(pf.get_path(IVec2::new(5, 5), &mut path));
    assert_eq!(path, vec![IVec2::new(5, 5), IVec2::new(1, 1)]);
}

#[test]
fn single_obstacle_opposite_corners_one_bend() {
    let (width, height, cost) = parse_map(&["X ", "  "]);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.find_path(&[IVec2::new(1, 2)], IVec2::new(2, 1)));
    let mut path = Vec::new();
    assert!(pf.get_path(IVec2::new(2, 1), &mut path));
    assert_eq!(
        path,
        vec![IVec2::new(2, 1), IVec2::new(2, 2), IVec2::new(1, 2)]
    );
}

#[test]
fn walled_serpentine_has_five_bends() {
    let rows: Vec<String> = vec![
        vec![' ', '#', ' ', ' ', ' '],
        vec![' ', '#', ' ', '#', ' '],
        vec![' ', '#', ' ', '#', ' '],
        vec![' ', '#', ' ', '#', ' '],
        vec![' ', ' ', ' ', '#', ' '],
    ]
    .into_iter()
    .map(|chars| chars.into_iter().collect())
    .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();

    let (width, height, cost) = parse_map(&row_refs);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.find_path(&[IVec2::new(1, 1)], IVec2::new(5, 5)));
    let mut path = Vec::new();
    assert!(pf.get_path(IVec2::new(5, 5), &mut path));
    assert_eq!(
        path,
        vec![
            IVec2::new(5, 5),
            IVec2::new(5, 1),
            IVec2::new(3, 1),
            IVec2::new(3, 5),
            IVec2::new(1, 5),
            IVec2::new(1, 1),
        ]
    );
}

#[test]
fn flood_fill_reaches_every_open_cell() {
    let (width, height, cost) = parse_map(&["     ", "     ", "     ", "     ", "     "]);
    let mut pf = Pathfinder::new(width, height, cost).unwrap();

    assert!(pf.flood_fill(&[IVec2::new(1, 1)]));
    for y in 1..=5 {
        for x in 1..=5 {
            assert!(pf.distance_to(IVec2::new(x, y)).is_some());
        }
    }
}
