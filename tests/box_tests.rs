mod support;

use cutpath::{
    errors::ConfigurationError,
    float_types::Real,
    tabbed_box::{
        BoxConfig, EdgeType, FaceName, MAX_TABS_PER_EDGE, generate_box_faces, generate_edge,
        tab_counts,
        tables::{CLOSED_FACES, DOOR_FACE, DOOR_FACES, face_specs},
    },
};
use nalgebra::{Point2, Vector2};

use crate::support::{approx_eq, shared_edges};

fn example(door: bool) -> BoxConfig {
    BoxConfig {
        box_size: [6000.0, 7000.0, 8000.0],
        thou_per_tab: 500.0,
        material_thickness: 125.0,
        tab_fraction: 0.5,
        tab_tolerance: 0.0,
        door,
    }
}

#[test]
fn tab_counts_round_up() {
    assert_eq!(tab_counts(&example(true)), [12, 14, 16]);
    let odd = BoxConfig {
        box_size: [6001.0, 499.0, 500.0],
        ..example(false)
    };
    assert_eq!(tab_counts(&odd), [13, 1, 1]);
}

#[test]
fn door_face_is_plain_rectangle() {
    let faces = generate_box_faces(&example(true)).unwrap();
    let door = &faces[1];
    assert_eq!(door.name, DOOR_FACE);
    assert_eq!(door.polyline.len(), 5);
    assert!(door.polyline.is_closed());
    assert!(approx_eq(door.bounds.width(), 6000.0, 1e-9));
    assert!(approx_eq(door.bounds.height(), 7000.0, 1e-9));
}

#[test]
fn six_closed_faces_for_both_variants() {
    for door in [false, true] {
        let faces = generate_box_faces(&example(door)).unwrap();
        assert_eq!(faces.len(), 6);
        for (face, name) in faces.iter().zip(FaceName::ALL) {
            assert_eq!(face.name, name);
            assert!(face.polyline.is_closed(), "{name} (door = {door})");
            assert_eq!(face.polyline.first(), face.polyline.last());
        }
    }
}

#[test]
fn point_counts_follow_tab_counts() {
    // an edge with n tabs has 4n + 3 points, a flat edge 2, plus one closing point
    let closed = generate_box_faces(&example(false)).unwrap();
    assert_eq!(closed[0].polyline.len(), 2 * (4 * 12 + 3) + 2 * (4 * 14 + 3) + 1);
    assert_eq!(closed[4].polyline.len(), 2 * (4 * 14 + 3) + 2 * (4 * 16 + 3) + 1);

    let door = generate_box_faces(&example(true)).unwrap();
    // front: Innie(x), Outie(z), FlatOut(x), Outie(z)
    assert_eq!(door[2].polyline.len(), (4 * 12 + 3) + 2 * (4 * 16 + 3) + 2 + 1);
}

#[test]
fn outie_faces_reach_one_thickness_past_nominal() {
    let faces = generate_box_faces(&example(false)).unwrap();
    let bottom = &faces[0].bounds;
    assert!(approx_eq(bottom.min().x, -125.0, 1e-9));
    assert!(approx_eq(bottom.min().y, -125.0, 1e-9));
    assert!(approx_eq(bottom.max().x, 6125.0, 1e-9));
    assert!(approx_eq(bottom.max().y, 7125.0, 1e-9));

    // innie gaps protrude to the same outer joint line
    let left = &faces[4].bounds;
    assert!(approx_eq(left.width(), 7000.0 + 250.0, 1e-9));
    assert!(approx_eq(left.height(), 8000.0 + 250.0, 1e-9));
}

#[test]
fn shared_edges_are_complementary() {
    let edges = shared_edges(&CLOSED_FACES);
    assert_eq!(edges.len(), 12);
    for (key, sides) in &edges {
        assert_eq!(sides.len(), 2, "{key:?}");
        let shapes = [sides[0].1, sides[1].1];
        assert!(
            shapes.contains(&EdgeType::Outie) && shapes.contains(&EdgeType::Innie),
            "{key:?}: {sides:?}"
        );
    }
}

#[test]
fn door_table_flattens_only_door_edges() {
    let edges = shared_edges(&DOOR_FACES);
    assert_eq!(edges.len(), 12);
    let mut flat_joints = 0;
    for (key, sides) in &edges {
        assert_eq!(sides.len(), 2, "{key:?}");
        let touches_door = sides.iter().any(|(name, _)| *name == DOOR_FACE);
        if touches_door {
            flat_joints += 1;
            assert!(sides.iter().all(|(_, shape)| shape.is_flat()), "{key:?}: {sides:?}");
        } else {
            let shapes = [sides[0].1, sides[1].1];
            assert!(
                shapes.contains(&EdgeType::Outie) && shapes.contains(&EdgeType::Innie),
                "{key:?}: {sides:?}"
            );
        }
    }
    assert_eq!(flat_joints, 4);
}

#[test]
fn mating_edges_share_tab_counts() {
    // both panels on a joint run along the same axis, so they get the same tab count
    for door in [false, true] {
        for key in shared_edges(face_specs(door)).keys() {
            assert_eq!(key.iter().filter(|&&position| position == 2).count(), 1);
        }
    }
    for spec in CLOSED_FACES.iter().chain(DOOR_FACES.iter()) {
        assert_eq!(spec.directions[0], spec.directions[2]);
        assert_eq!(spec.directions[1], spec.directions[3]);
    }
}

#[test]
fn flat_edges_ignore_thickness_and_fraction() {
    for (thickness, fraction) in [(0.0, 1.0), (1.0, 0.1), (4.9, 0.75)] {
        for shape in [EdgeType::FlatIn, EdgeType::FlatOut] {
            let points = generate_edge(
                Point2::new(3.0, -2.0),
                Vector2::new(-10.0, 0.0),
                0,
                shape,
                fraction,
                thickness,
                0.0,
            )
            .unwrap();
            assert_eq!(points.len(), 2);
        }
    }
}

#[test]
fn tabbed_edge_without_tabs_is_a_segment() {
    let points = generate_edge(
        Point2::origin(),
        Vector2::new(0.0, 100.0),
        0,
        EdgeType::Outie,
        0.5,
        5.0,
        1.0,
    )
    .unwrap();
    assert_eq!(points.len(), 2);
    assert!(approx_eq((points[1] - points[0]).norm(), 90.0, 1e-12));
}

#[test]
fn tolerance_does_not_change_outline_length_along_edge() {
    let loose = generate_box_faces(&BoxConfig {
        tab_tolerance: 3.0,
        ..example(false)
    })
    .unwrap();
    let tight = generate_box_faces(&example(false)).unwrap();
    for (a, b) in loose.iter().zip(tight.iter()) {
        assert_eq!(a.polyline.len(), b.polyline.len());
        assert!(approx_eq(a.bounds.width(), b.bounds.width(), 1e-6));
        assert!(approx_eq(a.bounds.height(), b.bounds.height(), 1e-6));
    }
}

#[test]
fn rejects_invalid_configurations() {
    let bad_size = BoxConfig {
        box_size: [6000.0, 0.0, 8000.0],
        ..example(false)
    };
    assert_eq!(
        generate_box_faces(&bad_size).unwrap_err(),
        ConfigurationError::BoxSize {
            axis: 1,
            value: 0.0
        }
    );

    for fraction in [0.0, 1.5, -0.5, Real::NAN] {
        let cfg = BoxConfig {
            tab_fraction: fraction,
            ..example(false)
        };
        assert!(matches!(
            generate_box_faces(&cfg),
            Err(ConfigurationError::TabFraction(_))
        ));
    }

    let thick = BoxConfig {
        material_thickness: 3000.0,
        ..example(false)
    };
    assert!(matches!(
        generate_box_faces(&thick),
        Err(ConfigurationError::EdgeTooShort { .. })
    ));

    let no_pitch = BoxConfig {
        thou_per_tab: 0.0,
        ..example(false)
    };
    assert!(matches!(
        generate_box_faces(&no_pitch),
        Err(ConfigurationError::TabPitch(_))
    ));
}

#[test]
fn tiny_pitch_is_rejected_before_generation() {
    let cfg = BoxConfig {
        thou_per_tab: 1e-30,
        ..example(false)
    };
    assert_eq!(tab_counts(&cfg), [usize::MAX; 3]);
    assert_eq!(
        generate_box_faces(&cfg).unwrap_err(),
        ConfigurationError::TooManyTabs {
            count: usize::MAX,
            max: MAX_TABS_PER_EDGE,
        }
    );

    let just_over = BoxConfig {
        box_size: [(MAX_TABS_PER_EDGE + 1) as Real, 7000.0, 8000.0],
        thou_per_tab: 1.0,
        ..example(false)
    };
    assert!(matches!(
        generate_box_faces(&just_over),
        Err(ConfigurationError::TooManyTabs { .. })
    ));
}

#[test]
fn edge_tab_count_is_bounded() {
    let err = generate_edge(
        Point2::origin(),
        Vector2::new(100.0, 0.0),
        usize::MAX,
        EdgeType::Outie,
        0.5,
        1.0,
        0.0,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::TooManyTabs {
            count: usize::MAX,
            max: MAX_TABS_PER_EDGE,
        }
    );
}

#[test]
fn full_tab_fraction_has_no_gaps() {
    let cfg = BoxConfig {
        tab_fraction: 1.0,
        ..example(false)
    };
    let faces = generate_box_faces(&cfg).unwrap();
    assert!(faces.iter().all(|face| face.polyline.is_closed()));
}

#[test]
fn generation_is_repeatable() {
    for door in [false, true] {
        let a = generate_box_faces(&example(door)).unwrap();
        let b = generate_box_faces(&example(door)).unwrap();
        assert_eq!(a, b);
    }
}
