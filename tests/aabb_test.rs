use portal_ngin::{
    Deg, Matrix4, Vector3,
    data_structures::aabb::{Aabb, intervals_overlap},
};

use crate::common::test_utils::assert_vec_near;

mod common;

fn boxes() -> Vec<Aabb> {
    let mut boxes = Vec::new();
    for x in [-1.5f32, -0.5, 0.0, 0.75, 2.0] {
        for y in [-1.0f32, 0.0, 1.0] {
            let min = Vector3::new(x, y, 0.0);
            boxes.push(Aabb::new(min, min + Vector3::new(1.0, 0.5, 2.0)));
        }
    }
    boxes
}

#[test]
fn touching_intervals_overlap() {
    assert!(intervals_overlap(0.0, 1.0, 1.0, 2.0));
    assert!(intervals_overlap(1.0, 2.0, 0.0, 1.0));
    assert!(intervals_overlap(0.0, 3.0, 1.0, 2.0));
    assert!(!intervals_overlap(0.0, 1.0, 1.5, 2.0));
    assert!(!intervals_overlap(1.5, 2.0, 0.0, 1.0));
}

#[test]
fn intersection_is_symmetric() {
    let boxes = boxes();
    let mut hits = 0;
    for a in &boxes {
        for b in &boxes {
            assert_eq!(a.intersects(b), b.intersects(a), "{:?} vs {:?}", a, b);
            if a.intersects(b) {
                hits += 1;
            }
        }
    }
    // Every box hits itself, so the grid must contain both outcomes.
    assert!(hits > boxes.len());
    assert!(hits < boxes.len() * boxes.len());
}

#[test]
fn boxes_separated_on_a_single_axis_do_not_intersect() {
    let a = Aabb::unit();
    let b = Aabb::new(Vector3::new(-1.0, -1.0, 1.5), Vector3::new(1.0, 1.0, 3.0));
    assert!(!a.intersects(&b));
}

#[test]
fn translated_and_scaled_box() {
    let transform = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0))
        * Matrix4::from_nonuniform_scale(2.0, 1.0, 0.5);
    let world = Aabb::unit().transformed(&transform);
    assert_vec_near(world.min, Vector3::new(-1.0, 1.0, 2.5));
    assert_vec_near(world.max, Vector3::new(3.0, 3.0, 3.5));
}

#[test]
fn rotated_box_covers_all_corners() {
    let world = Aabb::unit().transformed(&Matrix4::from_angle_y(Deg(45.0)));
    let reach = 2.0f32.sqrt();
    assert_vec_near(world.min, Vector3::new(-reach, -1.0, -reach));
    assert_vec_near(world.max, Vector3::new(reach, 1.0, reach));
}

#[test]
fn rejects_inverted_and_non_finite_boxes() {
    assert!(Aabb::unit().is_well_formed());
    let zero = Vector3::new(0.0, 0.0, 0.0);
    let one = Vector3::new(1.0, 1.0, 1.0);
    assert!(Aabb::new(zero, zero).is_well_formed());
    assert!(!Aabb::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 1.0)).is_well_formed());
    assert!(!Aabb::new(Vector3::new(f32::NAN, 0.0, 0.0), one).is_well_formed());
    assert!(!Aabb::new(zero, Vector3::new(1.0, f32::INFINITY, 1.0)).is_well_formed());
}
