use glam::{Mat4, Vec3};
use super::*;

fn unit_model_at(position: Vec3) -> Model {
    Model::new(
        Mat4::from_translation(position),
        AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
    )
}

// ============================================================================
// Model
// ============================================================================

#[test]
fn test_model_translation() {
    let model = unit_model_at(Vec3::new(3.0, 4.0, 5.0));
    assert_eq!(model.translation(), Vec3::new(3.0, 4.0, 5.0));
}

#[test]
fn test_model_world_bounds() {
    let model = unit_model_at(Vec3::new(10.0, 0.0, 0.0));
    let bounds = model.world_bounds();
    assert_eq!(bounds.min, Vec3::new(9.5, -0.5, -0.5));
    assert_eq!(bounds.max, Vec3::new(10.5, 0.5, 0.5));
}

#[test]
fn test_model_setters() {
    let mut model = unit_model_at(Vec3::ZERO);
    model.set_world_matrix(Mat4::from_scale(Vec3::splat(2.0)));
    model.set_bounding_box(AABB::new(Vec3::ZERO, Vec3::ONE));

    assert_eq!(model.world_bounds().max, Vec3::splat(2.0));
    assert_eq!(*model.bounding_box(), AABB::new(Vec3::ZERO, Vec3::ONE));
}

// ============================================================================
// ModelTable
// ============================================================================

#[test]
fn test_table_insert_get_remove() {
    let mut table = ModelTable::new();
    assert!(table.is_empty());

    let a = table.insert(unit_model_at(Vec3::X));
    let b = table.insert(unit_model_at(Vec3::Y));
    assert_eq!(table.len(), 2);
    assert!(table.contains(a));
    assert_eq!(table.get(b).unwrap().translation(), Vec3::Y);

    assert!(table.remove(a).is_some());
    assert!(!table.contains(a));
    assert!(table.get(a).is_none());
    assert_eq!(table.len(), 1);
}

#[test]
fn test_table_stale_key_after_reinsert() {
    let mut table = ModelTable::new();
    let a = table.insert(unit_model_at(Vec3::X));
    table.remove(a);
    let b = table.insert(unit_model_at(Vec3::Z));

    // Slot may be reused, but the old key must stay stale
    assert_ne!(a, b);
    assert!(table.world_bounds(a).is_none());
    assert!(table.translation(a).is_none());
    assert_eq!(table.translation(b), Some(Vec3::Z));
}

#[test]
fn test_table_model_source_reflects_updates() {
    let mut table = ModelTable::new();
    let key = table.insert(unit_model_at(Vec3::ZERO));

    table.get_mut(key).unwrap()
        .set_world_matrix(Mat4::from_translation(Vec3::new(0.0, 7.0, 0.0)));

    assert_eq!(table.translation(key), Some(Vec3::new(0.0, 7.0, 0.0)));
    assert_eq!(table.world_bounds(key).unwrap().center(), Vec3::new(0.0, 7.0, 0.0));
    assert_eq!(table.iter().count(), 1);
}
