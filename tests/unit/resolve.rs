//! Layer resolution and contact ownership.

use super::common::{reference_column, stack};
use lithos::{
    lateral_coefficient_owner, locate, resolve_layer, resolve_layer_with, BoundaryOwnership,
    LayerIndex, Location,
};

#[test]
fn test_interior_points() {
    let column = reference_column();
    assert_eq!(resolve_layer(30.0, &column), Some(LayerIndex(0)));
    assert_eq!(resolve_layer(24.0, &column), Some(LayerIndex(1)));
    assert_eq!(resolve_layer(15.0, &column), Some(LayerIndex(2)));
}

#[test]
fn test_surface_and_base_belong_to_their_only_layer() {
    let column = reference_column();
    assert_eq!(resolve_layer(35.0, &column), Some(LayerIndex(0)));
    assert_eq!(resolve_layer(12.0, &column), Some(LayerIndex(2)));
    assert_eq!(locate(35.0, &column), Location::Within(LayerIndex(0)));
    assert_eq!(locate(12.0, &column), Location::Within(LayerIndex(2)));
}

#[test]
fn test_contacts_follow_ownership_rule() {
    let column = reference_column();
    assert_eq!(resolve_layer(28.0, &column), Some(LayerIndex(0)));
    assert_eq!(
        resolve_layer_with(28.0, &column, BoundaryOwnership::Lower),
        Some(LayerIndex(1))
    );
    assert_eq!(
        locate(20.0, &column),
        Location::Contact {
            upper: LayerIndex(1),
            lower: LayerIndex(2)
        }
    );
}

#[test]
fn test_lateral_coefficient_comes_from_layer_above_contact() {
    let column = reference_column();
    assert_eq!(lateral_coefficient_owner(28.0, &column), Some(LayerIndex(0)));
    assert_eq!(lateral_coefficient_owner(27.5, &column), Some(LayerIndex(1)));
    assert_eq!(lateral_coefficient_owner(35.0, &column), Some(LayerIndex(0)));
}

#[test]
fn test_outside_column() {
    let column = reference_column();
    assert_eq!(resolve_layer(35.01, &column), None);
    assert_eq!(resolve_layer(11.99, &column), None);
    assert_eq!(locate(50.0, &column), Location::AboveColumn);
    assert_eq!(locate(0.0, &column), Location::BelowColumn);
    assert!(!locate(0.0, &column).is_in_column());
}

#[test]
fn test_nan_is_outside() {
    let column = reference_column();
    assert_eq!(resolve_layer(f64::NAN, &column), None);
    assert!(!locate(f64::NAN, &column).is_in_column());
}

#[test]
fn test_many_layers_binary_search() {
    let layers: Vec<_> = (0..64).map(|i| (1.0, 18.0 + (i % 3) as f64, 0.5)).collect();
    let column = stack(0.0, &layers);
    for i in 0..64 {
        let mid = -(i as f64) - 0.5;
        assert_eq!(resolve_layer(mid, &column), Some(LayerIndex(i)));
    }
    assert_eq!(resolve_layer(-10.0, &column), Some(LayerIndex(9)));
}
