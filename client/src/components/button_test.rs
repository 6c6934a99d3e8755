use super::*;

#[test]
fn variant_class_maps_primary() {
    assert_eq!(variant_class(ButtonVariant::Primary), "button button--primary");
}

#[test]
fn variant_class_maps_secondary() {
    assert_eq!(variant_class(ButtonVariant::Secondary), "button button--secondary");
}

#[test]
fn variant_classes_are_distinct() {
    assert_ne!(
        variant_class(ButtonVariant::Primary),
        variant_class(ButtonVariant::Secondary),
    );
}
