use super::*;

#[test]
fn names_round_trip_through_from_name() {
    for kind in FilterKind::ALL {
        assert_eq!(FilterKind::from_name(kind.name()), kind);
    }
}

#[test]
fn aliases_and_case_are_accepted() {
    assert_eq!(FilterKind::from_name("  Dreamy "), FilterKind::Blue);
    assert_eq!(FilterKind::from_name("CARTOON"), FilterKind::Peachy);
    assert_eq!(FilterKind::from_name("bw"), FilterKind::BlackWhite);
}

#[test]
fn unknown_name_is_identity() {
    assert_eq!(FilterKind::from_name("sepia"), FilterKind::None);
    assert_eq!("sepia".parse::<FilterKind>().unwrap(), FilterKind::None);
}

#[test]
fn serde_unknown_variant_is_identity() {
    let k: FilterKind = serde_json::from_str("\"vintage\"").unwrap();
    assert_eq!(k, FilterKind::Vintage);
    let k: FilterKind = serde_json::from_str("\"posterize\"").unwrap();
    assert_eq!(k, FilterKind::None);
    assert_eq!(
        serde_json::to_string(&FilterKind::BlackWhite).unwrap(),
        "\"blackwhite\""
    );
}

#[test]
fn labels_match_picker() {
    let labels: Vec<_> = FilterKind::ALL.iter().map(|k| k.label()).collect();
    assert_eq!(
        labels,
        ["Normal", "Vintage", "B&W", "Blue Light", "Grains", "Peachy"]
    );
}

#[test]
fn identity_is_default_and_first_in_picker() {
    assert_eq!(FilterKind::default(), FilterKind::None);
    assert_eq!(FilterKind::ALL[0], FilterKind::None);
    let k: FilterKind = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(k, FilterKind::None);
    assert_eq!(serde_json::to_string(&FilterKind::None).unwrap(), "\"none\"");
}
