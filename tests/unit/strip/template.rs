use super::*;

#[test]
fn all_templates_resolve_by_id() {
    for t in &TEMPLATES {
        assert_eq!(template_by_id(t.id), Some(t));
    }
    assert_eq!(template_by_id(" ROSE ").map(|t| t.name), Some("Rose"));
}

#[test]
fn unknown_id_falls_back_to_classic() {
    assert!(template_by_id("neon").is_none());
    assert_eq!(template_or_default("neon").id, "classic");
}

#[test]
fn ids_are_unique() {
    let mut ids: Vec<_> = TEMPLATES.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), TEMPLATES.len());
}
