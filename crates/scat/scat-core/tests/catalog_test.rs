use scat_core::catalog::Catalog;
use scat_core::errors::CatalogError;
use scat_core::models::SectionId;

#[test]
fn builtin_catalog_has_expected_section_sizes() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.section(SectionId::Ci).total_causes(), 7);
    assert_eq!(catalog.section(SectionId::Cb).total_causes(), 15);
    assert_eq!(catalog.section(SectionId::Nac).total_causes(), 20);
    assert_eq!(catalog.total_causes(), 42);
}

#[test]
fn builtin_catalog_is_shared() {
    let a = Catalog::builtin().unwrap();
    let b = Catalog::builtin().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn find_cause_resolves_section_and_index() {
    let catalog = Catalog::builtin().unwrap();
    let found = catalog.find_cause("cb-3").unwrap();
    assert_eq!(found.section, SectionId::Cb);
    assert_eq!(found.index, 2);
    assert_eq!(found.cause.number, "3");
    assert!(catalog.find_cause("cb-99").is_none());
    assert!(!catalog.contains_cause("ci-1-1"), "subcauses are not causes");
}

#[test]
fn cb_causes_carry_nac_references() {
    let catalog = Catalog::builtin().unwrap();
    let cause = &catalog.section(SectionId::Cb).causes[0];
    assert!(cause.nac_references.as_deref().unwrap().starts_with("Ver NAC"));
    assert!(!cause.subcauses.is_empty());
}

fn section_json(id: &str, cause_ids: &[&str]) -> String {
    let causes: Vec<String> = cause_ids
        .iter()
        .enumerate()
        .map(|(i, c)| format!(r#"{{"id":"{c}","number":"{}","title":"t"}}"#, i + 1))
        .collect();
    format!(
        r#"{{"id":"{id}","name":"{}","title":"T","causes":[{}]}}"#,
        id.to_uppercase(),
        causes.join(",")
    )
}

#[test]
fn minimal_catalog_parses() {
    let json = format!(
        "[{},{},{}]",
        section_json("ci", &["a"]),
        section_json("cb", &["b"]),
        section_json("nac", &["c", "d"])
    );
    let catalog = Catalog::from_json(&json).unwrap();
    assert_eq!(catalog.total_causes(), 4);
    assert_eq!(catalog.section(SectionId::Nac).last_cause_index(), 1);
}

#[test]
fn out_of_order_sections_are_rejected() {
    let json = format!(
        "[{},{},{}]",
        section_json("cb", &["a"]),
        section_json("ci", &["b"]),
        section_json("nac", &["c"])
    );
    let err = Catalog::from_json(&json).unwrap_err();
    assert!(matches!(err, CatalogError::SectionLayout { .. }));
    assert!(err.to_string().contains("cb, ci, nac"));
}

#[test]
fn empty_section_is_rejected() {
    let json = format!(
        "[{},{},{}]",
        section_json("ci", &["a"]),
        section_json("cb", &[]),
        section_json("nac", &["c"])
    );
    assert!(matches!(
        Catalog::from_json(&json),
        Err(CatalogError::EmptySection { section }) if section == "cb"
    ));
}

#[test]
fn duplicate_cause_ids_are_rejected() {
    let json = format!(
        "[{},{},{}]",
        section_json("ci", &["a"]),
        section_json("cb", &["a"]),
        section_json("nac", &["c"])
    );
    assert!(matches!(
        Catalog::from_json(&json),
        Err(CatalogError::DuplicateCause { id }) if id == "a"
    ));
}

#[test]
fn garbage_is_a_parse_failure() {
    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(CatalogError::ParseFailed { .. })
    ));
}
