use ampkit_core::catalog::catalog;
use ampkit_core::selection::{Selection, SelectionError, ALL_ID};

fn ids(selection: &Selection) -> Vec<&'static str> {
    selection.resolve().unwrap().iter().map(|s| s.id).collect()
}

#[test]
fn all_resolves_to_every_entry_once() {
    let resolved = ids(&Selection::All);
    assert_eq!(resolved.len(), catalog().len());
    assert_eq!(resolved, vec!["amp-docs", "amp-plan", "amp-track"]);
}

#[test]
fn subset_resolves_in_catalog_order_without_duplicates() {
    let selection = Selection::Skills(vec![
        "amp-track".to_owned(),
        "amp-docs".to_owned(),
        "amp-track".to_owned(),
    ]);
    assert_eq!(ids(&selection), vec!["amp-docs", "amp-track"]);
}

#[test]
fn empty_subset_is_rejected() {
    assert_eq!(
        Selection::Skills(Vec::new()).resolve(),
        Err(SelectionError::Empty)
    );
}

#[test]
fn unknown_id_is_rejected() {
    let selection = Selection::Skills(vec!["amp-nope".to_owned()]);
    assert_eq!(
        selection.resolve(),
        Err(SelectionError::UnknownSkill("amp-nope".to_owned()))
    );
}

#[test]
fn subset_containing_all_resolves_to_everything() {
    let selection = Selection::Skills(vec![ALL_ID.to_owned(), "amp-docs".to_owned()]);
    assert_eq!(ids(&selection), vec!["amp-docs", "amp-plan", "amp-track"]);
}
