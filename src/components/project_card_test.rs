use super::*;

#[test]
fn numeric_attribute_selects_project() {
    assert_eq!(requested_project(Some("2")), Some(2));
    assert_eq!(requested_project(Some(" 4 ")), Some(4));
}

#[test]
fn non_numeric_attribute_is_ignored() {
    assert_eq!(requested_project(Some("task-manager")), None);
    assert_eq!(requested_project(Some("")), None);
    assert_eq!(requested_project(None), None);
}

#[test]
fn ignored_attribute_leaves_modal_closed() {
    let mut modal = ModalState::Closed;
    if let Some(id) = requested_project(Some("abc")) {
        modal.open(id);
    }
    assert_eq!(modal, ModalState::Closed);
}

#[test]
fn rendered_attribute_round_trips_catalog_ids() {
    for project in crate::catalog::PROJECTS {
        let rendered = project.id.to_string();
        assert_eq!(requested_project(Some(&rendered)), Some(project.id));
    }
}
