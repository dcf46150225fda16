use super::*;

fn draft(title: &str, priority: &str, status: &str) -> Draft {
    Draft {
        title: title.to_owned(),
        description: "D".to_owned(),
        priority: priority.to_owned(),
        status: status.to_owned(),
    }
}

#[test]
fn default_draft_is_empty() {
    assert!(Draft::default().is_empty());
}

#[test]
fn set_and_get_each_field() {
    let mut d = Draft::default();
    d.set(DraftField::Title, "T");
    d.set(DraftField::Description, "D");
    d.set(DraftField::Priority, "high");
    d.set(DraftField::Status, "done");
    assert_eq!(d.get(DraftField::Title), "T");
    assert_eq!(d.get(DraftField::Description), "D");
    assert_eq!(d.get(DraftField::Priority), "high");
    assert_eq!(d.get(DraftField::Status), "done");
    assert!(!d.is_empty());
}

#[test]
fn validate_accepts_complete_draft() {
    let new_card = draft("T", "low", "todo").validate(Status::Done).unwrap();
    assert_eq!(new_card.title, "T");
    assert_eq!(new_card.description, "D");
    assert_eq!(new_card.priority, Priority::Low);
    assert_eq!(new_card.status, Status::Todo);
}

#[test]
fn validate_defaults_status_to_column() {
    let new_card = draft("T", "medium", "").validate(Status::InProgress).unwrap();
    assert_eq!(new_card.status, Status::InProgress);
}

#[test]
fn validate_trims_title_and_description() {
    let mut d = draft("  Title  ", "high", "done");
    d.description = "  body ".to_owned();
    let new_card = d.validate(Status::Todo).unwrap();
    assert_eq!(new_card.title, "Title");
    assert_eq!(new_card.description, "body");
}

#[test]
fn validate_rejects_unknown_priority() {
    let err = draft("T", "urgent", "todo").validate(Status::Todo).unwrap_err();
    assert_eq!(err, ValidationError::InvalidPriority("urgent".to_owned()));
}

#[test]
fn validate_rejects_missing_priority() {
    let err = draft("T", "", "todo").validate(Status::Todo).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidPriority(_)));
}

#[test]
fn validate_rejects_blank_title() {
    let err = draft("   ", "low", "todo").validate(Status::Todo).unwrap_err();
    assert_eq!(err, ValidationError::EmptyTitle);
}

#[test]
fn validate_rejects_unknown_status() {
    let err = draft("T", "low", "archived").validate(Status::Todo).unwrap_err();
    assert_eq!(err, ValidationError::InvalidStatus("archived".to_owned()));
}
