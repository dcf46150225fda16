use super::*;

// =============================================================
// Status
// =============================================================

#[test]
fn status_all_is_fixed_column_order() {
    assert_eq!(Status::ALL, [Status::Todo, Status::InProgress, Status::Done]);
}

#[test]
fn status_parses_wire_slugs() {
    assert_eq!("todo".parse::<Status>().unwrap(), Status::Todo);
    assert_eq!("inprogress".parse::<Status>().unwrap(), Status::InProgress);
    assert_eq!(" done ".parse::<Status>().unwrap(), Status::Done);
}

#[test]
fn status_rejects_unknown_slug() {
    let err = "blocked".parse::<Status>().unwrap_err();
    assert_eq!(err, ValidationError::InvalidStatus("blocked".to_owned()));
}

#[test]
fn status_display_matches_serde() {
    for status in Status::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{status}\""));
    }
}

#[test]
fn status_titles() {
    assert_eq!(Status::Todo.title(), "To Do");
    assert_eq!(Status::InProgress.title(), "In Progress");
    assert_eq!(Status::Done.title(), "Done");
}

// =============================================================
// Priority
// =============================================================

#[test]
fn priority_parses_known_values() {
    assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
    assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
    assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
}

#[test]
fn priority_rejects_urgent_and_empty() {
    assert_eq!(
        "urgent".parse::<Priority>().unwrap_err(),
        ValidationError::InvalidPriority("urgent".to_owned())
    );
    assert_eq!("".parse::<Priority>().unwrap_err(), ValidationError::InvalidPriority(String::new()));
}

// =============================================================
// Card serde
// =============================================================

#[test]
fn card_decodes_current_schema() {
    let card: Card = serde_json::from_str(
        r#"{"id":"c1","title":"T","description":"D","priority":"high","status":"inprogress"}"#,
    )
    .unwrap();
    assert_eq!(card.id, "c1");
    assert_eq!(card.description, "D");
    assert_eq!(card.priority, Priority::High);
    assert_eq!(card.status, Status::InProgress);
}

#[test]
fn card_decodes_legacy_field_names_and_ignores_extras() {
    let card: Card = serde_json::from_str(
        r#"{"_id":"64f0","title":"T","desc":"D","priority":"low","state":"done","__v":0}"#,
    )
    .unwrap();
    assert_eq!(card.id, "64f0");
    assert_eq!(card.description, "D");
    assert_eq!(card.status, Status::Done);
}

#[test]
fn card_decodes_legacy_numeric_priority() {
    let card: Card = serde_json::from_str(
        r#"{"_id":"64f","title":"t","desc":"d","priority":2,"state":"todo","__v":0}"#,
    )
    .unwrap();
    assert_eq!(card.id, "64f");
    assert_eq!(card.description, "d");
    assert_eq!(card.priority, Priority::High);
    assert_eq!(card.status, Status::Todo);
}

#[test]
fn legacy_board_with_numeric_priorities_decodes_whole() {
    let cards: Vec<Card> = serde_json::from_str(
        r#"[
            {"_id":"a","title":"A","desc":"","priority":0,"state":"todo","__v":0},
            {"_id":"b","title":"B","desc":"","priority":"medium","state":"inprogress","__v":0},
            {"_id":"c","title":"C","desc":"","priority":1,"state":"done","__v":0}
        ]"#,
    )
    .unwrap();
    let priorities: Vec<Priority> = cards.iter().map(|c| c.priority).collect();
    assert_eq!(priorities, [Priority::Low, Priority::Medium, Priority::Medium]);
}

#[test]
fn priority_rejects_out_of_range_index() {
    let err = serde_json::from_str::<Priority>("3").unwrap_err();
    assert!(err.to_string().contains("unknown priority `3`"), "{err}");
}

#[test]
fn priority_name_decoding_ignores_case() {
    assert_eq!(serde_json::from_str::<Priority>(r#""High""#).unwrap(), Priority::High);
}

#[test]
fn priority_serializes_as_name_even_when_decoded_from_index() {
    let priority: Priority = serde_json::from_str("1").unwrap();
    assert_eq!(serde_json::to_string(&priority).unwrap(), r#""medium""#);
}

#[test]
fn card_description_defaults_to_empty() {
    let card: Card =
        serde_json::from_str(r#"{"id":"c1","title":"T","priority":"low","status":"todo"}"#).unwrap();
    assert!(card.description.is_empty());
}

#[test]
fn card_rejects_unknown_status() {
    let result = serde_json::from_str::<Card>(
        r#"{"id":"c1","title":"T","description":"","priority":"low","status":"archived"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn new_card_serializes_create_payload() {
    let new_card = NewCard {
        title: "T".to_owned(),
        description: "D".to_owned(),
        priority: Priority::Low,
        status: Status::Todo,
    };
    let value = serde_json::to_value(&new_card).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"title": "T", "description": "D", "priority": "low", "status": "todo"})
    );
}

#[test]
fn new_card_into_card_keeps_fields() {
    let card = NewCard {
        title: "T".to_owned(),
        description: "D".to_owned(),
        priority: Priority::Medium,
        status: Status::Done,
    }
    .into_card("id-9");
    assert_eq!(card.id, "id-9");
    assert_eq!(card.priority, Priority::Medium);
    assert_eq!(card.status, Status::Done);
}
