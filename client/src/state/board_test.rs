use kanban::{Card, NoticeLevel, Priority, Status};

use super::*;

fn card(id: &str, status: Status) -> Card {
    Card {
        id: id.to_owned(),
        title: id.to_owned(),
        description: String::new(),
        priority: Priority::High,
        status,
    }
}

#[test]
fn board_store_starts_empty() {
    let store = BoardStore::new();
    assert_eq!(store.read(|s| s.cards().len()), Some(0));
    assert_eq!(store.read(|s| s.loaded), Some(false));
}

#[test]
fn board_store_update_is_visible_to_reads() {
    let store = BoardStore::new();
    store.update(|s| s.replace_cards(vec![card("a", Status::Todo), card("b", Status::Done)]));
    assert_eq!(store.read(|s| s.column_len(Status::Done)), Some(1));
    assert_eq!(store.signal().with_untracked(|s| s.cards().len()), 2);
}

#[test]
fn board_store_update_returns_closure_result() {
    let store = BoardStore::new();
    let id = store.update(|s| s.push_notice(NoticeLevel::Info, "hello"));
    assert_eq!(id, Some(1));
}

#[test]
fn board_store_copies_share_state() {
    let store = BoardStore::new();
    let copy = store;
    copy.update(|s| s.push_card(card("x", Status::InProgress)));
    assert_eq!(store.read(|s| s.column_len(Status::InProgress)), Some(1));
}
