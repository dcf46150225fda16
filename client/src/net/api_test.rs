use futures::executor::block_on;

use super::*;

#[test]
fn default_api_uses_relative_paths() {
    let api = HttpCardApi::default();
    assert_eq!(api.cards_url(), "/api/cards");
    assert_eq!(api.card_url("abc"), "/api/cards/abc");
}

#[test]
fn absolute_base_is_joined_without_double_slash() {
    let api = HttpCardApi::new("https://trello.example/");
    assert_eq!(api.base_url(), "https://trello.example/");
    assert_eq!(api.cards_url(), "https://trello.example/api/cards");
    assert_eq!(api.card_url("a b"), "https://trello.example/api/cards/a%20b");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_stubs_report_network_failure() {
    let api = HttpCardApi::default();
    let err = block_on(api.list_cards()).unwrap_err();
    assert_eq!(err, BoardError::Network("not available on server".to_owned()));
    assert!(block_on(api.delete_card("x")).is_err());
    assert!(block_on(api.update_status("x", Status::Done)).is_err());
}
