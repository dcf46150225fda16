//! `reqwest` implementation of the card store API.

use std::time::Duration;

use kanban::api::{card_endpoint, cards_endpoint, check_status, status_patch_body};
use kanban::{BoardError, Card, CardApi, NewCard, Status};

#[derive(Clone, Debug)]
pub struct ReqwestCardApi {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestCardApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }
}

fn network(err: reqwest::Error) -> BoardError {
    BoardError::Network(err.to_string())
}

impl CardApi for ReqwestCardApi {
    async fn list_cards(&self) -> Result<Vec<Card>, BoardError> {
        let resp = self
            .http
            .get(cards_endpoint(&self.base_url))
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status().as_u16())?;
        resp.json().await.map_err(network)
    }

    async fn create_card(&self, card: &NewCard) -> Result<Card, BoardError> {
        let resp = self
            .http
            .post(cards_endpoint(&self.base_url))
            .json(card)
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status().as_u16())?;
        resp.json().await.map_err(network)
    }

    async fn delete_card(&self, id: &str) -> Result<(), BoardError> {
        let resp = self
            .http
            .delete(card_endpoint(&self.base_url, id))
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status().as_u16())
    }

    async fn update_status(&self, id: &str, status: Status) -> Result<(), BoardError> {
        let resp = self
            .http
            .patch(card_endpoint(&self.base_url, id))
            .json(&status_patch_body(status))
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status().as_u16())
    }
}
