use super::{response::TestResponse, user::UserLike};
use reqwest::header::AUTHORIZATION;
use serde::Serialize;

pub struct RequestBuilder {
    builder: reqwest::RequestBuilder,
}

impl RequestBuilder {
    pub(super) fn new(builder: reqwest::RequestBuilder) -> Self {
        Self { builder }
    }

    pub fn user(mut self, user: &impl UserLike) -> Self {
        self.builder = self
            .builder
            .header(AUTHORIZATION, format!("Bearer {}", user.access_token()));
        self
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    pub fn json(mut self, body: &impl Serialize) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    pub async fn send(self) -> TestResponse {
        let response = self.builder.send().await.expect("failed to send request");
        TestResponse::new(response)
    }
}
