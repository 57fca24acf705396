use http::StatusCode;
use serde::de::DeserializeOwned;

pub struct TestResponse {
    response: reqwest::Response,
}

impl TestResponse {
    pub(super) fn new(response: reqwest::Response) -> Self {
        Self { response }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        self.response.json().await.expect("body is not valid json")
    }
}
