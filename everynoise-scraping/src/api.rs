use anyhow::Context;
use log::info;
use url::Url;

use crate::everynoise::GENRE_LIST_URL;

pub struct EveryNoiseClient {
    client: reqwest::Client,
}

impl EveryNoiseClient {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
        })
    }

    /// Fetches the one-dimensional genre list page for the given scope.
    /// Any failure here is fatal to the run; there is no retry.
    pub async fn fetch_genre_list(&self, scope: &str) -> anyhow::Result<String> {
        let url = Url::parse_with_params(GENRE_LIST_URL, [("scope", scope)])?;
        info!("Requesting {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        response
            .text()
            .await
            .with_context(|| format!("While reading the response body of {url}"))
    }
}
