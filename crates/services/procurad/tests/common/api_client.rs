use std::{error::Error, str::FromStr};

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

pub struct ApiClient {
    pub url: &'static str,
}

impl ApiClient {
    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> T {
        let url = Url::from_str(&self.path(endpoint)).unwrap();
        serde_json::from_str(
            &reqwest::get(url)
                .await
                .expect("Failed to send http request")
                .text()
                .await
                .expect("Failed to get response text"),
        )
        .expect("Couldn't Parse Value")
    }

    pub async fn get_with_token<T: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        token: &str,
    ) -> Result<(StatusCode, Option<T>), Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint)).unwrap();
        let response = client.get(url).bearer_auth(token).send().await?;
        let status = response.status();
        let text = response.text().await?;

        Ok((status, serde_json::from_str(&text).ok()))
    }

    pub async fn post<T: Into<reqwest::Body>, U: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        body: T,
    ) -> Result<U, Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint)).unwrap();

        let response = client
            .post(url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&response)?)
    }

    /// Like `post`, but also reports the status code so tests can assert on
    /// error responses.
    pub async fn post_raw<T: Into<reqwest::Body>>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        body: T,
    ) -> Result<(StatusCode, serde_json::Value), Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint)).unwrap();

        let response = client
            .post(url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let value = serde_json::from_str(&response.text().await?)?;

        Ok((status, value))
    }

    pub async fn post_with_token(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        token: &str,
    ) -> Result<(StatusCode, serde_json::Value), Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint)).unwrap();

        let response = client.post(url).bearer_auth(token).send().await?;
        let status = response.status();
        let value = serde_json::from_str(&response.text().await?)?;

        Ok((status, value))
    }

    pub async fn put<T: Into<reqwest::Body>>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        body: T,
    ) -> Result<(StatusCode, serde_json::Value), Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint)).unwrap();

        let response = client
            .put(url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let value = serde_json::from_str(&response.text().await?)?;

        Ok((status, value))
    }

    pub async fn delete(&self, client: &reqwest::Client, endpoint: &str) -> StatusCode {
        let url = Url::from_str(&self.path(endpoint)).unwrap();
        client
            .delete(url)
            .send()
            .await
            .expect("Failed to send delete request")
            .status()
    }
}
