//! Reqwest transport for a PostgREST endpoint (the hosted backend's table API).
//!
//! Owns URL layout, auth headers, filter encoding and status/decode error
//! mapping. Table adapters build on top of it.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::StoreError;

/// Column filter, encoded PostgREST style (`column=op.value`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Eq(&'static str, String),
    Gte(&'static str, String),
    Lte(&'static str, String),
}

impl Filter {
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Filter::Eq(column, value) => (column.to_string(), format!("eq.{value}")),
            Filter::Gte(column, value) => (column.to_string(), format!("gte.{value}")),
            Filter::Lte(column, value) => (column.to_string(), format!("lte.{value}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgrestClient {
    client: Client,
    base_url: String,
}

impl PostgrestClient {
    /// `access_token` is the signed-in user's JWT; without one, requests run
    /// with the anonymous key and row-level rules decide what is visible.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is not a valid header value or the
    /// reqwest client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: &str,
        access_token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(anon_key)?);
        let bearer = format!("Bearer {}", access_token.unwrap_or(anon_key));
        headers.insert(AUTHORIZATION, header_value(&bearer)?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|error| StoreError::Backend(error.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter],
        order: Option<&str>,
    ) -> Result<Vec<T>, StoreError> {
        let mut query = encode(filters);
        query.push(("select".to_string(), columns.to_string()));
        if let Some(order) = order {
            query.push(("order".to_string(), order.to_string()));
        }
        let response = send(self.client.get(self.table_url(table)).query(&query)).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|error| StoreError::Decode(error.to_string()))
    }

    pub async fn insert<T: Serialize + Sync>(&self, table: &str, rows: &[T]) -> Result<(), StoreError> {
        send(
            self.client
                .post(self.table_url(table))
                .header("Prefer", "return=minimal")
                .json(rows),
        )
        .await
        .map(|_| ())
    }

    pub async fn update<T: Serialize + Sync>(
        &self,
        table: &str,
        filters: &[Filter],
        patch: &T,
    ) -> Result<(), StoreError> {
        send(
            self.client
                .patch(self.table_url(table))
                .query(&encode(filters))
                .header("Prefer", "return=minimal")
                .json(patch),
        )
        .await
        .map(|_| ())
    }

    pub async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError> {
        send(self.client.delete(self.table_url(table)).query(&encode(filters)))
            .await
            .map(|_| ())
    }
}

fn header_value(value: &str) -> Result<HeaderValue, StoreError> {
    HeaderValue::from_str(value).map_err(|error| StoreError::Backend(error.to_string()))
}

fn encode(filters: &[Filter]) -> Vec<(String, String)> {
    filters.iter().map(Filter::to_query_pair).collect()
}

async fn send(request: RequestBuilder) -> Result<Response, StoreError> {
    let response = request
        .send()
        .await
        .map_err(|error| StoreError::Backend(error.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Backend(format!("{status}: {body}")))
}
