//! REST client for the hosted store's PostgREST-style surface.

use async_trait::async_trait;
use serde_json::Value;

use crate::{Filter, Store, StoreError};

/// Client for a hosted store reachable over HTTP.
///
/// Holds one long-lived [`reqwest::Client`]; construct once at startup and
/// share across all request handlers.
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            service_key: service_key.into(),
        })
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Store for RestStore {
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(table, "store select-all");
        let response = self
            .authed(self.http.get(self.endpoint(table)))
            .query(&[("select", "*")])
            .send()
            .await?;
        let rows = Self::check(response).await?.json::<Vec<Value>>().await?;
        Ok(rows)
    }

    async fn insert(&self, table: &str, record: Value) -> Result<(), StoreError> {
        tracing::debug!(table, "store insert");
        let response = self
            .authed(self.http.post(self.endpoint(table)))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, table: &str, record: Value, filter: Filter) -> Result<(), StoreError> {
        tracing::debug!(table, column = %filter.column, "store update");
        let response = self
            .authed(self.http.patch(self.endpoint(table)))
            .query(&[(filter.column.as_str(), format!("eq.{}", filter.value))])
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_table() {
        let store = RestStore::new("https://example.supabase.co", "key").unwrap();
        assert_eq!(
            store.endpoint("videos"),
            "https://example.supabase.co/rest/v1/videos"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let store = RestStore::new("https://example.supabase.co/", "key").unwrap();
        assert_eq!(
            store.endpoint("improvement_suggestions"),
            "https://example.supabase.co/rest/v1/improvement_suggestions"
        );
    }
}
