//! REST client for the `tables/` endpoints of a mobile service.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::TableClientConfig;
use crate::entity::EntityData;
use crate::error::{ClientError, Result};
use crate::outcome::{InsertOutcome, QueryOutcome};

const APPLICATION_KEY_HEADER: &str = "X-ZUMO-APPLICATION";
const MASTER_KEY_HEADER: &str = "X-ZUMO-MASTER";
const JSON_CONTENT: &str = "application/json";

/// Client for the table endpoints of one mobile service.
///
/// Each operation performs exactly one request/response round trip; the only
/// state held between calls is the immutable configuration and the HTTP
/// connection pool. Cloning is cheap and clones share the pool, so one client
/// can be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct TableClient {
    http: Client,
    config: TableClientConfig,
}

impl TableClient {
    /// Create a client from its configuration.
    ///
    /// The authentication headers are attached as defaults on the underlying
    /// HTTP client: `X-ZUMO-APPLICATION` and `X-ZUMO-MASTER` are each sent
    /// iff the corresponding key is configured, along with
    /// `Accept: application/json` on every request.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidCredential`] when a configured key is
    /// not a legal header value, or [`ClientError::Transport`] when the HTTP
    /// client cannot be built.
    pub fn new(config: TableClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT));
        if let Some(key) = &config.application_key {
            headers.insert(APPLICATION_KEY_HEADER, HeaderValue::from_str(key)?);
        }
        if let Some(key) = &config.master_key {
            headers.insert(MASTER_KEY_HEADER, HeaderValue::from_str(key)?);
        }

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    /// Insert an entity into a table.
    ///
    /// POSTs the serialized entity to `tables/{table}`; `None` sends a
    /// bodyless POST. On HTTP 201 the `id` assigned by the service is
    /// returned in [`InsertOutcome::Created`]; a 201 whose body carries no
    /// usable id falls through to [`InsertOutcome::Failed`].
    ///
    /// # Errors
    /// [`ClientError::MasterKeyRequired`] before any I/O when `noscript` is
    /// set without a master key; [`ClientError::Transport`] when the request
    /// itself fails.
    #[instrument(skip(self, entity))]
    pub async fn insert<E: Serialize>(
        &self,
        table: &str,
        entity: Option<&E>,
        noscript: bool,
    ) -> Result<InsertOutcome> {
        let url = self.table_url(table, None, None, noscript)?;
        debug!(url = %url, "inserting entity");

        let mut request = self.http.post(&url);
        if let Some(entity) = entity {
            request = request.header(CONTENT_TYPE, JSON_CONTENT).json(entity);
        }

        let response = request.send().await?;
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Ok(InsertOutcome::Unauthorized),
            StatusCode::CREATED => {
                let body = response.text().await?;
                match created_id(&body) {
                    Some(id) => {
                        info!(id = %id, "entity created");
                        Ok(InsertOutcome::Created { id })
                    }
                    None => Ok(InsertOutcome::failed(status)),
                }
            }
            _ => Ok(InsertOutcome::failed(status)),
        }
    }

    /// Delete an entity from a table.
    ///
    /// The raw status code is returned for success and failure alike; the
    /// caller inspects it.
    ///
    /// # Errors
    /// Same pre-network and transport errors as [`TableClient::insert`].
    #[instrument(skip(self))]
    pub async fn delete(&self, table: &str, entity_id: &str, noscript: bool) -> Result<StatusCode> {
        let url = self.table_url(table, Some(entity_id), None, noscript)?;
        debug!(url = %url, "deleting entity");

        let response = self.http.delete(&url).send().await?;
        Ok(response.status())
    }

    /// Update an entity in place.
    ///
    /// PATCHes the serialized entity to `tables/{table}/{id}`, where the id
    /// comes from the entity itself. Like delete, the raw status code is
    /// returned unconditionally.
    ///
    /// # Errors
    /// Same pre-network and transport errors as [`TableClient::insert`].
    #[instrument(skip(self, entity), fields(id = %entity.entity_id()))]
    pub async fn update<E: EntityData>(
        &self,
        table: &str,
        entity: &E,
        noscript: bool,
    ) -> Result<StatusCode> {
        let url = self.table_url(table, Some(entity.entity_id()), None, noscript)?;
        debug!(url = %url, "updating entity");

        let response = self
            .http
            .patch(&url)
            .header(CONTENT_TYPE, JSON_CONTENT)
            .json(entity)
            .send()
            .await?;
        Ok(response.status())
    }

    /// Query a table.
    ///
    /// The query string is appended verbatim, so the service's OData-style
    /// operators (`$top`, `$filter`, …) pass through untouched. On HTTP 200
    /// the raw body text is returned for the caller to parse.
    ///
    /// # Errors
    /// Same pre-network and transport errors as [`TableClient::insert`].
    #[instrument(skip(self))]
    pub async fn query(
        &self,
        table: &str,
        query: Option<&str>,
        noscript: bool,
    ) -> Result<QueryOutcome> {
        let url = self.table_url(table, None, query, noscript)?;
        debug!(url = %url, "querying table");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Ok(QueryOutcome::Unauthorized),
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(QueryOutcome::Results { body })
            }
            _ => Ok(QueryOutcome::failed(status)),
        }
    }

    /// Build the request URL for one operation.
    ///
    /// `noscript=true` requires the master key and is joined with `&` when a
    /// query string is already present, with `?` otherwise.
    fn table_url(
        &self,
        table: &str,
        entity_id: Option<&str>,
        query: Option<&str>,
        noscript: bool,
    ) -> Result<String> {
        let mut url = format!("{}{}", self.config.base_url, table);
        if let Some(id) = entity_id {
            url.push('/');
            url.push_str(id);
        }

        let mut has_query = false;
        if let Some(query) = query {
            if !query.is_empty() {
                url.push('?');
                url.push_str(query);
                has_query = true;
            }
        }

        if noscript {
            if self.config.master_key.is_none() {
                return Err(ClientError::MasterKeyRequired);
            }
            url.push_str(if has_query { "&noscript=true" } else { "?noscript=true" });
        }

        Ok(url)
    }
}

/// The four table operations, as a seam for callers that want to substitute
/// a test double. [`TableClient`] implements it by delegation; nothing inside
/// the crate consumes it.
#[async_trait]
pub trait TableOperations {
    /// Insert an entity into a table.
    async fn insert<E>(
        &self,
        table: &str,
        entity: Option<&E>,
        noscript: bool,
    ) -> Result<InsertOutcome>
    where
        E: Serialize + Sync;

    /// Delete an entity by id.
    async fn delete(&self, table: &str, entity_id: &str, noscript: bool) -> Result<StatusCode>;

    /// Update an entity in place.
    async fn update<E>(&self, table: &str, entity: &E, noscript: bool) -> Result<StatusCode>
    where
        E: EntityData + Sync;

    /// Query a table with an optional raw query string.
    async fn query(&self, table: &str, query: Option<&str>, noscript: bool)
        -> Result<QueryOutcome>;
}

#[async_trait]
impl TableOperations for TableClient {
    async fn insert<E>(
        &self,
        table: &str,
        entity: Option<&E>,
        noscript: bool,
    ) -> Result<InsertOutcome>
    where
        E: Serialize + Sync,
    {
        TableClient::insert(self, table, entity, noscript).await
    }

    async fn delete(&self, table: &str, entity_id: &str, noscript: bool) -> Result<StatusCode> {
        TableClient::delete(self, table, entity_id, noscript).await
    }

    async fn update<E>(&self, table: &str, entity: &E, noscript: bool) -> Result<StatusCode>
    where
        E: EntityData + Sync,
    {
        TableClient::update(self, table, entity, noscript).await
    }

    async fn query(
        &self,
        table: &str,
        query: Option<&str>,
        noscript: bool,
    ) -> Result<QueryOutcome> {
        TableClient::query(self, table, query, noscript).await
    }
}

/// Extract the `id` member from a creation response body.
///
/// Returns `None` when the body is not a JSON object carrying a usable `id`;
/// non-string ids are stringified.
fn created_id(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("id")? {
        serde_json::Value::String(id) => Some(id.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
