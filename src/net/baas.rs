//! Generic table client for the hosted stores.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Off the browser
//! every call reports `ApiError::Unavailable` so native builds and tests
//! never touch the network.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `ApiResult` instead of a swallowed failure, so views
//! can tell "empty result" from "call failed". There is no retry anywhere;
//! a failed call is terminal for the action that triggered it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "baas_test.rs"]
mod baas_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::Backend;

/// Failure of a remote table call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("no row in {table} with id {id}")]
    NotFound { table: String, id: String },
    #[error("remote calls are not available off the browser")]
    Unavailable,
}

pub type ApiResult<T> = Result<T, ApiError>;

/// A single column predicate, rendered into the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    Eq(&'static str, String),
    Gte(&'static str, String),
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<String>) -> Self {
        Self::Eq(column, value.into())
    }

    pub fn gte(column: &'static str, value: impl Into<String>) -> Self {
        Self::Gte(column, value.into())
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn render(&self) -> String {
        match self {
            Self::Eq(column, value) => format!("{column}=eq.{value}"),
            Self::Gte(column, value) => format!("{column}=gte.{value}"),
        }
    }
}

/// Result ordering for `fetch_all`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn render_query(filters: &[Filter], order: Option<Order>) -> String {
    let mut parts = vec!["select=*".to_owned()];
    for filter in filters {
        parts.push(filter.render());
    }
    if let Some(order) = order {
        let direction = if order.ascending { "asc" } else { "desc" };
        parts.push(format!("order={}.{direction}", order.column));
    }
    parts.join("&")
}

#[cfg(any(test, feature = "hydrate"))]
fn table_url(backend: &Backend, table: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}/{table}", backend.base_url)
    } else {
        format!("{}/{table}?{query}", backend.base_url)
    }
}

/// Fetch every row of `table` matching `filters`, optionally ordered.
pub async fn fetch_all<T: DeserializeOwned>(
    backend: &Backend,
    table: &str,
    filters: &[Filter],
    order: Option<Order>,
) -> ApiResult<Vec<T>> {
    #[cfg(feature = "hydrate")]
    {
        let url = table_url(backend, table, &render_query(filters, order));
        let resp = gloo_net::http::Request::get(&url)
            .header("apikey", backend.api_key)
            .header("Authorization", &format!("Bearer {}", backend.api_key))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                method: "GET",
                url,
                status: resp.status(),
            });
        }
        resp.json::<Vec<T>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, table, filters, order);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one row of `table` by primary key.
pub async fn fetch_by_id<T: DeserializeOwned>(backend: &Backend, table: &str, id: &str) -> ApiResult<T> {
    let rows: Vec<T> = fetch_all(backend, table, &[Filter::eq("id", id)], None).await?;
    rows.into_iter().next().ok_or_else(|| ApiError::NotFound {
        table: table.to_owned(),
        id: id.to_owned(),
    })
}

/// Insert `record` into `table` and return the stored representation.
pub async fn insert<T, B>(backend: &Backend, table: &str, record: &B) -> ApiResult<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        let url = table_url(backend, table, "");
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", backend.api_key)
            .header("Authorization", &format!("Bearer {}", backend.api_key))
            .header("Prefer", "return=representation")
            .json(record)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                method: "POST",
                url,
                status: resp.status(),
            });
        }
        let rows: Vec<T> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ApiError::Decode("empty representation".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, table, record);
        Err(ApiError::Unavailable)
    }
}

/// Apply `partial` to the row of `table` with primary key `id` and return
/// the updated representation.
pub async fn update<T, B>(backend: &Backend, table: &str, id: &str, partial: &B) -> ApiResult<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        let url = table_url(backend, table, &format!("id=eq.{id}"));
        let resp = gloo_net::http::Request::patch(&url)
            .header("apikey", backend.api_key)
            .header("Authorization", &format!("Bearer {}", backend.api_key))
            .header("Prefer", "return=representation")
            .json(partial)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status {
                method: "PATCH",
                url,
                status: resp.status(),
            });
        }
        let rows: Vec<T> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        rows.into_iter().next().ok_or_else(|| ApiError::NotFound {
            table: table.to_owned(),
            id: id.to_owned(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, table, id, partial);
        Err(ApiError::Unavailable)
    }
}
