//! Thin HTTP client over `gloo-net`
//!
//! Every request carries `Authorization: Bearer <token>` when a token is in
//! storage. Responses are unwrapped from the backend envelope; non-2xx
//! statuses become [`ApiError::Http`] with the backend message when the body
//! has one. No retries and no timeouts: the caller decides what to show.

use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::{error_message_from_body, ApiEnvelope};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// `path?query` with the query serialized by `serde_qs`
pub fn path_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Decode(format!("failed to encode query: {}", e)))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

async fn send_builder(method: &str, path: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, path);
    with_auth(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_json<B: Serialize>(
    method: &str,
    path: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, path);
    let request: Request = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?;
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !ok {
        let message = error_message_from_body(&body).unwrap_or_default();
        log::warn!("HTTP {}: {}", status, message);
        if status == 401 && message.is_empty() {
            return Err(ApiError::Unauthorized);
        }
        return Err(ApiError::Http { status, message });
    }
    Ok(body)
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send_builder("GET", path, Request::get(&api_url(path))).await?;
    parse_envelope(&read_body(response).await?)?.into_result()
}

pub async fn get_query<T: DeserializeOwned, Q: Serialize>(path: &str, query: &Q) -> Result<T, ApiError> {
    get(&path_with_query(path, query)?).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json("POST", path, Request::post(&api_url(path)), body).await?;
    parse_envelope(&read_body(response).await?)?.into_result()
}

pub async fn patch<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json("PATCH", path, Request::patch(&api_url(path)), body).await?;
    parse_envelope(&read_body(response).await?)?.into_result()
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = send_builder("DELETE", path, Request::delete(&api_url(path))).await?;
    let body = read_body(response).await?;
    if body.trim().is_empty() {
        return Ok(());
    }
    parse_envelope::<serde_json::Value>(&body)?.into_unit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_movie::MovieSearchQuery;
    use contracts::shared::pagination::PageRequest;

    #[test]
    fn test_path_with_query() {
        let query = MovieSearchQuery::new("dune", PageRequest::for_page(3, 8));
        assert_eq!(
            path_with_query("/movies/search/by-name-movie", &query).unwrap(),
            "/movies/search/by-name-movie?name=dune&limit=8&offset=16"
        );
    }

    #[test]
    fn test_page_request_query() {
        assert_eq!(
            path_with_query("/movies", &PageRequest::for_page(1, 8)).unwrap(),
            "/movies?limit=8&offset=0"
        );
    }
}
