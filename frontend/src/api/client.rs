use reqwest::{header, multipart, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{
    api::types::{ApiError, UploadFile},
    config,
    state::session::SessionStore,
};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(SessionStore::for_target())
    }

    pub fn with_session(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn authorize(&self, builder: RequestBuilder, request_id: &str) -> RequestBuilder {
        let builder = builder.header(REQUEST_ID_HEADER, request_id);
        match self.session.token() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Issues one request and returns the raw body of a 2xx response.
    /// Everything else is normalized into an `ApiError` carrying either the
    /// server's message or `fallback`.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        fallback: &str,
        configure: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let request_id = Uuid::new_v4().to_string();
        let builder = self.authorize(self.client.request(method.clone(), &url), &request_id);
        let request = configure(builder).build().map_err(|err| {
            log::warn!("{} {} could not be built: {}", method, path, err);
            ApiError::request_failed(fallback)
        })?;

        let (status, body) = self.dispatch(request).await.map_err(|err| {
            log::warn!("{} {} failed [{}]: {}", method, path, request_id, err);
            ApiError::request_failed(fallback)
        })?;

        if (200..300).contains(&status) {
            Ok(body)
        } else {
            let error = ApiError::from_response(status, &body, fallback);
            log::warn!(
                "{} {} returned {} [{}]: {}",
                method,
                path,
                status,
                request_id,
                error.message
            );
            Err(error)
        }
    }

    #[cfg(not(test))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<(u16, String), reqwest::Error> {
        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }

    #[cfg(test)]
    async fn dispatch(&self, request: reqwest::Request) -> Result<(u16, String), ApiError> {
        let responder = find_mock(request.url().as_str()).ok_or_else(|| {
            ApiError::request_failed(format!("No mock registered for {}", request.url()))
        })?;
        let response = responder.respond(&request)?;
        Ok((response.status, response.body))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let body = self.execute(Method::GET, path, fallback, |b| b).await?;
        decode(&body, fallback)
    }

    pub(crate) async fn get_json_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let body = self
            .execute(Method::GET, path, fallback, |b| b.query(query))
            .await?;
        decode(&body, fallback)
    }

    pub(crate) async fn get_text(&self, path: &str, fallback: &str) -> Result<String, ApiError> {
        self.execute(Method::GET, path, fallback, |b| b).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let raw = self
            .execute(method, path, fallback, |b| b.json(body))
            .await?;
        decode(&raw, fallback)
    }

    /// For endpoints whose success body carries nothing the caller needs.
    pub(crate) async fn send_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, fallback, |b| match body {
            Some(body) => b.json(body),
            None => b,
        })
        .await
        .map(|_| ())
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        file: UploadFile,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let mut part = multipart::Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(mime) = file.content_type.as_deref() {
            part = part
                .mime_str(mime)
                .map_err(|_| ApiError::validation(format!("Unsupported file type: {}", mime)))?;
        }
        let form = multipart::Form::new().part("file", part);
        let raw = self
            .execute(Method::POST, path, fallback, |b| b.multipart(form))
            .await?;
        decode(&raw, fallback)
    }
}

fn decode<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, ApiError> {
    let payload = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(payload).map_err(|err| {
        log::warn!("Failed to parse response: {}", err);
        ApiError::unknown(fallback)
    })
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
pub trait TestResponder {
    fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
}

#[cfg(test)]
thread_local! {
    static MOCKS: std::cell::RefCell<Vec<(String, std::sync::Arc<dyn TestResponder>)>> =
        std::cell::RefCell::new(Vec::new());
}

#[cfg(test)]
pub fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    MOCKS.with(|mocks| {
        let mut mocks = mocks.borrow_mut();
        mocks.retain(|(existing, _)| existing != &base_url);
        mocks.push((base_url, responder));
    });
}

#[cfg(test)]
fn find_mock(url: &str) -> Option<std::sync::Arc<dyn TestResponder>> {
    MOCKS.with(|mocks| {
        mocks
            .borrow()
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    })
}
