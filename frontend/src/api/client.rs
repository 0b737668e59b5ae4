use reqwest::{multipart::Form, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::ApiError,
    config::{self, ApiEndpoints},
    utils::storage::{default_token_store, TokenStore},
};

/// The three logical backend API groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiGroup {
    Accounts,
    Reports,
    Core,
}

impl ApiGroup {
    pub fn base_url(self, endpoints: &ApiEndpoints) -> &str {
        match self {
            Self::Accounts => &endpoints.accounts,
            Self::Reports => &endpoints.reports,
            Self::Core => &endpoints.core,
        }
    }
}

/// Which token, if any, goes into the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bearer {
    /// Whatever access token is currently stored.
    Session,
    /// A token held outside storage, such as the pending two-factor token.
    Token(String),
    Anonymous,
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: Option<ApiEndpoints>,
    tokens: Rc<dyn TokenStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoints: None,
            tokens: default_token_store(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoints: Some(ApiEndpoints::from_root(&base_url.into())),
            tokens: default_token_store(),
        }
    }

    pub fn with_token_store(mut self, tokens: Rc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn token_store(&self) -> Rc<dyn TokenStore> {
        Rc::clone(&self.tokens)
    }

    async fn resolved_endpoints(&self) -> ApiEndpoints {
        match &self.endpoints {
            Some(endpoints) => endpoints.clone(),
            None => config::await_api_endpoints().await,
        }
    }

    pub async fn group_url(&self, group: ApiGroup, path: &str) -> String {
        let endpoints = self.resolved_endpoints().await;
        let base = group.base_url(&endpoints).trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    fn bearer_token(&self, bearer: &Bearer) -> Option<String> {
        match bearer {
            Bearer::Session => self.tokens.access_token(),
            Bearer::Token(token) => Some(token.clone()),
            Bearer::Anonymous => None,
        }
    }

    async fn builder(
        &self,
        method: Method,
        group: ApiGroup,
        path: &str,
        bearer: &Bearer,
    ) -> RequestBuilder {
        let url = self.group_url(group, path).await;
        let builder = self.client.request(method, url);
        match self.bearer_token(bearer) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Falha ao preparar pedido: {}", e)))?;
        let method = request.method().clone();
        let url = request.url().to_string();

        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = test_hook::find_responder(&url) {
                let recorded = test_hook::RecordedRequest::from_request(&request);
                let response = responder.respond(&recorded)?;
                return Ok(RawResponse {
                    status: response.status,
                    body: response.body,
                });
            }
        }

        let response = self.client.execute(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            ApiError::request_failed(format!("Falha de comunicação com o servidor: {}", e))
        })?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(format!("Falha ao ler resposta: {}", e)))?
            .to_vec();
        Ok(RawResponse { status, body })
    }

    async fn send(
        &self,
        method: Method,
        group: ApiGroup,
        path: &str,
        body: Option<&Value>,
        bearer: &Bearer,
    ) -> Result<RawResponse, ApiError> {
        let mut builder = self.builder(method.clone(), group, path, bearer).await;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = self.execute(builder).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let error = ApiError::from_response(response.status, &response.body);
            log::error!(
                "{} {:?}{} -> {} {}",
                method,
                group,
                path,
                response.status,
                error.error
            );
            Err(error)
        }
    }

    fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
        serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::parse(format!("Resposta inválida do servidor: {}", e)))
    }

    /// Sends a JSON request against `group` and decodes the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        group: ApiGroup,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        self.request_with(method, group, path, body, Bearer::Session)
            .await
    }

    pub async fn request_with<T: DeserializeOwned>(
        &self,
        method: Method,
        group: ApiGroup,
        path: &str,
        body: Option<Value>,
        bearer: Bearer,
    ) -> Result<T, ApiError> {
        let response = self
            .send(method, group, path, body.as_ref(), &bearer)
            .await?;
        Self::decode(&response)
    }

    /// Like [`request`](Self::request) but ignores the response body.
    pub async fn request_empty(
        &self,
        method: Method,
        group: ApiGroup,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.send(method, group, path, body.as_ref(), &Bearer::Session)
            .await
            .map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(&self, group: ApiGroup, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, group, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        group: ApiGroup,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, group, path, Some(to_body(body)?))
            .await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        group: ApiGroup,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, group, path, Some(to_body(body)?))
            .await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        group: ApiGroup,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, group, path, Some(to_body(body)?))
            .await
    }

    pub async fn delete(&self, group: ApiGroup, path: &str) -> Result<(), ApiError> {
        self.request_empty(Method::DELETE, group, path, None).await
    }

    /// Sends a multipart form. The body is never logged.
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        group: ApiGroup,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let builder = self
            .builder(method.clone(), group, path, &Bearer::Session)
            .await
            .multipart(form);
        let response = self.execute(builder).await?;
        if !response.is_success() {
            let error = ApiError::from_response(response.status, &response.body);
            log::error!("{} {:?}{} -> {}", method, group, path, response.status);
            return Err(error);
        }
        Self::decode(&response)
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::parse(format!("Falha ao serializar pedido: {}", e)))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_selects_matching_base_url() {
        let endpoints = ApiEndpoints::from_root("http://api.test/api");
        assert_eq!(ApiGroup::Accounts.base_url(&endpoints), "http://api.test/api/accounts");
        assert_eq!(ApiGroup::Reports.base_url(&endpoints), "http://api.test/api/relatorios");
        assert_eq!(ApiGroup::Core.base_url(&endpoints), "http://api.test/api/candidaturas");
    }

    #[test]
    fn raw_response_success_range() {
        assert!(RawResponse { status: 204, body: vec![] }.is_success());
        assert!(!RawResponse { status: 400, body: vec![] }.is_success());
    }
}
