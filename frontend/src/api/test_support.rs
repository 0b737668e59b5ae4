pub mod mock {
    use crate::api::client::test_hook::{register_mock, MockResponse, RecordedRequest, TestResponder};
    use crate::api::{ApiClient, ApiError};
    use crate::utils::storage::MemoryStore;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const PATCH: Method = Method::PATCH;
    pub const DELETE: Method = Method::DELETE;

    /// In-process HTTP double. Every client request whose URL starts with
    /// [`MockServer::base_url`] is answered here and recorded.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        received: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let server = Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}.test/api", id),
            };
            register_mock(server.base.clone(), Arc::new(server.clone()));
            server
        }

        pub fn base_url(&self) -> String {
            self.base.clone()
        }

        /// A client pointed at this server with a signed-in token store.
        pub fn client(&self) -> ApiClient {
            ApiClient::new_with_base_url(self.base_url()).with_token_store(std::rc::Rc::new(
                MemoryStore::with_tokens("stored-access", Some("stored-refresh")),
            ))
        }

        /// Registers a response. The last matching route wins.
        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.body {
                Some(body) => MockResponse::json(status, body),
                None => MockResponse::empty(status),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path: format!("/api{}", path),
                response,
            });
        }

        pub fn received(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            let full = format!("/api{}", path);
            self.received()
                .iter()
                .filter(|r| r.method == method.as_str() && r.path == full)
                .count()
        }

        pub fn last_request(&self) -> Option<RecordedRequest> {
            self.received().last().cloned()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &RecordedRequest) -> Result<MockResponse, ApiError> {
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(request.clone());

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method.as_str() == request.method && route.path == request.path)
                .cloned();

            route.map(|route| route.response).ok_or_else(|| {
                ApiError::request_failed(format!("No mock for {} {}", request.method, request.path))
            })
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        /// Path relative to the API root, e.g. `/accounts/login/`.
        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }
    }
}
