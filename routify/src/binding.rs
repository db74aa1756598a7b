//! Replaying routers onto [`axum`].
//!
//! Every route becomes a single axum handler running the route's [`Handler`]s
//! in order. A handler either answers or hands the request on to the next one.
//! When the whole chain hands the request on, the route answers `404`.

use crate::{Method, Server};

pub type Request = hyper::Request<hyper::Body>;
pub type Response = axum::response::Response;
pub type BoxFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Flow> + Send>>;

pub enum Flow {
    Next(Request),
    Done(Response),
}

#[derive(Clone)]
pub struct Handler(std::sync::Arc<dyn Fn(Request) -> BoxFuture + Send + Sync>);

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Handler")
    }
}

pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Flow> + Send + 'static,
{
    Handler(std::sync::Arc::new(move |request| -> BoxFuture {
        Box::pin(f(request))
    }))
}

/// A handler that always answers.
pub fn endpoint<F, Fut, R>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = R> + Send + 'static,
    R: axum::response::IntoResponse,
{
    handler(move |request| {
        let response = f(request);
        async move { Flow::Done(response.await.into_response()) }
    })
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("path `{0}` does not start with `/`")]
    InvalidPath(String),
    #[error("`{method}` is already registered for `{path}`")]
    Overlap { method: Method, path: String },
    #[error("path `{path}` conflicts with a registered path")]
    Conflict { path: String },
}

/// A [`Server`] building an [`axum::Router`].
pub struct Axum {
    paths: std::collections::BTreeMap<String, axum::routing::MethodRouter>,
    registered: std::collections::HashSet<(Method, String)>,
    matcher: matchit::Router<()>,
}

impl Axum {
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: std::collections::BTreeMap::new(),
            registered: std::collections::HashSet::new(),
            matcher: matchit::Router::new(),
        }
    }

    #[must_use]
    pub fn into_router(self) -> axum::Router {
        tracing::debug!(paths = self.paths.len(), "Building axum router");
        self.paths
            .into_iter()
            .fold(axum::Router::new(), |router, (path, method_router)| {
                router.route(&path, method_router)
            })
    }

    fn register(&mut self, method: Method, path: &str, handlers: &[Handler]) -> Result<(), Error> {
        let path = if path.is_empty() { "/" } else { path };

        if !path.starts_with('/') {
            return Err(Error::InvalidPath(String::from(path)));
        }

        // axum panics on these when the router is built
        if !self.paths.contains_key(path) {
            if let Err(error) = self.matcher.insert(path, ()) {
                tracing::debug!(%path, %error, "Rejecting conflicting path");
                return Err(Error::Conflict {
                    path: String::from(path),
                });
            }
        }

        if !self.registered.insert((method, String::from(path))) {
            return Err(Error::Overlap {
                method,
                path: String::from(path),
            });
        }

        let filter = match method {
            Method::Del => axum::routing::MethodFilter::DELETE,
            Method::Get => axum::routing::MethodFilter::GET,
            Method::Patch => axum::routing::MethodFilter::PATCH,
            Method::Post => axum::routing::MethodFilter::POST,
            Method::Put => axum::routing::MethodFilter::PUT,
        };

        let chain = std::sync::Arc::<[Handler]>::from(handlers);
        let route = move |request: Request| run(chain.clone(), request);

        tracing::trace!(%method, %path, handlers = handlers.len(), "Binding axum route");

        let method_router = self
            .paths
            .remove(path)
            .unwrap_or_else(axum::routing::MethodRouter::new);
        self.paths
            .insert(String::from(path), method_router.on(filter, route));

        Ok(())
    }
}

async fn run(chain: std::sync::Arc<[Handler]>, mut request: Request) -> Response {
    use axum::response::IntoResponse;

    for handler in chain.iter() {
        match (handler.0)(request).await {
            Flow::Next(next) => request = next,
            Flow::Done(response) => return response,
        }
    }

    tracing::debug!(path = %request.uri().path(), "Handler chain fell through");
    hyper::StatusCode::NOT_FOUND.into_response()
}

impl Default for Axum {
    fn default() -> Self {
        Self::new()
    }
}

impl Server<Handler> for Axum {
    type Error = Error;

    fn del(&mut self, path: &str, handlers: &[Handler]) -> Result<(), Self::Error> {
        self.register(Method::Del, path, handlers)
    }

    fn get(&mut self, path: &str, handlers: &[Handler]) -> Result<(), Self::Error> {
        self.register(Method::Get, path, handlers)
    }

    fn patch(&mut self, path: &str, handlers: &[Handler]) -> Result<(), Self::Error> {
        self.register(Method::Patch, path, handlers)
    }

    fn post(&mut self, path: &str, handlers: &[Handler]) -> Result<(), Self::Error> {
        self.register(Method::Post, path, handlers)
    }

    fn put(&mut self, path: &str, handlers: &[Handler]) -> Result<(), Self::Error> {
        self.register(Method::Put, path, handlers)
    }
}
