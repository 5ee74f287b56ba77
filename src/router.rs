//! [`Router`](crate::Router) dispatches hyper requests over one radix tree per
//! request method.
//!
//! Requests that match a route are handed to its [`Handler`] with the captured
//! [`Params`] and the registered pattern ([`FullPath`]) stored in the request
//! extensions. Everything else is answered by the router itself, according to
//! its [`Config`]:
//!
//! ```ignore
//!  no route, but one with(out) the trailing slash    301 (GET) / 307 redirect
//!  no route, but a case-insensitive match            301 (GET) / 307 redirect
//!  OPTIONS                                           200 with `Allow`
//!  route registered for other methods                405 with `Allow`
//!  anything else                                     404
//! ```
use crate::config::{Config, Mode};
use crate::error::InsertError;
use crate::params::{count_params, Params};
use crate::path::{clean, join_paths};
use crate::tree::{Lookup, Node};

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{future, ready};
use hyper::header::{self, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Body, Method, Request, Response, StatusCode};
use tracing::{debug, warn};

const ANY_METHODS: &[Method] = &[
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::HEAD,
    Method::OPTIONS,
    Method::DELETE,
    Method::CONNECT,
    Method::TRACE,
];

type BoxFuture = Pin<Box<dyn Future<Output = hyper::Result<Response<Body>>> + Send + Sync>>;

/// The registered pattern of the route that matched a request, stored in the
/// request extensions next to its [`Params`].
///
/// ```rust
/// use radixroute::FullPath;
/// use hyper::{Request, Response, Body};
///
/// async fn show(req: Request<Body>) -> hyper::Result<Response<Body>> {
///     let route = req.extensions().get::<FullPath>().map(|p| p.as_str()).unwrap_or_default();
///     Ok(Response::new(Body::from(route.to_owned())))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullPath(pub String);

impl FullPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Router dispatches requests to different handlers via configurable routes.
pub struct Router {
    trees: HashMap<Method, Node<Box<dyn Handler>>>,
    config: Config,
    max_params: usize,
    global_options: Option<Box<dyn Handler>>,
    not_found: Option<Box<dyn Handler>>,
    method_not_allowed: Option<Box<dyn Handler>>,
}

impl Router {
    /// Creates an empty router.
    pub fn new(config: Config) -> Self {
        if config.mode == Mode::Debug {
            warn!("running in debug mode, switch to release mode in production");
        }

        Self {
            trees: HashMap::new(),
            config,
            max_params: 0,
            global_options: None,
            not_found: None,
            method_not_allowed: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Insert a value into the router for a specific path at the specified method.
    /// ```rust
    /// use radixroute::Router;
    /// use hyper::{Request, Response, Body, Method};
    ///
    /// # fn main() -> Result<(), radixroute::InsertError> {
    /// let mut router = Router::default();
    /// router.handle(Method::GET, "/teapot", |_: Request<Body>| async {
    ///     Ok::<_, hyper::Error>(Response::new(Body::from("I am a teapot!")))
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn handle(
        &mut self,
        method: Method,
        path: &str,
        handler: impl Handler + 'static,
    ) -> Result<&mut Self, InsertError> {
        if !path.starts_with('/') {
            return Err(InsertError::MissingLeadingSlash { path: path.to_owned() });
        }

        self.trees
            .entry(method.clone())
            .or_insert_with(Node::new)
            .insert(path, Box::new(handler))?;

        self.max_params = self.max_params.max(count_params(path));

        if self.config.mode == Mode::Debug {
            debug!(method = %method, path, "route registered");
        }

        Ok(self)
    }

    /// Register a handler for `GET` requests
    pub fn get(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::GET, path, handler)
    }

    /// Register a handler for `HEAD` requests
    pub fn head(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::HEAD, path, handler)
    }

    /// Register a handler for `OPTIONS` requests
    pub fn options(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::OPTIONS, path, handler)
    }

    /// Register a handler for `POST` requests
    pub fn post(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::POST, path, handler)
    }

    /// Register a handler for `PUT` requests
    pub fn put(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::PUT, path, handler)
    }

    /// Register a handler for `PATCH` requests
    pub fn patch(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::PATCH, path, handler)
    }

    /// Register a handler for `DELETE` requests
    pub fn delete(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::DELETE, path, handler)
    }

    /// Register one handler for every standard method: `GET`, `POST`, `PUT`,
    /// `PATCH`, `HEAD`, `OPTIONS`, `DELETE`, `CONNECT` and `TRACE`.
    ///
    /// Either every method is registered or none is: the route is checked
    /// against all method trees before the first insert.
    pub fn any(&mut self, path: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        if !path.starts_with('/') {
            return Err(InsertError::MissingLeadingSlash { path: path.to_owned() });
        }

        for method in ANY_METHODS {
            if let Some(root) = self.trees.get(method) {
                root.check_insert(path)?;
            }
        }

        let handler = Shared(Arc::new(handler));
        for method in ANY_METHODS {
            self.handle(method.clone(), path, handler.clone())?;
        }

        Ok(self)
    }

    /// Starts a group of routes sharing the path prefix `prefix`.
    ///
    /// ```rust
    /// use radixroute::Router;
    /// use hyper::{Request, Response, Body, Method};
    ///
    /// # fn main() -> Result<(), radixroute::InsertError> {
    /// let mut router = Router::default();
    /// let mut v1 = router.group("/v1");
    /// v1.get("/users/:id", |_: Request<Body>| async {
    ///     Ok::<_, hyper::Error>(Response::new(Body::empty()))
    /// })?;
    ///
    /// let mut params = router.params_buffer();
    /// assert!(router.lookup(&Method::GET, "/v1/users/7", &mut params, false).value.is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub fn group(&mut self, prefix: &str) -> Group<'_> {
        Group {
            prefix: join_paths("/", prefix),
            router: self,
        }
    }

    /// An optional handler that is called on automatic `OPTIONS` requests.
    /// The handler is only called if `handle_options` is true and no `OPTIONS`
    /// handler for the specific path was set.
    /// The `Allow` header is added to its response unless it sets one itself.
    pub fn global_options(&mut self, handler: impl Handler + 'static) -> &mut Self {
        self.global_options = Some(Box::new(handler));
        self
    }

    /// Configurable handler which is called when no matching route is
    /// found.
    pub fn not_found(&mut self, handler: impl Handler + 'static) -> &mut Self {
        self.not_found = Some(Box::new(handler));
        self
    }

    /// A configurable handler which is called when a request
    /// cannot be routed and `handle_method_not_allowed` is true.
    /// The `Allow` header is added to its response unless it sets one itself.
    pub fn method_not_allowed(&mut self, handler: impl Handler + 'static) -> &mut Self {
        self.method_not_allowed = Some(Box::new(handler));
        self
    }

    /// A parameter buffer large enough for every registered route.
    pub fn params_buffer(&self) -> Params {
        Params::with_capacity(self.max_params)
    }

    /// Lookup allows the manual lookup of handler for a specific method and path.
    /// If the handler is not found, `tsr` tells whether a redirection to the same
    /// path with (without) a trailing slash would succeed.
    /// ```rust
    /// use radixroute::Router;
    /// use hyper::{Request, Response, Body, Method};
    ///
    /// # fn main() -> Result<(), radixroute::InsertError> {
    /// let mut router = Router::default();
    /// router.get("/home/:name", |_: Request<Body>| async {
    ///     Ok::<_, hyper::Error>(Response::new(Body::from("Welcome!")))
    /// })?;
    ///
    /// let mut params = router.params_buffer();
    /// let res = router.lookup(&Method::GET, "/home/gordon", &mut params, false);
    /// assert!(res.value.is_some());
    /// assert_eq!(res.params.by_name("name"), "gordon");
    /// assert_eq!(res.full_path, Some("/home/:name"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn lookup<'r, 'p>(
        &'r self,
        method: &Method,
        path: &str,
        params: &'p mut Params,
        unescape: bool,
    ) -> Lookup<'r, 'p, Box<dyn Handler>> {
        match self.trees.get(method) {
            Some(root) => root.get_value(path, params, unescape),
            None => Lookup::miss(params),
        }
    }

    /// Returns a list of the allowed methods for a specific path
    /// ```rust
    /// use radixroute::Router;
    /// use hyper::{Request, Response, Body, Method};
    ///
    /// # fn main() -> Result<(), radixroute::InsertError> {
    /// let mut router = Router::default();
    /// router
    ///     .get("/home", |_: Request<Body>| async {
    ///         Ok::<_, hyper::Error>(Response::new(Body::from("Welcome!")))
    ///     })?
    ///     .post("/home", |_: Request<Body>| async {
    ///         Ok::<_, hyper::Error>(Response::new(Body::from("Welcome!")))
    ///     })?;
    ///
    /// let allowed = router.allowed("/home");
    /// assert_eq!(allowed, ["GET", "POST", "OPTIONS"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn allowed(&self, path: &str) -> Vec<&str> {
        let mut params = self.params_buffer();

        let mut allowed = self
            .trees
            .iter()
            .filter(|(method, _)| **method != Method::OPTIONS)
            .filter(|(_, root)| {
                path == "*" || {
                    params.clear();
                    root.get_value(path, &mut params, false).value.is_some()
                }
            })
            .map(|(method, _)| method.as_str())
            .collect::<Vec<_>>();

        if !allowed.is_empty() {
            allowed.sort_unstable();
            allowed.push(Method::OPTIONS.as_str());
        }

        allowed
    }
}

/// Routes registered under a shared path prefix, see [`Router::group`].
///
/// Relative paths are joined to the prefix and cleaned; a trailing `/` on the
/// relative path is kept, and an empty relative path registers the prefix
/// itself.
pub struct Group<'r> {
    router: &'r mut Router,
    prefix: String,
}

impl<'r> Group<'r> {
    /// The absolute path every route of this group starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// A nested group below this one.
    pub fn group(&mut self, relative: &str) -> Group<'_> {
        Group {
            prefix: join_paths(&self.prefix, relative),
            router: &mut *self.router,
        }
    }

    pub fn handle(
        &mut self,
        method: Method,
        relative: &str,
        handler: impl Handler + 'static,
    ) -> Result<&mut Self, InsertError> {
        let path = join_paths(&self.prefix, relative);
        self.router.handle(method, &path, handler)?;
        Ok(self)
    }

    pub fn get(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::GET, relative, handler)
    }

    pub fn head(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::HEAD, relative, handler)
    }

    pub fn options(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::OPTIONS, relative, handler)
    }

    pub fn post(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::POST, relative, handler)
    }

    pub fn put(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::PUT, relative, handler)
    }

    pub fn patch(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::PATCH, relative, handler)
    }

    pub fn delete(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        self.handle(Method::DELETE, relative, handler)
    }

    pub fn any(&mut self, relative: &str, handler: impl Handler + 'static) -> Result<&mut Self, InsertError> {
        let path = join_paths(&self.prefix, relative);
        self.router.any(&path, handler)?;
        Ok(self)
    }
}

/// The default configuration: every redirect and automatic reply enabled, in
/// debug mode.
impl Default for Router {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Represents a HTTP handler function.
/// This trait is implemented for asynchronous functions that take a `Request` and return a
/// `Result<Response<Body>, hyper::Error>`
/// ```rust
/// # use radixroute::Handler;
/// # use hyper::{Request, Response, Body};
/// async fn hello(_: Request<Body>) -> Result<Response<Body>, hyper::Error> {
///     Ok(Response::new(Body::empty()))
/// }
///
/// let handler: Box<dyn Handler> = Box::new(hello);
/// ```
pub trait Handler: Send + Sync {
    fn handle(&self, req: Request<Body>) -> BoxFuture;
}

impl<F, R> Handler for F
where
    F: Fn(Request<Body>) -> R + Send + Sync,
    R: Future<Output = Result<Response<Body>, hyper::Error>> + Send + Sync + 'static,
{
    fn handle(&self, req: Request<Body>) -> BoxFuture {
        Box::pin(self(req))
    }
}

// one handler registered under several methods
struct Shared<H>(Arc<H>);

impl<H> Clone for Shared<H> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<H: Handler> Handler for Shared<H> {
    fn handle(&self, req: Request<Body>) -> BoxFuture {
        self.0.handle(req)
    }
}

#[doc(hidden)]
pub struct MakeRouterService(RouterService);

impl<T> Service<T> for MakeRouterService {
    type Response = RouterService;
    type Error = hyper::Error;
    type Future = future::Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _: T) -> Self::Future {
        let service = self.0.clone();
        future::ok(service)
    }
}

#[doc(hidden)]
#[derive(Clone)]
pub struct RouterService(Arc<Router>);

impl RouterService {
    fn new(router: Router) -> Self {
        RouterService(Arc::new(router))
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response<Body>;
    type Error = hyper::Error;
    type Future = ResponseFut;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        self.0.serve(req)
    }
}

impl Router {
    /// Converts the `Router` into a `Service` which you can serve directly with `Hyper`.
    /// If you have an existing `Service` that you want to incorporate a `Router` into, see
    /// [`Router::serve`](crate::Router::serve).
    /// ```rust,no_run
    /// # use radixroute::Router;
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// // Our router...
    /// let router = Router::default();
    ///
    /// // Convert it into a service...
    /// let service = router.into_service();
    ///
    /// // Serve with hyper
    /// hyper::Server::bind(&([127, 0, 0, 1], 3030).into())
    ///     .serve(service)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_service(self) -> MakeRouterService {
        MakeRouterService(RouterService::new(self))
    }

    /// An asynchronous function from a `Request` to a `Response`. You will generally not need to use
    /// this function directly, and instead use
    /// [`Router::into_service`](crate::Router::into_service). However, it may be useful when
    /// incorporating the router into a larger service.
    /// ```rust,no_run
    /// # use radixroute::Router;
    /// # use hyper::service::{make_service_fn, service_fn};
    /// # use hyper::{Request, Body, Server};
    /// # use std::convert::Infallible;
    /// # use std::sync::Arc;
    ///
    /// # async fn run() {
    /// let router = Arc::new(Router::default());
    ///
    /// let make_svc = make_service_fn(move |_| {
    ///     let router = router.clone();
    ///     async move {
    ///         Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
    ///             let router = router.clone();
    ///             async move { router.serve(req).await }
    ///         }))
    ///     }
    /// });
    ///
    /// let server = Server::bind(&([127, 0, 0, 1], 3000).into())
    ///     .serve(make_svc)
    ///     .await;
    /// # }
    /// ```
    pub fn serve(&self, mut req: Request<Body>) -> ResponseFut {
        let path = if self.config.remove_extra_slash {
            clean(req.uri().path())
        } else {
            req.uri().path().to_owned()
        };

        let method = req.method().clone();

        if let Some(root) = self.trees.get(&method) {
            let mut params = self.params_buffer();

            let (value, tsr, full_path) = {
                let lookup = root.get_value(&path, &mut params, self.config.unescape_path_values);
                (lookup.value, lookup.tsr, lookup.full_path)
            };

            if let Some(handler) = value {
                let full_path = FullPath(full_path.unwrap_or_default().to_owned());
                req.extensions_mut().insert(params);
                req.extensions_mut().insert(full_path);
                return ResponseFutKind::Boxed(handler.handle(req)).into();
            }

            if method != Method::CONNECT && path != "/" {
                let code = match method {
                    // Moved Permanently, request with GET method
                    Method::GET => StatusCode::MOVED_PERMANENTLY,
                    // Temporary Redirect, request with same method
                    _ => StatusCode::TEMPORARY_REDIRECT,
                };

                if tsr && self.config.redirect_trailing_slash {
                    let location = toggle_trailing_slash(&forwarded_prefix(&req, &path));
                    return redirect(&req, &path, location, code);
                }

                if self.config.redirect_fixed_path {
                    if let Some(fixed) = root.path_ignore_case(clean(&path), self.config.redirect_trailing_slash) {
                        return redirect(&req, &path, fixed, code);
                    }
                }
            }
        }

        if method == Method::OPTIONS && self.config.handle_options {
            let allow = self.allowed(&path);

            if !allow.is_empty() {
                let allow = allow.join(", ");
                return match self.global_options {
                    Some(ref handler) => ResponseFutKind::Allowed(handler.handle(req), allow).into(),
                    None => ResponseFutKind::Options(allow).into(),
                };
            }
        } else if self.config.handle_method_not_allowed {
            let allow = self.allowed(&path);

            if !allow.is_empty() {
                let allow = allow.join(", ");
                return match self.method_not_allowed {
                    Some(ref handler) => ResponseFutKind::Allowed(handler.handle(req), allow).into(),
                    None => ResponseFutKind::MethodNotAllowed(allow).into(),
                };
            }
        }

        match self.not_found {
            Some(ref handler) => ResponseFutKind::Boxed(handler.handle(req)).into(),
            None => ResponseFutKind::NotFound.into(),
        }
    }
}

// prepends the cleaned `X-Forwarded-Prefix` header, if any
fn forwarded_prefix(req: &Request<Body>, path: &str) -> String {
    let prefix = req
        .headers()
        .get("x-forwarded-prefix")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(clean);

    match prefix {
        Some(prefix) => [prefix.trim_end_matches('/'), path].concat(),
        None => path.to_owned(),
    }
}

fn toggle_trailing_slash(path: &str) -> String {
    if path.len() > 1 && path.ends_with('/') {
        path[..path.len() - 1].to_owned()
    } else {
        [path, "/"].concat()
    }
}

fn redirect(req: &Request<Body>, from: &str, mut location: String, code: StatusCode) -> ResponseFut {
    if let Some(query) = req.uri().query() {
        location.push('?');
        location.push_str(query);
    }

    debug!(code = code.as_u16(), from, to = %location, "redirecting request");
    ResponseFutKind::Redirect(location, code).into()
}

pub struct ResponseFut {
    kind: ResponseFutKind,
}

impl From<ResponseFutKind> for ResponseFut {
    fn from(kind: ResponseFutKind) -> Self {
        Self { kind }
    }
}

enum ResponseFutKind {
    Boxed(BoxFuture),
    Allowed(BoxFuture, String),
    Redirect(String, StatusCode),
    MethodNotAllowed(String),
    Options(String),
    NotFound,
}

impl Future for ResponseFut {
    type Output = hyper::Result<Response<Body>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let ready = match self.kind {
            ResponseFutKind::Boxed(ref mut fut) => ready!(fut.as_mut().poll(cx)),
            ResponseFutKind::Allowed(ref mut fut, ref allowed) => ready!(fut.as_mut().poll(cx)).map(|mut res| {
                if !res.headers().contains_key(header::ALLOW) {
                    set_header(&mut res, header::ALLOW, allowed);
                }
                res
            }),
            ResponseFutKind::Redirect(ref path, code) => {
                let mut res = Response::new(Body::empty());
                *res.status_mut() = code;
                set_header(&mut res, header::LOCATION, path);
                Ok(res)
            }
            ResponseFutKind::NotFound => Ok(plain(StatusCode::NOT_FOUND, "404 page not found")),
            ResponseFutKind::Options(ref allowed) => {
                let mut res = Response::new(Body::empty());
                set_header(&mut res, header::ALLOW, allowed);
                Ok(res)
            }
            ResponseFutKind::MethodNotAllowed(ref allowed) => {
                let mut res = plain(StatusCode::METHOD_NOT_ALLOWED, "405 method not allowed");
                set_header(&mut res, header::ALLOW, allowed);
                Ok(res)
            }
        };

        Poll::Ready(ready)
    }
}

fn plain(status: StatusCode, body: &'static str) -> Response<Body> {
    let mut res = Response::new(Body::from(body));
    *res.status_mut() = status;
    res.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    res
}

// values that are not valid header text are dropped
fn set_header(res: &mut Response<Body>, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        res.headers_mut().insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn ok(_: Request<Body>) -> hyper::Result<Response<Body>> {
        Ok(Response::new(Body::empty()))
    }

    fn router() -> Router {
        let mut router = Router::new(Config::default().mode(Mode::Test));
        router
            .get("/", ok)
            .unwrap()
            .get("/hello/:name", ok)
            .unwrap()
            .get("/static/*path", ok)
            .unwrap()
            .put("/hello/:name", ok)
            .unwrap();
        router
    }

    #[test]
    fn rejects_relative_paths() {
        let mut router = Router::new(Config::default().mode(Mode::Test));
        let err = router.get("hello", ok).err().unwrap();

        assert_eq!(err, InsertError::MissingLeadingSlash { path: "hello".to_owned() });
    }

    #[test]
    fn duplicate_routes_are_errors() {
        let mut router = router();

        assert!(matches!(router.get("/hello/:name", ok), Err(InsertError::DuplicateRoute { .. })));
        assert!(matches!(router.get("/hello/:other", ok), Err(InsertError::WildcardConflict { .. })));
        assert!(router.post("/hello/:other", ok).is_ok());
    }

    #[test]
    fn params_buffer_fits_largest_route() {
        let mut router = router();
        assert_eq!(router.params_buffer().capacity(), 1);

        // a root parameter can not sit next to `/hello` and `/static`
        assert!(matches!(router.get("/:a/:b/:c/:d", ok), Err(InsertError::ChildConflict { .. })));
        assert_eq!(router.params_buffer().capacity(), 1);

        router.get("/hello/:name/:a/*b", ok).unwrap();
        assert_eq!(router.params_buffer().capacity(), 3);
    }

    #[test]
    fn lookup_per_method() {
        let router = router();

        let mut params = router.params_buffer();
        let found = router.lookup(&Method::GET, "/static/a/b.png", &mut params, false);
        assert!(found.value.is_some());
        assert_eq!(found.params.by_name("path"), "/a/b.png");
        assert_eq!(found.full_path, Some("/static/*path"));

        let mut params = router.params_buffer();
        let missing = router.lookup(&Method::POST, "/hello/world", &mut params, false);
        assert!(missing.value.is_none());
        assert!(!missing.tsr);
    }

    #[test]
    fn allowed_methods() {
        let router = router();

        assert_eq!(router.allowed("/hello/world"), ["GET", "PUT", "OPTIONS"]);
        assert_eq!(router.allowed("/static/x"), ["GET", "OPTIONS"]);
        assert_eq!(router.allowed("*"), ["GET", "PUT", "OPTIONS"]);
        assert!(router.allowed("/nothing/here").is_empty());
    }

    #[test]
    fn any_registers_every_method() {
        let mut router = Router::new(Config::default().mode(Mode::Test));
        router.any("/ping", ok).unwrap();

        for method in &[Method::GET, Method::POST, Method::DELETE, Method::TRACE] {
            let mut params = router.params_buffer();
            assert!(router.lookup(method, "/ping", &mut params, false).value.is_some());
        }
    }

    #[test]
    fn any_is_all_or_nothing() {
        let mut router = Router::new(Config::default().mode(Mode::Test));
        router.put("/files/:name", ok).unwrap();

        assert!(matches!(router.any("/files/*path", ok), Err(InsertError::WildcardConflict { .. })));
        assert!(router.allowed("/files/x/y").is_empty());
        assert_eq!(router.allowed("*"), ["PUT", "OPTIONS"]);

        assert!(matches!(router.any("files", ok), Err(InsertError::MissingLeadingSlash { .. })));
    }

    #[test]
    fn groups_share_a_prefix() {
        let mut router = Router::new(Config::default().mode(Mode::Test));

        let mut api = router.group("/api");
        assert_eq!(api.prefix(), "/api");
        api.get("/users/:id", ok).unwrap().get("", ok).unwrap();

        let mut v1 = api.group("v1/");
        assert_eq!(v1.prefix(), "/api/v1/");
        v1.post("/items/", ok).unwrap().delete("items/:id", ok).unwrap();

        assert_eq!(router.allowed("/api/users/7"), ["GET", "OPTIONS"]);
        assert_eq!(router.allowed("/api"), ["GET", "OPTIONS"]);
        assert_eq!(router.allowed("/api/v1/items/"), ["POST", "OPTIONS"]);
        assert_eq!(router.allowed("/api/v1/items/3"), ["DELETE", "OPTIONS"]);

        let mut params = router.params_buffer();
        let found = router.lookup(&Method::GET, "/api/users/7", &mut params, false);
        assert_eq!(found.full_path, Some("/api/users/:id"));
    }

    #[test]
    fn config_is_kept() {
        let router = Router::new(Config::default().mode(Mode::Release).remove_extra_slash(true));

        assert_eq!(router.config().mode, Mode::Release);
        assert!(router.config().remove_extra_slash);
        assert!(router.config().redirect_trailing_slash);
    }

    #[test]
    fn trailing_slash_toggle() {
        assert_eq!(toggle_trailing_slash("/foo/"), "/foo");
        assert_eq!(toggle_trailing_slash("/foo"), "/foo/");
    }
}
