//! # radixroute
//!
//! radixroute is a lightweight high performance HTTP request router for
//! [hyper](https://hyper.rs).
//!
//! Routes are stored in one compressing radix tree per request method, so a
//! lookup costs time proportional to the length of the path, not to the number
//! of registered routes. Children are ordered by the number of routes beneath
//! them, which keeps the hot branches first.
//!
//! ## Features
//!
//! **Only explicit matches:** a request matches exactly one route or none. A
//! static segment and a parameter can not share a position, so there are no
//! priority rules like *longest match* or *first registered, first matched*.
//! The one exception is a catch-all: static routes below it are tried first and
//! the catch-all takes everything else.
//!
//! **Path auto-correction:** besides detecting the missing or additional
//! trailing slash at no extra cost, the router can also fix wrong cases and
//! remove superfluous path elements (like `../` or `//`).
//!
//! **Parameters in your routing pattern:** give the path segment a name and the
//! router delivers the value to you, percent-decoded if you like.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use radixroute::{Config, Mode, Params, Router};
//! use hyper::{Request, Response, Body, Error};
//!
//! async fn index(_: Request<Body>) -> Result<Response<Body>, Error> {
//!     Ok(Response::new("Hello, World!".into()))
//! }
//!
//! async fn hello(req: Request<Body>) -> Result<Response<Body>, Error> {
//!     let user = req.extensions().get::<Params>().map(|p| p.by_name("user")).unwrap_or_default();
//!     Ok(Response::new(format!("Hello, {}", user).into()))
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut router = Router::new(Config::default().mode(Mode::Release));
//!     router.get("/", index)?.get("/hello/:user", hello)?;
//!
//!     hyper::Server::bind(&([127, 0, 0, 1], 3000).into())
//!         .serve(router.into_service())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Route groups
//!
//! Routes sharing a path prefix can be registered through a [`Group`]:
//!
//! ```ignore
//! let mut api = router.group("/api");
//! api.get("/users/:id", user)?;      // GET /api/users/:id
//! api.group("v1").post("/items/", create)?; // POST /api/v1/items/
//! ```
//!
//! ### Named parameters
//!
//! `:user` is a *named parameter*. The values are accessible via
//! `req.extensions().get::<Params>()`. Named parameters only match a single
//! path segment:
//!
//! ```ignore
//! Pattern: /user/:user
//!
//!  /user/gordon              match
//!  /user/you                 match
//!  /user/gordon/profile      no match
//!  /user/                    no match
//! ```
//!
//! **Note:** you can not register the patterns `/user/new` and `/user/:user`
//! for the same request method; registration fails with an
//! [`InsertError`]. The routing of different request methods is independent
//! from each other.
//!
//! ### Catch-All parameters
//!
//! The second type are *catch-all* parameters and have the form `*name`. Like
//! the name suggests, they match everything, including the `/` before them.
//! Therefore they must always be at the **end** of the pattern:
//!
//! ```ignore
//! Pattern: /src/*filepath
//!
//!  /src/                     match: filepath="/"
//!  /src/somefile.rs          match: filepath="/somefile.rs"
//!  /src/subdir/somefile.rs   match: filepath="/subdir/somefile.rs"
//!  /src                      no match, but the router would redirect
//! ```
//!
//! The parameters are kept in a [`Params`] list, in the order they appear in
//! the path. A value can be read by name, or by position with its key:
//!
//! ```rust
//! # use radixroute::Params;
//! # let mut params = Params::default();
//! # params.push("user", "gordon");
//! let user = params.by_name("user"); // defined by :user or *user
//! let first_key = &params[0].key;
//! let first_value = &params[0].value;
//! ```
//!
//! ## Automatic OPTIONS responses and CORS
//!
//! Automatic replies to `OPTIONS` requests can be customized, e.g. to answer
//! CORS preflight requests, with the [`Router::global_options`] handler. The
//! `Allow` header is filled in for it:
//!
//! ```rust
//! use radixroute::Router;
//! use hyper::{Request, Response, Body, Error};
//!
//! async fn global_options(_: Request<Body>) -> Result<Response<Body>, Error> {
//!     let mut res = Response::new(Body::empty());
//!     res.headers_mut().insert("Access-Control-Allow-Origin", "*".parse().unwrap());
//!     Ok(res)
//! }
//!
//! let mut router = Router::default();
//! router.global_options(global_options);
//! ```
//!
//! ### Not Found Handler
//!
//! Requests that match no route, and no other method's route when
//! `handle_method_not_allowed` is set, are answered with `404 page not found`
//! unless a [`Router::not_found`] handler is registered:
//!
//! ```rust
//! use radixroute::Router;
//! use hyper::{Request, Response, Body, StatusCode};
//!
//! let mut router = Router::default();
//! router.not_found(|_: Request<Body>| async {
//!     let mut res = Response::new(Body::from("nothing here"));
//!     *res.status_mut() = StatusCode::NOT_FOUND;
//!     Ok::<_, hyper::Error>(res)
//! });
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod params;
pub mod path;
pub mod tree;

#[doc(hidden)]
pub mod router;

#[doc(inline)]
pub use config::{Config, Mode};
#[doc(inline)]
pub use error::{InsertError, ParseModeError};
#[doc(inline)]
pub use params::{Param, Params};
#[doc(inline)]
pub use router::{FullPath, Group, Handler, Router};
#[doc(inline)]
pub use tree::{Lookup, Node};
