use radixroute::{Config, FullPath, InsertError, Mode, Params, Router};

use hyper::header::{ALLOW, CONTENT_TYPE, LOCATION};
use hyper::{Body, Method, Request, Response, StatusCode};

async fn echo(req: Request<Body>) -> hyper::Result<Response<Body>> {
    let params = req
        .extensions()
        .get::<Params>()
        .map(|params| {
            params
                .iter()
                .map(|p| format!("{}={}", p.key, p.value))
                .collect::<Vec<_>>()
                .join("&")
        })
        .unwrap_or_default();

    let route = req.extensions().get::<FullPath>().map(|p| p.as_str()).unwrap_or_default();

    Ok(Response::new(Body::from(format!("{} {}", route, params))))
}

fn config() -> Config {
    Config::default().mode(Mode::Test)
}

fn routes(config: Config) -> Result<Router, InsertError> {
    let mut router = Router::new(config);
    router
        .get("/", echo)?
        .get("/hello/:name", echo)?
        .get("/static/*path", echo)?
        .get("/static/index.html", echo)?
        .get("/user/:id", echo)?
        .get("/docs/", echo)?
        .get("/Contact", echo)?
        .put("/hello/:name", echo)?
        .post("/submit", echo)?;
    Ok(router)
}

fn request(method: Method, uri: &str) -> Request<Body> {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Response<Body>, String) {
    let res = router.serve(request(method, uri)).await.unwrap();
    let status = res.status();
    let (parts, body) = res.into_parts();
    let body = hyper::body::to_bytes(body).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    (status, Response::from_parts(parts, Body::empty()), body)
}

#[tokio::test]
async fn dispatches_to_handlers() {
    let router = routes(config()).unwrap();

    let (status, _, body) = send(&router, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "/ ");

    let (status, _, body) = send(&router, Method::GET, "/hello/world").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "/hello/:name name=world");

    let (_, _, body) = send(&router, Method::PUT, "/hello/again").await;
    assert_eq!(body, "/hello/:name name=again");

    let (_, _, body) = send(&router, Method::GET, "/static/a/b.png").await;
    assert_eq!(body, "/static/*path path=/a/b.png");

    let (_, _, body) = send(&router, Method::GET, "/static/index.html").await;
    assert_eq!(body, "/static/index.html ");
}

#[tokio::test]
async fn percent_decodes_params() {
    let router = routes(config()).unwrap();
    let (_, _, body) = send(&router, Method::GET, "/hello/J%C3%BCrgen+M").await;
    assert_eq!(body, "/hello/:name name=Jürgen M");

    let router = routes(config().unescape_path_values(false)).unwrap();
    let (_, _, body) = send(&router, Method::GET, "/hello/J%C3%BCrgen").await;
    assert_eq!(body, "/hello/:name name=J%C3%BCrgen");
}

#[tokio::test]
async fn trailing_slash_redirects() {
    let router = routes(config()).unwrap();

    let (status, res, _) = send(&router, Method::GET, "/user/42/").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/user/42");

    let (status, res, _) = send(&router, Method::POST, "/submit/?draft=1").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[LOCATION], "/submit?draft=1");

    let (status, res, _) = send(&router, Method::GET, "/docs").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/docs/");

    let router = routes(config().redirect_trailing_slash(false).redirect_fixed_path(false)).unwrap();
    let (status, _, _) = send(&router, Method::GET, "/user/42/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn redirect_honours_forwarded_prefix() {
    let router = routes(config()).unwrap();

    let mut req = request(Method::GET, "/docs");
    req.headers_mut().insert("x-forwarded-prefix", "/api/".parse().unwrap());

    let res = router.serve(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/api/docs/");
}

#[tokio::test]
async fn fixed_path_redirects() {
    let router = routes(config()).unwrap();

    let (status, res, _) = send(&router, Method::GET, "/contact").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/Contact");

    let (status, res, _) = send(&router, Method::GET, "/HELLO/../HELLO/Gordon").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/hello/Gordon");

    let (status, res, _) = send(&router, Method::GET, "//DOCS").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/docs/");
}

#[tokio::test]
async fn remove_extra_slash_routes_cleaned_path() {
    let router = routes(config().remove_extra_slash(true)).unwrap();

    let (status, _, body) = send(&router, Method::GET, "/hello//x/../world").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "/hello/:name name=world");
}

#[tokio::test]
async fn method_not_allowed() {
    let router = routes(config()).unwrap();

    let (status, res, body) = send(&router, Method::POST, "/hello/world").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[ALLOW], "GET, PUT, OPTIONS");
    assert_eq!(body, "405 method not allowed");

    let router = routes(config().handle_method_not_allowed(false)).unwrap();
    let (status, _, _) = send(&router, Method::POST, "/hello/world").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_method_not_allowed_gets_allow_header() {
    let mut router = routes(config()).unwrap();
    router.method_not_allowed(|_: Request<Body>| async {
        let mut res = Response::new(Body::from("nope"));
        *res.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
        Ok::<_, hyper::Error>(res)
    });

    let (status, res, body) = send(&router, Method::DELETE, "/submit").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[ALLOW], "POST, OPTIONS");
    assert_eq!(body, "nope");
}

#[tokio::test]
async fn automatic_options() {
    let router = routes(config()).unwrap();

    let (status, res, _) = send(&router, Method::OPTIONS, "/hello/world").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(res.headers()[ALLOW], "GET, PUT, OPTIONS");

    let (status, res, _) = send(&router, Method::OPTIONS, "*").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(res.headers()[ALLOW], "GET, POST, PUT, OPTIONS");

    let (status, _, _) = send(&router, Method::OPTIONS, "/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn not_found() {
    let router = routes(config()).unwrap();

    let (status, res, body) = send(&router, Method::GET, "/nothing/here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(res.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(body, "404 page not found");

    let (status, _, _) = send(&router, Method::PATCH, "/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let mut router = routes(config()).unwrap();
    router.not_found(|_: Request<Body>| async {
        let mut res = Response::new(Body::from("custom"));
        *res.status_mut() = StatusCode::NOT_FOUND;
        Ok::<_, hyper::Error>(res)
    });

    let (status, _, body) = send(&router, Method::GET, "/nothing/here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "custom");
}

#[tokio::test]
async fn connect_is_never_redirected() {
    let mut router = Router::new(config());
    router.handle(Method::CONNECT, "/tunnel", echo).unwrap();

    let res = router.serve(request(Method::CONNECT, "/tunnel/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
