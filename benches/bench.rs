use criterion::{black_box, criterion_group, criterion_main, Criterion};

use radixroute::path::clean;
use radixroute::{Node, Params};

// path, result
fn clean_tests() -> Vec<(&'static str, &'static str)> {
    vec![
        ("/", "/"),
        ("/abc", "/abc"),
        ("/a/b/c/", "/a/b/c/"),
        ("abc/def", "/abc/def"),
        ("/abc//def//ghi", "/abc/def/ghi"),
        ("///abc", "/abc"),
        ("/abc/./def", "/abc/def"),
        ("/abc/.", "/abc/"),
        ("../../abc", "/abc"),
        ("/abc/def/../ghi/../jkl", "/abc/jkl"),
        ("/abc/def/../../../ghi/jkl/../../../mno", "/mno"),
        ("abc/../../././../def", "/def"),
    ]
}

fn github_routes() -> Node<&'static str> {
    let routes = [
        "/authorizations",
        "/authorizations/:id",
        "/applications/:client_id/tokens/:access_token",
        "/events",
        "/repos/:owner/:repo/events",
        "/networks/:owner/:repo/events",
        "/orgs/:org/events",
        "/users/:user/received_events",
        "/users/:user/received_events/public",
        "/users/:user/events",
        "/users/:user/events/public",
        "/users/:user/events/orgs/:org",
        "/feeds",
        "/notifications",
        "/repos/:owner/:repo/notifications",
        "/notifications/threads/:id",
        "/notifications/threads/:id/subscription",
        "/repos/:owner/:repo/stargazers",
        "/users/:user/starred",
        "/user/starred",
        "/user/starred/:owner/:repo",
        "/repos/:owner/:repo/subscribers",
        "/users/:user/subscriptions",
        "/user/subscriptions",
        "/gists",
        "/gists/:id",
        "/gists/:id/star",
        "/repos/:owner/:repo/git/blobs/:sha",
        "/repos/:owner/:repo/git/commits/:sha",
        "/repos/:owner/:repo/git/refs",
        "/repos/:owner/:repo/git/tags/:sha",
        "/repos/:owner/:repo/issues",
        "/repos/:owner/:repo/issues/:number",
        "/repos/:owner/:repo/issues/:number/comments",
        "/repos/:owner/:repo/pulls",
        "/repos/:owner/:repo/pulls/:number/files",
        "/search/repositories",
        "/search/code",
        "/users/:user",
        "/user",
        "/static/*filepath",
        "/static/favicon.ico",
    ];

    let mut root = Node::new();
    for route in &routes {
        if let Err(err) = root.insert(*route, *route) {
            panic!("{}", err);
        }
    }
    root
}

fn bench_clean(c: &mut Criterion) {
    let tests = clean_tests();

    c.bench_function("path_clean", |b| {
        b.iter(|| {
            for (path, _) in &tests {
                black_box(clean(black_box(path)));
            }
        })
    });

    let long = format!("//{}/b/..", "a".repeat(1000));
    c.bench_function("path_clean_long", |b| b.iter(|| clean(black_box(&long))));
}

fn bench_lookup(c: &mut Criterion) {
    let root = github_routes();
    let requests = [
        "/authorizations",
        "/user/starred/rust-lang/rust",
        "/repos/rust-lang/rust/issues/42/comments",
        "/users/gordon/events/orgs/rust-lang",
        "/static/css/site.css",
        "/static/favicon.ico",
    ];

    c.bench_function("lookup_github", |b| {
        let mut params = Params::with_capacity(3);
        b.iter(|| {
            for path in &requests {
                params.clear();
                black_box(root.get_value(black_box(path), &mut params, false).value);
            }
        })
    });

    c.bench_function("lookup_ignore_case", |b| {
        b.iter(|| root.path_ignore_case(black_box("/REPOS/rust-lang/rust/ISSUES/42/Comments/"), true))
    });
}

criterion_group!(benches, bench_clean, bench_lookup);
criterion_main!(benches);
