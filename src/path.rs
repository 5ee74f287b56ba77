/// Returns the canonical URL path for `p`, eliminating `.` and `..` elements.
///
/// The following rules are applied iteratively until no further processing can be done:
/// 1. Replace multiple slashes with a single slash.
/// 2. Eliminate each `.` path name element (the current directory).
/// 3. Eliminate each inner `..` path name element (the parent directory)
///    along with the non-`..` element that precedes it.
/// 4. Eliminate `..` elements that begin a rooted path:
///    that is, replace `/..` by `/` at the beginning of a path.
///
/// A trailing slash is preserved. If the result of this process is an empty
/// string, `/` is returned.
///
/// ```rust
/// use radixroute::path::clean;
///
/// assert_eq!(clean("//abc/./def/../ghi/"), "/abc/ghi/");
/// ```
pub fn clean(p: &str) -> String {
    if p.is_empty() {
        return "/".to_owned();
    }

    let bytes = p.as_bytes();
    let n = bytes.len();

    let mut buf = String::with_capacity(n + 1);
    buf.push('/');

    // reading index; the leading slash is implicit
    let mut r = if bytes[0] == b'/' { 1 } else { 0 };
    let mut trailing = n > 1 && bytes[n - 1] == b'/';

    while r < n {
        match bytes[r] {
            // empty path element
            b'/' => r += 1,
            // trailing `.` element
            b'.' if r + 1 == n => {
                trailing = true;
                r += 1;
            }
            // `.` element
            b'.' if bytes[r + 1] == b'/' => r += 2,
            // `..` element: remove to last `/`
            b'.' if bytes[r + 1] == b'.' && (r + 2 == n || bytes[r + 2] == b'/') => {
                r += 3;

                if buf.len() > 1 {
                    let last = buf.rfind('/').unwrap_or(0);
                    buf.truncate(last.max(1));
                }
            }
            // real path element
            _ => {
                if buf.len() > 1 {
                    buf.push('/');
                }

                let start = r;
                while r < n && bytes[r] != b'/' {
                    r += 1;
                }
                buf.push_str(&p[start..r]);
            }
        }
    }

    if trailing && buf.len() > 1 {
        buf.push('/');
    }

    buf
}

/// Joins a route `relative` to the absolute path `base`, the way route groups
/// build their paths.
///
/// The result is cleaned. A trailing slash survives only if `relative` ends
/// with one, and an empty `relative` returns `base` unchanged.
///
/// ```rust
/// use radixroute::path::join_paths;
///
/// assert_eq!(join_paths("/api", "users/:id"), "/api/users/:id");
/// assert_eq!(join_paths("/api", "users/"), "/api/users/");
/// ```
pub fn join_paths(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_owned();
    }

    let mut joined = clean(&format!("{}/{}", base, relative));

    if relative.ends_with('/') {
        if !joined.ends_with('/') {
            joined.push('/');
        }
    } else if joined.len() > 1 && joined.ends_with('/') {
        joined.pop();
    }

    joined
}
