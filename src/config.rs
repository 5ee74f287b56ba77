//! Dispatcher settings.
//!
//! A [`Config`] is handed to [`Router::new`](crate::Router::new) and fixed for
//! the lifetime of the router. There is no process-wide state: two routers in
//! the same process may run with different settings.
use crate::error::ParseModeError;

use std::fmt;
use std::str::FromStr;

/// How verbose the router is about its own setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every registered route is logged, and a warning is emitted on startup.
    Debug,
    Release,
    Test,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Debug
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Debug => "debug",
            Mode::Release => "release",
            Mode::Test => "test",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    /// An empty string selects the default, [`Mode::Debug`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "debug" => Ok(Mode::Debug),
            "release" => Ok(Mode::Release),
            "test" => Ok(Mode::Test),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// The behaviour of [`Router::serve`](crate::Router::serve) for requests that
/// do not match a route directly.
///
/// ```rust
/// use radixroute::{Config, Mode};
///
/// let config = Config::default()
///     .mode(Mode::Release)
///     .redirect_fixed_path(false)
///     .remove_extra_slash(true);
///
/// assert!(config.redirect_trailing_slash);
/// assert!(!config.redirect_fixed_path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,

    /// Enables automatic redirection if the current route can't be matched but a
    /// handler for the path with (without) the trailing slash exists.
    /// For example if `/foo/` is requested but a route only exists for `/foo`, the
    /// client is redirected to `/foo` with HTTP status code 301 for `GET` requests
    /// and 307 for all other request methods.
    pub redirect_trailing_slash: bool,

    /// If enabled, the router tries to fix the current request path, if no
    /// handle is registered for it.
    /// First superfluous path elements like `../` or `//` are removed.
    /// Afterwards the router does a case-insensitive lookup of the cleaned path.
    /// If a handle can be found for this route, the router makes a redirection
    /// to the corrected path with status code 301 for `GET` requests and 307 for
    /// all other request methods.
    /// For example `/FOO` and `/..//Foo` could be redirected to `/foo`.
    /// `redirect_trailing_slash` is independent of this option.
    pub redirect_fixed_path: bool,

    /// If enabled, the router checks if another method is allowed for the
    /// current route, if the current request can not be routed.
    /// If this is the case, the request is answered with `MethodNotAllowed`
    /// and HTTP status code 405.
    /// If no other Method is allowed, the request is delegated to the `NotFound`
    /// handler.
    pub handle_method_not_allowed: bool,

    /// If enabled, the router automatically replies to `OPTIONS` requests.
    /// Custom `OPTIONS` handlers take priority over automatic replies.
    pub handle_options: bool,

    /// Cleans the request path before the lookup, so `/a//b/../c` is routed
    /// as `/a/c` without a redirect.
    pub remove_extra_slash: bool,

    /// Percent-decode parameter values.
    pub unescape_path_values: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            redirect_trailing_slash: true,
            redirect_fixed_path: true,
            handle_method_not_allowed: true,
            handle_options: true,
            remove_extra_slash: false,
            unescape_path_values: true,
        }
    }
}

impl Config {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn redirect_trailing_slash(mut self, enabled: bool) -> Self {
        self.redirect_trailing_slash = enabled;
        self
    }

    pub fn redirect_fixed_path(mut self, enabled: bool) -> Self {
        self.redirect_fixed_path = enabled;
        self
    }

    pub fn handle_method_not_allowed(mut self, enabled: bool) -> Self {
        self.handle_method_not_allowed = enabled;
        self
    }

    pub fn handle_options(mut self, enabled: bool) -> Self {
        self.handle_options = enabled;
        self
    }

    pub fn remove_extra_slash(mut self, enabled: bool) -> Self {
        self.remove_extra_slash = enabled;
        self
    }

    pub fn unescape_path_values(mut self, enabled: bool) -> Self {
        self.unescape_path_values = enabled;
        self
    }
}
