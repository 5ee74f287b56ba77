//! The compressing radix tree that stores the routes of one request method.
//!
//! Each [`Node`] consumes a byte prefix of the request path. Static children
//! are found through the parent's `indices`, which holds the first byte of
//! every static child in the same order as `children`. A wildcard child, if
//! any, is always the last child and is not listed in `indices`.
//!
//! Catch-all routes are stored behind an intermediate node with an empty path
//! that the parent indexes on `/`:
//!
//! ```text
//! /files            indices: "/"
//! └── ""            catch-all anchor, wild_child
//!     ├── /readme   static routes below the catch-all, tried first
//!     └── /*path    catch-all, holds the value
//! ```
use crate::error::InsertError;
use crate::params::Params;

use std::borrow::Cow;
use std::mem;

use percent_encoding::percent_decode;

/// The types of nodes the tree can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Anything else
    Static,
    /// The root of a method tree
    Root,
    /// A route parameter, ex: `/:id`.
    Param,
    /// A catch-all parameter, ex: `/*file`
    CatchAll,
}

/// A radix tree used for URL path matching.
pub struct Node<T> {
    path: Vec<u8>,
    node_type: NodeType,
    wild_child: bool,
    indices: Vec<u8>,
    children: Vec<Node<T>>,
    value: Option<T>,
    priority: u32,
    full_path: String,
}

/// The outcome of [`Node::get_value`].
#[derive(Debug)]
pub struct Lookup<'n, 'p, T> {
    /// The value registered for the matched route, `None` if nothing matched.
    pub value: Option<&'n T>,
    /// The parameters captured along the way.
    pub params: &'p Params,
    /// A route exists for the path with the trailing slash added or removed.
    pub tsr: bool,
    /// The registered pattern of the matched route.
    pub full_path: Option<&'n str>,
}

impl<'n, 'p, T> Lookup<'n, 'p, T> {
    /// A lookup that matched nothing and has no redirect to suggest.
    pub fn miss(params: &'p Params) -> Self {
        Self {
            value: None,
            params,
            tsr: false,
            full_path: None,
        }
    }
}

struct Found<'n, T> {
    value: Option<&'n T>,
    tsr: bool,
    full_path: Option<&'n str>,
}

impl<'n, T> Found<'n, T> {
    fn hit(node: &'n Node<T>) -> Self {
        Self {
            value: node.value.as_ref(),
            tsr: false,
            full_path: Some(&node.full_path),
        }
    }

    fn miss(tsr: bool) -> Self {
        Self {
            value: None,
            tsr,
            full_path: None,
        }
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            node_type: NodeType::Static,
            wild_child: false,
            indices: Vec::new(),
            children: Vec::new(),
            value: None,
            priority: 0,
            full_path: String::new(),
        }
    }

    fn with_full_path(full_path: &str) -> Self {
        Self {
            full_path: full_path.to_owned(),
            ..Self::new()
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// The empty-path node every catch-all hangs from.
    fn is_catch_all_anchor(&self) -> bool {
        self.node_type == NodeType::CatchAll && self.wild_child
    }

    /// The wildcard child, which is always stored last.
    fn wildcard(&self) -> Option<&Node<T>> {
        if self.wild_child {
            self.children.last()
        } else {
            None
        }
    }

    /// Registers `value` under the route pattern `route`.
    ///
    /// ```rust
    /// use radixroute::tree::Node;
    /// use radixroute::Params;
    ///
    /// let mut root = Node::new();
    /// root.insert("/hello/:name", "hello").unwrap();
    ///
    /// let mut params = Params::with_capacity(1);
    /// let lookup = root.get_value("/hello/world", &mut params, false);
    /// assert_eq!(lookup.value, Some(&"hello"));
    /// assert_eq!(lookup.params.by_name("name"), "world");
    /// ```
    pub fn insert(&mut self, route: impl Into<String>, value: T) -> Result<(), InsertError> {
        let route = route.into();
        validate(&route)?;

        // indices of the children the route descends through, applied to the
        // priorities once the route is in place
        let mut steps = Vec::new();
        self.insert_route(&route, value, &mut steps)?;
        self.bump_priorities(&steps);

        Ok(())
    }

    /// Fails exactly when [`Node::insert`] would, leaving the tree untouched.
    pub(crate) fn check_insert(&self, route: &str) -> Result<(), InsertError> {
        self.shape().insert(route, ())
    }

    // the same tree without its values
    fn shape(&self) -> Node<()> {
        Node {
            path: self.path.clone(),
            node_type: self.node_type,
            wild_child: self.wild_child,
            indices: self.indices.clone(),
            children: self.children.iter().map(Node::shape).collect(),
            value: self.value.as_ref().map(|_| ()),
            priority: self.priority,
            full_path: self.full_path.clone(),
        }
    }

    fn insert_route(&mut self, route: &str, value: T, steps: &mut Vec<usize>) -> Result<(), InsertError> {
        let full = route.as_bytes();
        let mut path = full;

        // the tree is empty
        if self.path.is_empty() && self.children.is_empty() && self.value.is_none() {
            self.insert_child(path, route, value)?;
            self.node_type = NodeType::Root;
            return Ok(());
        }

        let mut consumed = 0;
        let mut current = self;

        loop {
            let i = longest_common_prefix(path, &current.path);

            // the stored path diverges from the new one, split the node
            if i < current.path.len() {
                let prefix = String::from_utf8_lossy(&full[..consumed + i]).into_owned();
                current.split(i, prefix);
            }

            // exact match, this node should be empty
            if i == path.len() {
                if current.value.is_some() {
                    return Err(InsertError::DuplicateRoute { path: route.to_owned() });
                }

                current.value = Some(value);
                current.full_path = route.to_owned();
                return Ok(());
            }

            path = &path[i..];
            consumed += current.path.len();
            let next = path[0];

            // `/` after param
            if current.node_type == NodeType::Param && next == b'/' && current.children.len() == 1 {
                steps.push(0);
                current = &mut current.children[0];
                continue;
            }

            // a second catch-all at the same position
            if current.is_catch_all_anchor() && path.get(1) == Some(&b'*') {
                return Err(current.catch_all_conflict(path, route));
            }

            // find a static child that matches the next path byte
            if let Some(i) = current.indices.iter().position(|&c| c == next) {
                steps.push(i);
                current = &mut current.children[i];
                continue;
            }

            if next != b':' && next != b'*' {
                // a parameter child matches every segment, static routes next to it
                // would be unreachable
                if current.wild_child && !current.is_catch_all_anchor() {
                    return Err(current.wildcard_conflict(path, route));
                }

                current.indices.push(next);
                let child = current.add_child(Node::with_full_path(route));
                steps.push(child);
                return current.children[child].insert_child(path, route, value);
            }

            // inserting a wildcard, and this node already has one
            if current.wild_child {
                let last = current.children.len() - 1;
                let wildcard = &current.children[last];
                let len = wildcard.path.len();

                let matches = wildcard.node_type == NodeType::Param
                    && path.starts_with(&wildcard.path)
                    // check for longer wildcard, e.g. :name and :names
                    && (path.len() == len || path[len] == b'/');

                if !matches {
                    return Err(current.wildcard_conflict(path, route));
                }

                steps.push(last);
                current = &mut current.children[last];
                continue;
            }

            return current.insert_child(path, route, value);
        }
    }

    // moves everything past `at` into a new single child
    fn split(&mut self, at: usize, full_path: String) {
        let child = Node {
            path: self.path.split_off(at),
            node_type: match self.node_type {
                NodeType::Root => NodeType::Static,
                other => other,
            },
            wild_child: self.wild_child,
            indices: mem::take(&mut self.indices),
            children: mem::take(&mut self.children),
            value: self.value.take(),
            priority: self.priority,
            full_path: mem::replace(&mut self.full_path, full_path),
        };

        self.indices = vec![child.path[0]];
        self.children = vec![child];
        self.wild_child = false;
    }

    // adds a child node, keeping the wildcard at the end
    fn add_child(&mut self, child: Node<T>) -> usize {
        let len = self.children.len();

        if self.wild_child && len > 0 {
            self.children.insert(len - 1, child);
            len - 1
        } else {
            self.children.push(child);
            len
        }
    }

    fn bump_priorities(&mut self, steps: &[usize]) {
        self.priority += 1;

        let mut current = self;
        for &i in steps {
            let i = current.update_child_priority(i);
            current = &mut current.children[i];
        }
    }

    // increments priority of the given child and reorders if necessary.
    //
    // returns the new index of the child
    fn update_child_priority(&mut self, i: usize) -> usize {
        self.children[i].priority += 1;

        // the wildcard child is not indexed and stays last
        if i >= self.indices.len() {
            return i;
        }

        let priority = self.children[i].priority;
        let mut updated = i;
        while updated > 0 && self.children[updated - 1].priority < priority {
            self.children.swap(updated - 1, updated);
            self.indices.swap(updated - 1, updated);
            updated -= 1;
        }

        updated
    }

    // inserts the remainder of a route, creating wildcard nodes as needed
    fn insert_child(&mut self, mut path: &[u8], route: &str, value: T) -> Result<(), InsertError> {
        let mut current = self;

        loop {
            let (wildcard, i) = match find_wildcard(path, route)? {
                Some(found) => found,
                // no wildcard, simply use the current node
                None => {
                    current.path = path.to_vec();
                    current.value = Some(value);
                    current.full_path = route.to_owned();
                    return Ok(());
                }
            };

            if wildcard[0] == b':' {
                // a parameter at this position would shadow the existing children
                if !current.children.is_empty() {
                    return Err(InsertError::ChildConflict {
                        wildcard: String::from_utf8_lossy(wildcard).into_owned(),
                        path: route.to_owned(),
                    });
                }

                // insert prefix before the current wildcard
                if i > 0 {
                    current.path = path[..i].to_vec();
                    path = &path[i..];
                }

                let child = Node {
                    path: wildcard.to_vec(),
                    node_type: NodeType::Param,
                    priority: 1,
                    ..Node::with_full_path(route)
                };

                current.wild_child = true;
                current.children = vec![child];
                current = &mut current.children[0];

                // if the route doesn't end with the wildcard, then there
                // will be another subroute starting with '/'
                if wildcard.len() < path.len() {
                    path = &path[wildcard.len()..];

                    let child = Node {
                        priority: 1,
                        ..Node::with_full_path(route)
                    };

                    current.children = vec![child];
                    current = &mut current.children[0];
                    continue;
                }

                // otherwise we're done. Insert the value in the new leaf
                current.value = Some(value);
                return Ok(());
            }

            if i + wildcard.len() != path.len() {
                return Err(InsertError::CatchAllNotAtEnd { path: route.to_owned() });
            }

            let leaf_path = [&b"/"[..], wildcard].concat();

            // the `/` before the catch-all is either the last byte of this node
            // or part of the remaining path
            let existing = if i == 0 {
                if current.path.last() != Some(&b'/') {
                    return Err(InsertError::CatchAllWithoutSlash { path: route.to_owned() });
                }

                let at = current.path.len() - 1;
                let prefix = route[..route.len() - path.len() - 1].to_owned();
                current.split(at, prefix);

                // routes already stored below `/` stay reachable next to the catch-all
                current.children.pop().filter(|node| node.value.is_some() || !node.children.is_empty())
            } else {
                if path[i - 1] != b'/' {
                    return Err(InsertError::CatchAllWithoutSlash { path: route.to_owned() });
                }

                if !current.children.is_empty() {
                    return Err(InsertError::ChildConflict {
                        wildcard: String::from_utf8_lossy(wildcard).into_owned(),
                        path: route.to_owned(),
                    });
                }

                current.path = path[..i - 1].to_vec();
                None
            };

            let leaf = Node {
                path: leaf_path,
                node_type: NodeType::CatchAll,
                value: Some(value),
                priority: 1,
                ..Node::with_full_path(route)
            };

            let mut anchor = Node {
                node_type: NodeType::CatchAll,
                wild_child: true,
                priority: 1,
                ..Node::with_full_path(route)
            };

            if let Some(existing) = existing {
                anchor.priority += existing.priority;
                anchor.indices.push(existing.path[0]);
                anchor.children.push(existing);
            }
            anchor.children.push(leaf);

            current.indices = vec![b'/'];
            current.children = vec![anchor];
            current.wild_child = false;
            return Ok(());
        }
    }

    fn wildcard_conflict(&self, path: &[u8], route: &str) -> InsertError {
        let wildcard = self.children.last().map_or(&[][..], |child| &child.path[..]);

        let segment = match path.iter().position(|&c| c == b'/') {
            Some(end) if end > 0 => &path[..end],
            _ => path,
        };

        let start = route.len() - path.len();
        let prefix = [&route.as_bytes()[..start], wildcard].concat();

        InsertError::WildcardConflict {
            segment: String::from_utf8_lossy(segment).into_owned(),
            path: route.to_owned(),
            wildcard: String::from_utf8_lossy(wildcard).into_owned(),
            prefix: String::from_utf8_lossy(&prefix).into_owned(),
        }
    }

    fn catch_all_conflict(&self, path: &[u8], route: &str) -> InsertError {
        match self.children.last() {
            Some(leaf) if leaf.path == path => InsertError::DuplicateRoute { path: route.to_owned() },
            _ => self.wildcard_conflict(path, route),
        }
    }
}

impl<T> Node<T> {
    /// Returns the value registered for `path` along with its parameters.
    ///
    /// Parameters are appended to `params` in the order they appear in the
    /// path; values are percent-decoded when `unescape` is set. If nothing
    /// matches, `value` is `None` and `tsr` tells whether the path with the
    /// trailing slash added or removed would have matched.
    pub fn get_value<'n, 'p>(&'n self, path: &str, params: &'p mut Params, unescape: bool) -> Lookup<'n, 'p, T> {
        let found = self.find(path.as_bytes(), params, unescape);

        Lookup {
            value: found.value,
            params,
            tsr: found.tsr,
            full_path: found.full_path,
        }
    }

    fn find<'n>(&'n self, mut path: &[u8], params: &mut Params, unescape: bool) -> Found<'n, T> {
        let mut current = self;

        // the most recent catch-all passed on the way down, with the path and
        // number of parameters at that point
        let mut fallback: Option<(&'n Node<T>, &[u8], usize)> = None;

        // only a `/` was left when leaving the parent, which holds a value
        let mut slash_parent = false;

        let tsr = 'walk: loop {
            let prefix = &current.path[..];

            if path == prefix {
                // we should have reached the node containing the value
                if current.value.is_some() {
                    return Found::hit(current);
                }

                if path == b"/" && current.wild_child && current.node_type == NodeType::Root {
                    break 'walk true;
                }

                // no value found, check if a value for this path with a trailing slash exists
                let tsr = current
                    .indices
                    .iter()
                    .position(|&c| c == b'/')
                    .map(|i| &current.children[i])
                    .map_or(false, |child| {
                        (child.path.len() == 1 && child.value.is_some())
                            || (child.is_catch_all_anchor()
                                && child.wildcard().map_or(false, |leaf| leaf.value.is_some()))
                    });

                break 'walk tsr || slash_parent;
            }

            if path.len() > prefix.len() && path.starts_with(prefix) {
                path = &path[prefix.len()..];

                let next = path[0];
                if let Some(i) = current.indices.iter().position(|&c| c == next) {
                    if current.wild_child {
                        fallback = Some((current, path, params.len()));
                    }

                    slash_parent = path == b"/" && current.value.is_some();
                    current = &current.children[i];
                    continue 'walk;
                }

                let wildcard = match current.wildcard() {
                    Some(wildcard) => wildcard,
                    // nothing found, a trailing slash redirect is possible if a
                    // value exists for the path without it
                    None => break 'walk path == b"/" && current.value.is_some(),
                };

                current = wildcard;
                match current.node_type {
                    NodeType::Param => {
                        let end = path.iter().position(|&c| c == b'/').unwrap_or(path.len());
                        params.push(param_name(&current.path[1..]), decode(&path[..end], unescape));

                        // more segments follow the parameter
                        if end < path.len() {
                            if let Some(child) = current.children.first() {
                                path = &path[end..];
                                slash_parent = path == b"/" && current.value.is_some();
                                current = child;
                                continue 'walk;
                            }

                            break 'walk path.len() == end + 1;
                        }

                        if current.value.is_some() {
                            return Found::hit(current);
                        }

                        // a value for the path with a trailing slash
                        let tsr = match current.children.as_slice() {
                            [child] => child.path == b"/" && child.value.is_some(),
                            _ => false,
                        };

                        break 'walk tsr;
                    }
                    NodeType::CatchAll => {
                        params.push(param_name(&current.path[2..]), decode(path, unescape));
                        return Found::hit(current);
                    }
                    NodeType::Static | NodeType::Root => break 'walk false,
                }
            }

            // nothing found, recommend a redirect if the path is this node's
            // path without the trailing slash
            break 'walk slash_parent
                || (prefix.len() == path.len() + 1
                    && prefix[path.len()] == b'/'
                    && prefix.starts_with(path)
                    && current.value.is_some());
        };

        // a static branch dead-ended below a catch-all, which takes the rest of the path
        if let Some((anchor, rest, len)) = fallback {
            if let Some(leaf) = anchor.wildcard() {
                params.truncate(len);
                params.push(param_name(&leaf.path[2..]), decode(rest, unescape));
                return Found::hit(leaf);
            }
        }

        Found::miss(tsr)
    }
}

impl<T> Node<T> {
    /// Makes a case-insensitive lookup of `path` and returns the path as it
    /// is registered, if a route exists.
    ///
    /// Letters are compared with ASCII case folding, any other byte must match
    /// exactly. Parameter values are copied from `path` unchanged. If
    /// `fix_trailing_slash` is set, a missing or superfluous trailing slash is
    /// corrected as well.
    ///
    /// ```rust
    /// use radixroute::tree::Node;
    ///
    /// let mut root = Node::new();
    /// root.insert("/users/:id/Profile", ()).unwrap();
    ///
    /// assert_eq!(root.path_ignore_case("/USERS/Gordon/profile/", true).as_deref(), Some("/users/Gordon/Profile"));
    /// assert_eq!(root.path_ignore_case("/USERS/Gordon/profile/", false), None);
    /// ```
    pub fn path_ignore_case(&self, path: impl AsRef<str>, fix_trailing_slash: bool) -> Option<String> {
        let path = path.as_ref().as_bytes();
        let mut buf = Vec::with_capacity(path.len() + 1);

        if self.find_ignore_case(path, &mut buf, fix_trailing_slash) {
            String::from_utf8(buf).ok()
        } else {
            None
        }
    }

    // appends the corrected path to `buf`; on failure `buf` is left as it was
    fn find_ignore_case(&self, path: &[u8], buf: &mut Vec<u8>, fix_trailing_slash: bool) -> bool {
        let len = self.path.len();

        if path.len() < len || !path[..len].eq_ignore_ascii_case(&self.path) {
            // nothing found, the path with a trailing slash might exist
            if fix_trailing_slash
                && path.len() + 1 == len
                && self.path[path.len()] == b'/'
                && path.eq_ignore_ascii_case(&self.path[..path.len()])
                && self.value.is_some()
            {
                buf.extend_from_slice(&self.path);
                return true;
            }

            return false;
        }

        let start = buf.len();
        buf.extend_from_slice(&self.path);
        let path = &path[len..];

        if self.find_ignore_case_below(path, buf, fix_trailing_slash) {
            return true;
        }

        buf.truncate(start);
        false
    }

    fn find_ignore_case_below(&self, path: &[u8], buf: &mut Vec<u8>, fix_trailing_slash: bool) -> bool {
        if path.is_empty() {
            if self.value.is_some() {
                return true;
            }

            // no value found, try to fix the path by adding a trailing slash
            if fix_trailing_slash {
                let slash_child = self
                    .indices
                    .iter()
                    .position(|&c| c == b'/')
                    .map(|i| &self.children[i]);

                if let Some(child) = slash_child {
                    if (child.path.len() == 1 && child.value.is_some())
                        || (child.is_catch_all_anchor() && child.wildcard().map_or(false, |leaf| leaf.value.is_some()))
                    {
                        buf.push(b'/');
                        return true;
                    }
                }
            }

            return false;
        }

        // static children first, every child whose index folds to the next byte
        for (i, &c) in self.indices.iter().enumerate() {
            if c.eq_ignore_ascii_case(&path[0]) && self.children[i].find_ignore_case(path, buf, fix_trailing_slash) {
                return true;
            }
        }

        if let Some(wildcard) = self.wildcard() {
            match wildcard.node_type {
                NodeType::Param => {
                    let end = path.iter().position(|&c| c == b'/').unwrap_or(path.len());
                    let start = buf.len();
                    buf.extend_from_slice(&path[..end]);

                    if end < path.len() {
                        if let Some(child) = wildcard.children.first() {
                            if child.find_ignore_case(&path[end..], buf, fix_trailing_slash) {
                                return true;
                            }
                        }

                        // drop the superfluous trailing slash
                        if fix_trailing_slash && path.len() == end + 1 && wildcard.value.is_some() {
                            return true;
                        }
                    } else {
                        if wildcard.value.is_some() {
                            return true;
                        }

                        if fix_trailing_slash {
                            if let [child] = wildcard.children.as_slice() {
                                if child.path == b"/" && child.value.is_some() {
                                    buf.push(b'/');
                                    return true;
                                }
                            }
                        }
                    }

                    buf.truncate(start);
                }
                NodeType::CatchAll => {
                    buf.extend_from_slice(path);
                    return true;
                }
                NodeType::Static | NodeType::Root => {}
            }
        }

        // nothing found, try to fix the path by removing the trailing slash
        fix_trailing_slash && path == b"/" && self.value.is_some()
    }
}

#[cfg(test)]
impl<T> Node<T> {
    // recomputes the route count of every subtree and compares it with the
    // stored priority
    pub(crate) fn check_priorities(&self) -> Result<u32, (u32, u32)> {
        let mut priority = 0;
        for child in &self.children {
            priority += child.check_priorities()?;
        }

        if self.value.is_some() {
            priority += 1;
        }

        if self.priority != priority {
            return Err((self.priority, priority));
        }

        Ok(priority)
    }

    // every priority in the tree, depth first
    pub(crate) fn priorities(&self) -> Vec<u32> {
        let mut out = vec![self.priority];
        for child in &self.children {
            out.extend(child.priorities());
        }
        out
    }
}

fn longest_common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

// searches for a wildcard segment, returning it along with its start index
fn find_wildcard<'p>(path: &'p [u8], route: &str) -> Result<Option<(&'p [u8], usize)>, InsertError> {
    let start = match path.iter().position(|&c| c == b':' || c == b'*') {
        Some(start) => start,
        None => return Ok(None),
    };

    let end = path[start + 1..]
        .iter()
        .position(|&c| c == b'/')
        .map_or(path.len(), |end| start + 1 + end);

    let wildcard = &path[start..end];

    if wildcard[1..].iter().any(|&c| c == b':' || c == b'*') {
        return Err(InsertError::TooManyWildcards {
            wildcard: String::from_utf8_lossy(wildcard).into_owned(),
            path: route.to_owned(),
        });
    }

    if wildcard.len() < 2 {
        return Err(InsertError::UnnamedWildcard { path: route.to_owned() });
    }

    Ok(Some((wildcard, start)))
}

// checks every wildcard of a route before the tree is touched
fn validate(route: &str) -> Result<(), InsertError> {
    let bytes = route.as_bytes();
    let mut names: Vec<&[u8]> = Vec::new();
    let mut offset = 0;

    while let Some((wildcard, i)) = find_wildcard(&bytes[offset..], route)? {
        let start = offset + i;
        let end = start + wildcard.len();

        if wildcard[0] == b'*' {
            if end != bytes.len() {
                return Err(InsertError::CatchAllNotAtEnd { path: route.to_owned() });
            }

            if start == 0 || bytes[start - 1] != b'/' {
                return Err(InsertError::CatchAllWithoutSlash { path: route.to_owned() });
            }
        }

        let name = &wildcard[1..];
        if names.contains(&name) {
            return Err(InsertError::DuplicateParamName {
                name: String::from_utf8_lossy(name).into_owned(),
                path: route.to_owned(),
            });
        }
        names.push(name);

        offset = end;
    }

    Ok(())
}

fn param_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

// query-style unescaping: `+` is a space, `%XX` an escaped byte. Values with
// malformed escapes or that do not decode to UTF-8 are kept as they are.
fn decode(raw: &[u8], unescape: bool) -> String {
    if !unescape || !raw.iter().any(|&c| c == b'%' || c == b'+') {
        return String::from_utf8_lossy(raw).into_owned();
    }

    let well_formed = raw.iter().enumerate().all(|(i, &c)| {
        c != b'%'
            || raw
                .get(i + 1..i + 3)
                .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit))
    });

    if !well_formed {
        return String::from_utf8_lossy(raw).into_owned();
    }

    let plus_as_space: Cow<'_, [u8]> = if raw.contains(&b'+') {
        Cow::Owned(raw.iter().map(|&c| if c == b'+' { b' ' } else { c }).collect())
    } else {
        Cow::Borrowed(raw)
    };

    match percent_decode(&plus_as_space).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(raw).into_owned(),
    }
}

#[cfg(test)]
const _: () = {
    use std::fmt::{self, Debug, Formatter};

    // visualize the tree structure when debugging
    impl<T: Debug> Debug for Node<T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            let indices = self.indices.iter().map(|&x| char::from(x)).collect::<Vec<_>>();

            f.debug_struct("Node")
                .field("path", &String::from_utf8_lossy(&self.path))
                .field("node_type", &self.node_type)
                .field("value", &self.value)
                .field("priority", &self.priority)
                .field("indices", &indices)
                .field("children", &self.children)
                .finish()
        }
    }
};
