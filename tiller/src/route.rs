//! The route table: an ordered mapping from URL-style paths to page
//! components, fixed at construction time.

use snafu::ensure;

use crate::error::{
    DuplicateNameSnafu, DuplicatePathSnafu, EmptyTableSnafu, InvalidPathSnafu, NoMatchSnafu,
    Result, UnknownNameSnafu,
};

/// One route entry: a path, a symbolic name, and the component shown while
/// the route is active. The component type is opaque to the router; it is
/// owned by the application's view layer.
#[derive(Debug, Clone)]
pub struct Route<C> {
    path: String,
    name: String,
    component: C,
}

impl<C> Route<C> {
    pub(crate) fn new(path: impl Into<String>, name: impl Into<String>, component: C) -> Result<Self> {
        Ok(Self {
            path: normalize(&path.into())?,
            name: name.into(),
            component,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }
}

/// Normalize a path for table lookup: a leading `/` is required, a trailing
/// `/` is dropped (the root path keeps its single slash).
pub(crate) fn normalize(path: &str) -> Result<String> {
    ensure!(
        !path.is_empty(),
        InvalidPathSnafu { path, reason: "path is empty" }
    );
    ensure!(
        path.starts_with('/'),
        InvalidPathSnafu { path, reason: "path must start with '/'" }
    );
    let trimmed = path.trim_end_matches('/');
    Ok(if trimmed.is_empty() { "/" } else { trimmed }.to_string())
}

/// An ordered set of routes. Paths and names are each unique; entries are
/// never added or removed after construction.
#[derive(Debug)]
pub struct RouteTable<C> {
    routes: Vec<Route<C>>,
}

impl<C> RouteTable<C> {
    /// Build a table, rejecting empty tables and duplicate paths or names.
    pub(crate) fn new(routes: Vec<Route<C>>) -> Result<Self> {
        ensure!(!routes.is_empty(), EmptyTableSnafu);
        for (i, route) in routes.iter().enumerate() {
            for earlier in &routes[..i] {
                ensure!(
                    earlier.path() != route.path(),
                    DuplicatePathSnafu { path: route.path() }
                );
                ensure!(
                    earlier.name() != route.name(),
                    DuplicateNameSnafu { name: route.name() }
                );
            }
        }
        Ok(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<C>> {
        self.routes.iter()
    }

    /// First declared route; the default starting location.
    pub(crate) fn first(&self) -> &Route<C> {
        &self.routes[0]
    }

    /// Exact-match lookup by normalized path.
    pub fn resolve(&self, path: &str) -> Result<&Route<C>> {
        let path = normalize(path)?;
        self.routes
            .iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| NoMatchSnafu { path }.build())
    }

    /// Lookup by symbolic name, for programmatic navigation.
    pub fn resolve_name(&self, name: &str) -> Result<&Route<C>> {
        self.routes
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| UnknownNameSnafu { name }.build())
    }

    pub(crate) fn entry_mut(&mut self, path: &str) -> Option<&mut Route<C>> {
        self.routes.iter_mut().find(|r| r.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            Route::new("/", "Home", "home view").unwrap(),
            Route::new("/new-page", "NewPage", "new page view").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_by_path() {
        let table = table();
        assert_eq!(table.resolve("/").unwrap().name(), "Home");
        assert_eq!(table.resolve("/new-page").unwrap().name(), "NewPage");
        assert_eq!(*table.resolve("/new-page").unwrap().component(), "new page view");
    }

    #[test]
    fn test_resolve_unknown_path() {
        let err = table().resolve("/does-not-exist").unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
    }

    #[test]
    fn test_resolve_by_name() {
        let table = table();
        assert_eq!(table.resolve_name("NewPage").unwrap().path(), "/new-page");
        assert!(matches!(
            table.resolve_name("Nope").unwrap_err(),
            Error::UnknownName { .. }
        ));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let table = table();
        assert_eq!(table.resolve("/new-page/").unwrap().name(), "NewPage");
        assert_eq!(table.resolve("///").unwrap().name(), "Home");
    }

    #[test]
    fn test_relative_path_rejected() {
        assert!(matches!(
            table().resolve("new-page").unwrap_err(),
            Error::InvalidPath { .. }
        ));
        assert!(matches!(
            Route::new("", "Broken", ()).unwrap_err(),
            Error::InvalidPath { .. }
        ));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/x", "A", ()).unwrap(),
            // Normalizes to the same path as the first entry.
            Route::new("/x/", "B", ()).unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicatePath { .. }));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/a", "Home", ()).unwrap(),
            Route::new("/b", "Home", ()).unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateName { .. }));
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = RouteTable::<()>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }
}
