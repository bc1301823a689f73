//! The router: a navigable object built once from a route table and a
//! history mode, then handed to the host application.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::Result;
use crate::history::{History, HistoryMode, Location};
use crate::route::{Route, RouteTable};

/// A router bound to a fixed route table.
///
/// Navigation is synchronous and single-threaded; the only side effect is a
/// broadcast of the new [`Location`] to subscribers, which the host UI loop
/// uses to react to navigation.
///
/// # Example
/// ```ignore
/// use tiller::{HistoryMode, Router};
///
/// let mut router = Router::builder()
///     .route("/", "Home", home)
///     .route("/new-page", "NewPage", new_page)
///     .history(HistoryMode::Path)
///     .build()?;
///
/// router.push("/new-page")?;
/// assert_eq!(router.current().name, "NewPage");
/// router.back();
/// ```
pub struct Router<C> {
    table: RouteTable<C>,
    history: History,
    tx: watch::Sender<Location>,
}

impl<C> Router<C> {
    pub fn builder() -> RouterBuilder<C> {
        RouterBuilder::new()
    }

    /// Navigate to a path. Resolution happens first; on failure the history
    /// is left untouched and the error is returned to the caller.
    pub fn push(&mut self, path: &str) -> Result<&Route<C>> {
        let route = match self.table.resolve(path) {
            Ok(route) => route,
            Err(err) => {
                warn!(%path, error = %err, "navigation rejected");
                return Err(err);
            }
        };
        let location = location_of(route);
        debug!(path = %location.path, name = %location.name, "push");
        self.history.push(location.clone());
        let _ = self.tx.send(location);
        Ok(route)
    }

    /// Navigate to a route by its symbolic name.
    pub fn push_named(&mut self, name: &str) -> Result<&Route<C>> {
        let path = self.table.resolve_name(name)?.path().to_string();
        self.push(&path)
    }

    /// Navigate to a rendered link, e.g. a deep-link argument. The link is
    /// stripped back to a bare path according to the history mode.
    pub fn push_href(&mut self, href: &str) -> Result<&Route<C>> {
        let path = self.history.strip(href).to_string();
        self.push(&path)
    }

    /// Swap the current entry without growing the history.
    pub fn replace(&mut self, path: &str) -> Result<&Route<C>> {
        let route = self.table.resolve(path)?;
        let location = location_of(route);
        debug!(path = %location.path, "replace");
        self.history.replace(location.clone());
        let _ = self.tx.send(location);
        Ok(route)
    }

    /// Move back one history entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.history.back() {
            debug!(path = %self.history.current().path, "back");
            let _ = self.tx.send(self.history.current().clone());
            true
        } else {
            false
        }
    }

    /// Move forward one history entry. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.history.forward() {
            debug!(path = %self.history.current().path, "forward");
            let _ = self.tx.send(self.history.current().clone());
            true
        } else {
            false
        }
    }

    /// The current location.
    pub fn current(&self) -> &Location {
        self.history.current()
    }

    /// The active route entry, resolved against the table at call time.
    pub fn current_route(&self) -> &Route<C> {
        self.table
            .resolve(&self.history.current().path)
            .expect("current location missing from route table")
    }

    /// The component of the active route.
    pub fn component(&self) -> &C {
        self.current_route().component()
    }

    pub fn component_mut(&mut self) -> &mut C {
        let path = self.history.current().path.clone();
        self.table
            .entry_mut(&path)
            .expect("current location missing from route table")
            .component_mut()
    }

    /// Look a path up without navigating.
    pub fn resolve(&self, path: &str) -> Result<&Route<C>> {
        self.table.resolve(path)
    }

    /// Look a name up without navigating.
    pub fn resolve_name(&self, name: &str) -> Result<&Route<C>> {
        self.table.resolve_name(name)
    }

    /// Render a link for a declared path. Undeclared paths are an error, so
    /// dead links surface at the call site instead of at click time.
    pub fn href(&self, path: &str) -> Result<String> {
        let route = self.table.resolve(path)?;
        Ok(self.history.href(route.path()))
    }

    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Observe navigation: the receiver holds the current location and is
    /// notified on every push, replace, back and forward.
    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.tx.subscribe()
    }
}

fn location_of<C>(route: &Route<C>) -> Location {
    Location {
        path: route.path().to_string(),
        name: route.name().to_string(),
    }
}

/// Factory for [`Router`]. Collects route declarations and the history
/// strategy, then validates the whole table at once in [`build`](Self::build).
pub struct RouterBuilder<C> {
    routes: Vec<(String, String, C)>,
    mode: HistoryMode,
    base: String,
}

impl<C> RouterBuilder<C> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            mode: HistoryMode::default(),
            base: String::new(),
        }
    }

    /// Append a route declaration. Order matters: the first route is the
    /// starting location unless [`build_at`](Self::build_at) overrides it.
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        self.routes.push((path.into(), name.into(), component));
        self
    }

    /// Select how locations are represented; defaults to [`HistoryMode::Path`].
    pub fn history(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Prefix rendered links with an application base, e.g. `/app`.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Validate the table and construct the router at the first declared
    /// route. Fails on duplicate paths or names, invalid paths, or an empty
    /// table.
    pub fn build(self) -> Result<Router<C>> {
        self.finish(None)
    }

    /// Like [`build`](Self::build), but start at the given path (deep links).
    pub fn build_at(self, path: &str) -> Result<Router<C>> {
        self.finish(Some(path))
    }

    fn finish(self, initial: Option<&str>) -> Result<Router<C>> {
        let mut routes = Vec::with_capacity(self.routes.len());
        for (path, name, component) in self.routes {
            routes.push(Route::new(path, name, component)?);
        }
        let table = RouteTable::new(routes)?;

        let start = match initial {
            Some(path) => table.resolve(path)?,
            None => table.first(),
        };
        let location = location_of(start);
        debug!(routes = table.len(), start = %location.path, "router ready");

        let history = History::new(self.mode, &self.base, location.clone());
        let (tx, _) = watch::channel(location);
        Ok(Router { table, history, tx })
    }
}

impl<C> Default for RouterBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare a route table as a [`RouterBuilder`] chain.
///
/// # Example
/// ```ignore
/// let router = tiller::routes! {
///     "/" => Home: home,
///     "/new-page" => NewPage: new_page,
/// }
/// .build()?;
/// ```
#[macro_export]
macro_rules! routes {
    ($($path:literal => $name:ident : $component:expr),+ $(,)?) => {
        $crate::Router::builder()
            $(.route($path, stringify!($name), $component))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn router() -> Router<&'static str> {
        crate::routes! {
            "/" => Home: "home view",
            "/new-page" => NewPage: "new page view",
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_starts_at_first_declared_route() {
        let router = router();
        assert_eq!(router.current().path, "/");
        assert_eq!(router.current().name, "Home");
        assert_eq!(*router.component(), "home view");
    }

    #[test]
    fn test_push_resolves_declared_routes() {
        let mut router = router();
        let route = router.push("/new-page").unwrap();
        assert_eq!(route.name(), "NewPage");
        assert_eq!(router.current().name, "NewPage");
        assert_eq!(*router.component(), "new page view");
    }

    #[test]
    fn test_push_unknown_path_leaves_history_untouched() {
        let mut router = router();
        let err = router.push("/does-not-exist").unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
        assert_eq!(router.current().path, "/");
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_push_named() {
        let mut router = router();
        router.push_named("NewPage").unwrap();
        assert_eq!(router.current().path, "/new-page");
        assert!(matches!(
            router.push_named("Nope").unwrap_err(),
            Error::UnknownName { .. }
        ));
    }

    #[test]
    fn test_back_and_forward() {
        let mut router = router();
        router.push("/new-page").unwrap();

        assert!(router.back());
        assert_eq!(router.current().name, "Home");
        assert!(!router.back());

        assert!(router.forward());
        assert_eq!(router.current().name, "NewPage");
        assert!(!router.forward());
    }

    #[test]
    fn test_replace_is_invisible_to_back() {
        let mut router = router();
        router.replace("/new-page").unwrap();
        assert_eq!(router.current().path, "/new-page");
        assert!(!router.back());
    }

    #[test]
    fn test_duplicate_name_rejected_at_build() {
        let result = crate::routes! {
            "/" => Home: (),
            "/other" => Home: (),
        }
        .build();
        assert!(matches!(result, Err(Error::DuplicateName { .. })));
    }

    #[test]
    fn test_duplicate_path_rejected_at_build() {
        let result = Router::builder()
            .route("/", "Home", ())
            .route("/", "AlsoHome", ())
            .build();
        assert!(matches!(result, Err(Error::DuplicatePath { .. })));
    }

    #[test]
    fn test_href_path_mode_has_no_fragment() {
        let router = router();
        let href = router.href("/new-page").unwrap();
        assert_eq!(href, "/new-page");
        assert!(!href.contains('#'));
        assert!(matches!(
            router.href("/does-not-exist").unwrap_err(),
            Error::NoMatch { .. }
        ));
    }

    #[test]
    fn test_href_hash_mode() {
        let router = crate::routes! {
            "/" => Home: (),
            "/new-page" => NewPage: (),
        }
        .history(HistoryMode::Hash)
        .build()
        .unwrap();
        assert_eq!(router.href("/new-page").unwrap(), "#/new-page");
    }

    #[test]
    fn test_build_at_deep_link() {
        let router = crate::routes! {
            "/" => Home: (),
            "/new-page" => NewPage: (),
        }
        .build_at("/new-page")
        .unwrap();
        assert_eq!(router.current().name, "NewPage");
        assert!(!router.history().can_go_back());
    }

    #[test]
    fn test_push_href_hash_deep_link() {
        let mut router = crate::routes! {
            "/" => Home: (),
            "/new-page" => NewPage: (),
        }
        .history(HistoryMode::Hash)
        .build()
        .unwrap();
        router.push_href("#/new-page").unwrap();
        assert_eq!(router.current().name, "NewPage");
    }

    #[tokio::test]
    async fn test_subscriber_observes_navigation() {
        let mut router = router();
        let mut rx = router.subscribe();

        router.push("/new-page").unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().path, "/new-page");

        router.back();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().path, "/");
    }
}
