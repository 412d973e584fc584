//! Client-side route table: declaration-ordered patterns mapped to views.
//!
//! A [`RouteTable`] is an ordered list of [`Route`] definitions. Matching
//! walks the list top to bottom and stops at the first pattern that accepts
//! the path, so specific routes must be declared before catch-alls — the
//! standard table checks `/about` and `/post/:postSlug` before `/:date?`,
//! which would otherwise capture them as a date.
//!
//! Views are identified by name only; rendering them is the application
//! shell's job. A route also declares whether captured path parameters are
//! forwarded to its view.

use crate::pattern::{Pattern, PatternError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Identifiers for the externally-defined view components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    About,
    Post,
    List,
}

/// One route definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Declared path pattern, e.g. `/post/:postSlug`.
    pub path: Pattern,
    /// Route name used by navigation code.
    pub name: String,
    /// View rendered when this route matches.
    pub view: View,
    /// Whether captured path parameters are forwarded to the view.
    pub pass_params: bool,
}

impl Route {
    /// A route that forwards nothing to its view.
    pub fn new(path: &str, name: &str, view: View) -> Result<Self, PatternError> {
        Ok(Self {
            path: Pattern::parse(path)?,
            name: name.to_string(),
            view,
            pass_params: false,
        })
    }

    /// A route that forwards captured parameters to its view.
    pub fn with_params(path: &str, name: &str, view: View) -> Result<Self, PatternError> {
        Ok(Self {
            pass_params: true,
            ..Self::new(path, name, view)?
        })
    }
}

/// A successful match: the winning route and the parameters its policy
/// forwards to the view.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route definitions. Immutable once built; serializes as the
/// declarative list of routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The scaffold's three routes, in match priority order.
    ///
    /// | Pattern | Name | View | Forwards |
    /// |---------|------|------|----------|
    /// | `/about` | `About` | [`View::About`] | nothing |
    /// | `/post/:postSlug` | `Post` | [`View::Post`] | `postSlug` |
    /// | `/:date?` | `List` | [`View::List`] | `date`, when present |
    pub fn standard() -> Self {
        let routes = vec![
            Route::new("/about", "About", View::About),
            Route::with_params("/post/:postSlug", "Post", View::Post),
            Route::with_params("/:date?", "List", View::List),
        ];
        let routes = routes
            .into_iter()
            .collect::<Result<_, _>>()
            .expect("standard route patterns are well-formed");
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a path to the first route whose pattern accepts it.
    ///
    /// Returns `None` when nothing matches; no wildcard route exists at
    /// this layer.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        for route in &self.routes {
            if let Some(captures) = route.path.match_path(path) {
                let params = if route.pass_params {
                    captures
                } else {
                    BTreeMap::new()
                };
                return Some(RouteMatch { route, params });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Standard table resolution
    // =========================================================================

    #[test]
    fn about_resolves_to_about_view() {
        let table = RouteTable::standard();
        let m = table.match_path("/about").unwrap();
        assert_eq!(m.route.name, "About");
        assert_eq!(m.route.view, View::About);
        assert!(m.params.is_empty());
    }

    #[test]
    fn post_path_resolves_with_slug_param() {
        let table = RouteTable::standard();
        let m = table.match_path("/post/xyz").unwrap();
        assert_eq!(m.route.name, "Post");
        assert_eq!(m.route.view, View::Post);
        assert_eq!(m.param("postSlug"), Some("xyz"));
    }

    #[test]
    fn dated_path_resolves_to_list_with_date() {
        let table = RouteTable::standard();
        let m = table.match_path("/2024-01-01").unwrap();
        assert_eq!(m.route.name, "List");
        assert_eq!(m.param("date"), Some("2024-01-01"));
    }

    #[test]
    fn root_resolves_to_list_without_date() {
        let table = RouteTable::standard();
        let m = table.match_path("/").unwrap();
        assert_eq!(m.route.view, View::List);
        assert_eq!(m.param("date"), None);
    }

    /// Declaration order is load-bearing: were the catch-all checked first,
    /// `/about` would come back as `List` with `date = "about"`.
    #[test]
    fn about_never_falls_through_to_catch_all() {
        let table = RouteTable::standard();
        let m = table.match_path("/about").unwrap();
        assert_ne!(m.route.view, View::List);
        assert_eq!(m.param("date"), None);
    }

    #[test]
    fn post_prefix_alone_falls_through_to_catch_all() {
        // `/post` has no slug segment, so the Post route rejects it and the
        // catch-all captures it as a (nonsensical) date. Same behavior as
        // the routing convention this table reproduces.
        let table = RouteTable::standard();
        let m = table.match_path("/post").unwrap();
        assert_eq!(m.route.view, View::List);
        assert_eq!(m.param("date"), Some("post"));
    }

    #[test]
    fn deep_paths_match_nothing() {
        let table = RouteTable::standard();
        assert!(table.match_path("/a/b/c").is_none());
    }

    // =========================================================================
    // Policy and construction
    // =========================================================================

    #[test]
    fn params_withheld_when_policy_is_off() {
        let table = RouteTable::from_routes(vec![
            Route::new("/tag/:name", "Tag", View::List).unwrap(),
        ]);
        let m = table.match_path("/tag/rust").unwrap();
        assert!(m.params.is_empty(), "pass_params=false must forward nothing");
    }

    #[test]
    fn first_declared_route_wins() {
        let table = RouteTable::from_routes(vec![
            Route::with_params("/:a", "First", View::List).unwrap(),
            Route::with_params("/:b", "Second", View::List).unwrap(),
        ]);
        let m = table.match_path("/x").unwrap();
        assert_eq!(m.route.name, "First");
    }

    #[test]
    fn bad_pattern_surfaces_parse_error() {
        assert!(Route::new("no-slash", "Broken", View::About).is_err());
    }

    #[test]
    fn table_serializes_declaratively() {
        let json = serde_json::to_value(RouteTable::standard()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "path": "/about", "name": "About", "view": "About", "pass_params": false },
                { "path": "/post/:postSlug", "name": "Post", "view": "Post", "pass_params": true },
                { "path": "/:date?", "name": "List", "view": "List", "pass_params": true },
            ])
        );
    }
}
