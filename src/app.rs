//! Application bootstrap: one explicit object owning the pieces the shell
//! needs at startup.
//!
//! Rather than registering the route table and the sample data as implicit
//! module-level globals, [`App::bootstrap`] builds both from a [`SiteConfig`]
//! and hands back a single immutable value. Initialization order is visible
//! at the call site, and tests can bootstrap as many isolated instances as
//! they like.

use crate::config::SiteConfig;
use crate::placeholder::placeholder_posts;
use crate::routes::{RouteMatch, RouteTable};
use crate::types::Post;
use serde::Serialize;

/// The bootstrapped application state. Read-only after construction.
#[derive(Debug, Clone)]
pub struct App {
    config: SiteConfig,
    routes: RouteTable,
    posts: Vec<Post>,
}

impl App {
    /// Build the standard route table and materialize the placeholder
    /// sample (`config.placeholder.posts` records).
    pub fn bootstrap(config: SiteConfig) -> Self {
        let posts = placeholder_posts(config.placeholder.posts);
        Self {
            config,
            routes: RouteTable::standard(),
            posts,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The placeholder sample, in generation order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Resolve a browser path against the route table.
    ///
    /// The configured `base_path` is stripped first, so an app served from
    /// `/blog` resolves `/blog/about` the same way a root-mounted app
    /// resolves `/about`. Paths outside the base resolve to nothing.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let base = self.config.base_path.trim_end_matches('/');
        let rest = if base.is_empty() {
            path
        } else {
            path.strip_prefix(base)?
        };
        let rest = if rest.is_empty() { "/" } else { rest };
        self.routes.match_path(rest)
    }

    /// Look up a sample post by its routable slug. This is the lookup the
    /// post view performs with its forwarded `postSlug` parameter.
    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts
            .iter()
            .find(|post| post.slug.as_deref() == Some(slug))
    }

    /// Serializable snapshot of the bootstrapped state.
    pub fn manifest(&self) -> Manifest<'_> {
        Manifest {
            config: &self.config,
            routes: &self.routes,
            posts: &self.posts,
        }
    }

    /// The snapshot as pretty-printed JSON, for handing to the shell or
    /// dumping while debugging.
    pub fn manifest_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.manifest())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::bootstrap(SiteConfig::default())
    }
}

/// Snapshot of the bootstrapped state: configuration, the declarative route
/// table, and the sample posts.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub config: &'a SiteConfig,
    pub routes: &'a RouteTable,
    pub posts: &'a [Post],
}
