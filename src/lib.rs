//! # Simple Blog
//!
//! A minimal client-side scaffold for blog-style single-page apps: typed
//! content model, a declaration-ordered route table, and deterministic
//! placeholder data for developing views before any backend exists.
//!
//! The crate is a library consumed by an application shell. It renders
//! nothing itself — views are referenced by identity only, and the shell
//! decides what `View::Post` actually looks like.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared content types (`Post`, `Photo`, `Ratio`, `PostType`) |
//! | [`placeholder`] | Deterministic synthetic posts for backend-less development |
//! | [`pattern`] | Path pattern compiler for the `:param` / `:param?` convention |
//! | [`routes`] | Route table — ordered patterns mapped to view identifiers |
//! | [`config`] | `config.toml` loading, defaults, and validation |
//! | [`app`] | Explicit bootstrap assembling config, routes, and sample data |
//!
//! # Design Decisions
//!
//! ## Explicit Bootstrap Over Module Globals
//!
//! The route table and the sample data set are process-wide values, but they
//! are built by [`app::App::bootstrap`] and passed around, never registered
//! as implicit module-level singletons. Initialization order stays visible,
//! and tests construct isolated instances instead of sharing one.
//!
//! ## Declaration Order Is the Priority Order
//!
//! Route matching walks the table top to bottom and stops at the first
//! pattern that accepts the path. There is no specificity scoring — the
//! table's author puts `/about` before the `/:date?` catch-all, and a test
//! pins that ordering down. Boring, predictable, and identical to how the
//! major client-side routers behave.
//!
//! ## Patterns Are Compiled Once
//!
//! `:param` syntax is parsed into a small segment list at table
//! construction, where malformed patterns fail loudly with a
//! [`pattern::PatternError`]. Matching afterwards is infallible and
//! allocation-light, which suits a router consulted on every navigation
//! event.

pub mod app;
pub mod config;
pub mod pattern;
pub mod placeholder;
pub mod routes;
pub mod types;
