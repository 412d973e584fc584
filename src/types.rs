//! Shared content types used across the scaffold.
//!
//! These types are the contract between the placeholder generator, the route
//! table, and the (externally defined) view components. They serialize to
//! JSON for the bootstrap manifest, so optional fields are skipped when
//! absent to keep the output sparse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aspect ratio of a photo, expressed as `width:height`.
///
/// Purely descriptive — nothing in the scaffold enforces a relationship
/// between a ratio and the pixel dimensions of the image it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub width: u32,
    pub height: u32,
}

impl Ratio {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Display form, e.g. `"16:9"`. Used verbatim in CSS `aspect-ratio`.
    pub fn value(&self) -> String {
        format!("{}:{}", self.width, self.height)
    }
}

/// Landscape video ratio — the common case for post header images.
impl Default for Ratio {
    fn default() -> Self {
        Self {
            width: 16,
            height: 9,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// A photo attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Identifier shown in captions and used as the `alt` text source.
    pub name: String,
    /// Full-size source location.
    pub url: String,
    /// Grid/preview source location.
    pub thumbnail: String,
    /// Free-form labels. Order and duplicates carry no meaning.
    pub tags: Vec<String>,
    pub ratio: Ratio,
}

/// Rendering mode tag for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    Text,
    Project,
    Photo,
}

/// A single blog entry.
///
/// Only `title` and `body` are always present. Everything else is optional:
/// a post without a `slug` is not individually routable, and a post without
/// a `post_type` has no declared rendering mode — views must handle the
/// absent state rather than assume a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Routable identifier, captured from `/post/:postSlug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_type: Option<PostType>,
}
