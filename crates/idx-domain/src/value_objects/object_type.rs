use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of content object an indexable describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectType {
    /// A single post of any post type
    Post,
    /// A taxonomy term archive
    Term,
    /// An author archive
    User,
    /// The site home page
    HomePage,
    /// A date based archive
    DateArchive,
    /// The archive of a post type
    PostTypeArchive,
    /// A system page (search results, 404)
    SystemPage,
}

impl ObjectType {
    /// All object types, in declaration order
    pub const ALL: [ObjectType; 7] = [
        Self::Post,
        Self::Term,
        Self::User,
        Self::HomePage,
        Self::DateArchive,
        Self::PostTypeArchive,
        Self::SystemPage,
    ];

    /// Stable string form used in storage keys and events
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Term => "term",
            Self::User => "user",
            Self::HomePage => "home-page",
            Self::DateArchive => "date-archive",
            Self::PostTypeArchive => "post-type-archive",
            Self::SystemPage => "system-page",
        }
    }

    /// Whether indexables of this type take part in the ancestor hierarchy
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Post | Self::Term)
    }

    /// Whether this type is built by one designated builder instead of dispatch
    pub fn is_designated(&self) -> bool {
        matches!(
            self,
            Self::HomePage | Self::DateArchive | Self::PostTypeArchive | Self::SystemPage
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|object_type| object_type.as_str() == s)
            .ok_or_else(|| Error::lookup(format!("Unknown object type '{s}'")))
    }
}
