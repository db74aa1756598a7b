/// Route-declaration verbs.
///
/// `Del`, `Get`, `Patch` and `Put` address a single member of a collection and
/// carry the router parameter. `List` and `Post` address the collection itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Del,
    Get,
    List,
    Patch,
    Post,
    Put,
}

impl Verb {
    /// Traversal order used when iterating, merging and applying routes.
    pub const ORDER: [Self; 6] = [
        Self::List,
        Self::Post,
        Self::Del,
        Self::Get,
        Self::Patch,
        Self::Put,
    ];

    #[must_use]
    pub fn is_member(self) -> bool {
        matches!(self, Self::Del | Self::Get | Self::Patch | Self::Put)
    }

    /// The server operation this verb is replayed with.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Del => Method::Del,
            Self::Get | Self::List => Method::Get,
            Self::Patch => Method::Patch,
            Self::Post => Method::Post,
            Self::Put => Method::Put,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Del => "del",
            Self::Get => "get",
            Self::List => "list",
            Self::Patch => "patch",
            Self::Post => "post",
            Self::Put => "put",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Del => 0,
            Self::Get => 1,
            Self::List => 2,
            Self::Patch => 3,
            Self::Post => 4,
            Self::Put => 5,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Operations a [`Server`](crate::Server) exposes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Del,
    Get,
    Patch,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Del => "del",
            Self::Get => "get",
            Self::Patch => "patch",
            Self::Post => "post",
            Self::Put => "put",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
