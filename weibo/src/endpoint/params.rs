use thiserror::Error;
use weibo_api_common::RequestDescriptor;

/// Pagination window shared by the list endpoints.
///
/// Every field is always sent. Nothing here is range checked, the server
/// decides what to do with out of range values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// Only return entries with an ID greater than this
    pub since_id: i64,
    /// Only return entries with an ID less than or equal to this
    pub max_id: i64,
    pub count: i32,
    pub page: i32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            since_id: 0,
            max_id: 0,
            count: 50,
            page: 1,
        }
    }
}

impl Page {
    /// The statuses timelines default to 20 entries per page
    pub(crate) fn statuses_default() -> Self {
        Self {
            count: 20,
            ..Default::default()
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    pub(crate) fn apply(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        descriptor
            .param("since_id", self.since_id)
            .param("max_id", self.max_id)
            .param("count", self.count)
            .param("page", self.page)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid {param} value: {code}")]
pub struct InvalidFlag {
    pub param: &'static str,
    pub code: i32,
}

/// Small integer switches. Display gives the wire value.
macro_rules! flag {
    ($(#[$meta:meta])* $name:ident, $param:literal {
        $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = InvalidFlag;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(InvalidFlag { param: $param, code }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

flag!(
    /// How much of the author to return
    TrimUser, "trim_user" {
        #[default]
        Full = 0,
        /// Only the user ID
        IdOnly = 1,
    }
);

flag!(
    AuthorFilter, "filter_by_author" {
        #[default]
        All = 0,
        /// People the current user follows
        Following = 1,
        Strangers = 2,
    }
);

flag!(
    SourceFilter, "filter_by_source" {
        #[default]
        All = 0,
        Weibo = 1,
        /// Weibo groups
        Weiqun = 2,
    }
);

flag!(
    TypeFilter, "filter_by_type" {
        #[default]
        All = 0,
        Original = 1,
    }
);

flag!(
    Feature, "feature" {
        #[default]
        All = 0,
        Original = 1,
        Picture = 2,
        Video = 3,
        Music = 4,
    }
);

flag!(
    /// Restrict results to posts made through the current app
    BaseApp, "base_app" {
        #[default]
        All = 0,
        CurrentApp = 1,
    }
);
