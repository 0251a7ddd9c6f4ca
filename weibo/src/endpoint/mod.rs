use serde::{Deserialize, Serialize};
use weibo_api_common::{deserialize_null_default, Enveloped, ResponseEnvelope};

use crate::weibo_comment::WeiboComment;
use crate::weibo_post::WeiboPost;
use crate::weibo_user::WeiboUser;

/// Full URL of a v2 API path
macro_rules! api_url {
    ($path:literal) => {
        concat!("https://api.weibo.com/2/", $path)
    };
}

pub mod comments;
pub mod params;
pub mod statuses;
pub mod users;

macro_rules! enveloped {
    ($($ty:ty),+) => {
        $(impl Enveloped for $ty {
            fn envelope(&self) -> &ResponseEnvelope {
                &self.envelope
            }
        })+
    };
}

enveloped!(CommentList, PostList, PostResponse, UserResponse);

/// A page of comments along with cursors for the next request
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct CommentList {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub comments: Vec<WeiboComment>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub previous_cursor: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub next_cursor: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_number: i64,
}

/// A page of posts along with cursors for the next request
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct PostList {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub statuses: Vec<WeiboPost>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub previous_cursor: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub next_cursor: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_number: i64,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct PostResponse {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    #[serde(flatten)]
    pub post: WeiboPost,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct UserResponse {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    #[serde(flatten)]
    pub user: WeiboUser,
}
