use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use weibo_api_common::deserialize_null_default;

use crate::util::{deserialize_lenient_string, parse_created_at};
use crate::weibo_user::Author;

/// A Weibo post, called a "status" by the API
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(default)]
pub struct WeiboPost {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub mid: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub idstr: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub text: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub source: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub favorited: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub truncated: bool,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub in_reply_to_status_id: String,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub in_reply_to_user_id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub in_reply_to_screen_name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub thumbnail_pic: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub bmiddle_pic: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub original_pic: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub pic_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retweeted_status: Option<Box<WeiboPost>>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub reposts_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub comments_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub attitudes_count: i64,
}

impl std::cmp::Ord for WeiboPost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::cmp::PartialOrd for WeiboPost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::PartialEq for WeiboPost {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::cmp::Eq for WeiboPost {}

impl WeiboPost {
    pub fn created_time(&self) -> Result<OffsetDateTime, time::error::Parse> {
        parse_created_at(&self.created_at)
    }

    /// Link to the post on the mobile site
    pub fn url(&self) -> String {
        format!("https://m.weibo.cn/status/{}", self.id)
    }
}
