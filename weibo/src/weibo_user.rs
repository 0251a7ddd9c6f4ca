use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use weibo_api_common::deserialize_null_default;

use crate::util::{deserialize_lenient_i64, parse_created_at};
use crate::weibo_post::WeiboPost;

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct WeiboUser {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub idstr: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub screen_name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub province: i64,
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub city: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub location: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub profile_image_url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub profile_url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub domain: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub weihao: String,
    /// `m`, `f` or `n` for unknown
    #[serde(deserialize_with = "deserialize_null_default")]
    pub gender: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub followers_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub friends_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub statuses_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub favourites_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub following: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub allow_all_act_msg: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub geo_enabled: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub verified: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub verified_type: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub remark: String,
    /// Latest post, only returned for users that authorized the app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Box<WeiboPost>>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub allow_all_comment: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub avatar_large: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub avatar_hd: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub verified_reason: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub follow_me: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub online_status: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub bi_followers_count: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub lang: String,
}

impl WeiboUser {
    /// Registration time
    pub fn created_time(&self) -> Result<OffsetDateTime, time::error::Parse> {
        parse_created_at(&self.created_at)
    }
}

/// Author of a post or comment. With `trim_user=1` only the id is sent.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Author {
    Id(i64),
    User(Box<WeiboUser>),
}

impl Author {
    pub fn id(&self) -> i64 {
        match self {
            Self::Id(id) => *id,
            Self::User(user) => user.id,
        }
    }

    pub fn user(&self) -> Option<&WeiboUser> {
        match self {
            Self::Id(_) => None,
            Self::User(user) => Some(user),
        }
    }
}
