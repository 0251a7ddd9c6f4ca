use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use weibo_api_common::deserialize_null_default;

use crate::util::parse_created_at;
use crate::weibo_post::WeiboPost;
use crate::weibo_user::Author;

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(default)]
pub struct WeiboComment {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub text: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Author>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub mid: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub idstr: String,
    /// The post being commented on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Box<WeiboPost>>,
    /// Set when this comment replies to another comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_comment: Option<Box<WeiboComment>>,
}

impl WeiboComment {
    pub fn created_time(&self) -> Result<OffsetDateTime, time::error::Parse> {
        parse_created_at(&self.created_at)
    }

    pub fn is_reply(&self) -> bool {
        self.reply_comment.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reply_comment() {
        let comment: WeiboComment = serde_json::from_str(
            r#"{
                "created_at": "Wed Jun 01 00:50:25 +0800 2011",
                "id": 12438492184,
                "text": "回复@zaku:好的",
                "mid": "202110601896455629",
                "idstr": "12438492184",
                "user": 1404376560,
                "status": {"id": 11488058246, "text": "求关注。"},
                "reply_comment": {"id": 12438492000, "text": "求关注"}
            }"#,
        )
        .unwrap();
        assert!(comment.is_reply());
        assert_eq!(comment.user.as_ref().unwrap().id(), 1404376560);
        assert_eq!(comment.status.as_ref().unwrap().id, 11488058246);
        assert_eq!(comment.reply_comment.as_ref().unwrap().text, "求关注");
        assert!(comment.created_time().is_ok());
    }

    #[test]
    fn null_fields_fall_back_to_zero_values() {
        let comment: WeiboComment =
            serde_json::from_str(r#"{"id":12438492184,"text":null,"mid":null,"reply_comment":null}"#)
                .unwrap();
        assert_eq!(comment.id, 12438492184);
        assert_eq!(comment.text, "");
        assert!(!comment.is_reply());
    }
}
