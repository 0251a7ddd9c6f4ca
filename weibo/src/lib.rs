mod client;
pub mod endpoint;
pub mod oauth;
mod util;
mod weibo_comment;
mod weibo_post;
mod weibo_user;

pub use client::WeiboClient;
pub use endpoint::comments::{
    CommentsByMe, CommentsMentions, CommentsShow, CommentsTimeline, CommentsToMe,
};
pub use endpoint::params::{
    AuthorFilter, BaseApp, Feature, InvalidFlag, Page, SourceFilter, TrimUser, TypeFilter,
};
pub use endpoint::statuses::{HomeTimeline, StatusesMentions, UserTimeline};
pub use endpoint::{CommentList, PostList, PostResponse, UserResponse};
pub use oauth::{AccessToken, OAuthApp, TokenInfo};
pub use weibo_api_common::{ApiError, ResponseEnvelope, Transport};
pub use weibo_comment::WeiboComment;
pub use weibo_post::WeiboPost;
pub use weibo_user::{Author, WeiboUser};
