use weibo_api_common::{ApiError, Transport};

use crate::endpoint::comments::{
    self, CommentsByMe, CommentsMentions, CommentsShow, CommentsTimeline, CommentsToMe,
};
use crate::endpoint::statuses::{self, HomeTimeline, StatusesMentions, UserTimeline};
use crate::endpoint::users;
use crate::endpoint::{CommentList, PostList, PostResponse, UserResponse};
use crate::oauth::{self, TokenInfo};

/// Weibo API client. Every method is a single request; paging is done by
/// calling again with an updated [`Page`](crate::Page).
#[derive(Clone, Copy)]
pub struct WeiboClient<'a> {
    transport: &'a dyn Transport,
}

impl<'a> WeiboClient<'a> {
    /// Create a new WeiboClient on top of a shared transport, usually a `reqwest::Client`
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Latest comments sent or received by the current user
    pub async fn comments_timeline(
        &self,
        token: &str,
        params: &CommentsTimeline,
    ) -> Result<CommentList, ApiError> {
        comments::comments_timeline(self.transport, token, params).await
    }

    /// Comments sent by the current user
    pub async fn comments_by_me(
        &self,
        token: &str,
        params: &CommentsByMe,
    ) -> Result<CommentList, ApiError> {
        comments::comments_by_me(self.transport, token, params).await
    }

    /// Comments received by the current user
    pub async fn comments_to_me(
        &self,
        token: &str,
        params: &CommentsToMe,
    ) -> Result<CommentList, ApiError> {
        comments::comments_to_me(self.transport, token, params).await
    }

    /// Comments mentioning the current user
    pub async fn comments_mentions(
        &self,
        token: &str,
        params: &CommentsMentions,
    ) -> Result<CommentList, ApiError> {
        comments::comments_mentions(self.transport, token, params).await
    }

    /// Comments on one post
    pub async fn comments_show(
        &self,
        token: &str,
        params: &CommentsShow,
    ) -> Result<CommentList, ApiError> {
        comments::comments_show(self.transport, token, params).await
    }

    /// Posts mentioning the current user
    pub async fn statuses_mentions(
        &self,
        token: &str,
        params: &StatusesMentions,
    ) -> Result<PostList, ApiError> {
        statuses::statuses_mentions(self.transport, token, params).await
    }

    pub async fn home_timeline(
        &self,
        token: &str,
        params: &HomeTimeline,
    ) -> Result<PostList, ApiError> {
        statuses::home_timeline(self.transport, token, params).await
    }

    pub async fn user_timeline(
        &self,
        token: &str,
        params: &UserTimeline,
    ) -> Result<PostList, ApiError> {
        statuses::user_timeline(self.transport, token, params).await
    }

    /// A single post by ID
    pub async fn post(&self, token: &str, id: i64) -> Result<PostResponse, ApiError> {
        statuses::show(self.transport, token, id).await
    }

    /// A user by UID
    pub async fn user(&self, token: &str, uid: i64) -> Result<UserResponse, ApiError> {
        users::show(self.transport, token, uid).await
    }

    /// A user by personalized domain
    pub async fn user_by_domain(&self, token: &str, domain: &str) -> Result<UserResponse, ApiError> {
        users::domain_show(self.transport, token, domain).await
    }

    pub async fn token_info(&self, token: &str) -> Result<TokenInfo, ApiError> {
        oauth::token_info(self.transport, token).await
    }
}
