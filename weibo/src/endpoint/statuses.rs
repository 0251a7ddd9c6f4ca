use weibo_api_common::{invoke, ApiError, RequestDescriptor, Transport};

use super::params::{AuthorFilter, BaseApp, Feature, Page, SourceFilter, TrimUser, TypeFilter};
use super::{PostList, PostResponse};

/// Posts that @mention the current user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusesMentions {
    pub page: Page,
    pub filter_by_author: AuthorFilter,
    pub filter_by_source: SourceFilter,
    pub filter_by_type: TypeFilter,
}

/// Posts from the current user and the people they follow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeTimeline {
    pub page: Page,
    pub base_app: BaseApp,
    pub feature: Feature,
    pub trim_user: TrimUser,
}

impl Default for HomeTimeline {
    fn default() -> Self {
        Self {
            page: Page::statuses_default(),
            base_app: Default::default(),
            feature: Default::default(),
            trim_user: Default::default(),
        }
    }
}

/// Posts from one user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserTimeline {
    pub uid: i64,
    pub page: Page,
    pub base_app: BaseApp,
    pub feature: Feature,
    pub trim_user: TrimUser,
}

impl UserTimeline {
    pub fn new(uid: i64) -> Self {
        Self {
            uid,
            page: Page::statuses_default(),
            base_app: Default::default(),
            feature: Default::default(),
            trim_user: Default::default(),
        }
    }
}

pub(crate) async fn statuses_mentions(
    transport: &dyn Transport,
    token: &str,
    params: &StatusesMentions,
) -> Result<PostList, ApiError> {
    let descriptor = params
        .page
        .apply(
            RequestDescriptor::get("weibo statuses/mentions", api_url!("statuses/mentions.json"))
                .param("access_token", token),
        )
        .param("filter_by_author", params.filter_by_author)
        .param("filter_by_source", params.filter_by_source)
        .param("filter_by_type", params.filter_by_type);
    invoke(transport, &descriptor).await
}

pub(crate) async fn home_timeline(
    transport: &dyn Transport,
    token: &str,
    params: &HomeTimeline,
) -> Result<PostList, ApiError> {
    let descriptor = params
        .page
        .apply(
            RequestDescriptor::get(
                "weibo statuses/home_timeline",
                api_url!("statuses/home_timeline.json"),
            )
            .param("access_token", token),
        )
        .param("base_app", params.base_app)
        .param("feature", params.feature)
        .param("trim_user", params.trim_user);
    invoke(transport, &descriptor).await
}

pub(crate) async fn user_timeline(
    transport: &dyn Transport,
    token: &str,
    params: &UserTimeline,
) -> Result<PostList, ApiError> {
    let descriptor = params
        .page
        .apply(
            RequestDescriptor::get(
                "weibo statuses/user_timeline",
                api_url!("statuses/user_timeline.json"),
            )
            .param("access_token", token)
            .param("uid", params.uid),
        )
        .param("base_app", params.base_app)
        .param("feature", params.feature)
        .param("trim_user", params.trim_user);
    invoke(transport, &descriptor).await
}

pub(crate) async fn show(
    transport: &dyn Transport,
    token: &str,
    id: i64,
) -> Result<PostResponse, ApiError> {
    let descriptor = RequestDescriptor::get("weibo statuses/show", api_url!("statuses/show.json"))
        .param("access_token", token)
        .param("id", id);
    invoke(transport, &descriptor).await
}
