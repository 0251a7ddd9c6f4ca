use weibo_api_common::{invoke, ApiError, RequestDescriptor, Transport};

use super::params::{AuthorFilter, Page, SourceFilter, TrimUser};
use super::CommentList;

/// Comments the current user sent or received
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentsTimeline {
    pub page: Page,
    pub trim_user: TrimUser,
}

/// Comments the current user sent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentsByMe {
    pub page: Page,
    pub filter_by_source: SourceFilter,
}

/// Comments the current user received
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentsToMe {
    pub page: Page,
    pub filter_by_author: AuthorFilter,
    pub filter_by_source: SourceFilter,
}

/// Comments that @mention the current user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentsMentions {
    pub page: Page,
    pub filter_by_author: AuthorFilter,
    pub filter_by_source: SourceFilter,
}

/// Comments on a single post
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentsShow {
    /// Post ID
    pub id: i64,
    pub page: Page,
    pub filter_by_author: AuthorFilter,
}

fn list(operation: &'static str, url: &'static str, token: &str, page: &Page) -> RequestDescriptor {
    page.apply(RequestDescriptor::get(operation, url).param("access_token", token))
}

pub(crate) async fn comments_timeline(
    transport: &dyn Transport,
    token: &str,
    params: &CommentsTimeline,
) -> Result<CommentList, ApiError> {
    let descriptor = list(
        "weibo comments/timeline",
        api_url!("comments/timeline.json"),
        token,
        &params.page,
    )
    .param("trim_user", params.trim_user);
    invoke(transport, &descriptor).await
}

pub(crate) async fn comments_by_me(
    transport: &dyn Transport,
    token: &str,
    params: &CommentsByMe,
) -> Result<CommentList, ApiError> {
    let descriptor = list(
        "weibo comments/by_me",
        api_url!("comments/by_me.json"),
        token,
        &params.page,
    )
    .param("filter_by_source", params.filter_by_source);
    invoke(transport, &descriptor).await
}

pub(crate) async fn comments_to_me(
    transport: &dyn Transport,
    token: &str,
    params: &CommentsToMe,
) -> Result<CommentList, ApiError> {
    let descriptor = list(
        "weibo comments/to_me",
        api_url!("comments/to_me.json"),
        token,
        &params.page,
    )
    .param("filter_by_author", params.filter_by_author)
    .param("filter_by_source", params.filter_by_source);
    invoke(transport, &descriptor).await
}

pub(crate) async fn comments_mentions(
    transport: &dyn Transport,
    token: &str,
    params: &CommentsMentions,
) -> Result<CommentList, ApiError> {
    let descriptor = list(
        "weibo comments/mentions",
        api_url!("comments/mentions.json"),
        token,
        &params.page,
    )
    .param("filter_by_author", params.filter_by_author)
    .param("filter_by_source", params.filter_by_source);
    invoke(transport, &descriptor).await
}

pub(crate) async fn comments_show(
    transport: &dyn Transport,
    token: &str,
    params: &CommentsShow,
) -> Result<CommentList, ApiError> {
    let descriptor = params.page.apply(
        RequestDescriptor::get("weibo comments/show", api_url!("comments/show.json"))
            .param("access_token", token)
            .param("id", params.id),
    )
    .param("filter_by_author", params.filter_by_author);
    invoke(transport, &descriptor).await
}

#[cfg(test)]
mod test {
    use weibo_api_common::testing::FakeTransport;

    use super::*;

    static COMMENTS: &str = r#"{
        "comments": [
            {
                "created_at": "Wed Jun 01 00:50:25 +0800 2011",
                "id": 12438492184,
                "idstr": "12438492184",
                "text": "love your work.......",
                "source": "<a href=\"http://weibo.com\" rel=\"nofollow\">新浪微博</a>",
                "mid": "202110601896455629",
                "user": {"id": 1404376560, "screen_name": "zaku"},
                "status": {"id": 11142488790, "text": "我的相机到了。"}
            }
        ],
        "previous_cursor": 0,
        "next_cursor": 0,
        "total_number": 7
    }"#;

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(k, val)| (k.to_string(), val.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn timeline_defaults() {
        let transport = FakeTransport::ok(COMMENTS);
        let resp = comments_timeline(&transport, "token", &CommentsTimeline::default())
            .await
            .unwrap();
        assert_eq!(resp.total_number, 7);
        assert_eq!(resp.comments[0].id, 12438492184);
        assert_eq!(resp.comments[0].status.as_ref().unwrap().id, 11142488790);

        let sent = transport.last();
        assert_eq!(sent.url.as_str().split('?').next(), Some("https://api.weibo.com/2/comments/timeline.json"));
        assert_eq!(
            sent.query(),
            pairs(&[
                ("access_token", "token"),
                ("since_id", "0"),
                ("max_id", "0"),
                ("count", "50"),
                ("page", "1"),
                ("trim_user", "0"),
            ])
        );
    }

    #[tokio::test]
    async fn timeline_params() {
        let transport = FakeTransport::ok(COMMENTS);
        let params = CommentsTimeline {
            page: Page {
                since_id: 12438492000,
                max_id: 12438493000,
                count: 10,
                page: 3,
            },
            trim_user: TrimUser::IdOnly,
        };
        comments_timeline(&transport, "token", &params).await.unwrap();
        assert_eq!(
            transport.last().query(),
            pairs(&[
                ("access_token", "token"),
                ("since_id", "12438492000"),
                ("max_id", "12438493000"),
                ("count", "10"),
                ("page", "3"),
                ("trim_user", "1"),
            ])
        );
    }

    #[tokio::test]
    async fn by_me() {
        let transport = FakeTransport::ok(COMMENTS);
        let params = CommentsByMe {
            filter_by_source: SourceFilter::Weiqun,
            ..Default::default()
        };
        comments_by_me(&transport, "token", &params).await.unwrap();
        let sent = transport.last();
        assert_eq!(sent.url.path(), "/2/comments/by_me.json");
        assert_eq!(
            sent.query(),
            pairs(&[
                ("access_token", "token"),
                ("since_id", "0"),
                ("max_id", "0"),
                ("count", "50"),
                ("page", "1"),
                ("filter_by_source", "2"),
            ])
        );
    }

    #[tokio::test]
    async fn to_me_and_mentions() {
        let transport = FakeTransport::ok(COMMENTS);
        let params = CommentsToMe {
            filter_by_author: AuthorFilter::Following,
            ..Default::default()
        };
        comments_to_me(&transport, "token", &params).await.unwrap();
        let sent = transport.last();
        assert_eq!(sent.url.path(), "/2/comments/to_me.json");
        assert_eq!(
            &sent.query()[5..],
            &pairs(&[("filter_by_author", "1"), ("filter_by_source", "0")])[..]
        );

        let params = CommentsMentions {
            filter_by_source: SourceFilter::Weibo,
            ..Default::default()
        };
        comments_mentions(&transport, "token", &params).await.unwrap();
        let sent = transport.last();
        assert_eq!(sent.url.path(), "/2/comments/mentions.json");
        assert_eq!(
            &sent.query()[5..],
            &pairs(&[("filter_by_author", "0"), ("filter_by_source", "1")])[..]
        );
    }

    #[tokio::test]
    async fn show() {
        let transport = FakeTransport::ok(COMMENTS);
        let params = CommentsShow {
            id: 11142488790,
            ..Default::default()
        };
        comments_show(&transport, "token", &params).await.unwrap();
        let sent = transport.last();
        assert_eq!(sent.url.path(), "/2/comments/show.json");
        assert_eq!(
            sent.query(),
            pairs(&[
                ("access_token", "token"),
                ("id", "11142488790"),
                ("since_id", "0"),
                ("max_id", "0"),
                ("count", "50"),
                ("page", "1"),
                ("filter_by_author", "0"),
            ])
        );
    }

    #[tokio::test]
    async fn expired_token() {
        let transport = FakeTransport::with_status(
            403,
            r#"{"error":"expired_token","error_code":21327,"request":"/2/comments/timeline.json"}"#,
        );
        let err = comments_timeline(&transport, "token", &CommentsTimeline::default())
            .await
            .unwrap_err();
        assert_eq!(err.remote_code(), Some(21327));
        assert!(err
            .to_string()
            .starts_with("weibo comments/timeline response error: expired_token"));
    }
}
