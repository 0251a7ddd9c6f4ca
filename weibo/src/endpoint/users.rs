use weibo_api_common::{invoke, ApiError, HeaderPolicy, RequestDescriptor, Transport};

use super::UserResponse;

pub(crate) async fn show(
    transport: &dyn Transport,
    token: &str,
    uid: i64,
) -> Result<UserResponse, ApiError> {
    let descriptor = RequestDescriptor::get("weibo users/show", api_url!("users/show.json"))
        .param("access_token", token)
        .param("uid", uid);
    invoke(transport, &descriptor).await
}

/// Look a user up by their personalized domain, e.g. `weibo.com/<domain>`
pub(crate) async fn domain_show(
    transport: &dyn Transport,
    token: &str,
    domain: &str,
) -> Result<UserResponse, ApiError> {
    // Rejected by the server when Content-Type is set
    let descriptor =
        RequestDescriptor::get("weibo users/domain_show", api_url!("users/domain_show.json"))
            .param("access_token", token)
            .param("domain", domain)
            .header_policy(HeaderPolicy::NoContentType);
    invoke(transport, &descriptor).await
}
