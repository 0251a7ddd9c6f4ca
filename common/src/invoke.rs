use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::envelope::Enveloped;
use crate::error::ApiError;
use crate::request::RequestDescriptor;
use crate::transport::Transport;

/// Issue one request and decode its body into `R`.
///
/// The response is consumed on every path, so its connection goes back to
/// the transport whether or not decoding succeeds. Nothing is retried.
pub async fn invoke<T, R>(transport: &T, descriptor: &RequestDescriptor) -> Result<R, ApiError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned + Enveloped,
{
    let operation = descriptor.operation();
    let request = descriptor.build()?;
    debug!("{}: {} {}", operation, descriptor.method(), descriptor.url());

    let response = transport
        .send(request)
        .await
        .map_err(|source| ApiError::Transport { operation, source })?;
    let status = response.status();
    debug!("{}: status {}", operation, status);

    let body = response
        .bytes()
        .await
        .map_err(|source| ApiError::Read { operation, source })?;

    let decoded: R = serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
        operation,
        body: String::from_utf8_lossy(&body).into_owned(),
        source,
    })?;

    let envelope = decoded.envelope();
    if envelope.is_failure() {
        warn!(
            "{}: remote error {} ({}), http status {}",
            operation, envelope.error_code, envelope.error, status
        );
        return Err(ApiError::Remote {
            operation,
            code: envelope.error_code,
            message: envelope.error.clone(),
            request: envelope.request.clone(),
        });
    }

    Ok(decoded)
}

#[cfg(test)]
mod test {
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Client;
    use serde::Deserialize;

    use super::*;
    use crate::envelope::ResponseEnvelope;
    use crate::request::HeaderPolicy;
    use crate::testing::FakeTransport;

    #[derive(Deserialize, Debug)]
    struct Ids {
        #[serde(flatten)]
        envelope: ResponseEnvelope,
        #[serde(default)]
        ids: Vec<i64>,
    }

    impl Enveloped for Ids {
        fn envelope(&self) -> &ResponseEnvelope {
            &self.envelope
        }
    }

    fn descriptor() -> RequestDescriptor {
        RequestDescriptor::get("test ids", "https://api.weibo.com/2/test/ids.json")
            .param("access_token", "token")
            .param("page", 1)
    }

    #[tokio::test]
    async fn decodes_payload() {
        let transport = FakeTransport::ok(r#"{"ids":[1,2,3]}"#);
        let ids: Ids = invoke(&transport, &descriptor()).await.unwrap();
        assert_eq!(ids.ids, vec![1, 2, 3]);
        assert!(!ids.envelope.is_failure());

        let sent = transport.last();
        assert_eq!(sent.method, reqwest::Method::GET);
        assert_eq!(sent.url.path(), "/2/test/ids.json");
        assert_eq!(sent.url.query(), Some("access_token=token&page=1"));
    }

    #[tokio::test]
    async fn explicit_empty_envelope_is_success() {
        let transport = FakeTransport::ok(r#"{"error":"","error_code":0,"ids":[7]}"#);
        let ids: Ids = invoke(&transport, &descriptor()).await.unwrap();
        assert_eq!(ids.ids, vec![7]);
    }

    #[tokio::test]
    async fn null_envelope_is_success() {
        let transport = FakeTransport::ok(r#"{"error":null,"error_code":null,"ids":[7]}"#);
        let ids: Ids = invoke(&transport, &descriptor()).await.unwrap();
        assert_eq!(ids.ids, vec![7]);
        assert_eq!(ids.envelope, ResponseEnvelope::default());
    }

    #[tokio::test]
    async fn remote_error() {
        let transport = FakeTransport::with_status(
            400,
            r#"{"error":"some failure","error_code":21327,"request":"/2/test/ids.json"}"#,
        );
        let err = invoke::<_, Ids>(&transport, &descriptor()).await.unwrap_err();
        assert!(err.to_string().contains("some failure"));
        match err {
            ApiError::Remote { code, request, .. } => {
                assert_eq!(code, 21327);
                assert_eq!(request.as_deref(), Some("/2/test/ids.json"));
            }
            e => panic!("wrong error: {:?}", e),
        }
    }

    #[tokio::test]
    async fn message_without_code_is_not_an_error() {
        let transport = FakeTransport::ok(r#"{"error":"some failure","ids":[]}"#);
        let ids: Ids = invoke(&transport, &descriptor()).await.unwrap();
        assert!(ids.ids.is_empty());
    }

    #[tokio::test]
    async fn decode_error_includes_body() {
        let transport = FakeTransport::ok("not json");
        let err = invoke::<_, Ids>(&transport, &descriptor()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        let msg = err.to_string();
        assert!(msg.starts_with("test ids decode error"));
        assert!(msg.contains("not json"));
    }

    #[tokio::test]
    async fn construction_error_sends_nothing() {
        let transport = FakeTransport::ok("{}");
        let descriptor = RequestDescriptor::get("test ids", "::not a url::");
        let err = invoke::<_, Ids>(&transport, &descriptor).await.unwrap_err();
        assert!(matches!(err, ApiError::Construction { .. }));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn content_type_follows_policy() {
        let transport = FakeTransport::ok("{}");
        let _: Ids = invoke(&transport, &descriptor()).await.unwrap();
        assert!(transport.last().headers.contains_key(CONTENT_TYPE));

        let descriptor = descriptor().header_policy(HeaderPolicy::NoContentType);
        let _: Ids = invoke(&transport, &descriptor).await.unwrap();
        assert!(!transport.last().headers.contains_key(CONTENT_TYPE));
    }

    #[tokio::test]
    async fn unreachable_host() {
        let client = Client::new();
        let descriptor = RequestDescriptor::get("test ids", "http://127.0.0.1:1/ids.json")
            .param("access_token", "token");
        let err = invoke::<_, Ids>(&client, &descriptor).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }), "{:?}", err);
        assert!(err.to_string().starts_with("test ids transport error"));
    }

    #[tokio::test]
    async fn truncated_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"ids")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let url: &'static str = Box::leak(format!("http://{}/ids.json", addr).into_boxed_str());
        let descriptor = RequestDescriptor::get("test ids", url).param("access_token", "token");
        let err = invoke::<_, Ids>(&Client::new(), &descriptor)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Read { .. }), "{:?}", err);
        assert!(err.to_string().starts_with("test ids body read error"));
        server.await.unwrap();
    }
}
