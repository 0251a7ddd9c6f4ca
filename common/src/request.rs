use indexmap::IndexMap;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request, Url};
use url::form_urlencoded;

use crate::error::ApiError;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Which headers an operation sends along with its parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// `Content-Type: application/x-www-form-urlencoded`
    #[default]
    FormContentType,
    /// No `Content-Type` at all. Some endpoints reject requests that carry one.
    NoContentType,
}

/// Everything needed to issue one API call.
///
/// Parameters keep insertion order. GET requests carry them in the query
/// string, every other method sends them as a form encoded body.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    operation: &'static str,
    url: &'static str,
    method: Method,
    params: IndexMap<&'static str, String>,
    header_policy: HeaderPolicy,
}

impl RequestDescriptor {
    pub fn new(operation: &'static str, method: Method, url: &'static str) -> Self {
        Self {
            operation,
            url,
            method,
            params: IndexMap::new(),
            header_policy: HeaderPolicy::default(),
        }
    }

    pub fn get(operation: &'static str, url: &'static str) -> Self {
        Self::new(operation, Method::GET, url)
    }

    pub fn post(operation: &'static str, url: &'static str) -> Self {
        Self::new(operation, Method::POST, url)
    }

    /// Add a parameter. Values are sent as given, zero values included.
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.insert(name, value.to_string());
        self
    }

    pub fn header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn url(&self) -> &'static str {
        self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn params(&self) -> &IndexMap<&'static str, String> {
        &self.params
    }

    /// Turn the descriptor into a request ready for a transport
    pub fn build(&self) -> Result<Request, ApiError> {
        let mut url = Url::parse(self.url).map_err(|source| ApiError::Construction {
            operation: self.operation,
            source,
        })?;

        let body = if self.method == Method::GET {
            if !self.params.is_empty() {
                let mut query = url.query_pairs_mut();
                for (name, value) in &self.params {
                    query.append_pair(name, value);
                }
            }
            None
        } else {
            let mut form = form_urlencoded::Serializer::new(String::new());
            for (name, value) in &self.params {
                form.append_pair(name, value);
            }
            Some(form.finish())
        };

        let mut request = Request::new(self.method.clone(), url);
        if self.header_policy == HeaderPolicy::FormContentType {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }
}
