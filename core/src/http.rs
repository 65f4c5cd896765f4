//! HTTP transport types for `TodoClient`.
//!
//! Requests and responses are plain data: `TodoClient` builds an
//! `HttpRequest`, the host executes it with whatever HTTP stack it has, and
//! hands the `HttpResponse` back for parsing. Fields are owned so values can
//! be moved across threads or stored without lifetimes.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request for one store operation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The host's view of the response to an `HttpRequest`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
