//! Request dispatcher — `HeyCarHttp`.
//!
//! Turns `(path, params, token)` into a signed POST against the active
//! environment and the response into either the JSON envelope or a
//! [`RequestError`]. One round trip per call; nothing is retried.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing;

use crate::auth::Credentials;
use crate::endpoint::Endpoint;
use crate::error::{RequestError, RequestResult, SERVER_EXCEPTION_MESSAGE};
use crate::http::transport::{Transport, TransportRequest, TransportResponse};
use crate::network::Environment;
use crate::shared::Params;
use crate::sign::SIGN_FIELD;

/// Per-call tracking id field.
pub const REQ_SID_FIELD: &str = "reqSid";

/// Client type field.
pub const REQ_FROM_FIELD: &str = "reqFrom";

/// Value sent as `reqFrom`.
pub const REQ_FROM: &str = "app";

/// Header carrying the user token.
pub const TOKEN_HEADER: &str = "token";

/// `code` value of a successful response envelope.
pub const SUCCESS_CODE: i64 = 200;

/// Low-level signed-request dispatcher.
#[derive(Clone)]
pub struct HeyCarHttp {
    credentials: Credentials,
    environment: Environment,
    transport: Arc<dyn Transport>,
}

impl HeyCarHttp {
    pub fn new(
        credentials: Credentials,
        environment: Environment,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            environment,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn set_environment(&mut self, environment: Environment) -> &mut Self {
        self.environment = environment;
        self
    }

    pub fn set_dev(&mut self, is_dev: bool) -> &mut Self {
        self.set_environment(Environment::from_dev_flag(is_dev))
    }

    pub fn is_dev(&self) -> bool {
        self.environment.is_dev()
    }

    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// POST `params` to `path` and return the response envelope.
    ///
    /// `token` is sent as a header when present and non-empty.
    pub async fn call(
        &self,
        path: &str,
        params: Params,
        token: Option<&str>,
    ) -> RequestResult<Value> {
        let req_sid = new_req_sid();
        let request = self.prepare_with_sid(path, params, token, &req_sid)?;

        tracing::debug!(
            path,
            env = %self.environment,
            req_sid = %req_sid,
            authorized = request.header(TOKEN_HEADER).is_some(),
            "Dispatching HeyCar request"
        );

        let response = self.transport.post_json(request).await.map_err(|e| {
            tracing::warn!(path, error = %e, "HeyCar transport failure");
            RequestError::from(e)
        })?;

        parse_envelope(path, response)
    }

    /// Dispatch a catalog entry. The token is only attached when the entry
    /// requires one.
    pub async fn call_endpoint(
        &self,
        endpoint: &Endpoint,
        params: Params,
        token: Option<&str>,
    ) -> RequestResult<Value> {
        let token = if endpoint.requires_token { token } else { None };
        self.call(endpoint.path, params, token).await
    }

    /// Build the signed request without sending it.
    ///
    /// Adds `reqSid` and `reqFrom`, signs the result, then adds `sign`.
    pub fn prepare(
        &self,
        path: &str,
        params: Params,
        token: Option<&str>,
    ) -> RequestResult<TransportRequest> {
        self.prepare_with_sid(path, params, token, &new_req_sid())
    }

    fn prepare_with_sid(
        &self,
        path: &str,
        mut params: Params,
        token: Option<&str>,
        req_sid: &str,
    ) -> RequestResult<TransportRequest> {
        params.insert(REQ_SID_FIELD, req_sid);
        params.insert(REQ_FROM_FIELD, REQ_FROM);

        let signature = self.credentials.sign(&params);
        params.insert(SIGN_FIELD, signature);

        let body = serde_json::to_string(&params).map_err(RequestError::Serialization)?;

        let mut headers = Vec::new();
        if let Some(t) = token.filter(|t| !t.is_empty()) {
            headers.push((TOKEN_HEADER.to_string(), t.to_string()));
        }

        Ok(TransportRequest {
            url: format!("{}{}", self.base_url(), path),
            headers,
            body,
        })
    }
}

impl fmt::Debug for HeyCarHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeyCarHttp")
            .field("credentials", &self.credentials)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Fresh 128-bit random id, hex encoded.
fn new_req_sid() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}

/// Map a raw response to the envelope or an error.
pub(crate) fn parse_envelope(path: &str, response: TransportResponse) -> RequestResult<Value> {
    if response.status != 200 {
        tracing::warn!(path, status = response.status, "HeyCar server returned non-200 status");
        return Err(RequestError::ServerError {
            status: response.status,
            message: SERVER_EXCEPTION_MESSAGE.to_string(),
        });
    }

    let body: Value = serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(path, error = %e, "HeyCar response is not valid JSON");
        RequestError::MalformedResponse(e)
    })?;

    if let Some(code) = body.get("code").filter(|c| !c.is_null()) {
        if code.as_i64() != Some(SUCCESS_CODE) {
            let code = code_to_i64(code);
            let message = match body.get("msg") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            };
            tracing::warn!(path, code, msg = %message, "HeyCar rejected request");
            return Err(RequestError::Application { code, message });
        }
    }

    tracing::debug!(path, status = response.status, "HeyCar request succeeded");
    Ok(body)
}

/// Best-effort integer view of a non-success `code`.
fn code_to_i64(code: &Value) -> i64 {
    match code {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RequestErrorKind, TransportError};
    use crate::network::{DEV_URL, PROD_URL};
    use crate::sign;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Returns a canned response and records what it was sent.
    struct CannedTransport {
        status: u16,
        body: String,
        sent: Mutex<Vec<TransportRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body: body.to_string(),
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn post_json(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.sent.lock().unwrap().push(request);
            Ok(TransportResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn post_json(&self, _: TransportRequest) -> Result<TransportResponse, TransportError> {
            Err(TransportError::Other("connection refused".to_string()))
        }
    }

    fn dispatcher(transport: Arc<dyn Transport>) -> HeyCarHttp {
        HeyCarHttp::new(Credentials::new("key", "secret"), Environment::Production, transport)
    }

    fn ok(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_prepare_signs_before_adding_sign() {
        let http = dispatcher(CannedTransport::new(200, "{}"));
        let request = http
            .prepare("/platform/queryOrderDetail", Params::new().with("orderId", "o-1"), None)
            .unwrap();

        let mut body: Params = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body.get(REQ_FROM_FIELD), Some(&json!("app")));
        assert_eq!(body.get(REQ_SID_FIELD).and_then(Value::as_str).map(str::len), Some(32));

        let sent_sign = body.remove(SIGN_FIELD).unwrap();
        assert_eq!(sent_sign, json!(sign::compute_signature(&body, "secret")));
        assert!(!body.contains_key(sign::SIGN_KEY_FIELD));
    }

    #[test]
    fn test_prepare_url_and_token_header() {
        let mut http = dispatcher(CannedTransport::new(200, "{}"));

        let request = http.prepare("/platform/queryCityList", Params::new(), Some("tok")).unwrap();
        assert_eq!(request.url, format!("{}/platform/queryCityList", PROD_URL));
        assert_eq!(request.header(TOKEN_HEADER), Some("tok"));

        http.set_dev(true);
        let request = http.prepare("/platform/queryCityList", Params::new(), Some("")).unwrap();
        assert_eq!(request.url, format!("{}/platform/queryCityList", DEV_URL));
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_prepare_with_sid_uses_given_sid() {
        let http = dispatcher(CannedTransport::new(200, "{}"));
        let request = http.prepare_with_sid("/x", Params::new(), None, "abc123").unwrap();
        let body: Params = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body.get(REQ_SID_FIELD), Some(&json!("abc123")));
    }

    #[test]
    fn test_req_sid_is_fresh() {
        let http = dispatcher(CannedTransport::new(200, "{}"));
        let a: Params = serde_json::from_str(&http.prepare("/x", Params::new(), None).unwrap().body).unwrap();
        let b: Params = serde_json::from_str(&http.prepare("/x", Params::new(), None).unwrap().body).unwrap();
        assert_ne!(a.get(REQ_SID_FIELD), b.get(REQ_SID_FIELD));
    }

    #[test]
    fn test_envelope_success() {
        let body = parse_envelope("/p", ok(200, r#"{"code":200,"data":{"token":"abc"}}"#)).unwrap();
        assert_eq!(body, json!({"code": 200, "data": {"token": "abc"}}));
    }

    #[test]
    fn test_envelope_without_code_is_success() {
        let body = parse_envelope("/p", ok(200, r#"{"data":[]}"#)).unwrap();
        assert_eq!(body, json!({"data": []}));

        let body = parse_envelope("/p", ok(200, r#"{"code":null}"#)).unwrap();
        assert_eq!(body, json!({"code": null}));
    }

    #[test]
    fn test_envelope_application_error() {
        let err = parse_envelope("/p", ok(200, r#"{"code":4001,"msg":"invalid channel"}"#)).unwrap_err();
        match err {
            RequestError::Application { code, message } => {
                assert_eq!(code, 4001);
                assert_eq!(message, "invalid channel");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_application_error_without_msg() {
        let err = parse_envelope("/p", ok(200, r#"{"code":500}"#)).unwrap_err();
        assert!(matches!(err, RequestError::Application { code: 500, ref message } if message.is_empty()));
    }

    #[test]
    fn test_envelope_string_code_is_not_success() {
        let err = parse_envelope("/p", ok(200, r#"{"code":"200"}"#)).unwrap_err();
        assert_eq!(err.code(), Some(200));
    }

    #[test]
    fn test_envelope_http_status() {
        let err = parse_envelope("/p", ok(500, "oops")).unwrap_err();
        match err {
            RequestError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "server is exception");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // only exactly 200 counts
        let err = parse_envelope("/p", ok(201, "{}")).unwrap_err();
        assert_eq!(err.kind(), RequestErrorKind::ServerError);
    }

    #[test]
    fn test_envelope_malformed() {
        let err = parse_envelope("/p", ok(200, "<html>")).unwrap_err();
        assert_eq!(err.kind(), RequestErrorKind::MalformedResponse);
    }

    #[test]
    fn test_call_sends_through_transport() {
        let transport = CannedTransport::new(200, r#"{"code":200}"#);
        let http = dispatcher(transport.clone());

        let result = tokio_test::block_on(http.call(
            "/platform/cancelOrder",
            Params::new().with("orderId", "o-1").with("force", true),
            Some("tok"),
        ));
        assert_eq!(result.unwrap(), json!({"code": 200}));

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, format!("{}/platform/cancelOrder", PROD_URL));
        assert_eq!(sent[0].header(TOKEN_HEADER), Some("tok"));
    }

    #[test]
    fn test_call_endpoint_drops_token_for_open_endpoints() {
        let transport = CannedTransport::new(200, "{}");
        let http = dispatcher(transport.clone());

        tokio_test::block_on(http.call_endpoint(&crate::endpoint::GET_TOKEN, Params::new(), Some("tok")))
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert!(sent[0].headers.is_empty());
    }

    #[test]
    fn test_call_transport_failure() {
        let http = dispatcher(Arc::new(FailingTransport));
        let err = tokio_test::block_on(http.call("/p", Params::new(), None)).unwrap_err();
        assert_eq!(err.kind(), RequestErrorKind::Transport);
    }

    #[test]
    fn test_code_to_i64() {
        assert_eq!(code_to_i64(&json!(4001)), 4001);
        assert_eq!(code_to_i64(&json!(4001.0)), 4001);
        assert_eq!(code_to_i64(&json!("4002")), 4002);
        assert_eq!(code_to_i64(&json!("oops")), 0);
        assert_eq!(code_to_i64(&json!([1])), 0);
    }

    #[test]
    fn test_debug_hides_secret() {
        let http = HeyCarHttp::new(
            Credentials::new("key", "hunter2"),
            Environment::Development,
            CannedTransport::new(200, "{}"),
        );
        let debug = format!("{:?}", http);
        assert!(debug.contains("Development"));
        assert!(!debug.contains("hunter2"));
    }
}
