//! Timed prediction request against the remote sentiment API
//!
//! One POST per submission, raced against the configured deadline. The
//! transport future is dropped when the deadline wins, so a late response
//! can never be observed.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{Result, SentimentError};
use crate::outcome::{CallOutcome, Prediction};

/// Body of a prediction call: `{"sentence": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    sentence: String,
}

impl PredictionRequest {
    /// Trim the input; whitespace-only input is rejected
    pub fn new(sentence: &str) -> Result<Self> {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return Err(SentimentError::EmptyInput);
        }
        Ok(Self {
            sentence: sentence.to_string(),
        })
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }
}

/// Status and body of an HTTP response, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a prediction request and returns the raw response
pub trait Transport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        request: &'a PredictionRequest,
    ) -> BoxFuture<'a, Result<RawResponse>>;
}

/// reqwest-backed transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("hindisenti/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// GET the hosting page of the remote service so a sleeping instance restarts
    ///
    /// Returns the HTTP status code of the page.
    pub async fn wake(&self, url: &str, timeout: Duration) -> Result<u16> {
        info!("Waking remote service at {}", url);
        let response = tokio::time::timeout(timeout, self.client.get(url).send())
            .await
            .map_err(|_| SentimentError::Timeout(timeout))??;
        let status = response.status().as_u16();
        debug!("Wake request returned {}", status);
        Ok(status)
    }
}

impl Transport for HttpTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        request: &'a PredictionRequest,
    ) -> BoxFuture<'a, Result<RawResponse>> {
        async move {
            let response = self.client.post(url).json(request).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(RawResponse { status, body })
        }
        .boxed()
    }
}

/// Interpret a response received before the deadline
///
/// Non-2xx statuses and bodies that are not JSON are errors; JSON without a
/// recognized `prediction` value is a malformed response.
pub fn interpret_response(raw: &RawResponse) -> Result<CallOutcome> {
    if !raw.is_success() {
        return Err(SentimentError::Status(raw.status));
    }

    let data: serde_json::Value = serde_json::from_str(&raw.body)?;
    let outcome = match data.get("prediction").and_then(|v| v.as_str()) {
        Some(value) => match Prediction::from_raw(value) {
            Some(prediction) => CallOutcome::Success(prediction),
            None => {
                warn!("Unrecognized prediction value: {:?}", value);
                CallOutcome::MalformedResponse
            }
        },
        None => {
            warn!("Response has no string 'prediction' field");
            CallOutcome::MalformedResponse
        }
    };
    Ok(outcome)
}

/// Client for the remote sentiment classifier
pub struct SentimentClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl SentimentClient<HttpTransport> {
    /// Create a client with the reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            transport: HttpTransport::new()?,
        })
    }

    /// Visit the configured wake URL, bounded by the call deadline
    pub async fn wake(&self) -> Result<u16> {
        self.transport
            .wake(&self.config.wake_url, self.config.timeout)
            .await
    }
}

impl<T: Transport> SentimentClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Classify a sentence
    ///
    /// Empty or whitespace-only input fails with [`SentimentError::EmptyInput`]
    /// without touching the network. Every other failure is reported as a
    /// [`CallOutcome`] variant.
    pub async fn predict(&self, sentence: &str) -> Result<CallOutcome> {
        let request = PredictionRequest::new(sentence)?;
        Ok(self.call(&request).await)
    }

    /// Issue exactly one call for a validated request and race it against the deadline
    pub async fn call(&self, request: &PredictionRequest) -> CallOutcome {
        let deadline = self.config.timeout;
        let start = Instant::now();
        debug!(
            "POST {} ({} chars, deadline {}ms)",
            self.config.endpoint,
            request.sentence().chars().count(),
            deadline.as_millis()
        );

        let raced = tokio::time::timeout(
            deadline,
            self.transport.post_json(&self.config.endpoint, request),
        )
        .await;

        let outcome = match raced {
            Err(_) => {
                warn!("Prediction call exceeded {}ms deadline", deadline.as_millis());
                CallOutcome::Timeout
            }
            Ok(Err(e)) => {
                warn!("Prediction call failed: {}", e);
                CallOutcome::from_error(&e)
            }
            Ok(Ok(raw)) => interpret_response(&raw).unwrap_or_else(|e| {
                warn!("Prediction response rejected: {}", e);
                CallOutcome::from_error(&e)
            }),
        };

        info!(
            "Prediction resolved as {} in {:.3}s",
            outcome.kind(),
            start.elapsed().as_secs_f64()
        );
        outcome
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeTransport;
    use super::*;
    use crate::label::SentimentLabel;

    fn config() -> ClientConfig {
        ClientConfig::from_lookup(|_| None).with_endpoint("http://api.test/predict")
    }

    fn client(transport: FakeTransport) -> SentimentClient<FakeTransport> {
        SentimentClient::with_transport(config(), transport)
    }

    #[test]
    fn test_request_trims_and_rejects_blank() {
        let request = PredictionRequest::new("  यह अच्छा है \n").unwrap();
        assert_eq!(request.sentence(), "यह अच्छा है");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"sentence":"यह अच्छा है"}"#
        );
        assert!(matches!(
            PredictionRequest::new(" \t\n"),
            Err(SentimentError::EmptyInput)
        ));
        assert!(matches!(
            PredictionRequest::new(""),
            Err(SentimentError::EmptyInput)
        ));
    }

    #[test]
    fn test_interpret_response() {
        let ok = interpret_response(&RawResponse::new(200, r#"{"prediction":"negative"}"#));
        assert_eq!(
            ok.unwrap().prediction().map(|p| p.label),
            Some(SentimentLabel::Negative)
        );

        let missing = interpret_response(&RawResponse::new(200, r#"{"label":"negative"}"#));
        assert_eq!(missing.unwrap(), CallOutcome::MalformedResponse);

        let not_string = interpret_response(&RawResponse::new(200, r#"{"prediction":1}"#));
        assert_eq!(not_string.unwrap(), CallOutcome::MalformedResponse);

        let bad_json = interpret_response(&RawResponse::new(200, "<html>asleep</html>"));
        assert!(matches!(bad_json, Err(SentimentError::Json(_))));

        let status = interpret_response(&RawResponse::new(503, ""));
        assert!(matches!(status, Err(SentimentError::Status(503))));
    }

    #[tokio::test]
    async fn test_success_makes_one_call_with_trimmed_body() {
        let transport = FakeTransport::replying(200, r#"{"prediction":"positive"}"#);
        let client = client(transport.clone());

        let outcome = client.predict("  मुझे यह पसंद है  ").await.unwrap();

        assert_eq!(outcome.prediction().unwrap().label, SentimentLabel::Positive);
        assert!(outcome.message(Default::default()).contains("positive"));
        assert_eq!(transport.call_count(), 1);
        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent[0].0, "http://api.test/predict");
        assert_eq!(sent[0].1, r#"{"sentence":"मुझे यह पसंद है"}"#);
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_call() {
        let transport = FakeTransport::replying(200, r#"{"prediction":"positive"}"#);
        let client = client(transport.clone());

        assert!(matches!(
            client.predict("   ").await,
            Err(SentimentError::EmptyInput)
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_uppercase_label_is_accepted() {
        let client = client(FakeTransport::replying(200, r#"{"prediction":"POSITIVE"}"#));
        let outcome = client.predict("बहुत बढ़िया").await.unwrap();
        let prediction = outcome.prediction().unwrap();
        assert_eq!(prediction.label, SentimentLabel::Positive);
        assert_eq!(prediction.raw, "POSITIVE");
    }

    #[tokio::test]
    async fn test_unknown_label_is_malformed() {
        let client = client(FakeTransport::replying(200, r#"{"prediction":"happy"}"#));
        let outcome = client.predict("ठीक है").await.unwrap();
        assert_eq!(outcome, CallOutcome::MalformedResponse);
        assert!(outcome.shows_alert());
    }

    #[tokio::test]
    async fn test_non_2xx_is_network_failure() {
        let client = client(FakeTransport::replying(502, "Bad Gateway"));
        let outcome = client.predict("ठीक है").await.unwrap();
        assert_eq!(outcome, CallOutcome::NetworkFailure);
        assert_ne!(
            outcome.message(Default::default()),
            CallOutcome::Timeout.message(Default::default())
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_network_failure() {
        let client = client(FakeTransport::failing(500));
        assert_eq!(
            client.predict("ठीक है").await.unwrap(),
            CallOutcome::NetworkFailure
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_network_failure() {
        let client = client(FakeTransport::replying(200, "not json"));
        assert_eq!(
            client.predict("ठीक है").await.unwrap(),
            CallOutcome::NetworkFailure
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_wins_and_late_reply_is_dropped() {
        let transport = FakeTransport::replying(200, r#"{"prediction":"positive"}"#)
            .delayed(Duration::from_millis(9000));
        let client = client(transport.clone());

        let outcome = client.predict("धीमा जवाब").await.unwrap();
        assert_eq!(outcome, CallOutcome::Timeout);
        assert_eq!(transport.call_count(), 1);

        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(!transport.has_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_just_inside_deadline_succeeds() {
        let transport = FakeTransport::replying(200, r#"{"prediction":"neutral"}"#)
            .delayed(Duration::from_millis(7900));
        let client = client(transport);
        let outcome = client.predict("सामान्य दिन").await.unwrap();
        assert_eq!(outcome.prediction().unwrap().label, SentimentLabel::Neutral);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_deadline() {
        let transport = FakeTransport::replying(200, r#"{"prediction":"neutral"}"#)
            .delayed(Duration::from_millis(600));
        let client = SentimentClient::with_transport(
            config().with_timeout(Duration::from_millis(500)),
            transport,
        );
        assert_eq!(client.predict("x").await.unwrap(), CallOutcome::Timeout);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = SentimentClient::new(config().with_endpoint("not-a-url"));
        assert!(matches!(result, Err(SentimentError::Config(_))));
    }
}
