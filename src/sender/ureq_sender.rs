//! Network sender built on a blocking `ureq` agent.
//!
//! Each request runs on tokio's blocking pool and is raced against the
//! caller's cancellation token, so a cancelled send returns immediately
//! even though the blocking call finishes in the background.

use std::io::Read;
use std::sync::Arc;

use async_trait::async_trait;
use native_tls::TlsConnector;
use tokio_util::sync::CancellationToken;
use ureq::{Agent, AgentBuilder};

use super::TransportSender;
use super::config::{MAX_RESPONSE_BODY, SenderConfig};
use crate::error::{SendError, TransportFault};
use crate::http::{TransportRequest, TransportResponse};

/// [`TransportSender`] backed by a pooled `ureq::Agent`.
///
/// Must be driven from within a tokio runtime.
#[derive(Clone, Debug)]
pub struct UreqSender {
    agent: Agent,
}

impl UreqSender {
    /// Build a sender from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportFault::Tls`] if the TLS connector cannot be created.
    pub fn new(config: &SenderConfig) -> Result<Self, TransportFault> {
        let mut tls = TlsConnector::builder();
        if config.accept_invalid_certs {
            tls.danger_accept_invalid_certs(true);
            tls.danger_accept_invalid_hostnames(true);
        }
        let tls = tls
            .build()
            .map_err(|err| TransportFault::Tls(err.to_string()))?;
        let agent = AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout(config.write_timeout)
            .tls_connector(Arc::new(tls))
            .build();
        Ok(Self { agent })
    }
}

#[async_trait]
impl TransportSender for UreqSender {
    async fn send(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, SendError> {
        if cancel.is_cancelled() {
            return Err(SendError::Cancelled);
        }
        let agent = self.agent.clone();
        let call = tokio::task::spawn_blocking(move || execute_request(&agent, request));
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SendError::Cancelled),
            joined = call => match joined {
                Ok(result) => result.map_err(SendError::from),
                Err(err) => Err(TransportFault::Other(err.to_string()).into()),
            },
        }
    }
}

fn execute_request(
    agent: &Agent,
    request: TransportRequest,
) -> Result<TransportResponse, TransportFault> {
    let mut req = agent.request(request.method.as_str(), &request.url);
    for (name, value) in request.headers.iter() {
        req = req.set(name, value);
    }
    match req.send_bytes(&request.body) {
        Ok(response) => Ok(read_response(response)),
        // ureq reports non-2xx statuses as errors; they are still responses.
        Err(ureq::Error::Status(_, response)) => Ok(read_response(response)),
        Err(ureq::Error::Transport(transport)) => Err(classify_transport(&transport)),
    }
}

fn read_response(response: ureq::Response) -> TransportResponse {
    let status = response.status();
    if (200..300).contains(&status) {
        return TransportResponse::new(status);
    }
    let mut body = Vec::new();
    if let Err(err) = response
        .into_reader()
        .take(MAX_RESPONSE_BODY)
        .read_to_end(&mut body)
    {
        log::debug!("could not read body of {status} response: {err}");
        return TransportResponse::new(status);
    }
    TransportResponse {
        status,
        body: (!body.is_empty()).then_some(body),
    }
}

fn classify_transport(transport: &ureq::Transport) -> TransportFault {
    match transport.kind() {
        ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed => {
            TransportFault::Connect(transport.to_string())
        }
        ureq::ErrorKind::Io => TransportFault::Io(std::io::Error::other(transport.to_string())),
        _ => TransportFault::Other(transport.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::http::{HTTPMethod, RequestHeaders};
    use crate::test_utils::{MockServer, unused_addr};

    #[fixture]
    fn sender() -> UreqSender {
        let config = SenderConfig {
            connect_timeout: Duration::from_secs(2),
            write_timeout: Duration::from_secs(5),
            ..SenderConfig::default()
        };
        UreqSender::new(&config).expect("build sender")
    }

    fn post_request(url: String, body: &[u8]) -> TransportRequest {
        let mut headers = RequestHeaders::new();
        headers.insert("X-Test", "yes");
        TransportRequest {
            method: HTTPMethod::POST,
            url,
            headers,
            body: body.to_vec(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn posts_body_and_headers(sender: UreqSender) {
        let server = MockServer::respond_once(200, "");
        let response = sender
            .send(
                post_request(server.url("/api/1/envelope/"), b"payload"),
                &CancellationToken::new(),
            )
            .await
            .expect("response");
        assert_eq!(response, TransportResponse::new(200));

        let captured = server.received();
        assert_eq!(captured.method, "POST");
        assert_eq!(captured.path, "/api/1/envelope/");
        assert_eq!(captured.body, b"payload");
        assert_eq!(captured.header("x-test"), Some("yes"));
    }

    #[rstest]
    #[tokio::test]
    async fn failure_status_is_a_response(sender: UreqSender) {
        let server = MockServer::respond_once(400, "{\"detail\":\"bad\"}");
        let response = sender
            .send(post_request(server.url("/"), b"x"), &CancellationToken::new())
            .await
            .expect("response");
        assert_eq!(response.status, 400);
        assert_eq!(response.body_text().as_deref(), Some("{\"detail\":\"bad\"}"));
    }

    #[rstest]
    #[tokio::test]
    async fn truncated_success_body_is_still_success(sender: UreqSender) {
        let server = MockServer::raw_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nok",
        );
        let response = sender
            .send(post_request(server.url("/"), b"x"), &CancellationToken::new())
            .await
            .expect("response");
        assert_eq!(response, TransportResponse::new(200));
    }

    #[rstest]
    #[tokio::test]
    async fn unreadable_failure_body_yields_no_body(sender: UreqSender) {
        let server = MockServer::raw_once(
            "HTTP/1.1 400 Bad Request\r\nContent-Length: 100\r\nConnection: close\r\n\r\nbad",
        );
        let response = sender
            .send(post_request(server.url("/"), b"x"), &CancellationToken::new())
            .await
            .expect("response");
        assert_eq!(response, TransportResponse::new(400));
    }

    #[rstest]
    #[tokio::test]
    async fn pre_cancelled_token_skips_the_network(sender: UreqSender) {
        let server = MockServer::respond_once(200, "");
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = sender.send(post_request(server.url("/"), b"x"), &cancel).await;
        assert!(matches!(result, Err(SendError::Cancelled)));
        assert!(
            server.try_received(Duration::from_millis(200)).is_none(),
            "no request expected"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn cancellation_interrupts_in_flight_request(sender: UreqSender) {
        let server = MockServer::hold_once();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let result = sender.send(post_request(server.url("/"), b"x"), &cancel).await;

        assert!(matches!(result, Err(SendError::Cancelled)));
        assert_eq!(server.received().body, b"x");
    }

    #[rstest]
    #[tokio::test]
    async fn refused_connection_is_a_transport_fault(sender: UreqSender) {
        let url = format!("http://{}/", unused_addr());
        let result = sender.send(post_request(url, b"x"), &CancellationToken::new()).await;
        assert!(matches!(
            result,
            Err(SendError::Transport(TransportFault::Connect(_)))
        ));
    }
}
