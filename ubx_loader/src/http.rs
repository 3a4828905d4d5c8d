use std::{io::Read, time::Duration};
use ubx_assist::{AssistNowClient, FetchError};

/// Blocking HTTP client for the AssistNow service.
///
/// Errors never carry the request URL, it holds the API token.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl UreqClient {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("ubx_loader/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl AssistNowClient for UreqClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        match self.agent.get(url).call() {
            Ok(response) => {
                let mut body = vec![];
                response
                    .into_reader()
                    .read_to_end(&mut body)
                    .map_err(|e| FetchError::Transport(e.to_string()))?;
                Ok(body)
            },
            Err(ureq::Error::Status(code, _)) => Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(transport)) => {
                let reason = match transport.message() {
                    Some(message) => format!("{}: {}", transport.kind(), message),
                    None => transport.kind().to_string(),
                };
                Err(FetchError::Transport(reason))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_a_transport_error() {
        let client = UreqClient::default();
        let err = client.get("not a url?token=secret").unwrap_err();
        assert!(matches!(err, FetchError::Transport(ref reason) if !reason.contains("secret")));
    }
}
