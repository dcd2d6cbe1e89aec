use person_common::person::person_service_client::PersonServiceClient;
use person_common::person::{Person, PersonRequest};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tonic::transport::{Channel, Endpoint};
use tonic::Request;
use tracing::debug;

/// Deadline applied to every call, and to connection establishment.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server address {0:?}")]
    InvalidAddress(String),
    #[error("connection failed")]
    Connect(#[source] tonic::transport::Error),
    #[error("rpc failed")]
    Call(#[from] tonic::Status),
    #[error("deadline of {0:?} exceeded")]
    Timeout(Duration),
}

pub struct PersonClient {
    client: PersonServiceClient<Channel>,
    timeout: Duration,
}

impl PersonClient {
    /// Connects over plaintext HTTP/2 to `addr`, e.g. `http://server:50051`.
    pub async fn connect(addr: impl Into<String>) -> Result<Self, ClientError> {
        let addr = addr.into();
        let endpoint = Endpoint::from_shared(addr.clone())
            .map_err(|_| ClientError::InvalidAddress(addr.clone()))?
            .connect_timeout(CALL_TIMEOUT);

        let channel = endpoint.connect().await.map_err(ClientError::Connect)?;
        debug!(%addr, "connected");

        Ok(PersonClient {
            client: PersonServiceClient::new(channel),
            timeout: CALL_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shrinks the call timeout to whatever is left before `deadline`, so connect and call
    /// can share one budget.
    pub fn with_deadline(self, deadline: Instant) -> Self {
        let remaining = deadline.saturating_duration_since(Instant::now());
        self.with_timeout(remaining)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Calls `GetPerson`. When the deadline passes the in-flight call is dropped.
    pub async fn get_person(&mut self, id: i32) -> Result<Person, ClientError> {
        let request = Request::new(PersonRequest { id });

        let response = tokio::time::timeout(self.timeout, self.client.get_person(request))
            .await
            .map_err(|_| ClientError::Timeout(self.timeout))??;

        debug!(?response, "get_person");
        Ok(response.into_inner().person.unwrap_or_default())
    }
}
