//! DeskQueue Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    AdvanceResponse, Client, ListResponse, RemoveResponse, ServiceType, StatsResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;

/// DeskQueue daemon client
///
/// # Example
///
/// ```no_run
/// use deskqueue_sdk::DeskQueueClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DeskQueueClient::connect("http://127.0.0.1:9530").await?;
/// for c in client.list().await? {
///     println!("{} {}", c.position, c.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DeskQueueClient {
    client: HttpClient,
}

impl DeskQueueClient {
    /// Connect to the DeskQueue daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9530`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Waiting list, head first
    pub async fn list(&self) -> Result<Vec<Client>> {
        let response: ListResponse = self.client.request("queue.list.v1", rpc_params![]).await?;
        Ok(response.clients)
    }

    /// Client at `position`
    pub async fn get(&self, position: i64) -> Result<Client> {
        let params = position_params(position)?;
        let response: Client = self.client.request("queue.get.v1", params).await?;
        Ok(response)
    }

    /// Register a client at the tail of the queue
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use deskqueue_sdk::{DeskQueueClient, ServiceType};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = DeskQueueClient::connect("http://127.0.0.1:9530").await?;
    /// let bia = client.append("Bia", ServiceType::Priority).await?;
    /// assert!(!bia.served);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn append(&self, name: impl Into<String>, service_type: ServiceType) -> Result<Client> {
        self.append_raw(name, service_type.as_str()).await
    }

    /// Register with an unchecked service type string; the daemon validates it
    pub async fn append_raw(
        &self,
        name: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Result<Client> {
        let mut params = ObjectParams::new();
        params.insert("name", name.into())?;
        params.insert("service_type", service_type.into())?;

        let response: Client = self.client.request("queue.append.v1", params).await?;
        Ok(response)
    }

    /// Serve and remove the head of the queue
    pub async fn advance(&self) -> Result<AdvanceResponse> {
        let response: AdvanceResponse =
            self.client.request("queue.advance.v1", rpc_params![]).await?;
        Ok(response)
    }

    /// Remove the client at `position`
    pub async fn remove(&self, position: i64) -> Result<RemoveResponse> {
        let params = position_params(position)?;
        let response: RemoveResponse = self.client.request("queue.remove.v1", params).await?;
        Ok(response)
    }

    /// Queue statistics
    pub async fn stats(&self) -> Result<StatsResponse> {
        let response: StatsResponse = self.client.request("admin.stats.v1", rpc_params![]).await?;
        Ok(response)
    }
}

fn position_params(position: i64) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    params.insert("position", position)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_bad_url() {
        let result = DeskQueueClient::connect("not a url").await;
        assert!(matches!(result, Err(SdkError::Connection(_))));
    }
}
