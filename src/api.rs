use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{
    ActionResponse, AddToCartRequest, Cart, OrderResponse, UpdateCartRequest,
};
use reqwest::{Client, header::CONTENT_TYPE};
use tracing::debug;

/// Typed access to the ordering backend. One method per endpoint, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get_cart(&self) -> Result<Cart, ClientError> {
        let url = self.config.endpoint("/cart");
        debug!("GET {url}");
        let cart = self.http.get(url).send().await?.json::<Cart>().await?;
        Ok(cart)
    }

    pub async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<ActionResponse, ClientError> {
        let url = self.config.endpoint("/add_to_cart");
        debug!("POST {url} menu_id={} quantity={}", request.menu_id, request.quantity);
        let response = self.http.post(url).json(request).send().await?;
        Ok(response.json::<ActionResponse>().await?)
    }

    pub async fn update_cart(
        &self,
        menu_id: u64,
        request: &UpdateCartRequest,
    ) -> Result<ActionResponse, ClientError> {
        let url = self.config.endpoint(&format!("/update_cart/{menu_id}"));
        debug!("POST {url} quantity={}", request.quantity);
        let response = self.http.post(url).json(request).send().await?;
        Ok(response.json::<ActionResponse>().await?)
    }

    pub async fn remove_from_cart(&self, menu_id: u64) -> Result<ActionResponse, ClientError> {
        let url = self.config.endpoint(&format!("/remove_from_cart/{menu_id}"));
        debug!("DELETE {url}");
        let response = self.http.delete(url).send().await?;
        Ok(response.json::<ActionResponse>().await?)
    }

    pub async fn clear_cart(&self) -> Result<ActionResponse, ClientError> {
        let url = self.config.endpoint("/clear_cart");
        debug!("POST {url}");
        let response = self.http.post(url).send().await?;
        Ok(response.json::<ActionResponse>().await?)
    }

    /// The body is decoded whatever the status code; failures arrive as `{error}`.
    pub async fn create_order(&self) -> Result<OrderResponse, ClientError> {
        let url = self.config.endpoint("/create_order");
        debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Ok(response.json::<OrderResponse>().await?)
    }
}
