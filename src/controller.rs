use crate::api::ApiClient;
use crate::cart::CartClient;
use crate::checkout::CheckoutClient;
use crate::config::ClientConfig;
use crate::notify::Notifier;
use crate::page::Page;
use std::sync::Arc;

/// Owns both clients for one page and runs their load hooks when told to.
#[derive(Clone)]
pub struct PageController {
    cart: CartClient,
    checkout: CheckoutClient,
}

impl PageController {
    pub fn new(config: ClientConfig, page: Arc<dyn Page>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_api(ApiClient::new(config), page, notifier)
    }

    pub fn with_api(api: ApiClient, page: Arc<dyn Page>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cart: CartClient::new(api.clone(), Arc::clone(&page), notifier),
            checkout: CheckoutClient::new(api, page),
        }
    }

    pub async fn on_page_load(&self) {
        tokio::join!(self.cart.on_page_load(), self.checkout.on_page_load());
    }

    pub fn cart(&self) -> &CartClient {
        &self.cart
    }

    pub fn checkout(&self) -> &CheckoutClient {
        &self.checkout
    }
}
