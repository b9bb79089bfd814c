use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::{ActionResponse, AddToCartRequest, UpdateCartRequest};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::page::Page;
use crate::ui::{badge_state, render_badge};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

pub const ADDED_MESSAGE: &str = "Item added to cart!";
pub const ADD_FAILED_MESSAGE: &str = "Error adding item to cart";
pub const UPDATE_FAILED_MESSAGE: &str = "Error updating cart";
pub const REMOVE_FAILED_MESSAGE: &str = "Error removing item from cart";
pub const CLEAR_FAILED_MESSAGE: &str = "Error clearing cart";

/// Adds to the server-side cart and keeps the item-count badge current.
///
/// Every operation swallows its failures: they end up in the log and, for
/// mutations, as an error notification. Nothing is returned to the caller.
#[derive(Clone)]
pub struct CartClient {
    api: ApiClient,
    page: Arc<dyn Page>,
    notifier: Arc<dyn Notifier>,
}

impl CartClient {
    pub fn new(api: ApiClient, page: Arc<dyn Page>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, page, notifier }
    }

    pub async fn on_page_load(&self) {
        self.update_cart_badge().await;
    }

    pub async fn add_to_cart(&self, menu_id: u64, quantity: Option<u32>) {
        let request = AddToCartRequest {
            menu_id,
            quantity: quantity.unwrap_or(1),
        };
        let result = self.api.add_to_cart(&request).await;
        self.finish_mutation("add to cart", result, Some(ADDED_MESSAGE), ADD_FAILED_MESSAGE)
            .await;
    }

    /// Runs [`CartClient::add_to_cart`] on its own task.
    pub fn spawn_add_to_cart(&self, menu_id: u64, quantity: Option<u32>) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move { client.add_to_cart(menu_id, quantity).await })
    }

    /// A quantity of zero drops the line on the server.
    pub async fn update_quantity(&self, menu_id: u64, quantity: u32) {
        let result = self
            .api
            .update_cart(menu_id, &UpdateCartRequest { quantity })
            .await;
        self.finish_mutation("update cart", result, None, UPDATE_FAILED_MESSAGE)
            .await;
    }

    pub async fn remove_from_cart(&self, menu_id: u64) {
        let result = self.api.remove_from_cart(menu_id).await;
        self.finish_mutation("remove from cart", result, None, REMOVE_FAILED_MESSAGE)
            .await;
    }

    pub async fn clear_cart(&self) {
        let result = self.api.clear_cart().await;
        self.finish_mutation("clear cart", result, None, CLEAR_FAILED_MESSAGE)
            .await;
    }

    pub async fn update_cart_badge(&self) {
        let selector = self.api.config().badge_id.as_str();
        if !self.page.contains(selector) {
            debug!("badge element {selector:?} not on page");
            return;
        }

        match self.api.get_cart().await {
            Ok(cart) => render_badge(self.page.as_ref(), selector, badge_state(&cart)),
            Err(err) => error!("failed to refresh cart badge: {err}"),
        }
    }

    pub fn show_notification(&self, message: &str, kind: NotificationKind) {
        self.notifier.notify(Notification::new(message, kind));
    }

    async fn finish_mutation(
        &self,
        action: &str,
        result: Result<ActionResponse, ClientError>,
        success_message: Option<&str>,
        failure_message: &str,
    ) {
        match result {
            Ok(response) if response.success => {
                self.update_cart_badge().await;
                if let Some(message) = success_message {
                    self.show_notification(message, NotificationKind::Success);
                }
            }
            Ok(response) => {
                let reason = response.error.unwrap_or_else(|| "success flag not set".to_string());
                error!("{action} rejected: {reason}");
                self.show_notification(failure_message, NotificationKind::Error);
            }
            Err(err) => {
                error!("{action} failed: {err}");
                self.show_notification(failure_message, NotificationKind::Error);
            }
        }
    }
}
