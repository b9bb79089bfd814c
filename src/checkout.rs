use crate::api::ApiClient;
use crate::errors::{ClientError, DEFAULT_ORDER_ERROR};
use crate::models::{Cart, CreatedOrder};
use crate::page::Page;
use crate::ui::{bill_path, qr_code_path};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct CheckoutClient {
    api: ApiClient,
    page: Arc<dyn Page>,
}

impl CheckoutClient {
    pub fn new(api: ApiClient, page: Arc<dyn Page>) -> Self {
        Self { api, page }
    }

    /// Loads the summary only on pages that carry the checkout container.
    pub async fn on_page_load(&self) {
        if self.page.contains(&self.api.config().checkout_selector) {
            self.load_checkout_summary().await;
        }
    }

    pub async fn create_order(&self) -> Result<CreatedOrder, ClientError> {
        let response = self.api.create_order().await?;
        if response.success {
            if let Some(order_id) = &response.order.order_id {
                info!("order {order_id} created");
            }
            Ok(response.order)
        } else {
            Err(ClientError::rejected_or(response.error, DEFAULT_ORDER_ERROR))
        }
    }

    pub fn generate_qr_code(&self, amount: f64) -> String {
        qr_code_path(amount)
    }

    pub fn print_bill(&self, order_id: impl Display) {
        self.page.open_window(&bill_path(order_id), "_blank");
    }

    pub async fn load_checkout_summary(&self) {
        match self.api.get_cart().await {
            Ok(cart) if cart.is_empty() => self.page.navigate(&self.api.config().home_path),
            Ok(cart) => self.update_checkout_display(&cart),
            Err(err) => error!("error loading checkout: {err}"),
        }
    }

    /// Rendering of the summary belongs to the host page.
    pub fn update_checkout_display(&self, cart: &Cart) {
        debug!(items = cart.items.len(), "checkout summary loaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::page::HeadlessPage;

    fn client(page: Arc<HeadlessPage>) -> CheckoutClient {
        CheckoutClient::new(ApiClient::new(ClientConfig::default()), page)
    }

    #[test]
    fn qr_code_is_a_plain_link() {
        let checkout = client(Arc::new(HeadlessPage::new()));
        assert_eq!(checkout.generate_qr_code(42.0), "/generate_qr/42");
        assert_eq!(checkout.generate_qr_code(99.75), "/generate_qr/99.75");
    }

    #[test]
    fn print_bill_opens_new_window() {
        let page = Arc::new(HeadlessPage::new());
        let checkout = client(Arc::clone(&page));
        checkout.print_bill(12);

        let snapshot = page.snapshot();
        assert_eq!(snapshot.opened, vec![("/bill/12".to_string(), "_blank".to_string())]);
        assert_eq!(snapshot.location, None);
    }
}
