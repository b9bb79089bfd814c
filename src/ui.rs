use crate::models::Cart;
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeState {
    pub count: u64,
    pub visible: bool,
}

pub fn badge_state(cart: &Cart) -> BadgeState {
    let count = cart.item_count();
    BadgeState {
        count,
        visible: count > 0,
    }
}

pub fn render_badge(page: &dyn Page, selector: &str, badge: BadgeState) {
    page.set_text(selector, &badge.count.to_string());
    page.set_visible(selector, badge.visible);
}

pub fn qr_code_path(amount: f64) -> String {
    format!("/generate_qr/{amount}")
}

pub fn bill_path(order_id: impl std::fmt::Display) -> String {
    format!("/bill/{order_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;
    use crate::page::HeadlessPage;

    fn item(menu_id: u64, quantity: u32) -> CartItem {
        CartItem {
            menu_id: Some(menu_id),
            id: None,
            quantity,
            name: None,
            price: None,
            image: None,
            total: None,
        }
    }

    #[test]
    fn badge_sums_quantities() {
        let cart = Cart {
            items: vec![item(1, 2), item(2, 3)],
            total: None,
        };
        assert_eq!(badge_state(&cart), BadgeState { count: 5, visible: true });
    }

    #[test]
    fn empty_cart_hides_badge() {
        assert_eq!(
            badge_state(&Cart::default()),
            BadgeState { count: 0, visible: false }
        );
    }

    #[test]
    fn render_writes_text_and_visibility() {
        let page = HeadlessPage::new().with_element("cartBadge");
        render_badge(&page, "cartBadge", BadgeState { count: 0, visible: false });

        let badge = page.element("cartBadge").unwrap();
        assert_eq!(badge.text, "0");
        assert!(!badge.visible);
    }

    #[test]
    fn qr_path_uses_shortest_amount() {
        assert_eq!(qr_code_path(42.0), "/generate_qr/42");
        assert_eq!(qr_code_path(42.5), "/generate_qr/42.5");
        assert_eq!(bill_path(7), "/bill/7");
    }
}
