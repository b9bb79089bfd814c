pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod notify;
pub mod page;
pub mod ui;

pub use api::ApiClient;
pub use cart::CartClient;
pub use checkout::CheckoutClient;
pub use config::ClientConfig;
pub use controller::PageController;
pub use errors::ClientError;
pub use notify::{ChannelNotifier, LogNotifier, Notification, NotificationKind, Notifier};
pub use page::{HeadlessPage, Page};
