use clap::{Parser, Subcommand};
use restaurant_client::{ClientConfig, HeadlessPage, LogNotifier, PageController};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "restaurant_client", about = "Cart and checkout client for the ordering backend")]
struct Cli {
    /// Backend origin; overrides APP_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run page-load initialization and report the resulting page state.
    Load {
        /// Treat the page as the checkout page.
        #[arg(long)]
        checkout_page: bool,
        /// Render without a cart badge element.
        #[arg(long)]
        no_badge: bool,
    },
    Add {
        menu_id: u64,
        #[arg(long)]
        quantity: Option<u32>,
    },
    Update {
        menu_id: u64,
        quantity: u32,
    },
    Remove {
        menu_id: u64,
    },
    Clear,
    /// Create an order from the current cart.
    Order,
    /// Print the QR code link for an amount.
    Qr {
        #[arg(value_parser = parse_amount)]
        amount: f64,
    },
    /// Print the bill link for an order.
    Bill {
        order_id: String,
    },
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    let amount = raw.parse::<f64>().map_err(|err| err.to_string())?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(format!("amount must be a finite number, got {raw}"))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }

    let mut page = HeadlessPage::new();
    if !matches!(cli.command, Command::Load { no_badge: true, .. }) {
        page = page.with_element(config.badge_id.clone());
    }
    if matches!(cli.command, Command::Load { checkout_page: true, .. }) {
        page = page.with_element(config.checkout_selector.clone());
    }
    let page = Arc::new(page);
    let controller = PageController::new(config.clone(), page.clone(), Arc::new(LogNotifier));

    match cli.command {
        Command::Load { .. } => controller.on_page_load().await,
        Command::Add { menu_id, quantity } => controller.cart().add_to_cart(menu_id, quantity).await,
        Command::Update { menu_id, quantity } => {
            controller.cart().update_quantity(menu_id, quantity).await
        }
        Command::Remove { menu_id } => controller.cart().remove_from_cart(menu_id).await,
        Command::Clear => controller.cart().clear_cart().await,
        Command::Order => match controller.checkout().create_order().await {
            Ok(order) => {
                let id = order.order_id.map(|id| id.to_string()).unwrap_or_default();
                println!("order {id}");
                if let Some(total) = order.total {
                    println!("{}", controller.checkout().generate_qr_code(total));
                }
            }
            Err(err) => {
                error!("order failed: {err}");
                return Err(err.into());
            }
        },
        Command::Qr { amount } => println!("{}", controller.checkout().generate_qr_code(amount)),
        Command::Bill { order_id } => controller.checkout().print_bill(&order_id),
    }

    let snapshot = page.snapshot();
    if let Some(badge) = snapshot.elements.get(&config.badge_id) {
        info!(count = %badge.text, visible = badge.visible, "cart badge");
    }
    if let Some(location) = &snapshot.location {
        println!("redirect {location}");
    }
    for (path, target) in &snapshot.opened {
        println!("open {path} {target}");
    }

    Ok(())
}
