//! Walkthrough of an admin session: login, browse the day's sales and
//! reservations, finalize a pending sale.
//!
//! Expects a running backend:
//! ```sh
//! FONDA_URL=http://localhost:8080 cargo run --example admin_session -- admin secret
//! ```

use fonda_client::{ClientConfig, FondaClient};
use shared::reservation::ReservationStats;
use shared::sale::{SaleQuery, SaleStats};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let username = args.next().unwrap_or_else(|| "admin".to_string());
    let password = args.next().unwrap_or_else(|| "admin".to_string());

    let base_url =
        std::env::var("FONDA_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let mut client = FondaClient::new(ClientConfig::new(base_url));

    let session = client.login(&username, &password).await?;
    println!("logged in as {} (staff: {})", session.username(), session.is_staff());

    let sales = client.sales().list(&SaleQuery::new()).await?;
    let stats = SaleStats::collect(&sales);
    println!(
        "{} sales: {} finalized, {} pending, {} cancelled, revenue {:.2}",
        stats.total, stats.finalized, stats.pending, stats.cancelled, stats.revenue
    );

    let reservations = client.reservations().list().await?;
    let today = chrono::Local::now().date_naive();
    let rstats = ReservationStats::collect(&reservations, today);
    println!(
        "{} reservations, {} today, {} pending",
        rstats.total, rstats.today, rstats.pending
    );

    if let Some(sale) = sales.iter().find(|s| s.can_finalize()) {
        println!("finalizing sale #{} (total {:.2})", sale.id, sale.total());
        match client.sales().finalize(sale).await {
            Ok(updated) => println!("sale #{} is now {:?}", updated.id, updated.status),
            Err(e) => {
                client.dispose(&e);
                eprintln!("finalize failed: {e}");
            }
        }
    }

    client.logout();
    Ok(())
}
