use tracing::{error, info, Instrument};

use shopping_cart::app_system::{setup_tracing, ShoppingSystem, SystemConfig};
use shopping_cart::domain::{Customer, Product};
use shopping_cart::error::BuyError;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting application with shopping system");

    let catalog = [Product::with_count("apple", 5), Product::with_count("banana", 2)];
    let system = ShoppingSystem::new(SystemConfig::default(), catalog);

    let apple = system
        .client
        .get_product_by_name("apple".to_string())
        .await
        .map_err(|e| e.to_string())?;

    let first = Customer::new(1, "firstCustomer");
    let second = Customer::new(2, "secondCustomer");

    for (customer, quantity) in [(first, 4), (second, 2)] {
        let span = tracing::info_span!("purchase", customer_id = customer.id);
        let result = async {
            let mut cart = system.client.get_cart(customer).await?;
            cart.add(&apple, quantity)?;
            info!(quantity, "Buying apples");
            Ok::<_, BuyError>(system.client.buy(cart).await?)
        }
        .instrument(span)
        .await;

        match result {
            Ok(bought) => info!(bought, "Purchase finished"),
            Err(e) => error!(error = %e, "Purchase failed"),
        }
    }

    let products = system
        .client
        .get_all_products()
        .await
        .map_err(|e| e.to_string())?;
    for product in &products {
        info!(product = %product.name, count = product.count, "Stock level");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
