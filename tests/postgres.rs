//! Postgres store tests. Run only when `TEST_DATABASE_URL` points at a scratch database.

use std::sync::Arc;

use rust_shop::catalog;
use rust_shop::config::DatabaseConfig;
use rust_shop::error::AppError;
use rust_shop::orders;
use rust_shop::persistence::{PgStore, create_pool_and_migrate};
use rust_shop::store::{SharedStore, Store};
use rust_shop::types::order::OrderPayload;
use rust_shop::types::product::ProductPayload;

async fn pg_store() -> Option<PgStore> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = create_pool_and_migrate(&DatabaseConfig {
        url,
        max_connections: 10,
    })
    .await
    .unwrap();
    Some(PgStore::new(pool))
}

fn widget(stock: i64) -> ProductPayload {
    ProductPayload {
        name: "Widget".to_string(),
        price: 9.5,
        stock,
    }
}

#[tokio::test]
async fn product_crud_roundtrip() {
    let Some(store) = pg_store().await else {
        return;
    };

    let created = catalog::create_product(&store, &widget(10)).await.unwrap();
    assert_eq!(catalog::get_product(&store, created.id).await.unwrap(), created);

    let updated = catalog::update_product(
        &store,
        created.id,
        &ProductPayload {
            name: "Gadget".to_string(),
            price: 1.25,
            stock: 4,
        },
    )
    .await
    .unwrap();
    assert_eq!((updated.name.as_str(), updated.price, updated.stock), ("Gadget", 1.25, 4));

    catalog::delete_product(&store, created.id).await.unwrap();
    let err = catalog::get_product(&store, created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn order_commits_stock_and_snapshot_together() {
    let Some(store) = pg_store().await else {
        return;
    };
    let product = catalog::create_product(&store, &widget(10)).await.unwrap();

    let placed = orders::create_order(
        &store,
        &OrderPayload {
            product_id: product.id,
            quantity: 3,
        },
    )
    .await
    .unwrap();
    assert_eq!(placed.product_name, "Widget");
    assert_eq!(placed.total_price, 28.5);
    assert_eq!(catalog::get_product(&store, product.id).await.unwrap().stock, 7);

    let err = orders::create_order(
        &store,
        &OrderPayload {
            product_id: product.id,
            quantity: 8,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InsufficientStock));
    assert_eq!(catalog::get_product(&store, product.id).await.unwrap().stock, 7);

    let listed = store.list_orders().await.unwrap();
    assert!(listed.iter().any(|o| o.id == placed.id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_orders_never_oversell() {
    let Some(store) = pg_store().await else {
        return;
    };
    let store: SharedStore = Arc::new(store);
    let product = catalog::create_product(store.as_ref(), &widget(5)).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..12 {
        let store = store.clone();
        let product_id = product.id;
        handles.push(tokio::spawn(async move {
            orders::create_order(
                store.as_ref(),
                &OrderPayload {
                    product_id,
                    quantity: 1,
                },
            )
            .await
        }));
    }

    let mut placed = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            placed += 1;
        }
    }

    assert_eq!(placed, 5);
    assert_eq!(
        catalog::get_product(store.as_ref(), product.id).await.unwrap().stock,
        0
    );
}
