#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::app_system::InventorySystem;
    use crate::auth::AuthStore;
    use crate::clients::CatalogClient;
    use crate::config::InventoryConfig;
    use crate::console::Console;
    use crate::domain::{InventoryLine, InventoryView, Product, ProductPatch, SearchField, StockAdjustment};
    use crate::mock_framework::{create_mock_client, expect_action, expect_list, expect_silence};
    use crate::product_actor::{CatalogError, ProductAction, ProductActionResult};

    #[tokio::test]
    async fn test_denied_calls_never_reach_the_actor() {
        let (inner, mut product_rx) = create_mock_client::<Product>(10);
        let catalog = CatalogClient::new(inner, 10);
        let user = AuthStore::with_default_accounts().authenticate("user", "user123").unwrap();

        let err = catalog.delete_product(&user, "P1".into()).await.unwrap_err();
        assert!(matches!(err, CatalogError::PermissionDenied { .. }));
        let err = catalog
            .edit_product(&user, "P1".into(), ProductPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::PermissionDenied { .. }));

        expect_silence(&mut product_rx);
    }

    #[tokio::test]
    async fn test_adjust_stock_uses_configured_threshold() {
        let (inner, mut product_rx) = create_mock_client::<Product>(10);
        let catalog = CatalogClient::new(inner, 3);
        let admin = AuthStore::with_default_accounts().authenticate("admin", "admin123").unwrap();

        let adjust_task = tokio::spawn(async move { catalog.adjust_stock(&admin, "P1".into(), 2).await });

        let (id, action, responder) = expect_action(&mut product_rx).await.expect("Expected Product Action");
        assert_eq!(id, "P1");
        match action {
            ProductAction::AdjustStock(delta) => assert_eq!(delta, 2),
        }
        responder
            .send(Ok(ProductActionResult::AdjustStock { name: "Widget".into(), new_quantity: 4 }))
            .unwrap();

        let result = adjust_task.await.unwrap();
        assert_eq!(
            result,
            Ok(StockAdjustment { product_name: "Widget".into(), new_quantity: 4, low_stock_warning: false })
        );
    }

    #[tokio::test]
    async fn test_view_inventory_reports_empty_explicitly() {
        let (inner, mut product_rx) = create_mock_client::<Product>(10);
        let catalog = CatalogClient::new(inner, 10);
        let user = AuthStore::with_default_accounts().authenticate("user", "user123").unwrap();

        let view_task = tokio::spawn(async move { catalog.view_inventory(&user).await });
        let responder = expect_list(&mut product_rx).await.expect("Expected List request");
        responder.send(Ok(Vec::new())).unwrap();

        assert_eq!(view_task.await.unwrap(), Ok(InventoryView::Empty));
    }

    #[tokio::test]
    async fn test_dropped_actor_surfaces_as_communication_error() {
        let (inner, product_rx) = create_mock_client::<Product>(10);
        let catalog = CatalogClient::new(inner, 10);
        drop(product_rx);

        let err = catalog.search_products("x", SearchField::Name).await.unwrap_err();
        assert!(matches!(err, CatalogError::ActorCommunicationError(_)));
    }

    #[tokio::test]
    async fn test_full_system_walkthrough() {
        let config = InventoryConfig::default();
        let system = InventorySystem::new(&config);
        let admin = system.auth_store.authenticate("admin", "admin123").unwrap();
        let user = system.auth_store.authenticate("user", "user123").unwrap();
        let catalog = &system.catalog_client;
        let price = Decimal::new(999, 2);

        catalog
            .add_product(&admin, "P1".into(), "Widget".into(), "Tools".into(), price, 5)
            .await
            .unwrap();
        assert_eq!(
            catalog.view_inventory(&user).await.unwrap(),
            InventoryView::Items(vec![InventoryLine {
                product: Product::new("P1", "Widget", "Tools", price, 5),
                is_low_stock: true,
            }])
        );

        let adjusted = catalog.adjust_stock(&admin, "P1".into(), -3).await.unwrap();
        assert_eq!(
            adjusted,
            StockAdjustment { product_name: "Widget".into(), new_quantity: 2, low_stock_warning: true }
        );

        let hits = catalog.search_products("wID", SearchField::Name).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "P1");

        assert!(matches!(
            catalog.delete_product(&user, "P1".into()).await,
            Err(CatalogError::PermissionDenied { .. })
        ));
        catalog.delete_product(&admin, "P1".into()).await.unwrap();
        assert_eq!(
            catalog.delete_product(&admin, "P1".into()).await,
            Err(CatalogError::NotFound("P1".into()))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_console_session_against_running_system() {
        let config = InventoryConfig { low_stock_threshold: 1, ..InventoryConfig::default() };
        let system = InventorySystem::new(&config);

        let script = "admin\nadmin123\n4\nB7\nBolt\nFasteners\n0.25\n2\n1\n0\n";
        let mut console = Console::new(script.as_bytes(), Vec::new());
        console.run(&system.auth_store, &system.catalog_client).await.unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();

        assert!(out.contains("ID: B7, Name: Bolt, Category: Fasteners, Price: $0.25, Stock: 2\n"));
        assert!(!out.contains("(Low Stock)"));

        system.shutdown().await.unwrap();
    }
}
