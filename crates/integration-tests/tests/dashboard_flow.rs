//! Tab pages and mutations against the built-in backend.

use vendor_dashboard_integration_tests::{TestContext, count, unread_badge};

#[tokio::test]
async fn test_overview_shows_summary_and_previews() {
    let ctx = TestContext::signed_in().await;

    let page = ctx.page("/").await;

    assert!(page.contains(r#"<p class="card-value">$12,540</p>"#));
    assert!(page.contains(r#"<p class="card-value">289</p>"#));
    assert!(page.contains(r#"<p class="card-value">42</p>"#));
    assert!(page.contains(r#"<p class="card-value">56</p>"#));
    assert_eq!(count(&page, r#"class="order-row""#), 5);
    assert_eq!(count(&page, r#"class="product-item""#), 5);
    assert!(page.contains("width: 28%"));
    assert!(page.contains("width: 100%"));
    assert_eq!(count(&page, "data-chart="), 2);
}

#[tokio::test]
async fn test_order_status_filter() {
    let ctx = TestContext::signed_in().await;

    let page = ctx.page("/orders?status=Processing").await;
    assert_eq!(count(&page, r#"class="order-row""#), 2);
    assert!(page.contains("#ORD-7841"));
    assert!(page.contains("#ORD-7838"));

    // The filter sticks until changed.
    let page = ctx.page("/orders").await;
    assert_eq!(count(&page, r#"class="order-row""#), 2);

    let page = ctx.page("/orders?status=all").await;
    assert_eq!(count(&page, r#"class="order-row""#), 5);
}

#[tokio::test]
async fn test_search_narrows_products() {
    let ctx = TestContext::signed_in().await;

    let page = ctx.page("/products?q=watch").await;
    assert_eq!(count(&page, r#"class="product-row""#), 1);
    assert!(page.contains("Smart Watch"));

    let page = ctx.page("/products?q=").await;
    assert_eq!(count(&page, r#"class="product-row""#), 5);
}

#[tokio::test]
async fn test_update_order_status() {
    let ctx = TestContext::signed_in().await;

    let page = ctx
        .submit(
            "/orders/status",
            &[("order_id", "#ORD-7841"), ("status", "Shipped")],
        )
        .await;
    assert!(!page.contains("Failed to update order status."));

    let page = ctx.page("/orders?status=Processing").await;
    assert_eq!(count(&page, r#"class="order-row""#), 1);
    let page = ctx.page("/orders?status=Shipped").await;
    assert_eq!(count(&page, r#"class="order-row""#), 2);
}

#[tokio::test]
async fn test_unknown_order_shows_alert() {
    let ctx = TestContext::signed_in().await;

    let page = ctx
        .submit(
            "/orders/status",
            &[("order_id", "#ORD-0000"), ("status", "Shipped")],
        )
        .await;

    assert!(page.contains("Failed to update order status."));
    assert_eq!(count(&page, r#"class="order-row""#), 5);
}

#[tokio::test]
async fn test_add_product() {
    let ctx = TestContext::signed_in().await;

    let page = ctx
        .submit(
            "/products",
            &[
                ("name", "Widget"),
                ("price", "9.99"),
                ("stock", "10"),
                ("description", ""),
            ],
        )
        .await;
    assert!(page.contains("Added Widget."));
    assert_eq!(count(&page, r#"class="product-row""#), 6);
    assert!(page.contains("$9.99"));

    let page = ctx.page("/").await;
    assert!(page.contains(r#"<p class="card-value">43</p>"#));
}

#[tokio::test]
async fn test_invalid_product_reopens_form() {
    let ctx = TestContext::signed_in().await;

    let page = ctx
        .submit(
            "/products",
            &[("name", "Widget"), ("price", "cheap"), ("stock", "10")],
        )
        .await;

    assert!(page.contains("Invalid product"));
    assert!(page.contains("Add New Product</h3>"));
    assert_eq!(count(&page, r#"class="product-row""#), 5);
}

#[tokio::test]
async fn test_edit_product() {
    let ctx = TestContext::signed_in().await;

    let form = ctx.page("/products?edit=2").await;
    assert!(form.contains("Edit Product"));
    assert!(form.contains(r#"value="Smart Watch""#));

    let page = ctx
        .submit(
            "/products/2",
            &[
                ("name", "Smart Watch Pro"),
                ("price", "249.99"),
                ("stock", "30"),
                ("description", ""),
            ],
        )
        .await;
    assert!(page.contains("Updated Smart Watch Pro."));
    assert!(page.contains("$249.99"));
    assert_eq!(count(&page, r#"class="product-row""#), 5);
}

#[tokio::test]
async fn test_mark_notification_read_is_idempotent() {
    let ctx = TestContext::signed_in().await;

    let page = ctx.page("/").await;
    assert_eq!(unread_badge(&page), Some(2));

    let form = [("return_to", "/")];
    let page = ctx.submit("/notifications/1/read", &form).await;
    assert_eq!(unread_badge(&page), Some(1));

    let page = ctx.submit("/notifications/1/read", &form).await;
    assert_eq!(unread_badge(&page), Some(1));

    let page = ctx.submit("/notifications/2/read", &form).await;
    assert_eq!(unread_badge(&page), None);
}

#[tokio::test]
async fn test_customers_and_analytics() {
    let ctx = TestContext::signed_in().await;

    let page = ctx.page("/customers").await;
    assert_eq!(count(&page, r#"class="customer-row""#), 5);
    assert!(page.contains("Sarah Johnson"));

    let page = ctx.page("/analytics").await;
    assert_eq!(count(&page, "data-chart="), 3);

    let page = ctx.page("/settings").await;
    assert!(page.contains("My Store"));
    assert!(page.contains("Weekly sales reports"));
}

#[tokio::test]
async fn test_refresh_keeps_server_state() {
    let ctx = TestContext::signed_in().await;

    ctx.submit(
        "/orders/status",
        &[("order_id", "#ORD-7842"), ("status", "Cancelled")],
    )
    .await;

    let page = ctx.submit("/refresh", &[("return_to", "/orders")]).await;
    assert!(page.contains("Order Management"));
    let page = ctx.page("/orders?status=Cancelled").await;
    assert_eq!(count(&page, r#"class="order-row""#), 1);
}
