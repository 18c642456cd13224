//! Integration tests for the vendor import endpoints:
//! - Mapping listing with distinct vendors
//! - Preview classification through the seeded acme_supply profile
//! - Import summary with per-row errors
//! - Duplicate configuration rejected with 409

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post_json};
use sqlx::PgPool;
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /vendor-import/mappings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mappings_listing_includes_vendors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/vendor-import/mappings").await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["data"]["vendors"], json!(["acme_supply", "global_parts"]));
    assert!(json["data"]["mappings"].as_array().unwrap().len() >= 8);
}

// ---------------------------------------------------------------------------
// Test: POST /vendor-import/preview maps, transforms, and normalizes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn preview_standardizes_acme_rows(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({
        "vendor": "acme_supply",
        "rows": [
            {"item_num": "AC-1001", "desc": "Hex Bolt", "mat": "ss", "qty": "  5  "}
        ]
    });
    let response = post_json(app, "/api/v1/vendor-import/preview", body).await;
    let json = expect_json(response, StatusCode::OK).await;

    let row = &json["data"]["rows"][0];
    assert_eq!(row["original"]["mat"], "ss");
    assert_eq!(row["mapped"]["sku"], "AC-1001");
    assert_eq!(row["mapped"]["name"], "Hex Bolt");
    // "ss" uppercased by the mapping transform, then normalized.
    assert_eq!(row["mapped"]["material"], "STAINLESS_STEEL");
    // trim transform applied to the quantity column.
    assert_eq!(row["mapped"]["quantity"], "5");
    // No rules are configured for the acme_supply brand fallback.
    assert_eq!(row["violations"], json!([]));
}

// ---------------------------------------------------------------------------
// Test: POST /vendor-import/import summarizes with 1-based row errors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn import_summarizes_brand_violations(pool: PgPool) {
    let app = common::build_test_app(pool);
    // Unmapped vendor: rows pass through unchanged and the brand column
    // selects the seeded Brand_1 rules.
    let body = json!({
        "vendor": "direct_feed",
        "rows": [
            {"sku": "B1-AB0001", "name": "Good Widget", "cost": 40, "msrp": 100,
             "brand": "Brand_1"},
            {"sku": "bad-sku", "name": "Bad Widget", "cost": 40, "brand": "Brand_1"}
        ]
    });
    let response = post_json(app, "/api/v1/vendor-import/import", body).await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["data"]["imported"], 1);
    assert_eq!(json["data"]["skipped"], 1);
    assert_eq!(json["data"]["total"], 2);

    let errors = json["data"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["row_index"], 2);
    // Missing msrp and a malformed SKU; absent msrp skips the price checks.
    let violations = errors[0]["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: empty batch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn import_with_no_rows_summarizes_to_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({"vendor": "acme_supply"});
    let response = post_json(app, "/api/v1/vendor-import/import", body).await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["data"]["imported"], 0);
    assert_eq!(json["data"]["total"], 0);
}

// ---------------------------------------------------------------------------
// Test: duplicate mapping returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_mapping_returns_conflict(pool: PgPool) {
    let body = json!({
        "vendor_name": "new_vendor",
        "vendor_column": "prod_code",
        "erp_column": "sku",
        "transform_rule": null
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/vendor-import/mappings", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/vendor-import/mappings", body).await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: duplicate normalization returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_normalization_returns_conflict(pool: PgPool) {
    // (material, SS) is already seeded.
    let body = json!({
        "attribute_type": "material",
        "raw_value": "SS",
        "normalized_value": "STAINLESS_STEEL"
    });
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/normalizations", body).await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}
