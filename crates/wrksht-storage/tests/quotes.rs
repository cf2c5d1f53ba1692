use wrksht_core::error::CoreError;
use wrksht_core::models::customer::Phone;
use wrksht_core::models::items::Window;
use wrksht_core::models::quote::Quote;
use wrksht_storage::error::StorageError;
use wrksht_storage::objects::object_url;
use wrksht_storage::quotes::{ProductCatalog, assemble_quote};

const QUOTE_JSON: &str = r#"{
    "id": "q-1",
    "number": 482,
    "createdAt": "2019-05-03T18:00:00Z",
    "updatedAt": "2019-05-04T12:30:00Z",
    "customer": {
        "name": {"first": "Jane", "last": "Doe"},
        "address": {
            "associate": "customer",
            "street1": "12 Main St",
            "city": "Welland",
            "province": "ON",
            "postalCode": "L3B 1A1"
        },
        "phones": [
            {"type": "mobile", "number": "111"},
            {"type": "mobile", "number": "333"}
        ]
    },
    "items": {
        "window": [{
            "dims": {"width": {"inch": 30}, "height": {"inch": 40}},
            "qty": 1,
            "productID": "p-1"
        }]
    }
}"#;

fn stored_quote() -> Quote {
    serde_json::from_str(QUOTE_JSON).unwrap()
}

fn catalog() -> ProductCatalog {
    [("p-1".to_string(), "Casement".to_string())].into_iter().collect()
}

#[test]
fn assembly_resolves_product_names() {
    let quote = assemble_quote(stored_quote(), &catalog()).unwrap();
    assert_eq!(quote.items.window[0].product_name, "Casement");
}

#[test]
fn assembly_builds_phone_map_with_last_duplicate_winning() {
    let quote = assemble_quote(stored_quote(), &catalog()).unwrap();
    assert_eq!(quote.customer.phone("mobile"), Some("333"));
    assert_eq!(quote.customer.phone("home"), None);
}

#[test]
fn assembly_keeps_address_associate() {
    let quote = assemble_quote(stored_quote(), &catalog()).unwrap();
    assert_eq!(quote.customer.address.associate, "customer");
}

#[test]
fn unknown_product_is_not_found() {
    let mut quote = stored_quote();
    quote.items.window.push(Window {
        product_id: "p-404".to_string(),
        ..Default::default()
    });

    let err = assemble_quote(quote, &catalog()).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { ref key } if key.ends_with("#p-404")));
}

#[test]
fn catalog_deserializes_from_id_map() {
    let catalog: ProductCatalog = serde_json::from_str(r#"{"p-1": "Casement", "p-2": "Awning"}"#).unwrap();
    assert_eq!(catalog.name("p-2"), Some("Awning"));
    assert_eq!(catalog.name("p-3"), None);
}

#[test]
fn phone_records_accept_legacy_id_label() {
    let phone: Phone = serde_json::from_str(r#"{"_id": "home", "number": "222"}"#).unwrap();
    assert_eq!(phone.kind, "home");
}

#[test]
fn object_url_is_virtual_hosted() {
    assert_eq!(
        object_url("wrksht-docs", "ca-central-1", "worksheet/sht-482.pdf"),
        "https://wrksht-docs.s3.ca-central-1.amazonaws.com/worksheet/sht-482.pdf"
    );
}

#[tokio::test]
async fn empty_quote_id_is_rejected_before_any_request() {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .region(aws_sdk_s3::config::Region::new("ca-central-1"))
        .build();
    let client = aws_sdk_s3::Client::from_conf(config);

    let err = wrksht_storage::quotes::fetch_quote(&client, "bucket", "  ")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::Input(CoreError::MissingField(ref field)) if field == "quote_id"
    ));
}

#[tokio::test]
#[ignore = "requires AWS credentials and WRKSHT_TEST_BUCKET"]
async fn fetches_quote_from_live_bucket() {
    let bucket = std::env::var("WRKSHT_TEST_BUCKET").unwrap();
    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "ca-central-1".to_string());
    let client = wrksht_storage::client::build_client(&region).await.unwrap();

    let quote = wrksht_storage::quotes::fetch_quote(&client, &bucket, "sample")
        .await
        .unwrap();
    assert!(quote.number > 0);
}
