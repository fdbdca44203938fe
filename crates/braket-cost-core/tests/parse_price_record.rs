use braket_cost_core::catalog::parse_price_record;
use serde_json::json;

#[test]
fn parse_realistic_braket_record() {
    // Shape as returned by GetProducts with format version aws_v1.
    let record = json!({
        "serviceCode": "AmazonBraket",
        "product": {
            "productFamily": "Braket Quantum Task",
            "sku": "5CZ2VF3NZHVYURCM",
            "attributes": {
                "servicecode": "AmazonBraket",
                "location": "US West (Oregon)",
                "usagetype": "USW2-Task-Shot",
                "operation": "CompleteTask",
                "devicename": "Advantage_system"
            }
        },
        "terms": {
            "OnDemand": {
                "5CZ2VF3NZHVYURCM.JRTCKXETXF": {
                    "offerTermCode": "JRTCKXETXF",
                    "priceDimensions": {
                        "5CZ2VF3NZHVYURCM.JRTCKXETXF.6YS6EN2CT7": {
                            "unit": "shots",
                            "description": "Price per shot on a D-Wave QPU",
                            "pricePerUnit": { "USD": "0.0001900000" }
                        }
                    }
                }
            }
        }
    });

    let (usage_type, price) = parse_price_record(&record).expect("should parse");
    assert_eq!(usage_type, "USW2-Task-Shot");
    assert!((price - 0.00019).abs() < 1e-12);
}

#[test]
fn parse_multiple_terms_last_wins() {
    // Two on-demand term ids for one SKU; map iteration is key-ordered, so
    // the price under the later key survives.
    let record = json!({
        "product": { "attributes": { "usagetype": "USE1-Task" } },
        "terms": {
            "OnDemand": {
                "SKU.TERM-A": {
                    "priceDimensions": {
                        "SKU.TERM-A.DIM": { "pricePerUnit": { "USD": "0.1000000000" } }
                    }
                },
                "SKU.TERM-B": {
                    "priceDimensions": {
                        "SKU.TERM-B.DIM": { "pricePerUnit": { "USD": "0.3000000000" } }
                    }
                }
            }
        }
    });

    let (_, price) = parse_price_record(&record).expect("should parse");
    assert!((price - 0.30).abs() < 1e-12);
}

#[test]
fn parse_skips_dimensions_without_usd() {
    let record = json!({
        "product": { "attributes": { "usagetype": "USE1-Task" } },
        "terms": {
            "OnDemand": {
                "t1": {
                    "priceDimensions": {
                        "a": { "pricePerUnit": { "CNY": "2.1000000000" } },
                        "b": { "pricePerUnit": { "USD": "0.3000000000" } }
                    }
                }
            }
        }
    });

    let (_, price) = parse_price_record(&record).expect("should parse");
    assert!((price - 0.30).abs() < 1e-12);
}

#[test]
fn parse_record_without_product_returns_none() {
    let record = json!({ "terms": { "OnDemand": {} } });
    assert!(parse_price_record(&record).is_none());
}

#[test]
fn parse_record_without_terms_returns_none() {
    let record = json!({
        "product": { "attributes": { "usagetype": "USE1-Task" } }
    });
    assert!(parse_price_record(&record).is_none());
}
