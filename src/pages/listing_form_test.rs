use super::*;

// =============================================================
// parse_price
// =============================================================

#[test]
fn parse_price_ignores_grouping() {
    assert_eq!(parse_price("250000"), Some(250_000));
    assert_eq!(parse_price(" 250 000 "), Some(250_000));
    assert_eq!(parse_price("1,250,000"), Some(1_250_000));
}

#[test]
fn parse_price_rejects_negative_and_fractional() {
    assert_eq!(parse_price("-5"), None);
    assert_eq!(parse_price("10.5"), None);
    assert_eq!(parse_price(""), None);
    assert_eq!(parse_price("abc"), None);
}

// =============================================================
// validate_listing_draft
// =============================================================

#[test]
fn validate_listing_draft_trims_fields() {
    assert_eq!(
        validate_listing_draft("  Loft  ", "1 200", " Lyon ", "  Bright  "),
        Ok(ListingDraft {
            title: "Loft".to_owned(),
            price: 1200,
            city: "Lyon".to_owned(),
            description: "Bright".to_owned(),
        })
    );
}

#[test]
fn validate_listing_draft_requires_title() {
    assert_eq!(validate_listing_draft("  ", "1", "Lyon", ""), Err("Enter a title."));
}

#[test]
fn validate_listing_draft_limits_title_length() {
    let long = "x".repeat(121);
    assert_eq!(
        validate_listing_draft(&long, "1", "Lyon", ""),
        Err("Keep the title under 120 characters.")
    );
    assert!(validate_listing_draft(&"x".repeat(120), "1", "Lyon", "").is_ok());
}

#[test]
fn validate_listing_draft_requires_price_and_city() {
    assert_eq!(
        validate_listing_draft("Loft", "cheap", "Lyon", ""),
        Err("Enter the price as a whole number.")
    );
    assert_eq!(validate_listing_draft("Loft", "1", " ", ""), Err("Enter a city."));
}

#[test]
fn validate_listing_draft_allows_empty_description() {
    assert_eq!(validate_listing_draft("Loft", "0", "Lyon", "").unwrap().description, "");
}
