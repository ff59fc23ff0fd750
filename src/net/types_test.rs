use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_superadmin_flag() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Alice",
        "is_superadmin": true
    }))
    .unwrap();
    assert!(user.is_superadmin);
    assert_eq!(user.email, None);
}

#[test]
fn user_missing_superadmin_flag_denies() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "name": "Alice" })).unwrap();
    assert!(!user.is_superadmin);
}

#[test]
fn user_malformed_superadmin_flag_denies() {
    for flag in [
        serde_json::json!("true"),
        serde_json::json!(1),
        serde_json::Value::Null,
        serde_json::json!({ "value": true }),
    ] {
        let user: User =
            serde_json::from_value(serde_json::json!({ "id": "u1", "name": "Alice", "is_superadmin": flag }))
                .unwrap();
        assert!(!user.is_superadmin);
    }
}

// =============================================================
// Listing
// =============================================================

#[test]
fn listing_accepts_float_encoded_price() {
    let listing: Listing = serde_json::from_value(serde_json::json!({
        "id": "l1",
        "owner_id": "u1",
        "title": "Loft",
        "price": 250_000.0,
        "city": "Lyon"
    }))
    .unwrap();
    assert_eq!(listing.price, 250_000);
    assert_eq!(listing.description, "");
}

#[test]
fn listing_rejects_fractional_price() {
    let result: Result<Listing, _> = serde_json::from_value(serde_json::json!({
        "id": "l1",
        "owner_id": "u1",
        "title": "Loft",
        "price": 10.5,
        "city": "Lyon"
    }));
    assert!(result.is_err());
}

#[test]
fn draft_from_listing_copies_editable_fields() {
    let listing = Listing {
        id: "l1".to_owned(),
        owner_id: "u1".to_owned(),
        title: "Loft".to_owned(),
        price: 1200,
        city: "Lyon".to_owned(),
        description: "Bright".to_owned(),
        created_at: None,
    };
    let draft = ListingDraft::from(&listing);
    assert_eq!(draft.title, "Loft");
    assert_eq!(draft.price, 1200);
    assert_eq!(draft.city, "Lyon");
    assert_eq!(draft.description, "Bright");
}

#[test]
fn profile_defaults_missing_listings() {
    let profile: UserProfile =
        serde_json::from_value(serde_json::json!({ "id": "u1", "name": "Alice" })).unwrap();
    assert!(profile.listings.is_empty());
}
