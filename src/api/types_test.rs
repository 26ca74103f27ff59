use super::*;

// =============================================================================
// ApiError Display
// =============================================================================

#[test]
fn display_status_includes_code() {
    let err = ApiError::Status { status: 422, body: "validation".into() };
    assert!(err.to_string().contains("422"));
}

#[test]
fn display_unauthorized() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
}

// =============================================================================
// Record deserialization from server-shaped JSON
// =============================================================================

#[test]
fn user_deserializes_from_server_json() {
    let json = r#"{
        "_id": "65f0a1",
        "email": "ada@example.com",
        "full_name": "Ada Lovelace",
        "picture": null,
        "created_at": "2025-03-01T10:00:00",
        "updated_at": "2025-03-02T11:30:00",
        "is_active": true
    }"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "65f0a1");
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(user.picture, None);
    assert!(user.is_active);
}

#[test]
fn user_accepts_plain_id_key() {
    let json = serde_json::json!({
        "id": "65f0a1",
        "email": "ada@example.com",
        "full_name": "Ada Lovelace",
        "picture": "https://example.com/a.png",
        "created_at": "2025-03-01T10:00:00",
        "updated_at": "2025-03-01T10:00:00",
        "is_active": true
    });

    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.id, "65f0a1");
    assert_eq!(user.picture.as_deref(), Some("https://example.com/a.png"));
}

#[test]
fn technology_deserializes_with_null_optionals() {
    let json = r#"{
        "_id": "t1",
        "name": "Rust",
        "quadrant": "Languages & Frameworks",
        "ring": "Adopt",
        "description": null,
        "source": null,
        "date_of_assessment": null,
        "uri": null,
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-01T00:00:00"
    }"#;

    let tech: Technology = serde_json::from_str(json).unwrap();
    assert_eq!(tech.name, "Rust");
    assert_eq!(tech.description, None);
    assert_eq!(tech.uri, None);
}

#[test]
fn login_response_deserializes() {
    let json = r#"{
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "user": {
            "_id": "u1",
            "email": "ada@example.com",
            "full_name": "Ada Lovelace",
            "picture": null,
            "created_at": "2025-03-01T10:00:00",
            "updated_at": "2025-03-01T10:00:00",
            "is_active": true
        }
    }"#;

    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.access_token, "jwt-abc");
    assert_eq!(resp.token_type, "bearer");
    assert_eq!(resp.user.id, "u1");
}

#[test]
fn discovery_deserializes_from_server_json() {
    let json = r#"{
        "_id": "d1",
        "name": "WasmCloud",
        "description": "Distributed wasm runtime",
        "source_url": "https://news.example.com",
        "news_source_id": "ns1",
        "discovered_at": "2025-06-01T08:00:00",
        "article_title": null,
        "article_url": null,
        "confidence_score": 0.85,
        "category": "Platform",
        "status": "discovered",
        "created_at": "2025-06-01T08:00:01",
        "updated_at": "2025-06-01T08:00:01"
    }"#;

    let disc: TechnologyDiscovery = serde_json::from_str(json).unwrap();
    assert_eq!(disc.id, "d1");
    assert_eq!(disc.status, "discovered");
    assert!((disc.confidence_score - 0.85).abs() < 1e-9);
}

// =============================================================================
// Create / patch payload serialization
// =============================================================================

#[test]
fn new_technology_omits_unset_optionals() {
    let payload = NewTechnology {
        name: "Nix".into(),
        quadrant: "Tools".into(),
        ring: "Trial".into(),
        description: None,
        source: None,
        date_of_assessment: None,
        uri: None,
    };

    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains("\"name\""));
    assert!(!json.contains("description"));
    assert!(!json.contains("uri"));
}

#[test]
fn technology_patch_sends_only_set_fields() {
    let patch = TechnologyPatch { ring: Some("Adopt".into()), ..TechnologyPatch::default() };

    let value = serde_json::to_value(&patch).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj["ring"], "Adopt");
}

#[test]
fn technology_patch_default_is_empty_object() {
    let value = serde_json::to_value(TechnologyPatch::default()).unwrap();
    assert_eq!(value, serde_json::json!({}));
}

#[test]
fn news_source_patch_keeps_explicit_false() {
    let patch = NewsSourcePatch { is_active: Some(false), ..NewsSourcePatch::default() };

    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({"is_active": false}));
}

#[test]
fn new_discovery_omits_status_for_server_default() {
    let payload = NewDiscovery {
        name: "Zig".into(),
        description: "Systems language".into(),
        source_url: "https://example.com".into(),
        news_source_id: "ns1".into(),
        discovered_at: "2025-06-01T08:00:00".into(),
        article_title: None,
        article_url: None,
        confidence_score: 0.9,
        category: None,
        status: None,
    };

    let json = serde_json::to_string(&payload).unwrap();
    assert!(!json.contains("status"));
    assert!(!json.contains("category"));
}

// =============================================================================
// DiscoveryFilter::to_query
// =============================================================================

#[test]
fn filter_empty_builds_no_pairs() {
    assert!(DiscoveryFilter::default().to_query().is_empty());
}

#[test]
fn filter_builds_all_pairs_in_fixed_order() {
    let filter = DiscoveryFilter {
        news_source_id: Some("ns1".into()),
        status: Some("assessed".into()),
        category: Some("Tool".into()),
        min_confidence: Some(0.5),
    };

    let pairs = filter.to_query();
    assert_eq!(
        pairs,
        vec![
            ("news_source_id", "ns1".to_owned()),
            ("status", "assessed".to_owned()),
            ("category", "Tool".to_owned()),
            ("min_confidence", "0.5".to_owned()),
        ]
    );
}

#[test]
fn filter_single_field_builds_single_pair() {
    let filter = DiscoveryFilter { min_confidence: Some(0.75), ..DiscoveryFilter::default() };

    let pairs = filter.to_query();
    assert_eq!(pairs, vec![("min_confidence", "0.75".to_owned())]);
}
