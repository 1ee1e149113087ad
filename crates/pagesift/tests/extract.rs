//! End-to-end extraction over realistic shared-data documents.

use pagesift::{
    ExtractError, ExtractOptions, FailurePolicy, IndeterminateType, ResolveError, Segment,
    UnknownPageType, extract, extract_with, pages, resolve,
};
use serde_json::{Value as JsonValue, json};

fn profile_document() -> JsonValue {
    json!({
        "config": {"csrf_token": "f0ab91c2", "viewer": null, "viewerId": null},
        "country_code": "US",
        "language_code": "en",
        "locale": "en_US",
        "entry_data": {
            "ProfilePage": [{
                "logging_page_id": "profilePage_12345",
                "show_suggested_profiles": false,
                "show_follow_dialog": false,
                "graphql": {
                    "user": {
                        "biography": "programmer",
                        "blocked_by_viewer": false,
                        "business_email": null,
                        "edge_followed_by": {"count": 5210},
                        "followed_by_viewer": false,
                        "edge_follow": {"count": 400},
                        "follows_viewer": false,
                        "full_name": "Chris Greening",
                        "highlight_reel_count": 4,
                        "id": "12345",
                        "is_business_account": false,
                        "is_private": false,
                        "is_verified": false,
                        "edge_mutual_followed_by": {"count": 0},
                        "profile_pic_url": "https://example.com/pic.jpg",
                        "username": "chris_greening",
                        "edge_owner_to_timeline_media": {"count": 88}
                    }
                }
            }]
        },
        "hostname": "www.instagram.com",
        "device_id": "A1B2C3",
        "rollout_hash": "deadbeef",
        "bundle_variant": "metro",
        "frontend_env": "prod"
    })
}

fn post_document() -> JsonValue {
    json!({
        "config": {"csrf_token": "f0ab91c2"},
        "entry_data": {
            "PostPage": [{
                "graphql": {
                    "shortcode_media": {
                        "id": "98765",
                        "shortcode": "CBcde12",
                        "display_url": "https://example.com/p.jpg",
                        "is_video": false,
                        "accessibility_caption": "a sunset",
                        "edge_media_to_caption": {
                            "edges": [{"node": {"text": "golden hour"}}]
                        },
                        "caption_is_edited": false,
                        "edge_media_to_comment": {"count": 12},
                        "comments_disabled": false,
                        "taken_at_timestamp": 1599494298,
                        "edge_media_preview_like": {"count": 930},
                        "viewer_has_liked": false
                    }
                }
            }]
        }
    })
}

#[test]
fn test_extract_profile() {
    let table = extract(&profile_document()).unwrap();

    assert_eq!(table["username"], json!("chris_greening"));
    assert_eq!(table["csrf_token"], json!("f0ab91c2"));
    assert_eq!(table["frontend_dev"], json!("prod"));

    // Collision-resolved flat keys bind the right counters.
    assert_eq!(table["followers"], json!(5210));
    assert_eq!(table["following"], json!(400));
    assert_eq!(table["mutual_followers"], json!(0));
    assert_eq!(table["posts"], json!(88));

    // Optional fields the fixture omits come back as the null sentinel.
    assert_eq!(table["browser_push_pub_key"], JsonValue::Null);
    assert_eq!(table["external_url"], JsonValue::Null);
}

#[test]
fn test_extract_post() {
    let table = extract(&post_document()).unwrap();

    assert_eq!(table["shortcode"], json!("CBcde12"));
    assert_eq!(table["caption"], json!("golden hour"));
    assert_eq!(table["comments"], json!(12));
    assert_eq!(table["likes"], json!(930));
    assert_eq!(table["upload_date"], json!(1599494298));
}

#[test]
fn test_extract_login_is_base_only() {
    let document = json!({
        "config": {"csrf_token": "f0ab91c2"},
        "entry_data": {"LoginAndSignupPage": [{}]},
        "rollout_hash": "deadbeef"
    });
    let table = extract(&document).unwrap();

    let base = pages::base();
    let expected: Vec<&str> = base.attribute_names().collect::<Vec<_>>();
    let actual: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(actual, expected);
    assert_eq!(table["csrf_token"], json!("f0ab91c2"));
    assert_eq!(table["rollout_hash"], json!("deadbeef"));
}

#[test]
fn test_extract_include_exclude() {
    let options = ExtractOptions {
        include: vec!["username".to_string(), "followers".to_string(), "biography".to_string()],
        exclude: vec!["biography".to_string()],
        ..Default::default()
    };
    let table = extract_with(&profile_document(), &options).unwrap();

    let names: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(names, ["username", "followers"]);
}

#[test]
fn test_extract_missing_marker_is_indeterminate() {
    let error = extract(&json!({"config": {}})).unwrap_err();
    assert_eq!(error, ExtractError::Indeterminate(IndeterminateType));
}

#[test]
fn test_extract_unknown_page_type() {
    let document = json!({"entry_data": {"ReelPage": [{}]}});
    let error = extract(&document).unwrap_err();
    assert_eq!(
        error,
        ExtractError::UnknownPageType(UnknownPageType("ReelPage".to_string()))
    );
}

#[test]
fn test_extract_typed_error_names_missing_attribute() {
    let options = ExtractOptions {
        include: vec!["username".to_string(), "external_url".to_string()],
        policy: FailurePolicy::TypedError,
        ..Default::default()
    };
    let error = extract_with(&profile_document(), &options).unwrap_err();
    assert_eq!(
        error,
        ExtractError::Unresolvable(ResolveError::Unresolvable {
            attribute: "external_url".to_string(),
            segment: Segment::from("external_url"),
            index: 0,
        })
    );
}

#[test]
fn test_extract_is_idempotent() {
    let document = profile_document();
    assert_eq!(extract(&document).unwrap(), extract(&document).unwrap());
}

#[test]
fn test_embedded_post_resolution_with_raise_at_root() {
    // Post nodes embedded in a profile timeline are resolved against the
    // raw node with deep directives, not against a flattened projection.
    let node = json!({
        "id": "111",
        "shortcode": "CAxyz34",
        "display_url": "https://example.com/t.jpg",
        "is_video": false,
        "edge_media_to_caption": {"edges": []},
        "edge_media_to_comment": {"count": 3},
        "comments_disabled": false,
        "taken_at_timestamp": 1599400000,
        "edge_media_preview_like": {"count": 77},
        "location": null
    });
    let schema = pages::post_from_profile().subset(
        &["shortcode", "caption", "comments", "likes", "location"],
        &[],
    );

    // Deep misses (empty caption edges, null location) record the sentinel.
    let table = resolve(&node, &schema, &FailurePolicy::raise_at_root()).unwrap();
    assert_eq!(table["shortcode"], json!("CAxyz34"));
    assert_eq!(table["caption"], JsonValue::Null);
    assert_eq!(table["location"], JsonValue::Null);
    assert_eq!(table["likes"], json!(77));

    // A first-segment miss means the node shape is wrong: that escalates.
    let not_a_post = json!({"unrelated": true});
    let error = resolve(&not_a_post, &schema, &FailurePolicy::raise_at_root()).unwrap_err();
    assert!(matches!(error, ResolveError::RootSegmentMissing { .. }));
}
