//! Base and per-page-type schema definitions.
//!
//! Except for [`post_from_profile`] and [`post_from_hashtag`], directives
//! are keyed for the *flattened* projection of a document, so
//! collision-resolved keys like `edge_follow_count` appear verbatim: the
//! flattener hands the first `count` leaf the bare key and prefixes later
//! ones with their ancestor.

use pagesift_directive::{Schema, schema};

/// Fields every page type shares.
pub fn base() -> Schema {
    schema! {
        csrf_token: ["csrf_token"],
        viewer: ["viewer"],
        viewer_id: ["viewerId"],
        country_code: ["country_code"],
        language_code: ["language_code"],
        locale: ["locale"],
        device_id: ["device_id"],
        browser_push_pub_key: ["browser_push_pub_key"],
        key_id: ["key_id"],
        public_key: ["public_key"],
        version: ["version"],
        is_dev: ["is_dev"],
        rollout_hash: ["rollout_hash"],
        bundle_variant: ["bundle_variant"],
        // The attribute kept its historical name; the document key did not.
        frontend_dev: ["frontend_env"],
    }
}

/// Profile pages.
pub fn profile() -> Schema {
    base().merged(schema! {
        logging_page_id: ["logging_page_id"],
        show_suggested_profiles: ["show_suggested_profiles"],
        show_follow_dialog: ["show_follow_dialog"],
        biography: ["biography"],
        blocked_by_viewer: ["blocked_by_viewer"],
        business_email: ["business_email"],
        restricted_by_viewer: ["restricted_by_viewer"],
        country_block: ["country_block"],
        external_url: ["external_url"],
        external_url_linkshimmed: ["external_url_linkshimmed"],
        followers: ["count"],
        followed_by_viewer: ["followed_by_viewer"],
        following: ["edge_follow_count"],
        follows_viewer: ["follows_viewer"],
        full_name: ["full_name"],
        has_ar_effects: ["has_ar_effects"],
        has_clips: ["has_clips"],
        has_guides: ["has_guides"],
        has_channel: ["has_channel"],
        has_blocked_viewer: ["has_blocked_viewer"],
        highlight_reel_count: ["highlight_reel_count"],
        has_requested_viewer: ["has_requested_viewer"],
        id: ["id"],
        is_business_account: ["is_business_account"],
        is_joined_recently: ["is_joined_recently"],
        business_category_name: ["business_category_name"],
        overall_category_name: ["overall_category_name"],
        category_enum: ["category_enum"],
        is_private: ["is_private"],
        is_verified: ["is_verified"],
        mutual_followers: ["edge_mutual_followed_by_count"],
        profile_pic_url: ["profile_pic_url"],
        profile_pic_url_hd: ["profile_pic_url_hd"],
        requested_by_viewer: ["requested_by_viewer"],
        username: ["username"],
        connected_fb_page: ["connected_fb_page"],
        posts: ["edge_owner_to_timeline_media_count"],
    })
}

/// Post pages.
pub fn post() -> Schema {
    base().merged(schema! {
        id: ["id"],
        shortcode: ["shortcode"],
        dimensions: ["dimensions"],
        gating_info: ["gating_info"],
        fact_check_overall_rating: ["fact_check_overall_rating"],
        fact_check_information: ["fact_check_information"],
        sensitivity_friction_info: ["sensitivity_friction_info"],
        media_overlay_info: ["media_overlay_info"],
        media_preview: ["media_preview"],
        display_url: ["display_url"],
        accessibility_caption: ["accessibility_caption"],
        is_video: ["is_video"],
        tracking_token: ["tracking_token"],
        tagged_users: ["edge_media_to_tagged_user"],
        caption: ["text"],
        caption_is_edited: ["caption_is_edited"],
        has_ranked_comments: ["has_ranked_comments"],
        comments: ["count"],
        comments_disabled: ["comments_disabled"],
        commenting_disabled_for_viewer: ["commenting_disabled_for_viewer"],
        upload_date: ["taken_at_timestamp"],
        likes: ["edge_media_preview_like_count"],
        location: ["location"],
        viewer_has_liked: ["viewer_has_liked"],
        viewer_has_saved: ["viewer_has_saved"],
        viewer_has_saved_to_collection: ["viewer_has_saved_to_collection"],
        viewer_in_photo_of_you: ["viewer_in_photo_of_you"],
        viewer_can_reshare: ["viewer_can_reshare"],
    })
}

/// Hashtag pages.
pub fn hashtag() -> Schema {
    base().merged(schema! {
        id: ["id"],
        name: ["name"],
        allow_following: ["allow_following"],
        is_following: ["is_following"],
        is_top_media_only: ["is_top_media_only"],
        profile_pic_url: ["profile_pic_url"],
        amount_of_posts: ["count"],
    })
}

/// Location pages.
pub fn location() -> Schema {
    base().merged(schema! {
        id: ["id"],
        name: ["name"],
        slug: ["slug"],
        has_public_page: ["has_public_page"],
        latitude: ["lat"],
        longitude: ["lng"],
        blurb: ["blurb"],
        website: ["website"],
        phone: ["phone"],
        primary_alias_on_fb: ["primary_alias_on_fb"],
        amount_of_posts: ["count"],
    })
}

/// Login/signup pages carry no fields beyond the base.
pub fn login() -> Schema {
    base()
}

/// HTTP error pages carry no fields beyond the base.
pub fn http_error() -> Schema {
    base()
}

/// Posts as they appear embedded in a profile page's timeline edges.
///
/// These directives address the *raw* post node, not a flattened
/// projection, so they spell out full paths including sequence indices.
pub fn post_from_profile() -> Schema {
    schema! {
        id: ["id"],
        shortcode: ["shortcode"],
        dimensions: ["dimensions"],
        display_url: ["display_url"],
        tagged_users: ["edge_media_to_tagged_user", "edges"],
        fact_check_overall_rating: ["fact_check_overall_rating"],
        fact_check_information: ["fact_check_information"],
        is_video: ["is_video"],
        accessibility_caption: ["accessibility_caption"],
        caption: ["edge_media_to_caption", "edges", 0, "node", "text"],
        comments: ["edge_media_to_comment", "count"],
        comments_disabled: ["comments_disabled"],
        upload_date: ["taken_at_timestamp"],
        likes: ["edge_media_preview_like", "count"],
        location: ["location", "name"],
    }
}

/// Posts as they appear embedded in a hashtag page's media edges.
pub fn post_from_hashtag() -> Schema {
    schema! {
        comments_disabled: ["comments_disabled"],
        id: ["id"],
        caption: ["edge_media_to_caption", "edges", 0, "node", "text"],
        shortcode: ["shortcode"],
        comments: ["edge_media_to_comment", "count"],
        upload_date: ["taken_at_timestamp"],
        dimensions: ["dimensions"],
        display_url: ["display_url"],
        likes: ["edge_media_preview_like", "count"],
        owner: ["owner", "id"],
        is_video: ["is_video"],
        accessibility_caption: ["accessibility_caption"],
    }
}
