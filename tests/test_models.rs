// Deserialization and timestamp-parsing behavior of the model types.
// No server involved; payloads go straight through serde.

use chrono::{FixedOffset, TimeZone};
use pretty_assertions::assert_eq;
use rssreader_client::{
    Category, CategoryStats, Entry, EntryPage, EntryStats, FeedStats, Pagination, SystemStatus,
    TaskStatus,
};
use serde_json::json;

fn entry_from(value: serde_json::Value) -> Entry {
    serde_json::from_value(value).expect("entry should deserialize")
}

#[test]
fn test_published_datetime_parses_utc_timestamp() {
    let entry = entry_from(json!({
        "id": 1,
        "published_at": "2025-06-01T08:00:00Z"
    }));

    let parsed = entry.published_datetime().expect("should parse");
    let expected = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
        .unwrap();
    assert_eq!(parsed, expected);
    // Round-trip: formatting reproduces the normalized input.
    assert_eq!(parsed.to_rfc3339(), "2025-06-01T08:00:00+00:00");
}

#[test]
fn test_published_datetime_keeps_offset() {
    let entry = entry_from(json!({
        "id": 1,
        "published_at": "2025-06-01T10:30:00+02:30"
    }));

    let parsed = entry.published_datetime().expect("should parse");
    assert_eq!(parsed.offset(), &FixedOffset::east_opt(2 * 3600 + 1800).unwrap());
}

#[test]
fn test_published_datetime_accepts_offsetless_timestamp_as_utc() {
    let entry = entry_from(json!({
        "id": 1,
        "published_at": "2025-06-01T08:00:00"
    }));

    let parsed = entry.published_datetime().expect("should parse");
    assert_eq!(parsed.to_rfc3339(), "2025-06-01T08:00:00+00:00");
}

#[test]
fn test_published_datetime_absent_when_field_missing() {
    let entry = entry_from(json!({"id": 1}));
    assert!(entry.published_datetime().is_none());
}

#[test]
fn test_published_datetime_absent_when_unparseable() {
    let entry = entry_from(json!({"id": 1, "published_at": "last Tuesday"}));
    assert!(entry.published_datetime().is_none());
}

#[test]
fn test_entry_constructs_from_empty_object() {
    let entry = entry_from(json!({}));

    assert_eq!(entry.id, 0);
    assert_eq!(entry.title, "");
    assert_eq!(entry.published_at, None);
    assert_eq!(entry.content, None);
    assert!(entry.feed.is_empty());
}

#[test]
fn test_models_tolerate_explicit_nulls() {
    let entry = entry_from(json!({
        "id": null,
        "feed_id": null,
        "title": null,
        "url": null,
        "published_at": null,
        "created_at": null,
        "author": null,
        "feed": null,
        "content": null,
        "media": null
    }));

    assert_eq!(entry.id, 0);
    assert_eq!(entry.title, "");
    assert!(entry.feed.is_empty());
    assert!(entry.published_datetime().is_none());

    let category: Category =
        serde_json::from_value(json!({"id": null, "title": null, "feed_count": null}))
            .expect("category should deserialize");
    assert_eq!(category.id, 0);
    assert_eq!(category.feed_count, 0);
}

#[test]
fn test_pagination_defaults_match_list_defaults() {
    let pagination: Pagination =
        serde_json::from_value(json!({})).expect("pagination should deserialize");

    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.per_page, 50);
    assert_eq!(pagination.total, 0);
    assert_eq!(pagination.pages, 1);
    assert!(!pagination.has_next);
    assert!(!pagination.has_prev);
}

#[test]
fn test_pagination_tolerates_explicit_nulls() {
    let pagination: Pagination = serde_json::from_value(json!({
        "page": null,
        "per_page": null,
        "total": null,
        "pages": null,
        "has_next": null,
        "has_prev": null
    }))
    .expect("pagination with nulled fields should deserialize");

    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.per_page, 50);
    assert_eq!(pagination.total, 0);
    assert_eq!(pagination.pages, 1);
    assert!(!pagination.has_next);
    assert!(!pagination.has_prev);
}

#[test]
fn test_entry_page_defaults_when_keys_missing() {
    let page: EntryPage = serde_json::from_value(json!({})).expect("page should deserialize");

    assert!(page.entries.is_empty());
    assert_eq!(page.pagination.page, 1);
}

#[test]
fn test_system_status_composes_root_level_stat_types() {
    let status = SystemStatus {
        feeds: FeedStats {
            total: 5,
            latest_checked: None,
        },
        categories: CategoryStats { total: 2 },
        entries: EntryStats {
            total: 90,
            latest: None,
        },
        update_interval: 15,
    };

    assert_eq!(status.feeds.total, 5);
    assert_eq!(status.categories.total, 2);
    assert_eq!(status.entries.total, 90);
}

#[test]
fn test_task_status_skips_malformed_keys() {
    let tasks: TaskStatus = serde_json::from_value(json!({
        "all_feeds": {"running": false},
        "feed_3": {"running": true},
        "feed_": {"running": true},
        "feed_three": {"running": true},
        "something_else": {"running": true}
    }))
    .expect("task status should deserialize");

    assert!(!tasks.all_feeds_running);
    assert_eq!(tasks.feed_tasks.len(), 1);
    assert_eq!(tasks.feed_tasks.get(&3), Some(&true));
}

#[test]
fn test_task_status_reads_id_from_compound_keys() {
    let tasks: TaskStatus = serde_json::from_value(json!({
        "feed_12_extra": {"running": true},
        "feed_7": {"running": false}
    }))
    .expect("task status should deserialize");

    // The feed id is the first underscore-delimited segment after the prefix.
    assert_eq!(tasks.feed_tasks.len(), 2);
    assert_eq!(tasks.feed_tasks.get(&12), Some(&true));
    assert_eq!(tasks.feed_tasks.get(&7), Some(&false));
}

#[test]
fn test_task_status_missing_running_defaults_to_false() {
    let tasks: TaskStatus = serde_json::from_value(json!({
        "feed_5": {}
    }))
    .expect("task status should deserialize");

    assert_eq!(tasks.feed_tasks.get(&5), Some(&false));
    assert!(!tasks.all_feeds_running);
}
