//! Integration tests for the extension update pass
//!
//! These tests run full passes from provider rows to the rendered payload.

use inbox::models::{Account, CanonicalName, Category, LabelRow, PrimaryLabel, StaticAccountSource};
use inbox::provider::{InMemoryLabelProvider, ProviderError, SnapshotLabelProvider};
use inbox::{InboxExtension, Preferences, UpdateReason, aggregate, render};

/// Helper to create a sectioned-inbox row
fn section(canonical: &str, name: &str, unread: u32) -> LabelRow {
    LabelRow::new(canonical, name).with_unread_count(unread)
}

/// Rows for a@x.com: Personal 3, Social 0, Updates 2
fn example_rows() -> Vec<LabelRow> {
    vec![
        section(CanonicalName::INBOX, "Inbox", 5),
        section(CanonicalName::PERSONAL, "Personal", 3),
        section(CanonicalName::SOCIAL, "Social", 0),
        section(CanonicalName::UPDATES, "Updates", 2),
    ]
}

fn all_rows() -> Vec<LabelRow> {
    vec![
        section(CanonicalName::PERSONAL, "Personal", 4),
        section(CanonicalName::SOCIAL, "Social", 3),
        section(CanonicalName::UPDATES, "Updates", 2),
        section(CanonicalName::FORUMS, "Forums", 1),
        section(CanonicalName::PROMOTIONS, "Promotions", 6),
        section("^sq_ig_i_travel", "Travel", 8),
    ]
}

/// Sum the counts parsed back out of the category lines of a body
fn rendered_category_sum(body: &str) -> u64 {
    body.lines()
        .filter(|line| {
            Category::RENDER_ORDER
                .iter()
                .any(|c| line.starts_with(c.default_name()))
        })
        .filter_map(|line| {
            let open = line.rfind('(')?;
            line[open + 1..line.len() - 1].parse::<u64>().ok()
        })
        .sum()
}

fn run(
    provider: &InMemoryLabelProvider,
    accounts: &[&str],
    prefs: &Preferences,
) -> inbox::ExtensionData {
    let ext = InboxExtension::new(provider, StaticAccountSource::new(accounts.iter().copied()));
    ext.on_update(UpdateReason::Periodic, prefs)
}

#[test]
fn test_single_account_example() {
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", example_rows());
    let data = run(&provider, &["a@x.com"], &Preferences::default());

    assert_eq!(data.expanded_body, "Personal (3)\nUpdates (2)");
    assert_eq!(data.status, "5");
    assert!(data.visible);
}

#[test]
fn test_hidden_updates_example() {
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", example_rows());
    let prefs = Preferences::default().hiding(Category::Updates);
    let data = run(&provider, &["a@x.com"], &prefs);

    assert_eq!(data.expanded_body, "Personal (3)");
    assert_eq!(data.status, "3");
}

#[test]
fn test_one_account_fails() {
    let provider = InMemoryLabelProvider::new()
        .with_error("a@x.com", ProviderError::Malformed("NullPointerException".into()))
        .with_rows("b@x.com", vec![section(CanonicalName::PERSONAL, "Personal", 1)]);
    let data = run(&provider, &["a@x.com", "b@x.com"], &Preferences::default());

    assert_eq!(data.status, "1");
    assert!(data.visible);
    assert_eq!(data.expanded_body, "Personal (1)");
}

#[test]
fn test_all_accounts_fail() {
    let provider = InMemoryLabelProvider::new()
        .with_error("a@x.com", ProviderError::NoSuchTable)
        .with_error("b@x.com", ProviderError::PermissionDenied("gsf".into()));
    let data = run(&provider, &["a@x.com", "b@x.com"], &Preferences::default());

    assert!(!data.visible);
    assert_eq!(data.status, "0");
    assert_eq!(data.expanded_title, "0 unread conversations");
}

#[test]
fn test_no_accounts() {
    let provider = InMemoryLabelProvider::new();
    let data = run(&provider, &[], &Preferences::default());
    assert!(!data.visible);
    assert_eq!(data.expanded_body, "");
}

#[test]
fn test_total_matches_rendered_categories() {
    let provider = InMemoryLabelProvider::new()
        .with_rows("a@x.com", all_rows())
        .with_rows("b@x.com", example_rows());
    let accounts = [Account::new("a@x.com"), Account::new("b@x.com")];

    let hidden_sets: Vec<Vec<Category>> = vec![
        vec![],
        vec![Category::Social],
        vec![Category::Personal, Category::Promotions],
        Category::RENDER_ORDER.to_vec(),
    ];

    for hidden in hidden_sets {
        for show_all in [true, false] {
            let mut prefs = Preferences::default().with_show_all(show_all);
            for category in &hidden {
                prefs = prefs.hiding(*category);
            }
            let summary = aggregate(&accounts, &provider, &prefs);
            let body = render::body(&summary, &prefs);
            assert_eq!(
                summary.total_unread,
                rendered_category_sum(&body),
                "hidden={:?} show_all={}",
                hidden,
                show_all
            );
        }
    }
}

#[test]
fn test_hiding_never_increases_total() {
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", all_rows());
    let accounts = [Account::new("a@x.com")];
    let base = aggregate(&accounts, &provider, &Preferences::default());

    for category in Category::RENDER_ORDER {
        let prefs = Preferences::default().hiding(category);
        let summary = aggregate(&accounts, &provider, &prefs);
        assert_eq!(
            summary.total_unread,
            base.total_unread - base.categories.count(category)
        );
        let body = render::body(&summary, &prefs);
        assert!(!body.contains(category.default_name()));
    }
}

#[test]
fn test_uncategorized_sections_are_reported_not_counted() {
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", all_rows());
    let summary = aggregate(&[Account::new("a@x.com")], &provider, &Preferences::default());

    assert_eq!(summary.total_unread, 16);
    assert_eq!(summary.accounts[0].uncategorized, 8);
}

#[test]
fn test_show_accounts_and_separator() {
    let provider = InMemoryLabelProvider::new()
        .with_rows("a@x.com", example_rows())
        .with_rows("b@x.com", vec![section(CanonicalName::PERSONAL, "Primary", 1)])
        .with_rows("c@x.com", vec![section(CanonicalName::PERSONAL, "Primary", 0)]);
    let prefs = Preferences::default()
        .with_accounts(["a@x.com", "b@x.com", "c@x.com"])
        .with_show_accounts(true);
    let data = run(&provider, &[], &prefs);

    assert_eq!(
        data.expanded_body,
        "a@x.com (5)\nb@x.com (1)\n\nPrimary (4)\nUpdates (2)"
    );
    assert_eq!(data.status, "6");
}

#[test]
fn test_show_all_off_counts_personal_only() {
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", all_rows());
    let prefs = Preferences::default()
        .with_show_all(false)
        .with_show_accounts(true);
    let data = run(&provider, &["a@x.com"], &prefs);

    assert_eq!(data.expanded_body, "a@x.com (4)\nPersonal (4)");
    assert_eq!(data.status, "4");
}

#[test]
fn test_account_lines_exclude_hidden_categories() {
    let provider = InMemoryLabelProvider::new()
        .with_rows("a@x.com", example_rows())
        .with_rows("b@x.com", vec![section(CanonicalName::UPDATES, "Updates", 7)]);
    let prefs = Preferences::default()
        .with_accounts(["a@x.com", "b@x.com"])
        .hiding(Category::Updates)
        .with_show_accounts(true);
    let data = run(&provider, &[], &prefs);

    assert_eq!(data.expanded_body, "a@x.com (3)\n\nPersonal (3)");
    assert_eq!(data.status, "3");
}

#[test]
fn test_account_without_rows_is_skipped() {
    let provider = InMemoryLabelProvider::new()
        .with_rows("a@x.com", vec![])
        .with_rows("b@x.com", vec![section(CanonicalName::PERSONAL, "Personal", 2)]);
    let prefs = Preferences::default().with_show_accounts(true);

    let with_empty = aggregate(
        &[Account::new("a@x.com"), Account::new("b@x.com")],
        &provider,
        &prefs,
    );
    let without = aggregate(&[Account::new("b@x.com")], &provider, &prefs);
    assert_eq!(with_empty.total_unread, without.total_unread);
    assert!(with_empty.failed_accounts.is_empty());

    let data = run(&provider, &["a@x.com", "b@x.com"], &prefs);
    assert_eq!(data.status, "2");
    assert_eq!(data.expanded_body, "b@x.com (2)\n\nPersonal (2)");
    assert!(!data.expanded_body.contains("a@x.com"));
}

#[test]
fn test_large_counts_survive_hiding() {
    let rows = vec![
        section(CanonicalName::PERSONAL, "Personal", 3_000_000_000),
        section(CanonicalName::SOCIAL, "Social", 3_000_000_000),
    ];
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", rows);

    let data = run(&provider, &["a@x.com"], &Preferences::default());
    assert_eq!(data.status, "6000000000");
    assert_eq!(rendered_category_sum(&data.expanded_body), 6_000_000_000);

    let prefs = Preferences::default().hiding(Category::Personal);
    let data = run(&provider, &["a@x.com"], &prefs);
    assert_eq!(data.status, "3000000000");
    assert_eq!(data.expanded_body, "Social (3000000000)");

    let prefs = prefs.hiding(Category::Social);
    let data = run(&provider, &["a@x.com"], &prefs);
    assert!(!data.visible);
    assert_eq!(data.status, "0");
    assert_eq!(data.expanded_body, "");
}

#[test]
fn test_primary_label_without_sections() {
    let rows = vec![
        section(CanonicalName::INBOX, "Inbox", 7),
        section(CanonicalName::PRIORITY_INBOX, "Priority Inbox", 2),
    ];
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", rows);

    let data = run(&provider, &["a@x.com"], &Preferences::default());
    assert_eq!(data.status, "7");
    assert_eq!(data.expanded_body, "Personal (7)");

    let prefs = Preferences::default().with_primary_label(PrimaryLabel::PriorityInbox);
    let data = run(&provider, &["a@x.com"], &prefs);
    assert_eq!(data.status, "2");
}

#[test]
fn test_primary_label_ignored_with_sections() {
    let provider = InMemoryLabelProvider::new().with_rows("a@x.com", example_rows());
    let prefs = Preferences::default().with_primary_label(PrimaryLabel::PriorityInbox);
    let data = run(&provider, &["a@x.com"], &prefs);
    assert_eq!(data.status, "5");
}

#[test]
fn test_snapshot_pass() {
    let json = r#"{
        "a@x.com": [
            { "canonical_name": "^sq_ig_i_personal", "display_name": "Personal", "unread_count": 3,
              "uri": "content://com.google.android.gm/a@x.com/label/%5Esq_ig_i_personal" },
            { "canonical_name": "^sq_ig_i_notification", "display_name": "Updates", "unread_count": 2 }
        ],
        "b@x.com": { "error": "permission_denied", "message": "opening provider com.google.android.gsf" }
    }"#;
    let provider = SnapshotLabelProvider::from_json(json).unwrap();
    let ext = InboxExtension::new(&provider, StaticAccountSource::new(provider.accounts()));
    let data = ext.on_update(UpdateReason::Manual, &Preferences::default());

    assert_eq!(data.status, "5");
    assert_eq!(data.expanded_body, "Personal (3)\nUpdates (2)");
    assert!(data.click_intent.label_uri.is_some());
}
