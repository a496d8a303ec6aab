use super::*;
use crate::catalog::Catalog;
use std::borrow::Cow;
use std::cell::RefCell;
use std::fs;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"x").unwrap();
}

fn catalog() -> Catalog {
    Catalog::from_pairs([(440, "Team Fortress 2"), (220, "Half-Life 2: Episode One")])
}

/// Resolver that knows nothing but claims to have entries.
struct NeverResolves;

impl AppResolver for NeverResolves {
    fn resolve(&self, _app_id: AppId) -> Option<Cow<'_, str>> {
        None
    }

    fn known_count(&self) -> usize {
        1
    }
}

#[test]
fn stats_record_counts_unknown_separately_from_failed() {
    let mut stats = RunStats::default();
    stats.record(&FileStatus::Moved);
    stats.record(&FileStatus::UnparsedAppId);
    stats.record(&FileStatus::UnknownAppId);
    stats.record(&FileStatus::Failed("boom".into()));
    assert_eq!(stats.total_screenshots, 4);
    assert_eq!(stats.unknown_app_id_screenshots, 2);
    assert_eq!(stats.moved, 1);
    assert_eq!(stats.failed, 1);
}

#[test]
fn missing_root_refuses_to_start() {
    let tmp = tempfile::tempdir().unwrap();
    let options = SortOptions::new(tmp.path().join("missing"));
    let err = sort_screenshots(&catalog(), &options, &|_| {}).unwrap_err();
    assert!(matches!(err, SortError::RootNotFound(_)));
}

#[test]
fn file_root_refuses_to_start() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("440_a.jpg");
    touch(&file);
    let err = sort_screenshots(&catalog(), &SortOptions::new(&file), &|_| {}).unwrap_err();
    assert!(matches!(err, SortError::NotADirectory(_)));
}

#[test]
fn empty_catalog_refuses_to_start() {
    let tmp = tempfile::tempdir().unwrap();
    let shot = tmp.path().join("440_a.jpg");
    touch(&shot);

    let err = sort_screenshots(&Catalog::default(), &SortOptions::new(tmp.path()), &|_| {})
        .unwrap_err();

    assert!(matches!(err, SortError::EmptyCatalog));
    assert!(shot.exists());
}

#[test]
fn mixed_tree_outcomes() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("440_shot1.jpg"));
    touch(&root.join("220_shot2.png"));
    touch(&root.join("abc_shot3.png"));
    touch(&root.join("999_shot4.jpeg"));
    touch(&root.join("440_readme.txt"));

    let report = sort_screenshots(&catalog(), &SortOptions::new(root), &|_| {}).unwrap();
    let stats = report.summary.stats;

    assert_eq!(stats.total_screenshots, 4);
    assert_eq!(stats.unknown_app_id_screenshots, 2);
    assert_eq!(stats.moved, 2);
    assert!(root.join("Team Fortress 2").join("440_shot1.jpg").exists());
    assert!(root.join("Half-Life 2 - Episode One").join("220_shot2.png").exists());
    assert!(root.join("abc_shot3.png").exists());
    assert!(root.join("999_shot4.jpeg").exists());
    assert!(root.join("440_readme.txt").exists());

    let unknown = report
        .outcomes
        .iter()
        .find(|o| o.app_id == Some(999))
        .unwrap();
    assert_eq!(unknown.status, FileStatus::UnknownAppId);
    assert!(!unknown.relocated());
    assert!(unknown.is_unknown());
}

#[test]
fn dry_run_moves_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let shot = root.join("440_shot1.jpg");
    touch(&shot);

    let mut options = SortOptions::new(root);
    options.dry_run = true;
    let report = sort_screenshots(&catalog(), &options, &|_| {}).unwrap();

    assert!(shot.exists());
    assert!(!root.join("Team Fortress 2").exists());
    let outcome = &report.outcomes[0];
    assert_eq!(outcome.status, FileStatus::Planned);
    assert_eq!(
        outcome.destination.as_deref(),
        Some(root.join("Team Fortress 2").join("440_shot1.jpg").as_path())
    );
    assert_eq!(report.summary.stats.planned, 1);
}

#[test]
fn limit_caps_processed_files() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("440_a.jpg"));
    touch(&root.join("440_b.jpg"));
    touch(&root.join("440_c.jpg"));

    let mut options = SortOptions::new(root);
    options.limit = Some(2);
    let report = sort_screenshots(&catalog(), &options, &|_| {}).unwrap();

    assert_eq!(report.summary.stats.total_screenshots, 2);
    assert!(root.join("440_c.jpg").exists());
}

#[test]
fn relocation_failure_is_reported_and_batch_continues() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    // A file squatting on the game folder name blocks the first move
    touch(&root.join("Half-Life 2 - Episode One"));
    touch(&root.join("220_a.png"));
    touch(&root.join("440_b.png"));

    let mut options = SortOptions::new(root);
    options.extensions = crate::scanner::extension_set(&["png"]);
    let report = sort_screenshots(&catalog(), &options, &|_| {}).unwrap();
    let stats = report.summary.stats;

    assert_eq!(stats.total_screenshots, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.unknown_app_id_screenshots, 0);
    assert_eq!(stats.moved, 1);
    let failed = report.outcomes.iter().find(|o| o.app_id == Some(220)).unwrap();
    assert!(matches!(failed.status, FileStatus::Failed(_)));
    assert_eq!(failed.game_name.as_deref(), Some("Half-Life 2: Episode One"));
    assert!(root.join("Team Fortress 2").join("440_b.png").exists());
}

#[test]
fn resolver_seam_is_used() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("440_a.jpg"));

    let report = sort_screenshots(&NeverResolves, &SortOptions::new(root), &|_| {}).unwrap();

    assert_eq!(report.outcomes[0].status, FileStatus::UnknownAppId);
    assert!(root.join("440_a.jpg").exists());
}

#[test]
fn progress_events_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("440_a.jpg"));
    touch(&root.join("nope.jpg"));

    let events = RefCell::new(Vec::new());
    sort_screenshots(&catalog(), &SortOptions::new(root), &|p| {
        let label = match p {
            SortProgress::Scanning { .. } => "scan".to_string(),
            SortProgress::Found { count } => format!("found {count}"),
            SortProgress::Processed { index, total, .. } => format!("{}/{}", index + 1, total),
            SortProgress::Done => "done".to_string(),
        };
        events.borrow_mut().push(label);
    })
    .unwrap();

    assert_eq!(
        events.into_inner(),
        vec!["scan", "found 2", "1/2", "2/2", "done"]
    );
}
