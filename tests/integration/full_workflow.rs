//! Integration tests: a roster driven end to end through the public API,
//! with an in-memory directory standing in for the network.

use player_roster::{
    AddOutcome, Directory, PlayerId, PlayerRef, ReasonOutcome, RosterError, RosterStore,
    StaticDirectory,
};

const STEVE: &str = "abc123abc123abc123abc123abc123ab";
const ALEX: &str = "deadbeefdeadbeefdeadbeefdeadbeef";
const X: &str = "0123456789abcdef0123456789abcdef";

fn fresh_store(dir: &tempfile::TempDir) -> RosterStore {
    RosterStore::open(dir.path().join("player_list.txt")).expect("open failed")
}

fn file_text(store: &RosterStore) -> String {
    std::fs::read_to_string(store.path()).expect("read failed")
}

#[test]
fn reason_change_on_existing_roster() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("player_list.txt");
    std::fs::write(&path, format!("{STEVE}|Steve,Steve2|griefer")).unwrap();
    let mut store = RosterStore::open(&path).unwrap();

    let outcome = store
        .change_reason("Steve2", Some("banned".to_string()))
        .unwrap();
    assert_eq!(outcome, ReasonOutcome::Updated);
    let steve = store.find_by_current_name("Steve2").unwrap();
    assert_eq!(steve.reason(), Some("banned"));
    assert_eq!(steve.names(), &["Steve", "Steve2"]);

    let before = file_text(&store);
    let outcome = store.change_reason("NoSuchName", Some("x".to_string())).unwrap();
    assert_eq!(
        outcome,
        ReasonOutcome::NotFound(PlayerRef::Name("NoSuchName".to_string()))
    );
    assert_eq!(file_text(&store), before);
}

#[test]
fn add_then_duplicate_add() {
    let dir = tempfile::tempdir().unwrap();
    let directory = StaticDirectory::new().with("Alex", ALEX);
    let mut store = fresh_store(&dir);

    let outcome = store.add_player(&directory, "Alex", None).unwrap();
    assert_eq!(outcome, AddOutcome::Added(PlayerId::new(ALEX)));

    let alex = store.find_by_id(&PlayerId::new(ALEX)).unwrap();
    assert_eq!(alex.names(), &["Alex"]);
    assert_eq!(alex.reason(), None);
    assert_eq!(file_text(&store), format!("{ALEX}|Alex|"));

    let outcome = store.add_player(&directory, "Alex", None).unwrap();
    assert!(matches!(outcome, AddOutcome::Duplicate { .. }));
    assert_eq!(store.len(), 1);
    assert_eq!(file_text(&store), format!("{ALEX}|Alex|"));
}

#[test]
fn bulk_import_skips_known_ids_and_saves_once() {
    let dir = tempfile::tempdir().unwrap();
    let directory = StaticDirectory::new()
        .with("NewName", X)
        .with("Alex", ALEX);
    let mut store = fresh_store(&dir);
    store.add_player(&directory, "Alex", Some("first".into())).unwrap();

    let bulk_path = dir.path().join("add.txt");
    std::fs::write(&bulk_path, "OldName,NewName|tester\nAlexOld,Alex|again\n").unwrap();

    let report = store.bulk_add_players(&directory, &bulk_path).unwrap();
    assert_eq!(report.added, vec![PlayerId::new(X)]);
    assert_eq!(report.duplicates, vec!["Alex".to_string()]);

    let reloaded = RosterStore::open(store.path()).unwrap();
    assert_eq!(reloaded.len(), 2);
    let added = reloaded.find_by_id(&PlayerId::new(X)).unwrap();
    assert_eq!(added.names(), &["OldName", "NewName"]);
    assert_eq!(added.reason(), Some("tester"));
    assert_eq!(
        reloaded.find_by_id(&PlayerId::new(ALEX)).unwrap().reason(),
        Some("first")
    );
}

#[test]
fn ids_stay_unique_across_adds() {
    let dir = tempfile::tempdir().unwrap();
    let directory = StaticDirectory::new()
        .with("Alex", ALEX)
        .with("Steve", STEVE);
    let mut store = fresh_store(&dir);

    for name in ["Alex", "Steve", "Alex", "Steve"] {
        store.add_player(&directory, name, None).unwrap();
    }
    store
        .bulk_add_from_str(&directory, "Alex\nOld,Steve\nAlex|x")
        .unwrap();

    let mut ids: Vec<_> = store.players().iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), store.len());
    assert_eq!(store.len(), 2);
}

#[test]
fn rename_is_listed_and_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut directory = StaticDirectory::new().with("Steve", STEVE);
    let mut store = fresh_store(&dir);
    store.add_player(&directory, "Steve", Some("griefer".into())).unwrap();

    directory.rename(&PlayerId::new(STEVE), "Steve2");
    assert_eq!(
        directory.resolve_name(&PlayerId::new(STEVE)).as_deref(),
        Some("Steve2")
    );

    let (report, players) = store.list_all_players(&directory).unwrap();
    assert_eq!(report.renamed.len(), 1);
    assert_eq!(players[0].previous_names(), &["Steve"]);

    // The new name now identifies the player; the old one no longer does.
    assert_eq!(
        store.remove_player("Steve").unwrap().map(|p| p.id),
        None
    );

    let reloaded = RosterStore::open(store.path()).unwrap();
    assert_eq!(reloaded.players()[0].names(), &["Steve", "Steve2"]);
    assert_eq!(reloaded.players()[0].reason(), Some("griefer"));
}

#[test]
fn remove_then_reason_by_id_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let directory = StaticDirectory::new().with("Alex", ALEX);
    let mut store = fresh_store(&dir);
    store.add_player(&directory, "Alex", None).unwrap();

    assert!(store.remove_player("Alex").unwrap().is_some());
    assert!(store.is_empty());
    assert_eq!(file_text(&store), "");

    let outcome = store.change_reason(ALEX, Some("x".into())).unwrap();
    assert_eq!(
        outcome,
        ReasonOutcome::NotFound(PlayerRef::Id(PlayerId::new(ALEX)))
    );
}

#[test]
fn malformed_store_is_reported_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("player_list.txt");
    std::fs::write(&path, format!("{STEVE}|Steve|\n{ALEX}|Alex|\n{X}-NewName")).unwrap();

    match RosterStore::open(&path) {
        Err(RosterError::MalformedRecord { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed record, got {other:?}"),
    }
}
