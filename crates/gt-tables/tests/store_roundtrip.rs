use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use gt_relations::Gas;
use gt_tables::{TableError, TableGrid, TableKind, TableStore};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn coarse_air() -> TableStore {
    let grid = TableGrid {
        mach_max: 5.0,
        rows_per_unit_mach: 20,
    };
    TableStore::generate(&Gas::AIR, &grid).expect("generate")
}

#[test]
fn save_and_open_roundtrip() {
    let dir = unique_temp_dir("gt_tables_store");
    let path = dir.join("nested").join("gastables.json");

    let store = coarse_air();
    store.save(&path).expect("failed to save store");
    let loaded = TableStore::open(&path).expect("failed to open store");
    assert_eq!(loaded, store);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn open_rejects_tampered_store() {
    let dir = unique_temp_dir("gt_tables_tampered");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("gastables.json");

    let mut json: serde_json::Value =
        serde_json::to_value(coarse_air()).expect("serialize store");
    json["shock"]["rows"][3]["id"] = serde_json::json!(42);
    fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let err = TableStore::open(&path).unwrap_err();
    assert!(matches!(err, TableError::Malformed { table: "Shock", .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn import_flat_files_in_compact_format() {
    let dir = unique_temp_dir("gt_tables_flat");
    fs::create_dir_all(&dir).unwrap();
    let isen = dir.join("isenTable.txt");
    let shock = dir.join("shockTable.txt");

    fs::write(
        &isen,
        "0.5000+00\t0.1186+01\t0.1130+01\t0.1050+01\t0.1340+01\n\
         0.1000+01\t0.1893+01\t0.1577+01\t0.1200+01\t0.1000+01\n\
         0.2000+01\t0.7824+01\t0.4347+01\t0.1800+01\t0.1688+01\n",
    )
    .unwrap();
    fs::write(
        &shock,
        "0.1000+01 0.1000+01 0.1000+01 0.1000+01 0.1000+01 0.1893+01 0.1000+01\n\
         0.2000+01 0.4500+01 0.2667+01 0.1688+01 0.7209+00 0.5640+01 0.5774+00\n",
    )
    .unwrap();

    let store = TableStore::import_flat_files(&isen, &shock).expect("import");
    assert_eq!(store.table(TableKind::Isentropic).len(), 3);
    assert_eq!(store.table(TableKind::Shock).len(), 2);

    let m = store.lookup_column("isentropic", "aastar", 1.2, "M").unwrap();
    assert!(m[0] > 1.0 && m[1] < 1.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn import_flat_dirs_concatenates_pages_in_name_order() {
    let dir = unique_temp_dir("gt_tables_pages");
    let isen_dir = dir.join("isentropicTables");
    let shock_dir = dir.join("shockTables");
    fs::create_dir_all(&isen_dir).unwrap();
    fs::create_dir_all(&shock_dir).unwrap();

    fs::write(isen_dir.join("page2.txt"), "2.0 7.824 4.347 1.8 1.688\n").unwrap();
    fs::write(isen_dir.join("page1.txt"), "0.5 1.186 1.130 1.05 1.340\n1.0 1.893 1.577 1.2 1.0\n").unwrap();
    fs::write(shock_dir.join("page1.txt"), "1.0 1.0 1.0 1.0 1.0 1.893 1.0\n").unwrap();

    let store = TableStore::import_flat_dirs(&isen_dir, &shock_dir).expect("import pages");
    let isen = store.table(TableKind::Isentropic);
    let machs: Vec<f64> = isen.rows().iter().map(|r| r.mach()).collect();
    assert_eq!(machs, vec![0.5, 1.0, 2.0]);
    assert_eq!(isen.rows()[2].id, 3);

    let _ = fs::remove_dir_all(&dir);
}
