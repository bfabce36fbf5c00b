//! End-to-end flow: parse file names, group by serial, assemble the table,
//! and flatten it into the hand-off report.

use sheet_assembly::{
    DataFile, Destination, assemble_table, group_by_serial, report_from_table, serialize_report,
};

#[test]
fn parse_group_assemble_report_round_trip() {
    let paths = [
        r"C:\measure\000000000001_sheetA_raw.txt",
        r"C:\measure\000000000001_sheetB_raw.txt",
        r"C:\measure\000000000002_sheetA_raw.txt",
    ];
    let files: Vec<DataFile> = paths
        .iter()
        .map(|p| DataFile::text_data(p).expect("valid test path"))
        .collect();

    let groups = group_by_serial(files).expect("all files carry serials");
    assert_eq!(groups.len(), 2);

    let destinations = vec![
        Destination::new("sheetA_raw"),
        Destination::new("sheetB_raw"),
        Destination::new("info"),
    ];
    let table = assemble_table(&groups, &destinations, "_raw").expect("unique headers");

    let report = report_from_table(&table).expect("all headers named");
    assert_eq!(report.serials, vec!["000000000001", "000000000002"]);
    assert_eq!(report.destinations, vec!["sheetA_raw", "sheetB_raw", "info"]);
    assert_eq!(report.cells.len(), 6);

    let cell = |serial: &str, destination: &str| {
        report
            .cells
            .iter()
            .find(|c| c.serial == serial && c.destination == destination)
            .expect("cell exists")
    };

    assert_eq!(
        cell("000000000001", "sheetA_raw").files,
        vec![paths[0].to_string()]
    );
    assert_eq!(
        cell("000000000001", "sheetB_raw").files,
        vec![paths[1].to_string()]
    );
    assert_eq!(
        cell("000000000002", "sheetA_raw").files,
        vec![paths[2].to_string()]
    );
    assert!(cell("000000000002", "sheetB_raw").files.is_empty());
    assert!(
        cell("000000000001", "info").files.is_empty(),
        "'info' lacks the keyword and is skipped"
    );

    let json = serialize_report(&report).expect("report serializes");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(parsed["serials"][0], "000000000001");
    assert_eq!(parsed["cells"][0]["destination"], "sheetA_raw");
}

#[test]
fn report_refuses_tables_with_unnamed_headers() {
    use sheet_assembly::AssemblyTable;

    let mut table = AssemblyTable::new();
    table.insert(Vec::new(), 0, 0);
    assert!(report_from_table(&table).is_err());
}
