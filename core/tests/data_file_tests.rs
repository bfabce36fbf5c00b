use sheet_assembly::{DataFile, FileNameError, NamingConfig};

#[test]
fn serial_name_and_format_reassemble_to_an_equal_identity() {
    let file = DataFile::parse(r"C:\data\000000000001_sensor_log.txt", true)
        .expect("name matches the convention");

    let rebuilt = format!(
        "{}\\{}_{}{}",
        file.path(),
        file.serial(),
        file.name(),
        file.format()
    );
    let reparsed = DataFile::parse(&rebuilt, true).expect("rebuilt name is valid");
    assert_eq!(file, reparsed);
}

#[test]
fn both_separator_styles_parse() {
    let windows = DataFile::parse(r"C:\data\000000000001_a.txt", true).expect("backslash");
    let unix = DataFile::parse("/srv/data/000000000001_a.txt", true).expect("forward slash");
    assert_eq!(windows.serial(), unix.serial());
    assert_eq!(windows.name(), unix.name());
    assert_eq!(windows.path(), r"C:\data");
    assert_eq!(unix.path(), "/srv/data");
}

#[test]
fn serial_is_exactly_the_first_twelve_characters() {
    let file = DataFile::parse(r"d\abcdefghijkl_rest.txt", true).expect("valid name");
    assert_eq!(file.serial(), "abcdefghijkl");
    assert_eq!(file.name(), "rest");
}

#[test]
fn name_keeps_inner_underscores_and_dots_before_the_last() {
    let file = DataFile::parse(r"d\000000000001_a_b.v2.txt", true).expect("valid name");
    assert_eq!(file.name(), "a_b.v2");
    assert_eq!(file.format(), ".txt");
}

#[test]
fn missing_separator_and_missing_dot_are_invalid_names() {
    assert!(matches!(
        DataFile::parse("no_separators_here.txt", true),
        Err(FileNameError::InvalidFileName { .. })
    ));
    assert!(matches!(
        DataFile::parse(r"d\000000000001_name", true),
        Err(FileNameError::InvalidFileName { .. })
    ));
}

#[test]
fn stem_must_be_strictly_longer_than_the_serial_length() {
    // Twelve characters before the dot: rejected.
    assert!(matches!(
        DataFile::parse(r"d\000000000001.txt", true),
        Err(FileNameError::TooShortFileName { .. })
    ));
    // Thirteen: accepted.
    assert!(DataFile::parse(r"d\000000000001x.txt", true).is_ok());
}

#[test]
fn short_names_are_fine_without_serial_mode() {
    let file = DataFile::parse(r"d\a.txt", false).expect("no length floor without serial");
    assert_eq!(file.name(), "a");
    assert_eq!(file.serial(), "");
}

#[test]
fn text_data_requires_txt() {
    assert!(DataFile::text_data(r"d\000000000001_log.txt").is_ok());
    assert!(matches!(
        DataFile::text_data(r"d\000000000001_log.dat"),
        Err(FileNameError::InvalidFileFormat { .. })
    ));
}

#[test]
fn workbook_requires_xlsx_and_no_serial() {
    let book = DataFile::workbook(r"d\template.xlsx").expect("valid workbook name");
    assert!(!book.uses_serial());
    assert_eq!(book.name(), "template");
    assert!(matches!(
        DataFile::workbook(r"d\template.xlsm"),
        Err(FileNameError::InvalidFileFormat { .. })
    ));
}

#[test]
fn shorter_configured_serials_shift_the_split() {
    let config = NamingConfig { serial_len: 6 };
    let file = DataFile::parse_with(r"d\000001_probe.txt", true, &config).expect("valid name");
    assert_eq!(file.serial(), "000001");
    assert_eq!(file.name(), "probe");

    assert!(matches!(
        DataFile::parse_with(r"d\000001.txt", true, &config),
        Err(FileNameError::TooShortFileName { .. })
    ));
}

#[test]
fn error_messages_carry_stable_codes() {
    let err = DataFile::parse("plain", true).expect_err("invalid name");
    assert!(err.to_string().starts_with("[SHASM_FILE_001]"));
    assert_eq!(err.code(), sheet_assembly::error_codes::FILE_INVALID_NAME);
}
