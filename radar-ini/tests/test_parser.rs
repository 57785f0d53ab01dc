use radar_ini::{IniDocument, RadarParseError, parse_radar_ini};

fn ko1_fixture() -> &'static str {
    include_str!("../../test-fixtures/ini/ko1.ini")
}

#[test]
fn test_parse_ko1() {
    let config = parse_radar_ini(ko1_fixture()).unwrap();
    assert_eq!(config.buffers.len(), 5);
    assert_eq!(config.selectors.len(), 2);
    assert_eq!(config.tags.len(), 8);

    let tag_keys: Vec<&str> = config.tags.keys().map(String::as_str).collect();
    assert_eq!(
        tag_keys,
        vec!["tag1", "tag2", "tag3", "tag4", "tag5", "tag6", "tag7", "tag8"]
    );
}

#[test]
fn test_ko1_buffers() {
    let config = parse_radar_ini(ko1_fixture()).unwrap();

    let inr1 = &config.buffers["INR1"];
    assert_eq!(inr1.direction, "R");
    assert_eq!(inr1.description, "Analog inputs");
    assert_eq!(inr1.function, "&h40");
    assert_eq!(inr1.params, "1000,16");

    let clock = &config.buffers["CLOCK"];
    assert_eq!(clock.function, "&h11");
    assert_eq!(clock.params, "");

    let arch = &config.buffers["ARCH"];
    assert_eq!(arch.params, "5,1,100");
}

#[test]
fn test_ko1_tags() {
    let config = parse_radar_ini(ko1_fixture()).unwrap();

    let mode = &config.tags["tag3"];
    assert_eq!(mode.full_name(), "KO1.Mode");
    assert_eq!(mode.data_type, "Byte");
    assert_eq!(mode.in_buf, "INR2");
    assert_eq!(mode.in_buf_off, "2");
    assert_eq!(mode.selector, "mode");
    assert_eq!(mode.out_buf, "DKM1");
    assert_eq!(mode.out_buf_off, "0");
    assert_eq!(mode.default, "1");

    let setpoint = &config.tags["tag5"];
    assert_eq!(setpoint.default, "250");
    assert_eq!(setpoint.default_max, "500");
    assert_eq!(setpoint.out_type, "Integer");
}

#[test]
fn test_ko1_selectors_are_opaque() {
    let config = parse_radar_ini(ko1_fixture()).unwrap();
    assert_eq!(
        config.selectors["mode"].mask_value,
        "(&h01, Auto), (&h02, Manual), (&h04, Service)"
    );
}

#[test]
fn test_extra_sections_are_ignored() {
    let doc = IniDocument::parse(ko1_fixture());
    assert!(doc.has_section("Controller"));
    assert!(parse_radar_ini(ko1_fixture()).is_ok());
}

#[test]
fn test_missing_selectors_section() {
    let content = include_str!("../../test-fixtures/ini/missing-selectors.ini");
    let err = parse_radar_ini(content).unwrap_err();
    let RadarParseError::MissingSection(name) = err;
    assert_eq!(name, "Selectors");
}

#[test]
fn test_bad_offset_still_parses() {
    // Offsets are only interpreted by the join
    let content = include_str!("../../test-fixtures/ini/bad-offset.ini");
    let config = parse_radar_ini(content).unwrap();
    assert_eq!(config.tags["tag2"].in_buf_off, "N/A");
}

#[test]
fn test_reference_line_joins_to_one_row() {
    let text = "\
[NetBios]
BUF1=R,,,Desc2,1,&h40,1000,2
[Selectors]
[Tags]
T1=Name,Parent,Single,Desc,BUF1,0,1,0,,,,,0,100,0,Byte,Byte,,
";
    let config = parse_radar_ini(text).unwrap();
    let rows = radar_ir::build_output_table(&config).unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.tag_full_name, "Parent.Name");
    assert_eq!(row.description, "Desc");
    assert_eq!(row.data_type, "FLOAT (4 bytes)");
    assert_eq!(row.direction, "R");
    assert_eq!(row.ab_type, "ИНР");
    assert_eq!(row.ab_addr, "1000,2");
    assert_eq!(row.ab_off, "0");
    assert_eq!(row.selector, "");
    assert_eq!(row.other, "1, 0, 0, 100, 0, Byte");
}

#[test]
fn test_indented_entries_are_all_kept() {
    let text = "[NetBios]\n\tB=R,,,In,1,&h40,1000,2\n\tC=W,,,Out,1,&h1A,2000,2\n[Selectors]\n[Tags]\n\tt1=a,P,Byte,,B,0\n\tt2=b,P,Byte,,B,1,,,,C,0\n";
    let config = parse_radar_ini(text).unwrap();
    assert_eq!(config.buffers.keys().collect::<Vec<_>>(), vec!["B", "C"]);
    assert_eq!(config.tags.keys().collect::<Vec<_>>(), vec!["t1", "t2"]);
    assert_eq!(config.tags["t1"].in_buf_off, "0");

    let rows = radar_ir::build_output_table(&config).unwrap();
    assert_eq!(rows.len(), 3);
}
