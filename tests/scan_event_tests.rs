use scanqr::errors::AppError;
use scanqr::models::location::Coordinate;
use scanqr::models::scan_event::ScanEvent;
use scanqr::models::symbology::Symbology;

#[test]
fn test_plain_line_is_qr_payload() {
    let ev = ScanEvent::parse_line("https://example.com/a?b=c\n")
        .expect("parse")
        .expect("event");
    assert_eq!(ev.payload, "https://example.com/a?b=c");
    assert_eq!(ev.symbology, Symbology::Qr);
}

#[test]
fn test_zbar_prefix_sets_symbology() {
    let ev = ScanEvent::parse_line("EAN-13:4006381333931")
        .expect("parse")
        .expect("event");
    assert_eq!(ev.payload, "4006381333931");
    assert_eq!(ev.symbology, Symbology::Ean13);

    let ev = ScanEvent::parse_line("QR-Code:hello:world")
        .expect("parse")
        .expect("event");
    assert_eq!(ev.payload, "hello:world");
    assert_eq!(ev.symbology, Symbology::Qr);
}

#[test]
fn test_unknown_prefix_is_part_of_payload() {
    let ev = ScanEvent::parse_line("WIFI:S:home;T:WPA;;")
        .expect("parse")
        .expect("event");
    assert_eq!(ev.payload, "WIFI:S:home;T:WPA;;");
    assert_eq!(ev.symbology, Symbology::Qr);
}

#[test]
fn test_json_line() {
    let ev = ScanEvent::parse_line(r#"{"payload": "XYZ999", "symbology": "CODE-128"}"#)
        .expect("parse")
        .expect("event");
    assert_eq!(ev, ScanEvent::new("XYZ999", Symbology::Code128));

    let ev = ScanEvent::parse_line(r#"{"data": "ABC123", "type": "pdf417"}"#)
        .expect("parse")
        .expect("event");
    assert_eq!(ev, ScanEvent::new("ABC123", Symbology::Pdf417));

    let ev = ScanEvent::parse_line(r#"{"data": "no-type"}"#)
        .expect("parse")
        .expect("event");
    assert_eq!(ev.symbology, Symbology::Qr);
}

#[test]
fn test_blank_line_yields_nothing() {
    assert!(ScanEvent::parse_line("").expect("parse").is_none());
    assert!(ScanEvent::parse_line("   \r\n").expect("parse").is_none());
}

#[test]
fn test_broken_json_is_rejected() {
    let err = ScanEvent::parse_line("{\"payload\": ").expect_err("must fail");
    assert!(matches!(err, AppError::InvalidScan(_)));
}

#[test]
fn test_symbology_names() {
    assert_eq!(Symbology::parse("QR_CODE"), Symbology::Qr);
    assert_eq!(Symbology::parse("Data Matrix"), Symbology::DataMatrix);
    assert_eq!(Symbology::parse("UPC-A").as_str(), "upc_a");
    assert_eq!(
        Symbology::parse("MaxiCode"),
        Symbology::Other("maxicode".into())
    );
    assert_eq!(Symbology::parse("maxicode").to_string(), "maxicode");
}

#[test]
fn test_coordinate_parse() {
    let c = Coordinate::parse("40.4168, -3.7038").expect("coordinate");
    assert_eq!(c.to_string(), "40.416800, -3.703800");

    assert!(matches!(
        Coordinate::parse("91,0"),
        Err(AppError::InvalidCoordinate(_))
    ));
    assert!(Coordinate::parse("north").is_err());
}
