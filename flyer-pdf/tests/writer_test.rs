use flyer_pdf::objects::{ObjId, PdfObject};
use flyer_pdf::writer::{escape_pdf_bytes, PdfWriter};

fn written(obj: &PdfObject) -> String {
    let mut buf = Vec::new();
    let mut w = PdfWriter::new(&mut buf);
    w.write_object(ObjId(1, 0), obj).unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}

#[test]
fn header_bytes() {
    let mut buf = Vec::new();
    let mut w = PdfWriter::new(&mut buf);
    w.write_header().unwrap();
    assert!(buf.starts_with(b"%PDF-1.7\n"));
    assert_eq!(buf[9], b'%');
    // Binary bytes >= 128.
    assert!(buf[10..14].iter().all(|&b| b >= 128));
}

#[test]
fn write_name_object() {
    let output = written(&PdfObject::name("Type"));
    assert_eq!(output, "1 0 obj\n/Type\nendobj\n");
}

#[test]
fn write_dictionary() {
    let obj = PdfObject::dict(vec![
        ("Type", PdfObject::name("Catalog")),
        ("Pages", PdfObject::Reference(ObjId(2, 0))),
    ]);
    assert!(written(&obj).contains("<< /Type /Catalog /Pages 2 0 R >>"));
}

#[test]
fn write_array() {
    let obj = PdfObject::array(vec![
        PdfObject::Reference(ObjId(3, 0)),
        PdfObject::Reference(ObjId(6, 0)),
    ]);
    assert!(written(&obj).contains("[3 0 R 6 0 R]"));
}

#[test]
fn write_reals() {
    let obj = PdfObject::reals(&[0.0, 0.0, 419.527559, 595.275591]);
    assert!(written(&obj).contains("[0.0 0.0 419.527559 595.275591]"));
}

#[test]
fn write_stream() {
    let obj = PdfObject::stream(vec![], b"BT /F1 12 Tf ET".to_vec());
    let output = written(&obj);
    assert!(output.contains("<< /Length 15 >>\nstream\nBT /F1 12 Tf ET\nendstream"));
}

#[test]
fn write_literal_string_escapes() {
    let output = written(&PdfObject::literal_bytes(b"(x)\\"));
    assert!(output.contains("(\\(x\\)\\\\)"));
}

#[test]
fn write_text_string_as_utf16() {
    assert!(written(&PdfObject::text("Ä")).contains("<FEFF00C4>"));
}

#[test]
fn escape_leaves_plain_ascii() {
    assert_eq!(escape_pdf_bytes(b"Hello World"), b"Hello World".to_vec());
}

#[test]
fn xref_offsets_point_at_objects() {
    let mut buf = Vec::new();
    let mut w = PdfWriter::new(&mut buf);
    w.write_header().unwrap();
    w.write_object(ObjId(1, 0), &PdfObject::Integer(7)).unwrap();
    w.write_object(ObjId(2, 0), &PdfObject::Integer(8)).unwrap();
    w.write_xref_and_trailer(ObjId(1, 0), None).unwrap();
    drop(w);

    let output = String::from_utf8_lossy(&buf).into_owned();
    let first = output.find("1 0 obj").unwrap();
    let second = output.find("2 0 obj").unwrap();
    assert!(output.contains(&format!("{:010} 00000 n\r\n", first)));
    assert!(output.contains(&format!("{:010} 00000 n\r\n", second)));
    assert!(output.contains("xref\n0 3\n0000000000 65535 f\r\n"));
    assert!(output.contains("trailer\n<< /Size 3 /Root 1 0 R >>"));
    assert!(output.ends_with("%%EOF\n"));
}

#[test]
fn trailer_references_info() {
    let mut buf = Vec::new();
    let mut w = PdfWriter::new(&mut buf);
    w.write_object(ObjId(1, 0), &PdfObject::Integer(1)).unwrap();
    w.write_object(ObjId(2, 0), &PdfObject::Integer(2)).unwrap();
    w.write_xref_and_trailer(ObjId(1, 0), Some(ObjId(2, 0))).unwrap();
    drop(w);
    assert!(String::from_utf8_lossy(&buf).contains("/Root 1 0 R /Info 2 0 R >>"));
}
