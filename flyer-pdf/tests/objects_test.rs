use flyer_pdf::objects::{ObjId, PdfObject};

#[test]
fn obj_id_equality() {
    let a = ObjId(1, 0);
    let b = ObjId(1, 0);
    let c = ObjId(2, 0);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a < c);
}

#[test]
fn name_constructor() {
    let obj = PdfObject::name("Type");
    match obj {
        PdfObject::Name(s) => assert_eq!(s, "Type"),
        _ => panic!("expected Name"),
    }
}

#[test]
fn literal_bytes_constructor() {
    let obj = PdfObject::literal_bytes(b"Hello");
    match obj {
        PdfObject::LiteralString(s) => assert_eq!(s, b"Hello".to_vec()),
        _ => panic!("expected LiteralString"),
    }
}

#[test]
fn text_constructor() {
    assert_eq!(
        PdfObject::text("Flyer – Jane"),
        PdfObject::TextString("Flyer – Jane".to_string())
    );
}

#[test]
fn dict_keeps_insertion_order() {
    let obj = PdfObject::dict(vec![
        ("Type", PdfObject::name("Page")),
        ("Count", PdfObject::Integer(1)),
        ("Alpha", PdfObject::Real(0.5)),
    ]);
    match obj {
        PdfObject::Dictionary(entries) => {
            let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, vec!["Type", "Count", "Alpha"]);
        }
        _ => panic!("expected Dictionary"),
    }
}

#[test]
fn stream_constructor() {
    let obj = PdfObject::stream(vec![("Filter", PdfObject::name("FlateDecode"))], vec![1, 2, 3]);
    match obj {
        PdfObject::Stream { dict, data } => {
            assert_eq!(dict.len(), 1);
            assert_eq!(data, vec![1, 2, 3]);
        }
        _ => panic!("expected Stream"),
    }
}

#[test]
fn array_constructor() {
    let obj = PdfObject::array(vec![PdfObject::Integer(1), PdfObject::Reference(ObjId(4, 0))]);
    assert_eq!(
        obj,
        PdfObject::Array(vec![PdfObject::Integer(1), PdfObject::Reference(ObjId(4, 0))])
    );
}
