/// Object identifier: (object_number, generation_number).
/// Generation is always 0 for freshly written documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjId(pub u32, pub u16);

/// PDF object types per PDF 32000-1:2008 Section 7.3.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Name object, stored without the leading `/`.
    Name(String),
    /// Literal string of already-encoded bytes (WinAnsi for page
    /// text), stored without the enclosing parens.
    LiteralString(Vec<u8>),
    /// Text string for document metadata. Serialized as a UTF-16BE
    /// hex string with byte order mark so any character survives.
    TextString(String),
    Array(Vec<PdfObject>),
    /// Key-value pairs. A Vec keeps the output order deterministic.
    Dictionary(Vec<(String, PdfObject)>),
    Stream {
        dict: Vec<(String, PdfObject)>,
        data: Vec<u8>,
    },
    Reference(ObjId),
}

impl PdfObject {
    pub fn name(s: &str) -> Self {
        PdfObject::Name(s.to_string())
    }

    pub fn literal_bytes(bytes: &[u8]) -> Self {
        PdfObject::LiteralString(bytes.to_vec())
    }

    pub fn text(s: &str) -> Self {
        PdfObject::TextString(s.to_string())
    }

    pub fn array(items: Vec<PdfObject>) -> Self {
        PdfObject::Array(items)
    }

    /// Array of reals, used for boxes and decode arrays.
    pub fn reals(values: &[f64]) -> Self {
        PdfObject::Array(values.iter().map(|v| PdfObject::Real(*v)).collect())
    }

    pub fn dict(entries: Vec<(&str, PdfObject)>) -> Self {
        PdfObject::Dictionary(owned_entries(entries))
    }

    pub fn stream(dict_entries: Vec<(&str, PdfObject)>, data: Vec<u8>) -> Self {
        PdfObject::Stream {
            dict: owned_entries(dict_entries),
            data,
        }
    }
}

fn owned_entries(entries: Vec<(&str, PdfObject)>) -> Vec<(String, PdfObject)> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obj_ids_order_by_number() {
        let mut ids = vec![ObjId(7, 0), ObjId(2, 0), ObjId(5, 0)];
        ids.sort();
        assert_eq!(ids, vec![ObjId(2, 0), ObjId(5, 0), ObjId(7, 0)]);
    }

    #[test]
    fn dict_keeps_insertion_order() {
        let obj = PdfObject::dict(vec![
            ("Type", PdfObject::name("ExtGState")),
            ("ca", PdfObject::Real(0.5)),
        ]);
        match obj {
            PdfObject::Dictionary(entries) => {
                assert_eq!(entries[0].0, "Type");
                assert_eq!(entries[1].0, "ca");
            }
            _ => panic!("expected Dictionary"),
        }
    }

    #[test]
    fn reals_builds_array() {
        let obj = PdfObject::reals(&[0.0, 0.0, 297.5, 419.5]);
        match obj {
            PdfObject::Array(items) => {
                assert_eq!(items.len(), 4);
                assert_eq!(items[3], PdfObject::Real(419.5));
            }
            _ => panic!("expected Array"),
        }
    }

    #[test]
    fn stream_keeps_data() {
        let obj = PdfObject::stream(
            vec![("Filter", PdfObject::name("FlateDecode"))],
            vec![1, 2, 3],
        );
        match obj {
            PdfObject::Stream { dict, data } => {
                assert_eq!(dict.len(), 1);
                assert_eq!(data, vec![1, 2, 3]);
            }
            _ => panic!("expected Stream"),
        }
    }
}
