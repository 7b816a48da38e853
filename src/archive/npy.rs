//! Codec für das NPY-Array-Format (Version 1.0 schreiben, 1.0–3.0 lesen).
//!
//! Aufbau: Magic `\x93NUMPY`, Version, Header-Länge, Python-Dict-Header
//! (mit Leerzeichen auf ein Vielfaches von 64 Bytes aufgefüllt), Rohdaten.

use regex::Regex;

use crate::core::ArchiveIncompatibility;

const MAGIC: &[u8; 6] = b"\x93NUMPY";
const HEADER_ALIGNMENT: usize = 64;

/// Unterstützte Array-Typen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NpyData {
    /// `|b1`
    Bool(Vec<bool>),
    /// `<i8` (beim Lesen auch `<i4`)
    Int64(Vec<i64>),
    /// `<U{n}` (UTF-32LE, mit NUL aufgefüllt)
    Unicode(Vec<String>),
}

/// Array mit Form und Daten (C-Reihenfolge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpyArray {
    /// Form; leer für Skalare
    pub shape: Vec<usize>,
    /// Elemente in Zeilenreihenfolge
    pub data: NpyData,
}

impl NpyArray {
    /// 2-D Bool-Array.
    pub fn bool_2d(height: usize, width: usize, cells: Vec<bool>) -> Self {
        Self {
            shape: vec![height, width],
            data: NpyData::Bool(cells),
        }
    }

    /// 1-D Int64-Array.
    pub fn int64_1d(values: Vec<i64>) -> Self {
        Self {
            shape: vec![values.len()],
            data: NpyData::Int64(values),
        }
    }

    /// Int64-Skalar (Form `()`).
    pub fn int64_scalar(value: i64) -> Self {
        Self {
            shape: Vec::new(),
            data: NpyData::Int64(vec![value]),
        }
    }

    /// 1-D Unicode-Array.
    pub fn unicode_1d(values: Vec<String>) -> Self {
        Self {
            shape: vec![values.len()],
            data: NpyData::Unicode(values),
        }
    }

    fn element_count(&self) -> usize {
        self.shape.iter().product()
    }

    fn descr(&self) -> String {
        match &self.data {
            NpyData::Bool(_) => "|b1".to_string(),
            NpyData::Int64(_) => "<i8".to_string(),
            NpyData::Unicode(values) => {
                let width = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);
                format!("<U{}", width.max(1))
            }
        }
    }
}

fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [single] => format!("({},)", single),
        _ => {
            let parts: Vec<String> = shape.iter().map(usize::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Serialisiert ein Array als NPY 1.0.
pub fn encode(array: &NpyArray) -> Vec<u8> {
    let descr = array.descr();
    let mut header = format!(
        "{{'descr': '{}', 'fortran_order': False, 'shape': {}, }}",
        descr,
        format_shape(&array.shape)
    );
    // Präambel (10 Bytes) + Header + '\n' auf 64 Bytes ausrichten
    let unpadded = MAGIC.len() + 4 + header.len() + 1;
    let padding = (HEADER_ALIGNMENT - unpadded % HEADER_ALIGNMENT) % HEADER_ALIGNMENT;
    header.push_str(&" ".repeat(padding));
    header.push('\n');

    let mut bytes = Vec::with_capacity(MAGIC.len() + 4 + header.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&[1, 0]);
    bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
    bytes.extend_from_slice(header.as_bytes());

    match &array.data {
        NpyData::Bool(cells) => bytes.extend(cells.iter().map(|&b| u8::from(b))),
        NpyData::Int64(values) => {
            for value in values {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
        NpyData::Unicode(values) => {
            let width = values.iter().map(|v| v.chars().count()).max().unwrap_or(0).max(1);
            for value in values {
                let mut written = 0;
                for ch in value.chars() {
                    bytes.extend_from_slice(&(ch as u32).to_le_bytes());
                    written += 1;
                }
                for _ in written..width {
                    bytes.extend_from_slice(&0u32.to_le_bytes());
                }
            }
        }
    }
    bytes
}

/// Geparster Header eines NPY-Arrays.
#[derive(Debug)]
struct Header {
    descr: String,
    fortran_order: bool,
    shape: Vec<usize>,
}

fn parse_header(text: &str) -> Result<Header, ArchiveIncompatibility> {
    let pattern = |re: &str| {
        Regex::new(re).map_err(|e| ArchiveIncompatibility::malformed(e.to_string()))
    };
    let descr_re = pattern(r"'descr'\s*:\s*'([^']+)'")?;
    let fortran_re = pattern(r"'fortran_order'\s*:\s*(True|False)")?;
    let shape_re = pattern(r"'shape'\s*:\s*\(([^)]*)\)")?;

    let descr = descr_re
        .captures(text)
        .map(|c| c[1].to_string())
        .ok_or_else(|| ArchiveIncompatibility::malformed("NPY-Header ohne 'descr'"))?;
    let fortran_order = fortran_re
        .captures(text)
        .map(|c| &c[1] == "True")
        .ok_or_else(|| ArchiveIncompatibility::malformed("NPY-Header ohne 'fortran_order'"))?;
    let shape_text = shape_re
        .captures(text)
        .map(|c| c[1].to_string())
        .ok_or_else(|| ArchiveIncompatibility::malformed("NPY-Header ohne 'shape'"))?;

    let shape = shape_text
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.trim_end_matches('L').parse::<usize>().map_err(|_| {
                ArchiveIncompatibility::malformed(format!("Ungültige Dimension '{}'", part))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Header {
        descr,
        fortran_order,
        shape,
    })
}

/// Liest ein NPY-Array.
pub fn decode(bytes: &[u8]) -> Result<NpyArray, ArchiveIncompatibility> {
    if bytes.len() < 10 || &bytes[..6] != MAGIC {
        return Err(ArchiveIncompatibility::malformed("Kein NPY-Array (Magic fehlt)"));
    }

    let (header_len, header_start) = match bytes[6] {
        1 => (u16::from_le_bytes([bytes[8], bytes[9]]) as usize, 10),
        2 | 3 if bytes.len() >= 12 => (
            u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize,
            12,
        ),
        major => {
            return Err(ArchiveIncompatibility::malformed(format!(
                "Nicht unterstützte NPY-Version {}",
                major
            )))
        }
    };

    let data_start = header_start + header_len;
    let header_bytes = bytes
        .get(header_start..data_start)
        .ok_or_else(|| ArchiveIncompatibility::malformed("NPY-Header abgeschnitten"))?;
    let header_text = String::from_utf8_lossy(header_bytes);
    let header = parse_header(&header_text)?;
    let payload = &bytes[data_start..];
    let count = header
        .shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| {
            ArchiveIncompatibility::malformed(format!(
                "Form {:?} übersteigt den Adressraum",
                header.shape
            ))
        })?;

    let data = decode_payload(&header.descr, payload, count)?;
    let mut array = NpyArray {
        shape: header.shape,
        data,
    };
    if header.fortran_order && array.shape.len() == 2 {
        array = transpose_fortran(array);
    }
    Ok(array)
}

fn decode_payload(
    descr: &str,
    payload: &[u8],
    count: usize,
) -> Result<NpyData, ArchiveIncompatibility> {
    let take = |item_size: usize| -> Result<&[u8], ArchiveIncompatibility> {
        count
            .checked_mul(item_size)
            .and_then(|len| payload.get(..len))
            .ok_or_else(|| {
                ArchiveIncompatibility::malformed(format!(
                    "Zu wenig Daten für {} Elemente ({})",
                    count, descr
                ))
            })
    };

    match descr {
        "|b1" => Ok(NpyData::Bool(take(1)?.iter().map(|&b| b != 0).collect())),
        "<i8" => Ok(NpyData::Int64(
            take(8)?
                .chunks_exact(8)
                .map(|c| i64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
                .collect(),
        )),
        "<i4" => Ok(NpyData::Int64(
            take(4)?
                .chunks_exact(4)
                .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]) as i64)
                .collect(),
        )),
        unicode if unicode.starts_with("<U") => {
            let width: usize = unicode[2..].parse().map_err(|_| {
                ArchiveIncompatibility::malformed(format!("Ungültiger Typ '{}'", unicode))
            })?;
            let item_size = width
                .checked_mul(4)
                .filter(|&size| size > 0)
                .ok_or_else(|| {
                    ArchiveIncompatibility::malformed(format!("Ungültige Breite '{}'", unicode))
                })?;
            let strings = take(item_size)?
                .chunks_exact(item_size)
                .map(|item| {
                    item.chunks_exact(4)
                        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                        .take_while(|&code| code != 0)
                        .filter_map(char::from_u32)
                        .collect()
                })
                .collect();
            Ok(NpyData::Unicode(strings))
        }
        other => Err(ArchiveIncompatibility::malformed(format!(
            "Nicht unterstützter Datentyp '{}'",
            other
        ))),
    }
}

/// Wandelt ein 2-D Array aus Spalten- in Zeilenreihenfolge um.
fn transpose_fortran(array: NpyArray) -> NpyArray {
    let (rows, cols) = (array.shape[0], array.shape[1]);
    fn reorder<T: Clone>(values: &[T], rows: usize, cols: usize) -> Vec<T> {
        (0..rows * cols)
            .map(|i| values[(i % cols) * rows + i / cols].clone())
            .collect()
    }
    let data = match &array.data {
        NpyData::Bool(v) => NpyData::Bool(reorder(v, rows, cols)),
        NpyData::Int64(v) => NpyData::Int64(reorder(v, rows, cols)),
        NpyData::Unicode(v) => NpyData::Unicode(reorder(v, rows, cols)),
    };
    NpyArray {
        shape: array.shape,
        data,
    }
}

impl NpyArray {
    /// Prüft, ob die Elementanzahl zur Form passt.
    pub fn is_consistent(&self) -> bool {
        let len = match &self.data {
            NpyData::Bool(v) => v.len(),
            NpyData::Int64(v) => v.len(),
            NpyData::Unicode(v) => v.len(),
        };
        len == self.element_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_header_is_aligned_to_64_bytes() {
        let bytes = encode(&NpyArray::bool_2d(2, 3, vec![true, false, false, false, true, true]));
        let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;

        assert_eq!((10 + header_len) % 64, 0);
        assert_eq!(bytes[10 + header_len - 1], b'\n');
        let header = std::str::from_utf8(&bytes[10..10 + header_len]).expect("ASCII-Header");
        assert!(header.starts_with("{'descr': '|b1', 'fortran_order': False, 'shape': (2, 3), }"));
        assert_eq!(&bytes[10 + header_len..], &[1, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn scalar_and_vector_shapes_use_tuple_syntax() {
        assert_eq!(format_shape(&[]), "()");
        assert_eq!(format_shape(&[2]), "(2,)");
        assert_eq!(format_shape(&[64, 32]), "(64, 32)");
    }

    #[test]
    fn unicode_array_survives_codec() {
        let names = vec!["left.img".to_string(), "ä.png".to_string()];
        let decoded = decode(&encode(&NpyArray::unicode_1d(names.clone()))).expect("lesbar");
        assert_eq!(decoded.shape, vec![2]);
        assert_eq!(decoded.data, NpyData::Unicode(names));
    }

    #[test]
    fn decode_reads_int32_scalar() {
        let header = "{'descr': '<i4', 'fortran_order': False, 'shape': (), }";
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(&3i32.to_le_bytes());

        let decoded = decode(&bytes).expect("lesbar");
        assert!(decoded.shape.is_empty());
        assert_eq!(decoded.data, NpyData::Int64(vec![3]));
    }

    #[test]
    fn decode_transposes_fortran_order() {
        let header = "{'descr': '|b1', 'fortran_order': True, 'shape': (2, 3), }";
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        // Spaltenweise: (0,0) (1,0) (0,1) (1,1) (0,2) (1,2)
        bytes.extend_from_slice(&[1, 0, 0, 0, 0, 1]);

        let decoded = decode(&bytes).expect("lesbar");
        assert_eq!(
            decoded.data,
            NpyData::Bool(vec![true, false, false, false, false, true])
        );
    }

    #[test]
    fn decode_rejects_garbage_and_truncated_data() {
        assert!(decode(b"not an array").is_err());

        let mut bytes = encode(&NpyArray::int64_1d(vec![1, 2]));
        bytes.truncate(bytes.len() - 4);
        assert!(matches!(
            decode(&bytes),
            Err(ArchiveIncompatibility::Malformed { .. })
        ));
    }

    fn raw(header: &str, payload: &[u8]) -> Vec<u8> {
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn decode_rejects_shape_beyond_address_space() {
        let bytes = raw(
            "{'descr': '|b1', 'fortran_order': False, 'shape': (4294967296, 4294967296), }",
            &[1, 0, 1],
        );

        assert!(matches!(
            decode(&bytes),
            Err(ArchiveIncompatibility::Malformed { .. })
        ));
    }

    #[test]
    fn decode_rejects_byte_length_overflow() {
        let bytes = raw(
            "{'descr': '<i8', 'fortran_order': False, 'shape': (3074457345618258603,), }",
            &[0; 8],
        );

        assert!(matches!(
            decode(&bytes),
            Err(ArchiveIncompatibility::Malformed { .. })
        ));
    }

    #[test]
    fn decode_rejects_zero_width_text() {
        let bytes = raw(
            "{'descr': '<U0', 'fortran_order': False, 'shape': (1000000000000,), }",
            &[],
        );

        assert!(matches!(
            decode(&bytes),
            Err(ArchiveIncompatibility::Malformed { .. })
        ));
    }
}
