use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str;

const DATETIME_TAGS: &[Tag] = &[Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

pub(crate) fn read_exif_datetime(path: &Path) -> Option<DateTime<Local>> {
    let file = File::open(path).ok()?;
    let mut buf = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut buf).ok()?;

    DATETIME_TAGS
        .iter()
        .find_map(|&tag| field_value(&exif, tag))
        .and_then(|raw| parse_date(&raw))
}

fn field_value(exif: &exif::Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        // ASCII値は表示用フォーマッタが引用符を付けるため生の文字列を使う
        Value::Ascii(ref vec) if !vec.is_empty() => {
            str::from_utf8(&vec[0]).ok().map(str::to_string)
        }
        _ => Some(field.display_value().to_string()),
    }
}

fn parse_date(input: &str) -> Option<DateTime<Local>> {
    let normalized = input.trim();

    let candidates = [
        "%Y:%m:%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%dT%H:%M:%S%.f%:z",
    ];

    for fmt in candidates {
        if let Ok(dt) = DateTime::parse_from_str(normalized, fmt) {
            return Some(dt.with_timezone(&Local));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(normalized, fmt) {
            if let Some(local) = Local.from_local_datetime(&naive).single() {
                return Some(local);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{parse_date, read_exif_datetime};
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_date_accepts_exif_form() {
        let parsed = parse_date("2023:05:01 10:00:00").expect("must parse");
        let expected = Local.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_date_accepts_iso_form() {
        let parsed = parse_date("2023-05-01T10:00:00").expect("must parse");
        let expected = Local.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn read_exif_datetime_is_none_for_non_image() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("note.txt");
        fs::write(&path, b"plain text").expect("write file");

        assert_eq!(read_exif_datetime(&path), None);
    }

    #[test]
    fn read_exif_datetime_is_none_for_missing_file() {
        let temp = tempdir().expect("tempdir");
        assert_eq!(read_exif_datetime(&temp.path().join("missing.jpg")), None);
    }
}
