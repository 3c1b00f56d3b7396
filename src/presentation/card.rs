// City card rendering
use crate::domain::city::CityRecord;
use crate::domain::clock;
use crate::domain::color::scheme_for;
use crate::presentation::clock_face::{render_clock_face, FACE_WIDTH};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Visible width of one card; every line returned by `render_card` measures
/// exactly this many cells.
pub const CARD_WIDTH: usize = FACE_WIDTH + 4;

/// One card: title row, analog face, digital time, date, offset row.
///
/// Derivation happens here, fresh, on every call: local wall time comes from
/// `(now_utc, record.offset_hours)` and the angles from that wall time.
/// Nothing about the previous render is kept, so a changed offset is fully
/// reflected on the next tick.
pub fn render_card(record: &CityRecord, now_utc: DateTime<Utc>, use_24_hour: bool) -> Vec<String> {
    let scheme = scheme_for(&record.city);
    let local = clock::local_time(now_utc, record.offset_hours);
    let angles = clock::angles(local);

    let mut lines = Vec::with_capacity(13);
    lines.push(title_row(record));
    for row in render_clock_face(&angles, &scheme) {
        lines.push(format!("  {}  ", row));
    }
    lines.push(
        center(&clock::format_clock(local, use_24_hour), CARD_WIDTH)
            .bold()
            .to_string(),
    );
    lines.push(
        center(&clock::format_date(local), CARD_WIDTH)
            .dimmed()
            .to_string(),
    );
    lines.push(offset_row(record));
    lines
}

fn title_row(record: &CityRecord) -> String {
    let tag_width = 5;
    let name_width = CARD_WIDTH - tag_width;
    let name = pad_right(&truncate(&record.city, name_width), name_width);
    let tag = if record.is_day {
        format!("{:>tag_width$}", "day").yellow()
    } else {
        format!("{:>tag_width$}", "night").blue()
    };
    format!("{}{}", name.bold(), tag)
}

fn offset_row(record: &CityRecord) -> String {
    let mut label = format_offset(record.offset_hours);
    if record.is_dst {
        label.push_str(" DST");
    }
    center(&label, CARD_WIDTH)
}

/// `UTC +9`, `UTC -5`, `UTC +5.5` - fractional offsets keep their fraction,
/// whole ones drop it.
pub fn format_offset(offset_hours: f64) -> String {
    let sign = if offset_hours >= 0.0 { "+" } else { "-" };
    format!("UTC {}{}", sign, offset_hours.abs())
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return truncate(text, width);
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tokyo() -> CityRecord {
        CityRecord {
            city: "Tokyo".to_string(),
            offset_hours: 9.0,
            is_day: true,
            is_dst: false,
        }
    }

    fn at_epoch_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_card_shows_adjusted_time_and_date() {
        colored::control::set_override(false);
        let card = render_card(&tokyo(), at_epoch_2024(), true).join("\n");

        assert!(card.contains("Tokyo"));
        assert!(card.contains("09:00:00"));
        assert!(card.contains("Mon, Jan 1"));
        assert!(card.contains("UTC +9"));
        assert!(card.contains("day"));
        assert!(!card.contains("DST"));
    }

    #[test]
    fn test_card_twelve_hour_mode() {
        colored::control::set_override(false);
        let card = render_card(&tokyo(), at_epoch_2024(), false).join("\n");
        assert!(card.contains("9:00:00 AM"));
    }

    #[test]
    fn test_card_night_and_dst_tags() {
        colored::control::set_override(false);
        let record = CityRecord {
            city: "London".to_string(),
            offset_hours: 1.0,
            is_day: false,
            is_dst: true,
        };
        let card = render_card(&record, at_epoch_2024(), true).join("\n");

        assert!(card.contains("night"));
        assert!(card.contains("UTC +1 DST"));
    }

    #[test]
    fn test_card_lines_have_fixed_width() {
        colored::control::set_override(false);
        for record in [tokyo(), CityRecord {
            city: "A city with a very long name indeed".to_string(),
            offset_hours: -9.5,
            is_day: false,
            is_dst: false,
        }] {
            for line in render_card(&record, at_epoch_2024(), true) {
                assert_eq!(line.chars().count(), CARD_WIDTH);
            }
        }
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(9.0), "UTC +9");
        assert_eq!(format_offset(-5.0), "UTC -5");
        assert_eq!(format_offset(5.5), "UTC +5.5");
        assert_eq!(format_offset(5.75), "UTC +5.75");
        assert_eq!(format_offset(0.0), "UTC +0");
    }
}
