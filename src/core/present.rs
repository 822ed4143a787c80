use crate::domain::model::AtisSnapshot;

/// Renders a snapshot as the textual ATIS fragment.
///
/// The output format, including the `</br>` terminator, matches the
/// original Barton ATIS service byte-for-byte so existing consumers keep
/// working.
pub fn render_atis(snapshot: &AtisSnapshot) -> String {
    if snapshot.is_empty() {
        return "No data available.".to_string();
    }

    let mut body = String::from("Barton Information.</br>");
    body.push_str(&field_line("Time", &snapshot.time));
    body.push_str(&field_line("Information", &snapshot.information));
    body.push_str(&field_line("Runway", &snapshot.runway));
    body.push_str(&field_line("Circuit", &snapshot.circuit));
    body.push_str(&field_line("QNH", &snapshot.qnh));
    body.push_str(&field_line("QFE", &snapshot.qfe));
    body
}

fn field_line(label: &str, value: &Option<String>) -> String {
    match value {
        Some(v) => format!("{} {}.</br>", label, v),
        None => format!("{} unknown.</br>", label),
    }
}
