use crate::domain::model::RawAtis;
use crate::utils::error::Result;
use regex::Regex;

// Patterns follow the exact span structure of the upstream page. `\s?`
// tolerates the single optional whitespace the page emits around values.
const TIME_PATTERN: &str =
    r#"<span class="style_green_data_text">\s?([0-9]{4})\s?</span>\s?<span class="style_headings">\s?z"#;
const INFO_PATTERN: &str =
    r#"INFO:\s?</span>\s?<span class="style_green_data_text">\s?([A-Z])\s?</span>"#;
const RUNWAY_PATTERN: &str =
    r#"RWY:\s?</span>\s?<span class="style_green_data_text">\s?([0-9LR]{2,3})\s?</span>"#;
const CIRCUIT_PATTERN: &str =
    r#"CCT:\s?</span>\s?<span class="style_green_data_text">((?i:RH|LH))</span>"#;
const QNH_PATTERN: &str =
    r#"M/CR QNH:\s?</span>\s?<span class="style_green_data_text">([0-9]+)</span>"#;
const QFE_PATTERN: &str =
    r#"BARTON QFE:\s?</span>\s?<span class="style_green_data_text">([0-9]+)</span>"#;

/// Pulls the six ATIS fields out of the raw page markup.
///
/// The patterns are compiled once at startup and shared across requests.
/// A field whose pattern does not match is simply absent; extraction
/// itself never fails on page content.
pub struct Extractor {
    time: Regex,
    information: Regex,
    runway: Regex,
    circuit: Regex,
    qnh: Regex,
    qfe: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            time: Regex::new(TIME_PATTERN)?,
            information: Regex::new(INFO_PATTERN)?,
            runway: Regex::new(RUNWAY_PATTERN)?,
            circuit: Regex::new(CIRCUIT_PATTERN)?,
            qnh: Regex::new(QNH_PATTERN)?,
            qfe: Regex::new(QFE_PATTERN)?,
        })
    }

    pub fn extract(&self, html: &str) -> RawAtis {
        RawAtis {
            time: capture(&self.time, html),
            information: capture(&self.information, html),
            runway: capture(&self.runway, html),
            circuit: capture(&self.circuit, html),
            qnh: capture(&self.qnh, html),
            qfe: capture(&self.qfe, html),
        }
    }
}

fn capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html).map(|c| c[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = concat!(
        "<html><body>",
        r#"<span class="style_green_data_text"> 1200 </span><span class="style_headings"> zulu</span>"#,
        r#"<span class="style_headings">INFO: </span> <span class="style_green_data_text"> C </span>"#,
        r#"<span class="style_headings">RWY: </span> <span class="style_green_data_text">27R</span>"#,
        r#"<span class="style_headings">CCT: </span><span class="style_green_data_text">LH</span>"#,
        r#"<span class="style_headings">M/CR QNH: </span><span class="style_green_data_text">1013</span>"#,
        r#"<span class="style_headings">BARTON QFE: </span><span class="style_green_data_text">998</span>"#,
        "</body></html>",
    );

    #[test]
    fn test_extract_all_fields() {
        let extractor = Extractor::new().unwrap();
        let raw = extractor.extract(FULL_PAGE);

        assert_eq!(raw.time.as_deref(), Some("1200"));
        assert_eq!(raw.information.as_deref(), Some("C"));
        assert_eq!(raw.runway.as_deref(), Some("27R"));
        assert_eq!(raw.circuit.as_deref(), Some("LH"));
        assert_eq!(raw.qnh.as_deref(), Some("1013"));
        assert_eq!(raw.qfe.as_deref(), Some("998"));
    }

    #[test]
    fn test_extract_without_whitespace_padding() {
        let page = concat!(
            r#"<span class="style_green_data_text">0845</span><span class="style_headings">zulu</span>"#,
            r#"INFO:</span><span class="style_green_data_text">A</span>"#,
        );

        let extractor = Extractor::new().unwrap();
        let raw = extractor.extract(page);

        assert_eq!(raw.time.as_deref(), Some("0845"));
        assert_eq!(raw.information.as_deref(), Some("A"));
    }

    #[test]
    fn test_extract_partial_page() {
        let page = concat!(
            r#"<span class="style_headings">RWY: </span> <span class="style_green_data_text">09</span>"#,
            r#"<span class="style_headings">M/CR QNH: </span><span class="style_green_data_text">1021</span>"#,
        );

        let extractor = Extractor::new().unwrap();
        let raw = extractor.extract(page);

        assert_eq!(raw.runway.as_deref(), Some("09"));
        assert_eq!(raw.qnh.as_deref(), Some("1021"));
        assert!(raw.time.is_none());
        assert!(raw.information.is_none());
        assert!(raw.circuit.is_none());
        assert!(raw.qfe.is_none());
    }

    #[test]
    fn test_extract_circuit_is_case_insensitive() {
        let page = r#"CCT: </span><span class="style_green_data_text">rh</span>"#;

        let extractor = Extractor::new().unwrap();
        let raw = extractor.extract(page);

        assert_eq!(raw.circuit.as_deref(), Some("rh"));
    }

    #[test]
    fn test_extract_unrelated_markup_yields_nothing() {
        let extractor = Extractor::new().unwrap();
        let raw = extractor.extract("<html><body><p>maintenance page</p></body></html>");

        assert_eq!(raw, RawAtis::default());
    }

    #[test]
    fn test_extract_lowercase_information_letter_is_ignored() {
        let page = r#"INFO: </span><span class="style_green_data_text">c</span>"#;

        let extractor = Extractor::new().unwrap();
        let raw = extractor.extract(page);

        assert!(raw.information.is_none());
    }
}
