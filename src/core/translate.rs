use crate::utils::error::{AtisError, Result};

/// ICAO phonetic alphabet, indexed by letter offset from 'A'.
const PHONETIC: [&str; 26] = [
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliet",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whisky", "X-Ray", "Yankee", "Zulu",
];

/// Spoken phonetic word for a single uppercase letter.
pub fn speak_letter(letter: &str) -> Result<String> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => {
            Ok(PHONETIC[(c as usize) - ('A' as usize)].to_string())
        }
        _ => Err(AtisError::InvalidInput {
            field: "information",
            value: letter.to_string(),
        }),
    }
}

/// "HHMM" into spoken digit pairs: "1200" becomes "12 00 zulu".
pub fn speak_time(hhmm: &str) -> Result<String> {
    if hhmm.len() != 4 || !hhmm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AtisError::InvalidInput {
            field: "time",
            value: hhmm.to_string(),
        });
    }
    Ok(format!("{} {} zulu", &hhmm[0..2], &hhmm[2..4]))
}

/// Runway designator into spoken form: "27L" becomes "2 7 left".
pub fn speak_runway(code: &str) -> Result<String> {
    let bytes = code.as_bytes();
    let invalid = || AtisError::InvalidInput {
        field: "runway",
        value: code.to_string(),
    };

    if !matches!(bytes.len(), 2 | 3)
        || !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
    {
        return Err(invalid());
    }

    let mut spoken = format!("{} {}", &code[0..1], &code[1..2]);
    if bytes.len() == 3 {
        spoken.push(' ');
        spoken.push_str(speak_hand(&code[2..3]).ok_or_else(invalid)?);
    }

    Ok(spoken)
}

/// Circuit direction into spoken form: "LH" becomes "left hand".
pub fn speak_circuit(cct: &str) -> Result<String> {
    if cct.eq_ignore_ascii_case("LH") {
        Ok("left hand".to_string())
    } else if cct.eq_ignore_ascii_case("RH") {
        Ok("right hand".to_string())
    } else {
        Err(AtisError::InvalidInput {
            field: "circuit",
            value: cct.to_string(),
        })
    }
}

/// Pressure reading into spoken digits: "1013" becomes "1 0 1 3".
///
/// Values at or below 999 get the word "hectopascals" appended, matching
/// the convention that hectopascal-range QFE readings omit a leading
/// digit while QNH readings carry all four.
pub fn speak_pressure(pressure: &str) -> Result<String> {
    let value: u32 = pressure
        .parse()
        .map_err(|_| AtisError::InvalidInput {
            field: "pressure",
            value: pressure.to_string(),
        })?;

    let mut spoken = pressure
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if value <= 999 {
        spoken.push_str(" hectopascals");
    }

    Ok(spoken)
}

fn speak_hand(lr: &str) -> Option<&'static str> {
    if lr.eq_ignore_ascii_case("L") {
        Some("left")
    } else if lr.eq_ignore_ascii_case("R") {
        Some("right")
    } else {
        None
    }
}
