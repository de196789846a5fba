pub const MIN_GRAMS: i64 = 50;
pub const MAX_GRAMS: i64 = 200_000;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("Peso inválido")]
    Unparseable,

    #[error("Peso deve estar entre 50g e 200kg")]
    OutOfRange { grams: i64 },
}

/// Converts a free-text weight ("15kg", "2.5", "5200g") into grams.
///
/// An explicit "kg" or "g" wins. Without a unit, values above 100 are taken
/// as grams and values up to 100 as kilograms — so "75" means 75kg, not 75g.
/// That cutoff is long-standing form behavior; changing it would silently
/// reinterpret weights tutors already type today.
pub fn to_grams(raw: &str) -> Result<i64, WeightError> {
    let lowered = raw.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let value = parse_decimal_prefix(&cleaned).ok_or(WeightError::Unparseable)?;

    let grams = if lowered.contains("kg") {
        (value * 1000.0).round() as i64
    } else if lowered.contains('g') || value > 100.0 {
        // Explicit grams, or no unit and clearly too heavy for kilograms.
        value.round() as i64
    } else {
        (value * 1000.0).round() as i64
    };

    if !(MIN_GRAMS..=MAX_GRAMS).contains(&grams) {
        return Err(WeightError::OutOfRange { grams });
    }
    Ok(grams)
}

/// Longest valid decimal prefix, so "1.234.5" parses as 1.234 instead of
/// failing outright when a thousands separator sneaks in.
fn parse_decimal_prefix(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for c in s.chars() {
        match c {
            '0'..='9' => end += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    s[..end].parse::<f64>().ok()
}
