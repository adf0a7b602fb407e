use super::error::CalcError;

/// Text typed by the user but not entered yet.
#[derive(Debug, Default)]
pub struct InputField {
    text: String,
}

impl InputField {
    pub fn new() -> InputField {
        InputField::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    // Toggles a leading minus sign
    pub fn negate(&mut self) {
        if self.text.starts_with('-') {
            self.text.remove(0);
        } else {
            self.text.insert(0, '-');
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Parses entry text as a float, reading the longest numeric prefix after
/// leading whitespace: `12abc` is 12, `1e` is 1. Only the exact spelling
/// `Infinity` is taken as infinite.
pub fn parse_number(raw: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidInput {
        input: raw.to_string(),
    };

    let prefix = numeric_prefix(raw.trim_start());
    if prefix.is_empty() {
        return Err(invalid());
    }

    prefix.parse().map_err(|_| invalid())
}

// [sign] (Infinity | digits [. digits] [e [sign] digits]), at least one
// mantissa digit. Empty when nothing matches.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return &text[..end + "Infinity".len()];
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return "";
    }

    // The exponent only counts if it has digits
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }

        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // Only ASCII bytes were consumed, so `end` is a char boundary
    &text[..end]
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}
