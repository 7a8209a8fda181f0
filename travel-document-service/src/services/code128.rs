//! Code128 symbology: text to a sequence of bar/space modules.
//!
//! Printable ASCII goes through code set B. Text made only of digits with an
//! even length is packed two digits per symbol with code set C.

use super::image::EncodeError;

/// Bar/space widths for symbol values 0..=105, bar first.
const PATTERNS: [[u8; 6]; 106] = [
    [2, 1, 2, 2, 2, 2], [2, 2, 2, 1, 2, 2], [2, 2, 2, 2, 2, 1], [1, 2, 1, 2, 2, 3],
    [1, 2, 1, 3, 2, 2], [1, 3, 1, 2, 2, 2], [1, 2, 2, 2, 1, 3], [1, 2, 2, 3, 1, 2],
    [1, 3, 2, 2, 1, 2], [2, 2, 1, 2, 1, 3], [2, 2, 1, 3, 1, 2], [2, 3, 1, 2, 1, 2],
    [1, 1, 2, 2, 3, 2], [1, 2, 2, 1, 3, 2], [1, 2, 2, 2, 3, 1], [1, 1, 3, 2, 2, 2],
    [1, 2, 3, 1, 2, 2], [1, 2, 3, 2, 2, 1], [2, 2, 3, 2, 1, 1], [2, 2, 1, 1, 3, 2],
    [2, 2, 1, 2, 3, 1], [2, 1, 3, 2, 1, 2], [2, 2, 3, 1, 1, 2], [3, 1, 2, 1, 3, 1],
    [3, 1, 1, 2, 2, 2], [3, 2, 1, 1, 2, 2], [3, 2, 1, 2, 2, 1], [3, 1, 2, 2, 1, 2],
    [3, 2, 2, 1, 1, 2], [3, 2, 2, 2, 1, 1], [2, 1, 2, 1, 2, 3], [2, 1, 2, 3, 2, 1],
    [2, 3, 2, 1, 2, 1], [1, 1, 1, 3, 2, 3], [1, 3, 1, 1, 2, 3], [1, 3, 1, 3, 2, 1],
    [1, 1, 2, 3, 1, 3], [1, 3, 2, 1, 1, 3], [1, 3, 2, 3, 1, 1], [2, 1, 1, 3, 1, 3],
    [2, 3, 1, 1, 1, 3], [2, 3, 1, 3, 1, 1], [1, 1, 2, 1, 3, 3], [1, 1, 2, 3, 3, 1],
    [1, 3, 2, 1, 3, 1], [1, 1, 3, 1, 2, 3], [1, 1, 3, 3, 2, 1], [1, 3, 3, 1, 2, 1],
    [3, 1, 3, 1, 2, 1], [2, 1, 1, 3, 3, 1], [2, 3, 1, 1, 3, 1], [2, 1, 3, 1, 1, 3],
    [2, 1, 3, 3, 1, 1], [2, 1, 3, 1, 3, 1], [3, 1, 1, 1, 2, 3], [3, 1, 1, 3, 2, 1],
    [3, 3, 1, 1, 2, 1], [3, 1, 2, 1, 1, 3], [3, 1, 2, 3, 1, 1], [3, 3, 2, 1, 1, 1],
    [3, 1, 4, 1, 1, 1], [2, 2, 1, 4, 1, 1], [4, 3, 1, 1, 1, 1], [1, 1, 1, 2, 2, 4],
    [1, 1, 1, 4, 2, 2], [1, 2, 1, 1, 2, 4], [1, 2, 1, 4, 2, 1], [1, 4, 1, 1, 2, 2],
    [1, 4, 1, 2, 2, 1], [1, 1, 2, 2, 1, 4], [1, 1, 2, 4, 1, 2], [1, 2, 2, 1, 1, 4],
    [1, 2, 2, 4, 1, 1], [1, 4, 2, 1, 1, 2], [1, 4, 2, 2, 1, 1], [2, 4, 1, 2, 1, 1],
    [2, 2, 1, 1, 1, 4], [4, 1, 3, 1, 1, 1], [2, 4, 1, 1, 1, 2], [1, 3, 4, 1, 1, 1],
    [1, 1, 1, 2, 4, 2], [1, 2, 1, 1, 4, 2], [1, 2, 1, 2, 4, 1], [1, 1, 4, 2, 1, 2],
    [1, 2, 4, 1, 1, 2], [1, 2, 4, 2, 1, 1], [4, 1, 1, 2, 1, 2], [4, 2, 1, 1, 1, 2],
    [4, 2, 1, 2, 1, 1], [2, 1, 2, 1, 4, 1], [2, 1, 4, 1, 2, 1], [4, 1, 2, 1, 2, 1],
    [1, 1, 1, 1, 4, 3], [1, 1, 1, 3, 4, 1], [1, 3, 1, 1, 4, 1], [1, 1, 4, 1, 1, 3],
    [1, 1, 4, 3, 1, 1], [4, 1, 1, 1, 1, 3], [4, 1, 1, 3, 1, 1], [1, 1, 3, 1, 4, 1],
    [1, 1, 4, 1, 3, 1], [3, 1, 1, 1, 4, 1], [4, 1, 1, 1, 3, 1], [2, 1, 1, 4, 1, 2],
    [2, 1, 1, 2, 1, 4], [2, 1, 1, 2, 3, 2],
];

const STOP_PATTERN: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

const START_B: u8 = 104;
const START_C: u8 = 105;

/// Modules per data symbol.
pub const SYMBOL_MODULES: usize = 11;
/// Modules in the stop pattern, including the terminating bar.
pub const STOP_MODULES: usize = 13;

/// Characters representable in code set B.
pub fn is_supported(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Symbol values for `text`: start code, data, checksum. Stop excluded.
pub fn symbol_values(text: &str) -> Result<Vec<u8>, EncodeError> {
    if text.is_empty() {
        return Err(EncodeError::Empty);
    }

    if let Some((position, character)) = text.chars().enumerate().find(|(_, c)| !is_supported(*c)) {
        return Err(EncodeError::UnsupportedCharacters {
            character,
            position,
        });
    }

    let bytes = text.as_bytes();
    let mut values = if bytes.len() % 2 == 0 && bytes.iter().all(u8::is_ascii_digit) {
        let mut values = vec![START_C];
        values.extend(
            bytes
                .chunks(2)
                .map(|pair| (pair[0] - b'0') * 10 + (pair[1] - b'0')),
        );
        values
    } else {
        let mut values = vec![START_B];
        values.extend(bytes.iter().map(|b| b - b' '));
        values
    };

    values.push(checksum(&values));
    Ok(values)
}

/// Modulo-103 weighted sum; the start symbol has weight 1, as does the first
/// data symbol.
fn checksum(values: &[u8]) -> u8 {
    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i.max(1) as u32) * v as u32)
        .sum();
    (sum % 103) as u8
}

/// Full module sequence (`true` = bar), start through stop, without quiet zones.
pub fn encode(text: &str) -> Result<Vec<bool>, EncodeError> {
    let values = symbol_values(text)?;

    let mut modules = Vec::with_capacity(values.len() * SYMBOL_MODULES + STOP_MODULES);
    for &value in &values {
        push_pattern(&mut modules, &PATTERNS[value as usize]);
    }
    push_pattern(&mut modules, &STOP_PATTERN);

    Ok(modules)
}

fn push_pattern(modules: &mut Vec<bool>, widths: &[u8]) {
    for (i, &width) in widths.iter().enumerate() {
        let bar = i % 2 == 0;
        modules.extend(std::iter::repeat(bar).take(width as usize));
    }
}
