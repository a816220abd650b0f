//! Money formatting

use crate::prices::Price;

/// Format a price the way pt-BR locales display reais, e.g. `R$ 1.234,56`.
///
/// The symbol is followed by a regular space, not the U+00A0 a browser's
/// `Intl.NumberFormat` emits, so the text survives URL encoding and terminals.
pub fn format_brl(price: Price) -> String {
    let centavos = *price;
    let reais = group_thousands(centavos / 100);
    let fraction = centavos % 100;

    format!("R$ {reais},{fraction:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }

        grouped.push(digit);
    }

    grouped
}
