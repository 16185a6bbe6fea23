//! Numeral rendering with locale thousands delimiters.

struct NumberFormat {
    delimiter: &'static str,
    decimal_separator: &'static str,
    /// Integer-digit count at which grouping starts.
    min_digits_for_delimiter: usize,
}

const DEFAULT_FORMAT: NumberFormat = NumberFormat {
    delimiter: ",",
    decimal_separator: ".",
    min_digits_for_delimiter: 4,
};

const LOCALE_FORMATS: &[(&str, NumberFormat)] = &[
    ("de_DE", NumberFormat { delimiter: ".", decimal_separator: ",", min_digits_for_delimiter: 4 }),
    ("es_ES", NumberFormat { delimiter: ".", decimal_separator: ",", min_digits_for_delimiter: 4 }),
    ("da_DK", NumberFormat { delimiter: ".", decimal_separator: ",", min_digits_for_delimiter: 4 }),
    ("tr_TR", NumberFormat { delimiter: ".", decimal_separator: ",", min_digits_for_delimiter: 4 }),
    ("pt_BR", NumberFormat { delimiter: ".", decimal_separator: ",", min_digits_for_delimiter: 4 }),
    ("fr_FR", NumberFormat { delimiter: "\u{A0}", decimal_separator: ",", min_digits_for_delimiter: 4 }),
    ("ru_RU", NumberFormat { delimiter: "\u{A0}", decimal_separator: ",", min_digits_for_delimiter: 4 }),
];

fn format_for(locale: &str) -> &'static NumberFormat {
    LOCALE_FORMATS
        .iter()
        .find(|(tag, _)| *tag == locale)
        .map(|(_, format)| format)
        .unwrap_or(&DEFAULT_FORMAT)
}

/// Render an integer with the locale's thousands delimiter.
pub(super) fn format_number(locale: &str, n: i64) -> String {
    let format = format_for(locale);
    let digits = n.unsigned_abs().to_string();
    let grouped = if digits.len() >= format.min_digits_for_delimiter {
        group_digits(&digits, format.delimiter)
    } else {
        digits
    };
    if n < 0 { format!("-{grouped}") } else { grouped }
}

/// Render a float with the locale's delimiter and decimal separator.
pub(super) fn format_float(locale: &str, value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let format = format_for(locale);
    let rendered = value.abs().to_string();
    let (integer_part, fraction) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rendered, None),
    };
    let mut out = if integer_part.len() >= format.min_digits_for_delimiter {
        group_digits(&integer_part, format.delimiter)
    } else {
        integer_part
    };
    if let Some(fraction) = fraction {
        out.push_str(format.decimal_separator);
        out.push_str(&fraction);
    }
    if value < 0.0 { format!("-{out}") } else { out }
}

fn group_digits(digits: &str, delimiter: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push_str(delimiter);
        }
        out.push(*c);
    }
    out
}
