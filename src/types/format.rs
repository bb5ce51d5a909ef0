const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Renders a transaction count the way the dashboard headlines show it:
/// `2.35 Billion`, `14.20 Million`, or a comma grouped integer below a million.
pub fn format_count(count: f64) -> String {
    if count >= BILLION {
        format!("{:.2} Billion", count / BILLION)
    } else if count >= MILLION {
        format!("{:.2} Million", count / MILLION)
    } else {
        format_grouped(count, 0)
    }
}

/// Formats a number with `,` thousands separators and a fixed number of decimals.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None)
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3 + 1);

    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}
