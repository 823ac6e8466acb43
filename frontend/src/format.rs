fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Grouped thousands, cents only when there are any.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = format_with_commas(cents / 100);
    match cents % 100 {
        0 => format!("{}{}", sign, whole),
        fraction => format!("{}{}.{:02}", sign, whole, fraction),
    }
}

pub fn format_currency(amount: f64) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", formatted),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(1850.0), "1,850");
        assert_eq!(format_amount(1234567.5), "1,234,567.50");
        assert_eq!(format_amount(156.42), "156.42");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(-45.8), "-$45.80");
        assert_eq!(format_currency(6500.0), "$6,500");
        assert_eq!(format_currency(-0.001), "$0");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(20.0), "20.0%");
        assert_eq!(format_percent(8.26), "8.3%");
    }
}
