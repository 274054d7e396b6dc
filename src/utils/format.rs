/// Formats an amount with thousands separators and two decimal places,
/// e.g. `1234567.891` -> `"1,234,567.89"`. Matches the report's money style.
pub fn thousands(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let int_part = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(thousands(1234567.891), "1,234,567.89");
        assert_eq!(thousands(175000.0), "175,000.00");
        assert_eq!(thousands(2000.0), "2,000.00");
        assert_eq!(thousands(999.0), "999.00");
        assert_eq!(thousands(0.0), "0.00");
    }

    #[test]
    fn keeps_two_decimals_and_sign() {
        assert_eq!(thousands(0.5), "0.50");
        assert_eq!(thousands(-1500.25), "-1,500.25");
        assert_eq!(thousands(1000000.0), "1,000,000.00");
    }

    #[test]
    fn rounds_to_cent_precision() {
        assert_eq!(thousands(1.006), "1.01");
        assert_eq!(thousands(1234.999), "1,235.00");
    }
}
