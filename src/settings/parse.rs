//! Lenient number parsing for settings fields: leading whitespace is skipped
//! and the longest numeric prefix is used, so `"3 (Default)"` reads as 3.

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

pub fn parse_int(input: &str) -> Option<i64> {
    let (negative, rest) = split_sign(input.trim_start());
    let len = digits(rest);
    if len == 0 {
        return None;
    }
    let value = rest[..len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

pub fn parse_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let (_, rest) = split_sign(trimmed);
    let sign_len = trimmed.len() - rest.len();

    let whole = digits(rest);
    let mut end = whole;
    let mut fraction = 0;
    if rest[end..].starts_with('.') {
        fraction = digits(&rest[end + 1..]);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return None;
    }
    let exponent = &rest[end..];
    if exponent.starts_with(['e', 'E']) {
        let (_, exp_digits) = split_sign(&exponent[1..]);
        let n = digits(exp_digits);
        if n > 0 {
            end += exponent.len() - exp_digits.len() + n;
        }
    }
    trimmed[..sign_len + end].parse().ok()
}

/// Parse a non-negative count; anything unparsable or negative becomes 0.
pub fn count_or_zero(input: &str) -> u32 {
    parse_int(input).map(clamp_count).unwrap_or(0)
}

pub fn clamp_count(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
