//! 宽松的数字解析：客户端可能把数字以字符串形式提交（`"9.99"`、`"5"`），
//! 这里按"读取最长的数字前缀"的方式处理，与常见的 `parseInt`/`parseFloat` 行为一致。

use serde_json::Value;

/// 读取字符串开头的整数，忽略前导空白，允许正负号；`0x`/`0X` 开头时按十六进制读取。
///
/// `"12abc"` 得到 `12`，`"0x10"` 得到 `16`，`"abc"` 和 `"0x"` 得到 `None`。超出 `i64` 范围时取边界值。
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let len = digits.chars().take_while(|c| c.is_digit(radix)).count();
    if len == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits[..len].chars() {
        let digit = i64::from(c.to_digit(radix)?);
        value = match value.checked_mul(i64::from(radix)).and_then(|v| {
            if negative { v.checked_sub(digit) } else { v.checked_add(digit) }
        }) {
            Some(v) => v,
            None => return Some(if negative { i64::MIN } else { i64::MAX }),
        };
    }

    Some(value)
}

/// 读取字符串开头的十进制浮点数（可带小数部分和指数）。
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // 指数部分只有在后面跟着数字时才算数，例如 "1e" 只读到 "1"
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// JSON 数字原样取值，字符串按 [`parse_float_prefix`] 解析，其他类型视为无效。
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// JSON 数字向零取整，字符串按 [`parse_int_prefix`] 解析，其他类型视为无效。
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}
