pub mod html;
pub mod json;
pub mod svg;
pub mod tsv;

/// Pixel coordinate with at most three decimals and no trailing zeros.
pub fn format_px(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Axis label for `value` with the precision implied by the tick `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let body = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut out = String::with_capacity(body.len() + 4);
    let is_zero = body.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        out.push('\u{2212}');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// One decimal place; negative values are wrapped in parentheses.
pub fn format_median(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let body = format!("{:.1}", value.abs());
    let is_zero = body.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("({})", body)
    } else {
        body
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
