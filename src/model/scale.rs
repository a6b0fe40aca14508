//! Value and category scales used to place bars and axis ticks.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear map from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A collapsed domain maps everything to the range start.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return self.range.0;
        }
        self.range.0 + (value - d0) / span * (self.range.1 - self.range.0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Round-number ticks (1, 2 or 5 times a power of ten) covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 || i1.is_nan() || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let k = i1 + i as f64;
        out.push(if inc < 0.0 { k / -inc } else { k * inc });
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Positive distance between adjacent ticks, 0 for a collapsed domain.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Categorical scale with one evenly sized band per key.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is applied both between bands and at the outer edges; bands are centered.
    pub fn new(keys: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let padding_inner = padding.clamp(0.0, 1.0);
        let padding_outer = padding.max(0.0);
        let align = 0.5;
        let n = keys.len() as f64;
        let (lo, hi) = if range.1 < range.0 {
            (range.1, range.0)
        } else {
            (range.0, range.1)
        };
        let step = (hi - lo) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding_inner)) * align;
        let bandwidth = step * (1.0 - padding_inner);
        Self {
            keys,
            start,
            step,
            bandwidth,
        }
    }

    pub fn position(&self, key: &str) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scale.rs"]
mod tests;
