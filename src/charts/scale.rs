use crate::types::fmt_num;

/// Maps a data domain onto a pixel range. The domain is widened when
/// degenerate so mapping never divides by zero.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if d0 == d1 {
            d0 -= 0.5;
            d1 += 0.5;
        }
        Self {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }
}

/// Finite min/max of a value sequence; `None` when nothing finite remains.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut iter = values.into_iter().filter(|v| v.is_finite());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Round tick positions covering [min, max] on a 1-2-5 step progression.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    let (min, max) = if min < max { (min, max) } else { (max, min) };

    let raw_step = (max - min) / target.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = magnitude
        * if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

    let start = (min / step).floor() * step;
    let count = ((max - start) / step).ceil() as usize + 1;
    (0..count.min(64)).map(|i| start + step * i as f64).collect()
}

pub fn tick_label(value: f64) -> String {
    // Scrub accumulated float noise before formatting.
    fmt_num((value * 1e6).round() / 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_domain_to_range() {
        let scale = LinearScale::new((0.0, 10.0), (200.0, 0.0));
        assert_eq!(scale.map(0.0), 200.0);
        assert_eq!(scale.map(10.0), 0.0);
        assert_eq!(scale.map(5.0), 100.0);
    }

    #[test]
    fn degenerate_domain_is_widened() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(scale.map(3.0), 50.0);
    }

    #[test]
    fn extent_filters_non_finite() {
        assert_eq!(extent([1.0, f64::NAN, -2.0, 5.0]), Some((-2.0, 5.0)));
        assert_eq!(extent(std::iter::empty()), None);
        assert_eq!(extent([f64::NAN]), None);
    }

    #[test]
    fn ticks_cover_the_domain_on_round_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 4), vec![0.0, 5.0, 10.0]);
        assert_eq!(nice_ticks(0.0, 1.0, 4), vec![0.0, 0.5, 1.0]);

        let ticks = nice_ticks(110.0, 130.0, 4);
        assert!(ticks.first().copied().unwrap() <= 110.0);
        assert!(ticks.last().copied().unwrap() >= 130.0);
    }

    #[test]
    fn ticks_handle_reversed_and_degenerate_input() {
        assert_eq!(nice_ticks(10.0, 0.0, 4), nice_ticks(0.0, 10.0, 4));
        assert_eq!(nice_ticks(7.0, 7.0, 4), vec![7.0]);
        assert!(nice_ticks(f64::NAN, 1.0, 4).is_empty());
    }

    #[test]
    fn tick_labels_are_short() {
        assert_eq!(tick_label(5.0), "5");
        assert_eq!(tick_label(0.30000000000000004), "0.3");
    }
}
