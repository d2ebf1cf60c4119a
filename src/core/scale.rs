use crate::error::{TickError, TickResult};

/// Linear mapping from a continuous axis domain onto a pixel range.
///
/// The pixel range may be reversed (`range_start > range_end`), which is how
/// vertical axes grow upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> TickResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TickError::InvalidAxis(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> TickResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(TickError::InvalidAxis(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> TickResult<f64> {
        if !value.is_finite() {
            return Err(TickError::InvalidAxis("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> TickResult<f64> {
        if !pixel.is_finite() {
            return Err(TickError::InvalidAxis("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::LinearScale;

    #[test]
    fn reversed_range_maps_domain_end_to_range_end() {
        let scale = LinearScale::new(0.0, 100.0)
            .and_then(|scale| scale.with_range(400.0, 0.0))
            .expect("scale");
        assert_eq!(scale.domain(), (0.0, 100.0));
        assert_eq!(scale.range(), (400.0, 0.0));
        assert_relative_eq!(scale.domain_to_pixel(0.0).expect("px"), 400.0);
        assert_relative_eq!(scale.domain_to_pixel(25.0).expect("px"), 300.0);
        assert_relative_eq!(scale.pixel_to_domain(300.0).expect("domain"), 25.0);
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new(5.0, 5.0).is_err());
        assert!(LinearScale::new(0.0, f64::NAN).is_err());
        assert!(LinearScale::new(0.0, 1.0).expect("scale").with_range(3.0, 3.0).is_err());
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let scale = LinearScale::new(0.0, 1.0).expect("scale");
        assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
    }
}
