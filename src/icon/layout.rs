use crate::error::IconError;

const RELATIVE_TOLERANCE: f64 = 1e-12;

/// Placement of the resized logo on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Canvas side length in pixels.
    pub size: u32,
    /// Side length of the resized logo.
    pub logo_size: u32,
    /// Distance from the top-left corner on both axes.
    pub offset: u32,
}

impl Layout {
    /// Compute the logo placement for a `size`×`size` canvas where the logo
    /// covers `logo_percentage` percent of the width.
    ///
    /// The percentage must lie in (0, 100], so the logo never exceeds the canvas.
    pub fn compute(size: u32, logo_percentage: f64) -> Result<Self, IconError> {
        // The RGB8 canvas buffer length must fit in usize.
        let canvas_len = (size as usize)
            .checked_mul(size as usize)
            .and_then(|n| n.checked_mul(3));
        if size == 0
            || canvas_len.is_none()
            || !logo_percentage.is_finite()
            || logo_percentage <= 0.0
            || logo_percentage > 100.0
        {
            return Err(IconError::InvalidDimension {
                size,
                logo_percentage,
            });
        }

        // Decimal percentages such as 40.8 are not exact in binary, so the
        // product can land a few ulps under a whole number before flooring.
        let scaled = size as f64 * logo_percentage / 100.0;
        let logo_size = ((scaled + scaled * RELATIVE_TOLERANCE).floor() as u32).min(size);
        let offset = (size - logo_size) / 2;

        Ok(Self {
            size,
            logo_size,
            offset,
        })
    }

    /// Whether pixel `(x, y)` falls inside the pasted logo region.
    #[cfg(test)]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let end = self.offset + self.logo_size;
        (self.offset..end).contains(&x) && (self.offset..end).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_192() {
        let layout = Layout::compute(192, 80.0).unwrap();
        assert_eq!(layout.logo_size, 153);
        assert_eq!(layout.offset, 19);
    }

    #[test]
    fn test_standard_512() {
        let layout = Layout::compute(512, 80.0).unwrap();
        assert_eq!(layout.logo_size, 409);
        assert_eq!(layout.offset, 51);
    }

    #[test]
    fn test_maskable_512() {
        let layout = Layout::compute(512, 70.0).unwrap();
        assert_eq!(layout.logo_size, 358);
        assert_eq!(layout.offset, 77);
    }

    #[test]
    fn test_full_percentage_fills_canvas() {
        let layout = Layout::compute(64, 100.0).unwrap();
        assert_eq!(layout.logo_size, 64);
        assert_eq!(layout.offset, 0);
    }

    #[test]
    fn test_logo_always_fits() {
        // (percentage, percentage in tenths) so the expected size is exact
        let percentages = [
            (0.5, 5u64),
            (1.0, 10),
            (33.3, 333),
            (40.8, 408),
            (50.0, 500),
            (60.5, 605),
            (70.0, 700),
            (80.0, 800),
            (99.9, 999),
            (100.0, 1000),
        ];
        for size in [1u32, 2, 3, 17, 48, 192, 375, 511, 512, 1000, 1024] {
            for (pct, tenths) in percentages {
                let layout = Layout::compute(size, pct).unwrap();
                let expected = (size as u64 * tenths / 1000) as u32;
                assert_eq!(layout.logo_size, expected, "size={size} pct={pct}");
                assert!(layout.logo_size <= size);
                assert_eq!(layout.offset, (size - layout.logo_size) / 2);
                assert!(layout.offset + layout.logo_size <= size);
            }
        }
    }

    #[test]
    fn test_decimal_percentage_not_rounded_down() {
        assert_eq!(Layout::compute(375, 40.8).unwrap().logo_size, 153);
        for size in 1..=1024u32 {
            for tenths in 1..=1000u64 {
                let pct = tenths as f64 / 10.0;
                let layout = Layout::compute(size, pct).unwrap();
                assert_eq!(
                    layout.logo_size as u64,
                    size as u64 * tenths / 1000,
                    "size={size} pct={pct}"
                );
            }
        }
    }

    #[test]
    fn test_rejects_overflowing_size() {
        assert!(matches!(
            Layout::compute(u32::MAX, 80.0),
            Err(IconError::InvalidDimension { size: u32::MAX, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(matches!(
            Layout::compute(0, 80.0),
            Err(IconError::InvalidDimension { size: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_percentage() {
        for pct in [0.0, -10.0, 100.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    Layout::compute(192, pct),
                    Err(IconError::InvalidDimension { .. })
                ),
                "pct={pct}"
            );
        }
    }

    #[test]
    fn test_contains() {
        let layout = Layout::compute(10, 50.0).unwrap();
        // logo 5px at offset 2: covers 2..7
        assert!(layout.contains(2, 2));
        assert!(layout.contains(6, 6));
        assert!(!layout.contains(7, 2));
        assert!(!layout.contains(1, 4));
    }
}
