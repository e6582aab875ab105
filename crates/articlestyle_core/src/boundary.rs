//! Point-containment capability for outside-click detection.

/// Anything that can answer "is this point inside me?".
///
/// The GUI implements this for its toolkit rectangles; slices report
/// containment when any member contains the point, so a boundary can be the
/// union of several regions.
pub trait ContainsPoint {
    type Point: Copy;

    fn contains_point(&self, point: Self::Point) -> bool;
}

impl<T: ContainsPoint> ContainsPoint for [T] {
    type Point = T::Point;

    fn contains_point(&self, point: Self::Point) -> bool {
        self.iter().any(|region| region.contains_point(point))
    }
}

impl<T: ContainsPoint, const N: usize> ContainsPoint for [T; N] {
    type Point = T::Point;

    fn contains_point(&self, point: Self::Point) -> bool {
        self.as_slice().contains_point(point)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::ContainsPoint;

    /// Axis-aligned box over `(x, y)` pairs, min inclusive, max exclusive.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct TestBox {
        pub(crate) min: (f32, f32),
        pub(crate) max: (f32, f32),
    }

    impl ContainsPoint for TestBox {
        type Point = (f32, f32);

        fn contains_point(&self, (x, y): (f32, f32)) -> bool {
            x >= self.min.0 && x < self.max.0 && y >= self.min.1 && y < self.max.1
        }
    }

    #[test]
    fn slice_contains_when_any_region_does() {
        let panel = TestBox {
            min: (600.0, 0.0),
            max: (1000.0, 800.0),
        };
        let toggle = TestBox {
            min: (560.0, 16.0),
            max: (600.0, 56.0),
        };
        let regions = [panel, toggle];
        assert!(regions.contains_point((700.0, 400.0)));
        assert!(regions.contains_point((570.0, 20.0)));
        assert!(!regions.contains_point((570.0, 400.0)));
        assert!(!regions[..0].contains_point((700.0, 400.0)));
    }
}
