use proptest::prelude::*;

use super::*;
use crate::axis::{X, Y, Z};

/// Returns a strategy for vectors with every component in `range`.
pub(crate) fn proptest_ivec(
    range: std::ops::RangeInclusive<isize>,
) -> impl Strategy<Value = IVec3D> {
    (range.clone(), range.clone(), range).prop_map(|(x, y, z)| IVec3D::new(x, y, z))
}

impl proptest::arbitrary::Arbitrary for IVec3D {
    type Parameters = Option<isize>;
    type Strategy = BoxedStrategy<Self>;
    fn arbitrary_with(max: Option<isize>) -> Self::Strategy {
        let max = max.unwrap_or(100);
        proptest_ivec(-max..=max).boxed()
    }
}

#[test]
fn test_ivec_display() {
    assert_eq!("[1, -2, 3]", IVec3D::new(1, -2, 3).to_string());
}

#[test]
fn test_ivec_indexing() {
    let mut v = IVec3D::new(4, 5, 6);
    assert_eq!((4, 5, 6), (v[X], v[Y], v[Z]));
    v[Y] = 10;
    assert_eq!(IVec3D::new(4, 10, 6), v);
}

proptest! {
    /// Tests various vector operations.
    #[test]
    fn test_ivec_ops(
        pos1: IVec3D,
        pos2: IVec3D,
        scalar in -100..=100_isize,
    ) {
        for &ax in AXES {
            assert_eq!(-(pos1[ax]), (-pos1)[ax]);
            assert_eq!(pos1[ax] + pos2[ax], (pos1 + pos2)[ax]);
            assert_eq!(pos1[ax] - pos2[ax], (pos1 - pos2)[ax]);
            assert_eq!(pos1[ax] + scalar, (pos1 + scalar)[ax]);
            assert_eq!(pos1[ax] - scalar, (pos1 - scalar)[ax]);
            assert_eq!(pos1[ax].min(pos2[ax]), IVec3D::min(pos1, pos2)[ax]);
            assert_eq!(pos1[ax].max(pos2[ax]), IVec3D::max(pos1, pos2)[ax]);
        }
        assert_eq!(pos1[X] + pos1[Y] + pos1[Z], pos1.sum());
        assert_eq!(pos1[X] * pos1[Y] * pos1[Z], pos1.product());
        assert!(IVec3D::min(pos1, pos2).all_le(IVec3D::max(pos1, pos2)));
    }
}
