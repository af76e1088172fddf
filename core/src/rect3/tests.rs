use itertools::Itertools;
use proptest::arbitrary::Arbitrary;
use proptest::prelude::*;

use super::*;
use crate::vec3::tests::proptest_ivec;

impl Arbitrary for IRect3D {
    type Parameters = Option<isize>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(max: Self::Parameters) -> Self::Strategy {
        (IVec3D::arbitrary_with(max), IVec3D::arbitrary_with(max))
            .prop_map(|(a, b)| IRect3D::span(a, b))
            .boxed()
    }
}

/// Returns a strategy for boxes whose corners both lie in `range` along
/// every axis.
pub(crate) fn proptest_irect(
    range: std::ops::RangeInclusive<isize>,
) -> impl Strategy<Value = IRect3D> {
    (proptest_ivec(range.clone()), proptest_ivec(range)).prop_map(|(a, b)| IRect3D::span(a, b))
}

/// Returns every cell in `rect`.
pub(crate) fn cells(rect: IRect3D) -> Vec<IVec3D> {
    let (min, max) = (rect.min(), rect.max());
    (min[Axis::X]..=max[Axis::X])
        .cartesian_product(min[Axis::Y]..=max[Axis::Y])
        .cartesian_product(min[Axis::Z]..=max[Axis::Z])
        .map(|((x, y), z)| IVec3D::new(x, y, z))
        .collect()
}

#[test]
fn test_irect_single_cell() {
    let pos = IVec3D::new(3, -1, 7);
    let rect = IRect3D::single_cell(pos);
    assert_eq!(pos, rect.min());
    assert_eq!(pos, rect.max());
    assert_eq!(1, rect.count());
    assert!(rect.contains(&pos));
    assert!(!rect.contains(&(pos + 1)));
}

#[test]
#[should_panic(expected = "positive volume")]
fn test_irect_zero_size_panics() {
    IRect3D::with_size(IVec3D::origin(), IVec3D::new(1, 0, 1));
}

#[test]
fn test_irect_octants_of_universe() {
    // Side 8 starting at 1: halves are [1, 4] and [5, 8] on every axis.
    let universe = IRect3D::cube(IVec3D::repeat(1), 8);
    let octants = universe.octants();
    assert_eq!(IRect3D::span(IVec3D::repeat(1), IVec3D::repeat(4)), octants[0]);
    assert_eq!(IRect3D::span(IVec3D::repeat(5), IVec3D::repeat(8)), octants[7]);
    assert_eq!(
        IRect3D::span(IVec3D::new(5, 1, 1), IVec3D::new(8, 4, 4)),
        octants[Axis::X.bit()],
    );
    assert_eq!(
        IRect3D::span(IVec3D::new(1, 5, 5), IVec3D::new(4, 8, 8)),
        octants[Axis::Y.bit() | Axis::Z.bit()],
    );
}

#[test]
#[should_panic(expected = "cannot subdivide")]
fn test_irect_single_cell_octant_panics() {
    IRect3D::single_cell(IVec3D::origin()).octant(0);
}

/// Boxes that overlap along only one or two axes must not intersect.
#[test]
fn test_irect_partial_axis_overlap_is_disjoint() {
    let a = IRect3D::span(IVec3D::new(1, 1, 1), IVec3D::new(4, 4, 4));
    let b = IRect3D::span(IVec3D::new(2, 6, 6), IVec3D::new(3, 8, 8));
    let c = IRect3D::span(IVec3D::new(2, 2, 6), IVec3D::new(3, 3, 8));
    assert!(!a.intersects(&b));
    assert!(!a.intersects(&c));
    assert_eq!(None, a.intersection(&c));
}

proptest! {
    /// Tests that the octants of a box partition it exactly.
    #[test]
    fn test_irect_octants_partition(
        start in proptest_ivec(-20..=20),
        size in proptest_ivec(2..=6),
    ) {
        let rect = IRect3D::with_size(start, size);
        let octants = rect.octants();
        // The octants' volumes add up to the parent's.
        assert_eq!(rect.count(), octants.iter().map(IRect3D::count).sum::<isize>());
        for (i, octant) in octants.iter().enumerate() {
            assert!(rect.contains(octant));
            // Pairwise disjoint.
            for other in &octants[i + 1..] {
                assert!(!octant.intersects(other));
            }
        }
        // Every cell lies in the octant that `octant_index_of()` names.
        for pos in cells(rect) {
            let index = rect.octant_index_of(pos).unwrap();
            assert!(octants[index].contains(&pos));
        }
    }

    /// Tests `intersects()` and `intersection()` against brute force.
    #[test]
    fn test_irect_intersection(
        a in proptest_irect(-4..=4),
        b in proptest_irect(-4..=4),
    ) {
        let shared = cells(a).into_iter().filter(|pos| b.contains(pos)).collect_vec();
        assert_eq!(!shared.is_empty(), a.intersects(&b));
        assert_eq!(a.intersects(&b), b.intersects(&a));
        match a.intersection(&b) {
            Some(i) => assert_eq!(shared, cells(i)),
            None => assert!(shared.is_empty()),
        }
    }

    /// Tests `span()` and `contains()`.
    #[test]
    fn test_irect_span(
        corner1 in proptest_ivec(-5..=5),
        corner2 in proptest_ivec(-5..=5),
        rect: IRect3D,
    ) {
        let spanned = IRect3D::span(corner1, corner2);
        assert_eq!(spanned, IRect3D::span(corner2, corner1));
        assert!(spanned.contains(&corner1));
        assert!(spanned.contains(&corner2));
        assert_eq!(spanned.count() as usize, cells(spanned).len());
        assert!(rect.contains(&rect));
        assert_eq!(Some(rect), rect.intersection(&rect));
    }
}
