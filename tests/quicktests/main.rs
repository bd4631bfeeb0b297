use quickcheck::{Arbitrary, Gen};

mod tree;

/// Something to do to a tree and a `BTreeSet` side by side.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K
    Insert(K),
    /// Remove the K
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}
