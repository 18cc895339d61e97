mod ordered;

use quickcheck::{Arbitrary, Gen};

/// Keys drawn from a small range so duplicates and misses are both common.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SmallKey(u8);

impl Arbitrary for SmallKey {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallKey(u8::arbitrary(g) % 16)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(SmallKey))
    }
}
