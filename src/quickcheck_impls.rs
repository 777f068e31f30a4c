use num_integer::Integer;
use num_traits::{PrimInt, Signed};
use quickcheck::{Arbitrary, Gen};

use crate::Ratio;

impl<T> Arbitrary for Ratio<T>
    where T: Arbitrary + PrimInt + Integer + Signed
{
    fn arbitrary(g: &mut Gen) -> Self {
        let numer = T::arbitrary(g);
        let denom = T::arbitrary(g);
        // a zero or unrepresentable denominator falls back to an integer
        Ratio::try_new(numer, denom).unwrap_or_else(|_| Ratio::from_integer(numer))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(Shrinker::new(self.numer, self.denom))
    }
}

/// Shrinks the numerator first, then the denominator, skipping candidates
/// that are not valid ratios.
struct Shrinker<T: Arbitrary> {
    numer: T,
    denom: T,
    numer_iter: Box<dyn Iterator<Item = T>>,
    denom_iter: Box<dyn Iterator<Item = T>>,
}

impl<T: Arbitrary> Shrinker<T> {
    fn new(numer: T, denom: T) -> Self {
        Shrinker {
            numer_iter: numer.shrink(),
            denom_iter: denom.shrink(),
            numer: numer,
            denom: denom,
        }
    }
}

impl<T> Iterator for Shrinker<T>
    where T: Arbitrary + PrimInt + Integer + Signed
{
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Ratio<T>> {
        let denom = self.denom;
        if let Some(r) = self.numer_iter.by_ref().find_map(|numer| Ratio::try_new(numer, denom).ok()) {
            return Some(r);
        }
        let numer = self.numer;
        self.denom_iter.by_ref().find_map(|denom| Ratio::try_new(numer, denom).ok())
    }
}
