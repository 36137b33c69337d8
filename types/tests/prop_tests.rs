use proptest::prelude::*;

use shorthand_types::Timestamp;

proptest! {
    /// Swapping the readings flips the sign and nothing else.
    #[test]
    fn seconds_until_is_antisymmetric(a in any::<u64>(), b in any::<u64>()) {
        let (ta, tb) = (Timestamp::new(a), Timestamp::new(b));
        prop_assert_eq!(ta.seconds_until(tb), -tb.seconds_until(ta));
    }

    /// Readings in order never produce a negative gap.
    #[test]
    fn ordered_readings_are_non_negative(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Timestamp::new(lo).seconds_until(Timestamp::new(hi)) >= 0);
    }
}
