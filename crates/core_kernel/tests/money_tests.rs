//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic, whole-dollar rounding,
//! en-US formatting, rates, and serialization.

use core_kernel::{Money, Rate};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_full_precision() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_arithmetic_defers_rounding_to_round_whole() {
        // 1250.49996 would become 1250.5 if intermediates were rounded
        let base = Money::new(dec!(2.5)) * dec!(500.199984);
        assert_eq!(base.amount(), dec!(1250.49996));
        assert_eq!((base + Money::new(dec!(0.00001))).round_whole(), Money::from_whole(1250));
        assert_eq!(base.to_whole_dollars(), Ok(1250));
    }

    #[test]
    fn test_from_whole_has_no_fraction() {
        let m = Money::from_whole(1250);
        assert_eq!(m.amount(), dec!(1250));
        assert!(m.is_whole());
    }

    #[test]
    fn test_zero_and_default_agree() {
        assert_eq!(Money::zero(), Money::default());
        assert!(Money::zero().is_zero());
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_zero_is_neither_positive_nor_negative() {
        let m = Money::zero();
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_negative_amount() {
        let m = Money::from_whole(-200);
        assert!(m.is_negative());
        assert_eq!(m.abs(), Money::from_whole(200));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub_neg() {
        let a = Money::from_whole(1250);
        let b = Money::new(dec!(187.5));

        assert_eq!((a + b).amount(), dec!(1437.5));
        assert_eq!((a - b).amount(), dec!(1062.5));
        assert_eq!((-b).amount(), dec!(-187.5));
    }

    #[test]
    fn test_multiply_by_factor() {
        let base = Money::from_whole(1250) * dec!(1.2);
        assert_eq!(base.amount(), dec!(1500));
    }

    #[test]
    fn test_sum_of_parts() {
        let parts = vec![
            Money::from_whole(300),
            Money::from_whole(150),
            Money::from_whole(-200),
        ];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total, Money::from_whole(250));
    }

    #[test]
    fn test_max_picks_larger_amount() {
        assert_eq!(Money::from_whole(-5).max(Money::zero()), Money::zero());
        assert_eq!(Money::from_whole(5).max(Money::zero()), Money::from_whole(5));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(Money::new(dec!(187.5)).round_whole(), Money::from_whole(188));
        assert_eq!(Money::new(dec!(0.5)).round_whole(), Money::from_whole(1));
        assert_eq!(Money::new(dec!(-0.5)).round_whole(), Money::from_whole(-1));
    }

    #[test]
    fn test_below_half_rounds_down() {
        assert_eq!(Money::new(dec!(224.4999)).round_whole(), Money::from_whole(224));
    }

    #[test]
    fn test_to_whole_dollars() {
        assert_eq!(Money::new(dec!(312.5)).to_whole_dollars(), Ok(313));
        assert_eq!(Money::from_whole(-200).to_whole_dollars(), Ok(-200));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_display_uses_whole_dollars_with_grouping() {
        assert_eq!(Money::new(dec!(2625.4)).to_string(), "$2,625");
        assert_eq!(Money::new(dec!(999.5)).to_string(), "$1,000");
    }

    #[test]
    fn test_negative_sign_precedes_symbol() {
        assert_eq!(Money::from_whole(-1200).to_string(), "-$1,200");
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(25));
        assert_eq!(rate.as_decimal(), dec!(0.25));
        assert_eq!(rate.apply(&Money::from_whole(1250)).amount(), dec!(312.5));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.5)).to_string(), "50%");
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_round_trips_through_json() {
        let m = Money::new(dec!(187.5));
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_money_accepts_json_numbers() {
        let m: Money = serde_json::from_str("1838").unwrap();
        assert_eq!(m, Money::from_whole(1838));
    }
}
