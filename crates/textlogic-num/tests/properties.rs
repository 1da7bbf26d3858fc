// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Properties of the numeric engine checked against native arithmetic.

use proptest::prelude::*;
use textlogic_num::{StrSelect, TextError, abs, eq, geq_zero, gt_zero, if_select, sign, trunc};

fn finite() -> impl Strategy<Value = f64> {
    -1.0e12f64..1.0e12f64
}

fn payload() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :.,\n\t-]{0,16}"
}

proptest! {
    #[test]
    fn prop_eq_reflexive(x in any::<i64>(), y in finite()) {
        prop_assert!(eq(x, x)?);
        prop_assert!(eq(y, y)?);
    }

    #[test]
    fn prop_eq_symmetric_and_native(a in -50i32..50, b in -50i32..50) {
        prop_assert_eq!(eq(a, b)?, eq(b, a)?);
        prop_assert_eq!(eq(a, b)?, a == b);
    }

    #[test]
    fn prop_eq_floats_native(a in finite(), b in finite()) {
        prop_assert_eq!(eq(a, b)?, a == b);
    }

    #[test]
    fn prop_abs_matches_native(x in (i64::MIN + 1)..=i64::MAX, y in finite()) {
        prop_assert_eq!(abs(x)?, x.abs());
        prop_assert_eq!(abs(y)?, y.abs());
    }

    #[test]
    fn prop_abs_idempotent(x in finite()) {
        let once = abs(x)?;
        prop_assert!(eq(once, abs(once)?)?);
    }

    #[test]
    fn prop_abs_never_negative(x in (i32::MIN + 1)..=i32::MAX, y in finite()) {
        prop_assert!(geq_zero(abs(x)?)?);
        prop_assert!(geq_zero(abs(y)?)?);
    }

    #[test]
    fn prop_sign_predicates_match_native(x in any::<i64>(), y in finite()) {
        prop_assert_eq!(geq_zero(x)?, x >= 0);
        prop_assert_eq!(gt_zero(x)?, x > 0);
        prop_assert_eq!(geq_zero(y)?, y >= 0.0);
        prop_assert_eq!(gt_zero(y)?, y > 0.0);
    }

    #[test]
    fn prop_sign_matches_native(x in any::<i64>(), y in finite()) {
        prop_assert_eq!(i64::from(sign(x)?), x.signum());
        let expected: i8 = match y {
            y if y > 0.0 => 1,
            y if y < 0.0 => -1,
            _ => 0,
        };
        prop_assert_eq!(sign(y)?, expected);
    }

    #[test]
    fn prop_trunc_matches_native(x in finite(), n in any::<i32>()) {
        prop_assert_eq!(trunc(x)?, x.trunc() as i64);
        prop_assert_eq!(trunc(n)?, i64::from(n));
    }

    #[test]
    fn prop_if_select_picks_by_condition(
        cond in any::<bool>(),
        then in payload(),
        otherwise in payload(),
    ) {
        let expected = if cond { then.clone() } else { otherwise.clone() };
        prop_assert_eq!(if_select(cond, then.clone(), otherwise.clone())?, expected.clone());
        prop_assert_eq!(cond.if_str(then, otherwise)?, expected);
    }

    #[test]
    fn prop_if_select_rejects_parenthesized_payloads(
        cond in any::<bool>(),
        prefix in payload(),
        suffix in payload(),
    ) {
        let broken = format!("{prefix}){suffix}");
        let result = if_select(cond, broken, String::from("ok"));
        prop_assert!(matches!(result, Err(TextError::Format(_))));
    }
}

#[test]
fn scenario_gt_zero() {
    assert!(!gt_zero(0.0f64).unwrap());
    assert!(gt_zero(3.14f64).unwrap());
    assert!(!gt_zero(-0.01f64).unwrap());
}

#[test]
fn scenario_sign_boundaries() {
    assert_eq!(sign(0i32).unwrap(), 0);
    assert_eq!(sign(5i32).unwrap(), 1);
    assert_eq!(sign(-5i32).unwrap(), -1);
    assert_eq!(sign(0.0f64).unwrap(), 0);
    assert_eq!(sign(-17.3f64).unwrap(), -1);
    assert_eq!(sign(abs(-17.3f64).unwrap()).unwrap(), 1);
}

#[test]
fn scenario_trunc_boundaries() {
    assert_eq!(trunc(5.17f64).unwrap(), 5);
    assert_eq!(trunc(-5.17f64).unwrap(), -5);
    assert_eq!(trunc(5i32).unwrap(), 5);
    assert_eq!(trunc(0i32).unwrap(), 0);
}

#[test]
fn scenario_if_select() {
    assert_eq!(
        if_select(true, String::from("A"), String::from("B")).unwrap(),
        "A"
    );
    assert_eq!(
        if_select(false, String::from("A"), String::from("B")).unwrap(),
        "B"
    );
}
