//! Partial application of native functions.

use crate::pack::Pack;
use crate::value::{NativeFunction, Value};

/// Bind `args` in front of every call: `g(xs) = f(args ++ xs)`.
pub fn bind_leading(f: &NativeFunction, args: Pack<Value>) -> NativeFunction {
    let target = f.clone();
    NativeFunction::new(f.name(), move |call_args: Pack<Value>| {
        target.call(args.clone().concat(call_args))
    })
}

/// Bind `args` after the first `offset` call arguments:
/// `g(xs) = f(xs[..offset] ++ args ++ xs[offset..])`.
///
/// `offset` is clamped to the number of call arguments, so a large offset
/// appends the bound arguments at the end.
pub fn bind_trailing(offset: usize, f: &NativeFunction, args: Pack<Value>) -> NativeFunction {
    let target = f.clone();
    NativeFunction::new(f.name(), move |mut call_args: Pack<Value>| {
        let tail = call_args.split_off(offset);
        target.call(call_args.concat(args.clone()).concat(tail))
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;

    use super::*;

    /// Returns its arguments unchanged.
    fn identity() -> NativeFunction {
        NativeFunction::new("identity", Ok)
    }

    fn ints(values: &[i64]) -> Pack<Value> {
        values.iter().copied().map(Value::int).collect()
    }

    #[test]
    fn leading_args_come_first() {
        let bound = bind_leading(&identity(), ints(&[1, 2]));
        assert_eq!(bound.call(ints(&[3])).unwrap(), ints(&[1, 2, 3]));
        assert_eq!(bound.name(), "identity");
    }

    #[test]
    fn trailing_args_follow_offset() {
        let bound = bind_trailing(1, &identity(), ints(&[9]));
        assert_eq!(bound.call(ints(&[1, 2, 3])).unwrap(), ints(&[1, 9, 2, 3]));
    }

    #[test]
    fn trailing_offset_is_clamped() {
        let bound = bind_trailing(5, &identity(), ints(&[9]));
        assert_eq!(bound.call(ints(&[1])).unwrap(), ints(&[1, 9]));
    }

    #[test]
    fn bound_function_has_new_identity() {
        let f = identity();
        let bound = bind_leading(&f, Pack::new());
        assert!(!bound.ptr_eq(&f));
        assert_eq!(bound.call(ints(&[4])).unwrap(), ints(&[4]));
    }

    #[test]
    fn errors_propagate() {
        let fails = NativeFunction::new("pop", |mut args: Pack<Value>| {
            args.pop()?;
            Ok(args)
        });
        let bound = bind_trailing(0, &fails, Pack::new());
        assert!(bound.call(Pack::new()).is_err());
    }
}
