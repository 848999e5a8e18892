// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers shared by the rest of the crate.

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("vieta requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn hypot(self, other: Self) -> Self => hypot;
}

/// Computes `(-1)^k * value`.
#[inline]
pub(crate) fn alternate<T: core::ops::Neg<Output = T>>(k: usize, value: T) -> T {
    if k % 2 == 0 {
        value
    } else {
        -value
    }
}
