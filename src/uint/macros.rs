//! Macros used to define [`BigUint`][`crate::BigUint`] aliases and operator impls.

macro_rules! impl_uint_aliases {
    ($(($name:ident, $bits:expr, $doc:expr)),+) => {
        $(
            #[doc = $doc]
            #[doc = "unsigned big integer."]
            pub type $name = BigUint<$bits, { nlimbs($bits) }>;
        )+
     };
}

/// Implements a binary operator and its assigning form on top of a `Result`-returning method,
/// panicking with `$msg` when the method fails (as the primitive integer operators do).
macro_rules! impl_checked_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $checked:ident, $msg:expr) => {
        impl<const BITS: u32, const LIMBS: usize> core::ops::$op for BigUint<BITS, LIMBS> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                self.$checked(&rhs).expect($msg)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$op<&BigUint<BITS, LIMBS>>
            for BigUint<BITS, LIMBS>
        {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: &Self) -> Self {
                self.$checked(rhs).expect($msg)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$op<BigUint<BITS, LIMBS>>
            for &BigUint<BITS, LIMBS>
        {
            type Output = BigUint<BITS, LIMBS>;

            #[inline]
            fn $op_fn(self, rhs: BigUint<BITS, LIMBS>) -> BigUint<BITS, LIMBS> {
                self.$checked(&rhs).expect($msg)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$op<&BigUint<BITS, LIMBS>>
            for &BigUint<BITS, LIMBS>
        {
            type Output = BigUint<BITS, LIMBS>;

            #[inline]
            fn $op_fn(self, rhs: &BigUint<BITS, LIMBS>) -> BigUint<BITS, LIMBS> {
                self.$checked(rhs).expect($msg)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$assign for BigUint<BITS, LIMBS> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = self.$checked(&rhs).expect($msg);
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$assign<&BigUint<BITS, LIMBS>>
            for BigUint<BITS, LIMBS>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Self) {
                *self = self.$checked(rhs).expect($msg);
            }
        }
    };
}

/// Implements an infallible binary operator and its assigning form on top of a `const fn`.
///
/// The inherent method shares its name with the operator method, so it is called by path.
macro_rules! impl_infallible_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl<const BITS: u32, const LIMBS: usize> core::ops::$op for BigUint<BITS, LIMBS> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                BigUint::$inner(&self, &rhs)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$op<&BigUint<BITS, LIMBS>>
            for BigUint<BITS, LIMBS>
        {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: &Self) -> Self {
                BigUint::$inner(&self, rhs)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$op<BigUint<BITS, LIMBS>>
            for &BigUint<BITS, LIMBS>
        {
            type Output = BigUint<BITS, LIMBS>;

            #[inline]
            fn $op_fn(self, rhs: BigUint<BITS, LIMBS>) -> BigUint<BITS, LIMBS> {
                BigUint::$inner(self, &rhs)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$op<&BigUint<BITS, LIMBS>>
            for &BigUint<BITS, LIMBS>
        {
            type Output = BigUint<BITS, LIMBS>;

            #[inline]
            fn $op_fn(self, rhs: &BigUint<BITS, LIMBS>) -> BigUint<BITS, LIMBS> {
                BigUint::$inner(self, rhs)
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$assign for BigUint<BITS, LIMBS> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = BigUint::$inner(self, &rhs);
            }
        }

        impl<const BITS: u32, const LIMBS: usize> core::ops::$assign<&BigUint<BITS, LIMBS>>
            for BigUint<BITS, LIMBS>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Self) {
                *self = BigUint::$inner(self, rhs);
            }
        }
    };
}

/// Implements a shift operator for the given shift amount types on top of a `const fn`.
macro_rules! impl_shift_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident, $($shift:ty),+) => {
        $(
            impl<const BITS: u32, const LIMBS: usize> core::ops::$op<$shift> for BigUint<BITS, LIMBS> {
                type Output = Self;

                #[inline]
                fn $op_fn(self, shift: $shift) -> Self {
                    self.$inner(u32::try_from(shift).unwrap_or(u32::MAX))
                }
            }

            impl<const BITS: u32, const LIMBS: usize> core::ops::$op<$shift> for &BigUint<BITS, LIMBS> {
                type Output = BigUint<BITS, LIMBS>;

                #[inline]
                fn $op_fn(self, shift: $shift) -> BigUint<BITS, LIMBS> {
                    self.$inner(u32::try_from(shift).unwrap_or(u32::MAX))
                }
            }

            impl<const BITS: u32, const LIMBS: usize> core::ops::$assign<$shift> for BigUint<BITS, LIMBS> {
                #[inline]
                fn $assign_fn(&mut self, shift: $shift) {
                    *self = self.$inner(u32::try_from(shift).unwrap_or(u32::MAX));
                }
            }
        )+
    };
}
