//! Macros for implementing operators and approximate comparison.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The body sees both operands as references.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs: &$tl = self;
                let $rhs: &$tr = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

/// Implements a compound assignment operator in terms of the corresponding
/// binary operator, for owned and borrowed right-hand sides.
macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $binop:ident, $binop_method:ident, $tl:ty, $tr:ty) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                *self = ::std::ops::$binop::$binop_method(&*self, rhs);
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                *self = ::std::ops::$binop::$binop_method(&*self, &rhs);
            }
        }
    };
}

/// Implements [`Neg`](std::ops::Neg) for owned and borrowed values.
macro_rules! impl_neg {
    ($t:ty, |$val:ident| $body:block) => {
        impl ::std::ops::Neg for &$t {
            type Output = $t;

            #[inline]
            fn neg(self) -> Self::Output {
                let $val: &$t = self;
                $body
            }
        }

        impl ::std::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> Self::Output {
                -&self
            }
        }
    };
}

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] with `f32`
/// epsilons by comparing the listed fields pairwise. Each field type must
/// itself implement both traits with `f32` epsilons.
macro_rules! impl_approx_eq {
    ($t:ty, [$($field:tt),+]) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(::approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(::approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }
    };
}
