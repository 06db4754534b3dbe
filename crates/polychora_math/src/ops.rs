//! Component-wise arithmetic shared by the vector types

/// Implements `+ - += -= * *= -` (scalar `*`) for a struct of `f32` fields,
/// plus `component_mul`.
macro_rules! impl_vector_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, s: f32) -> Self {
                Self { $($f: self.$f * s),+ }
            }
        }

        impl std::ops::MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, s: f32) {
                $(self.$f *= s;)+
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl $ty {
            /// Component-wise product
            #[inline]
            pub fn component_mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }
    };
}

pub(crate) use impl_vector_ops;
