/// Edge weight values.
///
/// Unweighted graphs store [`Weight::unit`] for every edge, so that the same
/// storage works for both weighted and unweighted graphs. [`Weight::zero`]
/// exists for traversals that distinguish zero-cost edges.
pub trait Weight: Clone + PartialEq {
    fn zero() -> Self;
    fn unit() -> Self;
}

macro_rules! impl_int_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0
                }

                fn unit() -> Self {
                    1
                }
            }
        )*
    }
}

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    0.0
                }

                fn unit() -> Self {
                    1.0
                }
            }
        )*
    }
}

impl_int_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);
