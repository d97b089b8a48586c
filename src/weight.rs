use core::fmt::Debug;
use core::ops::{Add, Sub};

/// Numeric values that can be stored in a [`crate::Fenwick`].
///
/// Implemented for every primitive integer and float. The search operations additionally assume
/// that stored weights are non-negative, so that prefix sums never decrease.
///
/// Arithmetic uses the type's own `+` and `-`. For integers the total of all weights must fit in
/// the type; overflow follows Rust's integer rules (panic in debug, wrap in release).
pub trait Weight: Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_weight {
    ($zero:expr => $($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_weight!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight!(0.0 => f32, f64);
