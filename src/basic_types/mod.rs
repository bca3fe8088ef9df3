//! Small standalone types shared across the crate: the modular value domain and the polynomial
//! variable handle.

mod pvar;
mod value;

pub use pvar::PVar;
pub use value::add_mod;
pub use value::ceil_div;
pub use value::inv_mod_pow2;
pub use value::mask;
pub use value::mul_mod;
pub use value::mul_overflows;
pub use value::neg_mod;
pub use value::reduce;
pub use value::sub_mod;
pub use value::two_to_n;
pub use value::Bvalue;
pub use value::Value;
pub use value::MAX_WIDTH;
