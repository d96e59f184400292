mod boolean;
mod generator;
mod range;

pub use boolean::translate_boolean_term;
pub use generator::generate;
pub use range::translate_range_args;
