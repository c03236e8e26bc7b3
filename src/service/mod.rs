pub mod mutation;
pub mod query;
pub mod validation;

pub use mutation::*;
pub use query::*;
pub use validation::*;
