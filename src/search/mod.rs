pub mod results;
pub mod predicate;
pub mod executor;
