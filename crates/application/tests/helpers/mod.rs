#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;
mod mocks;

pub use builders::QueryBuilder;
pub use mocks::{FailingSink, RecordingSink, StaticHandler};
