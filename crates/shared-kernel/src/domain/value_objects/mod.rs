// crates/shared-kernel/src/domain/value_objects/mod.rs

mod counter;
mod value_object;

pub use counter::Counter;
pub use value_object::ValueObject;
