mod traits;
mod types;

pub use traits::KeyValueStore;
pub use types::{AttributeChange, Record, RecordKey};
