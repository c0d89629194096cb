mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde_json::{Map, Value};

/// Field holding the store's own identifier for a document
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Give the document an internal id unless it already carries one
pub(crate) fn assign_internal_id(document: &mut Map<String, Value>) {
    let missing = match document.get(INTERNAL_ID_FIELD) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if missing {
        document.insert(
            INTERNAL_ID_FIELD.to_string(),
            Value::String(uuid::Uuid::new_v4().simple().to_string()),
        );
    }
}
