use serde::{
    Serialize,
    Deserialize
};

/// The `name` key every registry entry carries next to its own fields.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
