use serde::Deserialize;

/// 任何註冊進 Manager 的 JSON 物件都必須帶有 `name`
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
