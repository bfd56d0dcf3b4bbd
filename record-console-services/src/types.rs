use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record as the console sees it: a flat set of named scalar fields.
///
/// `Default` is the empty template the form resets to. Field access goes
/// through names so a generic controller can drive any record shape without
/// knowing it.
pub trait RecordFields:
    Clone + Default + std::fmt::Debug + Send + Sync + Serialize + DeserializeOwned
{
    /// The record's identifier, if it has been assigned one.
    fn id(&self) -> Option<String>;

    /// Overwrite a single field by name. No validation is performed; an
    /// unknown field name is ignored (logged at debug). Numeric fields that
    /// fail to parse keep their previous value.
    fn set_field(&mut self, name: &str, value: &str);

    /// Read a single field by name, rendered as a string.
    fn field(&self, name: &str) -> Option<String>;

    /// A short human-readable label for table rows.
    fn summary(&self) -> String;
}

fn unknown_field(record: &str, name: &str) {
    log::debug!("[{record}] Ignoring unknown field '{name}'");
}

fn unparsable_field(record: &str, name: &str, value: &str) {
    log::debug!("[{record}] Ignoring unparsable value '{value}' for field '{name}'");
}

// ============ User ============

/// A user profile as served by the user directory (reqres.in wire shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Assigned by the service; absent on records being drafted for create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
}

impl RecordFields for UserRecord {
    fn id(&self) -> Option<String> {
        self.id.map(|v| v.to_string())
    }

    fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "id" => match value.parse() {
                Ok(v) => self.id = Some(v),
                Err(_) => unparsable_field("user", name, value),
            },
            "email" => self.email = value.to_string(),
            "first_name" => self.first_name = value.to_string(),
            "last_name" => self.last_name = value.to_string(),
            "avatar" => self.avatar = value.to_string(),
            _ => unknown_field("user", name),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.map(|v| v.to_string()),
            "email" => Some(self.email.clone()),
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "avatar" => Some(self.avatar.clone()),
            _ => None,
        }
    }

    fn summary(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ============ Product ============

/// A catalog product (fakestoreapi.com wire shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Product image URL.
    #[serde(default)]
    pub image: String,
}

impl RecordFields for ProductRecord {
    fn id(&self) -> Option<String> {
        self.id.map(|v| v.to_string())
    }

    fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "id" => match value.parse() {
                Ok(v) => self.id = Some(v),
                Err(_) => unparsable_field("product", name, value),
            },
            "title" => self.title = value.to_string(),
            "price" => match value.parse() {
                Ok(v) => self.price = v,
                Err(_) => unparsable_field("product", name, value),
            },
            "description" => self.description = value.to_string(),
            "category" => self.category = value.to_string(),
            "image" => self.image = value.to_string(),
            _ => unknown_field("product", name),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.map(|v| v.to_string()),
            "title" => Some(self.title.clone()),
            "price" => Some(self.price.to_string()),
            "description" => Some(self.description.clone()),
            "category" => Some(self.category.clone()),
            "image" => Some(self.image.clone()),
            _ => None,
        }
    }

    fn summary(&self) -> String {
        self.title.clone()
    }
}

// ============ Audit entry ============

/// One audit-trail row: a recorded change to a field of some entity.
///
/// The remote service speaks Spanish on the wire; the renames keep the Rust
/// field names conventional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Entity kind that was modified.
    #[serde(default, rename = "entidadModificada")]
    pub entity: String,
    /// Identifier of the modified entity.
    #[serde(default, rename = "entidadModificadaId")]
    pub entity_id: String,
    /// Name of the field that changed.
    #[serde(default, rename = "campoModificado")]
    pub field_name: String,
    #[serde(default, rename = "valorAnterior")]
    pub old_value: String,
    #[serde(default, rename = "valorNuevo")]
    pub new_value: String,
    /// User who performed the change.
    #[serde(default, rename = "usuarioModificacion")]
    pub modified_by: String,
}

impl RecordFields for AuditRecord {
    fn id(&self) -> Option<String> {
        self.id.map(|v| v.to_string())
    }

    fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "id" => match value.parse() {
                Ok(v) => self.id = Some(v),
                Err(_) => unparsable_field("audit", name, value),
            },
            "entity" => self.entity = value.to_string(),
            "entity_id" => self.entity_id = value.to_string(),
            "field_name" => self.field_name = value.to_string(),
            "old_value" => self.old_value = value.to_string(),
            "new_value" => self.new_value = value.to_string(),
            "modified_by" => self.modified_by = value.to_string(),
            _ => unknown_field("audit", name),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.map(|v| v.to_string()),
            "entity" => Some(self.entity.clone()),
            "entity_id" => Some(self.entity_id.clone()),
            "field_name" => Some(self.field_name.clone()),
            "old_value" => Some(self.old_value.clone()),
            "new_value" => Some(self.new_value.clone()),
            "modified_by" => Some(self.modified_by.clone()),
            _ => None,
        }
    }

    fn summary(&self) -> String {
        format!("{} #{}: {}", self.entity, self.entity_id, self.field_name)
    }
}
