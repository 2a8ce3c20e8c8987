use serde::{Deserialize, Serialize};

/// A single persistent field of a Django model.
///
/// `kind` is the Django field-type token as declared in the source,
/// e.g. `CharField` or `IntegerField`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// A discovered Django model: its class name and declared fields,
/// in declaration order. Built fresh on every run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Lowercase form of the model name, used for template file names
    /// and route names (`Order` -> `order`).
    pub fn route_token(&self) -> String {
        self.name.to_lowercase()
    }

    /// Field names quoted for a Python list literal:
    /// `'title', 'pages'`. Empty string for a field-less model.
    pub fn quoted_field_list(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("'{}'", f.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_token_is_lowercase_name() {
        let model = ModelDescriptor::new("OrderItem");
        assert_eq!(model.route_token(), "orderitem");
    }

    #[test]
    fn test_quoted_field_list() {
        let model = ModelDescriptor::with_fields(
            "Book",
            vec![
                FieldDescriptor::new("title", "CharField"),
                FieldDescriptor::new("pages", "IntegerField"),
            ],
        );
        assert_eq!(model.quoted_field_list(), "'title', 'pages'");

        let empty = ModelDescriptor::new("Tag");
        assert_eq!(empty.quoted_field_list(), "");
    }
}
