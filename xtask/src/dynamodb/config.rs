//! Table configuration types (Functional Core - pure data).

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub gsis: Vec<GsiConfig>,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    /// A string-typed key attribute.
    pub fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::String,
        }
    }
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl AttributeType {
    /// Short DynamoDB type code.
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
        }
    }
}

/// Global Secondary Index configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiConfig {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub projection: ProjectionType,
}

/// GSI projection type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionType {
    All,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Renames the todo id index.
    pub fn with_index_name(mut self, name: &str) -> Self {
        if let Some(gsi) = self.gsis.first_mut() {
            gsi.name = name.to_string();
        }
        self
    }

    /// Every distinct key attribute used by the table or its indexes.
    pub fn key_attributes(&self) -> Vec<&KeyAttribute> {
        let mut attributes: Vec<&KeyAttribute> = Vec::new();
        let gsi_keys = self
            .gsis
            .iter()
            .flat_map(|gsi| std::iter::once(&gsi.partition_key).chain(gsi.sort_key.as_ref()));

        for attribute in std::iter::once(&self.partition_key)
            .chain(self.sort_key.as_ref())
            .chain(gsi_keys)
        {
            if !attributes.iter().any(|a| a.name == attribute.name) {
                attributes.push(attribute);
            }
        }
        attributes
    }
}

/// Returns the canonical table configuration for todo records.
///
/// Records are keyed by owner and id; the index lets a todo be found by id
/// alone, sorted by creation time.
pub fn todos_table_config() -> TableConfig {
    TableConfig {
        table_name: "todos".to_string(),
        partition_key: KeyAttribute::string("userId"),
        sort_key: Some(KeyAttribute::string("todoId")),
        gsis: vec![GsiConfig {
            name: "TodoIdIndex".to_string(),
            partition_key: KeyAttribute::string("todoId"),
            sort_key: Some(KeyAttribute::string("createdAt")),
            projection: ProjectionType::All,
        }],
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todos_table_keys() {
        let config = todos_table_config();

        assert_eq!(config.partition_key.name, "userId");
        assert_eq!(config.sort_key.unwrap().name, "todoId");
        assert_eq!(config.gsis.len(), 1);
        assert_eq!(config.gsis[0].partition_key.name, "todoId");
        assert_eq!(config.gsis[0].sort_key.as_ref().unwrap().name, "createdAt");
    }

    #[test]
    fn test_overrides() {
        let config = todos_table_config()
            .with_table_name("Todos-dev")
            .with_index_name("CreatedAtIndex");

        assert_eq!(config.table_name, "Todos-dev");
        assert_eq!(config.gsis[0].name, "CreatedAtIndex");
    }

    #[test]
    fn test_key_attributes_are_deduplicated() {
        let config = todos_table_config();
        let names: Vec<&str> = config
            .key_attributes()
            .iter()
            .map(|a| a.name.as_str())
            .collect();

        assert_eq!(names, vec!["userId", "todoId", "createdAt"]);
    }
}
