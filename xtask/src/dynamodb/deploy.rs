//! Table deployment operations (Imperative Shell).

use super::client;
use super::config::{self, GsiConfig, KeyAttribute, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::{DeployPlan, DestroyPlan};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, CreateGlobalSecondaryIndexAction, GlobalSecondaryIndex,
    GlobalSecondaryIndexUpdate, KeySchemaElement, KeyType, Projection, ProjectionType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use std::time::Duration;

/// Execute a deploy plan.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await?;
        }
        DeployPlan::AddGsis {
            table_name,
            gsis_to_add,
        } => {
            // DynamoDB accepts one index creation per UpdateTable call.
            for gsi in gsis_to_add {
                add_gsi(client, table_name, gsi).await?;
                wait_for_table_active(client, table_name).await?;
            }
        }
        DeployPlan::NoChanges { .. } => {}
    }
    Ok(())
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    if let DestroyPlan::DeleteTable { table_name } = plan {
        client
            .delete_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
    }
    Ok(())
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let attribute_definitions = config
        .key_attributes()
        .into_iter()
        .map(attribute_definition)
        .collect::<Result<Vec<_>>>()?;

    let mut request = client
        .create_table()
        .table_name(&config.table_name)
        .set_key_schema(Some(key_schema(
            &config.partition_key,
            config.sort_key.as_ref(),
        )?))
        .set_attribute_definitions(Some(attribute_definitions))
        .billing_mode(to_billing_mode(config.billing_mode));

    for gsi in &config.gsis {
        request = request.global_secondary_indexes(
            GlobalSecondaryIndex::builder()
                .index_name(&gsi.name)
                .set_key_schema(Some(key_schema(&gsi.partition_key, gsi.sort_key.as_ref())?))
                .projection(projection(gsi))
                .build()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?,
        );
    }

    request
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
    Ok(())
}

async fn add_gsi(client: &Client, table_name: &str, gsi: &GsiConfig) -> Result<()> {
    let attribute_definitions = std::iter::once(&gsi.partition_key)
        .chain(gsi.sort_key.as_ref())
        .map(attribute_definition)
        .collect::<Result<Vec<_>>>()?;

    client
        .update_table()
        .table_name(table_name)
        .set_attribute_definitions(Some(attribute_definitions))
        .global_secondary_index_updates(
            GlobalSecondaryIndexUpdate::builder()
                .create(
                    CreateGlobalSecondaryIndexAction::builder()
                        .index_name(&gsi.name)
                        .set_key_schema(Some(key_schema(
                            &gsi.partition_key,
                            gsi.sort_key.as_ref(),
                        )?))
                        .projection(projection(gsi))
                        .build()
                        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?,
                )
                .build(),
        )
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    let max_attempts = 60;
    let delay = Duration::from_secs(2);

    for _ in 0..max_attempts {
        if let Some(state) = client::get_table_state(client, table_name).await? {
            if state.is_ready() {
                return Ok(());
            }
        }
        tokio::time::sleep(delay).await;
    }

    Err(DynamodbError::TableActivationTimeout)
}

fn key_schema(
    partition_key: &KeyAttribute,
    sort_key: Option<&KeyAttribute>,
) -> Result<Vec<KeySchemaElement>> {
    std::iter::once((partition_key, KeyType::Hash))
        .chain(sort_key.map(|sk| (sk, KeyType::Range)))
        .map(|(key, key_type)| {
            KeySchemaElement::builder()
                .attribute_name(&key.name)
                .key_type(key_type)
                .build()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))
        })
        .collect()
}

fn attribute_definition(key: &KeyAttribute) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(&key.name)
        .attribute_type(to_scalar_type(&key.attribute_type))
        .build()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))
}

fn projection(gsi: &GsiConfig) -> Projection {
    let projection_type = match gsi.projection {
        config::ProjectionType::All => ProjectionType::All,
    };
    Projection::builder().projection_type(projection_type).build()
}

fn to_billing_mode(mode: config::BillingMode) -> BillingMode {
    match mode {
        config::BillingMode::PayPerRequest => BillingMode::PayPerRequest,
    }
}

fn to_scalar_type(attr_type: &config::AttributeType) -> ScalarAttributeType {
    match attr_type {
        config::AttributeType::String => ScalarAttributeType::S,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_schema_orders_hash_then_range() {
        let schema = key_schema(
            &KeyAttribute::string("userId"),
            Some(&KeyAttribute::string("todoId")),
        )
        .unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema[0].attribute_name(), "userId");
        assert_eq!(schema[0].key_type(), &KeyType::Hash);
        assert_eq!(schema[1].attribute_name(), "todoId");
        assert_eq!(schema[1].key_type(), &KeyType::Range);
    }

    #[test]
    fn test_attribute_definition_is_string() {
        let definition = attribute_definition(&KeyAttribute::string("createdAt")).unwrap();

        assert_eq!(definition.attribute_name(), "createdAt");
        assert_eq!(definition.attribute_type(), &ScalarAttributeType::S);
    }
}
