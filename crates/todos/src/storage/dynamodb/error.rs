//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `todos_core::storage`.
//! Transport failures become `ConnectionFailed`; service errors keep their
//! native message behind a short summary.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use todos_core::storage::RepositoryError;

use super::keys::ENTITY_TYPE_TODO;

/// Map dispatch and timeout failures, which never reached the service.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError>
where
    E: Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

/// `QueryFailed` carrying `summary` and the full service error chain.
fn service_failure<E: Error>(summary: &str, err: E) -> RepositoryError {
    RepositoryError::QueryFailed(format!("{}: {}", summary, DisplayErrorContext(err)))
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        e @ QueryError::ResourceNotFoundException(_) => {
            service_failure("Table or index not found", e)
        }
        e @ QueryError::ProvisionedThroughputExceededException(_) => {
            service_failure("Throughput exceeded", e)
        }
        e @ QueryError::RequestLimitExceeded(_) => service_failure("Request limit exceeded", e),
        e @ QueryError::InternalServerError(_) => {
            service_failure("DynamoDB internal server error", e)
        }
        e => service_failure("Query failed", e),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        e @ GetItemError::ResourceNotFoundException(_) => service_failure("Table not found", e),
        e @ GetItemError::ProvisionedThroughputExceededException(_) => {
            service_failure("Throughput exceeded", e)
        }
        e @ GetItemError::RequestLimitExceeded(_) => {
            service_failure("Request limit exceeded", e)
        }
        e @ GetItemError::InternalServerError(_) => {
            service_failure("DynamoDB internal server error", e)
        }
        e => service_failure("GetItem failed", e),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        e @ PutItemError::ResourceNotFoundException(_) => service_failure("Table not found", e),
        e @ PutItemError::ProvisionedThroughputExceededException(_) => {
            service_failure("Throughput exceeded", e)
        }
        e @ PutItemError::RequestLimitExceeded(_) => {
            service_failure("Request limit exceeded", e)
        }
        e @ PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            service_failure("Item collection size limit exceeded", e)
        }
        e @ PutItemError::TransactionConflictException(_) => {
            service_failure("Transaction conflict", e)
        }
        e @ PutItemError::InternalServerError(_) => {
            service_failure("DynamoDB internal server error", e)
        }
        e => service_failure("PutItem failed", e),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// A failed existence condition means the key is not stored.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type: ENTITY_TYPE_TODO,
            id: id.into(),
        },
        e @ UpdateItemError::ResourceNotFoundException(_) => {
            service_failure("Table not found", e)
        }
        e @ UpdateItemError::ProvisionedThroughputExceededException(_) => {
            service_failure("Throughput exceeded", e)
        }
        e @ UpdateItemError::RequestLimitExceeded(_) => {
            service_failure("Request limit exceeded", e)
        }
        e @ UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            service_failure("Item collection size limit exceeded", e)
        }
        e @ UpdateItemError::TransactionConflictException(_) => {
            service_failure("Transaction conflict", e)
        }
        e @ UpdateItemError::InternalServerError(_) => {
            service_failure("DynamoDB internal server error", e)
        }
        e => service_failure("UpdateItem failed", e),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        e @ DeleteItemError::ResourceNotFoundException(_) => {
            service_failure("Table not found", e)
        }
        e @ DeleteItemError::ProvisionedThroughputExceededException(_) => {
            service_failure("Throughput exceeded", e)
        }
        e @ DeleteItemError::RequestLimitExceeded(_) => {
            service_failure("Request limit exceeded", e)
        }
        e @ DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            service_failure("Item collection size limit exceeded", e)
        }
        e @ DeleteItemError::TransactionConflictException(_) => {
            service_failure("Transaction conflict", e)
        }
        e @ DeleteItemError::InternalServerError(_) => {
            service_failure("DynamoDB internal server error", e)
        }
        e => service_failure("DeleteItem failed", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceNotFoundException,
    };

    #[test]
    fn test_query_error_keeps_service_message() {
        let err: SdkError<QueryError, ()> = SdkError::service_error(
            QueryError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found: Table: Todos-dev not found")
                    .build(),
            ),
            (),
        );

        match map_query_error(err) {
            RepositoryError::QueryFailed(message) => {
                assert!(message.starts_with("Table or index not found: "));
                assert!(message.contains("Table: Todos-dev not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failed_condition_is_not_found() {
        let err: SdkError<UpdateItemError, ()> = SdkError::service_error(
            UpdateItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder()
                    .message("The conditional request failed")
                    .build(),
            ),
            (),
        );

        assert_eq!(
            map_update_item_error(err, "u1/t1"),
            RepositoryError::NotFound {
                entity_type: "Todo",
                id: "u1/t1".to_string(),
            }
        );
    }

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<GetItemError, ()> = SdkError::timeout_error("request timed out");

        assert!(matches!(
            map_get_item_error(err),
            RepositoryError::ConnectionFailed(_)
        ));
    }
}
