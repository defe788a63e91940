//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `wishlist_core::storage`.
//! Dispatch timeouts get their own variant so the handler boundary can
//! surface them distinctly from other store failures.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

use wishlist_core::store::RecordKey;
use wishlist_core::storage::RepositoryError;

fn key_id(key: &RecordKey) -> String {
    format!("{}/{}", key.partition, key.sort)
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if matches!(err, SdkError::TimeoutError(_)) {
        return RepositoryError::Timeout("DynamoDB query timed out".to_string());
    }
    if matches!(err, SdkError::DispatchFailure(_)) {
        return RepositoryError::ConnectionFailed(format!("Query dispatch failed: {:?}", err));
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    key: &RecordKey,
) -> RepositoryError {
    if matches!(err, SdkError::TimeoutError(_)) {
        return RepositoryError::Timeout("DynamoDB put timed out".to_string());
    }
    if matches!(err, SdkError::DispatchFailure(_)) {
        return RepositoryError::ConnectionFailed(format!("PutItem dispatch failed: {:?}", err));
    }
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => RepositoryError::AlreadyExists {
            entity_type: "record",
            id: key_id(key),
        },
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// A failed `attribute_exists` condition means the addressed record does
/// not exist; the update is conditional precisely so that this surfaces
/// as `NotFound` instead of an upsert.
pub fn map_update_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    key: &RecordKey,
) -> RepositoryError {
    if matches!(err, SdkError::TimeoutError(_)) {
        return RepositoryError::Timeout("DynamoDB update timed out".to_string());
    }
    if matches!(err, SdkError::DispatchFailure(_)) {
        return RepositoryError::ConnectionFailed(format!("UpdateItem dispatch failed: {:?}", err));
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type: "record",
            id: key_id(key),
        },
        UpdateItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        UpdateItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if matches!(err, SdkError::TimeoutError(_)) {
        return RepositoryError::Timeout("DynamoDB delete timed out".to_string());
    }
    if matches!(err, SdkError::DispatchFailure(_)) {
        return RepositoryError::ConnectionFailed(format!("DeleteItem dispatch failed: {:?}", err));
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}
