//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// Instead of spinning up a `ResourceActor`, the test owns the receiving end of
/// the channel, inspects each request and answers it with whatever result the
/// scenario needs.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { id, params, respond_to }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Asserts that no request has been queued.
pub fn expect_silence<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) {
    assert!(receiver.try_recv().is_err(), "expected no request to reach the actor");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductCreate};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move {
            let params = ProductCreate {
                name: "Test".to_string(),
                category: "Misc".to_string(),
                price: Decimal::ONE,
                stock_quantity: 1,
            };
            client.create("P1".to_string(), params).await
        });

        let (id, params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(id, "P1");
        assert_eq!(params.name, "Test");
        responder.send(Ok(id)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("P1".to_string()));
    }
}
