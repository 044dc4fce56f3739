use futures::{SinkExt, StreamExt};
use proptest::prelude::*;
use reactsrv::client::{ClientConfigBuilder, WsEchoClient};
use reactsrv::common::{ServerConfig, base_url, spawn_test_server};
use reactsrv::pipeline::{Batcher, SseEvent, payload};
use reactsrv::ws::echo_reply;
use reactsrv::ReactError;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Property: every text frame gets exactly one prefixed reply, in order
    #[test]
    fn echo_preserves_order(messages in prop::collection::vec(".*", 1..16)) {
        tokio_test::block_on(async {
            let (server_handle, addr) = spawn_test_server(ServerConfig::default()).await
                .map_err(|e| TestCaseError::fail(format!("Server setup failed: {}", e)))?;

            let (mut socket, _) = connect_async(format!("ws://{addr}/echo")).await
                .map_err(|e| TestCaseError::fail(format!("Client connection failed: {}", e)))?;

            for message in &messages {
                socket.send(Message::Text(message.clone())).await
                    .map_err(|e| TestCaseError::fail(format!("Send failed: {}", e)))?;
            }

            let mut replies = Vec::new();
            while replies.len() < messages.len() {
                match socket.next().await {
                    Some(Ok(Message::Text(text))) => replies.push(text.to_string()),
                    Some(Ok(_)) => continue,
                    other => return Err(TestCaseError::fail(format!("Unexpected frame: {:?}", other))),
                }
            }

            let _ = socket.close(None).await;
            server_handle.abort();

            // Property: no drops, no duplicates, same order
            let expected: Vec<String> = messages.iter().map(|m| echo_reply(m)).collect();
            prop_assert_eq!(replies, expected);
            Ok(())
        })?;
    }

    /// Property: batches are full, in order, and the remainder stays pending
    #[test]
    fn batches_partition_input(
        items in prop::collection::vec(any::<i32>(), 0..200),
        size in 1usize..20
    ) {
        let mut batcher = Batcher::new(size).unwrap();
        let mut emitted = Vec::new();
        for item in &items {
            if let Some(batch) = batcher.push(*item) {
                prop_assert_eq!(batch.len(), size);
                emitted.extend(batch);
            }
        }

        let full = items.len() / size * size;
        prop_assert_eq!(&emitted[..], &items[..full]);
        prop_assert_eq!(batcher.pending(), items.len() % size);
    }

    /// Property: only events with data pass the payload stage, unchanged
    #[test]
    fn payload_passes_non_empty_data(data in ".*") {
        let event = SseEvent { event_type: "random".to_string(), data: data.clone() };
        match payload(&event) {
            Some(value) => prop_assert_eq!(value, data),
            None => prop_assert!(data.is_empty()),
        }
    }
}

/// Stress test with many echo sessions
#[tokio::test]
async fn stress_test_many_echo_sessions() {
    let (server_handle, addr) = spawn_test_server(ServerConfig {
        max_sessions: 100,
        ..Default::default()
    })
    .await
    .unwrap();

    let mut handles = Vec::new();
    for i in 0..50 {
        let config = ClientConfigBuilder::new().base_url(base_url(addr)).build();
        let handle = tokio::spawn(async move {
            let message = format!("Stress test message from client {}", i);
            let response = WsEchoClient::echo_once(&config, &message).await?;
            assert_eq!(response, echo_reply(&message));
            Ok::<(), ReactError>(())
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    server_handle.abort();
}

/// Test rapid connect/disconnect cycles
#[tokio::test]
async fn rapid_connect_disconnect() {
    let (server_handle, addr) = spawn_test_server(ServerConfig {
        max_sessions: 5,
        ..Default::default()
    })
    .await
    .unwrap();
    let config = ClientConfigBuilder::new().base_url(base_url(addr)).build();

    // More cycles than slots: each close must hand its slot back
    for i in 0..20 {
        let mut client = WsEchoClient::connect(&config).await.unwrap();
        let message = format!("Rapid test {}", i);
        let response = client.echo(&message).await.unwrap();
        assert_eq!(response, echo_reply(&message));
        client.close().await.unwrap();

        // Give the server a moment to drop the finished session
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    server_handle.abort();
}
