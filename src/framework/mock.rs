//! # Mock Client
//!
//! [`MockClient`] hands out a real [`AggregateClient`] whose actor side is a
//! scripted expectation queue instead of a running actor. Client-side logic
//! (the domain client wrappers, the checkout orchestrator) can be unit-tested
//! deterministically, including failure injection that would be awkward to
//! provoke from a live actor.
//!
//! Two styles are available:
//!
//! - The fluent API: `mock.expect_command(id).return_ok(result)`, then
//!   `mock.verify()` to assert every expectation was consumed.
//! - The raw helpers ([`create_mock_client`] plus `expect_*`): receive the
//!   actual request, assert on its payload, and answer through the oneshot by
//!   hand. Use these when the test cares about what was sent, not just what
//!   comes back.
//!
//! Testing strategy across the crate:
//!
//! - Mock the actor side to test a client wrapper or composite in isolation.
//! - Spawn real actors (cheap: one task each) to test aggregate behavior and
//!   full flows; see `tests/`.

use crate::framework::aggregate::Aggregate;
use crate::framework::client::AggregateClient;
use crate::framework::error::ActorError;
use crate::framework::message::AggregateRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted response for one expected request.
enum Expectation<T: Aggregate> {
    Get {
        id: T::Id,
        response: Result<Option<T>, ActorError>,
    },
    Create {
        response: Result<T::Id, ActorError>,
    },
    Update {
        id: T::Id,
        response: Result<T, ActorError>,
    },
    Command {
        id: T::Id,
        response: Result<T::CommandResult, ActorError>,
    },
}

/// A mock actor with expectation tracking.
///
/// ```rust,ignore
/// let mut mock = MockClient::<Profile>::new();
/// mock.expect_get(ProfileId(1)).return_ok(Some(profile));
///
/// let client = ProfileClient::new(mock.client());
/// // drive the code under test ...
/// mock.verify();
/// ```
pub struct MockClient<T: Aggregate> {
    client: AggregateClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Aggregate> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Aggregate> MockClient<T> {
    /// Creates a mock with an empty expectation queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<AggregateRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        AggregateRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        AggregateRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        AggregateRequest::Update {
                            id: _,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        AggregateRequest::Command {
                            id: _,
                            command: _,
                            respond_to,
                        },
                        Some(Expectation::Command { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: AggregateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client handle for the code under test.
    pub fn client(&self) -> AggregateClient<T> {
        self.client.clone()
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` request.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `command` request.
    pub fn expect_command(&mut self, id: T::Id) -> CommandExpectationBuilder<T> {
        CommandExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Aggregate> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Aggregate> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                id: self.id,
                response: Ok(value),
            });
    }

    pub fn return_err(self, error: ActorError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: Aggregate> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Aggregate> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: ActorError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: Aggregate> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Aggregate> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Ok(value),
            });
    }

    pub fn return_err(self, error: ActorError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `command` expectations.
pub struct CommandExpectationBuilder<T: Aggregate> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Aggregate> CommandExpectationBuilder<T> {
    pub fn return_ok(self, result: T::CommandResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Command {
                id: self.id,
                response: Ok(result),
            });
    }

    pub fn return_err(self, error: ActorError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Command {
                id: self.id,
                response: Err(error),
            });
    }
}

// ---------------------------------------------------------------------------
// Raw helpers: inspect requests instead of scripting responses
// ---------------------------------------------------------------------------

/// Creates a client whose requests land on the returned receiver.
///
/// The test plays the actor: it receives each [`AggregateRequest`], asserts on
/// the payload, and answers through the embedded oneshot. Prefer
/// [`MockClient`] when only the response matters.
pub fn create_mock_client<T: Aggregate>(
    buffer_size: usize,
) -> (AggregateClient<T>, mpsc::Receiver<AggregateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (AggregateClient::new(sender), receiver)
}

/// Receives the next request, asserting it is a Create.
pub async fn expect_create<T: Aggregate>(
    receiver: &mut mpsc::Receiver<AggregateRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, ActorError>>,
)> {
    match receiver.recv().await {
        Some(AggregateRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request, asserting it is a Get.
pub async fn expect_get<T: Aggregate>(
    receiver: &mut mpsc::Receiver<AggregateRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, ActorError>>,
)> {
    match receiver.recv().await {
        Some(AggregateRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request, asserting it is a Command.
pub async fn expect_command<T: Aggregate>(
    receiver: &mut mpsc::Receiver<AggregateRequest<T>>,
) -> Option<(
    T::Id,
    T::Command,
    tokio::sync::oneshot::Sender<Result<T::CommandResult, ActorError>>,
)> {
    match receiver.recv().await {
        Some(AggregateRequest::Command {
            id,
            command,
            respond_to,
        }) => Some((id, command, respond_to)),
        _ => None,
    }
}
