//! In-memory ports for exercising the submit flows without a browser.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Credentials, LoginResponse, RegisterResponse};
use crate::ports::AuthPorts;
use crate::util::notify::Notifier;
use crate::util::session_store::{SessionStore, StorageError};

/// Canned replies plus a log of every request that reached the "network".
pub(crate) struct FakeApi {
    login: Result<LoginResponse, ApiError>,
    register: Result<RegisterResponse, ApiError>,
    pub calls: Mutex<Vec<(&'static str, Credentials)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self { login: Err(ApiError::Unavailable), register: Err(ApiError::Unavailable), calls: Mutex::new(Vec::new()) }
    }

    pub fn login_ok(mut self, message: &str, user_id: &str) -> Self {
        self.login = Ok(LoginResponse { message: Some(message.to_owned()), user_id: user_id.to_owned() });
        self
    }

    pub fn login_err(mut self, err: ApiError) -> Self {
        self.login = Err(err);
        self
    }

    pub fn register_ok(mut self, message: Option<&str>) -> Self {
        self.register = Ok(RegisterResponse { message: message.map(str::to_owned) });
        self
    }

    pub fn register_err(mut self, err: ApiError) -> Self {
        self.register = Err(err);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.calls.lock().unwrap().push(("login", credentials.clone()));
        self.login.clone()
    }

    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        self.calls.lock().unwrap().push(("register", credentials.clone()));
        self.register.clone()
    }
}

#[derive(Default)]
pub(crate) struct MemorySessionStore {
    value: Mutex<Option<String>>,
    fail_writes: bool,
}

impl MemorySessionStore {
    pub fn failing() -> Self {
        Self { value: Mutex::new(None), fail_writes: true }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    fn save(&self, user_id: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("QuotaExceededError".to_owned()));
        }
        *self.value.lock().unwrap() = Some(user_id.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.value.lock().unwrap() = None;
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

/// Fakes wired into an `AuthPorts`, with handles kept for assertions.
pub(crate) struct Harness {
    pub api: Arc<FakeApi>,
    pub session: Arc<MemorySessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub ports: AuthPorts,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        Self::with_store(api, MemorySessionStore::default())
    }

    pub fn with_store(api: FakeApi, store: MemorySessionStore) -> Self {
        let api = Arc::new(api);
        let session = Arc::new(store);
        let notifier = Arc::new(RecordingNotifier::default());
        let ports = AuthPorts::new(api.clone(), session.clone(), notifier.clone());
        Self { api, session, notifier, ports }
    }
}
