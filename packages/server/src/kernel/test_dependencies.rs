// Mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.
// Each mock records the calls it receives and pops queued responses,
// falling back to a benign default when the queue is empty.

use std::sync::Mutex;

use async_trait::async_trait;
use gemini_client::{Candidate, Content, GenerateContentResponse, Part};

use super::{
    AuthUser, BaseGenerativeModel, BaseSessionService, BaseVerifyService, ProviderError,
    VerificationStart,
};

// =============================================================================
// Mock Verification Service
// =============================================================================

pub struct MockVerifyService {
    start_results: Mutex<Vec<Result<VerificationStart, ProviderError>>>,
    check_results: Mutex<Vec<Result<(), ProviderError>>>,
    start_calls: Mutex<Vec<String>>,
    check_calls: Mutex<Vec<(String, String)>>,
}

impl MockVerifyService {
    pub fn new() -> Self {
        Self {
            start_results: Mutex::new(Vec::new()),
            check_results: Mutex::new(Vec::new()),
            start_calls: Mutex::new(Vec::new()),
            check_calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful start with the given request id
    pub fn with_start_response(self, request_id: &str) -> Self {
        self.start_results.lock().unwrap().push(Ok(VerificationStart {
            request_id: request_id.to_string(),
            check_url: None,
        }));
        self
    }

    /// Queue a failed start
    pub fn with_start_error(self, message: &str) -> Self {
        self.start_results
            .lock()
            .unwrap()
            .push(Err(ProviderError::new(message)));
        self
    }

    /// Queue a successful check
    pub fn with_check_ok(self) -> Self {
        self.check_results.lock().unwrap().push(Ok(()));
        self
    }

    /// Queue a failed check with a provider error title
    pub fn with_check_error(self, title: &str, message: &str) -> Self {
        self.check_results.lock().unwrap().push(Err(ProviderError {
            title: Some(title.to_string()),
            message: message.to_string(),
        }));
        self
    }

    /// Phone numbers passed to start_verification
    pub fn start_calls(&self) -> Vec<String> {
        self.start_calls.lock().unwrap().clone()
    }

    /// (request_id, code) pairs passed to check_code
    pub fn check_calls(&self) -> Vec<(String, String)> {
        self.check_calls.lock().unwrap().clone()
    }
}

impl Default for MockVerifyService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseVerifyService for MockVerifyService {
    async fn start_verification(
        &self,
        phone_number: &str,
    ) -> Result<VerificationStart, ProviderError> {
        self.start_calls.lock().unwrap().push(phone_number.to_string());

        let mut results = self.start_results.lock().unwrap();
        if results.is_empty() {
            Ok(VerificationStart {
                request_id: "mock-request-id".to_string(),
                check_url: None,
            })
        } else {
            results.remove(0)
        }
    }

    async fn check_code(&self, request_id: &str, code: &str) -> Result<(), ProviderError> {
        self.check_calls
            .lock()
            .unwrap()
            .push((request_id.to_string(), code.to_string()));

        let mut results = self.check_results.lock().unwrap();
        if results.is_empty() {
            Ok(())
        } else {
            results.remove(0)
        }
    }
}

// =============================================================================
// Mock Generative Model
// =============================================================================

pub struct MockGenerativeModel {
    responses: Mutex<Vec<Result<GenerateContentResponse, String>>>,
    prompts: Mutex<Vec<String>>,
}

/// Build a response with a single text candidate
pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
        }],
    }
}

impl MockGenerativeModel {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response whose first candidate carries the given text
    pub fn with_text(self, text: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(text_response(text)));
        self
    }

    /// Queue a response with no candidates at all
    pub fn with_empty_candidates(self) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Ok(GenerateContentResponse { candidates: vec![] }));
        self
    }

    /// Queue a failed call
    pub fn with_error(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    /// Prompts passed to generate, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// How many times generate was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Default for MockGenerativeModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseGenerativeModel for MockGenerativeModel {
    async fn generate(&self, prompt: &str) -> anyhow::Result<GenerateContentResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(text_response(""))
        } else {
            responses.remove(0).map_err(|message| anyhow::anyhow!(message))
        }
    }
}

// =============================================================================
// Mock Session Service
// =============================================================================

pub struct MockSessionService {
    user: Option<AuthUser>,
}

impl MockSessionService {
    /// Every request resolves to the given user
    pub fn authenticated(user_id: &str) -> Self {
        Self {
            user: Some(AuthUser {
                user_id: user_id.to_string(),
            }),
        }
    }

    /// No request carries a session
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl BaseSessionService for MockSessionService {
    async fn current_user(&self, _token: &str) -> Option<AuthUser> {
        self.user.clone()
    }
}
