//! In-memory adapters for exercising services without the network.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    allergy::{
        entities::{Allergy, AllergyChanges, NewAllergy},
        ports::AllergyRepository,
        value_objects::AllergyOrder,
    },
    analysis::ports::LLMClient,
    authentication::{
        entities::{AuthSession, User},
        ports::AuthProvider,
        value_objects::{Credentials, Identity},
    },
    common::{entities::app_errors::CoreError, services::Service},
    ocr::ports::TextExtractor,
    scan_history::{
        entities::{NewScanRecord, ScanRecord},
        ports::ScanHistoryRepository,
    },
};

pub const VALID_TOKEN: &str = "valid-token";
pub const VALID_PASSWORD: &str = "correct-horse";

pub type TestService = Service<
    StubAuthProvider,
    InMemoryAllergyRepository,
    InMemoryScanHistoryRepository,
    StubTextExtractor,
    RecordingLLMClient,
>;

pub fn test_user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "user@example.com".to_string(),
    }
}

pub fn test_identity(user: &User) -> Identity {
    Identity::new(user.clone(), VALID_TOKEN.to_string())
}

pub fn test_service(user: User) -> TestService {
    TestHarness::new(user).service()
}

/// Shared state behind the fakes, so a test can seed data and inspect calls
/// after handing a service out.
pub struct TestHarness {
    pub user: User,
    allergies: Arc<Mutex<Vec<Allergy>>>,
    scans: Arc<Mutex<Vec<ScanRecord>>>,
    ocr_text: Arc<Mutex<Result<String, CoreError>>>,
    ocr_calls: Arc<Mutex<usize>>,
    llm_reply: Arc<Mutex<Result<String, CoreError>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl TestHarness {
    pub fn new(user: User) -> Self {
        Self {
            user,
            allergies: Arc::default(),
            scans: Arc::default(),
            ocr_text: Arc::new(Mutex::new(Ok(String::new()))),
            ocr_calls: Arc::default(),
            llm_reply: Arc::new(Mutex::new(Ok(String::new()))),
            prompts: Arc::default(),
        }
    }

    pub fn service(&self) -> TestService {
        Service::new(
            StubAuthProvider {
                user: self.user.clone(),
            },
            InMemoryAllergyRepository {
                rows: self.allergies.clone(),
            },
            InMemoryScanHistoryRepository {
                rows: self.scans.clone(),
            },
            StubTextExtractor {
                text: self.ocr_text.clone(),
                calls: self.ocr_calls.clone(),
            },
            RecordingLLMClient {
                reply: self.llm_reply.clone(),
                prompts: self.prompts.clone(),
            },
        )
    }

    pub fn seed_scan(&self, record: ScanRecord) {
        self.scans.lock().unwrap().push(record);
    }

    pub fn set_ocr_text(&self, text: &str) {
        *self.ocr_text.lock().unwrap() = Ok(text.to_string());
    }

    pub fn fail_ocr(&self) {
        *self.ocr_text.lock().unwrap() = Err(CoreError::OcrFailed);
    }

    pub fn ocr_calls(&self) -> usize {
        *self.ocr_calls.lock().unwrap()
    }

    pub fn set_llm_reply(&self, reply: &str) {
        *self.llm_reply.lock().unwrap() = Ok(reply.to_string());
    }

    pub fn fail_llm(&self) {
        *self.llm_reply.lock().unwrap() =
            Err(CoreError::InternalServerError);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

pub struct StubAuthProvider {
    user: User,
}

impl AuthProvider for StubAuthProvider {
    async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        if credentials.email != self.user.email || credentials.password != VALID_PASSWORD {
            return Err(CoreError::AuthProvider(
                "Invalid login credentials".to_string(),
            ));
        }

        Ok(AuthSession {
            user: self.user.clone(),
            access_token: Some(VALID_TOKEN.to_string()),
            refresh_token: Some("refresh".to_string()),
            expires_in: Some(3600),
        })
    }

    async fn sign_up(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        if credentials.email == self.user.email {
            return Err(CoreError::AuthProvider(
                "User already registered".to_string(),
            ));
        }

        Ok(AuthSession {
            user: User {
                id: Uuid::new_v4(),
                email: credentials.email,
            },
            access_token: None,
            refresh_token: None,
            expires_in: None,
        })
    }

    async fn sign_out(&self, _access_token: String) -> Result<(), CoreError> {
        Ok(())
    }

    async fn get_user(&self, access_token: String) -> Result<User, CoreError> {
        if access_token == VALID_TOKEN {
            Ok(self.user.clone())
        } else {
            Err(CoreError::AuthProvider("invalid JWT".to_string()))
        }
    }
}

pub struct InMemoryAllergyRepository {
    rows: Arc<Mutex<Vec<Allergy>>>,
}

impl AllergyRepository for InMemoryAllergyRepository {
    async fn fetch_by_user(
        &self,
        identity: Identity,
        order: AllergyOrder,
    ) -> Result<Vec<Allergy>, CoreError> {
        let mut allergies: Vec<Allergy> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == identity.id())
            .cloned()
            .collect();

        match order {
            AllergyOrder::Name => allergies.sort_by(|a, b| a.name.cmp(&b.name)),
            AllergyOrder::Newest => allergies.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(allergies)
    }

    async fn create_allergy(
        &self,
        _identity: Identity,
        allergy: NewAllergy,
    ) -> Result<Allergy, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let created_at = next_timestamp(rows.iter().map(|a| a.created_at).max());

        let created = Allergy {
            id: Uuid::new_v4(),
            user_id: allergy.user_id,
            name: allergy.name,
            severity: allergy.severity,
            notes: allergy.notes,
            created_at,
        };
        rows.push(created.clone());

        Ok(created)
    }

    async fn update_allergy(
        &self,
        identity: Identity,
        allergy_id: Uuid,
        changes: AllergyChanges,
    ) -> Result<Option<Allergy>, CoreError> {
        let mut rows = self.rows.lock().unwrap();

        Ok(rows
            .iter_mut()
            .find(|a| a.id == allergy_id && a.user_id == identity.id())
            .map(|a| {
                a.name = changes.name;
                a.severity = changes.severity;
                a.notes = changes.notes;
                a.clone()
            }))
    }

    async fn delete_allergy(&self, identity: Identity, allergy_id: Uuid) -> Result<bool, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| !(a.id == allergy_id && a.user_id == identity.id()));

        Ok(rows.len() != before)
    }
}

pub struct InMemoryScanHistoryRepository {
    rows: Arc<Mutex<Vec<ScanRecord>>>,
}

impl ScanHistoryRepository for InMemoryScanHistoryRepository {
    async fn fetch_by_user(
        &self,
        identity: Identity,
        limit: Option<u32>,
    ) -> Result<Vec<ScanRecord>, CoreError> {
        let mut scans: Vec<ScanRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == identity.id())
            .cloned()
            .collect();

        scans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            scans.truncate(limit as usize);
        }

        Ok(scans)
    }

    async fn get_by_id(
        &self,
        identity: Identity,
        scan_id: Uuid,
    ) -> Result<Option<ScanRecord>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == scan_id && s.user_id == identity.id())
            .cloned())
    }

    async fn create_record(
        &self,
        _identity: Identity,
        record: NewScanRecord,
    ) -> Result<ScanRecord, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let created_at = next_timestamp(rows.iter().map(|s| s.created_at).max());

        let created = ScanRecord {
            id: Uuid::new_v4(),
            user_id: record.user_id,
            product_name: record.product_name,
            ingredients: record.ingredients,
            matched_allergies: record.matched_allergies,
            has_matches: record.has_matches,
            analysis: record.analysis,
            created_at,
        };
        rows.push(created.clone());

        Ok(created)
    }
}

pub struct StubTextExtractor {
    text: Arc<Mutex<Result<String, CoreError>>>,
    calls: Arc<Mutex<usize>>,
}

impl TextExtractor for StubTextExtractor {
    async fn extract_text(&self, _image: Bytes) -> Result<String, CoreError> {
        *self.calls.lock().unwrap() += 1;
        self.text.lock().unwrap().clone()
    }
}

pub struct RecordingLLMClient {
    reply: Arc<Mutex<Result<String, CoreError>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl LLMClient for RecordingLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        self.prompts.lock().unwrap().push(prompt);
        self.reply.lock().unwrap().clone()
    }
}

/// Strictly increasing timestamps so ordering assertions are deterministic.
fn next_timestamp(latest: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match latest {
        Some(latest) if latest >= now => latest + Duration::microseconds(1),
        _ => now,
    }
}
