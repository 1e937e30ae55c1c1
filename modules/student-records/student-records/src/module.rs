//! Wiring for the Student Records module.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use student_records_sdk::StudentRecordsApi;
use tracing::{debug, info};

use crate::config::StudentRecordsConfig;
use crate::domain::id_gen::UuidIdGenerator;
use crate::domain::service::StudentRecordsService;
use crate::infra::InMemoryStudentsRepository;
use crate::local_client::StudentRecordsLocalClient;

/// Student Records module.
///
/// Owns the record store and service, and hands out the in-process client
/// and the REST router.
#[derive(Clone)]
pub struct StudentRecordsModule {
    service: Arc<StudentRecordsService>,
    client: Arc<dyn StudentRecordsApi>,
}

impl StudentRecordsModule {
    /// Builds the store (seeding it when configured) and the service.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or seeding fails.
    pub fn init(cfg: &StudentRecordsConfig) -> anyhow::Result<Self> {
        info!("Initializing student_records module");
        cfg.validate()
            .map_err(anyhow::Error::msg)
            .context("invalid student_records config")?;
        debug!(
            default_page_size = cfg.default_page_size,
            max_page_size = cfg.max_page_size,
            seed = cfg.seed,
            "Loaded student_records config"
        );

        let repo = Arc::new(InMemoryStudentsRepository::new());
        if cfg.seed {
            repo.seed().context("failed to seed student records")?;
        }

        let service = Arc::new(StudentRecordsService::new(
            repo,
            Arc::new(UuidIdGenerator),
            cfg.to_service_config(),
        ));
        let client: Arc<dyn StudentRecordsApi> =
            Arc::new(StudentRecordsLocalClient::new(service.clone()));

        info!(students = service.count(), "Student records module initialized");
        Ok(Self { service, client })
    }

    #[must_use]
    pub fn service(&self) -> Arc<StudentRecordsService> {
        self.service.clone()
    }

    /// In-process client for other components.
    #[must_use]
    pub fn api(&self) -> Arc<dyn StudentRecordsApi> {
        self.client.clone()
    }

    /// REST routes for this module.
    #[must_use]
    pub fn router(&self) -> Router {
        crate::api::rest::router(self.service.clone())
    }
}
