//! One user's pass through the wizard.
//!
//! The session owns every piece of wizard state: the two party records, the
//! delivery selection, the file picker and the step controller. Everything
//! the controller needs is lent to it per call as [`WizardInputs`].

use docflow_shared::AppConfig;
use docflow_shared::types::SessionId;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogError};
use crate::delivery::{DeliveryError, DeliverySelection};
use crate::party::{PartyError, PartyField, PartyRecord, PartyRole, PartyUpdate};
use crate::preview::{FilePreviewManager, MediaKind, PreviewStore, PreviewView, SelectedFile};
use crate::submission::{SimulatedGateway, SubmissionCoordinator, SubmissionRecord};
use crate::summary::ReviewSummary;
use crate::wizard::controller::WizardController;
use crate::wizard::error::WizardError;
use crate::wizard::types::{UnmetPrecondition, WizardInputs, WizardStep};
use crate::wizard::validation::check_readiness;

/// Wizard state for a single user.
#[derive(Debug)]
pub struct WizardSession<C> {
    id: SessionId,
    catalog: Catalog,
    sender: PartyRecord,
    recipient: PartyRecord,
    delivery: DeliverySelection,
    files: FilePreviewManager,
    controller: WizardController<C>,
}

/// Serializable view of a session, for display and logging.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// Session id.
    pub id: SessionId,
    /// Current step.
    pub step: WizardStep,
    /// What the user entered.
    pub summary: ReviewSummary,
    /// Live preview, if the attachment has one.
    pub preview: Option<PreviewView>,
    /// Preconditions currently unmet.
    pub unmet: Vec<UnmetPrecondition>,
    /// Latest submission attempt.
    pub last_submission: Option<SubmissionRecord>,
}

impl WizardSession<SimulatedGateway> {
    /// Builds a session from application configuration, using the simulated gateway.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the configured catalog is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::from_settings(&config.catalog)?;
        Ok(Self::new(
            catalog,
            SimulatedGateway::from_settings(&config.gateway),
        ))
    }
}

impl<C: SubmissionCoordinator> WizardSession<C> {
    /// Creates a session with its own preview store.
    #[must_use]
    pub fn new(catalog: Catalog, coordinator: C) -> Self {
        Self::with_store(catalog, coordinator, PreviewStore::new())
    }

    /// Creates a session that registers previews in `store`.
    #[must_use]
    pub fn with_store(catalog: Catalog, coordinator: C, store: PreviewStore) -> Self {
        let id = SessionId::new();
        debug!(session_id = %id, "wizard session created");
        Self {
            id,
            sender: PartyRecord::new(&catalog),
            recipient: PartyRecord::new(&catalog),
            delivery: DeliverySelection::new(),
            files: FilePreviewManager::new(store),
            controller: WizardController::new(coordinator),
            catalog,
        }
    }

    /// Session id.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The catalog this session selects from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.controller.step()
    }

    /// Record for `role`.
    #[must_use]
    pub fn party(&self, role: PartyRole) -> &PartyRecord {
        match role {
            PartyRole::Sender => &self.sender,
            PartyRole::Recipient => &self.recipient,
        }
    }

    /// Delivery selection.
    #[must_use]
    pub fn delivery(&self) -> &DeliverySelection {
        &self.delivery
    }

    /// File picker state.
    #[must_use]
    pub fn files(&self) -> &FilePreviewManager {
        &self.files
    }

    /// Step controller.
    #[must_use]
    pub fn controller(&self) -> &WizardController<C> {
        &self.controller
    }

    /// Replaces the record for `role` with one field updated.
    pub fn update_party(&mut self, role: PartyRole, update: PartyUpdate) {
        let record = match role {
            PartyRole::Sender => &mut self.sender,
            PartyRole::Recipient => &mut self.recipient,
        };
        *record = record.update(update);
    }

    /// Updates one field from raw input.
    ///
    /// # Errors
    ///
    /// Returns `PartyError` if the value is not in the catalog for a
    /// restricted field. The record is left unchanged.
    pub fn update_party_field(
        &mut self,
        role: PartyRole,
        field: PartyField,
        value: &str,
    ) -> Result<(), PartyError> {
        let update = PartyUpdate::resolve(field, value, &self.catalog)?;
        self.update_party(role, update);
        Ok(())
    }

    /// Selects the delivery tier at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::UnknownTier` for an index outside the catalog.
    pub fn select_tier(&mut self, index: usize) -> Result<bool, DeliveryError> {
        self.delivery.select(index, &self.catalog)
    }

    /// Attaches a document, replacing any previous one.
    pub fn set_attachment(&mut self, file: SelectedFile) -> MediaKind {
        self.files.set_attachment(file)
    }

    /// Removes the attachment.
    pub fn clear_attachment(&mut self) {
        self.files.clear();
    }

    /// Applies a picker result; `None` clears.
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> Option<MediaKind> {
        self.files.select(file)
    }

    /// Preconditions currently unmet.
    #[must_use]
    pub fn unmet(&self) -> Vec<UnmetPrecondition> {
        check_readiness(&self.inputs())
    }

    /// Consolidated summary of the current data.
    #[must_use]
    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary::build(&self.inputs())
    }

    /// See [`WizardController::advance`].
    ///
    /// # Errors
    ///
    /// Propagates the controller's `WizardError`.
    pub async fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let inputs = WizardInputs {
            catalog: &self.catalog,
            sender: &self.sender,
            recipient: &self.recipient,
            delivery: &self.delivery,
            attachment: self.files.attachment(),
        };
        let step = self.controller.advance(&inputs).await?;
        info!(session_id = %self.id, "session reached review");
        Ok(step)
    }

    /// See [`WizardController::retreat`].
    ///
    /// # Errors
    ///
    /// Propagates the controller's `WizardError`.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        self.controller.retreat()
    }

    /// See [`WizardController::confirm_and_submit`].
    ///
    /// # Errors
    ///
    /// Propagates the controller's `WizardError`.
    pub async fn confirm_and_submit(&mut self) -> Result<SubmissionRecord, WizardError> {
        let inputs = WizardInputs {
            catalog: &self.catalog,
            sender: &self.sender,
            recipient: &self.recipient,
            delivery: &self.delivery,
            attachment: self.files.attachment(),
        };
        self.controller.confirm_and_submit(&inputs).await
    }

    /// Starts a new pass over the same data. See [`WizardController::reset`].
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Serializable view of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            step: self.step(),
            summary: self.summary(),
            preview: self.files.current_preview().map(|p| p.view()),
            unmet: self.unmet(),
            last_submission: self.controller.last_submission().cloned(),
        }
    }

    fn inputs(&self) -> WizardInputs<'_> {
        WizardInputs {
            catalog: &self.catalog,
            sender: &self.sender,
            recipient: &self.recipient,
            delivery: &self.delivery,
            attachment: self.files.attachment(),
        }
    }
}
