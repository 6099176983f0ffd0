//! Scripted wizard interactions.
//!
//! A scenario is a JSON document listing user actions in order. Each action
//! is replayed against a [`WizardSession`]; refusals are recorded in the
//! report rather than aborting the run.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docflow_core::party::{PartyField, PartyRole};
use docflow_core::preview::SelectedFile;
use docflow_core::submission::SubmissionCoordinator;
use docflow_core::wizard::WizardSession;
use docflow_shared::AppError;

/// A recorded sequence of user actions.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Actions in the order the user performed them.
    pub steps: Vec<Action>,
}

/// One user action.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Pick a delivery tier by catalog index.
    SelectTier {
        /// Catalog index.
        index: usize,
    },
    /// Edit one party field.
    UpdateParty {
        /// `sender` or `recipient`.
        party: String,
        /// Field name, e.g. `postal_code`.
        field: String,
        /// Raw input.
        value: String,
    },
    /// Pick a file. Bytes come from exactly one of `path` (relative to the
    /// scenario) or inline `content`; giving both or neither is an error.
    Attach {
        /// File name shown to the user.
        file_name: String,
        /// Declared content type.
        content_type: String,
        /// File to read.
        #[serde(default)]
        path: Option<PathBuf>,
        /// Inline content.
        #[serde(default)]
        content: Option<String>,
    },
    /// Remove the attachment.
    ClearAttachment,
    /// Capture → Review.
    Advance,
    /// Review → Capture.
    Retreat,
    /// Submit again from review.
    Confirm,
    /// Back to capture with the submission record cleared.
    Reset,
}

impl Action {
    /// Short name for reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectTier { .. } => "select_tier",
            Self::UpdateParty { .. } => "update_party",
            Self::Attach { .. } => "attach",
            Self::ClearAttachment => "clear_attachment",
            Self::Advance => "advance",
            Self::Retreat => "retreat",
            Self::Confirm => "confirm",
            Self::Reset => "reset",
        }
    }
}

/// What happened when one action was replayed.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Position in the scenario, starting at 1.
    pub index: usize,
    /// Action name.
    pub action: &'static str,
    /// `ok` or the refusal's error code.
    pub outcome: String,
    /// Application error category of a refusal.
    pub category: Option<&'static str>,
    /// Whether the user can fix a refusal by editing input or retrying.
    pub recoverable: bool,
    /// Human-readable detail.
    pub detail: String,
}

impl StepReport {
    fn ok(index: usize, action: &'static str, detail: impl Into<String>) -> Self {
        Self {
            index,
            action,
            outcome: "ok".to_string(),
            category: None,
            recoverable: true,
            detail: detail.into(),
        }
    }

    fn refused(index: usize, action: &'static str, code: &str, err: impl Into<AppError>) -> Self {
        let err = err.into();
        Self {
            index,
            action,
            outcome: code.to_string(),
            category: Some(err.error_code()),
            recoverable: err.is_recoverable(),
            detail: err.to_string(),
        }
    }
}

impl Scenario {
    /// Reads a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid scenario.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&raw)
            .map_err(AppError::from)
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Replays every action against `session`.
    ///
    /// # Errors
    ///
    /// Returns an error only when an attachment file cannot be read.
    pub async fn replay<C: SubmissionCoordinator>(
        &self,
        session: &mut WizardSession<C>,
        base_dir: &Path,
    ) -> anyhow::Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.steps.len());
        for (i, action) in self.steps.iter().enumerate() {
            let report = apply(session, i + 1, action, base_dir).await?;
            if report.outcome == "ok" {
                info!(step = report.index, action = report.action, "{}", report.detail);
            } else {
                warn!(
                    step = report.index,
                    action = report.action,
                    code = %report.outcome,
                    "{}",
                    report.detail
                );
            }
            reports.push(report);
        }
        Ok(reports)
    }
}

async fn apply<C: SubmissionCoordinator>(
    session: &mut WizardSession<C>,
    index: usize,
    action: &Action,
    base_dir: &Path,
) -> anyhow::Result<StepReport> {
    let name = action.name();
    let report = match action {
        Action::SelectTier { index: tier } => match session.select_tier(*tier) {
            Ok(_) => StepReport::ok(index, name, format!("tier {tier} selected")),
            Err(e) => StepReport::refused(index, name, e.error_code(), e),
        },
        Action::UpdateParty {
            party,
            field,
            value,
        } => {
            let parsed = PartyRole::parse(party)
                .and_then(|role| PartyField::parse(field).map(|field| (role, field)));
            match parsed.and_then(|(role, field)| session.update_party_field(role, field, value)) {
                Ok(()) => StepReport::ok(index, name, format!("{party} {field} updated")),
                Err(e) => StepReport::refused(index, name, e.error_code(), e),
            }
        }
        Action::Attach {
            file_name,
            content_type,
            path,
            content,
        } => {
            let bytes = match (path, content) {
                (Some(path), None) => {
                    let full = base_dir.join(path);
                    Bytes::from(
                        tokio::fs::read(&full)
                            .await
                            .with_context(|| format!("reading attachment {}", full.display()))?,
                    )
                }
                (None, Some(content)) => Bytes::from(content.clone()),
                (Some(_), Some(_)) => {
                    anyhow::bail!("step {index}: attach {file_name} sets both path and content")
                }
                (None, None) => {
                    anyhow::bail!("step {index}: attach {file_name} needs a path or content")
                }
            };
            let kind = session.set_attachment(SelectedFile::new(
                file_name.as_str(),
                content_type.as_str(),
                bytes,
            ));
            StepReport::ok(index, name, format!("{file_name} attached as {kind}"))
        }
        Action::ClearAttachment => {
            session.clear_attachment();
            StepReport::ok(index, name, "attachment cleared")
        }
        Action::Advance => match session.advance().await {
            Ok(step) => StepReport::ok(index, name, format!("now at {step}")),
            Err(e) => StepReport::refused(index, name, e.error_code(), e),
        },
        Action::Retreat => match session.retreat() {
            Ok(step) => StepReport::ok(index, name, format!("now at {step}")),
            Err(e) => StepReport::refused(index, name, e.error_code(), e),
        },
        Action::Confirm => match session.confirm_and_submit().await {
            Ok(record) => StepReport::ok(
                index,
                name,
                format!(
                    "attempt {} {}: {}",
                    record.attempt,
                    record.outcome,
                    record.message.unwrap_or_default()
                ),
            ),
            Err(e) => StepReport::refused(index, name, e.error_code(), e),
        },
        Action::Reset => {
            session.reset();
            StepReport::ok(index, name, format!("now at {}", session.step()))
        }
    };
    Ok(report)
}
