use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A structured audit event for clinical record writes.
///
/// Emitted through `tracing` so it lands wherever the process ships its logs.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: Uuid,
        patient_id: Uuid,
        clinic_id: Uuid,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id,
            patient_id,
            clinic_id,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.patient_id = %self.patient_id,
            audit.clinic_id = %self.clinic_id,
            audit.details = %details,
            "audit event"
        );
    }
}
