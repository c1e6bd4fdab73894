use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::{ValidationError, ViolationKind};

// ============================================================================
// Audit Capability - Lifecycle Bookkeeping Shared by Every Aggregate
// ============================================================================
//
// AuditMetadata is a plain value embedded in each aggregate. Aggregates expose
// it through the Auditable trait and get identity, timestamps, actor
// attribution, the active flag and the optimistic-concurrency version for
// free.
//
// Invariants:
// - identity is assigned at most once, by the persistence collaborator
// - version never decreases and grows by exactly 1 per mark_updated
// - activate/deactivate refresh updated_at but leave version untouched
//
// ============================================================================

/// Opaque aggregate identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of whoever triggers a mutation (user, service account, job)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorId(String);

impl ActorId {
    pub fn new(actor: impl Into<String>) -> Result<Self, ValidationError> {
        let actor = actor.into();
        if actor.trim().is_empty() {
            return Err(ValidationError::required("actor", "Acting identity cannot be blank"));
        }
        Ok(Self(actor))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ActorId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActorId> for String {
    fn from(value: ActorId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct AuditMetadata {
    id: Option<EntityId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: Option<ActorId>,
    updated_by: Option<ActorId>,
    active: bool,
    version: i64,
}

impl AuditMetadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            active: true,
            version: 0,
        }
    }

    /// Attach the identity handed out by the persistence collaborator.
    pub fn assign_id(&mut self, id: EntityId) -> Result<(), ValidationError> {
        if let Some(existing) = self.id {
            return Err(ValidationError::new(
                ViolationKind::InvalidTransition,
                "id",
                format!("Identity already assigned: {}", existing),
            ));
        }
        self.id = Some(id);
        Ok(())
    }

    pub fn mark_created(&mut self, actor: &ActorId) {
        self.created_by = Some(actor.clone());
        self.created_at = Utc::now();
    }

    pub fn mark_updated(&mut self, actor: &ActorId) {
        self.updated_by = Some(actor.clone());
        self.updated_at = Utc::now();
        self.version += 1;
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn created_by(&self) -> Option<&ActorId> {
        self.created_by.as_ref()
    }

    pub fn updated_by(&self) -> Option<&ActorId> {
        self.updated_by.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn version(&self) -> i64 {
        self.version
    }
}

impl Default for AuditMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability contract for aggregates that embed [`AuditMetadata`].
pub trait Auditable {
    fn audit(&self) -> &AuditMetadata;

    fn id(&self) -> Option<EntityId> {
        self.audit().id()
    }

    fn is_new(&self) -> bool {
        self.audit().is_new()
    }

    fn version(&self) -> i64 {
        self.audit().version()
    }

    fn is_active(&self) -> bool {
        self.audit().is_active()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.audit().created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.audit().updated_at()
    }

    fn created_by(&self) -> Option<&ActorId> {
        self.audit().created_by()
    }

    fn updated_by(&self) -> Option<&ActorId> {
        self.audit().updated_by()
    }
}

/// Identity-only `PartialEq`/`Eq`/`Hash` for an [`Auditable`] aggregate.
///
/// Two instances are equal iff their identities are equal, whatever their
/// other fields hold. Unsaved instances (no identity) compare equal to each
/// other, so they must not be used as set or map keys.
#[macro_export]
macro_rules! impl_identity_eq {
    ($aggregate:ty) => {
        impl PartialEq for $aggregate {
            fn eq(&self, other: &Self) -> bool {
                $crate::shared::Auditable::id(self) == $crate::shared::Auditable::id(other)
            }
        }

        impl Eq for $aggregate {}

        impl std::hash::Hash for $aggregate {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::shared::Auditable::id(self), state);
            }
        }
    };
}

// ============================================================================
// Unit Tests
// ============================================================================
