use chrono::{Datelike, Months, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::impl_identity_eq;
use crate::shared::{ActorId, AuditMetadata, Auditable, EntityId, ValidationError};
use super::contact::ContactInfo;
use super::value_objects::{CustomerStatus, CustomerType, IdentificationType};

// ============================================================================
// Customer Aggregate - Business Logic
// ============================================================================
//
// A Customer is never observably invalid:
// - it can only be obtained from CustomerDraft::build (or Customer::create,
//   which goes through the draft), which runs the full rule set once
// - behavioral operations take &self and hand back a new, validated Customer;
//   on error the caller still holds the untouched original
//
// Successful operations stamp the acting identity and bump the version by 1,
// except change_customer_type to the current type (no-op) and
// activate/deactivate (flag only).
//
// ============================================================================

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const IDENTIFICATION_MIN_LEN: usize = 5;
pub const IDENTIFICATION_MAX_LEN: usize = 20;
pub const MIN_AGE_YEARS: u32 = 18;
pub const MAX_AGE_YEARS: u32 = 120;

const NO_SUSPENSION_REASON: &str = "No reason specified";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} ]+$").expect("valid name regex"));

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `date` moved back by whole calendar years (Feb 29 clamps to Feb 28).
fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

fn validate_name(field: &'static str, label: &str, value: Option<&str>) -> Result<(), ValidationError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(ValidationError::required(field, format!("{} is required", label))),
    };

    let length = value.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&length) {
        return Err(ValidationError::invalid_length(
            field,
            format!("{} must be between {} and {} characters", label, NAME_MIN_LEN, NAME_MAX_LEN),
        ));
    }

    if !NAME_RE.is_match(value) {
        return Err(ValidationError::invalid_format(
            field,
            format!("{} may only contain letters and spaces", label),
        ));
    }

    Ok(())
}

fn validate_identification(value: Option<&str>) -> Result<(), ValidationError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(ValidationError::required("identification", "Identification is required")),
    };

    let length = value.chars().count();
    if !(IDENTIFICATION_MIN_LEN..=IDENTIFICATION_MAX_LEN).contains(&length) {
        return Err(ValidationError::invalid_length(
            "identification",
            format!(
                "Identification must be between {} and {} characters",
                IDENTIFICATION_MIN_LEN, IDENTIFICATION_MAX_LEN
            ),
        ));
    }

    Ok(())
}

fn validate_birth_date(birth_date: Option<NaiveDate>) -> Result<(), ValidationError> {
    let Some(birth_date) = birth_date else {
        return Ok(());
    };

    let today = today();
    if birth_date < years_before(today, MAX_AGE_YEARS) {
        return Err(ValidationError::out_of_range(
            "birth_date",
            format!("Birth date cannot be more than {} years ago", MAX_AGE_YEARS),
        ));
    }
    if birth_date > years_before(today, MIN_AGE_YEARS) {
        return Err(ValidationError::out_of_range(
            "birth_date",
            format!("Customer must be at least {} years old", MIN_AGE_YEARS),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct Customer {
    audit: AuditMetadata,
    first_name: String,
    last_name: String,
    identification: String,
    identification_type: IdentificationType,
    customer_type: CustomerType,
    contact: ContactInfo,
    birth_date: Option<NaiveDate>,
    status: CustomerStatus,
    notes: Option<String>,
}

impl Customer {
    pub fn builder() -> CustomerDraft {
        CustomerDraft::new()
    }

    /// Factory for the common case: no birth date, no notes.
    pub fn create(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        identification: impl Into<String>,
        identification_type: IdentificationType,
        customer_type: CustomerType,
        contact: ContactInfo,
    ) -> Result<Self, ValidationError> {
        CustomerDraft::new()
            .first_name(first_name)
            .last_name(last_name)
            .identification(identification)
            .identification_type(identification_type)
            .customer_type(customer_type)
            .contact(contact)
            .build()
    }

    // ------------------------------------------------------------------------
    // Behavioral operations
    // ------------------------------------------------------------------------

    pub fn update_personal_info(
        &self,
        first_name: &str,
        last_name: &str,
        actor: &ActorId,
    ) -> Result<Self, ValidationError> {
        validate_name("first_name", "First name", Some(first_name))?;
        validate_name("last_name", "Last name", Some(last_name))?;

        let mut next = self.clone();
        next.first_name = first_name.to_string();
        next.last_name = last_name.to_string();
        next.audit.mark_updated(actor);
        Ok(next)
    }

    /// The contact validated itself when it was built, so nothing else is
    /// checked here.
    pub fn update_contact(&self, contact: ContactInfo, actor: &ActorId) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        next.contact = contact;
        next.audit.mark_updated(actor);
        Ok(next)
    }

    pub fn change_customer_type(
        &self,
        new_type: CustomerType,
        actor: &ActorId,
    ) -> Result<Self, ValidationError> {
        if self.customer_type == new_type {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        next.customer_type = new_type;
        next.audit.mark_updated(actor);
        Ok(next)
    }

    pub fn suspend(&self, reason: Option<&str>, actor: &ActorId) -> Result<Self, ValidationError> {
        if self.status == CustomerStatus::Suspended {
            return Err(ValidationError::invalid_transition("Customer is already suspended"));
        }

        let mut next = self.clone();
        next.status = CustomerStatus::Suspended;
        next.notes = Some(format!("SUSPENDED: {}", reason.unwrap_or(NO_SUSPENSION_REASON)));
        next.audit.mark_updated(actor);
        Ok(next)
    }

    pub fn reactivate(&self, actor: &ActorId) -> Result<Self, ValidationError> {
        if self.status == CustomerStatus::Active {
            return Err(ValidationError::invalid_transition("Customer is already active"));
        }

        let mut next = self.clone();
        next.status = CustomerStatus::Active;
        next.notes = Some(format!("Customer reactivated at: {}", Utc::now().to_rfc3339()));
        next.audit.mark_updated(actor);
        Ok(next)
    }

    /// Always succeeds and always bumps the version, even when the customer
    /// is already deleted.
    pub fn soft_delete(&self, actor: &ActorId) -> Self {
        let mut next = self.clone();
        next.status = CustomerStatus::Deleted;
        next.audit.deactivate();
        next.audit.mark_updated(actor);
        next
    }

    // ------------------------------------------------------------------------
    // Audit bookkeeping
    // ------------------------------------------------------------------------

    pub fn mark_created(&self, actor: &ActorId) -> Self {
        let mut next = self.clone();
        next.audit.mark_created(actor);
        next
    }

    pub fn activate(&self) -> Self {
        let mut next = self.clone();
        next.audit.activate();
        next
    }

    pub fn deactivate(&self) -> Self {
        let mut next = self.clone();
        next.audit.deactivate();
        next
    }

    /// Attach the identity assigned by the persistence collaborator.
    pub fn with_id(mut self, id: EntityId) -> Result<Self, ValidationError> {
        self.audit.assign_id(id)?;
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_adult(&self) -> bool {
        match self.birth_date {
            None => true,
            Some(birth_date) => birth_date < years_before(today(), MIN_AGE_YEARS),
        }
    }

    /// Naive year difference, not adjusted for whether the birthday has
    /// passed this year.
    pub fn age(&self) -> i32 {
        match self.birth_date {
            None => 0,
            Some(birth_date) => today().year() - birth_date.year(),
        }
    }

    pub fn can_transact(&self) -> bool {
        self.status == CustomerStatus::Active && self.audit.is_active()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn identification_type(&self) -> IdentificationType {
        self.identification_type
    }

    pub fn customer_type(&self) -> CustomerType {
        self.customer_type
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn status(&self) -> CustomerStatus {
        self.status
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl Auditable for Customer {
    fn audit(&self) -> &AuditMetadata {
        &self.audit
    }
}

impl_identity_eq!(Customer);

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.audit.id().map(|id| id.to_string()).unwrap_or_else(|| "<new>".to_string());
        write!(
            f,
            "Customer{{id='{}', name='{}', identification='{}', type='{:?}', status='{:?}'}}",
            id,
            self.full_name(),
            self.identification,
            self.customer_type,
            self.status
        )
    }
}

// ============================================================================
// Customer Draft - collects fields, validates once on build
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub identification: Option<String>,
    pub identification_type: Option<IdentificationType>,
    pub customer_type: Option<CustomerType>,
    pub contact: Option<ContactInfo>,
    pub birth_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CustomerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn identification(mut self, identification: impl Into<String>) -> Self {
        self.identification = Some(identification.into());
        self
    }

    pub fn identification_type(mut self, identification_type: IdentificationType) -> Self {
        self.identification_type = Some(identification_type);
        self
    }

    pub fn customer_type(mut self, customer_type: CustomerType) -> Self {
        self.customer_type = Some(customer_type);
        self
    }

    pub fn contact(mut self, contact: ContactInfo) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Run the whole rule set in its fixed order; first failure wins.
    pub fn build(self) -> Result<Customer, ValidationError> {
        validate_name("first_name", "First name", self.first_name.as_deref())?;
        validate_name("last_name", "Last name", self.last_name.as_deref())?;
        validate_identification(self.identification.as_deref())?;

        let identification_type = self.identification_type.ok_or_else(|| {
            ValidationError::missing_reference("identification_type", "Identification type is required")
        })?;
        let customer_type = self.customer_type.ok_or_else(|| {
            ValidationError::missing_reference("customer_type", "Customer type is required")
        })?;
        let contact = self.contact.ok_or_else(|| {
            ValidationError::missing_reference("contact", "Contact information is required")
        })?;

        validate_birth_date(self.birth_date)?;

        Ok(Customer {
            audit: AuditMetadata::new(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            identification: self.identification.unwrap_or_default(),
            identification_type,
            customer_type,
            contact,
            birth_date: self.birth_date,
            status: CustomerStatus::Active,
            notes: self.notes,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::contact::ContactDraft;
    use crate::shared::ViolationKind;
    use std::collections::HashSet;

    fn actor() -> ActorId {
        ActorId::new("clerk-01").unwrap()
    }

    fn test_contact() -> ContactInfo {
        ContactDraft::new()
            .primary_phone("+595981234567")
            .primary_email("ana@example.com")
            .address("Calle Falsa 123, Asuncion")
            .build()
            .unwrap()
    }

    fn create_test_customer() -> Customer {
        Customer::create(
            "Ana",
            "Gomez",
            "12345678",
            IdentificationType::NationalId,
            CustomerType::Residential,
            test_contact(),
        )
        .unwrap()
    }

    fn full_draft() -> CustomerDraft {
        Customer::builder()
            .first_name("Ana")
            .last_name("Gomez")
            .identification("12345678")
            .identification_type(IdentificationType::NationalId)
            .customer_type(CustomerType::Residential)
            .contact(test_contact())
    }

    fn years_ago(years: u32) -> NaiveDate {
        years_before(today(), years)
    }

    /// Every observable field, for atomicity checks.
    fn snapshot(c: &Customer) -> String {
        format!(
            "{}|{}|{}|{:?}|{:?}|{}|{:?}|{:?}|{:?}|{}|{}|{:?}",
            c.first_name(),
            c.last_name(),
            c.identification(),
            c.identification_type(),
            c.customer_type(),
            c.contact().full_address(),
            c.birth_date(),
            c.status(),
            c.notes(),
            c.version(),
            c.is_active(),
            c.updated_by(),
        )
    }

    #[test]
    fn test_create_customer() {
        let customer = create_test_customer();

        assert_eq!(customer.status(), CustomerStatus::Active);
        assert_eq!(customer.version(), 0);
        assert!(customer.can_transact());
        assert!(customer.is_new());
        assert!(customer.is_active());
        assert_eq!(customer.full_name(), "Ana Gomez");
        assert_eq!(customer.age(), 0);
        assert!(customer.is_adult());
    }

    #[test]
    fn test_accented_names_accepted() {
        let customer = full_draft()
            .first_name("José María")
            .last_name("Núñez")
            .build()
            .unwrap();

        assert_eq!(customer.full_name(), "José María Núñez");
    }

    #[test]
    fn test_first_name_rules_in_order() {
        let blank = full_draft().first_name("  ").build().unwrap_err();
        assert_eq!(blank.kind(), ViolationKind::RequiredField);
        assert_eq!(blank.field(), Some("first_name"));

        let short = full_draft().first_name("A").build().unwrap_err();
        assert_eq!(short.kind(), ViolationKind::InvalidLength);

        let long = full_draft().first_name("A".repeat(51)).build().unwrap_err();
        assert_eq!(long.kind(), ViolationKind::InvalidLength);

        let digits = full_draft().first_name("Ana2").build().unwrap_err();
        assert_eq!(digits.kind(), ViolationKind::InvalidFormat);
        assert_eq!(digits.field(), Some("first_name"));
    }

    #[test]
    fn test_control_whitespace_in_names_rejected() {
        let err = full_draft().first_name("Ana\nMaria").build().unwrap_err();
        assert_eq!(err.kind(), ViolationKind::InvalidFormat);
        assert_eq!(err.field(), Some("first_name"));

        let err = full_draft().last_name("Go\tmez").build().unwrap_err();
        assert_eq!(err.kind(), ViolationKind::InvalidFormat);
        assert_eq!(err.field(), Some("last_name"));

        let customer = create_test_customer();
        let err = customer
            .update_personal_info("Ana", "Go\rmez", &actor())
            .unwrap_err();
        assert_eq!(err.field(), Some("last_name"));
    }

    #[test]
    fn test_name_length_bounds_inclusive() {
        assert!(full_draft().first_name("Al").build().is_ok());
        assert!(full_draft().last_name("B".repeat(50)).build().is_ok());
    }

    #[test]
    fn test_first_name_checked_before_last_name() {
        let err = full_draft()
            .first_name("X")
            .last_name("")
            .build()
            .unwrap_err();

        assert_eq!(err.field(), Some("first_name"));
    }

    #[test]
    fn test_last_name_required() {
        let err = CustomerDraft {
            last_name: None,
            ..full_draft()
        }
        .build()
        .unwrap_err();

        assert_eq!(err.field(), Some("last_name"));
        assert_eq!(err.kind(), ViolationKind::RequiredField);
    }

    #[test]
    fn test_identification_rules() {
        let missing = CustomerDraft {
            identification: None,
            ..full_draft()
        }
        .build()
        .unwrap_err();
        assert_eq!(missing.field(), Some("identification"));
        assert_eq!(missing.kind(), ViolationKind::RequiredField);

        let short = full_draft().identification("1234").build().unwrap_err();
        assert_eq!(short.kind(), ViolationKind::InvalidLength);

        let long = full_draft().identification("1".repeat(21)).build().unwrap_err();
        assert_eq!(long.kind(), ViolationKind::InvalidLength);

        assert!(full_draft().identification("12345").build().is_ok());
        assert!(full_draft().identification("1".repeat(20)).build().is_ok());
    }

    #[test]
    fn test_missing_references_in_order() {
        let no_id_type = CustomerDraft {
            identification_type: None,
            customer_type: None,
            contact: None,
            ..full_draft()
        }
        .build()
        .unwrap_err();
        assert_eq!(no_id_type.field(), Some("identification_type"));
        assert_eq!(no_id_type.kind(), ViolationKind::MissingReference);

        let no_customer_type = CustomerDraft {
            customer_type: None,
            contact: None,
            ..full_draft()
        }
        .build()
        .unwrap_err();
        assert_eq!(no_customer_type.field(), Some("customer_type"));

        let no_contact = CustomerDraft {
            contact: None,
            ..full_draft()
        }
        .build()
        .unwrap_err();
        assert_eq!(no_contact.field(), Some("contact"));
        assert_eq!(no_contact.code(), "MISSING_REFERENCE");
    }

    #[test]
    fn test_minor_rejected() {
        let err = full_draft().birth_date(years_ago(10)).build().unwrap_err();

        assert_eq!(err.field(), Some("birth_date"));
        assert_eq!(err.kind(), ViolationKind::OutOfRange);
    }

    #[test]
    fn test_implausibly_old_rejected() {
        let err = full_draft().birth_date(years_ago(130)).build().unwrap_err();

        assert_eq!(err.field(), Some("birth_date"));
        assert_eq!(err.kind(), ViolationKind::OutOfRange);
    }

    #[test]
    fn test_thirty_year_old_accepted() {
        let customer = full_draft().birth_date(years_ago(30)).build().unwrap();

        assert!(customer.is_adult());
        assert_eq!(customer.age(), 30);
    }

    #[test]
    fn test_birth_date_boundaries() {
        // Exactly 18 and exactly 120 years ago are both inside the range.
        assert!(full_draft().birth_date(years_ago(18)).build().is_ok());
        assert!(full_draft().birth_date(years_ago(120)).build().is_ok());

        let one_day_short = years_ago(18).succ_opt().unwrap();
        assert!(full_draft().birth_date(one_day_short).build().is_err());

        let one_day_over = years_ago(120).pred_opt().unwrap();
        assert!(full_draft().birth_date(one_day_over).build().is_err());
    }

    #[test]
    fn test_exactly_eighteen_is_valid_but_not_adult() {
        let customer = full_draft().birth_date(years_ago(18)).build().unwrap();

        assert!(!customer.is_adult());
        assert_eq!(customer.age(), 18);
    }

    #[test]
    fn test_builder_keeps_notes() {
        let customer = full_draft().notes("VIP account").build().unwrap();
        assert_eq!(customer.notes(), Some("VIP account"));
    }

    #[test]
    fn test_update_personal_info() {
        let customer = create_test_customer();
        let updated = customer.update_personal_info("Ana Maria", "Gomez Ruiz", &actor()).unwrap();

        assert_eq!(updated.full_name(), "Ana Maria Gomez Ruiz");
        assert_eq!(updated.version(), 1);
        assert_eq!(updated.updated_by().map(ActorId::as_str), Some("clerk-01"));
        assert_eq!(customer.first_name(), "Ana");
    }

    #[test]
    fn test_update_personal_info_failure_leaves_customer_untouched() {
        let customer = create_test_customer();
        let before = snapshot(&customer);

        let err = customer.update_personal_info("Ana", "G", &actor()).unwrap_err();

        assert_eq!(err.field(), Some("last_name"));
        assert_eq!(snapshot(&customer), before);
    }

    #[test]
    fn test_update_contact() {
        let customer = create_test_customer();
        let new_contact = ContactDraft::new()
            .primary_phone("0981000111")
            .primary_email("ana.gomez@example.com")
            .address("Av. Espana 500")
            .build()
            .unwrap();

        let updated = customer.update_contact(new_contact.clone(), &actor()).unwrap();

        assert_eq!(updated.contact(), &new_contact);
        assert_eq!(updated.version(), 1);
    }

    #[test]
    fn test_change_customer_type() {
        let customer = create_test_customer();
        let changed = customer.change_customer_type(CustomerType::Commercial, &actor()).unwrap();

        assert_eq!(changed.customer_type(), CustomerType::Commercial);
        assert_eq!(changed.version(), 1);
    }

    #[test]
    fn test_change_to_same_type_is_noop() {
        let customer = create_test_customer();
        let same = customer.change_customer_type(CustomerType::Residential, &actor()).unwrap();

        assert_eq!(same.version(), 0);
        assert!(same.updated_by().is_none());
        assert_eq!(snapshot(&same), snapshot(&customer));
    }

    #[test]
    fn test_suspend_with_reason() {
        let customer = create_test_customer();
        let suspended = customer.suspend(Some("Payment overdue"), &actor()).unwrap();

        assert_eq!(suspended.status(), CustomerStatus::Suspended);
        assert_eq!(suspended.notes(), Some("SUSPENDED: Payment overdue"));
        assert_eq!(suspended.version(), 1);
        assert!(!suspended.can_transact());
    }

    #[test]
    fn test_suspend_without_reason_uses_placeholder() {
        let suspended = create_test_customer().suspend(None, &actor()).unwrap();
        assert_eq!(suspended.notes(), Some("SUSPENDED: No reason specified"));
    }

    #[test]
    fn test_cannot_suspend_suspended_customer() {
        let suspended = create_test_customer().suspend(Some("first"), &actor()).unwrap();
        let before = snapshot(&suspended);

        let err = suspended.suspend(Some("second"), &actor()).unwrap_err();

        assert_eq!(err.kind(), ViolationKind::InvalidTransition);
        assert_eq!(snapshot(&suspended), before);
        assert_eq!(suspended.notes(), Some("SUSPENDED: first"));
        assert_eq!(suspended.version(), 1);
    }

    #[test]
    fn test_reactivate_suspended_customer() {
        let suspended = create_test_customer().suspend(None, &actor()).unwrap();
        let reactivated = suspended.reactivate(&actor()).unwrap();

        assert_eq!(reactivated.status(), CustomerStatus::Active);
        assert!(reactivated.notes().unwrap().starts_with("Customer reactivated at: "));
        assert_eq!(reactivated.version(), 2);
        assert!(reactivated.can_transact());
    }

    #[test]
    fn test_cannot_reactivate_active_customer() {
        let customer = create_test_customer();
        let before = snapshot(&customer);

        let err = customer.reactivate(&actor()).unwrap_err();

        assert_eq!(err.code(), "INVALID_STATE_TRANSITION");
        assert_eq!(snapshot(&customer), before);
    }

    #[test]
    fn test_soft_delete_bumps_version_every_call() {
        let customer = create_test_customer();

        let deleted = customer.soft_delete(&actor());
        assert_eq!(deleted.status(), CustomerStatus::Deleted);
        assert!(!deleted.is_active());
        assert!(!deleted.can_transact());
        assert_eq!(deleted.version(), 1);

        let deleted_again = deleted.soft_delete(&actor());
        assert_eq!(deleted_again.status(), CustomerStatus::Deleted);
        assert_eq!(deleted_again.version(), 2);
    }

    #[test]
    fn test_activate_deactivate_do_not_bump_version() {
        let customer = create_test_customer();

        let inactive = customer.deactivate();
        assert!(!inactive.is_active());
        assert!(!inactive.can_transact());
        assert_eq!(inactive.version(), 0);

        let active = inactive.activate();
        assert!(active.can_transact());
        assert_eq!(active.version(), 0);
    }

    #[test]
    fn test_version_increments_by_one_per_operation() {
        let a = actor();
        let c0 = create_test_customer();
        let c1 = c0.update_personal_info("Ana", "Perez", &a).unwrap();
        let c2 = c1.update_contact(test_contact(), &a).unwrap();
        let c3 = c2.suspend(None, &a).unwrap();
        let c4 = c3.reactivate(&a).unwrap();
        let c5 = c4.soft_delete(&a);

        let versions: Vec<i64> = [&c0, &c1, &c2, &c3, &c4, &c5].iter().map(|c| c.version()).collect();
        assert_eq!(versions, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_mark_created_records_actor() {
        let customer = create_test_customer().mark_created(&actor());

        assert_eq!(customer.created_by().map(ActorId::as_str), Some("clerk-01"));
        assert_eq!(customer.version(), 0);
    }

    #[test]
    fn test_identity_equality() {
        let id = EntityId::new();
        let saved = create_test_customer().with_id(id).unwrap();
        let renamed = saved.update_personal_info("Beatriz", "Lopez", &actor()).unwrap();
        let other = create_test_customer().with_id(EntityId::new()).unwrap();

        assert_eq!(saved, renamed);
        assert_ne!(saved, other);

        let set: HashSet<Customer> = [saved, renamed, other].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_identity_cannot_be_reassigned() {
        let saved = create_test_customer().with_id(EntityId::new()).unwrap();
        let err = saved.with_id(EntityId::new()).unwrap_err();

        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn test_display() {
        let text = create_test_customer().to_string();
        assert!(text.contains("Ana Gomez"));
        assert!(text.contains("<new>"));
    }
}
