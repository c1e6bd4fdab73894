use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_service::config::ServiceConfig;
use customer_service::domain::customer::{
    ContactDraft, CustomerCommand, CustomerCommandHandler, CustomerRepository, CustomerType,
    CustomerView, IdentificationType, RegisterCustomer,
};
use customer_service::shared::Auditable;
use customer_service::store::InMemoryCustomerRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional TOML file, e.g. CUSTOMER_SERVICE_CONFIG=service.toml
    let config_path = std::env::var("CUSTOMER_SERVICE_CONFIG").ok().map(PathBuf::from);
    let config = ServiceConfig::load(config_path.as_deref())?;

    // RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
        )
        .init();

    let actor = config.actor_id()?;
    tracing::info!(actor = %actor, "🚀 Starting customer service demo");

    // === 1. Wire repository and command handler ===
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let handler = CustomerCommandHandler::new(repository.clone());

    // === 2. Register a customer ===
    let customer = handler
        .register(
            RegisterCustomer {
                first_name: Some("Ana".to_string()),
                last_name: Some("Gomez".to_string()),
                identification: Some("4567891".to_string()),
                identification_type: Some(IdentificationType::NationalId),
                customer_type: Some(CustomerType::Residential),
                contact: ContactDraft::new()
                    .primary_phone("+595981234567")
                    .primary_email("ana.gomez@example.com")
                    .address("Av. Mariscal Lopez 1234")
                    .city("Asuncion")
                    .country("Paraguay"),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
                notes: None,
            },
            &actor,
        )
        .await?;

    let customer_id = customer
        .id()
        .ok_or_else(|| anyhow::anyhow!("Repository did not assign an identity"))?;

    // === 3. A duplicate registration is rejected before construction ===
    let duplicate = handler
        .register(
            RegisterCustomer {
                first_name: Some("Ana".to_string()),
                last_name: Some("Duplicada".to_string()),
                identification: Some("4567891".to_string()),
                identification_type: Some(IdentificationType::NationalId),
                customer_type: Some(CustomerType::Residential),
                contact: ContactDraft::new()
                    .primary_phone("0981000000")
                    .primary_email("otra@example.com")
                    .address("Calle 1"),
                ..Default::default()
            },
            &actor,
        )
        .await;
    match duplicate {
        Ok(stored) => anyhow::bail!("Duplicate identification was registered as {}", stored),
        Err(e) => tracing::info!(error = %e, "Duplicate registration rejected as expected"),
    }

    // === 4. Walk the lifecycle ===
    let lifecycle = [
        CustomerCommand::Suspend { reason: Some("Payment overdue".to_string()) },
        CustomerCommand::Reactivate,
        CustomerCommand::ChangeCustomerType { new_type: Some(CustomerType::Commercial) },
        CustomerCommand::UpdateContact {
            contact: Some(
                customer
                    .contact()
                    .to_draft()
                    .secondary_email("ana.work@example.com"),
            ),
        },
    ];

    for command in lifecycle {
        handler.handle(customer_id, command, &actor).await?;
    }

    let current = handler.find(customer_id).await?;
    tracing::info!(
        view = %serde_json::to_string_pretty(&CustomerView::from(&current))?,
        "📋 Customer after lifecycle"
    );

    // === 5. Soft delete and report ===
    handler.handle(customer_id, CustomerCommand::SoftDelete, &actor).await?;

    let stats = repository.statistics().await?;
    tracing::info!(
        total = stats.total,
        statistics = %serde_json::to_string(&stats)?,
        "📊 Repository statistics"
    );

    tracing::info!("🎉 Demo complete!");

    Ok(())
}
