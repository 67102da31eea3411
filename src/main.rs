//! StudyBuddy client core
//!
//! Smoke binary: wires configuration, logging, and services, then walks the
//! public read surface of the backend.

use std::sync::Arc;

use tracing::{info, warn};

use StudyBuddy::{
    config::Settings,
    orchestrator::{CampusEventsOrchestrator, SessionListOrchestrator},
    services::ServiceFactory,
    state::ViewState,
    utils::logging,
    InMemoryTokenStore, TokenStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().unwrap_or_default();
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting StudyBuddy client core ({})", StudyBuddy::info());

    // Initialize services
    let tokens = Arc::new(InMemoryTokenStore::new());
    if let Ok(token) = std::env::var("STUDYBUDDY_TOKEN") {
        tokens.set_token(&token);
    }
    let services = ServiceFactory::new(settings.clone(), tokens)?;

    // First page of the session listing
    let listing = SessionListOrchestrator::new(services.sessions.clone(), settings.api.page_size);
    listing.fetch_page(1).await;

    match listing.state() {
        ViewState::Loaded(page) => {
            info!(
                page = page.current_page,
                total_pages = page.total_pages,
                "Fetched session listing"
            );
            for session in &page.items {
                info!(
                    session_id = %session.id,
                    title = %session.title,
                    date = %session.date,
                    participants = session.participant_count(),
                    "Session"
                );
            }
        }
        ViewState::Empty => info!("No sessions found"),
        ViewState::Error(message) => warn!(error = %message, "Session listing failed"),
        _ => {}
    }

    // Campus event feed
    if settings.features.campus_events {
        let events = CampusEventsOrchestrator::new(services.campus_events.clone());
        events.load().await;

        match events.state() {
            ViewState::Loaded(items) => info!(count = items.len(), "Fetched campus events"),
            ViewState::Empty => info!("No campus events found"),
            ViewState::Error(message) => warn!(error = %message, "Campus event fetch failed"),
            _ => {}
        }
    }

    info!("StudyBuddy client core finished");

    Ok(())
}
