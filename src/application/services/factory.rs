// src/application/services/factory.rs
use std::sync::Arc;

use crate::app_state::AppState;
use crate::application::services::bridge_service::BridgeService;
use crate::application::BridgeServiceImpl;
use crate::domain::services::broadcast::FrontendBroadcast;
use crate::domain::services::transport::NativeTransport;
use crate::infrastructure::broadcast::ChannelBroadcast;
use crate::infrastructure::transport::process::ProcessTransport;

/// The process-wide broadcast bus; surfaces subscribe on this instance.
pub fn create_frontend_broadcast() -> Arc<ChannelBroadcast> {
    let app_state = AppState::read_global();
    app_state.context.notifier.clone()
}

/// Creates a transport addressing the host configured in the global state.
pub fn create_native_transport() -> Arc<dyn NativeTransport> {
    let app_state = AppState::read_global();
    Arc::new(ProcessTransport::new(
        &app_state.settings.app_name,
        app_state.settings.host_path.as_deref(),
    ))
}

/// Creates a bridge service with the default transport and broadcast bus.
pub fn create_bridge_service() -> Arc<dyn BridgeService> {
    let (notifier, minimum): (Arc<dyn FrontendBroadcast>, String) = {
        let app_state = AppState::read_global();
        (
            app_state.context.notifier(),
            app_state.settings.minimum_host_version.clone(),
        )
    };

    Arc::new(BridgeServiceImpl::new(
        create_native_transport(),
        notifier,
        minimum,
    ))
}
