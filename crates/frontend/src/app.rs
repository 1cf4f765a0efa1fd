use crate::routes::routes::AppRoutes;
use crate::shared::capabilities::NotificationCenter;
use crate::shared::components::notification_host::NotificationHost;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Notification queue used by every page through the `Notifier` trait
    provide_context(NotificationCenter::new(config.notifications.timeout_ms));
    provide_context(config);

    view! {
        <ConfigProvider>
            <NotificationHost />
            <AppRoutes />
        </ConfigProvider>
    }
}
