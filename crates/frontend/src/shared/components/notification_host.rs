use leptos::prelude::*;
use thaw::*;

use crate::shared::capabilities::{use_notifications, NoticeKind};
use crate::shared::icons::icon;

/// Renders the notices queued in `NotificationCenter`
#[component]
pub fn NotificationHost() -> impl IntoView {
    let center = use_notifications();
    let notices = center.notices();

    view! {
        <div class="notification-host" style="position: fixed; top: 16px; right: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px; max-width: 420px;">
            <For
                each=move || notices.get()
                key=|notice| notice.key
                children=move |notice| {
                    let intent = match notice.kind {
                        NoticeKind::Success => MessageBarIntent::Success,
                        NoticeKind::Error => MessageBarIntent::Error,
                    };
                    let key = notice.key;
                    view! {
                        <MessageBar intent=intent>
                            <div style="display: flex; align-items: center; gap: 8px; width: 100%;">
                                <strong>{notice.title}</strong>
                                <span style="flex: 1;">{notice.text}</span>
                                <button
                                    class="button button--icon"
                                    title="Close"
                                    on:click=move |_| center.dismiss(key)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
