//! Side-effect surfaces injected into views: notifications, confirmation
//! prompts and navigation.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use uuid::Uuid;

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[async_trait(?Send)]
pub trait Confirmer {
    /// `true` when the user accepted
    async fn confirm(&self, title: &str, text: &str) -> bool;
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub key: Uuid,
    pub kind: NoticeKind,
    pub title: &'static str,
    pub text: String,
}

/// Очередь всплывающих уведомлений; рендерится `NotificationHost`
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    notices: RwSignal<Vec<Notice>>,
    timeout_ms: u32,
}

impl NotificationCenter {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            timeout_ms,
        }
    }

    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }

    pub fn dismiss(&self, key: Uuid) {
        self.notices.update(|list| list.retain(|n| n.key != key));
    }

    fn push(&self, kind: NoticeKind, title: &'static str, text: &str) {
        let key = Uuid::new_v4();
        self.notices.update(|list| {
            list.push(Notice {
                key,
                kind,
                title,
                text: text.to_string(),
            })
        });

        if self.timeout_ms > 0 {
            let this = *self;
            spawn_local(async move {
                TimeoutFuture::new(this.timeout_ms).await;
                this.dismiss(key);
            });
        }
    }
}

impl Notifier for NotificationCenter {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, "success!", message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeKind::Error, "error!", message);
    }
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().expect("NotificationCenter not found in context")
}

// ============================================================================
// Confirmation
// ============================================================================

/// Blocking browser `confirm()` dialog
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirmer;

#[async_trait(?Send)]
impl Confirmer for BrowserConfirmer {
    async fn confirm(&self, title: &str, text: &str) -> bool {
        match web_sys::window() {
            Some(win) => win
                .confirm_with_message(&format!("{}\n\n{}", title, text))
                .unwrap_or(false),
            None => false,
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// `Navigator` over the leptos_router history integration
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    /// Must be called inside a `<Router>`
    pub fn from_router() -> Self {
        let navigate = leptos_router::hooks::use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| navigate(path, Default::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate: {}", path);
        (self.navigate)(path);
    }
}
