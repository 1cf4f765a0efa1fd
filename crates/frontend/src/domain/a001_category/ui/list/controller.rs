use contracts::domain::a001_category::CategoryId;
use std::rc::Rc;

use super::state::ListStore;
use crate::domain::a001_category::api::CategoryApi;
use crate::shared::capabilities::{Confirmer, Navigator, Notifier};

pub const CREATE_ROUTE: &str = "/admin/addCategory";
pub const LIST_ROUTE: &str = "/admin/categories";

pub fn edit_route(id: &CategoryId) -> String {
    format!("/admin/editcategory/{}", urlencoding::encode(id.as_str()))
}

/// Behaviour of the category list page, independent of rendering.
///
/// Every mutation goes to the server first; local state is patched only
/// after the server confirmed it.
pub struct CategoryListView<S: ListStore> {
    api: Rc<dyn CategoryApi>,
    notifier: Rc<dyn Notifier>,
    confirmer: Rc<dyn Confirmer>,
    navigator: Rc<dyn Navigator>,
    store: S,
}

impl<S: ListStore> Clone for CategoryListView<S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            notifier: Rc::clone(&self.notifier),
            confirmer: Rc::clone(&self.confirmer),
            navigator: Rc::clone(&self.navigator),
            store: self.store.clone(),
        }
    }
}

impl<S: ListStore> CategoryListView<S> {
    pub fn new(
        api: Rc<dyn CategoryApi>,
        notifier: Rc<dyn Notifier>,
        confirmer: Rc<dyn Confirmer>,
        navigator: Rc<dyn Navigator>,
        store: S,
    ) -> Self {
        Self {
            api,
            notifier,
            confirmer,
            navigator,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initial load
    pub async fn mount(&self) {
        self.fetch_page(1).await;
    }

    /// Load `page` and replace the list with it.
    ///
    /// A response that arrives after a newer request was started is dropped.
    pub async fn fetch_page(&self, page: u32) {
        let page = page.max(1);
        let mut ticket = 0;
        self.store.update(|s| ticket = s.begin_fetch());

        match self.api.list(page).await {
            Ok(envelope) => {
                let count = envelope.data.len();
                let mut applied = false;
                self.store
                    .update(|s| applied = s.apply_page(ticket, envelope));
                if applied {
                    log::debug!("categories page {} loaded: {} rows", page, count);
                } else {
                    log::debug!("categories page {} response is stale, dropped", page);
                }
            }
            Err(e) => {
                log::error!("Failed to fetch categories page {}: {}", page, e);
                self.store.update(|s| s.finish_fetch(ticket));
            }
        }
    }

    pub async fn on_page_change(&self, page: u32) {
        self.fetch_page(page).await;
    }

    /// Ask for confirmation, then delete
    pub async fn request_delete(&self, id: CategoryId, display_name: &str) {
        let accepted = self
            .confirmer
            .confirm(
                "Are you sure?",
                &format!("You want delete {} category!", display_name),
            )
            .await;
        if accepted {
            self.delete_category(&id).await;
        }
    }

    pub async fn delete_category(&self, id: &CategoryId) {
        match self.api.delete(id).await {
            Ok(()) => {
                self.store.update(|s| s.remove(id));
                self.notifier.success("category deleted successfully");
            }
            Err(e) => {
                log::warn!("Failed to delete category {}: {}", id, e);
                self.notifier.error(&e.user_message());
            }
        }
    }

    /// `active = false` bans the category, `active = true` unbans it
    pub async fn set_active(&self, id: &CategoryId, active: bool) {
        let result = if active {
            self.api.unban(id).await
        } else {
            self.api.ban(id).await
        };

        match result {
            Ok(()) => {
                let mut found = false;
                self.store.update(|s| found = s.set_active(id, active));
                if !found {
                    log::debug!("category {} is no longer on the page", id);
                }
            }
            Err(e) => {
                // UI остаётся как был; ошибка только в логе
                log::warn!("Failed to set category {} active={}: {}", id, active, e);
            }
        }
    }

    pub fn go_to_edit(&self, id: &CategoryId) {
        self.navigator.navigate(&edit_route(id));
    }

    pub fn go_to_create(&self) {
        self.navigator.navigate(CREATE_ROUTE);
    }
}
