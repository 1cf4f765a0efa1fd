use contracts::domain::a001_category::{Category, CategoryId};
use contracts::shared::pagination::{row_ordinal, PageEnvelope};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based
    pub current_page: u32,
    pub total_pages: u32,
    pub limit: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            limit: 0,
        }
    }
}

/// Одна серверная страница категорий. Не кэш всей коллекции:
/// при смене страницы список заменяется целиком.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryListState {
    pub items: Vec<Category>,
    pub total: u32,
    pub pagination: PaginationState,
    pub is_loaded: bool,
    pub is_fetching: bool,
    /// Ticket of the most recent page request
    pub fetch_seq: u64,
}

impl CategoryListState {
    /// Start a page request and return its ticket
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.is_fetching = true;
        self.fetch_seq
    }

    /// Replace the page with `envelope` if `ticket` is still the latest
    /// request. Returns `false` for stale responses, which are dropped.
    pub fn apply_page(&mut self, ticket: u64, envelope: PageEnvelope<Category>) -> bool {
        if ticket != self.fetch_seq {
            return false;
        }
        let meta = envelope.pagination;
        self.items = envelope.data;
        self.total = meta.total;
        self.pagination = PaginationState {
            current_page: meta.current_page.max(1),
            total_pages: meta.total_pages,
            limit: meta.limit,
        };
        self.is_loaded = true;
        self.is_fetching = false;
        true
    }

    /// Failure path: data stays as it was
    pub fn finish_fetch(&mut self, ticket: u64) {
        if ticket == self.fetch_seq {
            self.is_fetching = false;
        }
    }

    pub fn remove(&mut self, id: &CategoryId) {
        self.items.retain(|c| &c.id != id);
    }

    /// Returns `false` when no record with `id` is on the page
    pub fn set_active(&mut self, id: &CategoryId, active: bool) -> bool {
        match self.items.iter_mut().find(|c| &c.id == id) {
            Some(category) => {
                category.is_active = active;
                true
            }
            None => false,
        }
    }

    pub fn row_ordinal(&self, index: usize) -> u64 {
        row_ordinal(index, self.pagination.current_page, self.pagination.limit)
    }
}

/// Where a list view keeps its state
pub trait ListStore: Clone + 'static {
    fn with<R>(&self, f: impl FnOnce(&CategoryListState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut CategoryListState));
}

impl ListStore for RwSignal<CategoryListState> {
    fn with<R>(&self, f: impl FnOnce(&CategoryListState) -> R) -> R {
        WithUntracked::with_untracked(self, f)
    }

    fn update(&self, f: impl FnOnce(&mut CategoryListState)) {
        Update::update(self, f);
    }
}

impl ListStore for Rc<RefCell<CategoryListState>> {
    fn with<R>(&self, f: impl FnOnce(&CategoryListState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut CategoryListState)) {
        f(&mut self.borrow_mut())
    }
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::PaginationMeta;

    fn category(id: u64, active: bool) -> Category {
        let mut c = Category::new(id, &format!("Category {}", id), "فئة");
        c.is_active = active;
        c
    }

    fn envelope(ids: &[u64], page: u32, total: u32, limit: u32) -> PageEnvelope<Category> {
        PageEnvelope {
            data: ids.iter().map(|&id| category(id, true)).collect(),
            pagination: PaginationMeta {
                total,
                current_page: page,
                total_pages: total.div_ceil(limit),
                limit,
            },
        }
    }

    fn ids(state: &CategoryListState) -> Vec<String> {
        state.items.iter().map(|c| c.id.as_string()).collect()
    }

    #[test]
    fn test_apply_page_replaces_everything() {
        let mut state = CategoryListState::default();
        let t1 = state.begin_fetch();
        assert!(state.apply_page(t1, envelope(&[1, 2, 3], 1, 25, 10)));
        let t2 = state.begin_fetch();
        assert!(state.is_fetching);
        assert!(state.apply_page(t2, envelope(&[21, 22], 3, 25, 10)));

        assert_eq!(ids(&state), vec!["21", "22"]);
        assert_eq!(state.total, 25);
        assert_eq!(
            state.pagination,
            PaginationState {
                current_page: 3,
                total_pages: 3,
                limit: 10
            }
        );
        assert!(!state.is_fetching);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut state = CategoryListState::default();
        let old = state.begin_fetch();
        let new = state.begin_fetch();
        assert!(state.apply_page(new, envelope(&[11], 2, 11, 10)));
        assert!(!state.apply_page(old, envelope(&[1, 2], 1, 11, 10)));
        assert_eq!(ids(&state), vec!["11"]);
        assert_eq!(state.pagination.current_page, 2);
    }

    #[test]
    fn test_finish_fetch_keeps_data() {
        let mut state = CategoryListState::default();
        let t1 = state.begin_fetch();
        state.apply_page(t1, envelope(&[1, 2], 1, 2, 10));
        let t2 = state.begin_fetch();
        state.finish_fetch(t2);
        assert!(!state.is_fetching);
        assert_eq!(ids(&state), vec!["1", "2"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut state = CategoryListState::default();
        let t = state.begin_fetch();
        state.apply_page(t, envelope(&[1, 2, 7, 9], 1, 4, 10));

        state.remove(&CategoryId::from(7));
        assert_eq!(ids(&state), vec!["1", "2", "9"]);

        // отсутствующий id: ничего не меняется
        state.remove(&CategoryId::from(42));
        assert_eq!(ids(&state), vec!["1", "2", "9"]);
    }

    #[test]
    fn test_set_active_touches_one_record() {
        let mut state = CategoryListState::default();
        let t = state.begin_fetch();
        state.apply_page(t, envelope(&[1, 3, 5], 1, 3, 10));

        assert!(state.set_active(&CategoryId::from(3), false));
        let flags: Vec<bool> = state.items.iter().map(|c| c.is_active).collect();
        assert_eq!(flags, vec![true, false, true]);

        // повторная деактивация ничего не меняет
        let before = state.clone();
        assert!(state.set_active(&CategoryId::from(3), false));
        assert_eq!(state, before);

        assert!(!state.set_active(&CategoryId::from(99), true));
    }

    #[test]
    fn test_row_ordinals() {
        let mut state = CategoryListState::default();
        // до первой загрузки limit = 0
        assert_eq!(state.row_ordinal(0), 1);

        let t = state.begin_fetch();
        state.apply_page(t, envelope(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 1, 25, 10));
        assert_eq!(state.row_ordinal(0), 1);
        assert_eq!(state.row_ordinal(9), 10);

        let t = state.begin_fetch();
        state.apply_page(t, envelope(&[21, 22, 23, 24, 25], 3, 25, 10));
        assert_eq!(state.row_ordinal(0), 21);
        assert_eq!(state.row_ordinal(4), 25);
    }
}
