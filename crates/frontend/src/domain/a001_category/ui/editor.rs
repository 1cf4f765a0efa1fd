use contracts::domain::a001_category::CategoryId;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::list::controller::LIST_ROUTE;
use crate::shared::components::page_header::PageHeader;

/// Create/edit screens live outside this app; these pages only mark the
/// navigation target.
#[component]
pub fn CategoryCreatePage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Add Category".to_string()>
                <A href=LIST_ROUTE>"Back to categories"</A>
            </PageHeader>
        </div>
    }
}

/// Title for the `:id` route parameter
fn edit_title(raw_id: Option<&str>) -> String {
    match CategoryId::from_string(raw_id.unwrap_or_default()) {
        Ok(id) => format!("Edit category {}", id),
        Err(e) => {
            log::warn!("editcategory route without a usable id: {}", e);
            "Unknown category".to_string()
        }
    }
}

#[component]
pub fn CategoryEditPage() -> impl IntoView {
    let params = use_params_map();
    let title = Signal::derive(move || edit_title(params.read().get("id").as_deref()));

    view! {
        <div class="page">
            <PageHeader title=title>
                <A href=LIST_ROUTE>"Back to categories"</A>
            </PageHeader>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_title() {
        assert_eq!(edit_title(Some("64b1")), "Edit category 64b1");
        assert_eq!(edit_title(Some(" 12 ")), "Edit category 12");
        assert_eq!(edit_title(Some("")), "Unknown category");
        assert_eq!(edit_title(None), "Unknown category");
    }
}
