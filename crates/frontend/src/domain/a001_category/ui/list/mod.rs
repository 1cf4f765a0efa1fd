pub mod controller;
pub mod state;

use self::controller::CategoryListView;
use self::state::{create_state, CategoryListState};
use crate::domain::a001_category::api::HttpCategoryApi;
use crate::shared::capabilities::{use_notifications, BrowserConfirmer, RouterNavigator};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_category::CategoryId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

type Controller = CategoryListView<RwSignal<CategoryListState>>;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let state = create_state();

    let controller: Controller = CategoryListView::new(
        Rc::new(HttpCategoryApi::from_config(&config)),
        Rc::new(use_notifications()),
        Rc::new(BrowserConfirmer),
        Rc::new(RouterNavigator::from_router()),
        state,
    );
    // Rc внутри — храним локально, в замыкания передаём Copy-хэндл
    let controller = StoredValue::new_local(controller);

    let loading = Signal::derive(move || state.with(|s| s.is_fetching));

    let go_to_page = move |page: u32| {
        let c = controller.get_value();
        spawn_local(async move { c.on_page_change(page).await });
    };

    let reload = move || {
        let page = state.with_untracked(|s| s.pagination.current_page);
        go_to_page(page);
    };

    let toggle_active = move |id: CategoryId, active: bool| {
        let c = controller.get_value();
        spawn_local(async move { c.set_active(&id, active).await });
    };

    let handle_delete = move |id: CategoryId, name: String| {
        let c = controller.get_value();
        spawn_local(async move { c.request_delete(id, &name).await });
    };

    let handle_edit = move |id: CategoryId| controller.with_value(|c| c.go_to_edit(&id));
    let handle_create = move || controller.with_value(|c| c.go_to_create());

    // Загрузка первой страницы при монтировании
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            let c = controller.get_value();
            spawn_local(async move { c.mount().await });
        }
    });

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || format!("Categories ({})", state.with(|s| s.total)))>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| handle_create()
                >
                    {icon("plus")}
                    " Add Category"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <table class="table__data table--striped" style="width: 100%;">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell" scope="col">"#"</th>
                                <th class="table__header-cell" scope="col">"Name"</th>
                                <th class="table__header-cell" scope="col" dir="rtl">"الاسم"</th>
                                <th class="table__header-cell" scope="col">"Image"</th>
                                <th class="table__header-cell" scope="col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = state.with(|s| {
                                    s.items
                                        .iter()
                                        .enumerate()
                                        .map(|(index, category)| (s.row_ordinal(index), category.clone()))
                                        .collect::<Vec<_>>()
                                });

                                rows.into_iter().map(|(ordinal, category)| {
                                    let id_toggle = category.id.clone();
                                    let id_edit = category.id.clone();
                                    let id_delete = category.id.clone();
                                    let name = category.display_name().to_string();
                                    let alt = name.clone();
                                    let is_active = category.is_active;

                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{ordinal}</td>
                                            <td class="table__cell">{category.name_en}</td>
                                            <td class="table__cell" dir="rtl">{category.name_ar}</td>
                                            <td class="table__cell" style="max-width: 200px;">
                                                {category.image.map(|src| view! {
                                                    <img
                                                        class="img-thumbnail"
                                                        style="max-width: 100px; max-height: 50px; object-fit: cover;"
                                                        src=src
                                                        alt=alt
                                                    />
                                                })}
                                            </td>
                                            <td class="table__cell">
                                                <div style="display: flex; gap: 6px;">
                                                    {if is_active {
                                                        view! {
                                                            <button
                                                                class="button button--danger"
                                                                title="Deactivate"
                                                                on:click=move |_| toggle_active(id_toggle.clone(), false)
                                                            >
                                                                {icon("lock")}
                                                            </button>
                                                        }.into_any()
                                                    } else {
                                                        view! {
                                                            <button
                                                                class="button button--success"
                                                                title="Activate"
                                                                on:click=move |_| toggle_active(id_toggle.clone(), true)
                                                            >
                                                                {icon("unlock")}
                                                            </button>
                                                        }.into_any()
                                                    }}
                                                    <button
                                                        class="button button--primary"
                                                        title="Edit"
                                                        on:click=move |_| handle_edit(id_edit.clone())
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--danger"
                                                        title="Delete"
                                                        on:click=move |_| handle_delete(id_delete.clone(), name.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.pagination.current_page))
                    total_pages=Signal::derive(move || state.with(|s| s.pagination.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total))
                    on_page_change=Callback::new(go_to_page)
                    disabled=loading
                />
            </div>
        </div>
    }
}
