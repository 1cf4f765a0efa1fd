use crate::domain::a001_category::ui::editor::{CategoryCreatePage, CategoryEditPage};
use crate::domain::a001_category::ui::list::controller::LIST_ROUTE;
use crate::domain::a001_category::ui::list::CategoryList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=LIST_ROUTE /> } />
                    <Route path=path!("/admin/categories") view=CategoryList />
                    <Route path=path!("/admin/addCategory") view=CategoryCreatePage />
                    <Route path=path!("/admin/editcategory/:id") view=CategoryEditPage />
                </Routes>
            </main>
        </Router>
    }
}
