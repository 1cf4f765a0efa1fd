use leptos::prelude::*;

/// PageHeader component - reusable header for admin list pages
#[component]
pub fn PageHeader(
    /// Page title, may change while the page is open
    #[prop(into)]
    title: Signal<String>,

    /// Action buttons on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
