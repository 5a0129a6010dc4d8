use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notifications::NotificationCenter;
use crate::system::auth::context::provide_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session is restored from local storage before the shell decides what to show
    provide_session();

    provide_context(AppGlobalContext::new());
    provide_context(NotificationCenter::new());

    view! {
        <AppShell />
    }
}
