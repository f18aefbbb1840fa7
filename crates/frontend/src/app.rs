use crate::domain::orders::ui::list::OrdersList;
use leptos::prelude::*;

/// Root component: a minimal shell around the orders dashboard.
///
/// Login, chat and catalog screens live in the surrounding product; this
/// bundle ships the orders page only.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="min-height: 100vh; background: #eef2f6; font-family: 'Segoe UI', system-ui, sans-serif;">
            <header style="background: #ffffff; border-bottom: 1px solid #e2e8f0; padding: 16px 32px; display: flex; align-items: center; gap: 12px;">
                <span style="font-size: 1.25rem; font-weight: 700; color: #005bb5;">"Shopdesk"</span>
                <span style="font-size: 0.9rem; color: #64748b;">"Orders"</span>
            </header>
            <main style="padding: 24px 32px;">
                <OrdersList />
            </main>
        </div>
    }
}
