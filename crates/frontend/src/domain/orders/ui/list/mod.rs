pub mod state;
pub mod view_model;

use crate::domain::orders::api;
use crate::shared::date_utils::{format_date_opt, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, highlight_matches, SearchInput};
use chrono::Utc;
use contracts::domain::orders::{Order, OrderUpdate};
use contracts::enums::{DeliveryStatus, PaymentStatus, ProcessStatus};
use leptos::logging::log;
use leptos::prelude::*;
use state::{QuickFilter, MAX_FROZEN_COLUMNS, PAGE_SIZES};
use view_model::{derive_view, is_new, order_stats, sticky_left_offset, ColumnKey};

/// Badge styling for a delivery status
fn delivery_badge_style(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Delivered => "background: linear-gradient(135deg, #d1fae5, #a7f3d0); color: #065f46;",
        DeliveryStatus::Shipped => "background: linear-gradient(135deg, #dbeafe, #bfdbfe); color: #1e40af;",
        DeliveryStatus::Pending => "background: linear-gradient(135deg, #fef3c7, #fde68a); color: #92400e;",
        DeliveryStatus::Cancelled => "background: linear-gradient(135deg, #fee2e2, #fecaca); color: #991b1b;",
    }
}

fn delivery_badge_icon(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Delivered => "✓",
        DeliveryStatus::Shipped => "🚚",
        DeliveryStatus::Pending => "⏳",
        DeliveryStatus::Cancelled => "✕",
    }
}

fn payment_badge_style(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "background: linear-gradient(135deg, #d1fae5, #a7f3d0); color: #065f46;",
        PaymentStatus::Unpaid => "background: linear-gradient(135deg, #fee2e2, #fecaca); color: #991b1b;",
    }
}

fn payment_badge_icon(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "✓",
        PaymentStatus::Unpaid => "⚠",
    }
}

fn process_select_style(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::InTransit => "background: #dbeafe; color: #1e40af;",
        ProcessStatus::Production => "background: #fef3c7; color: #92400e;",
        ProcessStatus::Delay => "background: #fee2e2; color: #991b1b;",
    }
}

const STAT_CARD_STYLE: &str = "background: linear-gradient(135deg, #ffffff 0%, #f8fafc 100%); padding: 20px; border-radius: 12px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); border: 1px solid #e2e8f0;";
const STAT_ICON_STYLE: &str = "width: 40px; height: 40px; border-radius: 10px; display: flex; align-items: center; justify-content: center; margin-bottom: 12px;";
const STAT_VALUE_STYLE: &str = "font-size: 1.75rem; font-weight: 700; color: #1e293b; margin-bottom: 4px;";
const STAT_LABEL_STYLE: &str = "font-size: 0.875rem; color: #64748b; font-weight: 500;";
const PAGE_BUTTON_STYLE: &str = "padding: 8px 14px; border: 1px solid #e2e8f0; border-radius: 8px; background: #ffffff; cursor: pointer; color: #475569; font-weight: 500;";
const ACTIVE_PAGE_BUTTON_STYLE: &str = "padding: 8px 14px; border: 1px solid #005bb5; border-radius: 8px; background: linear-gradient(135deg, #005bb5, #007bff); cursor: pointer; color: white; font-weight: 500; box-shadow: 0 2px 8px rgba(0, 91, 181, 0.2);";
const ACTION_BUTTON_STYLE: &str = "padding: 4px 8px; border-radius: 6px; font-size: 0.75rem; font-weight: 500; cursor: pointer; border: none; display: flex; align-items: center; gap: 4px;";

fn quick_filter_pill_style(active: bool) -> String {
    let base = "padding: 8px 16px; border-radius: 20px; font-size: 0.875rem; font-weight: 500; cursor: pointer; border: 1px solid #e2e8f0; display: flex; align-items: center; gap: 6px;";
    if active {
        format!(
            "{} background: linear-gradient(135deg, #005bb5, #007bff); color: #ffffff; border-color: #005bb5; box-shadow: 0 2px 8px rgba(0, 91, 181, 0.2);",
            base
        )
    } else {
        format!("{} background: #ffffff; color: #475569;", base)
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let state = state::create_state();
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Dropdown visibility
    let (freeze_menu_open, set_freeze_menu_open) = signal(false);
    let (filter_menu, set_filter_menu) = signal::<Option<ColumnKey>>(None);

    let load_data = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::list_orders().await {
                Ok(data) => {
                    log!("Loaded {} orders", data.len());
                    set_orders.set(data);
                }
                Err(e) => {
                    log!("Failed to load orders: {}", e);
                    set_error.set(Some(format!("Failed to load orders: {}", e)));
                }
            }

            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    // The store owns the orders; after a successful mutation we re-fetch
    // instead of patching the row locally.
    let apply_update = move |id: i64, update: OrderUpdate| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_order(id, &update).await {
                Ok(_) => match api::list_orders().await {
                    Ok(data) => set_orders.set(data),
                    Err(e) => set_error.set(Some(format!("Failed to refresh orders: {}", e))),
                },
                Err(e) => {
                    log!("Failed to update order {}: {}", id, e);
                    set_error.set(Some(format!("Failed to update order: {}", e)));
                }
            }
        });
    };

    let derived = Memo::new(move |_| derive_view(&orders.get(), &state.get(), Utc::now()));
    let stats = Memo::new(move |_| order_stats(&orders.get(), Utc::now()));

    view! {
        <div style="padding: 24px; background: #f4f7f9; border-radius: 12px; width: 100%; box-sizing: border-box; min-height: calc(100vh - 180px); padding-bottom: 40px;">

            {move || {
                if loading.get() {
                    return view! {
                        <div style="text-align: center; padding: 50px; font-size: 1.2rem; color: #666;">
                            "Loading orders..."
                        </div>
                    }.into_any();
                }

                view! {
                    <div>
                        // Summary statistics
                        <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 24px;">
                            <div style=STAT_CARD_STYLE>
                                <div style=format!("{} background: linear-gradient(135deg, #005bb5, #007bff); color: #ffffff;", STAT_ICON_STYLE)>
                                    {icon("package")}
                                </div>
                                <div style=STAT_VALUE_STYLE>{move || stats.get().total}</div>
                                <div style=STAT_LABEL_STYLE>"Total Orders"</div>
                            </div>
                            <div style=STAT_CARD_STYLE>
                                <div style=format!("{} background: linear-gradient(135deg, #f59e0b, #f97316); color: #ffffff;", STAT_ICON_STYLE)>
                                    {icon("x-circle")}
                                </div>
                                <div style=STAT_VALUE_STYLE>{move || stats.get().unpaid}</div>
                                <div style=STAT_LABEL_STYLE>"Unpaid Orders"</div>
                            </div>
                            <div style=STAT_CARD_STYLE>
                                <div style=format!("{} background: linear-gradient(135deg, #fef3c7, #fde68a); color: #92400e;", STAT_ICON_STYLE)>
                                    {icon("clock")}
                                </div>
                                <div style=STAT_VALUE_STYLE>{move || stats.get().pending_delivery}</div>
                                <div style=STAT_LABEL_STYLE>"Pending Delivery"</div>
                            </div>
                            <div style=STAT_CARD_STYLE>
                                <div style=format!("{} background: linear-gradient(135deg, #10b981, #059669); color: #ffffff;", STAT_ICON_STYLE)>
                                    {icon("dollar")}
                                </div>
                                <div style=STAT_VALUE_STYLE>{move || format!("${:.2}", stats.get().total_revenue)}</div>
                                <div style=STAT_LABEL_STYLE>"Total Revenue"</div>
                            </div>
                            <div style=STAT_CARD_STYLE>
                                <div style=format!("{} background: linear-gradient(135deg, #fef3c7, #fde68a); color: #92400e;", STAT_ICON_STYLE)>
                                    {icon("check-circle")}
                                </div>
                                <div style=STAT_VALUE_STYLE>{move || stats.get().new_orders}</div>
                                <div style=STAT_LABEL_STYLE>"New (24h)"</div>
                            </div>
                        </div>

                        // Quick filter pills
                        <div style="display: flex; gap: 8px; margin-bottom: 20px; flex-wrap: wrap;">
                            <button
                                style=move || quick_filter_pill_style(state.get().quick_filter.is_none())
                                on:click=move |_| state.update(|s| s.set_quick_filter(None))
                            >
                                {icon("filter")}
                                "All Orders"
                            </button>
                            <button
                                style=move || quick_filter_pill_style(state.get().quick_filter == Some(QuickFilter::New))
                                on:click=move |_| state.update(|s| s.set_quick_filter(Some(QuickFilter::New)))
                            >
                                {icon("clock")}
                                "New Orders"
                            </button>
                            <button
                                style=move || quick_filter_pill_style(state.get().quick_filter == Some(QuickFilter::Unpaid))
                                on:click=move |_| state.update(|s| s.set_quick_filter(Some(QuickFilter::Unpaid)))
                            >
                                {icon("x-circle")}
                                {move || format!("Unpaid ({})", stats.get().unpaid)}
                            </button>
                            <button
                                style=move || quick_filter_pill_style(state.get().quick_filter == Some(QuickFilter::Pending))
                                on:click=move |_| state.update(|s| s.set_quick_filter(Some(QuickFilter::Pending)))
                            >
                                {icon("truck")}
                                {move || format!("Pending Delivery ({})", stats.get().pending_delivery)}
                            </button>
                            <button
                                style=move || quick_filter_pill_style(state.get().quick_filter == Some(QuickFilter::Paid))
                                on:click=move |_| state.update(|s| s.set_quick_filter(Some(QuickFilter::Paid)))
                            >
                                {icon("check-circle")}
                                "Paid Orders"
                            </button>
                        </div>

                        // Toolbar
                        <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; flex-wrap: wrap; gap: 16px;">
                            <h2 style="font-size: 1.75rem; font-weight: 700; color: #005bb5; margin: 0; letter-spacing: -0.02em;">
                                "Orders Overview"
                            </h2>
                            <div style="display: flex; gap: 16px; align-items: center;">
                                <div style="display: flex; gap: 8px; align-items: center;">
                                    <input
                                        type="date"
                                        prop:value=move || state.get().date_from
                                        on:input=move |ev| {
                                            let from = event_target_value(&ev);
                                            state.update(|s| {
                                                let to = s.date_to.clone();
                                                s.set_date_range(from, to);
                                            });
                                        }
                                        style="padding: 8px 12px; border: none; background-color: #f3f4f6; border-radius: 8px; font-size: 0.9rem; outline: none; color: #1f2937; width: 140px;"
                                    />
                                    <span style="color: #94a3b8; font-size: 0.9rem;">"-"</span>
                                    <input
                                        type="date"
                                        prop:value=move || state.get().date_to
                                        on:input=move |ev| {
                                            let to = event_target_value(&ev);
                                            state.update(|s| {
                                                let from = s.date_from.clone();
                                                s.set_date_range(from, to);
                                            });
                                        }
                                        style="padding: 8px 12px; border: none; background-color: #f3f4f6; border-radius: 8px; font-size: 0.9rem; outline: none; color: #1f2937; width: 140px;"
                                    />
                                </div>

                                <div style="position: relative;">
                                    <button
                                        style="padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 8px; background: #f9fafb; cursor: pointer; color: #1f2937;"
                                        on:click=move |_| set_freeze_menu_open.update(|open| *open = !*open)
                                    >
                                        "Freeze Columns"
                                    </button>
                                    {move || if freeze_menu_open.get() {
                                        view! {
                                            <div style="position: absolute; top: 100%; right: 0; background: white; border: 1px solid #ddd; border-radius: 8px; box-shadow: 0 5px 15px rgba(0,0,0,0.1); z-index: 20; margin-top: 5px; padding: 8px; max-height: 300px; overflow-y: auto;">
                                                {ColumnKey::ALL.iter().map(|&key| {
                                                    view! {
                                                        <label style="display: block; padding: 8px 12px; white-space: nowrap; color: #1f2937;">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || state.get().frozen.contains(&key)
                                                                disabled=move || {
                                                                    let s = state.get();
                                                                    !s.frozen.contains(&key) && s.frozen.len() >= MAX_FROZEN_COLUMNS
                                                                }
                                                                on:change=move |_| state.update(|s| s.toggle_frozen(key))
                                                            />
                                                            " "
                                                            {key.label()}
                                                        </label>
                                                    }
                                                }).collect_view()}
                                            </div>
                                        }.into_any()
                                    } else {
                                        view! { <></> }.into_any()
                                    }}
                                </div>

                                <div style="display: flex; align-items: center; gap: 8px;">
                                    <span style="font-size: 0.9rem; color: #4b5563; font-weight: 500;">"Rows:"</span>
                                    <select
                                        on:change=move |ev| {
                                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                                state.update(|s| s.set_page_size(size));
                                            }
                                        }
                                        style="padding: 8px; border: 1px solid #d1d5db; border-radius: 8px; font-size: 0.9rem; background-color: #f9fafb; color: #1f2937;"
                                    >
                                        {PAGE_SIZES.iter().map(|&size| {
                                            view! {
                                                <option
                                                    value=size.to_string()
                                                    selected=move || state.get().page_size == size
                                                >
                                                    {size.to_string()}
                                                </option>
                                            }
                                        }).collect_view()}
                                    </select>
                                </div>

                                <SearchInput
                                    value=Signal::derive(move || state.get().global_search)
                                    on_change=Callback::new(move |text: String| {
                                        state.update(|s| s.set_global_search(text));
                                    })
                                    placeholder="Search all orders..."
                                />
                            </div>
                        </div>

                        {move || {
                            error.get().map(|err| {
                                view! {
                                    <div style="margin-bottom: 16px; padding: 12px 16px; background: #fee2e2; color: #991b1b; border-radius: 8px;" role="alert">
                                        {err}
                                    </div>
                                }
                            })
                        }}

                        // The grid
                        <div style="overflow-x: auto; overflow-y: auto; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); background: #ffffff; border: 1px solid #e2e8f0; position: relative; max-height: 70vh;">
                            <table style="width: 100%; border-collapse: separate; border-spacing: 0; font-size: 0.875rem; table-layout: fixed; background: #ffffff; border-radius: 12px;">
                                <thead>
                                    <tr>
                                        {move || {
                                            let view = derived.get();
                                            let frozen = state.get().frozen;
                                            view.columns.iter().map(|&key| {
                                                let is_frozen = frozen.contains(&key);
                                                let mut th_style = format!(
                                                    "text-align: left; font-weight: 500; position: sticky; top: 0; z-index: 1; background: linear-gradient(to bottom, #ffffff, #f8fafc); border-bottom: 1px solid #e2e8f0; padding: 14px 16px; width: {}px;",
                                                    key.width()
                                                );
                                                if is_frozen {
                                                    th_style.push_str(&format!(
                                                        " left: {}px; z-index: 3;",
                                                        sticky_left_offset(&frozen, key)
                                                    ));
                                                }
                                                let sortable = key.is_sortable();

                                                view! {
                                                    <th style=th_style>
                                                        <div style="display: flex; align-items: center; gap: 8px; position: relative;">
                                                            <span
                                                                style=move || if sortable {
                                                                    "cursor: pointer; user-select: none;"
                                                                } else {
                                                                    ""
                                                                }
                                                                on:click=move |_| {
                                                                    if sortable {
                                                                        state.update(|s| s.toggle_sort(key));
                                                                    }
                                                                }
                                                            >
                                                                {key.label()}
                                                                {move || if sortable {
                                                                    view! {
                                                                        <span style="color: #007bff;">
                                                                            {get_sort_indicator(state.get().sort.active(), key)}
                                                                        </span>
                                                                    }.into_any()
                                                                } else {
                                                                    view! { <></> }.into_any()
                                                                }}
                                                            </span>

                                                            {key.filter_options().map(|options| view! {
                                                                <span
                                                                    style="cursor: pointer; color: #94a3b8; display: flex; align-items: center;"
                                                                    on:click=move |_| {
                                                                        set_filter_menu.update(|menu| {
                                                                            *menu = if *menu == Some(key) { None } else { Some(key) };
                                                                        });
                                                                    }
                                                                >
                                                                    {icon("chevron-down")}
                                                                </span>
                                                                {move || if filter_menu.get() == Some(key) {
                                                                    view! {
                                                                        <div style="position: absolute; top: 100%; left: 0; background: #ffffff; border: 1px solid #e2e8f0; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); z-index: 10; padding: 4px; width: 150px;">
                                                                            {options.iter().map(|&option| {
                                                                                view! {
                                                                                    <div
                                                                                        style="padding: 8px 12px; cursor: pointer; border-radius: 6px; font-size: 0.85rem;"
                                                                                        on:click=move |_| {
                                                                                            state.update(|s| s.set_filter(key, option.to_string()));
                                                                                            set_filter_menu.set(None);
                                                                                        }
                                                                                    >
                                                                                        {option}
                                                                                    </div>
                                                                                }
                                                                            }).collect_view()}
                                                                        </div>
                                                                    }.into_any()
                                                                } else {
                                                                    view! { <></> }.into_any()
                                                                }}
                                                            })}

                                                            {move || {
                                                                state.get().filters.get(&key).cloned().map(|active| view! {
                                                                    <span style="background: linear-gradient(135deg, #e0e7ff, #c7d2fe); color: #4338ca; padding: 4px 10px; border-radius: 12px; font-size: 0.75rem; font-weight: 500; display: flex; align-items: center; gap: 6px;">
                                                                        {active}
                                                                        <span
                                                                            style="cursor: pointer; font-weight: bold; opacity: 0.7;"
                                                                            on:click=move |_| state.update(|s| s.clear_filter(key))
                                                                        >
                                                                            "×"
                                                                        </span>
                                                                    </span>
                                                                })
                                                            }}
                                                        </div>
                                                    </th>
                                                }
                                            }).collect_view()
                                        }}
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let view = derived.get();
                                        let rows = view.rows;
                                        let columns = view.columns;
                                        let search = state.get().global_search;
                                        let frozen = state.get().frozen;
                                        let now = Utc::now();

                                        rows.into_iter().map(|order| {
                                            let columns = columns.clone();
                                            let frozen = frozen.clone();
                                            let search = search.clone();
                                            let row_is_new = is_new(&order, now);
                                            let row_style = if row_is_new {
                                                "background-color: #fef3c7; border-left: 3px solid #f59e0b;"
                                            } else {
                                                ""
                                            };

                                            let placed_at = format!("Ordered {}", format_datetime(&order.order_date));

                                            view! {
                                                <tr style=row_style title=placed_at>
                                                    {columns.into_iter().map(|key| {
                                                        let wrap = if matches!(key, ColumnKey::Product | ColumnKey::Actions) {
                                                            "white-space: normal; word-break: break-word; line-height: 1.5;"
                                                        } else {
                                                            "white-space: nowrap;"
                                                        };
                                                        let row_bg = if row_is_new { "#fef3c7" } else { "#ffffff" };
                                                        let mut td_style = format!(
                                                            "padding: 14px 16px; border-bottom: 1px solid #f1f5f9; background-color: {}; {}",
                                                            row_bg, wrap
                                                        );
                                                        if frozen.contains(&key) {
                                                            td_style.push_str(&format!(
                                                                " position: sticky; left: {}px; z-index: 1; border-right: 1px solid #f1f5f9;",
                                                                sticky_left_offset(&frozen, key)
                                                            ));
                                                        }

                                                        let cell = order_cell(&order, key, &search, apply_update);
                                                        view! { <td style=td_style>{cell}</td> }
                                                    }).collect_view()}
                                                </tr>
                                            }
                                        }).collect_view()
                                    }}
                                </tbody>
                            </table>
                        </div>

                        // Pagination
                        {move || {
                            let view = derived.get();
                            let current = view.page;
                            let total_pages = view.total_pages;
                            let last_page = total_pages.saturating_sub(1);

                            view! {
                                <div style="display: flex; justify-content: space-between; align-items: center; padding-top: 20px;">
                                    <span style="font-size: 0.9rem; color: #6c757d;">
                                        {format!(
                                            "Page {} of {} (Total: {} orders)",
                                            current + 1,
                                            total_pages,
                                            view.total_count
                                        )}
                                    </span>
                                    <div style="display: flex; gap: 4px;">
                                        <button
                                            style=PAGE_BUTTON_STYLE
                                            disabled=current == 0
                                            on:click=move |_| state.update(|s| s.set_page(0))
                                        >
                                            "«"
                                        </button>
                                        <button
                                            style=PAGE_BUTTON_STYLE
                                            disabled=current == 0
                                            on:click=move |_| state.update(|s| s.set_page(current.saturating_sub(1)))
                                        >
                                            "‹"
                                        </button>
                                        {(0..total_pages).map(|num| {
                                            view! {
                                                <button
                                                    style=if num == current { ACTIVE_PAGE_BUTTON_STYLE } else { PAGE_BUTTON_STYLE }
                                                    on:click=move |_| state.update(|s| s.set_page(num))
                                                >
                                                    {num + 1}
                                                </button>
                                            }
                                        }).collect_view()}
                                        <button
                                            style=PAGE_BUTTON_STYLE
                                            disabled=current >= last_page
                                            on:click=move |_| state.update(|s| s.set_page(current + 1))
                                        >
                                            "›"
                                        </button>
                                        <button
                                            style=PAGE_BUTTON_STYLE
                                            disabled=current >= last_page
                                            on:click=move |_| state.update(|s| s.set_page(last_page))
                                        >
                                            "»"
                                        </button>
                                    </div>
                                </div>
                            }
                        }}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// Renders one grid cell for the given column
fn order_cell(
    order: &Order,
    key: ColumnKey,
    search: &str,
    apply_update: impl Fn(i64, OrderUpdate) + Copy + 'static,
) -> AnyView {
    let id = order.id;
    match key {
        ColumnKey::Actions => {
            let payment_status = order.payment_status;
            let delivery_status = order.delivery_status;
            view! {
                <div style="display: flex; gap: 6px; flex-wrap: wrap;">
                    {(payment_status == PaymentStatus::Unpaid).then(|| view! {
                        <button
                            style=format!("{} background: #d1fae5; color: #065f46;", ACTION_BUTTON_STYLE)
                            title="Mark as Paid"
                            on:click=move |_| apply_update(id, OrderUpdate::mark_paid(Utc::now()))
                        >
                            "Paid"
                        </button>
                    })}
                    {(delivery_status == DeliveryStatus::Pending).then(|| view! {
                        <button
                            style=format!("{} background: #dbeafe; color: #1e40af;", ACTION_BUTTON_STYLE)
                            title="Mark as Shipped"
                            on:click=move |_| apply_update(id, OrderUpdate::set_delivery(DeliveryStatus::Shipped))
                        >
                            "Ship"
                        </button>
                    })}
                    {(delivery_status == DeliveryStatus::Shipped).then(|| view! {
                        <button
                            style=format!("{} background: #d1fae5; color: #065f46;", ACTION_BUTTON_STYLE)
                            title="Mark as Delivered"
                            on:click=move |_| apply_update(id, OrderUpdate::set_delivery(DeliveryStatus::Delivered))
                        >
                            "Deliver"
                        </button>
                    })}
                </div>
            }.into_any()
        }
        ColumnKey::DeliveryStatus => {
            let status = order.delivery_status;
            view! {
                <span style=format!(
                    "padding: 4px 10px; border-radius: 12px; font-size: 0.8rem; font-weight: bold; display: inline-flex; align-items: center; gap: 4px; {}",
                    delivery_badge_style(status)
                )>
                    <span>{delivery_badge_icon(status)}</span>
                    <span>{status.display_name()}</span>
                </span>
            }.into_any()
        }
        ColumnKey::PaymentStatus => {
            let status = order.payment_status;
            view! {
                <span style=format!(
                    "padding: 4px 10px; border-radius: 12px; font-size: 0.8rem; font-weight: bold; display: inline-flex; align-items: center; gap: 4px; {}",
                    payment_badge_style(status)
                )>
                    <span>{payment_badge_icon(status)}</span>
                    <span>{status.display_name()}</span>
                </span>
            }.into_any()
        }
        ColumnKey::ProcessStatus => {
            let current = order.process_status;
            view! {
                <select
                    style=format!(
                        "border: none; cursor: pointer; padding: 4px 10px; border-radius: 12px; font-size: 0.8rem; font-weight: bold; outline: none; {}",
                        process_select_style(current)
                    )
                    on:change=move |ev| {
                        if let Some(status) = ProcessStatus::from_code(&event_target_value(&ev)) {
                            apply_update(id, OrderUpdate::set_process(status));
                        }
                    }
                >
                    {ProcessStatus::all().into_iter().map(|status| {
                        view! {
                            <option value=status.code() selected=status == current>
                                {status.display_name()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            }.into_any()
        }
        ColumnKey::Rating => {
            let stars = order
                .rating
                .map(|r| {
                    let r = r.clamp(1, 5) as usize;
                    format!("{}{}", "★".repeat(r), "☆".repeat(5 - r))
                })
                .unwrap_or_else(|| "N/A".to_string());
            view! { <div style="display: flex; color: #f59e0b; letter-spacing: 2px;">{stars}</div> }
                .into_any()
        }
        ColumnKey::Amount => view! {
            <span style="font-weight: 600; color: #059669; font-size: 0.95rem;">
                {format!("${:.2}", order.amount)}
            </span>
        }.into_any(),
        ColumnKey::Product => {
            let search = search.to_string();
            view! {
                <div style="white-space: normal; word-break: break-word; line-height: 1.6; max-width: 200px;">
                    {order.product.split(" | ").map(|item| {
                        view! {
                            <div style="margin-bottom: 6px; font-size: 0.875rem;">
                                "• "
                                {highlight_matches(item, &search)}
                            </div>
                        }
                    }).collect_view()}
                </div>
            }.into_any()
        }
        ColumnKey::PaymentDate => {
            highlight_matches(&format_date_opt(&order.payment_date), search)
        }
        ColumnKey::TrackingId => {
            let text = order.tracking_id.clone().unwrap_or_else(|| "N/A".to_string());
            highlight_matches(&text, search)
        }
        ColumnKey::Note => {
            let text = order.note.clone().unwrap_or_default();
            highlight_matches(&text, search)
        }
        ColumnKey::Source => highlight_matches(order.source.code(), search),
        ColumnKey::OrderNo => highlight_matches(&order.order_no, search),
        ColumnKey::CustomerName => highlight_matches(&order.customer_name, search),
        ColumnKey::CustomerContact => highlight_matches(&order.customer_contact, search),
        ColumnKey::Category => highlight_matches(&order.category, search),
        ColumnKey::PaymentMethod => highlight_matches(&order.payment_method, search),
    }
}
