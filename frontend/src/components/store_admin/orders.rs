use leptos::prelude::*;
use leptos::task::spawn_local;
use shopflow_shared::protocol::{ListOrdersRequest, UpdateOrderStatusRequest};
use shopflow_shared::{LoadState, Order, OrderId, OrderStatus, StoreId, format_money};

use crate::auth::use_auth;
use crate::components::form_state::FormAlert;
use crate::components::load_status::LoadStatus;

#[component]
pub fn OrdersPanel(store_id: StoreId) -> impl IntoView {
    let auth = use_auth();
    let store = StoredValue::new(store_id);

    let orders = RwSignal::new(LoadState::<Vec<Order>>::Idle);
    // None = 全部状态
    let filter = RwSignal::new(Option::<OrderStatus>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = auth.api();
        let request = ListOrdersRequest {
            store_id: store.get_value(),
            status: filter.get_untracked(),
        };
        orders.update(|o| o.mark_loading());
        spawn_local(async move {
            let result = api.send(&request).await;
            orders.set(LoadState::from_result(result));
        });
    };

    // 筛选条件变化时重新加载
    Effect::new(move |_| {
        filter.track();
        load();
    });

    let update_status = move |order_id: OrderId, status: OrderStatus| {
        let api = auth.api();
        set_error_msg.set(None);
        spawn_local(async move {
            match api.send(&UpdateOrderStatusRequest { order_id, status }).await {
                Ok(_) => load(),
                Err(e) => set_error_msg.set(Some(e.display_message())),
            }
        });
    };

    view! {
        <div class="space-y-3">
            <div class="flex items-center gap-2">
                <label class="text-sm">"Filter status"</label>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| filter.set(event_target_value(&ev).parse::<OrderStatus>().ok())
                >
                    <option value="" selected=move || filter.get().is_none()>
                        "All"
                    </option>
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value=status.as_str() selected=move || filter.get() == Some(status)>
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <FormAlert error=error_msg />
            <LoadStatus state=orders />

            <ul class="divide-y divide-base-300">
                <For
                    each=move || orders.with(|o| o.items())
                    // 状态变化后需要重新渲染该行
                    key=|order| (order.id.clone(), order.status)
                    children=move |order| {
                        let current = order.status;
                        let order_id = order.id.clone();
                        view! {
                            <li class="py-3 flex items-center justify-between">
                                <div>
                                    <p class="font-medium">
                                        "Order #" {order.short_id().to_string()} " · " {format_money(order.total)}
                                    </p>
                                    <p class="text-xs text-base-content/60">
                                        {order.items.len()} " items · " {current.as_str()}
                                    </p>
                                </div>
                                <div class="join">
                                    {OrderStatus::ALL
                                        .into_iter()
                                        .map(|status| {
                                            let order_id = order_id.clone();
                                            view! {
                                                <button
                                                    class=if status == current {
                                                        "btn btn-xs join-item btn-neutral"
                                                    } else {
                                                        "btn btn-xs join-item"
                                                    }
                                                    on:click=move |_| update_status(order_id.clone(), status)
                                                >
                                                    {status.as_str()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
