//! 店铺管理面板
//!
//! 三个标签页各自维护列表与表单状态，修改成功后重新拉取对应列表。

mod customers;
mod orders;
mod products;

use leptos::prelude::*;
use shopflow_shared::StoreId;

use customers::CustomersPanel;
use orders::OrdersPanel;
use products::ProductsPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Products,
    Customers,
    Orders,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Products, AdminTab::Customers, AdminTab::Orders];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Products => "Products",
            AdminTab::Customers => "Customers",
            AdminTab::Orders => "Orders",
        }
    }
}

#[component]
pub fn StoreAdminPage(store_id: StoreId) -> impl IntoView {
    let tab = RwSignal::new(AdminTab::Products);
    let store = StoredValue::new(store_id);

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div role="tablist" class="tabs tabs-boxed mb-4">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <a
                                    role="tab"
                                    class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let store_id = store.get_value();
                    match tab.get() {
                        AdminTab::Products => view! { <ProductsPanel store_id=store_id /> }.into_any(),
                        AdminTab::Customers => view! { <CustomersPanel store_id=store_id /> }.into_any(),
                        AdminTab::Orders => view! { <OrdersPanel store_id=store_id /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}
