use leptos::prelude::*;
use leptos::task::spawn_local;
use shopflow_shared::protocol::{ListStoresRequest, StoreMetricsRequest};
use shopflow_shared::{
    ADMIN_PATH, LoadState, Store, StoreId, StoreMetrics, StoreSelection, StoreSummary,
};

use crate::auth::{logout, use_auth};
use crate::components::form_state::{FormAlert, StoreFormState, TextField};
use crate::components::load_status::LoadStatus;
use crate::web::router::{Link, use_router};

/// 店铺列表、创建店铺与店铺指标
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let stores = RwSignal::new(LoadState::<Vec<Store>>::Idle);
    let selected = RwSignal::new(Option::<StoreSelection>::None);
    let metrics = RwSignal::new(LoadState::<StoreMetrics>::Idle);

    let form = StoreFormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_stores = move || {
        let api = auth.api();
        stores.update(|s| s.mark_loading());
        spawn_local(async move {
            let result = api.send(&ListStoresRequest).await;
            if let Ok(list) = &result {
                // 尚未选择时默认高亮第一个店铺（不进入管理页）
                if selected.with_untracked(Option::is_none) {
                    selected.set(StoreSelection::default_for(None, list));
                }
            }
            stores.set(LoadState::from_result(result));
        });
    };

    // 初始加载
    Effect::new(move |_| load_stores());

    // 选中店铺变化时：拉取指标；仅主动选择的店铺同步到路由
    Effect::new(move |_| {
        let Some(selection) = selected.get() else {
            return;
        };
        if let Some(store_id) = selection.active_store() {
            router.select_store(store_id.clone());
        }
        let store = selection.store;

        let api = auth.api();
        metrics.set(LoadState::Loading);
        spawn_local(async move {
            let result = api.send(&StoreMetricsRequest { store_id: store.id }).await;
            metrics.set(LoadState::from_result(result));
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.snapshot().to_request() {
            Ok(request) => request,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        spawn_local(async move {
            match api.send(&request).await {
                Ok(created) => {
                    log::info!("store created: {}", created.id);
                    selected.set(Some(StoreSelection::chosen(StoreSummary {
                        id: StoreId::new(created.id),
                        name: request.name,
                        slug: request.slug,
                    })));
                    load_stores();
                }
                Err(e) => set_error_msg.set(Some(e.display_message())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Your Stores"</h2>
                <button on:click=move |_| logout(auth) class="btn btn-outline btn-error btn-sm">
                    "Log out"
                </button>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                <div class="md:col-span-2 card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-base">"Stores"</h3>
                        <LoadStatus state=stores />
                        <Show when=move || stores.with(|s| s.value().is_some_and(Vec::is_empty))>
                            <p class="text-sm text-base-content/60">"No stores yet. Create one."</p>
                        </Show>
                        <ul class="menu w-full p-0">
                            <For
                                each=move || stores.with(|s| s.items())
                                key=|store| store.id.clone()
                                children=move |store| {
                                    let summary = store.summary();
                                    let id = store.id.clone();
                                    let is_selected = move || {
                                        selected.with(|s| s.as_ref().is_some_and(|s| s.store.id == id))
                                    };
                                    view! {
                                        <li>
                                            <a
                                                class=move || if is_selected() { "active" } else { "" }
                                                on:click=move |_| selected.set(Some(StoreSelection::chosen(summary.clone())))
                                            >
                                                <span class="font-medium flex-1">{store.name.clone()}</span>
                                                <span class="text-sm opacity-60">"/" {store.slug.clone()}</span>
                                            </a>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <form class="card-body space-y-2" on:submit=on_create>
                        <h3 class="card-title text-base">"Create store"</h3>
                        <TextField label="Name" value=form.name required=true />
                        <TextField label="Slug" value=form.slug required=true />
                        <label class="form-control w-full">
                            <div class="label py-1">
                                <span class="label-text text-xs">"Description"</span>
                            </div>
                            <textarea
                                rows="3"
                                class="textarea textarea-bordered w-full"
                                on:input=move |ev| form.description.set(event_target_value(&ev))
                                prop:value=form.description
                            ></textarea>
                        </label>
                        <FormAlert error=error_msg />
                        <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "Please wait…" } else { "Create" }}
                        </button>
                    </form>
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|selection| {
                        let store = selection.store;
                        let manage = store.clone();
                        let on_manage = move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            router.select_store(manage.id.clone());
                            if !selected.with_untracked(|s| s.as_ref().is_some_and(StoreSelection::is_chosen)) {
                                selected.set(Some(StoreSelection::chosen(manage.clone())));
                            }
                            router.navigate(ADMIN_PATH);
                        };
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <div class="flex items-center justify-between">
                                        <h3 class="card-title text-base">"Dashboard · " {store.name.clone()}</h3>
                                        <div class="flex gap-4 text-sm">
                                            <Link to=store.storefront_path() class="link link-primary">
                                                "View storefront →"
                                            </Link>
                                            <a href=ADMIN_PATH class="link link-primary" on:click=on_manage>
                                                "Manage store →"
                                            </a>
                                        </div>
                                    </div>
                                    <LoadStatus state=metrics loading_text="Loading metrics…" />
                                    {move || metrics.with(|m| m.value().cloned()).map(|m| view! { <MetricsStats metrics=m /> })}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn MetricsStats(metrics: StoreMetrics) -> impl IntoView {
    view! {
        <div class="stats stats-vertical md:stats-horizontal shadow w-full">
            <div class="stat">
                <div class="stat-title">"Total sales"</div>
                <div class="stat-value text-primary">{metrics.formatted_sales()}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Total customers"</div>
                <div class="stat-value text-success">{metrics.total_customers}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Total orders"</div>
                <div class="stat-value text-secondary">{metrics.total_orders}</div>
            </div>
        </div>
    }
}
