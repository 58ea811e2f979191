use leptos::prelude::*;
use leptos::task::spawn_local;
use shopflow_shared::protocol::{CreateProductRequest, DeleteProductRequest, ListProductsRequest};
use shopflow_shared::{LoadState, Product, ProductId, StoreId, format_money};

use crate::auth::use_auth;
use crate::components::form_state::{FormAlert, ProductFormState, TextField};
use crate::components::load_status::LoadStatus;

#[component]
pub fn ProductsPanel(store_id: StoreId) -> impl IntoView {
    let auth = use_auth();
    let store = StoredValue::new(store_id);

    let products = RwSignal::new(LoadState::<Vec<Product>>::Idle);
    let form = ProductFormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = auth.api();
        let store_id = store.get_value();
        products.update(|p| p.mark_loading());
        spawn_local(async move {
            let result = api.send(&ListProductsRequest { store_id }).await;
            products.set(LoadState::from_result(result));
        });
    };

    Effect::new(move |_| load());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let product = match form.snapshot().to_request() {
            Ok(product) => product,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        let request = CreateProductRequest {
            store_id: store.get_value(),
            product,
        };
        spawn_local(async move {
            match api.send(&request).await {
                Ok(_) => {
                    form.reset();
                    load();
                }
                Err(e) => set_error_msg.set(Some(e.display_message())),
            }
            set_is_submitting.set(false);
        });
    };

    let on_delete = move |product_id: ProductId| {
        let confirmed = window()
            .confirm_with_message("Delete product?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let api = auth.api();
        spawn_local(async move {
            match api.send(&DeleteProductRequest { product_id }).await {
                Ok(_) => load(),
                Err(e) => set_error_msg.set(Some(e.display_message())),
            }
        });
    };

    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <div class="md:col-span-2">
                <LoadStatus state=products />
                <ul class="divide-y divide-base-300">
                    <For
                        each=move || products.with(|p| p.items())
                        key=|product| product.id.clone()
                        children=move |product| {
                            let id = product.id.clone();
                            view! {
                                <li class="py-3 flex items-center justify-between">
                                    <div>
                                        <p class="font-medium">{product.title.clone()}</p>
                                        <p class="text-sm text-base-content/60">
                                            {format_money(product.price)} " • Stock " {product.stock}
                                        </p>
                                    </div>
                                    <button
                                        on:click=move |_| on_delete(id.clone())
                                        class="btn btn-ghost btn-sm text-error"
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>

            <form class="space-y-1" on:submit=on_create>
                <h4 class="font-medium mb-2">"Add product"</h4>
                <TextField label="Title" value=form.title required=true />
                <TextField label="Description" value=form.description />
                <TextField label="Price" value=form.price kind="number" />
                <TextField label="Stock" value=form.stock kind="number" />
                <TextField label="Category" value=form.category />
                <TextField label="Images" value=form.images placeholder="https://…, https://…" />
                <FormAlert error=error_msg />
                <button class="btn btn-primary w-full mt-2" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Saving…" } else { "Create" }}
                </button>
            </form>
        </div>
    }
}
