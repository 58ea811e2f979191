//! 公开店铺页
//!
//! 购物车只存在于本视图内；结账固定使用模拟支付。

use leptos::prelude::*;
use leptos::task::spawn_local;
use shopflow_shared::protocol::StorefrontProductsRequest;
use shopflow_shared::{Cart, LoadState, Product, format_money};

use crate::auth::use_auth;
use crate::components::load_status::LoadStatus;

const CHECKOUT_FAILED: &str = "Checkout failed";

#[component]
pub fn StorefrontPage(slug: String) -> impl IntoView {
    let auth = use_auth();
    let slug = StoredValue::new(slug);

    let products = RwSignal::new(LoadState::<Vec<Product>>::Idle);
    let cart = RwSignal::new(Cart::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (message, set_message) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = auth.api();
        let request = StorefrontProductsRequest {
            slug: slug.get_value(),
        };
        products.set(LoadState::Loading);
        spawn_local(async move {
            let result = api.send(&request).await;
            products.set(LoadState::from_result(result));
        });
    });

    let on_checkout = move |_: leptos::ev::MouseEvent| {
        set_is_submitting.set(true);
        set_message.set(None);

        let request = slug.with_value(|slug| {
            cart.with_untracked(|cart| {
                cart.checkout_request(slug, &name.get_untracked(), &email.get_untracked())
            })
        });

        let api = auth.api();
        spawn_local(async move {
            match api.send(&request).await {
                Ok(receipt) => {
                    cart.update(Cart::clear);
                    set_message.set(Some(receipt.confirmation_message()));
                }
                Err(e) => {
                    log::warn!("checkout failed: {e}");
                    set_message.set(Some(CHECKOUT_FAILED.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <div class="md:col-span-2 space-y-3">
                <LoadStatus state=products />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    <For
                        each=move || products.with(|p| p.items())
                        key=|product| product.id.clone()
                        children=move |product| {
                            let cover = product.cover_image().map(str::to_string);
                            let title = product.title.clone();
                            let description = product.description.clone();
                            let price = format_money(product.price);
                            view! {
                                <div class="card bg-base-100 shadow">
                                    {cover.map(|src| {
                                        view! {
                                            <figure>
                                                <img src=src alt=title.clone() class="h-40 w-full object-cover" />
                                            </figure>
                                        }
                                    })}
                                    <div class="card-body p-4">
                                        <p class="font-medium">{title.clone()}</p>
                                        <p class="text-sm text-base-content/60 line-clamp-2">{description}</p>
                                        <div class="card-actions items-center justify-between mt-2">
                                            <span class="font-semibold">{price}</span>
                                            <button
                                                class="btn btn-primary btn-sm"
                                                on:click=move |_| cart.update(|cart| cart.add(&product))
                                            >
                                                "Add"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body space-y-2">
                    <h3 class="card-title text-base">
                        "Cart"
                        <span class="badge badge-neutral">{move || cart.with(Cart::item_count)}</span>
                    </h3>
                    <Show
                        when=move || !cart.with(Cart::is_empty)
                        fallback=|| view! { <p class="text-sm text-base-content/60">"No items"</p> }
                    >
                        <ul class="divide-y divide-base-300">
                            <For
                                each=move || cart.with(|cart| cart.lines().to_vec())
                                key=|line| (line.product_id.clone(), line.quantity)
                                children=move |line| {
                                    let product_id = line.product_id.clone();
                                    view! {
                                        <li class="py-2 flex items-center justify-between gap-2">
                                            <span class="flex-1">{line.title.clone()} " × " {line.quantity}</span>
                                            <span>{line.formatted_total()}</span>
                                            <button
                                                class="btn btn-ghost btn-xs"
                                                on:click=move |_| cart.update(|cart| cart.remove(&product_id))
                                            >
                                                "✕"
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                        <p class="flex justify-between font-semibold">
                            <span>"Subtotal"</span>
                            <span>{move || format_money(cart.with(Cart::subtotal))}</span>
                        </p>
                    </Show>

                    <input
                        placeholder="Name"
                        on:input=move |ev| name.set(event_target_value(&ev))
                        prop:value=name
                        class="input input-bordered input-sm w-full"
                    />
                    <input
                        placeholder="Email"
                        on:input=move |ev| email.set(event_target_value(&ev))
                        prop:value=email
                        class="input input-bordered input-sm w-full"
                    />
                    <button
                        class="btn btn-primary w-full"
                        disabled=move || is_submitting.get() || cart.with(Cart::is_empty)
                        on:click=on_checkout
                    >
                        {move || if is_submitting.get() { "Processing…" } else { "Checkout" }}
                    </button>
                    {move || message.get().map(|msg| view! { <p class="text-sm">{msg}</p> })}
                </div>
            </div>
        </div>
    }
}
