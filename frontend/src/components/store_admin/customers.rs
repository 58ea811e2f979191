use leptos::prelude::*;
use leptos::task::spawn_local;
use shopflow_shared::protocol::{CreateCustomerRequest, ListCustomersRequest};
use shopflow_shared::{Customer, LoadState, StoreId};

use crate::auth::use_auth;
use crate::components::form_state::{CustomerFormState, FormAlert, TextField};
use crate::components::load_status::LoadStatus;

#[component]
pub fn CustomersPanel(store_id: StoreId) -> impl IntoView {
    let auth = use_auth();
    let store = StoredValue::new(store_id);

    let customers = RwSignal::new(LoadState::<Vec<Customer>>::Idle);
    let form = CustomerFormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = auth.api();
        let store_id = store.get_value();
        customers.update(|c| c.mark_loading());
        spawn_local(async move {
            let result = api.send(&ListCustomersRequest { store_id }).await;
            customers.set(LoadState::from_result(result));
        });
    };

    Effect::new(move |_| load());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let customer = match form.snapshot().to_request() {
            Ok(customer) => customer,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        let request = CreateCustomerRequest {
            store_id: store.get_value(),
            customer,
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

    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <div class="md:col-span-2">
                <LoadStatus state=customers />
                <ul class="divide-y divide-base-300">
                    <For
                        each=move || customers.with(|c| c.items())
                        key=|customer| customer.id.clone()
                        children=move |customer| {
                            let tags = customer.tags.join(", ");
                            view! {
                                <li class="py-3">
                                    <p class="font-medium">
                                        {customer.name.clone()} " "
                                        <span class="text-base-content/60">"(" {customer.email.clone()} ")"</span>
                                    </p>
                                    {(!tags.is_empty())
                                        .then(|| {
                                            view! { <p class="text-xs text-base-content/60">"Tags: " {tags}</p> }
                                        })}
                                </li>
                            }
                        }
                    />
                </ul>
            </div>

            <form class="space-y-1" on:submit=on_create>
                <h4 class="font-medium mb-2">"Add customer"</h4>
                <TextField label="Name" value=form.name required=true />
                <TextField label="Email" value=form.email kind="email" required=true />
                <TextField label="Tags" value=form.tags placeholder="vip, wholesale" />
                <FormAlert error=error_msg />
                <button class="btn btn-primary w-full mt-2" disabled=move || is_submitting.get()>
                    "Create"
                </button>
            </form>
        </div>
    }
}
