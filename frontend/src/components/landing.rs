use leptos::prelude::*;
use leptos::task::spawn_local;
use shopflow_shared::{AuthMode, Credentials};

use crate::auth::{login, use_auth};
use crate::components::form_state::{FormAlert, TextField};

/// 未登录时的首页：介绍文案 + 登录/注册表单
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div class="flex items-center">
                <div>
                    <h1 class="text-3xl md:text-4xl font-bold mb-3">
                        "Build and run your online store"
                    </h1>
                    <p class="text-base-content/70 mb-6">
                        "Create products, manage customers and orders, and share a beautiful storefront."
                    </p>
                </div>
            </div>
            <AuthForm />
        </div>
    }
}

#[component]
pub fn AuthForm() -> impl IntoView {
    let auth = use_auth();

    let mode = RwSignal::new(AuthMode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let mode = mode.get_untracked();
        let credentials = Credentials {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        spawn_local(async move {
            // 成功后认证信号翻转，路由会直接切换视图
            if let Err(e) = login(auth, mode, credentials).await {
                log::warn!("auth failed: {e}");
                set_error_msg.set(Some(e.display_message()));
                set_is_submitting.set(false);
            }
        });
    };

    view! {
        <div class="card w-full max-w-md mx-auto shadow-2xl bg-base-100">
            <div class="card-body">
                <div role="tablist" class="tabs tabs-boxed mb-2">
                    {AuthMode::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <a
                                    role="tab"
                                    class=move || if mode.get() == m { "tab tab-active" } else { "tab" }
                                    on:click=move |_| mode.set(m)
                                >
                                    {m.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <form class="space-y-3" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <TextField label="Name" value=name required=true />
                    </Show>
                    <TextField label="Email" value=email kind="email" required=true />
                    <TextField label="Password" value=password kind="password" required=true />

                    <FormAlert error=error_msg />

                    <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        {move || {
                            if is_submitting.get() {
                                "Please wait...".to_string()
                            } else {
                                mode.get().submit_label().to_string()
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
