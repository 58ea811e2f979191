//! ShopFlow 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web`: 浏览器适配（fetch 传输、LocalStorage 令牌存储、History 路由服务）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层
//!
//! 路由表、HTTP 客户端与会话逻辑都在 `shopflow_shared` 中。

mod auth;
mod components {
    pub mod dashboard;
    pub mod form_state;
    pub mod header;
    pub mod landing;
    pub mod load_status;
    pub mod store_admin;
    pub mod storefront;
}
pub(crate) mod web;

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::header::Header;
use crate::components::landing::LandingPage;
use crate::components::store_admin::StoreAdminPage;
use crate::components::storefront::StorefrontPage;

use leptos::prelude::*;
use shopflow_shared::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Storefront { slug } => view! { <StorefrontPage slug=slug /> }.into_any(),
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Admin { store_id } => view! { <StoreAdminPage store_id=store_id /> }.into_any(),
        AppRoute::Dashboard => view! {
            <DashboardPage />
            <p class="mt-6 text-center text-sm text-base-content/60">
                "Pick a store, then use Manage store to administer it or open its storefront."
            </p>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（从 LocalStorage 读取令牌）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 3. 路由器组件：注入认证信号，视图由路由表推导
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-base-200">
                <div class="max-w-6xl mx-auto p-6 space-y-8">
                    <Header />
                    <RouterOutlet matcher=route_matcher />
                </div>
            </div>
        </Router>
    }
}
