use leptos::prelude::*;
use shopflow_shared::ADMIN_PATH;

use crate::web::router::Link;

/// 顶部导航栏，渲染在所有视图之上
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="navbar bg-base-100 rounded-box shadow">
            <div class="flex-1">
                <Link to="/" class="btn btn-ghost text-xl">
                    "ShopFlow"
                </Link>
            </div>
            <nav class="flex-none gap-2">
                <Link to="/" class="btn btn-ghost btn-sm">
                    "Dashboard"
                </Link>
                <Link to=ADMIN_PATH class="btn btn-ghost btn-sm">
                    "Admin"
                </Link>
                // 整页跳转，不经过路由服务
                <a href="/test" class="btn btn-ghost btn-sm">
                    "Connection"
                </a>
            </nav>
        </div>
    }
}
