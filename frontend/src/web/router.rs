//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 当前视图由 (路径, 认证状态, 当前店铺) 经 `RouteState::resolve` 推导，
//! 本模块只负责维护这三个输入。

use leptos::prelude::*;
use shopflow_shared::{AppRoute, RouteState, StoreId};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::warn!("[Router] pushState failed: {e:?}");
            }
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新。认证状态由外部注入，实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路径（与地址栏同步）
    path: RwSignal<String>,
    /// 选中管理的店铺，仅保存在内存中
    active_store: RwSignal<Option<StoreId>>,
    /// 由路径、认证状态（注入的信号）与当前店铺推导出的路由
    current_route: Memo<AppRoute>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `is_authenticated` - 认证状态信号，由外部注入实现解耦
    fn new(is_authenticated: Signal<bool>) -> Self {
        let path = RwSignal::new(current_path());
        let active_store = RwSignal::new(None::<StoreId>);

        let current_route = Memo::new(move |_| {
            let authenticated = is_authenticated.get();
            path.with(|path| {
                active_store.with(|store| {
                    RouteState::new(path, authenticated, store.as_ref()).resolve()
                })
            })
        });

        Self {
            path,
            active_store,
            current_route,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> Memo<AppRoute> {
        self.current_route
    }

    /// 导航：推入 History 并同步更新路径
    pub fn navigate(&self, path: &str) {
        log::debug!("[Router] navigate -> {path}");
        push_history_state(path);
        self.path.set(path.to_string());
    }

    /// 选择要管理的店铺（不触发导航）
    pub fn select_store(&self, store_id: StoreId) {
        log::debug!("[Router] active store = {store_id}");
        self.active_store.set(Some(store_id));
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let path = self.path;

        let closure = Closure::<dyn Fn()>::new(move || {
            let current = current_path();
            log::debug!("[Router] popstate -> {current}");
            path.set(current);
        });

        if let Some(window) = web_sys::window() {
            if let Err(e) =
                window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            {
                log::warn!("[Router] failed to listen for popstate: {e:?}");
            }
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

/// 站内链接：拦截点击并走 `RouterService::navigate`
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
