//! 认证模块
//!
//! 管理会话与 API 客户端，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use leptos::prelude::*;
use shopflow_shared::auth::authenticate;
use shopflow_shared::{ApiClient, AuthError, AuthMode, ClientConfig, Credentials, Session};

use crate::web::{FetchTransport, LocalTokenStore};

/// 认证上下文
///
/// 持有 API 客户端（内含会话）与响应式认证标记，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    client: StoredValue<ApiClient>,
    authenticated: RwSignal<bool>,
}

impl AuthContext {
    /// 创建认证上下文，启动时从 LocalStorage 读取令牌
    pub fn new() -> Self {
        let config = ClientConfig::from_build_env();
        log::info!("backend: {}", config.base_url());

        let session = Session::new(LocalTokenStore);
        let authenticated = RwSignal::new(session.is_authenticated());
        let client = ApiClient::new(config, session, FetchTransport);

        Self {
            client: StoredValue::new(client),
            authenticated,
        }
    }

    /// API 客户端（克隆共享同一会话与传输）
    pub fn api(&self) -> ApiClient {
        self.client.get_value()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.authenticated.into()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录或注册，成功后保存令牌并切换到已认证状态
pub async fn login(ctx: AuthContext, mode: AuthMode, credentials: Credentials) -> Result<(), AuthError> {
    let api = ctx.api();
    authenticate(&api, mode, &credentials).await?;
    ctx.authenticated.set(true);
    Ok(())
}

/// 注销：清除令牌并整页刷新
pub fn logout(ctx: AuthContext) {
    ctx.api().session().logout();
    ctx.authenticated.set(false);

    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::warn!("reload after logout failed: {e:?}");
        }
    }
}
