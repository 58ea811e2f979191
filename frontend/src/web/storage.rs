//! LocalStorage 令牌存储
//!
//! 令牌以原始字符串形式保存在 `auth_token` 键下（不做 JSON 编码），
//! 与页面上其他脚本写入的值保持兼容。

use gloo_storage::{LocalStorage, Storage};
use shopflow_shared::{AUTH_TOKEN_KEY, SessionError, TokenStore};

/// 基于浏览器 LocalStorage 的 `TokenStore`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(AUTH_TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        LocalStorage::raw()
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|e| SessionError::Persist(format!("{e:?}")))
    }

    fn clear(&self) {
        LocalStorage::delete(AUTH_TOKEN_KEY);
    }
}
