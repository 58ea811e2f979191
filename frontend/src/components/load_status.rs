use leptos::prelude::*;
use shopflow_shared::LoadState;

/// 后台加载状态指示器
///
/// 加载中显示小型 spinner，失败时显示错误信息；其余状态不渲染任何内容，
/// 不会阻塞列表本身的显示。
#[component]
pub fn LoadStatus<T>(
    /// 被观察的加载状态
    state: RwSignal<LoadState<T>>,
    #[prop(optional, into)] loading_text: Option<String>,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let loading_text = loading_text.unwrap_or_else(|| "Loading…".to_string());

    move || {
        state.with(|state| match state {
            LoadState::Loading => Some(
                view! {
                    <p class="text-sm text-base-content/60 flex items-center gap-2">
                        <span class="loading loading-spinner loading-xs"></span>
                        {loading_text.clone()}
                    </p>
                }
                .into_any(),
            ),
            LoadState::Failed(message) => Some(
                view! {
                    <div role="alert" class="alert alert-warning text-sm py-2">
                        <span>{message.clone()}</span>
                    </div>
                }
                .into_any(),
            ),
            LoadState::Idle | LoadState::Ready(_) => None,
        })
    }
}
