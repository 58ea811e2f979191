//! 表单状态管理模块
//!
//! 将零散的 signal 整合为结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 转换为 `shopflow_shared::forms` 中的表单模型（校验在那里完成）
//!
//! 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在闭包与组件间传递。

use leptos::prelude::*;
use shopflow_shared::{CustomerForm, ProductForm, StoreForm};

/// 创建店铺表单
#[derive(Clone, Copy)]
pub struct StoreFormState {
    pub name: RwSignal<String>,
    pub slug: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl StoreFormState {
    pub fn new() -> Self {
        let defaults = StoreForm::default();
        Self {
            name: RwSignal::new(defaults.name),
            slug: RwSignal::new(defaults.slug),
            description: RwSignal::new(defaults.description),
        }
    }

    pub fn snapshot(&self) -> StoreForm {
        StoreForm {
            name: self.name.get_untracked(),
            slug: self.slug.get_untracked(),
            description: self.description.get_untracked(),
        }
    }
}

/// 新建商品表单
#[derive(Clone, Copy)]
pub struct ProductFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub category: RwSignal<String>,
    pub images: RwSignal<String>,
}

impl ProductFormState {
    pub fn new() -> Self {
        let defaults = ProductForm::default();
        Self {
            title: RwSignal::new(defaults.title),
            description: RwSignal::new(defaults.description),
            price: RwSignal::new(defaults.price),
            stock: RwSignal::new(defaults.stock),
            category: RwSignal::new(defaults.category),
            images: RwSignal::new(defaults.images),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        let defaults = ProductForm::default();
        self.title.set(defaults.title);
        self.description.set(defaults.description);
        self.price.set(defaults.price);
        self.stock.set(defaults.stock);
        self.category.set(defaults.category);
        self.images.set(defaults.images);
    }

    pub fn snapshot(&self) -> ProductForm {
        ProductForm {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
            category: self.category.get_untracked(),
            images: self.images.get_untracked(),
        }
    }
}

/// 新建顾客表单
#[derive(Clone, Copy)]
pub struct CustomerFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub tags: RwSignal<String>,
}

impl CustomerFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.tags.set(String::new());
    }

    pub fn snapshot(&self) -> CustomerForm {
        CustomerForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            tags: self.tags.get_untracked(),
        }
    }
}

/// 带标签的文本输入框，双向绑定到一个 `RwSignal<String>`
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <div class="label py-1">
                <span class="label-text text-xs">{label}</span>
            </div>
            <input
                type=kind
                placeholder=placeholder
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered input-sm w-full"
            />
        </label>
    }
}

/// 表单内联错误提示
#[component]
pub fn FormAlert(error: ReadSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|msg| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{msg}</span>
                </div>
            }
        })
    }
}
