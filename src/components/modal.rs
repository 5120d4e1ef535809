//! Confirm Modal Component
//!
//! Small confirmation dialog for destructive actions.

use leptos::*;

/// Confirmation dialog shown while `visible` is true.
#[component]
pub fn ConfirmModal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(into)]
    visible: Signal<bool>,
    #[prop(into)]
    on_confirm: Callback<()>,
    #[prop(into)]
    on_cancel: Callback<()>,
    #[prop(default = "Delete")]
    confirm_label: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if !visible.get() {
                return view! {}.into_view();
            }

            let title = title.clone();
            let message = message.clone();

            view! {
                <div class="fixed inset-0 z-40 bg-gray-900/70 flex items-center justify-center px-4">
                    <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm border border-gray-700">
                        <h3 class="text-lg font-semibold mb-2">{title}</h3>
                        <p class="text-sm text-gray-400 mb-6">{message}</p>

                        <div class="flex justify-end space-x-2">
                            <button
                                on:click=move |_| on_cancel.call(())
                                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                            >
                                "Cancel"
                            </button>
                            <button
                                on:click=move |_| on_confirm.call(())
                                class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm font-medium transition-colors"
                            >
                                {confirm_label}
                            </button>
                        </div>
                    </div>
                </div>
            }.into_view()
        }}
    }
}
