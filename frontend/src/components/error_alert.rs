use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Dismissible error banner shown above a view.
pub struct ErrorAlert;

impl Component for ErrorAlert {
    type Message = ();
    type Properties = ErrorAlertProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ErrorAlert
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_dismiss = props.on_dismiss.clone();

        html! {
            <div class="mb-4 p-4 flex items-start justify-between bg-red-50 border border-red-200 text-red-800 rounded-md" role="alert">
                <p class="text-sm">{ props.message.clone() }</p>
                <button
                    class="ml-4 text-red-600 hover:text-red-800"
                    aria-label="Dismiss"
                    onclick={Callback::from(move |_| on_dismiss.emit(()))}
                >
                    { "✕" }
                </button>
            </div>
        }
    }
}
