//! Learning path advisor: sends a free-text goal to the recommendation
//! endpoint and lists what comes back. Recommended resources open in the
//! shared detail modal without another request.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AiRecommendationComponent;

impl Component for AiRecommendationComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AiRecommendationComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
