use crate::components::ai_recommendation::AiRecommendationComponent;
use crate::components::resource_table::ResourceTableComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <AiRecommendationComponent />
                <ResourceTableComponent />
            </div>
        }
    }
}
