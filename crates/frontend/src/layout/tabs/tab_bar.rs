use super::view_model::NavigationVm;
use crate::shared::icons::icon;
use contracts::shared::features::FeatureDescriptor;
use leptos::prelude::*;

#[component]
fn FeatureTab(feature: FeatureDescriptor, vm: NavigationVm) -> impl IntoView {
    let feature_id = feature.id.clone();
    let is_active = Memo::new(move |_| {
        vm.state.with(|s| s.active_feature_id() == Some(feature_id.as_str()))
    });

    let id_for_click = feature.id.clone();
    let on_click = move |_| vm.select(&id_for_click);

    let tab_title = feature.name.clone();

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=on_click
            data-feature=feature.route_segment
            title=tab_title
        >
            <span class="tab__icon">{icon(&feature.icon)}</span>
            <span>{feature.name}</span>
        </div>
    }
}

/// One tab per feature, in resolved order
#[component]
pub fn TabBar(vm: NavigationVm) -> impl IntoView {
    view! {
        <div class="tabs">
            <For
                each=move || vm.state.with(|s| s.features().to_vec())
                key=|feature| feature.id.clone()
                children=move |feature: FeatureDescriptor| view! { <FeatureTab feature=feature vm=vm /> }
            />
        </div>
    }
}
