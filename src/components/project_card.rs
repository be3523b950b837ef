//! Project slide with a button that opens the detail modal.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::catalog::{ProjectId, ProjectRecord, parse_project_id};
use crate::state::modal::ModalState;

/// Catalog id named by a button's `data-project` attribute. Missing or
/// non-numeric values select nothing.
pub fn requested_project(data_project: Option<&str>) -> Option<ProjectId> {
    data_project.and_then(parse_project_id)
}

#[component]
pub fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let raw = data_project(&ev);
        let Some(id) = requested_project(raw.as_deref()) else {
            leptos::logging::warn!("ignoring project button with data-project {raw:?}");
            return;
        };
        modal.update(|m| {
            if !m.open(id) {
                leptos::logging::warn!("no project with id {id}");
            }
        });
    };

    view! {
        <div class="swiper-slide">
            <article class="project-card">
                <div class="project-content">
                    <h3 class="project-title">{project.title}</h3>
                    <div class="project-tags">
                        {project
                            .technologies
                            .iter()
                            .map(|&tech| view! { <span class="tag">{tech}</span> })
                            .collect_view()}
                    </div>
                    <a href="#" class="btn project-btn" data-project=project.id.to_string() on:click=on_click>
                        "View Details"
                    </a>
                </div>
            </article>
        </div>
    }
}

#[cfg(feature = "csr")]
fn data_project(ev: &leptos::ev::MouseEvent) -> Option<String> {
    use wasm_bindgen::JsCast;

    ev.current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .get_attribute("data-project")
}

#[cfg(not(feature = "csr"))]
fn data_project(_ev: &leptos::ev::MouseEvent) -> Option<String> {
    None
}
