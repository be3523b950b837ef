//! Project-detail modal.
//!
//! Shown while `ModalState` is open. Closes on the close button, on a click
//! landing on the backdrop itself, and on Escape (handled by the window
//! keydown listener in `app`). While open, body scrolling is locked.

use leptos::prelude::*;

use crate::catalog::ProjectRecord;
use crate::state::modal::ModalState;

#[component]
pub fn ProjectModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        let target_is_root = is_self_target(&ev);
        modal.update(|m| {
            m.on_backdrop_click(target_is_root);
        });
    };

    view! {
        <div id="projectModal" class="modal" class:active=move || modal.get().is_open() on:click=on_backdrop>
            <div class="modal-content">
                <button id="modalClose" class="modal-close" type="button" aria-label="Close" on:click=move |_| modal.update(ModalState::close)>
                    <i class="fas fa-times"></i>
                </button>
                <div id="modalBody" class="modal-body">
                    {move || modal.get().project().map(|project| view! { <ProjectDetail project=project/> })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectDetail(project: &'static ProjectRecord) -> impl IntoView {
    view! {
        <h2>{project.title}</h2>
        <p class="modal-description">{project.description}</p>
        <div class="modal-section">
            <h3>"Technologies"</h3>
            <div class="project-tags">
                {project.technologies.iter().map(|&tech| view! { <span class="tag">{tech}</span> }).collect_view()}
            </div>
        </div>
        <div class="modal-section">
            <h3>"Key Features"</h3>
            <ul class="feature-list">
                {project
                    .features
                    .iter()
                    .map(|&feature| {
                        view! {
                            <li>
                                <i class="fas fa-check"></i>
                                " "
                                {feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
        <div class="modal-links">
            <a href=project.live class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                <i class="fas fa-external-link-alt"></i>
                " Live Demo"
            </a>
            <a href=project.github class="btn btn-secondary" target="_blank" rel="noopener noreferrer">
                <i class="fab fa-github"></i>
                " View Code"
            </a>
        </div>
    }
}

#[cfg(feature = "csr")]
fn is_self_target(ev: &leptos::ev::MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => wasm_bindgen::JsValue::from(target) == wasm_bindgen::JsValue::from(current),
        _ => false,
    }
}

#[cfg(not(feature = "csr"))]
fn is_self_target(_ev: &leptos::ev::MouseEvent) -> bool {
    false
}
