//! Landing section with the typed role line and profile photo.

use leptos::prelude::*;

use crate::components::lazy_image::ProfileImage;
use crate::consts::CV_UNAVAILABLE_MESSAGE;
use crate::util::document;

#[component]
pub fn Hero() -> impl IntoView {
    // No CV is hosted yet.
    let on_download = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        document::alert(CV_UNAVAILABLE_MESSAGE);
    };

    view! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-text" data-aos="fade-right">
                    <p class="hero-greeting">"Hello, welcome to my portfolio"</p>
                    <h2 class="hero-role">
                        <span id="typed-text">"Full-Stack MERN Developer"</span>
                    </h2>
                    <div class="hero-buttons">
                        <a href="#projects" class="btn btn-primary">"View Projects"</a>
                        <a href="#" id="downloadCV" class="btn btn-secondary" on:click=on_download>
                            <i class="fas fa-download"></i>
                            " Download CV"
                        </a>
                    </div>
                </div>
                <div class="hero-image" data-aos="fade-left">
                    <ProfileImage src="images/profile.jpg" alt="Profile photo"/>
                </div>
            </div>
        </section>
    }
}
