//! The single portfolio page: hero, about, skills, projects and contact.

use leptos::prelude::*;

use crate::catalog::PROJECTS;
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::lazy_image::LazyImage;
use crate::components::project_card::ProjectCard;
use crate::components::skill_bar::SkillBar;

/// `(name, percent)` rows of the skills section.
pub const SKILLS: &[(&str, u8)] = &[
    ("JavaScript", 90),
    ("React", 85),
    ("Node.js", 85),
    ("Express.js", 80),
    ("MongoDB", 80),
    ("MySQL", 70),
    ("HTML & CSS", 90),
    ("Git", 75),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>

        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title" data-aos="fade-up">"About Me"</h2>
                <div class="about-content">
                    <div class="about-image" data-aos="fade-right">
                        <LazyImage src="images/about.jpg" alt="Working at a desk" class="lazy"/>
                    </div>
                    <div class="about-text" data-aos="fade-left">
                        <p>
                            "I build full-stack web applications with the MERN stack, from REST APIs \
                             and data models to responsive, accessible interfaces."
                        </p>
                    </div>
                </div>
            </div>
        </section>

        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title" data-aos="fade-up">"Skills"</h2>
                <div class="skills-grid" data-aos="fade-up">
                    {SKILLS.iter().map(|&(name, percent)| view! { <SkillBar name=name percent=percent/> }).collect_view()}
                </div>
            </div>
        </section>

        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title" data-aos="fade-up">"Projects"</h2>
                <div class="swiper projects-swiper">
                    <div class="swiper-wrapper">
                        {PROJECTS.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                    </div>
                    <div class="swiper-pagination"></div>
                    <div class="swiper-button-prev"></div>
                    <div class="swiper-button-next"></div>
                </div>
            </div>
        </section>

        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title" data-aos="fade-up">"Get In Touch"</h2>
                <div class="contact-content" data-aos="fade-up">
                    <ContactForm/>
                </div>
            </div>
        </section>
    }
}
