use yew::prelude::*;

use crate::components::carousel::ProjectCarousel;
use crate::components::contact_form::ContactForm;
use crate::components::reveal::RiseSection;

pub const PROJECT_IMAGES: &[&str] = &[
    "/projects/1.jpg",
    "/projects/2.jpg",
    "/projects/3.jpg",
    "/projects/4.jpg",
];

struct StoryStep {
    img: &'static str,
    title: &'static str,
    desc: &'static str,
}

const PROCESS_STEPS: &[StoryStep] = &[
    StoryStep { img: "/story/1.png", title: "VISION", desc: "We shape ideas into realities." },
    StoryStep { img: "/story/2.png", title: "DESIGN", desc: "Where aesthetics meet function." },
    StoryStep { img: "/story/3.png", title: "PLANNING", desc: "Precision in every detail." },
    StoryStep { img: "/story/4.png", title: "CONSTRUCTION", desc: "Crafted by experts, built to last." },
    StoryStep { img: "/story/5.png", title: "DELIVERY", desc: "On time. On budget. With trust." },
];

const CORE_VALUES: &[(&str, &str)] = &[
    ("On-Time Delivery", "We respect your time and commitments."),
    ("Transparent Costing", "No hidden charges, no surprises."),
    ("Quality Materials", "Built to last, not just to look good."),
    ("Professional Supervision", "Every stage monitored by experts."),
];

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("https://instagram.com/yourpage", "/icons/instagram.png", "Instagram"),
    ("https://facebook.com/yourpage", "/icons/facebook.png", "Facebook"),
    ("https://twitter.com/yourpage", "/icons/twitter.png", "Twitter"),
    ("https://whatsapp.com/yourpage", "/icons/whatsapp.png", "WhatsApp"),
];

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3920.6020255621133!2d76.65518627504062!3d10.68796698945547!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3ba813a3efec0675%3A0x919176c7727e0942!2sSpace-D%20Infra%20Developers!5e0!3m2!1sen!2sin!4v1768231379816!5m2!1sen!2sin";

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home-page">
            <section id="home" class="hero">
                <img src="/banner.jpg" alt="Space-D Banner" class="hero-background" />
                <div class="hero-dim"></div>
                <div class="hero-content">
                    <p class="hero-brand">{"SPACE-D INFRA DEVELOPERS"}</p>
                    <h1>{"INNOVATE · DESIGN · SHAPE"}</h1>
                    <p class="hero-quote">
                        {"\"Building spaces that stand the test of time, not just today’s trends.\""}
                    </p>
                </div>
            </section>

            <RiseSection class="process">
                <h2 class="section-title">{"OUR PROCESS"}</h2>
                <div class="process-grid">
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                        // the fifth card is desktop-only
                        <div class={classes!("process-card", (i == 4).then_some("desktop-only"))}>
                            <img src={step.img} alt={step.title} loading="lazy" />
                            <div class="process-caption">
                                <h3>{step.title}</h3>
                                <p>{step.desc}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </RiseSection>

            <section id="about" class="about">
                <div class="about-text">
                    <h2 class="section-title">{"ABOUT US"}</h2>
                    <p>
                        {"Our brand stands at the intersection of thoughtful design and reliable construction, dedicated to shaping exceptional spaces for both residential and commercial needs. With a deep commitment to quality, innovation, and precision, we transform ideas into structures that are built to endure and inspire. Every project reflects our belief that great design goes beyond aesthetics, it enhances the way people live, work, and connect. From elegant homes to impactful business environments, we craft spaces that balance functionality, beauty, and lasting value. Our identity represents trust, craftsmanship, and a vision for building a better tomorrow."}
                    </p>
                </div>
                <div class="about-visual">
                    <img src="/about-visual.png" alt="Space-D Brand Visual" loading="lazy" />
                </div>
            </section>

            <section class="values">
                <h2 class="section-title">{"WHY SPACE-D"}</h2>
                <div class="values-grid">
                    { for CORE_VALUES.iter().map(|(title, desc)| html! {
                        <div>
                            <p class="value-title">{*title}</p>
                            <p class="value-desc">{*desc}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="projects" class="projects">
                <h2 class="section-title">{"OUR PROJECTS"}</h2>
                <ProjectCarousel images={PROJECT_IMAGES} />
            </section>

            <RiseSection id="founder" class="founder">
                <div class="founder-photo">
                    <img src="/dr.png" alt="Founder - Space-D Infra Developers" loading="lazy" />
                </div>
                <div class="founder-text">
                    <h2 class="section-title">{"FOUNDER INFO"}</h2>
                    <h3>{"Founder & Managing Director"}</h3>
                    <p>
                        {"Born and based in Kerala, the founder of Space-D Infra Developers carries a deep passion for civil engineering and the art of building meaningful spaces. Driven by a vision to achieve global construction standards, he pursued advanced studies at a reputed university in London, gaining international exposure to modern design, planning, and execution practices."}
                    </p>
                    <p>
                        {"With a strong belief that quality construction transforms lives, his journey blends global knowledge with local understanding. This fusion of international education and on-ground experience in Kerala forms the foundation of Space-D Infra Developers - a company built on precision, integrity, and long-term value creation."}
                    </p>
                </div>
            </RiseSection>

            <section id="contact" class="contact">
                <div class="contact-inner">
                    <h2 class="section-title">{"CONTACT US"}</h2>
                    <div class="contact-intro">
                        <p>{"We promise a transparent process, quality workmanship, and on-time delivery."}</p>
                        <p>{"Free site visit & consultation. We’ll get back to you within 24 hours."}</p>
                    </div>

                    <ContactForm />

                    <div class="office-info">
                        <h3 class="section-title">{"OUR OFFICE"}</h3>
                        <p>{"ADDRESS:"}<br />{"5/1957, Kuzhalmannam Koduvayur Rd, Koduvayur, Kerala 678501"}</p>
                        <p>{"EMAIL: info.spacedinfra@gmail.com"}</p>
                        <p>{"PHONE: +91 9995060708"}</p>
                        <div class="office-map">
                            <iframe
                                src={MAP_EMBED_URL}
                                title="Space-D office location"
                                width="100%"
                                height="100%"
                                style="border: 0;"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                        </div>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|(href, icon, name)| html! {
                                <a href={*href} target="_blank" rel="noopener noreferrer">
                                    <img src={*icon} alt={*name} />
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    .home-page {
                        overflow-x: hidden;
                    }
                    .section-title {
                        color: #FDB614;
                        letter-spacing: 0.1em;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .hero {
                        position: relative;
                        height: 70vh;
                        padding-top: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-dim {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                        transform: translateY(9.5rem);
                    }
                    .hero-brand {
                        color: #FDB614;
                        letter-spacing: 0.3em;
                        font-size: 0.75rem;
                    }
                    .hero-content h1 {
                        font-size: 1.875rem;
                        letter-spacing: 0.05em;
                    }
                    .hero-quote {
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 42rem;
                        margin: 1rem auto 0;
                    }
                    .rise-section {
                        opacity: 0;
                        transform: translateY(80px);
                        transition: opacity 0.9s ease-out, transform 0.9s ease-out;
                    }
                    .rise-section.in-view {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .process,
                    .about,
                    .values,
                    .projects,
                    .founder {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .process-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .process-card {
                        position: relative;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .process-card:hover {
                        transform: translateY(-0.75rem);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .process-card img {
                        width: 100%;
                        height: 220px;
                        object-fit: cover;
                    }
                    .process-caption {
                        position: absolute;
                        inset-inline: 0;
                        bottom: 0;
                        background: rgba(0, 0, 0, 0.8);
                        padding: 1rem;
                        transition: transform 0.3s;
                    }
                    .process-caption h3 {
                        color: #FDB614;
                        letter-spacing: 0.1em;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .process-caption p {
                        font-size: 0.75rem;
                        margin: 0.25rem 0 0;
                    }
                    .desktop-only {
                        display: none;
                    }
                    .about {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                        text-align: center;
                    }
                    .about-text p,
                    .founder-text p {
                        color: rgba(255, 255, 255, 0.8);
                        line-height: 1.7;
                    }
                    .about-visual img {
                        width: 100%;
                        max-height: 420px;
                        object-fit: contain;
                        opacity: 0.8;
                        transition: all 1s ease-out;
                    }
                    .about-visual img:hover {
                        transform: scale(1.05);
                        opacity: 1;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        text-align: center;
                    }
                    .value-title {
                        font-weight: 500;
                    }
                    .value-desc {
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .projects {
                        max-width: 64rem;
                        text-align: center;
                    }
                    .founder {
                        min-height: 100vh;
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    .founder-photo {
                        display: flex;
                        justify-content: center;
                    }
                    .founder-photo img {
                        width: 260px;
                        height: 320px;
                        object-fit: cover;
                        border-radius: 0.75rem;
                        transition: transform 0.7s ease-out;
                    }
                    .founder-photo img:hover {
                        transform: scale(1.05);
                    }
                    .founder-text {
                        text-align: center;
                    }
                    .contact {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2.5rem 1.5rem;
                    }
                    .contact-inner {
                        max-width: 36rem;
                        width: 100%;
                    }
                    .contact-intro {
                        text-align: center;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 2rem;
                    }
                    .office-info {
                        margin-top: 4rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 2.5rem;
                        text-align: center;
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.875rem;
                    }
                    .office-map {
                        margin-top: 1.5rem;
                        height: 14rem;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .social-links {
                        margin-top: 2rem;
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .social-links img {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .hero {
                            height: 100vh;
                        }
                        .hero-content {
                            transform: translateY(10rem);
                        }
                        .process-grid {
                            grid-template-columns: repeat(5, 1fr);
                        }
                        .process-caption {
                            transform: translateY(100%);
                        }
                        .process-card:hover .process-caption {
                            transform: translateY(0);
                        }
                        .desktop-only {
                            display: block;
                        }
                        .about,
                        .founder {
                            grid-template-columns: 1fr 1fr;
                        }
                        .values-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                        .founder-photo img {
                            width: 320px;
                            height: 400px;
                        }
                    }
                "#}
            </style>
        </main>
    }
}
