use chrono::Datelike;
use yew::prelude::*;

use crate::components::donate::DonateSection;
use crate::components::navbar::Navbar;
use crate::components::program_card::ProgramCard;
use crate::config::{STAGGER_INCREMENT, STAT_STAGGER_INCREMENT};
use crate::hooks::{use_reveal, use_scroll_offset, use_stagger_reveal};
use crate::parallax::ParallaxMapper;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

const STATS: [(&str, &str); 4] = [
    ("Lives Impacted", "12M+"),
    ("Countries", "54"),
    ("Fund Efficiency", "98%"),
    ("Years Active", "20+"),
];

struct Program {
    title: &'static str,
    icon: &'static str,
    image: &'static str,
    desc: &'static str,
}

const PROGRAMS: [Program; 3] = [
    Program {
        title: "Global Education",
        icon: "📖",
        image: "https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&w=800&q=80",
        desc: "Building schools and providing digital access to remote villages.",
    },
    Program {
        title: "Healthcare",
        icon: "✚",
        image: "https://images.unsplash.com/photo-1532938911079-1b06ac7ceec7?auto=format&fit=crop&w=800&q=80",
        desc: "Mobile clinics and vaccination drives in high-risk zones.",
    },
    Program {
        title: "Clean Water",
        icon: "💧",
        image: "https://images.unsplash.com/photo-1594708767771-a7502209ff51?auto=format&fit=crop&w=800&q=80",
        desc: "Implementing sustainable filtration systems.",
    },
];

#[function_component(Hero)]
fn hero() -> Html {
    let offset_y = use_scroll_offset();
    let parallax = ParallaxMapper::default();

    html! {
        <header class="hero">
            <div class="hero-background" style={parallax.transform(offset_y)}>
                <div class="hero-gradient"></div>
                <img src={HERO_IMAGE} alt="Hero Background" />
            </div>

            <div class="hero-content">
                <div class="hero-copy">
                    <div class="hero-badge intro" style="animation-delay: 0.2s;">
                        <span class="pulse-dot"></span>
                        {"Global Impact Award 2025"}
                    </div>
                    <h1 class="hero-title intro">
                        {"Illuminating"}<br/>
                        <span class="gold-gradient">{"Futures."}</span>
                    </h1>
                    <p class="hero-subtitle intro" style="animation-delay: 0.6s;">
                        {"We bridge the gap between privilege and poverty. Join the Sparkling Foundation in creating sustainable change for children worldwide."}
                    </p>
                    <div class="hero-cta-group intro" style="animation-delay: 0.8s;">
                        <a href="#donate" class="hero-cta">{"Start Donating"}</a>
                        <button class="hero-secondary">{"▶ Watch Our Story"}</button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[function_component(Stats)]
fn stats() -> Html {
    let shown = use_stagger_reveal("impact", STATS.len(), 0.0, STAT_STAGGER_INCREMENT);

    html! {
        <section id="impact" class="stats">
            <div class="stats-card">
                { for STATS.iter().zip(shown).map(|((label, value), revealed)| html! {
                    <div key={*label} class={classes!("stat", "reveal-up", revealed.then(|| "revealed"))}>
                        <h3>{*value}</h3>
                        <p>{*label}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Mission)]
fn mission() -> Html {
    let gallery_revealed = use_reveal("mission-gallery");
    let copy_revealed = use_reveal("mission-copy");

    html! {
        <section id="mission" class="mission">
            <div class="mission-inner">
                <div id="mission-gallery" class={classes!("mission-gallery", "reveal-left", gallery_revealed.then(|| "revealed"))}>
                    <div class="mission-glow"></div>
                    <img class="offset" src="https://images.unsplash.com/photo-1489710437720-ebb67ec84dd2?auto=format&fit=crop&w=800&q=80" alt="Child" loading="lazy" />
                    <img src="https://images.unsplash.com/photo-1593113598332-cd288d649433?auto=format&fit=crop&w=800&q=80" alt="Volunteer" loading="lazy" />
                </div>

                <div id="mission-copy" class={classes!("mission-copy", "reveal-right", copy_revealed.then(|| "revealed"))}>
                    <h4>{"Who We Are"}</h4>
                    <h2>{"Building a Legacy of "}<span class="accent-italic">{"Compassion"}</span></h2>
                    <p>
                        {"At Sparkling Foundation, we believe transparency creates trust. Our sophisticated approach to philanthropy ensures that every dollar you contribute is tracked, managed, and deployed with the highest level of efficiency."}
                    </p>
                    <button class="text-link">{"Read our Annual Report →"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(Programs)]
fn programs() -> Html {
    let shown = use_stagger_reveal("programs", PROGRAMS.len(), 0.0, STAGGER_INCREMENT);

    html! {
        <section id="programs" class="programs">
            <div class="programs-header">
                <h2>{"Our Core Initiatives"}</h2>
                <p>{"Targeted interventions designed for maximum long-term impact."}</p>
            </div>
            <div class="programs-grid">
                { for PROGRAMS.iter().zip(shown).map(|(program, revealed)| html! {
                    <ProgramCard
                        key={program.title}
                        title={program.title}
                        icon={program.icon}
                        image={program.image}
                        desc={program.desc}
                        {revealed}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="logo-mark small">{"S"}</span>
                    <span>{"Sparkling."}</span>
                </div>
                <p>{format!("© {} Sparkling Foundation. All rights reserved.", year)}</p>
                <div class="footer-icons">
                    <span>{"👥"}</span>
                    <span>{"🌐"}</span>
                    <span>{"♥"}</span>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on mount so the hero and nav begin unscrolled.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Navbar />
            <Hero />
            <Stats />
            <Mission />
            <Programs />
            <DonateSection />
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #0F172A;
        background: #F9FAFB;
        -webkit-font-smoothing: antialiased;
    }
    .landing-page h1, .landing-page h2, .landing-page h3 {
        font-family: Georgia, "Times New Roman", serif;
    }

    /* nav */
    .top-nav {
        position: fixed;
        width: 100%;
        z-index: 50;
        padding: 1.5rem 0;
        background: transparent;
        transition: all 0.5s ease;
    }
    .top-nav.scrolled {
        padding: 1rem 0;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(12px);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        text-decoration: none;
    }
    .logo-mark {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #C5A059;
        color: white;
        display: flex;
        align-items: center;
        justify-content: center;
        font-family: Georgia, serif;
        font-weight: 700;
        font-size: 1.25rem;
    }
    .logo-mark.small {
        width: 2rem;
        height: 2rem;
        font-size: 1rem;
        font-style: italic;
    }
    .logo-text {
        font-family: Georgia, serif;
        font-size: 1.5rem;
        font-weight: 700;
        color: white;
    }
    .top-nav.scrolled .logo-text { color: #0F172A; }
    .accent { color: #C5A059; }
    .nav-links {
        display: flex;
        gap: 2rem;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .nav-link {
        color: rgba(255, 255, 255, 0.9);
        text-decoration: none;
        transition: color 0.2s;
    }
    .top-nav.scrolled .nav-link { color: #0F172A; }
    .nav-link:hover { color: #C5A059; }
    .nav-cta {
        padding: 0.625rem 1.5rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 500;
        text-decoration: none;
        background: white;
        color: #0F172A;
        transition: all 0.3s;
    }
    .top-nav.scrolled .nav-cta {
        background: #0F172A;
        color: white;
    }
    .nav-cta:hover, .top-nav.scrolled .nav-cta:hover {
        background: #C5A059;
        color: white;
        transform: translateY(-2px);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #C5A059;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        position: absolute;
        width: 100%;
        background: white;
        border-top: 1px solid #F3F4F6;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding: 1.5rem;
        box-sizing: border-box;
        animation: menuOpen 0.3s ease-out;
    }
    .mobile-link {
        color: #0F172A;
        font-size: 1.125rem;
        font-weight: 500;
        text-decoration: none;
    }
    .mobile-cta {
        display: block;
        text-align: center;
        padding: 0.75rem;
        background: #C5A059;
        color: white;
        border-radius: 0.5rem;
        font-weight: 700;
        text-decoration: none;
    }
    @keyframes menuOpen {
        from { opacity: 0; max-height: 0; }
        to { opacity: 1; max-height: 30rem; }
    }

    /* hero */
    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        z-index: 0;
        will-change: transform;
    }
    .hero-background img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-gradient {
        position: absolute;
        inset: 0;
        z-index: 1;
        background: linear-gradient(to right, rgba(15, 23, 42, 0.9), rgba(15, 23, 42, 0.6), transparent);
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        width: 100%;
        margin: 0 auto;
        padding: 5rem 1.5rem 0;
    }
    .hero-copy { max-width: 40rem; }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(4px);
        color: white;
        font-size: 0.75rem;
        letter-spacing: 0.05em;
        text-transform: uppercase;
        margin-bottom: 1.5rem;
    }
    .pulse-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #C5A059;
        animation: pulse 2s infinite;
    }
    .hero-title {
        font-size: 4.5rem;
        font-weight: 700;
        color: white;
        line-height: 1.1;
        margin: 0 0 1.5rem;
    }
    .gold-gradient {
        background: linear-gradient(to right, #C5A059, #FEF08A);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle {
        color: #D1D5DB;
        font-size: 1.25rem;
        font-weight: 300;
        line-height: 1.6;
        max-width: 32rem;
        margin-bottom: 2.5rem;
        animation-duration: 1s;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .hero-cta {
        padding: 1rem 2rem;
        background: #C5A059;
        color: white;
        font-weight: 600;
        border-radius: 9999px;
        text-decoration: none;
        box-shadow: 0 20px 25px rgba(197, 160, 89, 0.2);
        transition: all 0.3s;
    }
    .hero-cta:hover {
        background: white;
        color: #0F172A;
    }
    .hero-secondary {
        padding: 1rem 2rem;
        border: 1px solid rgba(255, 255, 255, 0.3);
        background: transparent;
        color: white;
        font-weight: 500;
        border-radius: 9999px;
        cursor: pointer;
        transition: all 0.3s;
    }
    .hero-secondary:hover { background: rgba(255, 255, 255, 0.1); }
    .intro {
        opacity: 0;
        animation: introUp 0.8s ease-out forwards;
    }
    @keyframes introUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }

    /* one-shot reveals */
    .reveal-up, .reveal-left, .reveal-right, .reveal-scale {
        opacity: 0;
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .reveal-up { transform: translateY(20px); }
    .reveal-left { transform: translateX(-50px); }
    .reveal-right { transform: translateX(50px); }
    .reveal-scale { transform: scale(0.9); }
    .reveal-up.revealed, .reveal-left.revealed, .reveal-right.revealed, .reveal-scale.revealed {
        opacity: 1;
        transform: none;
    }

    /* stats */
    .stats {
        position: relative;
        z-index: 20;
        margin-top: -5rem;
        padding: 0 1rem;
    }
    .stats-card {
        max-width: 80rem;
        margin: 0 auto;
        background: white;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        padding: 3rem;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .stat {
        text-align: center;
        padding: 0 1rem;
    }
    .stat + .stat { border-left: 1px solid #F3F4F6; }
    .stat h3 {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 0 0.5rem;
    }
    .stat p {
        font-size: 0.875rem;
        color: #6B7280;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        font-weight: 500;
        margin: 0;
    }

    /* mission */
    .mission {
        padding: 6rem 0;
        overflow: hidden;
    }
    .mission-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .mission-gallery {
        position: relative;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .mission-gallery img {
        width: 100%;
        height: 16rem;
        object-fit: cover;
        border-radius: 1rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .mission-gallery img.offset { transform: translateY(2rem); }
    .mission-glow {
        position: absolute;
        top: -1rem;
        left: -1rem;
        width: 6rem;
        height: 6rem;
        border-radius: 9999px;
        background: rgba(197, 160, 89, 0.1);
        filter: blur(40px);
    }
    .mission-copy h4 {
        color: #C5A059;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        font-size: 0.875rem;
        margin: 0 0 1rem;
    }
    .mission-copy h2 {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 0 1.5rem;
    }
    .accent-italic {
        font-style: italic;
        color: #C5A059;
    }
    .mission-copy p {
        color: #4B5563;
        line-height: 1.7;
        margin-bottom: 1.5rem;
    }
    .text-link {
        background: none;
        border: none;
        padding: 0;
        color: #0F172A;
        font-weight: 600;
        cursor: pointer;
        transition: color 0.2s;
    }
    .text-link:hover { color: #C5A059; }

    /* programs */
    .programs {
        padding: 6rem 1.5rem;
        background: white;
    }
    .programs-header {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 4rem;
    }
    .programs-header h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin: 0 0 1rem;
    }
    .programs-header p { color: #6B7280; }
    .programs-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .program-card {
        position: relative;
        overflow: hidden;
        border-radius: 1rem;
        cursor: pointer;
        height: 450px;
    }
    .program-card.reveal-up { transform: translateY(60px); }
    .program-card.reveal-up.revealed { transform: none; }
    .program-card img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s;
    }
    .program-card:hover img { transform: scale(1.1); }
    .program-shade {
        position: absolute;
        inset: 0;
        z-index: 10;
        background: rgba(0, 0, 0, 0.4);
        transition: background 0.5s;
    }
    .program-card:hover .program-shade { background: rgba(0, 0, 0, 0.2); }
    .program-body {
        position: absolute;
        bottom: 0;
        left: 0;
        z-index: 20;
        width: 100%;
        padding: 2rem;
        box-sizing: border-box;
        transform: translateY(1rem);
        transition: transform 0.5s;
    }
    .program-card:hover .program-body { transform: translateY(0); }
    .program-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
        backdrop-filter: blur(12px);
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        margin-bottom: 1rem;
    }
    .program-body h3 {
        font-size: 1.5rem;
        color: white;
        font-weight: 700;
        margin: 0 0 0.5rem;
    }
    .program-body p {
        color: rgba(255, 255, 255, 0.8);
        font-size: 0.875rem;
        opacity: 0;
        transition: opacity 0.5s 0.1s;
    }
    .program-card:hover .program-body p { opacity: 1; }

    /* donate */
    .donate-section {
        position: relative;
        padding: 6rem 1.5rem;
        background: #0F172A;
        overflow: hidden;
    }
    .donate-glow {
        position: absolute;
        top: 0;
        right: 0;
        width: 50%;
        height: 100%;
        background: linear-gradient(to left, rgba(51, 65, 85, 0.2), transparent);
    }
    .donate-inner {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .donate-title {
        font-size: 3rem;
        font-weight: 700;
        color: white;
        margin: 0 0 1.5rem;
    }
    .donate-panel {
        background: white;
        border-radius: 1.5rem;
        padding: 3rem;
        margin-top: 3rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .frequency-toggle {
        display: flex;
        justify-content: center;
        gap: 1rem;
        width: fit-content;
        margin: 0 auto 2rem;
        padding: 0.25rem;
        border-radius: 9999px;
        background: #F3F4F6;
    }
    .frequency-option {
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        border: none;
        background: transparent;
        color: #6B7280;
        font-size: 0.875rem;
        font-weight: 500;
        cursor: pointer;
        transition: all 0.2s;
    }
    .frequency-option.active {
        background: #0F172A;
        color: white;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .amount-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .amount-option {
        padding: 1rem 0;
        border-radius: 0.75rem;
        border: 2px solid #F3F4F6;
        background: white;
        color: #0F172A;
        font-family: Georgia, serif;
        font-size: 1.25rem;
        font-weight: 700;
        cursor: pointer;
        transition: all 0.3s;
    }
    .amount-option:hover { border-color: #C5A059; }
    .amount-option.active {
        border-color: #C5A059;
        background: #C5A059;
        color: white;
    }
    .custom-amount {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 2rem;
        color: #6B7280;
        font-size: 0.875rem;
    }
    .custom-amount input {
        flex: 1;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        border: 2px solid #F3F4F6;
        font-size: 1rem;
    }
    .custom-amount input.active { border-color: #C5A059; }
    .custom-amount input.invalid { border-color: #DC2626; }
    .impact-box {
        background: #F9FAFB;
        border: 1px solid #F3F4F6;
        border-radius: 0.75rem;
        padding: 1.5rem;
        margin-bottom: 2rem;
        text-align: left;
    }
    .impact-box h4 {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
        margin: 0 0 0.5rem;
    }
    .impact-check { color: #C5A059; }
    .impact-box p {
        color: #4B5563;
        font-size: 0.875rem;
        margin: 0;
    }
    .donate-button {
        width: 100%;
        padding: 1rem;
        border: none;
        border-radius: 0.75rem;
        background: #0F172A;
        color: white;
        font-weight: 700;
        font-size: 1.125rem;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: background 0.2s;
    }
    .donate-button:hover { background: #C5A059; }

    /* footer */
    .site-footer {
        background: #0F172A;
        color: rgba(255, 255, 255, 0.6);
        padding: 3rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .footer-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1.5rem;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-family: Georgia, serif;
        font-size: 1.25rem;
        font-weight: 700;
        color: white;
    }
    .footer-inner p { font-size: 0.875rem; }
    .footer-icons {
        display: flex;
        gap: 1.5rem;
        cursor: pointer;
    }

    @media (max-width: 768px) {
        .nav-links, .nav-cta { display: none; }
        .burger-menu { display: block; }
        .hero-title { font-size: 3rem; }
        .stats-card { grid-template-columns: repeat(2, 1fr); padding: 2rem; }
        .stat + .stat { border-left: none; }
        .mission-inner { grid-template-columns: 1fr; }
        .programs-grid { grid-template-columns: 1fr; }
        .amount-grid { grid-template-columns: repeat(2, 1fr); }
        .donate-panel { padding: 2rem; }
        .footer-inner { flex-direction: column; }
    }
"#;
