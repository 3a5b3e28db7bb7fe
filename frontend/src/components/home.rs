use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::navbar::Navbar;

struct Feature {
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Image Upload",
        blurb: "Submit an MRI, thermal, or mammogram scan with a short questionnaire.",
    },
    Feature {
        title: "AI Analysis",
        blurb: "A deep-learning model scores the scan against benign and malignant classes.",
    },
    Feature {
        title: "Detailed Reports",
        blurb: "Probability distribution, a written report, and tailored recommendations.",
    },
    Feature {
        title: "AI Chat",
        blurb: "Discuss your results with an assistant trained on screening guidance.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Navbar />
            <section class="hero">
                <span class="hero-badge">{"Advanced AI for Breast Cancer Detection"}</span>
                <h1>{"Breast Cancer Detection with AI"}</h1>
                <p>
                    {"Upload a medical image and a short questionnaire to receive an \
                      AI-generated screening report within seconds."}
                </p>
                <Link<Route> to={Route::Upload} classes="action-btn">
                    {"Get Started"}
                </Link<Route>>
            </section>

            <section class="features">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card" key={feature.title}>
                        <h3>{ feature.title }</h3>
                        <p>{ feature.blurb }</p>
                    </div>
                })}
            </section>
        </div>
    }
}
