use shared::DiagnosisResult;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::chart::{chart_series, render_legend, render_pie};
use crate::components::utils::render_markdown;

#[derive(Properties, PartialEq)]
pub struct ResultsViewProps {
    /// The diagnosis payload, however it was delivered. `None` (direct page
    /// load, reload, or a payload with no `diagnosis`) renders the empty
    /// state and nothing else.
    #[prop_or_default]
    pub data: Option<DiagnosisResult>,
}

#[function_component(ResultsView)]
pub fn results_view(props: &ResultsViewProps) -> Html {
    let data = match &props.data {
        Some(data) if !data.diagnosis.is_empty() => data,
        _ => return render_empty_state(),
    };

    let series = chart_series(&data.diagnosis);

    html! {
        <div class="results-container">
            <h2>{"Analysis Results"}</h2>

            <section class="diagnosis-chart">
                <h3>{"Probability Distribution"}</h3>
                { render_pie(&series) }
                { render_legend(&series) }
            </section>

            { for data.detailed_report.as_deref().map(|report| html! {
                <section class="detailed-report">
                    <h3>{"Detailed Report"}</h3>
                    <div class="prose">{ render_markdown(report) }</div>
                </section>
            })}

            { for data.detailed_recommendations.as_deref().map(|recommendations| html! {
                <section class="recommendations">
                    <h3>{"Recommendations"}</h3>
                    <div class="prose">{ render_markdown(recommendations) }</div>
                </section>
            })}

            <div class="result-actions">
                <Link<Route> to={Route::Upload} classes="action-btn">
                    {"New Analysis"}
                </Link<Route>>
                <Link<Route> to={Route::Chat} classes="action-btn secondary">
                    {"Discuss Results"}
                </Link<Route>>
            </div>
        </div>
    }
}

fn render_empty_state() -> Html {
    html! {
        <div class="empty-state">
            <p>{"No data available. Please upload an image first."}</p>
            <Link<Route> to={Route::Upload} classes="action-btn">
                {"Go to Upload"}
            </Link<Route>>
        </div>
    }
}
