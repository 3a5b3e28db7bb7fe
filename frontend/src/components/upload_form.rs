use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use shared::{Density, DiagnosisResult, ImageType, YesNo};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::utils::{debounce, format_size_mb};
use crate::upload::UploadFlow;
use crate::{Route, api, config};

pub enum Msg {
    FileChosen(Option<GlooFile>),
    ClearFile,

    SetAge(String),
    SetImageType(ImageType),
    SetLump(YesNo),
    SetFamily(YesNo),
    SetDensity(Density),

    Submit,
    UploadSucceeded {
        result: DiagnosisResult,
        elapsed_ms: u64,
    },
    UploadFailed,
    Deliver(DiagnosisResult),

    DismissError(usize),
    DismissAllErrors,
}

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    /// Image types this form instance offers. The enum is authoritative;
    /// embedders pick the subset their backend accepts.
    #[prop_or_else(|| ImageType::ALL.to_vec())]
    pub image_types: Vec<ImageType>,
    /// When set, a successful result is delivered through this callback and
    /// no page transition happens. When absent, the form navigates to the
    /// results route with the payload attached as transient history state.
    #[prop_or_default]
    pub on_result: Option<Callback<DiagnosisResult>>,
    /// Minimum visible processing time. Tests and embedders may shrink it.
    #[prop_or(config::MIN_PROCESSING_MS)]
    pub min_processing_ms: u32,
}

pub struct UploadForm {
    flow: UploadFlow,
    /// The live file handle matching `flow.file()`; only this crosses into
    /// the multipart body.
    file: Option<GlooFile>,
    /// Pending minimum-latency timer. Dropping the component drops (and
    /// cancels) it, so a result is never delivered into a destroyed view.
    delivery: Option<Timeout>,
}

impl Component for UploadForm {
    type Message = Msg;
    type Properties = UploadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut flow = UploadFlow::new(ctx.props().min_processing_ms as u64);
        // The default image type must be one the embedder actually offers.
        if let Some(first) = ctx.props().image_types.first() {
            flow.set_image_type(*first);
        }
        Self {
            flow,
            file: None,
            delivery: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(Some(file)) => {
                if self.flow.select_file(&file.name(), file.size()) {
                    self.file = Some(file);
                } else {
                    self.file = None;
                }
                true
            }
            Msg::FileChosen(None) => false,
            Msg::ClearFile => {
                self.flow.clear_file();
                self.file = None;
                true
            }

            Msg::SetAge(age) => {
                self.flow.set_age(age);
                true
            }
            Msg::SetImageType(image_type) => {
                self.flow.set_image_type(image_type);
                true
            }
            Msg::SetLump(lump) => {
                self.flow.set_lump(lump);
                true
            }
            Msg::SetFamily(family) => {
                self.flow.set_family(family);
                true
            }
            Msg::SetDensity(density) => {
                self.flow.set_density(density);
                true
            }

            Msg::Submit => self.handle_submit(ctx),
            Msg::UploadSucceeded { result, elapsed_ms } => {
                let remaining = self.flow.response_received(elapsed_ms);
                let link = ctx.link().clone();
                self.delivery = Some(Timeout::new(remaining as u32, move || {
                    link.send_message(Msg::Deliver(result));
                }));
                true
            }
            Msg::UploadFailed => {
                self.flow.fail_submit();
                self.delivery = None;
                true
            }
            Msg::Deliver(result) => self.handle_deliver(ctx, result),

            Msg::DismissError(index) => {
                self.flow.dismiss_error(index);
                true
            }
            Msg::DismissAllErrors => {
                self.flow.dismiss_all_errors();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                { self.render_loader() }
                <div class="upload-form">
                    { self.render_file_input(ctx) }
                    { self.render_selected_file(ctx) }
                    { self.render_questionnaire(ctx) }
                    { self.render_errors(ctx) }
                    { self.render_submit(ctx) }
                </div>
            </>
        }
    }
}

impl UploadForm {
    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        if self.flow.begin_submit().is_err() {
            // Busy submits are ignored; validation errors already sit in the
            // flow's error list.
            return true;
        }

        let Some(file) = self.file.clone() else {
            self.flow.fail_submit();
            return true;
        };
        let form = self.flow.form.clone();
        let link = ctx.link().clone();
        let started = Date::now();

        spawn_local(async move {
            match api::predict(&file, &form).await {
                Ok(result) => {
                    let elapsed_ms = (Date::now() - started).max(0.0) as u64;
                    link.send_message(Msg::UploadSucceeded { result, elapsed_ms });
                }
                Err(err) => {
                    log::error!("predict request failed: {err}");
                    link.send_message(Msg::UploadFailed);
                }
            }
        });

        true
    }

    fn handle_deliver(&mut self, ctx: &Context<Self>, result: DiagnosisResult) -> bool {
        self.flow.delivered();
        self.delivery = None;

        match ctx.props().on_result.clone() {
            Some(callback) => callback.emit(result),
            None => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push_with_state(&Route::Results, result);
                } else {
                    log::warn!("upload form mounted outside a router; result dropped");
                }
            }
        }

        true
    }

    fn render_loader(&self) -> Html {
        if !self.flow.is_busy() {
            return html! {};
        }
        html! {
            <div class="fullscreen-loader">
                <div class="loader-dots">
                    <span class="dot delay-0"></span>
                    <span class="dot delay-150"></span>
                    <span class="dot delay-300"></span>
                </div>
                <p class="loader-label">{"Analyzing..."}</p>
            </div>
        }
    }

    fn render_file_input(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let handle_change = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input
                .files()
                .and_then(|list| list.item(0))
                .map(GlooFile::from);
            // Reset so picking the same file again refires the event.
            input.set_value("");
            Msg::FileChosen(file)
        });

        let trigger_file_input = Callback::from(|_| {
            if let Some(input) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("file-upload"))
            {
                if let Ok(element) = input.dyn_into::<web_sys::HtmlElement>() {
                    element.click();
                }
            }
        });

        html! {
            <>
                <input
                    type="file"
                    id="file-upload"
                    accept="image/*"
                    style="display: none;"
                    onchange={handle_change}
                />
                <div
                    class="upload-area"
                    onclick={debounce(300, {
                        let trigger_file_input = trigger_file_input.clone();
                        move || trigger_file_input.emit(())
                    })}
                >
                    <p>{"Click to upload image (Max 10MB)"}</p>
                </div>
            </>
        }
    }

    fn render_selected_file(&self, ctx: &Context<Self>) -> Html {
        let Some(pending) = self.flow.file() else {
            return html! {};
        };
        html! {
            <div class="selected-file">
                <div>
                    <p class="file-name">{ &pending.name }</p>
                    <p class="file-size">{ format_size_mb(pending.size) }</p>
                </div>
                <button
                    class="remove-btn"
                    title="Remove this image"
                    onclick={ctx.link().callback(|_| Msg::ClearFile)}
                >
                    {"\u{2715}"}
                </button>
            </div>
        }
    }

    fn render_questionnaire(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.flow.form;

        let on_age = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetAge(input.value())
        });
        let on_image_type = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetImageType(select.value().parse().unwrap_or_default())
        });
        let on_lump = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetLump(select.value().parse().unwrap_or_default())
        });
        let on_family = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetFamily(select.value().parse().unwrap_or_default())
        });
        let on_density = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetDensity(select.value().parse().unwrap_or_default())
        });

        html! {
            <div class="questionnaire">
                <label>
                    {"Age"}
                    <input
                        type="number"
                        placeholder="Age"
                        value={form.age.clone()}
                        oninput={on_age}
                        required=true
                    />
                </label>

                <label>
                    {"Image Type"}
                    <select onchange={on_image_type}>
                        { for ctx.props().image_types.iter().map(|it| html! {
                            <option
                                value={it.to_string()}
                                selected={*it == form.image_type}
                            >
                                { it.to_string() }
                            </option>
                        })}
                    </select>
                </label>

                <label>
                    {"Presence of Lump"}
                    <select onchange={on_lump}>
                        { for YesNo::ALL.iter().map(|v| html! {
                            <option value={v.to_string()} selected={*v == form.lump}>
                                { if *v == YesNo::Yes { "Lump Present" } else { "No Lump" } }
                            </option>
                        })}
                    </select>
                </label>

                <label>
                    {"Family History"}
                    <select onchange={on_family}>
                        { for YesNo::ALL.iter().map(|v| html! {
                            <option value={v.to_string()} selected={*v == form.family}>
                                { if *v == YesNo::Yes { "Family History" } else { "No Family History" } }
                            </option>
                        })}
                    </select>
                </label>

                <label>
                    {"Breast Density"}
                    <select onchange={on_density}>
                        { for Density::ALL.iter().map(|v| html! {
                            <option value={v.to_string()} selected={*v == form.density}>
                                { v.to_string() }
                            </option>
                        })}
                    </select>
                </label>
            </div>
        }
    }

    fn render_errors(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let errors = self.flow.errors();
        if errors.is_empty() {
            return html! {};
        }
        html! {
            <div class="error-list">
                { for errors.iter().enumerate().map(|(index, message)| html! {
                    <div class="error-message" key={index.to_string()}>
                        <span>{ message }</span>
                        <button
                            class="dismiss-btn"
                            onclick={link.callback(move |_| Msg::DismissError(index))}
                        >
                            {"\u{2715}"}
                        </button>
                    </div>
                })}
                { if errors.len() > 1 {
                    html! {
                        <button
                            class="dismiss-all-btn"
                            onclick={link.callback(|_| Msg::DismissAllErrors)}
                        >
                            {"Dismiss all"}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        }
    }

    fn render_submit(&self, ctx: &Context<Self>) -> Html {
        html! {
            <button
                class="analyze-btn"
                disabled={self.flow.is_busy()}
                onclick={ctx.link().callback(|_| Msg::Submit)}
            >
                { if self.flow.is_busy() { "Processing..." } else { "Upload and Analyze" } }
            </button>
        }
    }
}
