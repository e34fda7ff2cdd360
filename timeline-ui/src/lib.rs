//! Yew rendering of the historical timeline block for WebAssembly hosts.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::styles;
    use serde::Deserialize;
    use serde_wasm_bindgen::from_value;
    use timeline_core::{
        Carousel, DialDot, EntranceTransition, Periods, SelectionChange, TimelineConfig,
        TimelineEvent, TimelinePeriod, TimelineWidget, DEFAULT_VIEWPORT_WIDTH,
    };
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, Window};
    use yew::prelude::*;

    /// Reducer wrapper so the core widget can live in `use_reducer`.
    #[derive(PartialEq)]
    struct WidgetState(TimelineWidget);

    enum WidgetAction {
        Select(usize),
        Next,
        Prev,
        GoTo(usize),
        Resize(u32),
        Reset(Periods, TimelineConfig),
    }

    impl Reducible for WidgetState {
        type Action = WidgetAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            let mut widget = self.0.clone();
            let changed = match action {
                WidgetAction::Select(index) => match widget.select(index) {
                    Ok(SelectionChange::Changed { .. }) => true,
                    Ok(SelectionChange::Unchanged) => false,
                    Err(err) => {
                        console::error_1(&JsValue::from_str(&err.to_string()));
                        false
                    }
                },
                WidgetAction::Next => widget.next_page(),
                WidgetAction::Prev => widget.prev_page(),
                WidgetAction::GoTo(page) => {
                    widget.go_to_page(page);
                    widget.carousel() != self.0.carousel()
                }
                WidgetAction::Resize(width) => {
                    widget.set_viewport_width(width);
                    widget.carousel() != self.0.carousel()
                }
                WidgetAction::Reset(periods, config) => widget.sync(periods, config),
            };

            if changed {
                Rc::new(WidgetState(widget))
            } else {
                self
            }
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct TimelineBlockProps {
        pub periods: Periods,
        #[prop_or_default]
        pub class_name: Option<AttrValue>,
        #[prop_or_default]
        pub config: TimelineConfig,
    }

    #[function_component(TimelineBlock)]
    fn timeline_block(props: &TimelineBlockProps) -> Html {
        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let state = {
            let periods = props.periods.clone();
            let config = props.config.clone();
            use_reducer(move || {
                WidgetState(TimelineWidget::with_viewport(
                    periods,
                    config,
                    viewport_width(),
                ))
            })
        };

        {
            let dispatcher = state.dispatcher();
            use_effect_with(
                (props.periods.clone(), props.config.clone()),
                move |(periods, config)| {
                    dispatcher.dispatch(WidgetAction::Reset(periods.clone(), config.clone()));
                    || ()
                },
            );
        }

        {
            let dispatcher = state.dispatcher();
            use_effect_with((), move |_| {
                let listener = Closure::<dyn Fn()>::new(move || {
                    dispatcher.dispatch(WidgetAction::Resize(viewport_width()));
                });
                let window = web_sys::window();
                if let Some(window) = window.as_ref() {
                    if let Err(err) = window.add_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        console::error_1(&err);
                    }
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                }
            });
        }

        let widget = &state.0;
        let on_select = {
            let dispatcher = state.dispatcher();
            Callback::from(move |index: usize| dispatcher.dispatch(WidgetAction::Select(index)))
        };
        let on_page = {
            let dispatcher = state.dispatcher();
            Callback::from(move |action: WidgetAction| dispatcher.dispatch(action))
        };
        let geometry = widget.config().dial;
        let size = geometry.circle_size;
        let center = geometry.center();

        html! {
            <section class={TimelineWidget::section_class(props.class_name.as_deref())}>
                <div class="timeline-header">
                    <span class="timeline-header-accent" />
                    { widget.config().heading.clone() }
                </div>
                <div class="timeline-circle" style={format!("width: {size}px; height: {size}px;")}>
                    <svg width={size.to_string()} height={size.to_string()} class="timeline-period-dots">
                        <circle
                            cx={center.to_string()}
                            cy={center.to_string()}
                            r={geometry.radius.to_string()}
                            fill="none"
                            stroke="#e2e4ea"
                            stroke-width="1.5"
                        />
                        <line x1={center.to_string()} y1="0" x2={center.to_string()} y2={size.to_string()} stroke="#e2e4ea" stroke-width="1" />
                        <line x1="0" y1={center.to_string()} x2={size.to_string()} y2={center.to_string()} stroke="#e2e4ea" stroke-width="1" />
                    </svg>
                    { render_years(widget.years(), widget.transition_epoch(), &widget.config().transition) }
                    { for widget.dial().into_iter().map(|dot| render_dot(dot, geometry.dot_size, on_select.clone())) }
                </div>
                <div class="timeline-slider" key={widget.transition_epoch().to_string()}>
                    { render_carousel(widget.events(), widget.carousel(), widget.config().space_between, on_page) }
                </div>
            </section>
        }
    }

    fn render_years(years: [i32; 2], epoch: u64, transition: &EntranceTransition) -> Html {
        let classes = ["is-inactive", "is-active"];
        html! {
            <div class="timeline-years">
                {
                    for years.iter().zip(classes).enumerate().map(|(child, (year, modifier))| html! {
                        <span
                            key={format!("{epoch}-{child}")}
                            class={classes!("timeline-year", modifier)}
                            style={format!("animation: {};", transition.css_animation(child))}
                        >
                            { *year }
                        </span>
                    })
                }
            </div>
        }
    }

    fn render_dot(dot: DialDot, dot_size: f64, on_select: Callback<usize>) -> Html {
        let index = dot.index;
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
        let style = format!(
            "left: {}px; top: {}px; width: {dot_size}px; height: {dot_size}px;",
            dot.position.left, dot.position.top
        );

        html! {
            <button
                key={dot.label.clone()}
                type="button"
                class={classes!("timeline-dot", dot.active.then_some("is-active"))}
                style={style}
                aria-label={dot.label.clone()}
                onclick={onclick}
            >
                <span>{ dot.ordinal() }</span>
                <span class="timeline-dot-label">{ dot.label.clone() }</span>
            </button>
        }
    }

    fn render_carousel(
        events: &[TimelineEvent],
        carousel: &Carousel,
        space_between: f64,
        on_page: Callback<WidgetAction>,
    ) -> Html {
        let per_view = carousel.per_view();
        let (percent, gap) = carousel.track_offset(space_between);
        let track_style =
            format!("gap: {space_between}px; transform: translateX(calc({percent}% + {gap}px));");
        let card_style = format!(
            "flex: 0 0 calc((100% - {}px) / {per_view});",
            space_between * (per_view as f64 - 1.0)
        );
        let on_prev = {
            let on_page = on_page.clone();
            Callback::from(move |_: MouseEvent| on_page.emit(WidgetAction::Prev))
        };
        let on_next = {
            let on_page = on_page.clone();
            Callback::from(move |_: MouseEvent| on_page.emit(WidgetAction::Next))
        };

        html! {
            <div class="timeline-carousel">
                <div class="timeline-carousel-viewport">
                    <div class="timeline-carousel-track" style={track_style}>
                        { for events.iter().map(|event| render_card(event, &card_style)) }
                    </div>
                </div>
                <button
                    type="button"
                    class="timeline-carousel-prev"
                    disabled={!carousel.can_prev()}
                    onclick={on_prev}
                    aria-label="Previous slide"
                />
                <button
                    type="button"
                    class="timeline-carousel-next"
                    disabled={!carousel.can_next()}
                    onclick={on_next}
                    aria-label="Next slide"
                />
                <div class="timeline-carousel-pagination">
                    {
                        for (0..carousel.page_count()).map(|page| {
                            let on_page = on_page.clone();
                            let onclick = Callback::from(move |_: MouseEvent| on_page.emit(WidgetAction::GoTo(page)));
                            html! {
                                <button
                                    type="button"
                                    class={classes!("timeline-bullet", (page == carousel.page()).then_some("is-active"))}
                                    aria-label={format!("Go to slide {}", page + 1)}
                                    onclick={onclick}
                                />
                            }
                        })
                    }
                </div>
            </div>
        }
    }

    fn render_card(event: &TimelineEvent, style: &str) -> Html {
        html! {
            <article key={event.key()} class="timeline-card" style={style.to_string()}>
                <div class="timeline-card-year">{ event.year }</div>
                <div class="timeline-card-title">{ event.title.clone() }</div>
                <div class="timeline-card-description">{ event.description.clone() }</div>
            </article>
        }
    }

    fn viewport_width() -> u32 {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .map(|width| width.max(0.0) as u32)
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    #[derive(Deserialize, Default)]
    struct MountOptions {
        #[serde(default)]
        class_name: Option<String>,
        #[serde(default)]
        config: Option<TimelineConfig>,
    }

    /// Render the block into the element matched by `selector`.
    ///
    /// `periods` may be `undefined` to use the built-in dataset;
    /// `options` accepts `{ class_name, config }`.
    #[wasm_bindgen]
    pub fn mount_timeline_block(
        selector: &str,
        periods: JsValue,
        options: Option<JsValue>,
    ) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document on window"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("no element matches selector"))?;

        let options: MountOptions = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => from_value(value)?,
            _ => MountOptions::default(),
        };
        let config = options.config.unwrap_or_default();

        let periods = if periods.is_undefined() || periods.is_null() {
            timeline_data::default_periods(&config)
        } else {
            let list: Vec<TimelinePeriod> = from_value(periods)?;
            Periods::new(list, config.reject_duplicate_keys)
        }
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

        yew::Renderer::<TimelineBlock>::with_root_and_props(
            target,
            TimelineBlockProps {
                periods,
                class_name: options.class_name.map(AttrValue::from),
                config,
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_timeline_block;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_timeline_block(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "timeline-ui only supports the wasm32 target",
    ))
}
