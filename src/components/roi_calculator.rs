use crate::components::error_boundary::use_error_reporter;
use crate::error::SiteError;
use crate::roi::{self, RoiInputs, RoiOutputs, SliderRange};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SliderProps {
    label: AttrValue,
    range: SliderRange,
    value: f64,
    display: AttrValue,
    on_change: Callback<f64>,
}

#[function_component(Slider)]
fn slider(props: &SliderProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        let range = props.range;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(range.clamp(input.value_as_number()));
        })
    };

    html! {
        <label class="roi-slider">
            <span class="roi-slider-label">
                { props.label.clone() }
                <strong>{ props.display.clone() }</strong>
            </span>
            <input
                type="range"
                min={props.range.min.to_string()}
                max={props.range.max.to_string()}
                step={props.range.step.to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </label>
    }
}

fn chart_error(e: impl std::fmt::Debug) -> SiteError {
    SiteError::render("RoiChart", format!("{:?}", e))
}

fn draw_chart(canvas: HtmlCanvasElement, outputs: &RoiOutputs) -> Result<(), SiteError> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| SiteError::render("RoiChart", "canvas has no 2d context"))?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let before = outputs.annual_hours;
    let after = (outputs.annual_hours - outputs.time_saved_hours).max(0.0);
    let bars = [("Today", before, RGBColor(160, 170, 185)), ("With Markwise", after, RGBColor(70, 120, 235))];

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Grading hours per year", ("sans-serif", 18))
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(0..bars.len(), 0.0..before.max(1.0) * 1.1)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|x| bars.get(*x).map(|(label, _, _)| label.to_string()).unwrap_or_default())
        .y_label_formatter(&|y| roi::format_hours(*y))
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, hours, color))| {
            let mut bar = Rectangle::new([(i, 0.0), (i + 1, *hours)], color.filled());
            bar.set_margin(0, 0, 20, 20);
            bar
        }))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
struct RoiChartProps {
    outputs: RoiOutputs,
}

#[function_component(RoiChart)]
fn roi_chart(props: &RoiChartProps) -> Html {
    let canvas_ref = use_node_ref();
    let reporter = use_error_reporter();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |outputs: &RoiOutputs| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(520);
                    canvas.set_height(320);
                    if let Err(e) = draw_chart(canvas, outputs) {
                        match &reporter {
                            Some(reporter) => reporter.report(e),
                            None => log::warn!("{}", e),
                        }
                    }
                }
                || ()
            },
            props.outputs,
        );
    }

    html! {
        <canvas ref={canvas_ref} class="roi-chart" width="520" height="320" />
    }
}

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let inputs = use_state(RoiInputs::default);
    let outputs = roi::calculate(&inputs);

    let update = |apply: fn(&mut RoiInputs, f64)| {
        let inputs = inputs.clone();
        Callback::from(move |value: f64| {
            let mut next = *inputs;
            apply(&mut next, value);
            inputs.set(next.clamped());
        })
    };

    html! {
        <section id="roi" class="roi-calculator">
            <h2>{"What would your department get back?"}</h2>
            <div class="roi-grid">
                <div class="roi-inputs">
                    <Slider
                        label="Teachers"
                        range={RoiInputs::TEACHERS}
                        value={f64::from(inputs.teacher_count)}
                        display={inputs.teacher_count.to_string()}
                        on_change={update(|i, v| i.teacher_count = v as u32)}
                    />
                    <Slider
                        label="Essays per week"
                        range={RoiInputs::ESSAYS}
                        value={f64::from(inputs.essays_per_week)}
                        display={inputs.essays_per_week.to_string()}
                        on_change={update(|i, v| i.essays_per_week = v as u32)}
                    />
                    <Slider
                        label="Minutes per essay"
                        range={RoiInputs::MINUTES}
                        value={inputs.minutes_per_essay}
                        display={format!("{:.0} min", inputs.minutes_per_essay)}
                        on_change={update(|i, v| i.minutes_per_essay = v)}
                    />
                    <Slider
                        label="Hourly rate"
                        range={RoiInputs::RATE}
                        value={inputs.hourly_rate}
                        display={format!("${:.0}/hr", inputs.hourly_rate)}
                        on_change={update(|i, v| i.hourly_rate = v)}
                    />
                </div>
                <div class="roi-outputs">
                    <div class="roi-stat">
                        <span class="roi-value">{ roi::format_hours(outputs.time_saved_hours) }</span>
                        <span class="roi-caption">{"saved per year"}</span>
                    </div>
                    <div class="roi-stat">
                        <span class="roi-value">{ roi::format_currency(outputs.cost_savings) }</span>
                        <span class="roi-caption">{"in staff time"}</span>
                    </div>
                    <div class="roi-stat">
                        <span class="roi-value">{ outputs.equivalent_headcount.to_string() }</span>
                        <span class="roi-caption">
                            { if outputs.equivalent_headcount == 1 { "full-time position" } else { "full-time positions" } }
                        </span>
                    </div>
                    <div class="roi-stat">
                        <span class="roi-value">{ roi::format_hours(outputs.hours_saved_per_teacher) }</span>
                        <span class="roi-caption">{"back for each teacher"}</span>
                    </div>
                    <RoiChart outputs={outputs} />
                </div>
            </div>
            <p class="roi-footnote">
                { format!(
                    "Assumes {} teaching weeks and an {:.0}% reduction in grading time. Headcount uses a ${} salary.",
                    roi::WEEKS_PER_YEAR,
                    roi::TIME_REDUCTION * 100.0,
                    roi::format_currency(roi::ANNUAL_SALARY).trim_start_matches('$'),
                ) }
            </p>
            <style>
                {r#"
                .roi-calculator {
                    position: relative;
                    z-index: 1;
                    padding: 6rem 6vw;
                    color: #c7d0dc;
                }
                .roi-calculator h2 {
                    color: #ffffff;
                }
                .roi-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .roi-slider {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.5rem;
                }
                .roi-slider-label {
                    display: flex;
                    justify-content: space-between;
                }
                .roi-outputs {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .roi-stat {
                    background: rgba(20, 24, 33, 0.8);
                    border-radius: 12px;
                    padding: 1.2rem;
                    display: flex;
                    flex-direction: column;
                }
                .roi-value {
                    font-size: 1.8rem;
                    color: #ffffff;
                    font-weight: 700;
                }
                .roi-chart {
                    grid-column: 1 / -1;
                    max-width: 100%;
                    border-radius: 12px;
                }
                .roi-footnote {
                    font-size: 0.85rem;
                    color: #7d8794;
                }
                @media (max-width: 900px) {
                    .roi-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
