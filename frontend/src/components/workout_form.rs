use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{input::WorkoutInput, workout::WorkoutType};
use yew::prelude::*;

use crate::config::FORM_HIDE_DELAY_MS;

#[derive(PartialEq, Properties, Clone)]
pub struct FormProps {
    pub visible: bool,
    pub on_submit: Callback<WorkoutInput>,
}

#[function_component]
pub fn WorkoutForm(props: &FormProps) -> Html {
    let input = use_state(WorkoutInput::default);
    let distance_ref = use_node_ref();

    // Keep the closing form out of the layout until its slide-out is done,
    // otherwise the list jumps while it animates.
    let suppressed = use_state(|| false);
    {
        let suppressed = suppressed.clone();
        let distance_ref = distance_ref.clone();
        use_effect_with(props.visible, move |visible| {
            let mut timeout = None;
            if *visible {
                if let Some(field) = distance_ref.cast::<HtmlInputElement>() {
                    let _ = field.focus();
                }
            } else {
                suppressed.set(true);
                timeout = Some(Timeout::new(FORM_HIDE_DELAY_MS, move || suppressed.set(false)));
            }
            move || drop(timeout)
        });
    }

    let on_field = |update: fn(&mut WorkoutInput, String)| {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*input).clone();
            update(&mut next, field.value());
            input.set(next);
        })
    };

    let on_type_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(workout_type) = WorkoutType::parse(&select.value()) {
                input.set(WorkoutInput { workout_type, ..(*input).clone() });
            }
        })
    };

    let onsubmit = {
        let input = input.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*input).clone());

            let mut cleared = (*input).clone();
            cleared.clear();
            input.set(cleared);
        })
    };

    let running = input.workout_type == WorkoutType::Running;
    let row_class = |shown: bool| classes!("form__row", (!shown).then_some("form__row--hidden"));

    html! {
        <form
            class={classes!("form", (!props.visible).then_some("hidden"))}
            style={if *suppressed && !props.visible { "display: none" } else { "" }}
            onsubmit={onsubmit}
        >
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" onchange={on_type_change}>
                    <option value="running" selected={running}>{"Running"}</option>
                    <option value="cycling" selected={!running}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input
                    ref={distance_ref}
                    class="form__input form__input--distance"
                    placeholder="km"
                    value={input.distance.clone()}
                    oninput={on_field(|i, v| i.distance = v)}
                />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    value={input.duration.clone()}
                    oninput={on_field(|i, v| i.duration = v)}
                />
            </div>
            <div class={row_class(running)}>
                <label class="form__label">{"Cadence"}</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    value={input.cadence.clone()}
                    oninput={on_field(|i, v| i.cadence = v)}
                />
            </div>
            <div class={row_class(!running)}>
                <label class="form__label">{"Elev Gain"}</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    value={input.elevation.clone()}
                    oninput={on_field(|i, v| i.elevation = v)}
                />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
