use std::rc::Rc;

use workout_tracker_lib::{input::WorkoutInput, log::WorkoutLog, workout::Workout};
use yew::prelude::*;

use super::workout_form::WorkoutForm;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub workouts: Rc<WorkoutLog>,
    pub form_visible: bool,
    pub on_submit: Callback<WorkoutInput>,
    pub on_select: Callback<String>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn Panel(props: &Props) -> Html {
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class="sidebar component-container">
            <ul class="workouts">
                <WorkoutForm visible={props.form_visible} on_submit={props.on_submit.clone()} />
                { for props.workouts.newest_first().map(|w| workout_item(w, &props.on_select)) }
            </ul>
            if !props.workouts.is_empty() {
                <button class="reset-btn" onclick={on_reset}>{"Delete all workouts"}</button>
            }
        </div>
    }
}

fn workout_item(workout: &Workout, on_select: &Callback<String>) -> Html {
    let id = workout.id().to_owned();
    let onclick = on_select.reform(move |_: MouseEvent| id.clone());

    let workout_type = workout.workout_type();
    let rate = workout.rate();
    let metric = workout.metric();

    html! {
        <li class={classes!("workout", format!("workout--{workout_type}"))} data-id={workout.id().to_owned()} {onclick}>
            <h2 class="workout__title">{workout.description().to_owned()}</h2>
            <div class="workout__details">
                <span class="workout__icon">{workout_type.icon()}</span>
                <span class="workout__value">{workout.distance().to_string()}</span>
                <span class="workout__unit">{"km"}</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">{"⏱"}</span>
                <span class="workout__value">{workout.duration().to_string()}</span>
                <span class="workout__unit">{"min"}</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">{rate.icon}</span>
                <span class="workout__value">{format!("{:.1}", rate.value)}</span>
                <span class="workout__unit">{rate.unit}</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">{metric.icon}</span>
                <span class="workout__value">{metric.value.to_string()}</span>
                <span class="workout__unit">{metric.unit}</span>
            </div>
        </li>
    }
}
