use std::rc::Rc;

use chrono::Local;
use components::{
    map_component::{Focus, MapComponent},
    panel::Panel,
};
use gloo_console::{error, info};
use gloo_utils::window;
use storage::LocalStore;
use wasm_bindgen_futures::spawn_local;
use workout_tracker_lib::{input::WorkoutInput, log::WorkoutLog, store::WorkoutRepository, workout::Coords};
use yew::prelude::*;

mod components;
mod config;
mod geolocation;
mod storage;

enum Msg {
    Located(Coords),
    LocationDenied,
    MapClicked(Coords),
    SubmitWorkout(WorkoutInput),
    SelectWorkout(String),
    Reset,
}

struct App {
    workouts: Rc<WorkoutLog>,
    repository: WorkoutRepository<LocalStore>,
    clicked: Option<Coords>,
    form_visible: bool,
    user_position: Option<Coords>,
    focus: Option<Focus>,
}

impl App {
    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.workouts) {
            error!(format!("Failed to save workouts: {err}"));
        }
    }

    fn add_workout(&mut self, input: WorkoutInput) {
        let Some(coords) = self.clicked else {
            error!("Workout submitted without a map location");
            return;
        };

        match input.parse(coords, Local::now().fixed_offset()) {
            Ok(workout) => {
                info!(format!("New workout: {}", workout.description()));
                Rc::make_mut(&mut self.workouts).push(workout);
                self.persist();
            }
            Err(err) => {
                info!(format!("Rejected workout input: {err}"));
                alert(config::INVALID_INPUT_MESSAGE);
            }
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(coords) => link.send_message(Msg::Located(coords)),
                Err(err) => {
                    error!(err);
                    link.send_message(Msg::LocationDenied);
                }
            }
        });

        let (repository, loaded) = WorkoutRepository::open(LocalStore::new());
        let workouts = loaded.unwrap_or_else(|err| {
            error!(format!("Failed to load saved workouts: {err}"));
            WorkoutLog::new()
        });
        info!(format!("Loaded {} workouts", workouts.len()));

        Self {
            workouts: Rc::new(workouts),
            repository,
            clicked: None,
            form_visible: false,
            user_position: None,
            focus: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Located(coords) => {
                self.user_position = Some(coords);
            }
            Msg::LocationDenied => {
                alert(config::LOCATION_DENIED_MESSAGE);
            }
            Msg::MapClicked(coords) => {
                self.clicked = Some(coords);
                self.form_visible = true;
            }
            Msg::SubmitWorkout(input) => {
                self.form_visible = false;
                self.add_workout(input);
            }
            Msg::SelectWorkout(id) => {
                let Some(workout) = self.workouts.find(&id) else {
                    return false;
                };
                let seq = self.focus.map_or(0, |f| f.seq.wrapping_add(1));
                self.focus = Some(Focus { coords: workout.coords(), seq });
            }
            Msg::Reset => {
                if let Err(err) = self.repository.clear() {
                    error!(format!("Failed to clear workouts: {err}"));
                }
                if let Err(err) = window().location().reload() {
                    error!(err);
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <Panel
                    workouts={self.workouts.clone()}
                    form_visible={self.form_visible}
                    on_submit={link.callback(Msg::SubmitWorkout)}
                    on_select={link.callback(Msg::SelectWorkout)}
                    on_reset={link.callback(|()| Msg::Reset)}
                />
                <MapComponent
                    workouts={self.workouts.clone()}
                    user_position={self.user_position}
                    focus={self.focus}
                    on_click={link.callback(Msg::MapClicked)}
                />
            </>
        }
    }
}

fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        error!(err);
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
