use std::{collections::HashMap, rc::Rc};

use gloo_console::info;
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, HtmlElement, Node};
use workout_tracker_lib::{
    log::WorkoutLog,
    workout::{Coords, Workout},
};
use yew::prelude::*;

use crate::config::{DEFAULT_ZOOM, FALLBACK_CENTER, MAX_ZOOM, TILE_ATTRIBUTION, TILE_URL};

/// A request to move the view. `seq` changes on every request so selecting
/// the same workout twice still pans back to it.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Focus {
    pub coords: Coords,
    pub seq: u32,
}

pub struct MapComponent {
    map: Map,
    container: HtmlElement,
    markers: HashMap<String, Marker>,
    user_marker: Option<Marker>,
    _click_handler: Closure<dyn FnMut(MouseEvent)>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub workouts: Rc<WorkoutLog>,
    pub user_position: Option<Coords>,
    pub focus: Option<Focus>,
    pub on_click: Callback<Coords>,
}

impl MapComponent {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn show_user(&mut self, position: Coords) {
        if let Some(old) = self.user_marker.take() {
            old.remove();
        }

        let popup = Popup::new(&PopupOptions::default(), None);
        popup.set_content(&"<b>Your location</b>".into());

        let marker = Marker::new(&lat_lng(position));
        marker.bind_popup(&popup);
        marker.add_to(&self.map);
        marker.open_popup();

        self.user_marker = Some(marker);
    }

    // Workouts are never edited, so only unseen ids need a marker
    fn add_missing_markers(&mut self, workouts: &WorkoutLog) {
        for workout in workouts.iter() {
            if self.markers.contains_key(workout.id()) {
                continue;
            }

            let marker = make_marker(workout);
            marker.add_to(&self.map);
            marker.open_popup();
            self.markers.insert(workout.id().to_owned(), marker);
        }
    }
}

impl Component for MapComponent {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let container: Element = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_class_name("map");

        let leaflet_map = Map::new_with_element(&container, &MapOptions::default());

        let on_click = ctx.props().on_click.clone();
        let click_handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let pos = event.lat_lng();
            on_click.emit(Coords(pos.lat(), pos.lng()));
        });
        leaflet_map.on("click", click_handler.as_ref());

        Self {
            map: leaflet_map,
            container,
            markers: HashMap::new(),
            user_marker: None,
            _click_handler: click_handler,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let props = ctx.props();
            self.map.set_max_zoom(MAX_ZOOM);
            self.map.set_view(&lat_lng(props.user_position.unwrap_or(FALLBACK_CENTER)), DEFAULT_ZOOM);
            add_tile_layer(&self.map);

            if let Some(position) = props.user_position {
                self.show_user(position);
            }
            self.add_missing_markers(&props.workouts);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.map.invalidate_size(false);
        let props = ctx.props();

        if props.user_position != old_props.user_position {
            if let Some(position) = props.user_position {
                info!(format!("Centering on user at {:?}", position));
                self.map.set_view(&lat_lng(position), DEFAULT_ZOOM);
                self.show_user(position);
            }
        }

        if props.workouts != old_props.workouts {
            self.add_missing_markers(&props.workouts);
        }

        if props.focus != old_props.focus {
            if let Some(focus) = props.focus {
                self.map.set_view(&lat_lng(focus.coords), DEFAULT_ZOOM);
            }
        }

        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div id="map" class="map">
                {self.render_map()}
            </div>
        }
    }
}

fn lat_lng(coords: Coords) -> LatLng {
    LatLng::new(coords.lat(), coords.lng())
}

fn make_marker(workout: &Workout) -> Marker {
    info!(format!("Adding marker for workout {} ({})", workout.id(), workout.description()));

    let opts = PopupOptions::default();
    opts.set_max_width(250.);
    opts.set_min_width(50.);
    opts.set_auto_close(false);
    opts.set_close_on_click(false);
    opts.set_class_name(format!("{}-popup", workout.workout_type()));

    let popup = Popup::new(&opts, None);
    popup.set_content(&workout.popup_text().into());

    let marker = Marker::new(&lat_lng(workout.coords()));
    marker.bind_popup(&popup);
    marker
}

fn add_tile_layer(map: &Map) {
    let opts = TileLayerOptions::new();
    opts.set_max_zoom(MAX_ZOOM);
    opts.set_attribution(TILE_ATTRIBUTION.into());
    opts.set_update_when_idle(true);
    TileLayer::new_options(TILE_URL, &opts).add_to(map);
}
