//! Route map model: the head office, the export destinations and the lines
//! between them. Only data; drawing tiles and markers is left to the host.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coords: LatLng,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            coords: LatLng::new(lat, lng),
        }
    }
}

/// A marker shows its name as a popup while hovered.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coords: LatLng,
    pub popup: String,
    pub popup_open: bool,
}

impl Marker {
    pub fn on_pointer_enter(&mut self) {
        self.popup_open = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.popup_open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f32,
}

pub const ROUTE_STYLE: RouteStyle = RouteStyle {
    color: "red",
    weight: 3,
    opacity: 0.75,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub from: LatLng,
    pub to: LatLng,
    pub style: RouteStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub center: LatLng,
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
    pub fit_padding: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteMap {
    pub hq: Location,
    pub destinations: Vec<Location>,
}

impl RouteMap {
    pub fn new(hq: Location, destinations: Vec<Location>) -> Self {
        Self { hq, destinations }
    }

    pub fn initial_view(&self) -> View {
        View {
            center: self.hq.coords,
            zoom: 4,
            scroll_wheel_zoom: false,
            fit_padding: 40,
        }
    }

    pub fn markers(&self) -> Vec<Marker> {
        std::iter::once(&self.hq)
            .chain(self.destinations.iter())
            .map(|l| Marker {
                coords: l.coords,
                popup: l.name.clone(),
                popup_open: false,
            })
            .collect()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.destinations
            .iter()
            .map(|d| Route {
                from: self.hq.coords,
                to: d.coords,
                style: ROUTE_STYLE,
            })
            .collect()
    }

    /// Smallest box holding every marker.
    pub fn bounds(&self) -> Bounds {
        let start = Bounds {
            south_west: self.hq.coords,
            north_east: self.hq.coords,
        };
        self.destinations.iter().fold(start, |b, d| Bounds {
            south_west: LatLng::new(b.south_west.lat.min(d.coords.lat), b.south_west.lng.min(d.coords.lng)),
            north_east: LatLng::new(b.north_east.lat.max(d.coords.lat), b.north_east.lng.max(d.coords.lng)),
        })
    }
}

impl Default for RouteMap {
    fn default() -> Self {
        Self::new(
            Location::new("Pekalongan, Indonesia", -6.8897, 109.6753),
            vec![
                Location::new("Bangkok, Thailand", 13.7563, 100.5018),
                Location::new("Berlin, Germany", 52.52, 13.405),
                Location::new("Dubai, UAE", 25.2048, 55.2708),
                Location::new("Mumbai, India", 19.076, 72.8777),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_route_per_destination_from_hq() {
        let map = RouteMap::default();
        let routes = map.routes();
        assert_eq!(routes.len(), 4);
        assert!(routes.iter().all(|r| r.from == map.hq.coords));
        assert_eq!(routes[1].to, LatLng::new(52.52, 13.405));
        assert_eq!(routes[0].style.color, "red");
    }

    #[test]
    fn bounds_cover_all_markers() {
        let map = RouteMap::default();
        let bounds = map.bounds();
        assert_eq!(bounds.south_west, LatLng::new(-6.8897, 13.405));
        assert_eq!(bounds.north_east, LatLng::new(52.52, 109.6753));
        assert!(map.markers().iter().all(|m| bounds.contains(m.coords)));
    }

    #[test]
    fn hq_marker_comes_first_and_popups_follow_hover() {
        let mut markers = RouteMap::default().markers();
        assert_eq!(markers.len(), 5);
        assert_eq!(markers[0].popup, "Pekalongan, Indonesia");

        markers[2].on_pointer_enter();
        assert!(markers[2].popup_open);
        markers[2].on_pointer_leave();
        assert!(!markers[2].popup_open);
    }

    #[test]
    fn initial_view_centres_on_hq() {
        let view = RouteMap::default().initial_view();
        assert_eq!(view.center, LatLng::new(-6.8897, 109.6753));
        assert_eq!(view.zoom, 4);
        assert!(!view.scroll_wheel_zoom);
    }
}
