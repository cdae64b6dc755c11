//! Logical routes of the application.
//!
//! Three views addressed by path, one parameterized by city name. Fixed
//! segments match case-insensitively (the original UI linked to both
//! `/weather/...` and `/Weather/...`); the city segment is taken as-is.

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The city browser table
    Cities,
    /// Current conditions + forecast for one city
    Weather { city: String },
    /// The pinned-city dashboard
    Dashboard,
}

impl Route {
    /// Parse a path into a route. Returns `None` for unknown paths.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Cities);
        }

        let mut segments = trimmed.trim_start_matches('/').splitn(2, '/');
        let head = segments.next()?.to_lowercase();
        let rest = segments.next();

        match (head.as_str(), rest) {
            ("dashboard", None) => Some(Route::Dashboard),
            ("weather", Some(city)) if !city.is_empty() => Some(Route::Weather {
                city: city.to_string(),
            }),
            _ => None,
        }
    }

    /// The canonical path for this route.
    pub fn to_path(&self) -> String {
        match self {
            Route::Cities => "/".to_string(),
            Route::Weather { city } => format!("/weather/{}", city),
            Route::Dashboard => "/dashboard".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_the_city_browser() {
        assert_eq!(Route::parse("/"), Some(Route::Cities));
        assert_eq!(Route::parse(""), Some(Route::Cities));
    }

    #[test]
    fn dashboard_parses() {
        assert_eq!(Route::parse("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/Dashboard/"), Some(Route::Dashboard));
    }

    #[test]
    fn weather_parses_with_city() {
        assert_eq!(
            Route::parse("/weather/Ottawa"),
            Some(Route::Weather {
                city: "Ottawa".to_string()
            })
        );
        // Mixed-case fixed segment, as the original links used
        assert_eq!(
            Route::parse("/Weather/Oslo"),
            Some(Route::Weather {
                city: "Oslo".to_string()
            })
        );
    }

    #[test]
    fn weather_without_city_is_unknown() {
        assert_eq!(Route::parse("/weather"), None);
        assert_eq!(Route::parse("/weather/"), None);
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/dashboard/extra"), None);
    }

    #[test]
    fn to_path_round_trips() {
        let routes = [
            Route::Cities,
            Route::Weather {
                city: "Ottawa".to_string(),
            },
            Route::Dashboard,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_path()), Some(route));
        }
    }
}
