//! Screen routes
//!
//! Routes use the same paths as the web admin panel, so a route copied from
//! the browser (`/adm/documento/edit/5`) opens the same screen here.

use super::RequirementKey;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A screen and the record identifier it was opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    DocumentList,
    /// `None` opens an empty record for creation
    DocumentEditor(Option<i64>),
    RequirementList,
    /// `None` opens an empty association for creation
    RequirementEditor(Option<RequirementKey>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),
    #[error("invalid record identifier {value:?} in route {route}")]
    InvalidId { value: String, route: String },
}

impl Route {
    pub fn is_editor(&self) -> bool {
        matches!(self, Self::DocumentEditor(_) | Self::RequirementEditor(_))
    }

    /// The list screen this route returns to
    pub fn list_route(&self) -> Route {
        match self {
            Self::DocumentList | Self::DocumentEditor(_) => Self::DocumentList,
            Self::RequirementList | Self::RequirementEditor(_) => Self::RequirementList,
        }
    }

    /// Screen title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Self::DocumentList => "Documents",
            Self::DocumentEditor(None) => "New document",
            Self::DocumentEditor(Some(_)) => "Edit document",
            Self::RequirementList => "Required documents",
            Self::RequirementEditor(None) => "New required document",
            Self::RequirementEditor(Some(_)) => "Edit required document",
        }
    }
}

/// Parse an identifier segment. Zero and negatives never name a stored record.
fn parse_id(value: &str, route: &str) -> Result<i64, RouteError> {
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RouteError::InvalidId {
            value: value.to_string(),
            route: route.to_string(),
        }),
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        let lowered: Vec<String> = segments.iter().map(|s| s.to_ascii_lowercase()).collect();
        let lowered: Vec<&str> = lowered.iter().map(String::as_str).collect();

        match lowered.as_slice() {
            ["adm", "documento"] => Ok(Self::DocumentList),
            ["adm", "documento", "new"] => Ok(Self::DocumentEditor(None)),
            ["adm", "documento", "edit", _] => {
                Ok(Self::DocumentEditor(Some(parse_id(segments[3], s)?)))
            }
            ["adm" | "dashboard", "documentonecessario"] => Ok(Self::RequirementList),
            ["adm" | "dashboard", "documentonecessario", "new"] => {
                Ok(Self::RequirementEditor(None))
            }
            ["adm" | "dashboard", "documentonecessario", "edit", _, _] => {
                Ok(Self::RequirementEditor(Some(RequirementKey {
                    document_type_id: parse_id(segments[3], s)?,
                    internship_type_id: parse_id(segments[4], s)?,
                })))
            }
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentList => write!(f, "/adm/documento"),
            Self::DocumentEditor(None) => write!(f, "/adm/documento/new"),
            Self::DocumentEditor(Some(id)) => write!(f, "/adm/documento/edit/{id}"),
            Self::RequirementList => write!(f, "/adm/documentonecessario"),
            Self::RequirementEditor(None) => write!(f, "/adm/documentonecessario/new"),
            Self::RequirementEditor(Some(key)) => write!(
                f,
                "/adm/documentonecessario/edit/{}/{}",
                key.document_type_id, key.internship_type_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_routes() {
        assert_eq!("/adm/documento".parse(), Ok(Route::DocumentList));
        assert_eq!("/adm/documento/new".parse(), Ok(Route::DocumentEditor(None)));
        assert_eq!(
            "/adm/documento/edit/5".parse(),
            Ok(Route::DocumentEditor(Some(5)))
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_ignores_trailing_slash() {
        assert_eq!(
            "/adm/Documento/edit/5/".parse(),
            Ok(Route::DocumentEditor(Some(5)))
        );
    }

    #[test]
    fn test_parse_requirement_edit_route() {
        assert_eq!(
            "/adm/documentonecessario/edit/3/7".parse(),
            Ok(Route::RequirementEditor(Some(RequirementKey {
                document_type_id: 3,
                internship_type_id: 7,
            })))
        );
    }

    #[test]
    fn test_dashboard_prefix_maps_to_requirement_list() {
        assert_eq!(
            "/dashboard/documentonecessario".parse(),
            Ok(Route::RequirementList)
        );
    }

    #[test]
    fn test_zero_id_is_rejected() {
        let result: Result<Route, _> = "/adm/documento/edit/0".parse();
        assert!(matches!(result, Err(RouteError::InvalidId { .. })));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result: Result<Route, _> = "/adm/documentonecessario/edit/3/abc".parse();
        assert!(matches!(result, Err(RouteError::InvalidId { .. })));
    }

    #[test]
    fn test_unknown_route() {
        let result: Result<Route, _> = "/adm/usuarios".parse();
        assert_eq!(result, Err(RouteError::Unknown("/adm/usuarios".to_string())));
    }

    #[test]
    fn test_display_parses_back() {
        let routes = [
            Route::DocumentList,
            Route::DocumentEditor(None),
            Route::DocumentEditor(Some(12)),
            Route::RequirementList,
            Route::RequirementEditor(None),
            Route::RequirementEditor(Some(RequirementKey {
                document_type_id: 1,
                internship_type_id: 2,
            })),
        ];
        for route in routes {
            assert_eq!(route.to_string().parse(), Ok(route));
        }
    }

    #[test]
    fn test_list_route() {
        assert_eq!(Route::DocumentEditor(Some(5)).list_route(), Route::DocumentList);
        assert_eq!(
            Route::RequirementEditor(None).list_route(),
            Route::RequirementList
        );
        assert!(!Route::DocumentList.is_editor());
        assert!(Route::DocumentEditor(None).is_editor());
    }
}
