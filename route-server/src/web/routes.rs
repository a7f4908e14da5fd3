//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::domain::{GraphError, Terminal};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network))
        .route("/route/distance", get(route_distance))
        .route("/route/shortest", get(shortest_route))
        .route("/routes", get(list_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Describe the loaded network.
async fn network(State(state): State<AppState>) -> Json<NetworkResponse> {
    Json(NetworkResponse::from_graph(state.planner.graph()))
}

fn parse_terminal(field: &str, value: &str) -> Result<Terminal, AppError> {
    Terminal::parse(value.trim()).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {field} terminal {value:?}: {e}"),
    })
}

/// Distance along an exact sequence of stops.
async fn route_distance(
    State(state): State<AppState>,
    Query(req): Query<RouteDistanceRequest>,
) -> Result<Json<RouteDistanceResponse>, AppError> {
    let stops = req
        .stops
        .split(',')
        .map(|s| parse_terminal("stop", s))
        .collect::<Result<Vec<_>, _>>()?;

    let distance = state.planner.route_distance(&stops);
    Ok(Json(RouteDistanceResponse { stops, distance }))
}

/// Run a search on the blocking pool, off the async workers.
async fn blocking<T, F>(search: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(search)
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Search task failed: {e}"),
        })?
}

/// Shortest route between two terminals.
async fn shortest_route(
    State(state): State<AppState>,
    Query(req): Query<ShortestRouteRequest>,
) -> Result<Json<ShortestRouteResponse>, AppError> {
    let start = parse_terminal("start", &req.start)?;
    let end = parse_terminal("end", &req.end)?;

    let planner = Arc::clone(&state.planner);
    let (from, to) = (start.clone(), end.clone());
    let (route, distance) =
        blocking(move || Ok(planner.shortest_route_with_length(&from, &to)?)).await?;

    Ok(Json(ShortestRouteResponse {
        start,
        end,
        distance,
        route,
    }))
}

/// The bound a route listing searches under.
#[derive(Debug, Clone, Copy)]
enum RouteLimit {
    AtMostStops(u64),
    ExactStops(u64),
    Distance(u64),
}

impl RouteLimit {
    fn from_request(req: &RoutesRequest) -> Result<Self, AppError> {
        match (req.max_stops, req.exact_stops, req.max_distance) {
            (Some(n), None, None) => Ok(RouteLimit::AtMostStops(n)),
            (None, Some(n), None) => Ok(RouteLimit::ExactStops(n)),
            (None, None, Some(n)) => Ok(RouteLimit::Distance(n)),
            _ => Err(AppError::BadRequest {
                message: "exactly one of max_stops, exact_stops or max_distance is required"
                    .to_string(),
            }),
        }
    }

    /// Reject bounds above the configured ceilings.
    fn check(self, config: &ServerConfig) -> Result<Self, AppError> {
        match self {
            RouteLimit::AtMostStops(n) | RouteLimit::ExactStops(n) if n > config.max_stops => {
                Err(AppError::BadRequest {
                    message: format!("stop bound {n} exceeds the limit of {}", config.max_stops),
                })
            }
            RouteLimit::Distance(n) if n > config.max_distance => Err(AppError::BadRequest {
                message: format!(
                    "distance bound {n} exceeds the limit of {}",
                    config.max_distance
                ),
            }),
            _ => Ok(self),
        }
    }
}

/// List routes under a stop or distance limit.
async fn list_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let start = parse_terminal("start", &req.start)?;
    let end = parse_terminal("end", &req.end)?;
    let limit = RouteLimit::from_request(&req)?.check(&state.config)?;

    let planner = Arc::clone(&state.planner);
    let routes = blocking(move || {
        let routes = match limit {
            RouteLimit::AtMostStops(n) => planner.routes_with_at_most_stops(&start, &end, n)?,
            RouteLimit::ExactStops(n) => planner.routes_with_exact_stops(&start, &end, n)?,
            RouteLimit::Distance(n) => planner.routes_with_distance_less_than(&start, &end, n)?,
        };
        debug!(%start, %end, ?limit, count = routes.len(), "Listed routes");
        Ok(routes)
    })
    .await?;

    Ok(Json(RoutesResponse {
        count: routes.len(),
        routes: routes.into_iter().collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownNode { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ADDR;
    use crate::planner::{RouteAnswer, RoutePlanner};

    const TOWN: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

    fn config() -> ServerConfig {
        ServerConfig::new(DEFAULT_ADDR.parse().unwrap())
    }

    fn state() -> AppState {
        AppState::new(RoutePlanner::from_edge_list(TOWN).unwrap(), config())
    }

    fn routes_request(
        start: &str,
        end: &str,
        limits: (Option<u64>, Option<u64>, Option<u64>),
    ) -> RoutesRequest {
        RoutesRequest {
            start: start.to_string(),
            end: end.to_string(),
            max_stops: limits.0,
            exact_stops: limits.1,
            max_distance: limits.2,
        }
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn distance_found() {
        let req = RouteDistanceRequest {
            stops: "A,E,B,C,D".to_string(),
        };
        let Json(resp) = route_distance(State(state()), Query(req)).await.unwrap();
        assert_eq!(resp.distance, RouteAnswer::Distance(22));
        assert_eq!(resp.stops.len(), 5);
    }

    #[tokio::test]
    async fn distance_no_such_route() {
        let req = RouteDistanceRequest {
            stops: "A, E, D".to_string(),
        };
        let Json(resp) = route_distance(State(state()), Query(req)).await.unwrap();
        assert_eq!(resp.distance, RouteAnswer::NoSuchRoute);
    }

    #[tokio::test]
    async fn distance_rejects_empty_stop() {
        let req = RouteDistanceRequest {
            stops: "A,,B".to_string(),
        };
        let err = route_distance(State(state()), Query(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn shortest_round_trip() {
        let req = ShortestRouteRequest {
            start: "B".to_string(),
            end: "B".to_string(),
        };
        let Json(resp) = shortest_route(State(state()), Query(req)).await.unwrap();
        assert_eq!(resp.distance, RouteAnswer::Distance(9));
        assert_eq!(resp.route.map(|p| p.to_string()), Some("B-C-E-B".to_string()));
    }

    #[tokio::test]
    async fn shortest_unknown_terminal_is_not_found() {
        let req = ShortestRouteRequest {
            start: "A".to_string(),
            end: "Z".to_string(),
        };
        let err = shortest_route(State(state()), Query(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_routes_by_limit() {
        let Json(resp) = list_routes(
            State(state()),
            Query(routes_request("C", "C", (Some(3), None, None))),
        )
        .await
        .unwrap();
        assert_eq!(resp.count, 2);

        let Json(resp) = list_routes(
            State(state()),
            Query(routes_request("A", "C", (None, Some(4), None))),
        )
        .await
        .unwrap();
        assert_eq!(resp.count, 3);

        let Json(resp) = list_routes(
            State(state()),
            Query(routes_request("C", "C", (None, None, Some(30)))),
        )
        .await
        .unwrap();
        assert_eq!(resp.count, 7);
        assert_eq!(resp.routes.len(), 7);
    }

    #[tokio::test]
    async fn list_routes_needs_one_limit() {
        for limits in [(None, None, None), (Some(3), Some(3), None)] {
            let err = list_routes(State(state()), Query(routes_request("C", "C", limits)))
                .await
                .unwrap_err();
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn list_routes_rejects_bounds_over_the_limit() {
        for limits in [
            (Some(40), None, None),
            (None, Some(40), None),
            (None, None, Some(10_000)),
        ] {
            let err = list_routes(State(state()), Query(routes_request("C", "C", limits)))
                .await
                .unwrap_err();
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn list_routes_accepts_bounds_at_the_limit() {
        let planner = RoutePlanner::from_edge_list(TOWN).unwrap();
        let state = AppState::new(planner, config().with_limits(3, 30));

        let Json(resp) = list_routes(
            State(state.clone()),
            Query(routes_request("C", "C", (Some(3), None, None))),
        )
        .await
        .unwrap();
        assert_eq!(resp.count, 2);

        let Json(resp) = list_routes(
            State(state.clone()),
            Query(routes_request("C", "C", (None, None, Some(30)))),
        )
        .await
        .unwrap();
        assert_eq!(resp.count, 7);

        let err = list_routes(
            State(state),
            Query(routes_request("C", "C", (Some(4), None, None))),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn network_lists_terminals() {
        let Json(resp) = network(State(state())).await;
        assert_eq!(resp.terminals.len(), 5);
        assert_eq!(resp.edges, 9);
    }

    #[test]
    fn app_error_from_graph_error() {
        let t = |s: &str| Terminal::parse(s).unwrap();
        let err: AppError = GraphError::UnknownNode { names: vec![t("Z")] }.into();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err: AppError = GraphError::NoSuchEdge {
            from: t("A"),
            to: t("C"),
        }
        .into();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }
}
