//! Route paths served by the API.

pub const GET_HEALTH: &str = "/health";
pub const GET_CHART_SERVICEFLOW: &str = "/chart/serviceflow";
pub const GET_CHART_SERVICEFLOW_ENTITY: &str = "/chart/serviceflow/{entity}";
pub const GET_CHART_SERVICESTATUS: &str = "/chart/servicestatus";
pub const GET_CHART_ENTITIES: &str = "/chart/entities";
