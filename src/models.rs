use serde::{Deserialize, Serialize};

// Contact form payload, unknown fields are ignored
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

// Success body for POST /api/contact
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
}

// Body for GET /api/contact
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub ok: bool,
    pub route: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}
