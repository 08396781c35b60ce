use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use matcher::SearchCriterion;
use records::UserRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Multi-user response
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserRecord>,
}

impl UsersResponse {
    fn from_refs(users: Vec<&UserRecord>) -> Self {
        Self {
            users: users.into_iter().cloned().collect(),
        }
    }
}

/// Search request body
///
/// Accepts either a bare criteria array or an object wrapping it:
///
/// ```json
/// [{"field_name": "city", "field_value": "NYC"}]
/// {"criterias": [{"field_name": "city", "field_value": "NYC"}]}
/// ```
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchRequest {
    List(Vec<SearchCriterion>),
    Wrapped { criterias: Vec<SearchCriterion> },
}

impl SearchRequest {
    pub fn into_criteria(self) -> Vec<SearchCriterion> {
        match self {
            SearchRequest::List(criteria) | SearchRequest::Wrapped { criterias: criteria } => {
                criteria
            }
        }
    }
}

/// Fetch one user by id (`GET /user/{id}`)
pub async fn get_user(
    State(state): State<Arc<ServerState>>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<UserRecord>> {
    let id = userdir::parse_id(&raw_id)?;
    let user = state.store.get_by_id(id)?;
    Ok(Json(user.clone()))
}

/// Fetch several users by comma-separated ids (`GET /users/{ids}`)
///
/// Unknown ids are left out of the response; repeated ids appear once.
pub async fn get_users(
    State(state): State<Arc<ServerState>>,
    Path(raw_ids): Path<String>,
) -> ServerResult<Json<UsersResponse>> {
    let ids = userdir::parse_id_list(&raw_ids)?;
    let users = state.store.get_by_ids(&ids);

    tracing::debug!(requested = ids.len(), found = users.len(), "users_lookup");

    Ok(Json(UsersResponse::from_refs(users)))
}

/// Search users by field criteria (`POST /users/search`)
///
/// All criteria must hold. An empty result is reported as `NO_MATCH`.
pub async fn search_users(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> ServerResult<Json<UsersResponse>> {
    if body.is_empty() {
        return Err(ServerError::BadRequest("Request body is empty".to_string()));
    }

    let request: SearchRequest = serde_json::from_slice(&body)?;
    let criteria = request.into_criteria();
    let users = state.store.search(&criteria)?;

    Ok(Json(UsersResponse::from_refs(users)))
}
