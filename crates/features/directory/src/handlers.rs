use crate::error::DirectoryError;
use crate::{Directory, Snapshot};
use axum::Json;
use axum::extract::State;
use ipnt_derive::api_handler;
use ipnt_domain::constants::DIRECTORY_TAG;
use ipnt_kernel::prelude::ApiState;

#[api_handler(
    get,
    path = "/api/data",
    responses(
        (status = OK, description = "Site configuration with public nodes and members", body = Snapshot),
        (status = INTERNAL_SERVER_ERROR, description = "A data file is unreadable or malformed"),
    ),
    tag = DIRECTORY_TAG,
)]
pub(crate) async fn api_data(State(state): State<ApiState>) -> Result<Json<Snapshot>, DirectoryError> {
    let directory = state
        .try_get_slice::<Directory>()
        .map_err(|err| DirectoryError::from(err.to_string()))?;

    Ok(Json(directory.snapshot().await?))
}
