// SPDX-License-Identifier: Apache-2.0

use crate::http::render;
use crate::{detail, index, submission, AppState};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chamada_model::RECORD_HEADER;
use chamada_store::{RecordStore, StoreErrorCode};
use chrono::Local;
use std::collections::HashMap;
use tracing::{error, info};

pub(crate) async fn form_handler(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive().to_string();
    Html(render::submission_form(&state.roster, &today))
}

pub(crate) async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Some(activity) = form.get("atividade") else {
        return bad_request("missing form field atividade");
    };
    let Some(start_date) = form.get("data_inicio") else {
        return bad_request("missing form field data_inicio");
    };
    let Some(end_date) = form.get("data_fim") else {
        return bad_request("missing form field data_fim");
    };
    let Some(selected_tribes) = form.get("tribos_selecionadas") else {
        return bad_request("missing form field tribos_selecionadas");
    };

    let attendance = submission::collect_attendance(&state.roster, selected_tribes, &form);
    let (id, rows) = match submission::build_record(activity, start_date, end_date, &attendance) {
        Ok(built) => built,
        Err(err) => return bad_request(&err.to_string()),
    };
    if let Err(err) = state.store.write(&id, &rows) {
        error!(code = err.code.as_str(), "record write failed: {err}");
        return server_error();
    }
    info!(file = %id.file_name(), rows = rows.len(), "attendance record stored");
    Redirect::to("/atividades").into_response()
}

pub(crate) async fn activities_handler(State(state): State<AppState>) -> Response {
    let file_names = match state.store.list_file_names() {
        Ok(names) => names,
        Err(err) => {
            error!(code = err.code.as_str(), "record listing failed: {err}");
            return server_error();
        }
    };
    match index::build_index(file_names) {
        Ok(grouped) => Html(render::activities_index(&grouped)).into_response(),
        Err(err) => {
            error!("activity index failed: {err}");
            server_error()
        }
    }
}

pub(crate) async fn activity_detail_handler(
    State(state): State<AppState>,
    Path(ficheiro): Path<String>,
) -> Response {
    let (header, rows) = match state.store.read(&ficheiro) {
        Ok(record) => record,
        // A missing record renders as an empty one under the standard
        // header instead of failing the page.
        Err(err) if err.code == StoreErrorCode::NotFound => {
            (RECORD_HEADER.map(String::from).to_vec(), Vec::new())
        }
        Err(err) => {
            error!(code = err.code.as_str(), "record read failed: {err}");
            return server_error();
        }
    };
    let groups = detail::group_by_tribe(&state.roster, &rows);
    Html(render::activity_detail(&ficheiro, &header, &groups)).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, message.to_string()).into_response()
}

fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
}
