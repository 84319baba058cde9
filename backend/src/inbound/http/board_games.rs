//! Board game catalogue handlers.
//!
//! ```text
//! GET  /boardgames
//! GET  /boardgames/{id}
//! POST /boardgames {"name":"Catan","level":2,"minPlayers":3,"maxPlayers":"4","gameType":"Strategy Game"}
//! ```
//!
//! Handlers translate requests into repository calls and nothing more.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::error;

use crate::domain::ports::BoardGameRepositoryError;
use crate::domain::{BoardGame, BoardGameId, Error, NewBoardGame};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{
    ErrorMessage, INTERNAL_ERROR_MESSAGE, json_error_handler, path_not_found_handler,
};
use crate::inbound::http::state::HttpState;

/// Message returned when no record has the requested id.
pub const NO_SUCH_RECORD: &str = "No such record";
/// Message returned when a create collides with an existing name.
pub const NAME_ALREADY_EXISTS: &str = "Name already exists.";
/// Route name of the single-resource endpoint, used to build `Location`.
pub const BOARD_GAME_ROUTE: &str = "board_game";

const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

fn map_repository_error(err: BoardGameRepositoryError) -> Error {
    match err {
        BoardGameRepositoryError::NameConflict { .. } => Error::conflict(NAME_ALREADY_EXISTS),
        BoardGameRepositoryError::Connection { .. } => {
            Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
        }
        BoardGameRepositoryError::Query { .. } => Error::internal(INTERNAL_ERROR_MESSAGE),
    }
}

/// Register the board game routes together with the extractor settings
/// that give their failures the shared error body.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use boardgames::inbound::http::board_games;
///
/// let app = App::new().configure(board_games::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_not_found_handler(NO_SUCH_RECORD)))
        .service(list_board_games)
        .service(get_board_game)
        .service(create_board_game);
}

/// List every board game.
#[utoipa::path(
    get,
    path = "/boardgames",
    responses(
        (status = 200, description = "All board games", body = [BoardGame]),
        (status = 500, description = "Internal server error", body = ErrorMessage),
        (status = 503, description = "Storage unavailable", body = ErrorMessage)
    ),
    tags = ["boardgames"],
    operation_id = "listBoardGames"
)]
#[get("/boardgames")]
pub async fn list_board_games(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BoardGame>>> {
    let games = state
        .board_games
        .list_all()
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(games))
}

/// Fetch one board game by id.
#[utoipa::path(
    get,
    path = "/boardgames/{id}",
    params(("id" = i64, Path, description = "Board game identifier")),
    responses(
        (status = 200, description = "The board game", body = BoardGame),
        (status = 404, description = "No such record", body = ErrorMessage),
        (status = 500, description = "Internal server error", body = ErrorMessage),
        (status = 503, description = "Storage unavailable", body = ErrorMessage)
    ),
    tags = ["boardgames"],
    operation_id = "getBoardGame"
)]
#[get("/boardgames/{id}", name = "board_game")]
pub async fn get_board_game(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<BoardGame>> {
    let id = BoardGameId::new(path.into_inner());
    state
        .board_games
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(NO_SUCH_RECORD))
}

/// Add a board game. Storage assigns the id.
#[utoipa::path(
    post,
    path = "/boardgames",
    request_body(content = NewBoardGame, content_type = "application/json"),
    responses(
        (
            status = 201,
            description = "Board game created",
            body = BoardGame,
            headers(("Location" = String, description = "URL of the new board game"))
        ),
        (status = 400, description = "Malformed body", body = ErrorMessage),
        (status = 409, description = "Name already exists.", body = ErrorMessage),
        (status = 415, description = "Body is not JSON", body = ErrorMessage),
        (status = 500, description = "Internal server error", body = ErrorMessage),
        (status = 503, description = "Storage unavailable", body = ErrorMessage)
    ),
    tags = ["boardgames"],
    operation_id = "createBoardGame"
)]
#[post("/boardgames")]
pub async fn create_board_game(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<NewBoardGame>,
) -> ApiResult<HttpResponse> {
    let game = payload.into_inner();
    let id = state
        .board_games
        .insert(&game)
        .await
        .map_err(map_repository_error)?;

    let location = req
        .url_for(BOARD_GAME_ROUTE, [id.to_string()])
        .map_err(|err| {
            error!(error = %err, %id, "failed to build board game location");
            Error::internal(INTERNAL_ERROR_MESSAGE)
        })?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .json(game.into_persisted(id)))
}
