//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the board game and health endpoints together with
//! the schemas they exchange. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{BoardGame, BoardGameId, NewBoardGame};
use crate::inbound::http::error::ErrorMessage;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Board game catalogue API",
        description = "Create, list and fetch board games."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::board_games::list_board_games,
        crate::inbound::http::board_games::get_board_game,
        crate::inbound::http::board_games::create_board_game,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(BoardGame, BoardGameId, NewBoardGame, ErrorMessage)),
    tags(
        (name = "boardgames", description = "Board game catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn board_game_schema_uses_camel_case_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("BoardGame").expect("BoardGame schema");

        for field in ["id", "name", "level", "minPlayers", "maxPlayers", "gameType"] {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[test]
    fn error_message_schema_has_single_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("ErrorMessage").expect("ErrorMessage schema");

        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert_eq!(obj.properties.keys().collect::<Vec<_>>(), vec!["message"]);
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn board_game_paths_are_registered() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/boardgames"));
        assert!(doc.paths.paths.contains_key("/boardgames/{id}"));
    }
}
