use crate::application::http::{
    authentication::router::AuthenticationApiDoc, fridge::router::FridgeApiDoc,
    shopping::router::ShoppingApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fridgely API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/fridge/items", api = FridgeApiDoc),
        (path = "/shopping", api = ShoppingApiDoc),
    )
)]
pub struct ApiDoc;
