use crate::handler::reservation::{
    cancel_reservation, register_reservation, show_reservation, show_reservation_list,
    show_reservations_by_court, show_reservations_by_user, update_reservation,
};
use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_reservation).get(show_reservation_list))
        .route(
            "/:reservation_id",
            get(show_reservation)
                .put(update_reservation)
                .delete(cancel_reservation),
        )
        .route("/user/:user_id", get(show_reservations_by_user))
        .route("/court/:court_id", get(show_reservations_by_court));

    Router::new().nest("/reservations", routers)
}
