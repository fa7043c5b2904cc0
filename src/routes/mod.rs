use actix_web::web;

pub mod backend_health;
pub mod index;
pub mod matches;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(index::index);

    cfg.service(
        web::scope("/api")
            .service(matches::list_matches)
            .service(matches::create_match)
            .service(matches::get_match)
            .service(matches::update_match)
            .service(matches::delete_match)
            .service(matches::register_goal)
            .service(matches::register_yellow_card)
            .service(matches::register_red_card)
            .service(matches::set_extra_time)
            .service(matches::list_goals)
            .service(matches::list_cards)
    );
}
