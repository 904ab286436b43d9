pub mod admin;
pub mod auth;
pub mod bids;
pub mod conversations;
pub mod gigs;
pub mod messages;
pub mod orders;
pub mod user_reviews;
pub mod users;

use actix_web::{HttpResponse, Responder, web};

/// GET /api/health — liveness plus env presence (no secrets echoed).
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "env": {
            "DATABASE_URL": std::env::var("DATABASE_URL").is_ok(),
            "JWT_KEY": std::env::var("JWT_KEY").is_ok(),
            "CLIENT_URL": std::env::var("CLIENT_URL").ok(),
            "STRIPE_SECRET_KEY": std::env::var("STRIPE_SECRET_KEY").is_ok(),
        },
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (public) ──
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(auth::register))
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout)),
    );

    // ── User routes (all protected — require valid token) ──
    cfg.service(
        web::resource("/users/{id}")
            .route(web::get().to(users::get_user))
            .route(web::put().to(users::update_user))
            .route(web::delete().to(users::delete_user)),
    );

    // ── Gig routes (listing and reads are public; writes are owner-scoped) ──
    cfg.service(
        web::scope("/gigs")
            .route("", web::get().to(gigs::get_gigs))
            .route("", web::post().to(gigs::create_gig))
            .route("/stats", web::get().to(gigs::get_seller_stats))
            .route("/single/{id}", web::get().to(gigs::get_gig))
            .route("/{id}/document", web::get().to(gigs::get_gig_document))
            .route("/{id}/like", web::post().to(gigs::toggle_like))
            .route("/{gig_id}/status", web::patch().to(gigs::update_gig_status))
            .route("/{id}", web::patch().to(gigs::update_gig))
            .route("/{id}", web::delete().to(gigs::delete_gig)),
    );

    // ── Bid routes (the workflow core) ──
    cfg.service(
        web::scope("/bids")
            .route("", web::post().to(bids::create_bid))
            .route("/approve/{bid_id}", web::post().to(bids::approve_bid))
            .route("/complete/{bid_id}", web::post().to(bids::complete_bid))
            .route("/gig/{id}/count", web::get().to(bids::count_bids_for_gig))
            .route("/gig/{id}", web::get().to(bids::list_bids_for_gig))
            .route("/my/gig/{id}", web::get().to(bids::my_bids_for_gig))
            .route("/owner/pending", web::get().to(bids::owner_pending_bids))
            .route("/owner/completed", web::get().to(bids::owner_completed_bids))
            .route("/me", web::get().to(bids::my_bids)),
    );

    // ── User review routes ──
    cfg.service(
        web::scope("/user-reviews")
            .route("", web::post().to(user_reviews::create_user_review))
            .route("/{user_id}", web::get().to(user_reviews::list_reviews_for_user)),
    );

    // ── Order routes (legacy payment path) ──
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(orders::get_orders))
            .route(
                "/create-payment-intent/{id}",
                web::post().to(orders::create_payment_intent),
            )
            .route("/confirm", web::put().to(orders::confirm_order)),
    );

    // ── Conversation / message routes ──
    cfg.service(
        web::scope("/conversations")
            .route("", web::post().to(conversations::create_conversation))
            .route("", web::get().to(conversations::get_conversations))
            .route("/single/{id}", web::get().to(conversations::get_conversation))
            .route("/{id}", web::put().to(conversations::mark_conversation_read)),
    );
    cfg.service(
        web::scope("/messages")
            .route("", web::post().to(messages::create_message))
            .route("/{conversation_id}", web::get().to(messages::get_messages)),
    );

    // ── Admin routes. No auth, matching the shipped behavior — a known
    // security hole, kept deliberately rather than silently tightened. ──
    cfg.service(
        web::scope("/admin")
            .route("/overview", web::get().to(admin::get_overview))
            .route("/users", web::get().to(admin::list_users))
            .route("/gigs", web::get().to(admin::list_gigs))
            .route("/users/{id}", web::delete().to(admin::delete_user))
            .route("/gigs/{id}", web::delete().to(admin::delete_gig)),
    );

    cfg.route("/health", web::get().to(health));
}
