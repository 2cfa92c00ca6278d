use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::dispatch::ContactDispatcher;
use crate::routes::contact::{contact, contact_schema, json_config};
use crate::routes::health::health_check;

pub fn run(listener: TcpListener, dispatcher: ContactDispatcher) -> Result<Server, std::io::Error> {
    let dispatcher = web::Data::new(dispatcher);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .route("/health", web::get().to(health_check))
            .route("/api/contact", web::post().to(contact))
            .route("/api/contact/schema", web::get().to(contact_schema))
            .app_data(dispatcher.clone())
    })
    .listen(listener)?
    .run())
}
