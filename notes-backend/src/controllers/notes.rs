//! Notes REST API — the CRUD surface over the in-memory NoteStore.
//!
//! GET    /api/notes        list all notes
//! GET    /api/notes/{id}   fetch one note, 404 (empty body) on miss
//! POST   /api/notes        create a note, 400 when content is missing
//! DELETE /api/notes/{id}   remove a note, 204 even when nothing matched

use actix_web::{web, HttpResponse, Responder};

use crate::models::CreateNoteRequest;
use crate::notes::StoreError;
use crate::AppState;

async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list())
}

async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match data.store.get(&id) {
        Some(note) => HttpResponse::Ok().json(note),
        None => HttpResponse::NotFound().finish(),
    }
}

async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let req = body.into_inner();
    log::debug!("create note request: {:?}", req);

    match data.store.create(req) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(err @ StoreError::ContentMissing) => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": err.to_string()
            }))
        }
    }
}

async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    data.store.delete(&id);
    HttpResponse::NoContent().finish()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
