//! Server-rendered site for the IEEE student branch: public events pages,
//! event administration and hackathon team registration, backed by an
//! external REST API.

pub mod api;
pub mod config;
pub mod forms;
pub mod handlers;
pub mod io;
pub mod models;
pub mod pages;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;
