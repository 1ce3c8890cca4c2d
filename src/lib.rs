pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod auth {
    pub mod handlers;
    pub mod middleware;
    pub mod models;
    pub mod password;
    pub mod session;
}
pub mod api {
    pub mod content;
    pub mod errors;
    pub mod extract;
    pub mod feed;
    pub mod health;
    pub mod response;
    pub mod upload;
}
pub mod content {
    pub mod pagination;
    pub mod payload;
    pub mod service;
}
pub mod feed {
    pub mod client;
}
pub mod storage {
    pub mod client;
    pub mod policy;
}
