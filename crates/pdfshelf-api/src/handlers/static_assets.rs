use axum::{
    http::header,
    response::{IntoResponse, Response},
};

const UPLOAD_JS: &str = include_str!("../../static/upload.js");
const STYLE_CSS: &str = include_str!("../../static/style.css");

pub async fn upload_js() -> Response {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        UPLOAD_JS,
    )
        .into_response()
}

pub async fn style_css() -> Response {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS).into_response()
}
