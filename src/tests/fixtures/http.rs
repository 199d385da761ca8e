// Request helpers for driving routers with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;

use crate::shared::inbound::actor::{USER_ID_HEADER, USER_ROLE_HEADER};

/// `(user id, role)` as the gateway would forward them.
pub type Caller = (&'static str, &'static str);

pub const ADMIN: Caller = ("admin-1", "admin");
pub const GUEST: Caller = ("guest-1", "guest");

fn builder(method: &str, uri: &str, caller: Option<Caller>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((user_id, role)) = caller {
        builder = builder
            .header(USER_ID_HEADER, user_id)
            .header(USER_ROLE_HEADER, role);
    }
    builder
}

pub fn json_request(method: &str, uri: &str, caller: Option<Caller>, body: &str) -> Request<Body> {
    builder(method, uri, caller)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, caller: Option<Caller>) -> Request<Body> {
    builder(method, uri, caller).body(Body::empty()).unwrap()
}

pub fn get_request(uri: &str, caller: Option<Caller>) -> Request<Body> {
    empty_request("GET", uri, caller)
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
