// Caller identity as forwarded by the gateway in front of the service.
//
// The service does not authenticate. It trusts `x-user-id` and `x-user-role`
// and only decides what each role may do.

use axum::{extract::FromRequestParts, http::StatusCode, http::request::Parts};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Guest,
}

impl Role {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: String,
    pub role: Role,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let role = match parts.headers.get(USER_ROLE_HEADER) {
            None => Role::Guest,
            Some(raw) => raw
                .to_str()
                .ok()
                .and_then(Role::parse)
                .ok_or(StatusCode::UNAUTHORIZED)?,
        };

        Ok(Actor {
            user_id: user_id.to_string(),
            role,
        })
    }
}

/// `None` when no user id was forwarded; a malformed identity still rejects.
impl<S> axum::extract::OptionalFromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        if !parts.headers.contains_key(USER_ID_HEADER) {
            return Ok(None);
        }
        <Actor as FromRequestParts<S>>::from_request_parts(parts, state)
            .await
            .map(Some)
    }
}

/// An [`Actor`] that is known to be an admin. Rejects everyone else with 403.
#[derive(Debug, Clone)]
pub struct AdminActor(pub Actor);

impl<S> FromRequestParts<S> for AdminActor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let actor = Actor::from_request_parts(parts, state).await?;
        if !actor.is_admin() {
            tracing::warn!(user_id = %actor.user_id, "admin route refused");
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(AdminActor(actor))
    }
}

#[cfg(test)]
mod actor_tests {
    use super::*;
    use axum::http::Request;
    use rstest::rstest;

    async fn extract_actor(headers: &[(&str, &str)]) -> Result<Actor, StatusCode> {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Actor::from_request_parts(&mut parts, &()).await
    }

    async fn extract_admin(headers: &[(&str, &str)]) -> Result<AdminActor, StatusCode> {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AdminActor::from_request_parts(&mut parts, &()).await
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_the_admin_actor() {
        let actor = extract_actor(&[(USER_ID_HEADER, "u-1"), (USER_ROLE_HEADER, "Admin")])
            .await
            .unwrap();
        assert_eq!(actor.user_id, "u-1");
        assert!(actor.is_admin());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_default_to_guest_without_a_role() {
        let actor = extract_actor(&[(USER_ID_HEADER, "u-2")]).await.unwrap();
        assert_eq!(actor.role, Role::Guest);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_missing_user_id() {
        let result = extract_actor(&[(USER_ROLE_HEADER, "admin")]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_unknown_role() {
        let result = extract_actor(&[(USER_ID_HEADER, "u-3"), (USER_ROLE_HEADER, "root")]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_forbid_guests_on_admin_routes() {
        let result = extract_admin(&[(USER_ID_HEADER, "u-4"), (USER_ROLE_HEADER, "guest")]).await;
        assert_eq!(result.unwrap_err(), StatusCode::FORBIDDEN);
    }
}
