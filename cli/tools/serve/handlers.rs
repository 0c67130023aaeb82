use crate::proc_state::ProcState;
use auth::{is_authenticated, token_obtained_at, AuthError, CallbackParams};
use fixtures::reaction_counts;
use libs::chrono::Local;
use libs::fastrand::Rng;
use libs::log;
use libs::serde_json;
use libs::warp::http::{header, HeaderValue, StatusCode};
use libs::warp::reject::{InvalidQuery, PayloadTooLarge};
use libs::warp::reply::{self, Response};
use libs::warp::{Rejection, Reply};
use linkedin_model::Share;
use serde::Deserialize;
use session::LoadedSession;
use std::convert::Infallible;
use templates::{
    HomePage, MessagePage, Page, PostPage, PresetHelpPage, ProfilePage, SimulationPage,
};

#[derive(Deserialize, Default)]
pub struct PresetQuery {
    pub token: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct PostForm {
    #[serde(default)]
    pub message: String,
}

fn render<P: Page>(ps: &ProcState, page: &P, status: StatusCode) -> Response {
    match ps.hera.render(page) {
        Ok(body) => reply::with_status(reply::html(body), status).into_response(),
        Err(err) => {
            log::error!("Failed to render {}: {:#}", P::TEMPLATE, err);
            reply::with_status("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    }
}

fn not_found(ps: &ProcState) -> Response {
    let page = MessagePage::error("Not found", "There is nothing at this address.", None)
        .with_link("/", "Back home");
    render(ps, &page, StatusCode::NOT_FOUND)
}

pub fn status_for(err: &AuthError) -> StatusCode {
    match err {
        AuthError::MissingCode { .. } | AuthError::MissingToken | AuthError::StateMismatch => {
            StatusCode::BAD_REQUEST
        }
        AuthError::TokenExchange { .. } => StatusCode::BAD_GATEWAY,
        AuthError::InjectionDisabled => StatusCode::NOT_FOUND,
        AuthError::Configuration(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_page(ps: &ProcState, err: &AuthError) -> Response {
    if let AuthError::InjectionDisabled = err {
        return not_found(ps);
    }

    // The diagnostic goes to the page only.
    log::warn!("{}: {}", err.class(), err);
    let page = MessagePage::error(err.class(), err.to_string(), err.diagnostic().map(str::to_owned))
        .with_link("/", "Back home");
    render(ps, &page, status_for(err))
}

/// Loads the session behind the cookie, or a fresh one.
fn open_session(ps: &ProcState, cookie: Option<String>) -> Result<LoadedSession, Response> {
    ps.sessions.load(cookie.as_deref()).map_err(|err| {
        log::error!("Could not open session: {}", err);
        error_page(ps, &AuthError::Internal(err.to_string()))
    })
}

/// Stores the session and attaches its cookie when the browser doesn't have
/// it yet.
fn finish(ps: &ProcState, session: LoadedSession, mut response: Response) -> Response {
    if let Some(cookie) = ps.sessions.save(session) {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(err) => log::error!("Invalid session cookie header: {}", err),
        }
    }
    response
}

pub async fn index(ps: ProcState, cookie: Option<String>) -> Response {
    let mut session = match open_session(&ps, cookie) {
        Ok(session) => session,
        Err(response) => return response,
    };

    if ps.flow.preload_token(&mut session) {
        log::info!("Loaded the preset access token into the session");
    }

    let page = HomePage {
        authenticated: is_authenticated(&session),
        obtained_at: token_obtained_at(&session).map(|at| at.to_rfc3339()),
        injection_enabled: ps.flow.injection_enabled(),
    };
    let response = render(&ps, &page, StatusCode::OK);
    finish(&ps, session, response)
}

pub async fn login(ps: ProcState, cookie: Option<String>) -> Response {
    let mut session = match open_session(&ps, cookie) {
        Ok(session) => session,
        Err(response) => return response,
    };

    let response = match ps.flow.initiate_login(&mut session) {
        Ok(url) => match HeaderValue::from_str(&url) {
            Ok(location) => {
                let mut response = StatusCode::FOUND.into_response();
                response.headers_mut().insert(header::LOCATION, location);
                response
            }
            Err(err) => error_page(&ps, &AuthError::Internal(err.to_string())),
        },
        Err(err) => error_page(&ps, &err),
    };
    finish(&ps, session, response)
}

pub async fn callback(ps: ProcState, cookie: Option<String>, params: CallbackParams) -> Response {
    let mut session = match open_session(&ps, cookie) {
        Ok(session) => session,
        Err(response) => return response,
    };

    let response = match ps.flow.handle_callback(&mut session, &params).await {
        Ok(()) => {
            let page = MessagePage::success(
                "Logged in",
                "LinkedIn granted an access token. It is kept in your session.",
            )
            .with_link("/post", "Simulate a post");
            render(&ps, &page, StatusCode::OK)
        }
        Err(err) => error_page(&ps, &err),
    };
    finish(&ps, session, response)
}

pub async fn preset(ps: ProcState, cookie: Option<String>, query: PresetQuery) -> Response {
    if !ps.flow.injection_enabled() {
        return not_found(&ps);
    }

    let mut session = match open_session(&ps, cookie) {
        Ok(session) => session,
        Err(response) => return response,
    };

    let response = match ps.flow.inject_token(&mut session, query.token.as_deref()) {
        Ok(()) => {
            let page =
                MessagePage::success("Token stored", "The access token is now in your session.")
                    .with_link("/post", "Simulate a post");
            render(&ps, &page, StatusCode::OK)
        }
        Err(err) => error_page(&ps, &err),
    };
    finish(&ps, session, response)
}

pub async fn preset_help(ps: ProcState) -> Response {
    if !ps.flow.injection_enabled() {
        return not_found(&ps);
    }

    let page = PresetHelpPage {
        preset_configured: ps.flow.settings().preset_token.is_some(),
    };
    render(&ps, &page, StatusCode::OK)
}

pub async fn post_form(ps: ProcState, cookie: Option<String>) -> Response {
    let session = match open_session(&ps, cookie) {
        Ok(session) => session,
        Err(response) => return response,
    };

    let page = PostPage {
        authenticated: is_authenticated(&session),
    };
    let response = render(&ps, &page, StatusCode::OK);
    finish(&ps, session, response)
}

pub async fn submit_post(ps: ProcState, cookie: Option<String>, form: PostForm) -> Response {
    let session = match open_session(&ps, cookie) {
        Ok(session) => session,
        Err(response) => return response,
    };

    let share = Share::text(&ps.config.organization_id, form.message.as_str());
    let payload = serde_json::to_string_pretty(&share).unwrap_or_else(|err| {
        log::error!("Could not serialize share: {}", err);
        String::new()
    });

    let now = Local::now().naive_local();
    let engagement = ps.fixtures.engagement(now);
    let page = SimulationPage {
        message: form.message,
        payload,
        reactions: reaction_counts(&engagement),
        advocacy: ps.fixtures.advocacy(&mut Rng::new(), now),
        engagement,
        authenticated: is_authenticated(&session),
    };
    log::debug!("Simulated a post of {} characters", page.message.chars().count());

    let response = render(&ps, &page, StatusCode::OK);
    finish(&ps, session, response)
}

pub async fn profile(ps: ProcState, id: String) -> Response {
    match ps.fixtures.profile(&id) {
        Some(profile) => {
            let page = ProfilePage {
                profile: profile.clone(),
            };
            render(&ps, &page, StatusCode::OK)
        }
        None => not_found(&ps),
    }
}

pub async fn rejection(ps: ProcState, rejection: Rejection) -> Result<Response, Infallible> {
    if rejection.find::<PayloadTooLarge>().is_some() {
        let page = MessagePage::error("Post too long", "The message exceeds the size limit.", None)
            .with_link("/post", "Try again");
        return Ok(render(&ps, &page, StatusCode::PAYLOAD_TOO_LARGE));
    }

    if rejection.find::<InvalidQuery>().is_some()
        || rejection.find::<libs::warp::body::BodyDeserializeError>().is_some()
    {
        let page = MessagePage::error("Bad request", "The request could not be understood.", None)
            .with_link("/", "Back home");
        return Ok(render(&ps, &page, StatusCode::BAD_REQUEST));
    }

    Ok(not_found(&ps))
}
