use super::handlers;
use crate::proc_state::ProcState;
use auth::CallbackParams;
use libs::warp::{self, Filter, Rejection, Reply};
use session::SESSION_COOKIE;
use std::convert::Infallible;

/// Form posts larger than this are refused.
const MAX_FORM_BYTES: u64 = 16 * 1024;

fn with_state(ps: ProcState) -> impl Filter<Extract = (ProcState,), Error = Infallible> + Clone {
    warp::any().map(move || ps.clone())
}

fn session_cookie() -> impl Filter<Extract = (Option<String>,), Error = Infallible> + Clone {
    warp::cookie::optional::<String>(SESSION_COOKIE)
}

pub fn routes(ps: ProcState) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .and(with_state(ps.clone()))
        .and(session_cookie())
        .then(handlers::index);

    let login = warp::path!("login")
        .and(warp::get())
        .and(with_state(ps.clone()))
        .and(session_cookie())
        .then(handlers::login);

    let callback = warp::path!("callback")
        .and(warp::get())
        .and(with_state(ps.clone()))
        .and(session_cookie())
        .and(warp::query::<CallbackParams>())
        .then(handlers::callback);

    let preset = warp::path!("preset")
        .and(warp::get())
        .and(with_state(ps.clone()))
        .and(session_cookie())
        .and(warp::query::<handlers::PresetQuery>())
        .then(handlers::preset);

    let preset_help = warp::path!("preset_help")
        .and(warp::get())
        .and(with_state(ps.clone()))
        .then(handlers::preset_help);

    let post_form = warp::path!("post")
        .and(warp::get())
        .and(with_state(ps.clone()))
        .and(session_cookie())
        .then(handlers::post_form);

    let submit_post = warp::path!("submit_post")
        .and(warp::post())
        .and(with_state(ps.clone()))
        .and(session_cookie())
        .and(warp::body::content_length_limit(MAX_FORM_BYTES))
        .and(warp::body::form::<handlers::PostForm>())
        .then(handlers::submit_post);

    let profile = warp::path!("profile" / String)
        .and(warp::get())
        .and(with_state(ps.clone()))
        .then(|id: String, ps: ProcState| handlers::profile(ps, id));

    index
        .or(login)
        .or(callback)
        .or(preset)
        .or(preset_help)
        .or(post_form)
        .or(submit_post)
        .or(profile)
        .recover(move |rejection: Rejection| handlers::rejection(ps.clone(), rejection))
        .with(warp::log("engage::http"))
}
